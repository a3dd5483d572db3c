//! Emergency alert raised by the wearer.

use shoes_core::{GeoPoint, SimTime};
use shoes_sensor::Direction;

use crate::Snapshot;

/// What gets shared with emergency contacts when the wearer presses the
/// emergency button: where, when, and what the shoes were sensing.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EmergencyAlert {
    /// Instant of the latest reading.
    pub at:                SimTime,
    pub location:          GeoPoint,
    pub battery_level:     f64,
    pub step_count:        u64,
    pub distance_walked_m: f64,
    /// Nearest horizontal obstacle.
    pub closest:           Direction,
    pub closest_cm:        u16,
}

impl EmergencyAlert {
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        Self {
            at:                snapshot.distances.timestamp,
            location:          snapshot.gps,
            battery_level:     snapshot.battery_level,
            step_count:        snapshot.step_count,
            distance_walked_m: snapshot.distance_walked_m,
            closest:           snapshot.closest,
            closest_cm:        snapshot.distances.distance(snapshot.closest),
        }
    }
}

impl std::fmt::Display for EmergencyAlert {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "EMERGENCY at {}: location {} shared with emergency contacts \
             (battery {:.1}%, nearest obstacle {} {} cm)",
            self.at, self.location, self.battery_level, self.closest, self.closest_cm
        )
    }
}
