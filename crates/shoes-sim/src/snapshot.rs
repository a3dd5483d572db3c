//! Read-only copy of engine state handed to presentation adapters.

use shoes_core::GeoPoint;
use shoes_sensor::{Direction, Scenario, SensorReading, Zone};

use crate::{OperationMode, Sensitivity, SystemStatus};

/// Everything a dashboard needs to redraw, detached from the engine.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    pub step_count:     u64,
    /// Percent, [0, 100].
    pub battery_level:  f64,
    /// km/h, one decimal.
    pub walking_speed:  f64,
    /// Metres covered since the engine was built.
    pub distance_walked_m: f64,
    pub distances:      SensorReading,
    pub gps:            GeoPoint,
    /// Recent readings, oldest first, at most the engine's history capacity.
    pub history:        Vec<SensorReading>,
    pub operation_mode: OperationMode,
    pub sensitivity:    Sensitivity,
    pub status:         SystemStatus,
    /// Scenario of the latest fast tick; `None` before the first one.
    pub scenario:       Option<Scenario>,
    /// Horizontal sensor with the nearest obstacle.
    pub closest:        Direction,
}

impl Snapshot {
    /// Distance and zone for each of the four sensors, in display order.
    pub fn zones(&self) -> [(Direction, u16, Zone); 4] {
        Direction::ALL.map(|d| (d, self.distances.distance(d), self.distances.zone(d)))
    }

    /// Battery rounded to a whole percent, as shown on the gauge.
    pub fn battery_percent(&self) -> u8 {
        self.battery_level.round().clamp(0.0, 100.0) as u8
    }
}
