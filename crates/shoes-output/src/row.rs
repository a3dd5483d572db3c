//! Plain data row types written by output backends.

use shoes_core::Tick;
use shoes_sensor::{Scenario, SensorReading};
use shoes_sim::SimulationEngine;

/// One sensor reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadingRow {
    pub tick:         u64,
    pub timestamp_ms: u64,
    pub scenario:     Scenario,
    pub left:         u16,
    pub center:       u16,
    pub right:        u16,
    pub down:         u16,
}

impl ReadingRow {
    pub fn new(tick: Tick, reading: &SensorReading) -> Self {
        Self {
            tick:         tick.0,
            timestamp_ms: reading.timestamp.as_millis(),
            scenario:     Scenario::at(reading.timestamp),
            left:         reading.left,
            center:       reading.center,
            right:        reading.right,
            down:         reading.down,
        }
    }
}

/// Derived metrics after one slow tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricsRow {
    pub tick:          u64,
    pub timestamp_ms:  u64,
    pub step_count:    u64,
    pub battery_level: f64,
    pub walking_speed: f64,
    pub lat:           f64,
    pub lon:           f64,
    pub distance_walked_m: f64,
}

impl MetricsRow {
    /// Capture the engine's slow-cadence fields.  The timestamp is that of
    /// the latest reading, i.e. the instant of this tick.
    pub fn from_engine(tick: Tick, engine: &SimulationEngine) -> Self {
        let position = engine.position();
        Self {
            tick:          tick.0,
            timestamp_ms:  engine.current().timestamp.as_millis(),
            step_count:    engine.step_count(),
            battery_level: engine.battery_level(),
            walking_speed: engine.walking_speed(),
            lat:           position.lat,
            lon:           position.lon,
            distance_walked_m: engine.distance_walked_m(),
        }
    }
}
