//! The `SimulationEngine`: all simulated wearer state and its update rules.

use log::{debug, trace, warn};

use shoes_core::{GeoBounds, GeoPoint, SimRng, SimTime};
use shoes_sensor::{HistoryBuffer, Scenario, SensorReading, Zone};

use crate::{EmergencyAlert, OperationMode, Sensitivity, Snapshot, SystemStatus};

// ── Tuning constants ──────────────────────────────────────────────────────────

/// Center distance below which the wearer is considered to be walking.
const MOVING_BELOW_CM: u16 = 200;

/// Center distance above which a moving wearer may take 2 steps per tick.
const BRISK_ABOVE_CM: u16 = 150;

const STEP_PROBABILITY_MOVING:     f64 = 0.4;
const STEP_PROBABILITY_STATIONARY: f64 = 0.15;

const BATTERY_DRAIN_PROBABILITY: f64 = 0.05;
const BATTERY_DRAIN_PERCENT:     f64 = 0.1;

/// Converts km/h into degrees of drift per slow tick.
const DEGREES_PER_KMH: f64 = 1.0 / 100_000.0;

/// North-east heading: latitude and longitude shares of the drift.
const LAT_SHARE:   f64 = 0.8;
const LON_SHARE:   f64 = 1.2;
/// Width of the GPS noise relative to the drift.
const GPS_NOISE:   f64 = 0.2;

// ── SimulationEngine ──────────────────────────────────────────────────────────

/// Owns the complete simulation state and advances it one tick at a time.
///
/// None of the update operations can fail.  Invariants maintained across any
/// sequence of calls:
///
/// - `current` distances stay within their sensor ranges (see
///   [`SensorReading`]);
/// - `step_count` and `distance_walked_m` never decrease;
/// - `battery_level` never increases and never drops below 0;
/// - `position` stays inside `bounds`;
/// - `history` never holds more than its capacity.
///
/// Create with [`SimulationEngine::new`] or [`EngineBuilder`][crate::EngineBuilder].
#[derive(Clone, Debug)]
pub struct SimulationEngine {
    rng:            SimRng,
    step_count:     u64,
    battery_level:  f64,
    walking_speed:  f64,
    /// Metres covered by GPS drift since construction.
    distance_walked_m: f64,
    current:        SensorReading,
    position:       GeoPoint,
    bounds:         GeoBounds,
    history:        HistoryBuffer,
    operation_mode: OperationMode,
    sensitivity:    Sensitivity,
    last_scenario:  Option<Scenario>,
}

impl SimulationEngine {
    /// Engine with default settings (Seoul start, 20-entry history) seeded
    /// with `seed`.
    pub fn new(seed: u64) -> Self {
        Self::from_parts(
            SimRng::new(seed),
            GeoPoint::DEMO_START,
            GeoBounds::SEOUL_DEMO,
            HistoryBuffer::default(),
            OperationMode::default(),
            Sensitivity::default(),
        )
    }

    /// Assemble an engine from already-validated parts.
    pub(crate) fn from_parts(
        rng:            SimRng,
        position:       GeoPoint,
        bounds:         GeoBounds,
        history:        HistoryBuffer,
        operation_mode: OperationMode,
        sensitivity:    Sensitivity,
    ) -> Self {
        Self {
            rng,
            step_count:    0,
            battery_level: 100.0,
            walking_speed: 0.0,
            distance_walked_m: 0.0,
            current:       SensorReading::initial(),
            position,
            bounds,
            history,
            operation_mode,
            sensitivity,
            last_scenario: None,
        }
    }

    // ── Fast cadence ──────────────────────────────────────────────────────

    /// Synthesize one sensor reading for instant `now` and append it to the
    /// history.
    pub fn generate_reading(&mut self, now: SimTime) {
        let scenario = Scenario::at(now);
        let progress = Scenario::progress(now);

        if self.last_scenario != Some(scenario) {
            debug!("scenario -> {scenario} at {now}");
            self.last_scenario = Some(scenario);
        }

        let raw = scenario.raw_signal(now.as_secs_f64(), progress, &mut self.rng);
        let reading = SensorReading::from_raw(raw, now);
        trace!(
            "{now}: L{} C{} R{} D{}",
            reading.left, reading.center, reading.right, reading.down
        );

        self.current = reading;
        self.history.push(reading);
    }

    /// Everything that runs on the fast cadence.
    #[inline]
    pub fn fast_tick(&mut self, now: SimTime) {
        self.generate_reading(now);
    }

    // ── Slow cadence ──────────────────────────────────────────────────────

    /// Advance the step counter.
    ///
    /// The wearer counts as moving while something is ahead (`center` under
    /// 200 cm).  Moving: 40 % chance of 1 step, or 1–2 steps when the
    /// obstacle is still beyond 150 cm.  Stationary: 15 % chance of 1 step.
    pub fn update_steps(&mut self) {
        let center = self.current.center;
        if center < MOVING_BELOW_CM {
            if self.rng.gen_bool(STEP_PROBABILITY_MOVING) {
                let max_steps: u64 = if center > BRISK_ABOVE_CM { 2 } else { 1 };
                self.step_count += self.rng.gen_range(1..=max_steps);
            }
        } else if self.rng.gen_bool(STEP_PROBABILITY_STATIONARY) {
            self.step_count += 1;
        }
    }

    /// 5 % chance of draining 0.1 %, floored at 0.  No charging.
    pub fn update_battery(&mut self) {
        if !self.rng.gen_bool(BATTERY_DRAIN_PROBABILITY) {
            return;
        }
        let before = SystemStatus::from_battery(self.battery_level);
        self.battery_level = (self.battery_level - BATTERY_DRAIN_PERCENT).max(0.0);
        let after = SystemStatus::from_battery(self.battery_level);

        if before != after {
            warn!("battery at {:.1}%: status {before} -> {after}", self.battery_level);
        }
    }

    /// Pick a walking speed from the bucket of the closest horizontal
    /// obstacle, rounded to one decimal (km/h).
    pub fn update_speed(&mut self) {
        let closest = self.current.min_horizontal();
        let speed: f64 = match closest {
            201.. => self.rng.gen_range(4.0..5.5),
            101.. => self.rng.gen_range(2.5..4.0),
            51..  => self.rng.gen_range(1.0..2.0),
            _     => self.rng.gen_range(0.3..1.0),
        };
        self.walking_speed = (speed * 10.0).round() / 10.0;
    }

    /// Drift the GPS fix north-east in proportion to the current speed,
    /// with a little noise, then clamp into the bounding box.  The distance
    /// actually covered (after clamping) is added to the odometer.
    pub fn update_gps(&mut self) {
        let drift = self.walking_speed * DEGREES_PER_KMH;
        let next = GeoPoint {
            lat: self.position.lat + drift * LAT_SHARE + self.rng.jitter(drift * GPS_NOISE),
            lon: self.position.lon + drift * LON_SHARE + self.rng.jitter(drift * GPS_NOISE),
        };
        let next = self.bounds.clamp(next);
        self.distance_walked_m += self.position.distance_m(next);
        self.position = next;
    }

    /// Everything that runs on the slow cadence, in dependency order: speed
    /// must be recomputed before GPS consumes it.
    pub fn slow_tick(&mut self) {
        self.update_steps();
        self.update_battery();
        self.update_speed();
        self.update_gps();
    }

    // ── Configuration (advisory) ──────────────────────────────────────────

    /// Stored and reported; does not change generation.
    pub fn set_operation_mode(&mut self, mode: OperationMode) {
        if mode != self.operation_mode {
            debug!("operation mode -> {mode}: {}", mode.description());
        }
        self.operation_mode = mode;
    }

    /// Stored and reported; does not change generation.
    pub fn set_sensitivity(&mut self, sensitivity: Sensitivity) {
        self.sensitivity = sensitivity;
    }

    // ── Reads ─────────────────────────────────────────────────────────────

    /// Zone tier of a distance.  Pure.
    #[inline]
    pub fn classify_zone(distance_cm: f64) -> Zone {
        Zone::classify(distance_cm)
    }

    /// Package the current state as an emergency alert and log it.
    pub fn trigger_emergency(&self) -> EmergencyAlert {
        let alert = EmergencyAlert::from_snapshot(&self.snapshot());
        warn!("{alert}");
        alert
    }

    /// Owned copy of the full state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            step_count:     self.step_count,
            battery_level:  self.battery_level,
            walking_speed:  self.walking_speed,
            distance_walked_m: self.distance_walked_m,
            distances:      self.current,
            gps:            self.position,
            history:        self.history.to_vec(),
            operation_mode: self.operation_mode,
            sensitivity:    self.sensitivity,
            status:         self.status(),
            scenario:       self.last_scenario,
            closest:        self.current.closest().0,
        }
    }

    #[inline]
    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    #[inline]
    pub fn battery_level(&self) -> f64 {
        self.battery_level
    }

    #[inline]
    pub fn walking_speed(&self) -> f64 {
        self.walking_speed
    }

    #[inline]
    pub fn distance_walked_m(&self) -> f64 {
        self.distance_walked_m
    }

    #[inline]
    pub fn current(&self) -> &SensorReading {
        &self.current
    }

    #[inline]
    pub fn position(&self) -> GeoPoint {
        self.position
    }

    #[inline]
    pub fn bounds(&self) -> &GeoBounds {
        &self.bounds
    }

    #[inline]
    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    #[inline]
    pub fn operation_mode(&self) -> OperationMode {
        self.operation_mode
    }

    #[inline]
    pub fn sensitivity(&self) -> Sensitivity {
        self.sensitivity
    }

    #[inline]
    pub fn status(&self) -> SystemStatus {
        SystemStatus::from_battery(self.battery_level)
    }

    #[inline]
    pub fn last_scenario(&self) -> Option<Scenario> {
        self.last_scenario
    }
}
