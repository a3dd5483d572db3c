//! The `Sim` struct: a stepped host loop driving both cadences.

use log::info;

use shoes_core::{SimClock, SimConfig};

use crate::{DashboardObserver, SimulationEngine};

/// Stepped runner for a [`SimulationEngine`].
///
/// Each iteration advances the clock by one fast interval and then:
///
/// 1. **Fast tick**: `engine.fast_tick(now)`.
/// 2. **Slow tick**: `engine.slow_tick()` when the elapsed time is a
///    multiple of `slow_interval_ms`.  At coincident instants the fast tick
///    always runs first.
/// 3. **Snapshot**: every `snapshot_interval_ticks` ticks.
///
/// Tick `n` therefore happens at `start + n * fast_interval_ms`, matching a
/// timer whose first firing is one interval after start.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    pub config: SimConfig,

    /// Tracks the current tick and maps it to `SimTime`.
    pub clock: SimClock,

    pub engine: SimulationEngine,
}

impl Sim {
    /// Run until `config.end_tick()`.
    pub fn run<O: DashboardObserver>(&mut self, observer: &mut O) {
        info!(
            "simulation start: {} ticks of {} ms, seed {}",
            self.config.total_ticks, self.config.fast_interval_ms, self.config.seed
        );
        while self.clock.current_tick < self.config.end_tick() {
            self.process_tick(observer);
        }
        observer.on_sim_end(self.clock.current_tick);
        info!(
            "simulation end at {}: {} steps, battery {:.1}%",
            self.clock,
            self.engine.step_count(),
            self.engine.battery_level()
        );
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.  Does not call
    /// `on_sim_end`.
    pub fn run_ticks<O: DashboardObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.process_tick(observer);
        }
    }

    fn process_tick<O: DashboardObserver>(&mut self, observer: &mut O) {
        self.clock.advance();
        let tick = self.clock.current_tick;
        let now = self.clock.current_time();

        self.engine.fast_tick(now);
        observer.on_fast_tick(tick, &self.engine);

        if self.clock.elapsed_ms().is_multiple_of(self.config.slow_interval_ms as u64) {
            self.engine.slow_tick();
            observer.on_slow_tick(tick, &self.engine);
        }

        if self.config.snapshot_interval_ticks > 0
            && tick.0.is_multiple_of(self.config.snapshot_interval_ticks)
        {
            observer.on_snapshot(tick, &self.engine.snapshot());
        }
    }
}
