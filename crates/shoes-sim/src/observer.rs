//! The presentation-adapter contract.

use shoes_core::Tick;

use crate::{SimulationEngine, Snapshot};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] after each cadence.
///
/// This is the seam where a dashboard, chart, or file writer plugs in.  All
/// methods have default no-op implementations so implementors only need to
/// override what they care about.  Engine access is read-only.
///
/// # Example: closest-obstacle printer
///
/// ```rust,ignore
/// struct Closest;
///
/// impl DashboardObserver for Closest {
///     fn on_fast_tick(&mut self, tick: Tick, engine: &SimulationEngine) {
///         let (dir, cm) = engine.current().closest();
///         println!("{tick}: nearest {dir} at {cm} cm");
///     }
/// }
/// ```
pub trait DashboardObserver {
    /// Called after each fast tick (new reading in `engine.current()`).
    fn on_fast_tick(&mut self, _tick: Tick, _engine: &SimulationEngine) {}

    /// Called after each slow tick (steps, battery, speed, GPS refreshed).
    fn on_slow_tick(&mut self, _tick: Tick, _engine: &SimulationEngine) {}

    /// Called every `config.snapshot_interval_ticks` fast ticks with an
    /// owned copy of the state.
    fn on_snapshot(&mut self, _tick: Tick, _snapshot: &Snapshot) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`DashboardObserver`] that does nothing.
pub struct NoopObserver;

impl DashboardObserver for NoopObserver {}
