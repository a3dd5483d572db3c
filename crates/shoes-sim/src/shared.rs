//! A mutex-guarded engine handle for hosts that tick from another thread.

use std::sync::{Arc, Mutex, PoisonError};

use shoes_core::SimTime;

use crate::{EmergencyAlert, SimulationEngine, Snapshot};

/// Cloneable handle to one [`SimulationEngine`] behind a single mutex.
///
/// Each cadence invocation is one critical section: a slow tick holds the
/// lock across all four updates, so `update_speed -> update_gps` never
/// interleaves with a fast-tick history append from another thread.
///
/// A panic while holding the lock leaves the engine invariants intact (every
/// update writes whole fields), so a poisoned lock is recovered rather than
/// propagated.
#[derive(Clone)]
pub struct SharedEngine {
    inner: Arc<Mutex<SimulationEngine>>,
}

impl SharedEngine {
    pub fn new(engine: SimulationEngine) -> Self {
        Self { inner: Arc::new(Mutex::new(engine)) }
    }

    /// Run `f` with exclusive access to the engine.
    pub fn with<T>(&self, f: impl FnOnce(&mut SimulationEngine) -> T) -> T {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut *guard)
    }

    pub fn fast_tick(&self, now: SimTime) {
        self.with(|e| e.fast_tick(now));
    }

    pub fn slow_tick(&self) {
        self.with(SimulationEngine::slow_tick);
    }

    pub fn snapshot(&self) -> Snapshot {
        self.with(|e| e.snapshot())
    }

    pub fn trigger_emergency(&self) -> EmergencyAlert {
        self.with(|e| e.trigger_emergency())
    }
}

impl From<SimulationEngine> for SharedEngine {
    fn from(engine: SimulationEngine) -> Self {
        Self::new(engine)
    }
}
