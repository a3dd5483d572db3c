//! Fluent builders for [`SimulationEngine`] and [`Sim`].

use shoes_core::{GeoBounds, GeoPoint, SimConfig, SimRng};
use shoes_sensor::HistoryBuffer;
use shoes_sensor::history::DEFAULT_HISTORY_CAPACITY;

use crate::{OperationMode, Sensitivity, Sim, SimError, SimResult, SimulationEngine};

// ── EngineBuilder ─────────────────────────────────────────────────────────────

/// Fluent builder for [`SimulationEngine`].
///
/// | Method                 | Default                          |
/// |------------------------|----------------------------------|
/// | `.seed(s)` / `.rng(r)` | `SimRng::new(42)`                |
/// | `.start_position(p)`   | `GeoPoint::DEMO_START`           |
/// | `.bounds(b)`           | `GeoBounds::SEOUL_DEMO`          |
/// | `.history_capacity(n)` | 20                               |
/// | `.operation_mode(m)`   | `OperationMode::Normal`          |
/// | `.sensitivity(s)`      | 50 %                             |
///
/// # Example
///
/// ```rust,ignore
/// let engine = EngineBuilder::new()
///     .seed(7)
///     .history_capacity(40)
///     .build()?;
/// ```
#[derive(Clone, Debug)]
pub struct EngineBuilder {
    rng:              Option<SimRng>,
    seed:             u64,
    start_position:   GeoPoint,
    bounds:           GeoBounds,
    history_capacity: usize,
    operation_mode:   OperationMode,
    sensitivity:      Sensitivity,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self {
            rng:              None,
            seed:             42,
            start_position:   GeoPoint::DEMO_START,
            bounds:           GeoBounds::SEOUL_DEMO,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            operation_mode:   OperationMode::default(),
            sensitivity:      Sensitivity::default(),
        }
    }

    /// Seed the engine's RNG.  Ignored if [`rng`][Self::rng] is also set.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Inject a ready-made RNG (e.g. `SimRng::from_entropy()` for live runs).
    pub fn rng(mut self, rng: SimRng) -> Self {
        self.rng = Some(rng);
        self
    }

    pub fn start_position(mut self, position: GeoPoint) -> Self {
        self.start_position = position;
        self
    }

    pub fn bounds(mut self, bounds: GeoBounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    pub fn operation_mode(mut self, mode: OperationMode) -> Self {
        self.operation_mode = mode;
        self
    }

    pub fn sensitivity(mut self, sensitivity: Sensitivity) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    /// Validate the initial state and build the engine.
    ///
    /// # Errors
    /// - [`SimError::InvalidArgument`] if the bounds are inverted or not
    ///   finite, the start position lies outside them, or the history
    ///   capacity is 0.
    pub fn build(self) -> SimResult<SimulationEngine> {
        if !self.bounds.is_valid() {
            return Err(SimError::InvalidArgument(format!(
                "invalid GPS bounds {:?}",
                self.bounds
            )));
        }
        if !self.bounds.contains(self.start_position) {
            return Err(SimError::InvalidArgument(format!(
                "start position {} lies outside the GPS bounds",
                self.start_position
            )));
        }
        if self.history_capacity == 0 {
            return Err(SimError::InvalidArgument(
                "history capacity must be at least 1".into(),
            ));
        }

        let rng = self.rng.unwrap_or_else(|| SimRng::new(self.seed));
        Ok(SimulationEngine::from_parts(
            rng,
            self.start_position,
            self.bounds,
            HistoryBuffer::new(self.history_capacity),
            self.operation_mode,
            self.sensitivity,
        ))
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ── SimBuilder ────────────────────────────────────────────────────────────────

/// Fluent builder for the stepped runner [`Sim`].
///
/// If no engine is supplied, one is built with default settings and
/// `config.seed`.
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config)
///     .engine(EngineBuilder::new().seed(config.seed).history_capacity(40).build()?)
///     .build()?;
/// sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder {
    config: SimConfig,
    engine: Option<SimulationEngine>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self { config, engine: None }
    }

    pub fn engine(mut self, engine: SimulationEngine) -> Self {
        self.engine = Some(engine);
        self
    }

    /// Validate the cadence configuration and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        self.config
            .validate()
            .map_err(|e| SimError::Config(e.to_string()))?;

        let engine = self
            .engine
            .unwrap_or_else(|| SimulationEngine::new(self.config.seed));

        Ok(Sim {
            clock:  self.config.make_clock(),
            config: self.config,
            engine,
        })
    }
}
