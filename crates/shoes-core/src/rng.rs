//! Seedable jitter source for the simulator.
//!
//! # Determinism strategy
//!
//! The engine never touches an ambient global generator.  Every random draw
//! (sensor jitter, step and battery coin flips, speed buckets, GPS drift)
//! goes through one `SimRng` owned by the engine, so the same seed and the
//! same sequence of timestamps always reproduce the same stream.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation RNG: a thin wrapper over `SmallRng`.
///
/// Used only in single-threaded or explicitly synchronised contexts; a
/// host that ticks from another thread goes through `SharedEngine`.
#[derive(Clone, Debug)]
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from OS entropy: for live demos where reproducibility is not
    /// wanted.
    pub fn from_entropy() -> Self {
        SimRng(SmallRng::from_entropy())
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Uniform noise centred on zero with total width `amplitude`, i.e. a
    /// value in `[-amplitude / 2, amplitude / 2)`.
    ///
    /// `amplitude == 0.0` always yields `0.0`.
    #[inline]
    pub fn jitter(&mut self, amplitude: f64) -> f64 {
        (self.0.r#gen::<f64>() - 0.5) * amplitude
    }
}
