//! Simulation time model.
//!
//! # Design
//!
//! The engine never reads the system clock.  Every update call receives the
//! current instant as an explicit [`SimTime`] (milliseconds since an
//! arbitrary epoch), which makes sensor generation a pure function of
//! `(state, time, rng)`.
//!
//! Hosts that step time themselves use a `SimClock`, which maps the
//! fast-cadence `Tick` counter onto `SimTime`:
//!
//!   time = start + tick * tick_interval_ms
//!
//! Using integer milliseconds as the canonical unit keeps cadence arithmetic
//! exact (no floating-point drift); conversion to `f64` seconds happens only
//! where the signal formulas need it.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::{ShoesError, ShoesResult};

// ── SimTime ───────────────────────────────────────────────────────────────────

/// An absolute instant in milliseconds.
///
/// Unsigned, so negative time is unrepresentable once constructed; the
/// fallible [`from_secs_f64`][Self::from_secs_f64] is the gate for float input.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub u64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0);

    #[inline]
    pub fn from_millis(ms: u64) -> Self {
        SimTime(ms)
    }

    /// Convert fractional seconds to a `SimTime`, rounding to the nearest
    /// millisecond.
    ///
    /// # Errors
    /// [`ShoesError::InvalidArgument`] for negative, NaN, infinite or
    /// out-of-range input.
    pub fn from_secs_f64(secs: f64) -> ShoesResult<Self> {
        if !secs.is_finite() || secs < 0.0 {
            return Err(ShoesError::InvalidArgument(format!(
                "time must be finite and non-negative, got {secs}"
            )));
        }
        let ms = (secs * 1_000.0).round();
        if ms >= u64::MAX as f64 {
            return Err(ShoesError::InvalidArgument(format!(
                "time {secs} s does not fit in a millisecond counter"
            )));
        }
        Ok(SimTime(ms as u64))
    }

    /// Wall-clock time since the Unix epoch.  For hosts only; the engine
    /// always takes time as a parameter.
    pub fn now() -> Self {
        let since_epoch = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        SimTime(since_epoch.as_millis() as u64)
    }

    #[inline]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    #[inline]
    pub fn as_secs_f64(self) -> f64 {
        self.0 as f64 / 1_000.0
    }

    /// The instant `ms` milliseconds after `self`.
    #[inline]
    pub fn offset_ms(self, ms: u64) -> SimTime {
        SimTime(self.0 + ms)
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:03}s", self.0 / 1_000, self.0 % 1_000)
    }
}

// ── Tick ─────────────────────────────────────────────────────────────────────

/// A fast-cadence tick counter.
///
/// At the default 500 ms cadence a `u64` outlasts any conceivable run.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Converts between tick counts and [`SimTime`].
///
/// `SimClock` is cheap to copy and holds no heap data.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Instant of tick 0.
    pub start: SimTime,
    /// Milliseconds per tick.  Default: 500.
    pub tick_interval_ms: u32,
    /// The current tick: advanced by `SimClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new(start: SimTime, tick_interval_ms: u32) -> Self {
        Self {
            start,
            tick_interval_ms,
            current_tick: Tick::ZERO,
        }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Elapsed milliseconds since tick 0.
    #[inline]
    pub fn elapsed_ms(&self) -> u64 {
        self.current_tick.0 * self.tick_interval_ms as u64
    }

    /// Instant corresponding to `current_tick`.
    #[inline]
    pub fn current_time(&self) -> SimTime {
        self.start.offset_ms(self.elapsed_ms())
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (+{} ms)", self.current_tick, self.elapsed_ms())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Run configuration for a stepped simulation.
///
/// Typically loaded from a JSON file by the application crate and passed to
/// the runner.  Missing fields fall back to [`Default`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Milliseconds timestamp of tick 0.  Scenario selection is a function
    /// of absolute time, so this picks where in the 48 s cycle a run starts.
    pub start_time_ms: u64,

    /// Fast cadence (sensor generation).  Default: 500 ms.
    pub fast_interval_ms: u32,

    /// Slow cadence (steps, battery, speed, GPS).  Must be a positive
    /// multiple of `fast_interval_ms`.  Default: 2000 ms.
    pub slow_interval_ms: u32,

    /// Total fast ticks to simulate.
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Emit a snapshot every N fast ticks.  0 disables snapshots.
    pub snapshot_interval_ticks: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            start_time_ms:           0,
            fast_interval_ms:        500,
            slow_interval_ms:        2_000,
            total_ticks:             192, // 96 s = two full scenario cycles
            seed:                    42,
            snapshot_interval_ticks: 4,
        }
    }
}

impl SimConfig {
    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(SimTime(self.start_time_ms), self.fast_interval_ms)
    }

    /// Number of fast ticks per slow tick.
    #[inline]
    pub fn slow_every(&self) -> u64 {
        (self.slow_interval_ms / self.fast_interval_ms.max(1)) as u64
    }

    /// Check the cadence invariants.
    pub fn validate(&self) -> ShoesResult<()> {
        if self.fast_interval_ms == 0 {
            return Err(ShoesError::Config("fast_interval_ms must be > 0".into()));
        }
        if self.slow_interval_ms == 0
            || !self.slow_interval_ms.is_multiple_of(self.fast_interval_ms)
        {
            return Err(ShoesError::Config(format!(
                "slow_interval_ms ({}) must be a positive multiple of fast_interval_ms ({})",
                self.slow_interval_ms, self.fast_interval_ms
            )));
        }
        Ok(())
    }
}
