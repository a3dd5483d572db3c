//! The six walking contexts the simulator cycles through.
//!
//! # Timing
//!
//! ```text
//! index    = floor(t / 8 s) mod 6
//! progress = (t mod 8 s) / 8 s          ∈ [0, 1)
//! ```
//!
//! Each scenario is active for one 8-second window; the whole cycle repeats
//! every 48 s.  Both values are computed from integer milliseconds, so a
//! window boundary is exact.
//!
//! # Signal shape
//!
//! Every channel is a deterministic base (constant plus a sine of absolute
//! time at a scenario-specific frequency and phase) plus uniform jitter of a
//! scenario-specific width.  The one exception is the center channel of
//! [`Scenario::ApproachingObstacle`], which falls linearly from 300 cm to a
//! 25 cm floor across the window with no jitter.

use shoes_core::{SimRng, SimTime};

use crate::RawSignal;

/// Length of one scenario window.
pub const SCENARIO_WINDOW_SECS: u64 = 8;

/// Number of distinct scenarios.
pub const SCENARIO_COUNT: u64 = 6;

/// Full cycle length: 48 s.
pub const CYCLE_SECS: u64 = SCENARIO_WINDOW_SECS * SCENARIO_COUNT;

const WINDOW_MS: u64 = SCENARIO_WINDOW_SECS * 1_000;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Scenario {
    /// Walls close on both sides, long corridor ahead.
    NarrowHallway,
    /// Something straight ahead, closing in.
    ApproachingObstacle,
    /// Wall on the left while rounding a corner.
    TurningLeft,
    /// Wall on the right while rounding a corner.
    TurningRight,
    /// Park or large hall; every sensor near maximum range.
    OpenSpace,
    /// Weaving between objects at varying distances.
    NavigatingObjects,
}

impl Scenario {
    /// All scenarios in cycle order.
    pub const ALL: [Scenario; 6] = [
        Scenario::NarrowHallway,
        Scenario::ApproachingObstacle,
        Scenario::TurningLeft,
        Scenario::TurningRight,
        Scenario::OpenSpace,
        Scenario::NavigatingObjects,
    ];

    /// Scenario active at `now`.
    #[inline]
    pub fn at(now: SimTime) -> Scenario {
        Self::from_index(now.as_millis() / WINDOW_MS)
    }

    /// Fraction of the current 8-second window already elapsed, in `[0, 1)`.
    #[inline]
    pub fn progress(now: SimTime) -> f64 {
        (now.as_millis() % WINDOW_MS) as f64 / WINDOW_MS as f64
    }

    /// Scenario for a window counter; wraps modulo 6.
    #[inline]
    pub fn from_index(index: u64) -> Scenario {
        Self::ALL[(index % SCENARIO_COUNT) as usize]
    }

    /// Position in the cycle, 0–5.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Title shown on the dashboard's scenario indicator.
    pub fn label(self) -> &'static str {
        match self {
            Scenario::NarrowHallway       => "Narrow Hallway",
            Scenario::ApproachingObstacle => "Approaching Obstacle",
            Scenario::TurningLeft         => "Turning Left Corner",
            Scenario::TurningRight        => "Turning Right Corner",
            Scenario::OpenSpace           => "Open Space",
            Scenario::NavigatingObjects   => "Navigating Around Objects",
        }
    }

    /// Compute the unclamped signal for time `t` (seconds) at `progress`
    /// through this scenario's window.
    pub fn raw_signal(self, t: f64, progress: f64, rng: &mut SimRng) -> RawSignal {
        match self {
            Scenario::NarrowHallway => RawSignal {
                left:   60.0 + (t * 0.8).sin() * 8.0 + rng.jitter(4.0),
                center: 280.0 + (t * 0.4).sin() * 25.0 + rng.jitter(6.0),
                right:  65.0 + (t * 0.8 + 1.5).sin() * 8.0 + rng.jitter(4.0),
                down:   100.0 + rng.jitter(3.0),
            },

            Scenario::ApproachingObstacle => RawSignal {
                center: (300.0 - progress * 270.0).max(25.0),
                left:   120.0 + (t * 1.2).sin() * 15.0 + rng.jitter(8.0),
                right:  115.0 + (t * 1.2 + 2.0).sin() * 15.0 + rng.jitter(8.0),
                down:   98.0 + rng.jitter(4.0),
            },

            Scenario::TurningLeft => RawSignal {
                left:   45.0 + (t * 1.5).sin() * 15.0 + rng.jitter(5.0),
                center: 200.0 + (t * 0.6).sin() * 35.0 + rng.jitter(10.0),
                right:  250.0 + (t * 0.4).sin() * 45.0 + rng.jitter(12.0),
                down:   102.0 + rng.jitter(3.0),
            },

            Scenario::TurningRight => RawSignal {
                left:   240.0 + (t * 0.4).sin() * 40.0 + rng.jitter(12.0),
                center: 190.0 + (t * 0.6).sin() * 30.0 + rng.jitter(10.0),
                right:  50.0 + (t * 1.5 + 1.0).sin() * 15.0 + rng.jitter(5.0),
                down:   99.0 + rng.jitter(3.0),
            },

            Scenario::OpenSpace => RawSignal {
                left:   380.0 + (t * 0.15).sin() * 15.0 + rng.jitter(10.0),
                center: 395.0 + (t * 0.12).sin() * 5.0 + rng.jitter(8.0),
                right:  375.0 + (t * 0.15 + 0.5).sin() * 15.0 + rng.jitter(10.0),
                down:   105.0 + rng.jitter(5.0),
            },

            Scenario::NavigatingObjects => RawSignal {
                left:   90.0 + (t * 0.7).sin() * 40.0 + rng.jitter(8.0),
                center: 150.0 + (t * 0.5).sin() * 60.0 + rng.jitter(12.0),
                right:  110.0 + (t * 0.7 + 1.0).sin() * 35.0 + rng.jitter(8.0),
                down:   100.0 + (t * 0.3).sin() * 8.0 + rng.jitter(4.0),
            },
        }
    }
}

impl std::fmt::Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
