//! One sample of the four ultrasonic distance sensors.

use shoes_core::SimTime;

use crate::Zone;

/// Valid range of the three forward-facing sensors, centimetres.
pub const HORIZONTAL_RANGE_CM: (u16, u16) = (20, 400);

/// Valid range of the downward (ground) sensor, centimetres.
pub const DOWN_RANGE_CM: (u16, u16) = (50, 150);

// ── Direction ─────────────────────────────────────────────────────────────────

/// Which sensor a distance came from.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Left,
    Center,
    Right,
    /// Ground-facing sensor (curbs, stairs, holes).
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Center,
        Direction::Right,
        Direction::Down,
    ];

    /// Human-readable label, useful for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Left   => "left",
            Direction::Center => "center",
            Direction::Right  => "right",
            Direction::Down   => "down",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── RawSignal ─────────────────────────────────────────────────────────────────

/// Unclamped, unrounded scenario output in centimetres.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RawSignal {
    pub left:   f64,
    pub center: f64,
    pub right:  f64,
    pub down:   f64,
}

// ── SensorReading ─────────────────────────────────────────────────────────────

/// A clamped, integer-rounded reading of all four sensors.
///
/// Invariant: `left`, `center`, `right` lie in [`HORIZONTAL_RANGE_CM`] and
/// `down` lies in [`DOWN_RANGE_CM`].  The only constructors are
/// [`from_raw`][Self::from_raw] and [`initial`][Self::initial], both of which
/// uphold it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensorReading {
    pub timestamp: SimTime,
    pub left:      u16,
    pub center:    u16,
    pub right:     u16,
    pub down:      u16,
}

impl SensorReading {
    /// The power-on reading: everything at maximum range, ground at 100 cm.
    pub fn initial() -> Self {
        Self {
            timestamp: SimTime::ZERO,
            left:      HORIZONTAL_RANGE_CM.1,
            center:    HORIZONTAL_RANGE_CM.1,
            right:     HORIZONTAL_RANGE_CM.1,
            down:      100,
        }
    }

    /// Clamp each channel into its sensor range and round to the nearest
    /// centimetre.
    ///
    /// NaN collapses to the lower bound of the range.
    pub fn from_raw(raw: RawSignal, timestamp: SimTime) -> Self {
        Self {
            timestamp,
            left:   quantize(raw.left, HORIZONTAL_RANGE_CM),
            center: quantize(raw.center, HORIZONTAL_RANGE_CM),
            right:  quantize(raw.right, HORIZONTAL_RANGE_CM),
            down:   quantize(raw.down, DOWN_RANGE_CM),
        }
    }

    #[inline]
    pub fn distance(&self, dir: Direction) -> u16 {
        match dir {
            Direction::Left   => self.left,
            Direction::Center => self.center,
            Direction::Right  => self.right,
            Direction::Down   => self.down,
        }
    }

    #[inline]
    pub fn zone(&self, dir: Direction) -> Zone {
        Zone::classify(self.distance(dir) as f64)
    }

    /// Smallest of the three horizontal distances.
    #[inline]
    pub fn min_horizontal(&self) -> u16 {
        self.left.min(self.center).min(self.right)
    }

    /// The horizontal sensor seeing the nearest obstacle.
    ///
    /// Ties resolve center, then left, then right.
    pub fn closest(&self) -> (Direction, u16) {
        let min = self.min_horizontal();
        let dir = if min == self.center {
            Direction::Center
        } else if min == self.left {
            Direction::Left
        } else {
            Direction::Right
        };
        (dir, min)
    }
}

impl Default for SensorReading {
    fn default() -> Self {
        Self::initial()
    }
}

fn quantize(v: f64, (lo, hi): (u16, u16)) -> u16 {
    if v.is_nan() {
        return lo;
    }
    v.clamp(lo as f64, hi as f64).round() as u16
}
