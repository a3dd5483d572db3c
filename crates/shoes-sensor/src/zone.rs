//! Severity tiers for a single distance.

/// Severity classification of one distance reading.
///
/// Variants are declared most-severe first so the derived `Ord` reads as
/// severity: `Critical < Alert < Warning < Clear`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Zone {
    /// Under 30 cm.
    Critical,
    /// 30 – 79 cm.
    Alert,
    /// 80 – 149 cm.
    Warning,
    /// 150 cm and beyond.
    Clear,
}

impl Zone {
    /// Upper bounds (exclusive) of the first three tiers, in centimetres.
    pub const CRITICAL_BELOW: f64 = 30.0;
    pub const ALERT_BELOW:    f64 = 80.0;
    pub const WARNING_BELOW:  f64 = 150.0;

    /// Classify a distance in centimetres.  Total over all inputs; NaN is
    /// treated as `Clear` (no echo).
    pub fn classify(distance_cm: f64) -> Zone {
        if distance_cm < Self::CRITICAL_BELOW {
            Zone::Critical
        } else if distance_cm < Self::ALERT_BELOW {
            Zone::Alert
        } else if distance_cm < Self::WARNING_BELOW {
            Zone::Warning
        } else {
            Zone::Clear
        }
    }

    /// Short badge text shown next to a sensor.
    pub fn label(self) -> &'static str {
        match self {
            Zone::Critical => "CRIT",
            Zone::Alert    => "ALERT",
            Zone::Warning  => "WARN",
            Zone::Clear    => "CLEAR",
        }
    }

    /// `true` for the two tiers that should prompt the wearer to react.
    #[inline]
    pub fn is_hazard(self) -> bool {
        self <= Zone::Alert
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
