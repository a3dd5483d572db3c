//! Advisory configuration inputs and the system status label.
//!
//! [`OperationMode`] and [`Sensitivity`] are accepted from the UI and
//! reported back in every snapshot, but neither changes the generation math.

use shoes_core::{ShoesError, ShoesResult};

// ── OperationMode ─────────────────────────────────────────────────────────────

/// Detection mode selected on the dashboard.  Advisory only.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OperationMode {
    #[default]
    Normal,
    Sensitive,
    Aggressive,
}

impl OperationMode {
    /// The UI's select-box value (0, 1, 2).
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            OperationMode::Normal     => "Normal",
            OperationMode::Sensitive  => "Sensitive",
            OperationMode::Aggressive => "Aggressive",
        }
    }

    /// One-line explanation shown when the mode changes.
    pub fn description(self) -> &'static str {
        match self {
            OperationMode::Normal     => "Standard detection mode - balanced sensitivity",
            OperationMode::Sensitive  => "High sensitivity mode - detects obstacles earlier",
            OperationMode::Aggressive => "Lower sensitivity - for faster movement",
        }
    }
}

impl TryFrom<u8> for OperationMode {
    type Error = ShoesError;

    fn try_from(code: u8) -> ShoesResult<Self> {
        match code {
            0 => Ok(OperationMode::Normal),
            1 => Ok(OperationMode::Sensitive),
            2 => Ok(OperationMode::Aggressive),
            other => Err(ShoesError::InvalidArgument(format!(
                "operation mode must be 0, 1 or 2, got {other}"
            ))),
        }
    }
}

impl std::fmt::Display for OperationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ── Sensitivity ───────────────────────────────────────────────────────────────

/// Slider value in percent, 0–100.  Advisory only.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct Sensitivity(u8);

impl Sensitivity {
    pub const MAX: u8 = 100;

    pub fn new(percent: u8) -> ShoesResult<Self> {
        if percent > Self::MAX {
            return Err(ShoesError::InvalidArgument(format!(
                "sensitivity must be within 0..=100, got {percent}"
            )));
        }
        Ok(Sensitivity(percent))
    }

    #[inline]
    pub fn percent(self) -> u8 {
        self.0
    }
}

impl Default for Sensitivity {
    fn default() -> Self {
        Sensitivity(50)
    }
}

impl TryFrom<u8> for Sensitivity {
    type Error = ShoesError;

    fn try_from(percent: u8) -> ShoesResult<Self> {
        Sensitivity::new(percent)
    }
}

impl From<Sensitivity> for u8 {
    fn from(s: Sensitivity) -> u8 {
        s.0
    }
}

impl std::fmt::Display for Sensitivity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

// ── SystemStatus ──────────────────────────────────────────────────────────────

/// Status label derived from the battery level.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SystemStatus {
    #[default]
    Active,
    /// Battery below [`SystemStatus::LOW_BATTERY_PERCENT`].
    LowBattery,
    /// Battery at 0; readings still flow in the simulation.
    Depleted,
}

impl SystemStatus {
    pub const LOW_BATTERY_PERCENT: f64 = 20.0;

    pub fn from_battery(level: f64) -> Self {
        if level <= 0.0 {
            SystemStatus::Depleted
        } else if level < Self::LOW_BATTERY_PERCENT {
            SystemStatus::LowBattery
        } else {
            SystemStatus::Active
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SystemStatus::Active     => "Active",
            SystemStatus::LowBattery => "Low Battery",
            SystemStatus::Depleted   => "Depleted",
        }
    }
}

impl std::fmt::Display for SystemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
