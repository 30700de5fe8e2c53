//! Power mode reported by the electrical power system

use core::fmt;

/// Power budget level
///
/// Selected outside this crate from battery state. The flight loop only runs
/// the mission state machine in `Normal` and `Maximum`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerMode {
    /// Long hibernation between boots
    Critical,
    /// Short hibernation between boots
    Minimum,
    /// Regular operations
    #[default]
    Normal,
    /// Regular operations with surplus power
    Maximum,
}

impl PowerMode {
    /// Whether the mission state machine should be stepped
    pub const fn runs_mission(self) -> bool {
        matches!(self, PowerMode::Normal | PowerMode::Maximum)
    }

    pub const fn name(self) -> &'static str {
        match self {
            PowerMode::Critical => "critical",
            PowerMode::Minimum => "minimum",
            PowerMode::Normal => "normal",
            PowerMode::Maximum => "maximum",
        }
    }
}

impl fmt::Display for PowerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
