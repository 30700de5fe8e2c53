//! Transition result types

use core::fmt;

use crate::mode::MissionMode;

/// Guard that produced a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransitionCause {
    /// Battery at or below the emergency level outside Charge
    EmergencyLowBattery,
    /// Bootup reported done
    BootComplete,
    /// Angular velocity settled
    Detumbled,
    /// Battery charged enough to release the antennas
    BatteryCharged,
    /// Checkpoint armed and orientation locked in Antennas
    AntennasOriented,
    /// First Comms hand-off, payload not yet deployed
    CommsToDeploy,
    /// Later Comms hand-offs
    CommsToOrient,
    /// Deploy reported done with enough battery
    DeploymentComplete,
    /// Orientation locked in Orient
    OrientationAcquired,
    /// Mode forced by the controller (boot activation, reboot)
    Forced,
}

impl TransitionCause {
    pub const fn name(self) -> &'static str {
        match self {
            TransitionCause::EmergencyLowBattery => "emergency low battery",
            TransitionCause::BootComplete => "boot complete",
            TransitionCause::Detumbled => "detumbled",
            TransitionCause::BatteryCharged => "battery charged",
            TransitionCause::AntennasOriented => "antennas oriented",
            TransitionCause::CommsToDeploy => "comms to deploy",
            TransitionCause::CommsToOrient => "comms to orient",
            TransitionCause::DeploymentComplete => "deployment complete",
            TransitionCause::OrientationAcquired => "orientation acquired",
            TransitionCause::Forced => "forced",
        }
    }
}

impl fmt::Display for TransitionCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A decided mode change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Transition {
    pub from: MissionMode,
    pub to: MissionMode,
    pub cause: TransitionCause,
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.from, self.to, self.cause)
    }
}
