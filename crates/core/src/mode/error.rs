//! Mode Handler Error Types

use core::fmt;

use crate::traits::ActuatorError;

/// Errors reported by mode handlers and the mode supervisor
///
/// None of these are fatal. A failed mode is treated as "not running, not
/// done" and can still be left through the emergency override.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ModeError {
    /// `start()` called while the background activity is still running
    AlreadyRunning,
    /// Actuator is borrowed elsewhere
    ActuatorBusy,
    /// Burn-wire actuation failed (latched, never retried)
    Actuation(ActuatorError),
    /// Controller stepped before the initial Bootup activation
    NotStarted,
    /// Initial Bootup activation requested twice
    AlreadyStarted,
}

impl fmt::Display for ModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModeError::AlreadyRunning => write!(f, "mode activity already running"),
            ModeError::ActuatorBusy => write!(f, "deployment actuator busy"),
            ModeError::Actuation(e) => write!(f, "actuation failed: {}", e),
            ModeError::NotStarted => write!(f, "mission controller not started"),
            ModeError::AlreadyStarted => write!(f, "mission controller already started"),
        }
    }
}

impl From<ActuatorError> for ModeError {
    fn from(e: ActuatorError) -> Self {
        ModeError::Actuation(e)
    }
}
