//! Deployment actuator abstraction
//!
//! A deployment actuator is a one-shot, time-bounded pyrotechnic or burn-wire
//! driver. The mode handlers that own one guarantee it is fired at most once per
//! handler lifetime; the actuator itself only guarantees the burn is bounded.

use core::fmt;

/// Errors reported by a deployment actuator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActuatorError {
    /// Requested burn duration is zero or above the hardware limit
    InvalidDuration {
        /// Requested duration (ms)
        requested_ms: u32,
        /// Maximum accepted duration (ms)
        max_ms: u32,
    },
    /// Driving the heater or fire line failed
    Hardware,
}

impl fmt::Display for ActuatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActuatorError::InvalidDuration {
                requested_ms,
                max_ms,
            } => write!(
                f,
                "burn duration {} ms outside 1..={} ms",
                requested_ms, max_ms
            ),
            ActuatorError::Hardware => write!(f, "burn wire hardware fault"),
        }
    }
}

/// One-shot deployment actuator
///
/// `fire` blocks for at most the requested duration and returns once the burn
/// has been issued and the lines are safed again. It is never called from
/// across a suspension point, so cancellation cannot split a burn.
pub trait DeploymentActuator {
    /// Fire the actuator for `duration_ms` milliseconds
    fn fire(&mut self, duration_ms: u32) -> Result<(), ActuatorError>;

    /// Whether `fire` only returns after the whole burn duration has passed
    ///
    /// Actuators that merely trigger the burn report `false`; the owning mode
    /// then waits out the burn window itself.
    fn holds_for_duration(&self) -> bool {
        false
    }
}

impl<T: DeploymentActuator + ?Sized> DeploymentActuator for &mut T {
    fn fire(&mut self, duration_ms: u32) -> Result<(), ActuatorError> {
        (**self).fire(duration_ms)
    }

    fn holds_for_duration(&self) -> bool {
        (**self).holds_for_duration()
    }
}
