//! Burn-wire deployment actuator
//!
//! Drives a nichrome burn wire through two lines: a heater enable that powers
//! the burn circuit and a fire line that closes it. A burn is:
//!
//! 1. enable high
//! 2. fire high
//! 3. blocking wait for the burn duration
//! 4. fire low, enable low
//!
//! The wait is blocking: a burn is never split by an async suspension point
//! where the owning task could be cancelled with the wire hot. Both lines are
//! driven low on every exit path, including pin faults.
//!
//! ## Watchdog budget
//!
//! The executor is stalled for the whole burn, so the flight loop cannot pet
//! the watchdog meanwhile. The hardware watchdog timeout must exceed
//! `MAX_BURN_MS` plus one flight-loop tick. The driver reports
//! `holds_for_duration`, so Deploy does not add a second wait on top.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use mission_fsm_core::parameters::MAX_BURN_MS;
use mission_fsm_core::traits::{ActuatorError, DeploymentActuator};

/// Burn-wire driver
pub struct BurnWire<P, B> {
    enable: P,
    fire: P,
    delay: B,
}

impl<P: OutputPin, B: DelayNs> BurnWire<P, B> {
    /// Create a burn-wire driver
    ///
    /// # Arguments
    ///
    /// * `enable` - Heater enable line (active high)
    /// * `fire` - Fire line (active high)
    /// * `delay` - Blocking delay used to time the burn
    ///
    /// Both lines are driven low immediately.
    pub fn new(mut enable: P, mut fire: P, delay: B) -> Self {
        if fire.set_low().is_err() {
            crate::log_warn!("Burn wire: fire line fault while safing at init");
        }
        if enable.set_low().is_err() {
            crate::log_warn!("Burn wire: enable line fault while safing at init");
        }
        Self {
            enable,
            fire,
            delay,
        }
    }

    fn burn(&mut self, duration_ms: u32) -> Result<(), ActuatorError> {
        self.enable.set_high().map_err(|_| ActuatorError::Hardware)?;
        self.fire.set_high().map_err(|_| ActuatorError::Hardware)?;
        self.delay.delay_ms(duration_ms);
        Ok(())
    }

    fn safe(&mut self) -> Result<(), ActuatorError> {
        let fire = self.fire.set_low();
        let enable = self.enable.set_low();
        fire.and(enable).map_err(|_| ActuatorError::Hardware)
    }

    /// Release the pins
    pub fn release(self) -> (P, P) {
        (self.enable, self.fire)
    }
}

impl<P: OutputPin, B: DelayNs> DeploymentActuator for BurnWire<P, B> {
    fn fire(&mut self, duration_ms: u32) -> Result<(), ActuatorError> {
        if duration_ms == 0 || duration_ms > MAX_BURN_MS {
            return Err(ActuatorError::InvalidDuration {
                requested_ms: duration_ms,
                max_ms: MAX_BURN_MS,
            });
        }

        crate::log_info!("Burn wire firing for {} ms", duration_ms);
        let burned = self.burn(duration_ms);
        let safed = self.safe();

        if let Err(_e) = burned {
            crate::log_error!("Burn wire fault while firing: {}", _e);
        }
        burned.and(safed)
    }

    fn holds_for_duration(&self) -> bool {
        true
    }
}
