//! Antennas Mode
//!
//! Releases the stowed antennas with a single burn-wire actuation.
//!
//! ## Behavior
//!
//! - Wait the warm-up period so the bus settles after the Charge hand-off
//! - Fire the antenna burn wire once, with no suspension point in between
//!   the fired flag and the fire request
//! - Report done
//!
//! ## Safety
//!
//! - The burn wire is fired at most once per handler lifetime; a re-entry after
//!   a successful burn only reports done again
//! - A failed burn is latched: the mode never reports done and waits for the
//!   emergency override or an external reset

use alloc::boxed::Box;

use embedded_hal_async::delay::DelayNs;
use mission_fsm_core::mode::{MissionMode, ModeError};
use mission_fsm_core::traits::DeploymentActuator;

use super::{BurnOutcome, BurnState, ModeContext, ModeFlags, ModeHandler, ModeTask, OneShotBurn};

/// Antennas Mode
pub struct AntennasMode<D, A> {
    flags: ModeFlags,
    delay: D,
    warmup_ms: u32,
    burn: OneShotBurn<A>,
}

impl<D: DelayNs + Clone, A: DeploymentActuator> AntennasMode<D, A> {
    /// Create Antennas mode
    ///
    /// # Arguments
    ///
    /// * `ctx` - Shared delay and timing
    /// * `burnwire` - Antenna release actuator
    pub fn new(ctx: &ModeContext<D>, burnwire: A) -> Self {
        Self {
            flags: ModeFlags::default(),
            delay: ctx.delay.clone(),
            warmup_ms: ctx.timing.antenna_warmup_ms,
            burn: OneShotBurn::new(burnwire, ctx.timing.antenna_burn_ms),
        }
    }

    /// Fire the antenna burn wire unless it already fired
    pub fn release_antennas(&self) -> Result<BurnOutcome, ModeError> {
        let outcome = self.burn.fire_once();
        match outcome {
            Ok(BurnOutcome::Fired) => crate::log_info!("Antennas released"),
            Ok(BurnOutcome::AlreadyFired) => {
                crate::log_debug!("Antenna burn wire already fired, skipping")
            }
            Err(_e) => crate::log_error!("Antenna release failed: {}", _e),
        }
        outcome
    }

    pub fn burn_state(&self) -> BurnState {
        self.burn.state()
    }
}

impl<D: DelayNs + Clone, A: DeploymentActuator> ModeHandler for AntennasMode<D, A> {
    fn mode(&self) -> MissionMode {
        MissionMode::Antennas
    }

    fn start(&self) -> Result<ModeTask<'_>, ModeError> {
        self.flags.begin()?;
        crate::log_info!("Entering Antennas mode");

        let mut delay = self.delay.clone();
        Ok(Box::pin(async move {
            delay.delay_ms(self.warmup_ms).await;
            let result = self.release_antennas().map(|_| self.flags.complete());
            self.flags.stop();
            result
        }))
    }

    fn request_stop(&self) {
        self.flags.stop();
    }

    fn is_done(&self) -> bool {
        self.flags.is_done()
    }

    fn is_running(&self) -> bool {
        self.flags.is_running()
    }
}
