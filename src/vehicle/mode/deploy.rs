//! Deploy Mode
//!
//! Payload deployment. Entered at most once per mission (the transition
//! engine's deploy-once latch), and the burn wire is additionally guarded by
//! the handler's own one-shot flag.
//!
//! The burn is issued before the first suspension point; the mode then waits
//! out the burn window and reports done. An actuator whose fire call already
//! spans the burn (the blocking burn-wire driver) is not waited for twice.

use alloc::boxed::Box;

use embedded_hal_async::delay::DelayNs;
use mission_fsm_core::mode::{MissionMode, ModeError};
use mission_fsm_core::traits::DeploymentActuator;

use super::{BurnOutcome, BurnState, ModeContext, ModeFlags, ModeHandler, ModeTask, OneShotBurn};

/// Deploy Mode
pub struct DeployMode<D, A> {
    flags: ModeFlags,
    delay: D,
    burn: OneShotBurn<A>,
}

impl<D: DelayNs + Clone, A: DeploymentActuator> DeployMode<D, A> {
    pub fn new(ctx: &ModeContext<D>, burnwire: A) -> Self {
        Self {
            flags: ModeFlags::default(),
            delay: ctx.delay.clone(),
            burn: OneShotBurn::new(burnwire, ctx.timing.deploy_burn_ms),
        }
    }

    pub fn burn_state(&self) -> BurnState {
        self.burn.state()
    }

    async fn deploy(&self, delay: &mut D) -> Result<(), ModeError> {
        match self.burn.fire_once() {
            Ok(BurnOutcome::Fired) => {
                crate::log_info!("Payload burn wire fired ({} ms)", self.burn.duration_ms())
            }
            Ok(BurnOutcome::AlreadyFired) => crate::log_warn!("Payload burn wire already fired"),
            Err(e) => {
                crate::log_error!("Payload deployment failed: {}", e);
                return Err(e);
            }
        }

        if !self.burn.holds_for_duration() {
            delay.delay_ms(self.burn.duration_ms()).await;
        }
        self.flags.complete();
        crate::log_info!("Payload deployment complete");
        Ok(())
    }
}

impl<D: DelayNs + Clone, A: DeploymentActuator> ModeHandler for DeployMode<D, A> {
    fn mode(&self) -> MissionMode {
        MissionMode::Deploy
    }

    fn start(&self) -> Result<ModeTask<'_>, ModeError> {
        self.flags.begin()?;
        crate::log_info!("Entering Deploy mode");

        let mut delay = self.delay.clone();
        Ok(Box::pin(async move {
            let result = self.deploy(&mut delay).await;
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
