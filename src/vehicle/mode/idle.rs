//! Idle Modes
//!
//! Detumble, Charge, Comms and Orient have no work of their own in the mission
//! core: attitude control, charging and the radio are separate collaborators.
//! Their handler only keeps the mode's activity alive with a cooperative sleep
//! loop until the transition engine leaves the mode. None of them ever reports
//! done.

use alloc::boxed::Box;

use embedded_hal_async::delay::DelayNs;
use mission_fsm_core::mode::{MissionMode, ModeError};

use super::{ModeContext, ModeFlags, ModeHandler, ModeTask};

/// Handler for a mode without a natural end
pub struct IdleMode<D> {
    mode: MissionMode,
    flags: ModeFlags,
    delay: D,
    period_ms: u32,
}

impl<D: DelayNs + Clone> IdleMode<D> {
    pub fn new(ctx: &ModeContext<D>, mode: MissionMode) -> Self {
        Self {
            mode,
            flags: ModeFlags::default(),
            delay: ctx.delay.clone(),
            period_ms: ctx.timing.idle_period_ms,
        }
    }
}

impl<D: DelayNs + Clone> ModeHandler for IdleMode<D> {
    fn mode(&self) -> MissionMode {
        self.mode
    }

    fn start(&self) -> Result<ModeTask<'_>, ModeError> {
        self.flags.begin()?;
        crate::log_info!("Entering {} mode", self.mode.name());

        let mut delay = self.delay.clone();
        Ok(Box::pin(async move {
            idle_until_stopped(&self.flags, &mut delay, self.period_ms).await
        }))
    }

    fn request_stop(&self) {
        self.flags.stop();
    }

    fn is_done(&self) -> bool {
        false
    }

    fn is_running(&self) -> bool {
        self.flags.is_running()
    }
}

/// Sleep one idle period per iteration until a stop is requested
async fn idle_until_stopped<D: DelayNs>(
    flags: &ModeFlags,
    delay: &mut D,
    period_ms: u32,
) -> Result<(), ModeError> {
    while flags.is_running() {
        delay.delay_ms(period_ms).await;
    }
    Ok(())
}
