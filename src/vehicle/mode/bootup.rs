//! Bootup Mode
//!
//! Post-reset settling period. Reports done once the settle time has elapsed,
//! which lets the transition engine move on to Detumble.
//!
//! Re-entering Bootup (power-mode reboot) restarts the settle period.

use alloc::boxed::Box;

use embedded_hal_async::delay::DelayNs;
use mission_fsm_core::mode::{MissionMode, ModeError};

use super::{ModeContext, ModeFlags, ModeHandler, ModeTask};

/// Bootup Mode
pub struct BootupMode<D> {
    flags: ModeFlags,
    delay: D,
    settle_ms: u32,
}

impl<D: DelayNs + Clone> BootupMode<D> {
    pub fn new(ctx: &ModeContext<D>) -> Self {
        Self {
            flags: ModeFlags::default(),
            delay: ctx.delay.clone(),
            settle_ms: ctx.timing.bootup_settle_ms,
        }
    }
}

impl<D: DelayNs + Clone> ModeHandler for BootupMode<D> {
    fn mode(&self) -> MissionMode {
        MissionMode::Bootup
    }

    fn start(&self) -> Result<ModeTask<'_>, ModeError> {
        self.flags.begin()?;
        self.flags.reset_done();
        crate::log_info!("Entering Bootup mode ({} ms settle)", self.settle_ms);

        let mut delay = self.delay.clone();
        Ok(Box::pin(async move {
            delay.delay_ms(self.settle_ms).await;
            self.flags.complete();
            self.flags.stop();
            crate::log_info!("Bootup settle complete");
            Ok(())
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
