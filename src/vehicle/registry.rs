//! Mode Registry
//!
//! Maps every [`MissionMode`] to its handler. All seven handlers are built
//! once, up front, and live as long as the registry; the supervisor and the
//! controller only ever borrow them.

use embedded_hal_async::delay::DelayNs;
use mission_fsm_core::mode::MissionMode;
use mission_fsm_core::parameters::ParameterError;
use mission_fsm_core::traits::DeploymentActuator;

use super::mode::{AntennasMode, BootupMode, DeployMode, IdleMode, ModeContext, ModeHandler};

/// Total mapping from mission mode to handler
pub trait ModeLookup {
    fn handler(&self, mode: MissionMode) -> &dyn ModeHandler;
}

/// Eagerly constructed handler set
///
/// # Example
///
/// ```rust,ignore
/// let ctx = ModeContext::new(Delay, MissionParams::default().timing);
/// let registry = ModeRegistry::new(ctx, antenna_burnwire, deploy_burnwire)?;
/// let mut controller = MissionController::new(&registry, thresholds)?;
/// ```
pub struct ModeRegistry<D, A> {
    /// Post-reset settle, then done
    bootup: BootupMode<D>,
    /// Holds while attitude control damps the tumble
    detumble: IdleMode<D>,
    /// Sun-pointing; entered after detumbling and on every emergency override
    charge: IdleMode<D>,
    antennas: AntennasMode<D, A>,
    /// Keeps the ground window open; beaconing belongs to the radio task
    comms: IdleMode<D>,
    deploy: DeployMode<D, A>,
    /// Attitude acquisition between communication windows
    orient: IdleMode<D>,
}

impl<D: DelayNs + Clone, A: DeploymentActuator> ModeRegistry<D, A> {
    /// Build all handlers
    ///
    /// # Arguments
    ///
    /// * `ctx` - Delay and timing shared by every handler
    /// * `antenna_burnwire` - Actuator owned by Antennas
    /// * `deploy_burnwire` - Actuator owned by Deploy
    ///
    /// Fails when `ctx.timing` does not pass [`ModeTiming::validate`].
    ///
    /// [`ModeTiming::validate`]: mission_fsm_core::parameters::ModeTiming::validate
    pub fn new(
        ctx: ModeContext<D>,
        antenna_burnwire: A,
        deploy_burnwire: A,
    ) -> Result<Self, ParameterError> {
        ctx.timing.validate()?;
        Ok(Self {
            bootup: BootupMode::new(&ctx),
            detumble: IdleMode::new(&ctx, MissionMode::Detumble),
            charge: IdleMode::new(&ctx, MissionMode::Charge),
            antennas: AntennasMode::new(&ctx, antenna_burnwire),
            comms: IdleMode::new(&ctx, MissionMode::Comms),
            deploy: DeployMode::new(&ctx, deploy_burnwire),
            orient: IdleMode::new(&ctx, MissionMode::Orient),
        })
    }

    pub fn antennas(&self) -> &AntennasMode<D, A> {
        &self.antennas
    }

    pub fn deploy(&self) -> &DeployMode<D, A> {
        &self.deploy
    }
}

impl<D: DelayNs + Clone, A: DeploymentActuator> ModeLookup for ModeRegistry<D, A> {
    fn handler(&self, mode: MissionMode) -> &dyn ModeHandler {
        match mode {
            MissionMode::Bootup => &self.bootup,
            MissionMode::Detumble => &self.detumble,
            MissionMode::Charge => &self.charge,
            MissionMode::Antennas => &self.antennas,
            MissionMode::Comms => &self.comms,
            MissionMode::Deploy => &self.deploy,
            MissionMode::Orient => &self.orient,
        }
    }
}
