//! Mission Mode Handlers
//!
//! One handler per mission mode. Each handler owns its mode's background
//! activity and its own running/done flags.
//!
//! # Lifecycle
//!
//! 1. `start()` - hands a cooperative future to the supervisor; never blocks
//! 2. the supervisor polls that future alongside the rest of the flight loop
//! 3. `request_stop()` - cooperative hint; the supervisor then drops the future
//!
//! Handlers are built once at startup, may be started and stopped any number
//! of times, and live for the whole mission.
//!
//! # Actuation
//!
//! Antennas and Deploy each own a burn wire behind a [`OneShotBurn`]. The
//! burn is flagged before it is issued and issued without an intervening
//! suspension point, so it happens at most once per handler lifetime even if
//! the mode is re-entered.

use alloc::boxed::Box;
use core::cell::{Cell, RefCell};
use core::future::Future;
use core::pin::Pin;

use mission_fsm_core::mode::{MissionMode, ModeError};
use mission_fsm_core::parameters::ModeTiming;
use mission_fsm_core::traits::{ActuatorError, DeploymentActuator};

mod antennas;
mod bootup;
mod deploy;
mod idle;

pub use antennas::AntennasMode;
pub use bootup::BootupMode;
pub use deploy::DeployMode;
pub use idle::IdleMode;

/// Background activity of a mode, owned by the supervisor
///
/// Dropping it cancels the activity at whatever suspension point it is
/// parked on.
pub type ModeTask<'a> = Pin<Box<dyn Future<Output = Result<(), ModeError>> + 'a>>;

/// Mission mode handler
///
/// All seven modes implement this trait. Only Bootup, Antennas and Deploy
/// ever report done; the rest run until the transition engine leaves them.
pub trait ModeHandler {
    /// Mode this handler implements
    fn mode(&self) -> MissionMode;

    /// Begin the background activity
    ///
    /// Returns `Err(ModeError::AlreadyRunning)` instead of creating a second
    /// activity when the previous one has not been stopped.
    fn start(&self) -> Result<ModeTask<'_>, ModeError>;

    /// Ask the activity to end at its next suspension point
    fn request_stop(&self);

    /// Whether the mode declared its own work complete
    fn is_done(&self) -> bool;

    /// Whether an activity has been started and not stopped or finished
    fn is_running(&self) -> bool;
}

/// Dependencies shared by every handler constructor
#[derive(Debug, Clone)]
pub struct ModeContext<D> {
    /// Async delay used for cooperative sleeps
    pub delay: D,
    pub timing: ModeTiming,
}

impl<D> ModeContext<D> {
    pub fn new(delay: D, timing: ModeTiming) -> Self {
        Self { delay, timing }
    }
}

/// Running and done flags of a handler
#[derive(Debug, Default)]
pub(crate) struct ModeFlags {
    running: Cell<bool>,
    done: Cell<bool>,
}

impl ModeFlags {
    /// Mark running; refuses a second concurrent activity
    pub(crate) fn begin(&self) -> Result<(), ModeError> {
        if self.running.replace(true) {
            return Err(ModeError::AlreadyRunning);
        }
        Ok(())
    }

    pub(crate) fn stop(&self) {
        self.running.set(false);
    }

    pub(crate) fn complete(&self) {
        self.done.set(true);
    }

    pub(crate) fn reset_done(&self) {
        self.done.set(false);
    }

    pub(crate) fn is_running(&self) -> bool {
        self.running.get()
    }

    pub(crate) fn is_done(&self) -> bool {
        self.done.get()
    }
}

/// State of a one-shot burn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BurnState {
    /// Not fired yet
    Armed,
    /// Fired successfully
    Fired,
    /// Fire attempted and failed; never retried
    Failed(ActuatorError),
}

/// Result of a [`OneShotBurn::fire_once`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BurnOutcome {
    /// The actuator was fired by this call
    Fired,
    /// An earlier call already fired it
    AlreadyFired,
}

/// Deployment actuator that fires at most once
pub struct OneShotBurn<A> {
    actuator: RefCell<A>,
    duration_ms: u32,
    holds_for_duration: bool,
    state: Cell<BurnState>,
}

impl<A: DeploymentActuator> OneShotBurn<A> {
    pub fn new(actuator: A, duration_ms: u32) -> Self {
        Self {
            holds_for_duration: actuator.holds_for_duration(),
            actuator: RefCell::new(actuator),
            duration_ms,
            state: Cell::new(BurnState::Armed),
        }
    }

    /// Whether a successful fire already took the whole burn duration
    pub fn holds_for_duration(&self) -> bool {
        self.holds_for_duration
    }

    pub fn state(&self) -> BurnState {
        self.state.get()
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    /// Fire the actuator unless it has been fired before
    ///
    /// A previous failure is reported again instead of retrying: re-firing a
    /// pyrotechnic without explicit re-arming is unsafe.
    pub fn fire_once(&self) -> Result<BurnOutcome, ModeError> {
        match self.state.get() {
            BurnState::Fired => return Ok(BurnOutcome::AlreadyFired),
            BurnState::Failed(e) => return Err(ModeError::Actuation(e)),
            BurnState::Armed => {}
        }

        let mut actuator = self
            .actuator
            .try_borrow_mut()
            .map_err(|_| ModeError::ActuatorBusy)?;

        // Flag before issuing; a fire request is never repeated
        self.state.set(BurnState::Failed(ActuatorError::Hardware));
        match actuator.fire(self.duration_ms) {
            Ok(()) => {
                self.state.set(BurnState::Fired);
                Ok(BurnOutcome::Fired)
            }
            Err(e) => {
                self.state.set(BurnState::Failed(e));
                Err(ModeError::Actuation(e))
            }
        }
    }
}
