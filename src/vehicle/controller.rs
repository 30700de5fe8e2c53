//! Mission Controller
//!
//! Ties the transition engine to the mode supervisor. The flight loop calls
//! [`MissionController::start`] once, then [`MissionController::step`] every
//! tick with the latest telemetry, and polls the active activity through
//! [`MissionController::drive`] between steps.
//!
//! ## Safety
//!
//! - Thresholds that fail validation are rejected at construction
//! - A step before `start()` is refused and logged, never evaluated
//! - A handler that fails to start leaves its mode "not running, not done";
//!   the emergency override can still leave it
//! - No failure in here propagates as a panic

use mission_fsm_core::mode::{MissionMode, ModeError};
use mission_fsm_core::parameters::{ModeThresholds, ParameterError};
use mission_fsm_core::telemetry::TelemetrySnapshot;
use mission_fsm_core::transition::{Transition, TransitionEngine};

use super::mode_supervisor::{ModeSupervisor, TaskStatus};
use super::registry::ModeLookup;

/// Transition engine plus active-task supervisor
pub struct MissionController<'a> {
    engine: TransitionEngine,
    supervisor: ModeSupervisor<'a>,
    started: bool,
}

impl<'a> MissionController<'a> {
    /// Create controller in Bootup (not yet activated)
    ///
    /// # Arguments
    ///
    /// * `handlers` - Mode registry, built once at startup
    /// * `thresholds` - Guard thresholds, rejected if they fail validation
    pub fn new(
        handlers: &'a dyn ModeLookup,
        thresholds: ModeThresholds,
    ) -> Result<Self, ParameterError> {
        let engine = TransitionEngine::new(thresholds).map_err(|e| {
            crate::log_error!("Rejected mission thresholds: {}", e);
            e
        })?;
        Ok(Self {
            engine,
            supervisor: ModeSupervisor::new(handlers),
            started: false,
        })
    }

    /// Activate Bootup; only the first call does anything
    ///
    /// A Bootup start failure is returned but still counts as started, so the
    /// guard table runs and the emergency override stays reachable.
    pub fn start(&mut self) -> Result<(), ModeError> {
        if self.started {
            crate::log_warn!("Mission controller already started");
            return Err(ModeError::AlreadyStarted);
        }
        self.started = true;

        crate::log_info!("Mission controller starting in {}", self.engine.mode().name());
        self.supervisor.switch_to(self.engine.mode())
    }

    /// Evaluate the guard table once and switch activities on a transition
    ///
    /// Returns the transition taken, if any.
    pub fn step(&mut self, telemetry: &TelemetrySnapshot) -> Option<Transition> {
        if !self.started {
            crate::log_warn!("Mission step before start: {}", ModeError::NotStarted);
            return None;
        }

        let mode_done = self.supervisor.active_done();
        let transition = self.engine.evaluate(telemetry, mode_done)?;
        crate::log_info!("Mode transition: {}", transition);

        // Start failure is recorded in the supervisor status and logged there
        let _ = self.supervisor.switch_to(transition.to);
        Some(transition)
    }

    /// Force the mission back into Bootup
    ///
    /// Used by the flight loop when the power mode no longer allows mission
    /// activity. Also marks the controller started. The Bootup activity is
    /// restarted every time; the transition is only returned when the mode
    /// actually changed.
    pub fn reboot(&mut self) -> Option<Transition> {
        let transition = self.engine.reboot();
        self.started = true;
        if let Some(_t) = transition {
            crate::log_info!("Mode reset: {}", _t);
        }
        let _ = self.supervisor.switch_to(MissionMode::Bootup);
        transition
    }

    /// Poll the active activity; never completes
    pub async fn drive(&mut self) {
        self.supervisor.drive().await
    }

    pub fn mode(&self) -> MissionMode {
        self.engine.mode()
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn status(&self) -> TaskStatus {
        self.supervisor.status()
    }

    pub fn checkpoint_armed(&self) -> bool {
        self.engine.checkpoint_armed()
    }

    pub fn deployed(&self) -> bool {
        self.engine.deployed()
    }
}
