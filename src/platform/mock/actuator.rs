//! Mock deployment actuator

use alloc::rc::Rc;
use core::cell::Cell;

use mission_fsm_core::traits::{ActuatorError, DeploymentActuator};

#[derive(Debug, Default)]
struct ActuatorState {
    fires: Cell<u32>,
    last_duration_ms: Cell<Option<u32>>,
    fail_with: Cell<Option<ActuatorError>>,
    holds_for_duration: Cell<bool>,
}

/// Deployment actuator that counts fire requests
#[derive(Debug, Clone, Default)]
pub struct MockActuator {
    state: Rc<ActuatorState>,
}

impl MockActuator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Actuator whose every fire request fails with `error`
    pub fn failing(error: ActuatorError) -> Self {
        let actuator = Self::new();
        actuator.state.fail_with.set(Some(error));
        actuator
    }

    /// Actuator whose fire call spans the whole burn, like `BurnWire`
    pub fn holding() -> Self {
        let actuator = Self::new();
        actuator.state.holds_for_duration.set(true);
        actuator
    }

    /// Number of fire requests issued, including failed ones
    pub fn fires(&self) -> u32 {
        self.state.fires.get()
    }

    pub fn last_duration_ms(&self) -> Option<u32> {
        self.state.last_duration_ms.get()
    }
}

impl DeploymentActuator for MockActuator {
    fn fire(&mut self, duration_ms: u32) -> Result<(), ActuatorError> {
        self.state.fires.set(self.state.fires.get() + 1);
        self.state.last_duration_ms.set(Some(duration_ms));
        match self.state.fail_with.get() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn holds_for_duration(&self) -> bool {
        self.state.holds_for_duration.get()
    }
}
