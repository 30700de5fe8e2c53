//! Transition latches
//!
//! Both latches are owned by the transition engine and never touched by a
//! mode handler.

/// Battery checkpoint with hysteresis
///
/// Armed when the battery crosses the checkpoint level in Antennas or Comms and
/// stays armed while the battery sags again, until it enables a transition or
/// the engine leaves the mode by any other route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CheckpointLatch {
    armed: bool,
}

impl CheckpointLatch {
    pub const fn new() -> Self {
        Self { armed: false }
    }

    pub fn arm(&mut self) {
        self.armed = true;
    }

    pub const fn is_armed(&self) -> bool {
        self.armed
    }

    /// Consume an armed latch; returns whether it was armed
    pub fn consume(&mut self) -> bool {
        core::mem::replace(&mut self.armed, false)
    }

    pub fn clear(&mut self) {
        self.armed = false;
    }
}

/// Once-per-mission latch for the payload deployment
///
/// Set the first time Comms hands off; there is no way to reset it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeployOnceLatch {
    deployed: bool,
}

impl DeployOnceLatch {
    pub const fn new() -> Self {
        Self { deployed: false }
    }

    /// Claim the deployment; `true` only on the first call
    pub fn claim(&mut self) -> bool {
        !core::mem::replace(&mut self.deployed, true)
    }

    pub const fn is_set(&self) -> bool {
        self.deployed
    }
}
