//! Transition guard thresholds
//!
//! # Guards
//!
//! | Guard               | Field                    | Default |
//! |---------------------|--------------------------|---------|
//! | Emergency override  | `emergency_battery`      | <= 20 % |
//! | Charge -> Antennas  | `charged_battery`        | >= 75 % |
//! | Checkpoint arming   | `checkpoint_battery`     | >= 50 % |
//! | Orientation lock    | `orientation_confidence` | > 90 %  |
//! | Detumble -> Charge  | `detumbled_rate`         | <= 0    |
//! | Comms -> Deploy     | `comms_rate`             | <= 1    |
//! | Deploy -> Orient    | `deploy_exit_battery`    | >= 30 % |

use super::error::ParameterError;

/// Battery percentage that forces Charge from any other mode
pub const EMERGENCY_BATTERY_PERCENT: f32 = 20.0;
/// Battery percentage that ends charging
pub const CHARGED_BATTERY_PERCENT: f32 = 75.0;
/// Battery percentage that arms the checkpoint latch
pub const CHECKPOINT_BATTERY_PERCENT: f32 = 50.0;
/// Per-axis confidence that must be exceeded for an orientation lock
pub const ORIENTATION_CONFIDENCE_PERCENT: f32 = 90.0;
/// Angular velocity magnitude at which detumbling is complete
pub const DETUMBLED_RATE: f32 = 0.0;
/// Angular velocity magnitude tolerated for leaving Comms
pub const COMMS_RATE: f32 = 1.0;
/// Battery percentage required to leave Deploy
pub const DEPLOY_EXIT_BATTERY_PERCENT: f32 = 30.0;

/// Thresholds read by the transition engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeThresholds {
    pub emergency_battery: f32,
    pub charged_battery: f32,
    pub checkpoint_battery: f32,
    pub orientation_confidence: f32,
    pub detumbled_rate: f32,
    pub comms_rate: f32,
    pub deploy_exit_battery: f32,
}

impl Default for ModeThresholds {
    fn default() -> Self {
        Self {
            emergency_battery: EMERGENCY_BATTERY_PERCENT,
            charged_battery: CHARGED_BATTERY_PERCENT,
            checkpoint_battery: CHECKPOINT_BATTERY_PERCENT,
            orientation_confidence: ORIENTATION_CONFIDENCE_PERCENT,
            detumbled_rate: DETUMBLED_RATE,
            comms_rate: COMMS_RATE,
            deploy_exit_battery: DEPLOY_EXIT_BATTERY_PERCENT,
        }
    }
}

impl ModeThresholds {
    /// Check ranges and ordering
    ///
    /// Every battery level that lets a mode progress must sit above the
    /// emergency level, otherwise the override and the guard would fight.
    pub fn validate(&self) -> Result<(), ParameterError> {
        let percents = [
            ("emergency_battery", self.emergency_battery),
            ("charged_battery", self.charged_battery),
            ("checkpoint_battery", self.checkpoint_battery),
            ("orientation_confidence", self.orientation_confidence),
            ("deploy_exit_battery", self.deploy_exit_battery),
        ];
        for (name, value) in percents {
            if !value.is_finite() || !(0.0..=100.0).contains(&value) {
                return Err(ParameterError::InvalidThreshold(name));
            }
        }

        let rates = [
            ("detumbled_rate", self.detumbled_rate),
            ("comms_rate", self.comms_rate),
        ];
        for (name, value) in rates {
            if !value.is_finite() || value < 0.0 {
                return Err(ParameterError::InvalidThreshold(name));
            }
        }

        if self.checkpoint_battery <= self.emergency_battery {
            return Err(ParameterError::InvalidThreshold("checkpoint_battery"));
        }
        if self.deploy_exit_battery <= self.emergency_battery {
            return Err(ParameterError::InvalidThreshold("deploy_exit_battery"));
        }
        if self.charged_battery < self.checkpoint_battery {
            return Err(ParameterError::InvalidThreshold("charged_battery"));
        }

        Ok(())
    }
}
