//! Mission parameters
//!
//! Guard thresholds and mode timing. The defaults are the flight values; the
//! structs exist so that ground tests and simulations can tighten timing
//! without touching the guard logic. There is no persistent store here.

pub mod error;
pub mod thresholds;
pub mod timing;

pub use error::ParameterError;
pub use thresholds::ModeThresholds;
pub use timing::{ModeTiming, MAX_BURN_MS};

/// Complete parameter set for the mission controller
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MissionParams {
    pub thresholds: ModeThresholds,
    pub timing: ModeTiming,
}

impl MissionParams {
    /// Validate thresholds and timing
    pub fn validate(&self) -> Result<(), ParameterError> {
        self.thresholds.validate()?;
        self.timing.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params_valid() {
        assert_eq!(MissionParams::default().validate(), Ok(()));
    }

    #[test]
    fn test_timing_error_propagates() {
        let mut params = MissionParams::default();
        params.timing.deploy_burn_ms = 0;
        assert_eq!(
            params.validate(),
            Err(ParameterError::InvalidDuration("deploy_burn_ms"))
        );
    }
}
