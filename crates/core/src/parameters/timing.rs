//! Mode timing
//!
//! Durations used by the mode handlers' cooperative loops and burn-wire
//! actuations. All values are milliseconds.

use super::error::ParameterError;

/// Longest burn the burn-wire driver accepts (ms)
pub const MAX_BURN_MS: u32 = 15_000;

/// Timing for mode background activities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeTiming {
    /// Bootup settling time before the mode reports done
    pub bootup_settle_ms: u32,
    /// Sleep between cooperative iterations of indefinite modes
    pub idle_period_ms: u32,
    /// Delay before the antenna burn
    pub antenna_warmup_ms: u32,
    /// Antenna burn-wire duration
    pub antenna_burn_ms: u32,
    /// Payload burn-wire duration, also the post-burn wait
    pub deploy_burn_ms: u32,
}

impl Default for ModeTiming {
    fn default() -> Self {
        Self {
            bootup_settle_ms: 10_000,
            idle_period_ms: 2_000,
            antenna_warmup_ms: 2_000,
            antenna_burn_ms: 5_000,
            deploy_burn_ms: 10_000,
        }
    }
}

impl ModeTiming {
    pub fn validate(&self) -> Result<(), ParameterError> {
        if self.idle_period_ms == 0 {
            return Err(ParameterError::InvalidDuration("idle_period_ms"));
        }
        let burns = [
            ("antenna_burn_ms", self.antenna_burn_ms),
            ("deploy_burn_ms", self.deploy_burn_ms),
        ];
        for (name, ms) in burns {
            if ms == 0 || ms > MAX_BURN_MS {
                return Err(ParameterError::InvalidDuration(name));
            }
        }
        Ok(())
    }
}
