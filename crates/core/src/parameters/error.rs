//! Parameter error types

/// Errors from parameter validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParameterError {
    /// Threshold outside its range or out of order with its neighbours
    InvalidThreshold(&'static str),
    /// Duration is zero or above its limit
    InvalidDuration(&'static str),
}

impl core::fmt::Display for ParameterError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParameterError::InvalidThreshold(name) => write!(f, "invalid threshold: {}", name),
            ParameterError::InvalidDuration(name) => write!(f, "invalid duration: {}", name),
        }
    }
}
