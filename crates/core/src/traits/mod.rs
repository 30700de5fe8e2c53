//! Trait seams between mission logic and the platform
//!
//! # Design
//!
//! - Trait definitions are pure and have no feature gates
//! - Mock implementations that need no async runtime live here
//! - Hardware implementations (burn wire, Embassy clock) live in the root crate

pub mod actuator;
pub mod time;

pub use actuator::{ActuatorError, DeploymentActuator};
pub use time::{MockTime, TimeSource};
