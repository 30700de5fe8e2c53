//! Mock platform implementation for testing
//!
//! Mock implementations of the hardware seams used by the mode handlers, so
//! mission behaviour can be exercised on host without a board.
//!
//! # Feature Gate
//!
//! This module is available in two contexts:
//! - During test builds (`#[cfg(test)]`)
//! - When the `mock` feature is enabled
//!
//! Mocks share their recorded state through `Rc`, so a clone handed to a
//! handler can be inspected from the test afterwards.

#![cfg(any(test, feature = "mock"))]

mod actuator;
mod delay;
mod gpio;

pub use actuator::MockActuator;
pub use delay::MockDelay;
pub use gpio::{MockPin, MockPinError};
