//! Platform support
//!
//! Hardware bindings come from `embedded-hal` traits implemented by the board
//! HAL; this module only carries the host-side mock platform.

#[cfg(any(test, feature = "mock"))]
pub mod mock;
