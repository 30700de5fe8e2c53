//! Device drivers
//!
//! Drivers written against `embedded-hal` traits so they run unchanged on the
//! board HAL and on the mock platform.
//!
//! ## Modules
//!
//! - `burnwire`: Burn-wire deployment actuator (antenna and payload release)

pub mod burnwire;

pub use burnwire::BurnWire;
