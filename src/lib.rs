#![cfg_attr(not(test), no_std)]

//! mission_fsm - Mission-mode controller for a small-satellite flight computer
//!
//! Embassy-style cooperative half of the mission controller. The pure guard
//! logic lives in `mission_fsm_core`; this crate adds the mode handlers that
//! own the background activities, the supervisor holding the single active
//! task, and the flight loop that drives both.
//!
//! A global allocator is required on target: mode activities are boxed
//! futures owned by the supervisor.

extern crate alloc;

// Logging macros (log_info!, log_warn!, log_error!, log_debug!)
pub mod core;

// Burn-wire driver
pub mod devices;

// Mock platform for host tests
pub mod platform;

// Mode handlers, supervisor, controller and flight loop
pub mod vehicle;

pub use mission_fsm_core::mode::{MissionMode, ModeError, PowerMode};
pub use mission_fsm_core::parameters::MissionParams;
pub use mission_fsm_core::telemetry::{TelemetrySnapshot, TelemetrySource};
pub use mission_fsm_core::transition::{Transition, TransitionCause};
