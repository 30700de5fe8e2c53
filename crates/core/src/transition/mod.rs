//! Transition Engine
//!
//! Fixed-priority, first-match-wins guard table deciding the next mission
//! mode from the current mode, a telemetry snapshot and two latches.
//!
//! # Contents
//!
//! - [`TransitionEngine`]: guard evaluation, owns the mode identifier
//! - [`CheckpointLatch`]: sticky battery checkpoint for Antennas/Comms
//! - [`DeployOnceLatch`]: guarantees Deploy is entered at most once
//! - [`Transition`] / [`TransitionCause`]: decided transitions

mod engine;
mod latch;
mod types;

pub use engine::TransitionEngine;
pub use latch::{CheckpointLatch, DeployOnceLatch};
pub use types::{Transition, TransitionCause};
