//! Mission Mode Types
//!
//! Identifiers for the seven mission modes, the power modes reported by the
//! electrical power system, and the error type shared by mode handlers.
//!
//! Handler implementations (Embassy futures, burn-wire wiring) live in the
//! root crate. This module only defines the vocabulary.

mod error;
mod id;
mod power;

pub use error::ModeError;
pub use id::MissionMode;
pub use power::PowerMode;
