//! Core infrastructure
//!
//! Target-independent plumbing shared by the vehicle modules.

pub mod logging;
