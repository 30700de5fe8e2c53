//! mission_fsm_core - Pure no_std mission-mode logic for the flight computer
//!
//! This crate contains the platform-agnostic half of the mission-mode
//! controller. Everything here is synchronous, allocation-free and testable on
//! host without any feature flags or Embassy dependencies.
//!
//! # Design Principles
//!
//! - **Zero cfg**: only optional `defmt::Format` derives are feature gated
//! - **Pure no_std**: no std library dependencies
//! - **Trait abstractions**: actuators, clocks and telemetry injected via traits
//!
//! # Modules
//!
//! - [`mode`]: Mission mode identifiers, power modes and mode error types
//! - [`telemetry`]: Read-only telemetry snapshot consumed by the guards
//! - [`transition`]: Guard table, checkpoint and deploy-once latches
//! - [`parameters`]: Guard thresholds and mode timing with validation
//! - [`traits`]: Deployment actuator and time source abstractions

#![no_std]

pub mod mode;
pub mod parameters;
pub mod telemetry;
pub mod traits;
pub mod transition;
