//! Spacecraft vehicle implementation
//!
//! - `mode`: Mode handlers owning each mode's background activity
//! - `registry`: Eagerly built mode-to-handler mapping
//! - `mode_supervisor`: Single active task slot with hard cancellation
//! - `controller`: Transition engine wired to the supervisor
//! - `telemetry_bus`: Shared telemetry cell written by sensor tasks
//! - `flight_loop`: Periodic driver loop with watchdog and power-mode handling

pub mod controller;
pub mod flight_loop;
pub mod mode;
pub mod mode_supervisor;
pub mod registry;
pub mod telemetry_bus;

pub use controller::MissionController;
pub use flight_loop::{FlightLoop, PowerSupervisor, TickOutcome, TransitionRecord, Watchdog};
pub use mode::{ModeContext, ModeHandler, ModeTask};
pub use mode_supervisor::{ModeSupervisor, TaskStatus};
pub use registry::{ModeLookup, ModeRegistry};
pub use telemetry_bus::TelemetryBus;
