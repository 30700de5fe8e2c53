//! Telemetry Bus
//!
//! Shared cell that sensor-polling tasks write into and the flight loop reads
//! a snapshot from once per tick. Writers update individual fields; readers
//! always get a whole copy, so a guard never sees a snapshot change under it.
//!
//! # Usage
//!
//! ```rust,ignore
//! static TELEMETRY: TelemetryBus = TelemetryBus::new();
//!
//! // Power monitor task
//! TELEMETRY.update(|t| t.battery_percent = Some(percent));
//!
//! // Flight loop
//! let snapshot = TELEMETRY.snapshot();
//! ```

use core::cell::Cell;

use embassy_sync::blocking_mutex::raw::{CriticalSectionRawMutex, RawMutex};
use embassy_sync::blocking_mutex::Mutex;
use mission_fsm_core::telemetry::{TelemetrySnapshot, TelemetrySource};

/// Latest telemetry values shared between tasks
pub struct TelemetryBus<M: RawMutex = CriticalSectionRawMutex> {
    inner: Mutex<M, Cell<TelemetrySnapshot>>,
}

impl<M: RawMutex> TelemetryBus<M> {
    /// Empty bus; no telemetry-driven guard fires until something is published
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(Cell::new(TelemetrySnapshot::new())),
        }
    }

    /// Replace every field
    pub fn publish(&self, snapshot: TelemetrySnapshot) {
        self.inner.lock(|cell| cell.set(snapshot));
    }

    /// Modify some fields in place
    pub fn update<F: FnOnce(&mut TelemetrySnapshot)>(&self, f: F) {
        self.inner.lock(|cell| {
            let mut snapshot = cell.get();
            f(&mut snapshot);
            cell.set(snapshot);
        });
    }
}

impl<M: RawMutex> Default for TelemetryBus<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: RawMutex> TelemetrySource for TelemetryBus<M> {
    fn snapshot(&self) -> TelemetrySnapshot {
        self.inner.lock(|cell| cell.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;

    #[test]
    fn test_starts_empty() {
        let bus = TelemetryBus::<NoopRawMutex>::new();
        assert_eq!(bus.snapshot(), TelemetrySnapshot::new());
    }

    #[test]
    fn test_partial_update_keeps_other_fields() {
        let bus = TelemetryBus::<NoopRawMutex>::new();
        bus.publish(TelemetrySnapshot::new().with_battery(80.0).with_angular_velocity(3.0));

        bus.update(|t| t.angular_velocity = Some(0.0));

        let snapshot = bus.snapshot();
        assert_eq!(snapshot.battery(), Some(80.0));
        assert_eq!(snapshot.angular_rate(), Some(0.0));
    }
}
