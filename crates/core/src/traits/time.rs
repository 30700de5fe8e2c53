//! Millisecond clock abstraction
//!
//! The flight loop timestamps transitions through this trait so that history
//! records can be checked on host without an Embassy time driver.

use core::cell::Cell;

/// Monotonic millisecond clock
pub trait TimeSource {
    /// Milliseconds since system start
    fn now_ms(&self) -> u64;
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }
}

/// Manually advanced clock for host tests
///
/// ```
/// use mission_fsm_core::traits::{MockTime, TimeSource};
///
/// let time = MockTime::new();
/// time.advance_ms(250);
/// assert_eq!(time.now_ms(), 250);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockTime {
    now_ms: Cell<u64>,
}

impl MockTime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the clock at an arbitrary uptime
    pub fn starting_at(ms: u64) -> Self {
        Self {
            now_ms: Cell::new(ms),
        }
    }

    pub fn set_ms(&self, ms: u64) {
        self.now_ms.set(ms);
    }

    pub fn advance_ms(&self, ms: u64) {
        self.now_ms.set(self.now_ms.get().saturating_add(ms));
    }
}

impl TimeSource for MockTime {
    fn now_ms(&self) -> u64 {
        self.now_ms.get()
    }
}
