//! Mock delay provider
//!
//! Implements both the blocking and the async `DelayNs` traits. Time is only
//! accounted, never waited; the async variant yields once per call so that
//! cooperative loops hand control back to whoever is polling them.

use alloc::rc::Rc;
use core::cell::Cell;

/// Delay that records requested time instead of sleeping
#[derive(Debug, Clone, Default)]
pub struct MockDelay {
    elapsed_ns: Rc<Cell<u64>>,
    calls: Rc<Cell<u32>>,
}

impl MockDelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total requested delay across all clones (ms)
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ns.get() / 1_000_000
    }

    /// Number of delay calls across all clones
    pub fn calls(&self) -> u32 {
        self.calls.get()
    }

    fn record(&self, ns: u64) {
        self.elapsed_ns.set(self.elapsed_ns.get().saturating_add(ns));
        self.calls.set(self.calls.get().saturating_add(1));
    }
}

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.record(u64::from(ns));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.record(u64::from(ms) * 1_000_000);
    }
}

impl embedded_hal_async::delay::DelayNs for MockDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.record(u64::from(ns));
        embassy_futures::yield_now().await;
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.record(u64::from(ms) * 1_000_000);
        embassy_futures::yield_now().await;
    }
}
