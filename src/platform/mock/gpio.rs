//! Mock output pin for testing

use alloc::rc::Rc;
use core::cell::Cell;

use embedded_hal::digital::{Error, ErrorKind, ErrorType, OutputPin};

/// Error returned by a [`MockPin`] configured to fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockPinError;

impl Error for MockPinError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

#[derive(Debug, Default)]
struct PinState {
    high: Cell<bool>,
    rising_edges: Cell<u32>,
    fail_high: Cell<bool>,
    fail_low: Cell<bool>,
}

/// Mock GPIO output
///
/// Tracks level and rising edges for test verification. Can be told to fail
/// `set_high` or `set_low` to exercise hardware fault paths.
#[derive(Debug, Clone, Default)]
pub struct MockPin {
    state: Rc<PinState>,
}

impl MockPin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_high(&self) -> bool {
        self.state.high.get()
    }

    pub fn rising_edges(&self) -> u32 {
        self.state.rising_edges.get()
    }

    /// Make subsequent `set_high` calls fail
    pub fn fail_high(&self, fail: bool) {
        self.state.fail_high.set(fail);
    }

    /// Make subsequent `set_low` calls fail, leaving the level unchanged
    pub fn fail_low(&self, fail: bool) {
        self.state.fail_low.set(fail);
    }
}

impl ErrorType for MockPin {
    type Error = MockPinError;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        if self.state.fail_low.get() {
            return Err(MockPinError);
        }
        self.state.high.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        if self.state.fail_high.get() {
            return Err(MockPinError);
        }
        if !self.state.high.get() {
            self.state
                .rising_edges
                .set(self.state.rising_edges.get() + 1);
        }
        self.state.high.set(true);
        Ok(())
    }
}
