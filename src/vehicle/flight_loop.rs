//! Flight Loop
//!
//! Top-level periodic driver around the [`MissionController`].
//!
//! ## Per tick
//!
//! - Normal / Maximum power: read telemetry, step the controller, then let
//!   the active mode activity run for one tick period
//! - Critical / Minimum power: force Bootup and hibernate (long or short)
//! - Pet the watchdog
//!
//! Every transition is recorded with its timestamp in a bounded history. A
//! forced Bootup is only recorded when the mode actually changed, so repeated
//! low-power ticks do not flush the history.
//!
//! ## Example
//!
//! ```rust,ignore
//! #[embassy_executor::task]
//! async fn mission_task(
//!     registry: &'static ModeRegistry<Delay, BurnWire<Output<'static>, Delay>>,
//!     telemetry: &'static TelemetryBus,
//!     watchdog: HardwareWatchdog,
//!     power: PowerManager,
//! ) {
//!     let controller = unwrap!(MissionController::new(registry, ModeThresholds::default()));
//!     let mut flight = FlightLoop::new(controller, telemetry, watchdog, power, Delay, EmbassyTime, 1_000);
//!     flight.run().await
//! }
//! ```

use embassy_futures::select::select;
use embedded_hal_async::delay::DelayNs;
use heapless::HistoryBuffer;
use mission_fsm_core::mode::PowerMode;
use mission_fsm_core::telemetry::TelemetrySource;
use mission_fsm_core::traits::TimeSource;
use mission_fsm_core::transition::Transition;

use super::controller::MissionController;

/// Transitions kept in the flight loop history
pub const HISTORY_LEN: usize = 16;

/// Hardware watchdog feed
pub trait Watchdog {
    fn pet(&mut self);
}

/// Power-mode policy and low-power sleep
///
/// The policy deciding the power mode lives outside the mission controller.
#[allow(async_fn_in_trait)]
pub trait PowerSupervisor {
    /// Current power mode
    fn power_mode(&self) -> PowerMode;

    /// Sleep according to `mode` (Critical: long, Minimum: short)
    async fn hibernate(&mut self, mode: PowerMode);
}

/// Timestamped transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TransitionRecord {
    /// Clock reading when the transition was taken (ms)
    pub at_ms: u64,
    pub transition: Transition,
}

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Mission stepped; the transition taken, if any
    Stepped(Option<Transition>),
    /// Power too low for mission work; Bootup forced, then hibernated
    Hibernated(PowerMode),
}

/// Periodic mission driver
pub struct FlightLoop<'a, S, W, P, D, C> {
    controller: MissionController<'a>,
    telemetry: S,
    watchdog: W,
    power: P,
    delay: D,
    clock: C,
    tick_ms: u32,
    history: HistoryBuffer<TransitionRecord, HISTORY_LEN>,
}

impl<'a, S, W, P, D, C> FlightLoop<'a, S, W, P, D, C>
where
    S: TelemetrySource,
    W: Watchdog,
    P: PowerSupervisor,
    D: DelayNs,
    C: TimeSource,
{
    /// Create flight loop
    ///
    /// # Arguments
    ///
    /// * `controller` - Mission controller (not yet started)
    /// * `telemetry` - Snapshot source written by the sensor tasks
    /// * `watchdog` - Fed once per tick
    /// * `power` - Power-mode policy and hibernation
    /// * `delay` - Tick pacing
    /// * `clock` - Timestamps for the transition history
    /// * `tick_ms` - Tick period
    pub fn new(
        controller: MissionController<'a>,
        telemetry: S,
        watchdog: W,
        power: P,
        delay: D,
        clock: C,
        tick_ms: u32,
    ) -> Self {
        Self {
            controller,
            telemetry,
            watchdog,
            power,
            delay,
            clock,
            tick_ms,
            history: HistoryBuffer::new(),
        }
    }

    /// Start the mission, then tick forever
    pub async fn run(&mut self) {
        if let Err(_e) = self.controller.start() {
            crate::log_error!("Mission start failed: {}", _e);
        }
        loop {
            self.tick().await;
        }
    }

    /// One pass of the loop
    pub async fn tick(&mut self) -> TickOutcome {
        let power = self.power.power_mode();
        if !power.runs_mission() {
            if let Some(transition) = self.controller.reboot() {
                self.record(transition);
            }
            self.watchdog.pet();
            crate::log_info!("Power mode {}: hibernating", power);
            self.power.hibernate(power).await;
            return TickOutcome::Hibernated(power);
        }

        let snapshot = self.telemetry.snapshot();
        let transition = self.controller.step(&snapshot);
        if let Some(transition) = transition {
            self.record(transition);
        }

        // Mode activity runs for the rest of the tick
        select(self.controller.drive(), self.delay.delay_ms(self.tick_ms)).await;

        self.watchdog.pet();
        TickOutcome::Stepped(transition)
    }

    fn record(&mut self, transition: Transition) {
        self.history.write(TransitionRecord {
            at_ms: self.clock.now_ms(),
            transition,
        });
    }

    /// Recorded transitions, oldest first
    pub fn history(&self) -> impl Iterator<Item = &TransitionRecord> + '_ {
        self.history.oldest_ordered()
    }

    pub fn last_transition(&self) -> Option<&TransitionRecord> {
        self.history.recent()
    }

    pub fn controller(&self) -> &MissionController<'a> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut MissionController<'a> {
        &mut self.controller
    }
}
