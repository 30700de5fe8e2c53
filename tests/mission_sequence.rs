//! Host integration test: full mission sequence through the public API
//!
//! Bootup -> Detumble -> Charge -> Antennas -> Comms -> Deploy -> Orient
//! -> Comms -> Orient, driven by the flight loop with a scripted power
//! supervisor and telemetry written to the shared bus between ticks.

use std::cell::Cell;
use std::rc::Rc;

use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use mission_fsm::vehicle::mode::ModeContext;
use mission_fsm::vehicle::{
    FlightLoop, MissionController, ModeLookup, ModeRegistry, PowerSupervisor, TelemetryBus,
    TickOutcome, Watchdog,
};
use mission_fsm::{MissionMode, MissionParams, PowerMode, TelemetrySnapshot, TransitionCause};
use mission_fsm_core::traits::{ActuatorError, DeploymentActuator, MockTime};

/// Every delay, whatever its length, is one yield
#[derive(Clone, Default)]
struct YieldingDelay;

impl embedded_hal_async::delay::DelayNs for YieldingDelay {
    async fn delay_ns(&mut self, _ns: u32) {
        embassy_futures::yield_now().await;
    }

    async fn delay_us(&mut self, _us: u32) {
        embassy_futures::yield_now().await;
    }

    async fn delay_ms(&mut self, _ms: u32) {
        embassy_futures::yield_now().await;
    }
}

#[derive(Clone, Default)]
struct CountingBurnWire {
    fires: Rc<Cell<u32>>,
}

impl DeploymentActuator for CountingBurnWire {
    fn fire(&mut self, _duration_ms: u32) -> Result<(), ActuatorError> {
        self.fires.set(self.fires.get() + 1);
        Ok(())
    }
}

#[derive(Default)]
struct NullWatchdog;

impl Watchdog for NullWatchdog {
    fn pet(&mut self) {}
}

struct ScriptedPower {
    mode: Rc<Cell<PowerMode>>,
}

impl PowerSupervisor for ScriptedPower {
    fn power_mode(&self) -> PowerMode {
        self.mode.get()
    }

    async fn hibernate(&mut self, _mode: PowerMode) {}
}

fn telemetry(battery: f32, rate: f32, orientation: f32) -> TelemetrySnapshot {
    TelemetrySnapshot::new()
        .with_battery(battery)
        .with_angular_velocity(rate)
        .with_orientation([orientation; 3])
}

#[test]
fn full_mission_sequence_fires_each_burn_wire_once() {
    let params = MissionParams::default();
    params.validate().unwrap();

    let antenna = CountingBurnWire::default();
    let deploy = CountingBurnWire::default();
    let registry = ModeRegistry::new(
        ModeContext::new(YieldingDelay, params.timing),
        antenna.clone(),
        deploy.clone(),
    )
    .unwrap();
    let bus = TelemetryBus::<NoopRawMutex>::new();
    let clock = MockTime::new();
    let power = Rc::new(Cell::new(PowerMode::Normal));

    let controller = MissionController::new(&registry, params.thresholds).unwrap();
    let mut flight = FlightLoop::new(
        controller,
        &bus,
        NullWatchdog,
        ScriptedPower {
            mode: power.clone(),
        },
        YieldingDelay,
        &clock,
        1_000,
    );
    flight.controller_mut().start().unwrap();

    // (telemetry, expected mode after the tick)
    let script = [
        (telemetry(60.0, 5.0, 0.0), MissionMode::Bootup),
        (telemetry(60.0, 5.0, 0.0), MissionMode::Detumble),
        (telemetry(60.0, 0.0, 0.0), MissionMode::Charge),
        (telemetry(74.0, 0.0, 0.0), MissionMode::Charge),
        (telemetry(75.0, 0.0, 0.0), MissionMode::Antennas),
        (telemetry(55.0, 0.0, 95.0), MissionMode::Comms),
        (telemetry(50.0, 0.5, 95.0), MissionMode::Deploy),
        (telemetry(45.0, 0.5, 95.0), MissionMode::Orient),
        (telemetry(45.0, 0.5, 95.0), MissionMode::Comms),
        (telemetry(50.0, 0.5, 95.0), MissionMode::Orient),
    ];

    for (step, (snapshot, expected)) in script.iter().enumerate() {
        bus.publish(*snapshot);
        clock.advance_ms(1_000);
        let outcome = embassy_futures::block_on(flight.tick());
        assert!(matches!(outcome, TickOutcome::Stepped(_)), "step {step}");
        assert_eq!(flight.controller().mode(), *expected, "step {step}");
    }

    assert_eq!(antenna.fires.get(), 1);
    assert_eq!(deploy.fires.get(), 1);
    assert!(flight.controller().deployed());
    assert!(registry.antennas().burn_state() == mission_fsm::vehicle::mode::BurnState::Fired);

    let modes: Vec<MissionMode> = flight.history().map(|r| r.transition.to).collect();
    assert_eq!(
        modes,
        [
            MissionMode::Detumble,
            MissionMode::Charge,
            MissionMode::Antennas,
            MissionMode::Comms,
            MissionMode::Deploy,
            MissionMode::Orient,
            MissionMode::Comms,
            MissionMode::Orient,
        ]
    );
}

#[test]
fn emergency_override_then_low_power_reboot() {
    let params = MissionParams::default();
    let antenna = CountingBurnWire::default();
    let registry = ModeRegistry::new(
        ModeContext::new(YieldingDelay, params.timing),
        antenna.clone(),
        CountingBurnWire::default(),
    )
    .unwrap();
    let bus = TelemetryBus::<NoopRawMutex>::new();
    let clock = MockTime::new();
    let power = Rc::new(Cell::new(PowerMode::Normal));

    let controller = MissionController::new(&registry, params.thresholds).unwrap();
    let mut flight = FlightLoop::new(
        controller,
        &bus,
        NullWatchdog,
        ScriptedPower {
            mode: power.clone(),
        },
        YieldingDelay,
        &clock,
        1_000,
    );
    flight.controller_mut().start().unwrap();

    bus.publish(telemetry(60.0, 5.0, 0.0));
    embassy_futures::block_on(flight.tick());

    // Emergency override straight out of Bootup
    bus.publish(telemetry(20.0, 5.0, 0.0));
    let outcome = embassy_futures::block_on(flight.tick());
    let TickOutcome::Stepped(Some(t)) = outcome else {
        panic!("expected a transition, got {outcome:?}");
    };
    assert_eq!(t.cause, TransitionCause::EmergencyLowBattery);
    assert_eq!(t.to, MissionMode::Charge);

    // Charge never re-triggers the override
    let outcome = embassy_futures::block_on(flight.tick());
    assert_eq!(outcome, TickOutcome::Stepped(None));

    power.set(PowerMode::Critical);
    let outcome = embassy_futures::block_on(flight.tick());
    assert_eq!(outcome, TickOutcome::Hibernated(PowerMode::Critical));
    assert_eq!(flight.controller().mode(), MissionMode::Bootup);
    assert!(registry.handler(MissionMode::Bootup).is_running());
    assert_eq!(antenna.fires.get(), 0);
}
