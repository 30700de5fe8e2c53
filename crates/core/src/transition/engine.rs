//! Guard table evaluation
//!
//! Guards, in priority order (first match wins, at most one per call):
//!
//! 1. Emergency override: battery <= 20 % outside Charge -> Charge
//! 2. Bootup -> Detumble when Bootup reports done
//! 3. Detumble -> Charge when angular velocity <= 0
//! 4. Charge -> Antennas when battery >= 75 %
//! 5. Antennas -> Comms: checkpoint armed (battery >= 50 %) and orientation locked
//! 6. Comms -> Deploy (first time) or Orient: checkpoint armed and rate <= 1
//! 7. Deploy -> Orient when Deploy reports done and battery >= 30 %
//! 8. Orient -> Comms when orientation locked
//!
//! Guards 5 and 6 arm the checkpoint and test it in the same call, so a tick
//! that crosses the battery level with the other condition already met
//! transitions immediately.

use crate::mode::MissionMode;
use crate::parameters::{ModeThresholds, ParameterError};
use crate::telemetry::TelemetrySnapshot;

use super::latch::{CheckpointLatch, DeployOnceLatch};
use super::types::{Transition, TransitionCause};

/// Mission mode state machine
///
/// Owns the current mode identifier and both latches. All state changes
/// happen inside [`evaluate`](Self::evaluate) or [`reboot`](Self::reboot),
/// which the controller calls synchronously from the driver loop's tick.
///
/// There is no way to force an arbitrary mode: Deploy is only ever reached
/// through the Comms guard and the deploy-once latch.
#[derive(Debug, Clone)]
pub struct TransitionEngine {
    mode: MissionMode,
    thresholds: ModeThresholds,
    checkpoint: CheckpointLatch,
    deploy_once: DeployOnceLatch,
}

impl TransitionEngine {
    /// Create an engine in Bootup
    ///
    /// Rejects thresholds that fail [`ModeThresholds::validate`]; with those
    /// the emergency override and the progress guards could fight each other.
    pub fn new(thresholds: ModeThresholds) -> Result<Self, ParameterError> {
        thresholds.validate()?;
        Ok(Self::with_thresholds(thresholds))
    }

    fn with_thresholds(thresholds: ModeThresholds) -> Self {
        Self {
            mode: MissionMode::Bootup,
            thresholds,
            checkpoint: CheckpointLatch::new(),
            deploy_once: DeployOnceLatch::new(),
        }
    }

    /// Engine parked in `mode` with default thresholds and clear latches
    #[cfg(test)]
    fn in_mode(mode: MissionMode) -> Self {
        let mut engine = Self::default();
        engine.mode = mode;
        engine
    }

    pub fn mode(&self) -> MissionMode {
        self.mode
    }

    pub fn thresholds(&self) -> &ModeThresholds {
        &self.thresholds
    }

    pub fn checkpoint_armed(&self) -> bool {
        self.checkpoint.is_armed()
    }

    pub fn deployed(&self) -> bool {
        self.deploy_once.is_set()
    }

    /// Force the engine back into Bootup
    ///
    /// Clears the checkpoint latch. The deploy-once latch survives. Returns
    /// `None` when the engine already is in Bootup.
    pub fn reboot(&mut self) -> Option<Transition> {
        self.checkpoint.clear();
        if self.mode == MissionMode::Bootup {
            return None;
        }

        let transition = Transition {
            from: self.mode,
            to: MissionMode::Bootup,
            cause: TransitionCause::Forced,
        };
        self.mode = MissionMode::Bootup;
        Some(transition)
    }

    /// Evaluate the guard table once
    ///
    /// `mode_done` is the current handler's self-reported completion. Returns
    /// the transition if a guard fired; the engine has already switched to the
    /// new mode when this returns.
    pub fn evaluate(
        &mut self,
        telemetry: &TelemetrySnapshot,
        mode_done: bool,
    ) -> Option<Transition> {
        let (to, cause) = self.next_mode(telemetry, mode_done)?;
        let transition = Transition {
            from: self.mode,
            to,
            cause,
        };
        self.mode = to;
        // Never carried into another mode
        self.checkpoint.clear();
        Some(transition)
    }

    fn next_mode(
        &mut self,
        telemetry: &TelemetrySnapshot,
        mode_done: bool,
    ) -> Option<(MissionMode, TransitionCause)> {
        let th = self.thresholds;

        if self.mode != MissionMode::Charge && telemetry.battery_at_or_below(th.emergency_battery)
        {
            return Some((MissionMode::Charge, TransitionCause::EmergencyLowBattery));
        }

        match self.mode {
            MissionMode::Bootup => {
                if mode_done {
                    return Some((MissionMode::Detumble, TransitionCause::BootComplete));
                }
            }
            MissionMode::Detumble => {
                if telemetry.angular_rate_at_or_below(th.detumbled_rate) {
                    return Some((MissionMode::Charge, TransitionCause::Detumbled));
                }
            }
            MissionMode::Charge => {
                if telemetry.battery_at_least(th.charged_battery) {
                    return Some((MissionMode::Antennas, TransitionCause::BatteryCharged));
                }
            }
            MissionMode::Antennas => {
                self.arm_checkpoint(telemetry);
                if self.checkpoint.is_armed()
                    && telemetry.orientation_above(th.orientation_confidence)
                {
                    self.checkpoint.consume();
                    return Some((MissionMode::Comms, TransitionCause::AntennasOriented));
                }
            }
            MissionMode::Comms => {
                self.arm_checkpoint(telemetry);
                if self.checkpoint.is_armed() && telemetry.angular_rate_at_or_below(th.comms_rate)
                {
                    self.checkpoint.consume();
                    return if self.deploy_once.claim() {
                        Some((MissionMode::Deploy, TransitionCause::CommsToDeploy))
                    } else {
                        Some((MissionMode::Orient, TransitionCause::CommsToOrient))
                    };
                }
            }
            MissionMode::Deploy => {
                if mode_done && telemetry.battery_at_least(th.deploy_exit_battery) {
                    return Some((MissionMode::Orient, TransitionCause::DeploymentComplete));
                }
            }
            MissionMode::Orient => {
                if telemetry.orientation_above(th.orientation_confidence) {
                    return Some((MissionMode::Comms, TransitionCause::OrientationAcquired));
                }
            }
        }

        None
    }

    fn arm_checkpoint(&mut self, telemetry: &TelemetrySnapshot) {
        if telemetry.battery_at_least(self.thresholds.checkpoint_battery) {
            self.checkpoint.arm();
        }
    }
}

impl Default for TransitionEngine {
    fn default() -> Self {
        Self::with_thresholds(ModeThresholds::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOCKED: [f32; 3] = [95.0, 95.0, 95.0];
    const UNLOCKED: [f32; 3] = [95.0, 50.0, 95.0];

    fn telemetry(battery: f32, rate: f32, orientation: [f32; 3]) -> TelemetrySnapshot {
        TelemetrySnapshot::new()
            .with_battery(battery)
            .with_angular_velocity(rate)
            .with_orientation(orientation)
    }

    fn engine_in(mode: MissionMode) -> TransitionEngine {
        TransitionEngine::in_mode(mode)
    }

    #[test]
    fn test_starts_in_bootup() {
        let engine = TransitionEngine::default();
        assert_eq!(engine.mode(), MissionMode::Bootup);
        assert!(!engine.checkpoint_armed());
        assert!(!engine.deployed());
    }

    #[test]
    fn test_emergency_override_from_every_mode() {
        for mode in MissionMode::ALL {
            if mode == MissionMode::Charge {
                continue;
            }
            let mut engine = engine_in(mode);
            // Every other guard's condition is satisfied as well
            let t = engine.evaluate(&telemetry(20.0, 0.0, LOCKED), true);
            assert_eq!(
                t,
                Some(Transition {
                    from: mode,
                    to: MissionMode::Charge,
                    cause: TransitionCause::EmergencyLowBattery,
                })
            );
            assert_eq!(engine.mode(), MissionMode::Charge);
        }
    }

    #[test]
    fn test_no_override_while_charging() {
        let mut engine = engine_in(MissionMode::Charge);
        assert_eq!(engine.evaluate(&telemetry(5.0, 0.0, LOCKED), true), None);
        assert_eq!(engine.mode(), MissionMode::Charge);
    }

    #[test]
    fn test_emergency_override_pre_empts_deploy() {
        let mut engine = engine_in(MissionMode::Deploy);
        let t = engine.evaluate(&telemetry(10.0, 0.0, LOCKED), false).unwrap();
        assert_eq!(t.to, MissionMode::Charge);
    }

    #[test]
    fn test_missing_battery_does_not_trigger_override() {
        let mut engine = engine_in(MissionMode::Orient);
        let t = TelemetrySnapshot::new().with_orientation(UNLOCKED);
        assert_eq!(engine.evaluate(&t, false), None);
        assert_eq!(engine.mode(), MissionMode::Orient);
    }

    #[test]
    fn test_bootup_waits_for_done() {
        let mut engine = TransitionEngine::default();
        assert_eq!(engine.evaluate(&telemetry(100.0, 0.0, LOCKED), false), None);

        let t = engine.evaluate(&telemetry(100.0, 0.0, LOCKED), true).unwrap();
        assert_eq!(t.to, MissionMode::Detumble);
        assert_eq!(t.cause, TransitionCause::BootComplete);
    }

    #[test]
    fn test_detumble_requires_zero_rate() {
        let mut engine = engine_in(MissionMode::Detumble);
        assert_eq!(engine.evaluate(&telemetry(100.0, 0.1, LOCKED), false), None);

        let t = engine.evaluate(&telemetry(100.0, 0.0, LOCKED), false).unwrap();
        assert_eq!(t.to, MissionMode::Charge);
    }

    #[test]
    fn test_charge_threshold_boundary() {
        let mut engine = engine_in(MissionMode::Charge);
        assert_eq!(engine.evaluate(&telemetry(74.0, 0.0, LOCKED), false), None);
        assert_eq!(engine.mode(), MissionMode::Charge);

        let t = engine.evaluate(&telemetry(75.0, 0.0, LOCKED), false).unwrap();
        assert_eq!(t.to, MissionMode::Antennas);
        assert_eq!(t.cause, TransitionCause::BatteryCharged);
    }

    #[test]
    fn test_antennas_checkpoint_sticky_across_ticks() {
        let mut engine = engine_in(MissionMode::Antennas);

        // Battery crosses 50 % but orientation not locked: arm only
        assert_eq!(engine.evaluate(&telemetry(60.0, 0.0, UNLOCKED), false), None);
        assert!(engine.checkpoint_armed());

        // Battery sags below 50 %: latch stays armed
        assert_eq!(engine.evaluate(&telemetry(40.0, 0.0, UNLOCKED), false), None);
        assert!(engine.checkpoint_armed());

        // Orientation locks at 40 %: armed latch lets the transition fire
        let t = engine.evaluate(&telemetry(40.0, 0.0, LOCKED), false).unwrap();
        assert_eq!(t.to, MissionMode::Comms);
        assert!(!engine.checkpoint_armed());
    }

    #[test]
    fn test_antennas_needs_checkpoint() {
        let mut engine = engine_in(MissionMode::Antennas);
        assert_eq!(engine.evaluate(&telemetry(49.0, 0.0, LOCKED), false), None);
        assert!(!engine.checkpoint_armed());
    }

    #[test]
    fn test_arm_and_fire_same_tick_in_comms() {
        let mut engine = engine_in(MissionMode::Comms);
        assert!(!engine.checkpoint_armed());

        let t = engine.evaluate(&telemetry(50.0, 0.5, UNLOCKED), false).unwrap();
        assert_eq!(t.to, MissionMode::Deploy);
        assert_eq!(t.cause, TransitionCause::CommsToDeploy);
        assert!(!engine.checkpoint_armed());
        assert!(engine.deployed());
    }

    #[test]
    fn test_comms_arms_without_firing_when_tumbling() {
        let mut engine = engine_in(MissionMode::Comms);
        assert_eq!(engine.evaluate(&telemetry(55.0, 3.0, LOCKED), false), None);
        assert!(engine.checkpoint_armed());
        assert_eq!(engine.mode(), MissionMode::Comms);
    }

    #[test]
    fn test_deploy_entered_at_most_once() {
        let mut engine = engine_in(MissionMode::Comms);
        let first = engine.evaluate(&telemetry(80.0, 0.0, LOCKED), false).unwrap();
        assert_eq!(first.to, MissionMode::Deploy);
        let t = engine.evaluate(&telemetry(80.0, 0.0, LOCKED), true).unwrap();
        assert_eq!(t.to, MissionMode::Orient);

        for _ in 0..3 {
            let t = engine.evaluate(&telemetry(80.0, 0.0, LOCKED), false).unwrap();
            assert_eq!(t.to, MissionMode::Comms);
            let again = engine.evaluate(&telemetry(80.0, 0.0, LOCKED), false).unwrap();
            assert_eq!(again.to, MissionMode::Orient);
            assert_eq!(again.cause, TransitionCause::CommsToOrient);
        }
    }

    #[test]
    fn test_emergency_clears_checkpoint() {
        let mut engine = engine_in(MissionMode::Antennas);
        engine.evaluate(&telemetry(60.0, 0.0, UNLOCKED), false);
        assert!(engine.checkpoint_armed());

        let t = engine.evaluate(&telemetry(10.0, 0.0, UNLOCKED), false).unwrap();
        assert_eq!(t.to, MissionMode::Charge);
        assert!(!engine.checkpoint_armed());
    }

    #[test]
    fn test_deploy_exit_needs_done_and_battery() {
        let mut engine = engine_in(MissionMode::Deploy);
        assert_eq!(engine.evaluate(&telemetry(90.0, 0.0, LOCKED), false), None);
        assert_eq!(engine.evaluate(&telemetry(29.0, 0.0, LOCKED), true), None);

        let t = engine.evaluate(&telemetry(30.0, 0.0, LOCKED), true).unwrap();
        assert_eq!(t.to, MissionMode::Orient);
        assert_eq!(t.cause, TransitionCause::DeploymentComplete);
    }

    #[test]
    fn test_orient_returns_to_comms() {
        let mut engine = engine_in(MissionMode::Orient);
        assert_eq!(engine.evaluate(&telemetry(80.0, 0.0, UNLOCKED), false), None);

        let t = engine.evaluate(&telemetry(80.0, 0.0, LOCKED), false).unwrap();
        assert_eq!(t.to, MissionMode::Comms);
        assert_eq!(t.cause, TransitionCause::OrientationAcquired);
    }

    #[test]
    fn test_reboot_keeps_deploy_latch() {
        let mut engine = engine_in(MissionMode::Comms);
        engine.evaluate(&telemetry(80.0, 0.0, LOCKED), false);
        assert!(engine.deployed());

        let t = engine.reboot().unwrap();
        assert_eq!(t.from, MissionMode::Deploy);
        assert_eq!(t.to, MissionMode::Bootup);
        assert_eq!(t.cause, TransitionCause::Forced);
        assert!(engine.deployed());
    }

    #[test]
    fn test_reboot_in_bootup_is_silent() {
        let mut engine = TransitionEngine::default();
        assert_eq!(engine.reboot(), None);
        assert_eq!(engine.mode(), MissionMode::Bootup);
    }

    #[test]
    fn test_deploy_not_reentered_after_reboot() {
        let mut engine = TransitionEngine::default();
        let all_clear = telemetry(100.0, 0.0, LOCKED);
        let mut deploy_entries = 0;

        for _ in 0..3 {
            // Bootup -> Detumble -> Charge -> Antennas -> Comms -> (Deploy | Orient)
            for done in [true, false, false, true, false] {
                if let Some(t) = engine.evaluate(&all_clear, done) {
                    if t.to == MissionMode::Deploy {
                        deploy_entries += 1;
                    }
                }
            }
            engine.reboot();
            assert_eq!(engine.mode(), MissionMode::Bootup);
        }

        assert_eq!(deploy_entries, 1);
        assert!(engine.deployed());
    }

    #[test]
    fn test_invalid_thresholds_rejected() {
        let thresholds = ModeThresholds {
            charged_battery: 15.0,
            checkpoint_battery: 10.0,
            ..Default::default()
        };
        assert_eq!(
            TransitionEngine::new(thresholds).err(),
            Some(ParameterError::InvalidThreshold("checkpoint_battery"))
        );
        assert!(TransitionEngine::new(ModeThresholds::default()).is_ok());
    }

    #[test]
    fn test_full_sequence() {
        let mut engine = TransitionEngine::default();
        let steps: [(TelemetrySnapshot, bool, MissionMode); 8] = [
            (telemetry(100.0, 0.0, LOCKED), true, MissionMode::Detumble),
            (telemetry(100.0, 0.0, LOCKED), false, MissionMode::Charge),
            (telemetry(100.0, 0.0, LOCKED), false, MissionMode::Antennas),
            (telemetry(100.0, 0.0, LOCKED), false, MissionMode::Comms),
            (telemetry(100.0, 0.0, LOCKED), false, MissionMode::Deploy),
            (telemetry(100.0, 0.0, LOCKED), true, MissionMode::Orient),
            (telemetry(100.0, 0.0, LOCKED), false, MissionMode::Comms),
            (telemetry(100.0, 0.0, LOCKED), false, MissionMode::Orient),
        ];

        for (t, done, expected) in steps {
            let transition = engine.evaluate(&t, done).unwrap();
            assert_eq!(transition.to, expected);
        }
    }
}
