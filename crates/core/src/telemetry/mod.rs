//! Telemetry Snapshot
//!
//! Read-only view of the sensor values consumed by the transition guards.
//!
//! Sensor-polling tasks outside the mission core keep producing new values
//! while a mode runs, so every field is treated as possibly stale and the three
//! orientation axes are read independently. A field that is absent, non-finite
//! or out of its physical range reads as `None` and the guard depending on it
//! simply does not fire.

/// Number of orientation-confidence axes
pub const AXES: usize = 3;

/// Snapshot of the telemetry values read by the transition engine
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TelemetrySnapshot {
    /// Battery state of charge (%), valid range 0-100
    pub battery_percent: Option<f32>,
    /// Angular velocity magnitude (deg/s), valid range >= 0
    pub angular_velocity: Option<f32>,
    /// Per-axis orientation confidence (%)
    pub orientation_confidence: [Option<f32>; AXES],
}

impl TelemetrySnapshot {
    /// Empty snapshot; no guard that reads telemetry can fire on it
    pub const fn new() -> Self {
        Self {
            battery_percent: None,
            angular_velocity: None,
            orientation_confidence: [None; AXES],
        }
    }

    pub fn with_battery(mut self, percent: f32) -> Self {
        self.battery_percent = Some(percent);
        self
    }

    pub fn with_angular_velocity(mut self, magnitude: f32) -> Self {
        self.angular_velocity = Some(magnitude);
        self
    }

    pub fn with_orientation(mut self, confidence: [f32; AXES]) -> Self {
        self.orientation_confidence = [
            Some(confidence[0]),
            Some(confidence[1]),
            Some(confidence[2]),
        ];
        self
    }

    /// Validated battery percentage
    pub fn battery(&self) -> Option<f32> {
        self.battery_percent
            .filter(|v| v.is_finite() && (0.0..=100.0).contains(v))
    }

    /// Validated angular velocity magnitude
    pub fn angular_rate(&self) -> Option<f32> {
        self.angular_velocity.filter(|v| v.is_finite() && *v >= 0.0)
    }

    /// Validated orientation confidence for one axis
    pub fn axis_confidence(&self, axis: usize) -> Option<f32> {
        self.orientation_confidence
            .get(axis)
            .copied()
            .flatten()
            .filter(|v| v.is_finite())
    }

    pub fn battery_at_or_below(&self, percent: f32) -> bool {
        self.battery().is_some_and(|v| v <= percent)
    }

    pub fn battery_at_least(&self, percent: f32) -> bool {
        self.battery().is_some_and(|v| v >= percent)
    }

    pub fn angular_rate_at_or_below(&self, magnitude: f32) -> bool {
        self.angular_rate().is_some_and(|v| v <= magnitude)
    }

    /// True when every axis is present and strictly above `threshold`
    pub fn orientation_above(&self, threshold: f32) -> bool {
        (0..AXES).all(|axis| self.axis_confidence(axis).is_some_and(|v| v > threshold))
    }
}

/// Producer of telemetry snapshots
///
/// Implemented by whatever shared store the sensor tasks write into.
pub trait TelemetrySource {
    /// Latest values; never blocks
    fn snapshot(&self) -> TelemetrySnapshot;
}

impl<T: TelemetrySource + ?Sized> TelemetrySource for &T {
    fn snapshot(&self) -> TelemetrySnapshot {
        (**self).snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_snapshot_fires_nothing() {
        let t = TelemetrySnapshot::new();
        assert!(!t.battery_at_or_below(100.0));
        assert!(!t.battery_at_least(0.0));
        assert!(!t.angular_rate_at_or_below(f32::MAX));
        assert!(!t.orientation_above(0.0));
    }

    #[test]
    fn test_battery_range_validation() {
        assert_eq!(TelemetrySnapshot::new().with_battery(42.0).battery(), Some(42.0));
        assert_eq!(TelemetrySnapshot::new().with_battery(-1.0).battery(), None);
        assert_eq!(TelemetrySnapshot::new().with_battery(100.5).battery(), None);
        assert_eq!(TelemetrySnapshot::new().with_battery(f32::NAN).battery(), None);
    }

    #[test]
    fn test_battery_boundaries_inclusive() {
        let t = TelemetrySnapshot::new().with_battery(20.0);
        assert!(t.battery_at_or_below(20.0));
        assert!(t.battery_at_least(20.0));
    }

    #[test]
    fn test_negative_angular_rate_is_invalid() {
        let t = TelemetrySnapshot::new().with_angular_velocity(-0.5);
        assert_eq!(t.angular_rate(), None);
        assert!(!t.angular_rate_at_or_below(1.0));
    }

    #[test]
    fn test_orientation_strictly_above() {
        let t = TelemetrySnapshot::new().with_orientation([95.0, 95.0, 90.0]);
        assert!(!t.orientation_above(90.0));

        let t = TelemetrySnapshot::new().with_orientation([90.1, 95.0, 99.0]);
        assert!(t.orientation_above(90.0));
    }

    #[test]
    fn test_orientation_missing_axis() {
        let mut t = TelemetrySnapshot::new().with_orientation([95.0, 95.0, 95.0]);
        t.orientation_confidence[1] = None;
        assert!(!t.orientation_above(90.0));
        assert_eq!(t.axis_confidence(0), Some(95.0));
        assert_eq!(t.axis_confidence(3), None);
    }

    #[test]
    fn test_source_by_reference() {
        struct Fixed(TelemetrySnapshot);
        impl TelemetrySource for Fixed {
            fn snapshot(&self) -> TelemetrySnapshot {
                self.0
            }
        }

        let source = Fixed(TelemetrySnapshot::new().with_battery(60.0));
        let by_ref = &source;
        assert_eq!(by_ref.snapshot().battery(), Some(60.0));
    }
}
