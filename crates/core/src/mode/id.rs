//! Mission mode identifier

use core::fmt;

/// Operational mode of the spacecraft
///
/// Closed set of modes; transitions only ever move between these variants.
/// Exactly one mode is active at a time and owns the single background task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MissionMode {
    /// Post-reset settling
    #[default]
    Bootup,
    /// Waiting for the tumble rate to decay
    Detumble,
    /// Sun-pointing and battery charging
    Charge,
    /// Antenna release via burn wire
    Antennas,
    /// Ground communication window
    Comms,
    /// Payload deployment via burn wire (entered at most once)
    Deploy,
    /// Attitude acquisition
    Orient,
}

impl MissionMode {
    /// All modes in registry order
    pub const ALL: [MissionMode; 7] = [
        MissionMode::Bootup,
        MissionMode::Detumble,
        MissionMode::Charge,
        MissionMode::Antennas,
        MissionMode::Comms,
        MissionMode::Deploy,
        MissionMode::Orient,
    ];

    /// Mode name for logging and telemetry
    pub const fn name(self) -> &'static str {
        match self {
            MissionMode::Bootup => "bootup",
            MissionMode::Detumble => "detumble",
            MissionMode::Charge => "charge",
            MissionMode::Antennas => "antennas",
            MissionMode::Comms => "comms",
            MissionMode::Deploy => "deploy",
            MissionMode::Orient => "orient",
        }
    }
}

impl fmt::Display for MissionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
