//! Facts about optional hardware inferred at session start.
//!
//! [`DetectedHardware`] is owned by a session. It starts out unknown, is
//! filled in by the model's probe, and is reset to unknown on close so a
//! later open probes again (a head or amplifier may be swapped while the
//! rig is powered off).

use std::fmt;

/// Optional modules that gate menu items and operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionalHardware {
    /// An external or integrated linear amplifier (e.g. a 100 W head unit).
    Amplifier,
}

impl fmt::Display for OptionalHardware {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionalHardware::Amplifier => write!(f, "optional amplifier"),
        }
    }
}

/// Tri-state presence of a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Presence {
    /// Not probed, or the probe was inconclusive.
    #[default]
    Unknown,
    /// Confirmed present.
    Present,
    /// Confirmed absent.
    Absent,
}

/// Inferred power source class of the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PowerClass {
    /// Not probed, or the probe was inconclusive.
    #[default]
    Unknown,
    /// Running on internal battery (reduced maximum power).
    Battery,
    /// Running on an external 12 V supply.
    External,
    /// Driving an amplifier head with its own power range.
    Amplified,
}

impl fmt::Display for PowerClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PowerClass::Unknown => "unknown",
            PowerClass::Battery => "battery",
            PowerClass::External => "external supply",
            PowerClass::Amplified => "amplifier",
        };
        write!(f, "{s}")
    }
}

/// Detected-hardware flags for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DetectedHardware {
    /// Whether detection has run since the session was opened.
    pub probed: bool,
    /// Optional amplifier presence.
    pub amplifier: Presence,
    /// Power source class.
    pub power: PowerClass,
}

impl DetectedHardware {
    /// Whether the flags positively confirm `hw`. Unknown never confirms.
    pub fn confirms(&self, hw: OptionalHardware) -> bool {
        match hw {
            OptionalHardware::Amplifier => {
                self.amplifier == Presence::Present || self.power == PowerClass::Amplified
            }
        }
    }

    /// Forget everything, as on session close.
    pub fn reset(&mut self) {
        *self = DetectedHardware::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unknown_and_confirms_nothing() {
        let hw = DetectedHardware::default();
        assert!(!hw.probed);
        assert_eq!(hw.amplifier, Presence::Unknown);
        assert_eq!(hw.power, PowerClass::Unknown);
        assert!(!hw.confirms(OptionalHardware::Amplifier));
    }

    #[test]
    fn amplifier_confirmed_by_presence_or_power_class() {
        let hw = DetectedHardware {
            amplifier: Presence::Present,
            ..Default::default()
        };
        assert!(hw.confirms(OptionalHardware::Amplifier));

        let hw = DetectedHardware {
            power: PowerClass::Amplified,
            ..Default::default()
        };
        assert!(hw.confirms(OptionalHardware::Amplifier));
    }

    #[test]
    fn absent_does_not_confirm() {
        let hw = DetectedHardware {
            probed: true,
            amplifier: Presence::Absent,
            power: PowerClass::Battery,
        };
        assert!(!hw.confirms(OptionalHardware::Amplifier));
    }

    #[test]
    fn reset_returns_to_unknown() {
        let mut hw = DetectedHardware {
            probed: true,
            amplifier: Presence::Present,
            power: PowerClass::Amplified,
        };
        hw.reset();
        assert_eq!(hw, DetectedHardware::default());
    }
}
