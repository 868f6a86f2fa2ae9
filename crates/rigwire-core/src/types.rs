//! Core types used throughout rigwire.
//!
//! These types provide a manufacturer-agnostic vocabulary over the two
//! framing families (delimiter-terminated ASCII and marker-delimited binary).

use std::fmt;

/// A concrete, independently tunable receive/transmit slot on a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Vfo {
    /// VFO A.
    A,
    /// VFO B.
    B,
    /// Main receiver on dual-receiver rigs.
    Main,
    /// Sub receiver on dual-receiver rigs.
    Sub,
    /// The memory channel slot.
    Memory,
}

impl Vfo {
    /// The partner of this VFO in its A/B or MAIN/SUB pair.
    ///
    /// The memory slot has no partner and returns `None`.
    pub fn other(&self) -> Option<Vfo> {
        match self {
            Vfo::A => Some(Vfo::B),
            Vfo::B => Some(Vfo::A),
            Vfo::Main => Some(Vfo::Sub),
            Vfo::Sub => Some(Vfo::Main),
            Vfo::Memory => None,
        }
    }
}

impl fmt::Display for Vfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Vfo::A => "VFO-A",
            Vfo::B => "VFO-B",
            Vfo::Main => "MAIN",
            Vfo::Sub => "SUB",
            Vfo::Memory => "MEM",
        };
        write!(f, "{s}")
    }
}

/// How a caller names the VFO an operation targets.
///
/// Everything except [`VfoSelector::Vfo`] is relative to session state and
/// must be resolved to a concrete [`Vfo`] before any cache lookup or
/// transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VfoSelector {
    /// Whatever VFO is currently selected.
    #[default]
    Current,
    /// The transmit VFO: the split partner when split is on, else current.
    Tx,
    /// The partner of the current VFO.
    Other,
    /// A specific VFO.
    Vfo(Vfo),
}

impl From<Vfo> for VfoSelector {
    fn from(vfo: Vfo) -> Self {
        VfoSelector::Vfo(vfo)
    }
}

impl fmt::Display for VfoSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VfoSelector::Current => write!(f, "current"),
            VfoSelector::Tx => write!(f, "tx"),
            VfoSelector::Other => write!(f, "other"),
            VfoSelector::Vfo(v) => write!(f, "{v}"),
        }
    }
}

/// Operating mode of the transceiver.
///
/// Covers standard analog modes plus data sub-modes used by digital
/// software (WSJT-X, fldigi, etc.).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Upper sideband voice.
    USB,
    /// Lower sideband voice.
    LSB,
    /// CW (morse), typically with upper sideband offset.
    CW,
    /// CW reverse (lower sideband offset).
    CWR,
    /// Amplitude modulation.
    AM,
    /// Frequency modulation.
    FM,
    /// Radio teletype (FSK), upper sideband.
    RTTY,
    /// Radio teletype (FSK), reverse / lower sideband.
    RTTYR,
    /// Data mode using upper sideband (AFSK, sound-card digital).
    DataUSB,
    /// Data mode using lower sideband.
    DataLSB,
    /// Data mode using FM.
    DataFM,
    /// Data mode using AM.
    DataAM,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Mode::USB => "USB",
            Mode::LSB => "LSB",
            Mode::CW => "CW",
            Mode::CWR => "CWR",
            Mode::AM => "AM",
            Mode::FM => "FM",
            Mode::RTTY => "RTTY",
            Mode::RTTYR => "RTTYR",
            Mode::DataUSB => "DATA-USB",
            Mode::DataLSB => "DATA-LSB",
            Mode::DataFM => "DATA-FM",
            Mode::DataAM => "DATA-AM",
        };
        write!(f, "{s}")
    }
}

/// Receiver passband (filter width) in hertz.
///
/// Common values: 500 Hz for CW, 2400 Hz for SSB, 6000 Hz for AM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Passband(u32);

impl Passband {
    /// Create a new passband width from a value in hertz.
    pub fn from_hz(hz: u32) -> Self {
        Passband(hz)
    }

    /// Return the passband width in hertz.
    pub fn hz(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Passband {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Hz", self.0)
    }
}

/// Transceiver manufacturer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Manufacturer {
    /// Icom (binary CI-V framing).
    Icom,
    /// Yaesu (text CAT framing).
    Yaesu,
    /// Kenwood (text CAT framing).
    Kenwood,
}

impl fmt::Display for Manufacturer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Manufacturer::Icom => "Icom",
            Manufacturer::Yaesu => "Yaesu",
            Manufacturer::Kenwood => "Kenwood",
        };
        write!(f, "{s}")
    }
}

/// A contiguous frequency range a device can tune, optionally restricted
/// to particular VFOs and modes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreqRange {
    /// Lower bound of the range in hertz (inclusive).
    pub low_hz: u64,
    /// Upper bound of the range in hertz (inclusive).
    pub high_hz: u64,
    /// VFOs this range applies to. Empty means all.
    pub vfos: Vec<Vfo>,
    /// Modes this range applies to. Empty means all.
    pub modes: Vec<Mode>,
}

impl FreqRange {
    /// Create a range that applies to every VFO and mode.
    pub fn new(low_hz: u64, high_hz: u64) -> Self {
        FreqRange {
            low_hz,
            high_hz,
            vfos: Vec::new(),
            modes: Vec::new(),
        }
    }

    /// Restrict this range to the given VFOs.
    pub fn for_vfos(mut self, vfos: &[Vfo]) -> Self {
        self.vfos = vfos.to_vec();
        self
    }

    /// Restrict this range to the given modes.
    pub fn for_modes(mut self, modes: &[Mode]) -> Self {
        self.modes = modes.to_vec();
        self
    }

    /// Check whether a frequency (in hertz) falls within this range (inclusive).
    pub fn contains(&self, freq_hz: u64) -> bool {
        freq_hz >= self.low_hz && freq_hz <= self.high_hz
    }

    /// Whether this range applies to the given VFO (and mode, when known).
    pub fn applies_to(&self, vfo: Vfo, mode: Option<Mode>) -> bool {
        let vfo_ok = self.vfos.is_empty() || self.vfos.contains(&vfo);
        let mode_ok = match mode {
            Some(m) => self.modes.is_empty() || self.modes.contains(&m),
            None => true,
        };
        vfo_ok && mode_ok
    }
}

impl fmt::Display for FreqRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} Hz", self.low_hz, self.high_hz)
    }
}

/// A continuously variable, gain-like setting.
///
/// Values travel in device units (watts, dB, words per minute, or the
/// 0-255 scale many rigs use); the descriptor's [`GainRange`](crate::caps::GainRange)
/// for each level declares what the device accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Level {
    /// Transmit power.
    RfPower,
    /// Audio (AF) gain.
    AfGain,
    /// RF gain.
    RfGain,
    /// Squelch threshold.
    Squelch,
    /// Microphone gain.
    MicGain,
    /// Internal keyer speed in words per minute.
    KeySpeed,
    /// Speech compressor level.
    Compressor,
    /// Noise reduction level.
    NoiseReduction,
    /// Monitor level.
    Monitor,
    /// Signal strength meter (read-only).
    Strength,
    /// SWR meter (read-only).
    Swr,
    /// ALC meter (read-only).
    Alc,
}

impl Level {
    /// Meter readings cannot be written.
    pub fn is_read_only(&self) -> bool {
        matches!(self, Level::Strength | Level::Swr | Level::Alc)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Level::RfPower => "RFPOWER",
            Level::AfGain => "AF",
            Level::RfGain => "RF",
            Level::Squelch => "SQL",
            Level::MicGain => "MICGAIN",
            Level::KeySpeed => "KEYSPD",
            Level::Compressor => "COMP",
            Level::NoiseReduction => "NR",
            Level::Monitor => "MONITOR_GAIN",
            Level::Strength => "STRENGTH",
            Level::Swr => "SWR",
            Level::Alc => "ALC",
        };
        write!(f, "{s}")
    }
}

/// Band group of a per-band transmit power ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PowerBand {
    /// HF bands.
    Hf,
    /// 50 MHz.
    SixMeters,
    /// 70 MHz.
    FourMeters,
    /// 144 MHz.
    TwoMeters,
    /// 430 MHz.
    Uhf,
    /// AM on HF and 50 MHz.
    AmHf,
    /// AM on VHF and UHF.
    AmVu,
}

impl fmt::Display for PowerBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PowerBand::Hf => "HF",
            PowerBand::SixMeters => "50M",
            PowerBand::FourMeters => "70M",
            PowerBand::TwoMeters => "144M",
            PowerBand::Uhf => "430M",
            PowerBand::AmHf => "AM HF/50M",
            PowerBand::AmVu => "AM V/U",
        };
        write!(f, "{s}")
    }
}

/// A boolean device toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Func {
    /// Noise blanker.
    NoiseBlanker,
    /// Noise reduction.
    NoiseReduction,
    /// Speech compressor.
    Compressor,
    /// Voice-operated transmit.
    Vox,
    /// CTCSS encode.
    Tone,
    /// CTCSS tone squelch.
    ToneSquelch,
    /// Front panel dial lock.
    Lock,
    /// Transmit monitor.
    Monitor,
    /// Automatic notch filter.
    AutoNotch,
}

impl fmt::Display for Func {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Func::NoiseBlanker => "NB",
            Func::NoiseReduction => "NR",
            Func::Compressor => "COMP",
            Func::Vox => "VOX",
            Func::Tone => "TONE",
            Func::ToneSquelch => "TSQL",
            Func::Lock => "LOCK",
            Func::Monitor => "MON",
            Func::AutoNotch => "ANF",
        };
        write!(f, "{s}")
    }
}

/// Scan control actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScanOp {
    /// Stop any running scan.
    Stop,
    /// Scan upward.
    Up,
    /// Scan downward.
    Down,
}

/// Split operation state: whether split is on and which VFO transmits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SplitState {
    /// Whether split is enabled.
    pub enabled: bool,
    /// The VFO that transmits while split is enabled.
    pub tx_vfo: Vfo,
}

impl SplitState {
    /// Split disabled, transmitting on `vfo`.
    pub fn off(vfo: Vfo) -> Self {
        SplitState {
            enabled: false,
            tx_vfo: vfo,
        }
    }

    /// Split enabled, transmitting on `tx_vfo`.
    pub fn on(tx_vfo: Vfo) -> Self {
        SplitState {
            enabled: true,
            tx_vfo,
        }
    }
}

/// One stored memory channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    /// Channel number.
    pub number: u16,
    /// Stored frequency in hertz.
    pub freq_hz: u64,
    /// Stored mode.
    pub mode: Mode,
    /// Clarifier offset in hertz; 0 when the clarifier is off.
    pub clarifier_hz: i32,
}

/// A cacheable quantity. Combined with a [`Vfo`] it keys one cache entry.
///
/// Session-wide quantities (PTT, split, levels, functions) are stored under
/// the VFO that was current when they were read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantity {
    /// Tuned frequency.
    Frequency,
    /// Operating mode.
    Mode,
    /// Filter passband.
    Passband,
    /// Transmit state.
    Ptt,
    /// Split state.
    Split,
    /// Receive clarifier offset.
    Rit,
    /// Transmit clarifier offset.
    Xit,
    /// A level reading.
    Level(Level),
    /// A function toggle.
    Func(Func),
}

/// A decoded device value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// The device confirmed a set.
    Ack,
    /// A frequency in hertz.
    Frequency(u64),
    /// An operating mode.
    Mode(Mode),
    /// A filter passband.
    Passband(Passband),
    /// A VFO.
    Vfo(Vfo),
    /// A boolean state (PTT, function toggles).
    Bool(bool),
    /// Split state.
    Split(SplitState),
    /// A level in device units.
    Level(i32),
    /// A signed offset in hertz (RIT/XIT).
    Offset(i32),
    /// A memory channel number.
    MemoryNumber(u16),
    /// A full memory channel.
    Channel(Channel),
    /// A raw extended-menu value field, still in wire form.
    Menu(String),
}

/// Snapshot of everything known (and still fresh) about one VFO.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VfoState {
    /// Tuned frequency in hertz.
    pub freq_hz: Option<u64>,
    /// Operating mode.
    pub mode: Option<Mode>,
    /// Filter passband.
    pub passband: Option<Passband>,
    /// The transmit partner when split is on.
    pub split_partner: Option<Vfo>,
    /// Receive clarifier offset.
    pub rit_hz: Option<i32>,
    /// Transmit clarifier offset.
    pub xit_hz: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vfo_display() {
        assert_eq!(Vfo::A.to_string(), "VFO-A");
        assert_eq!(Vfo::Main.to_string(), "MAIN");
        assert_eq!(Vfo::Memory.to_string(), "MEM");
    }

    #[test]
    fn vfo_other() {
        assert_eq!(Vfo::A.other(), Some(Vfo::B));
        assert_eq!(Vfo::Sub.other(), Some(Vfo::Main));
        assert_eq!(Vfo::Memory.other(), None);
    }

    #[test]
    fn selector_from_vfo() {
        assert_eq!(VfoSelector::from(Vfo::B), VfoSelector::Vfo(Vfo::B));
        assert_eq!(VfoSelector::default(), VfoSelector::Current);
    }

    #[test]
    fn data_modes_display_with_prefix() {
        assert_eq!(Mode::USB.to_string(), "USB");
        assert_eq!(Mode::DataUSB.to_string(), "DATA-USB");
        assert_eq!(Mode::DataFM.to_string(), "DATA-FM");
    }

    #[test]
    fn passband_accessors() {
        let pb = Passband::from_hz(2400);
        assert_eq!(pb.hz(), 2400);
        assert_eq!(pb.to_string(), "2400 Hz");
    }

    #[test]
    fn freq_range_contains_inclusive() {
        let r = FreqRange::new(1_800_000, 2_000_000);
        assert!(r.contains(1_800_000));
        assert!(r.contains(2_000_000));
        assert!(!r.contains(1_799_999));
        assert!(!r.contains(2_000_001));
    }

    #[test]
    fn freq_range_applies_to() {
        let r = FreqRange::new(144_000_000, 148_000_000)
            .for_vfos(&[Vfo::Sub])
            .for_modes(&[Mode::FM]);
        assert!(r.applies_to(Vfo::Sub, Some(Mode::FM)));
        assert!(r.applies_to(Vfo::Sub, None));
        assert!(!r.applies_to(Vfo::Main, Some(Mode::FM)));
        assert!(!r.applies_to(Vfo::Sub, Some(Mode::USB)));
    }

    #[test]
    fn meters_are_read_only() {
        assert!(Level::Strength.is_read_only());
        assert!(Level::Swr.is_read_only());
        assert!(!Level::RfPower.is_read_only());
    }

    #[test]
    fn split_state_constructors() {
        assert!(SplitState::on(Vfo::B).enabled);
        assert!(!SplitState::off(Vfo::A).enabled);
        assert_eq!(SplitState::on(Vfo::B).tx_vfo, Vfo::B);
    }
}
