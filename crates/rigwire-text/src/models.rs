//! Text-family model descriptors.
//!
//! Each supported rig is one [`CapabilityDescriptor`] built from static
//! dialect tables. Adding a model is a matter of adding tables here; the
//! encoder in [`commands`](crate::commands) interprets them.
//!
//! The baud rates are the factory defaults for the rigs' USB virtual COM
//! ports. Both are user-configurable in the rig menus.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use rigwire_core::caps::{CapabilityDescriptor, DEFAULT_CACHE_TTL, GainRange, MaxPowerItem};
use rigwire_core::command::{Operation, OperationSet};
use rigwire_core::dialect::{Field, MemoryLayout, Protocol, SetReply, TextSpec};
use rigwire_core::hardware::PowerClass;
use rigwire_core::menu::{MenuTable, MenuToken};
use rigwire_core::port::PortConfig;
use rigwire_core::types::{FreqRange, Func, Level, Manufacturer, Mode, PowerBand, Vfo};

use crate::menus::ftx1_menu;
use crate::probe::Ftx1HeadProbe;
use crate::protocol::{REJECT_MARKER, TERMINATOR};

// ---------------------------------------------------------------
// FTX-1
// ---------------------------------------------------------------

const FTX1_FREQUENCY: &[(Vfo, Field)] = &[
    (Vfo::Main, Field::new("FA", 9)),
    (Vfo::Sub, Field::new("FB", 9)),
];

const FTX1_MODE: &[(Vfo, Field)] = &[
    (Vfo::Main, Field::new("MD0", 1)),
    (Vfo::Sub, Field::new("MD1", 1)),
];

const FTX1_MODE_CODES: &[(Mode, char)] = &[
    (Mode::LSB, '1'),
    (Mode::USB, '2'),
    (Mode::CW, '3'),
    (Mode::FM, '4'),
    (Mode::AM, '5'),
    (Mode::RTTYR, '6'),
    (Mode::CWR, '7'),
    (Mode::DataLSB, '8'),
    (Mode::RTTY, '9'),
    (Mode::DataFM, 'A'),
    (Mode::DataUSB, 'C'),
    (Mode::DataAM, 'D'),
];

// The width query echoes an extra `0` before the two-digit index.
const FTX1_PASSBAND: &[(Vfo, Field)] = &[
    (Vfo::Main, Field::new("SH0", 2).skip(1).set_as("SH00")),
    (Vfo::Sub, Field::new("SH1", 2).skip(1).set_as("SH10")),
];

const FTX1_WIDTHS: &[u32] = &[
    200, 250, 300, 350, 400, 450, 500, 600, 700, 800, 900, 1000, 1200, 1400, 1600, 1800, 2000,
    2200, 2400, 2600, 2800, 3000, 3200, 3400,
];

const FTX1_VFO_CODES: &[(Vfo, char)] = &[(Vfo::Main, '0'), (Vfo::Sub, '1')];

const FTX1_RIT: &[(Vfo, Field)] = &[
    (Vfo::Main, Field::new("CF001", 4)),
    (Vfo::Sub, Field::new("CF101", 4)),
];

// Power replies carry the head code (1 field, 2 SPA-1) before the watts.
// Sets address the field head unless the SPA-1 was detected.
const FTX1_LEVELS: &[(Level, Field)] = &[
    (Level::AfGain, Field::new("AG0", 3)),
    (Level::RfGain, Field::new("RG0", 3)),
    (Level::MicGain, Field::new("MG", 3)),
    (Level::Squelch, Field::new("SQ0", 3)),
    (Level::KeySpeed, Field::new("KS", 3)),
    (Level::Monitor, Field::new("ML0", 3)),
    (Level::RfPower, Field::new("PC", 3).skip(1).set_as("PC1")),
    (Level::Strength, Field::new("SM0", 3)),
];

const FTX1_HEAD_LEVELS: &[(PowerClass, Level, Field)] = &[(
    PowerClass::Amplified,
    Level::RfPower,
    Field::new("PC", 3).skip(1).set_as("PC2"),
)];

/// Whole watts. The field head range applies until detection says otherwise.
const FTX1_FIELD_POWER: GainRange = GainRange::new(1, 10, 1);
const FTX1_BATTERY_POWER: GainRange = GainRange::new(1, 6, 1);
const FTX1_SPA1_POWER: GainRange = GainRange::new(5, 100, 1);

const fn max_power(band: PowerBand, field_item: u8, spa1_item: u8) -> MaxPowerItem {
    MaxPowerItem {
        band,
        standard: MenuToken::new(3, 5, field_item),
        amplified: MenuToken::new(3, 7, spa1_item),
    }
}

// EX0305 (TX GENERAL) for the field head, EX0307 (OPTION) for the SPA-1.
const FTX1_MAX_POWER: &[MaxPowerItem] = &[
    max_power(PowerBand::Hf, 3, 5),
    max_power(PowerBand::SixMeters, 4, 6),
    max_power(PowerBand::FourMeters, 5, 7),
    max_power(PowerBand::TwoMeters, 6, 8),
    max_power(PowerBand::Uhf, 7, 9),
    max_power(PowerBand::AmHf, 8, 10),
    max_power(PowerBand::AmVu, 9, 11),
];

const FTX1_FUNCS: &[(Func, Field)] = &[
    (Func::NoiseBlanker, Field::new("NB0", 1)),
    (Func::NoiseReduction, Field::new("NR0", 1)),
    (Func::Compressor, Field::new("PR0", 1)),
    (Func::Vox, Field::new("VX", 1)),
    (Func::Lock, Field::new("LK", 1)),
    (Func::AutoNotch, Field::new("BC0", 1)),
];

fn ftx1_spec() -> TextSpec {
    TextSpec {
        terminator: TERMINATOR,
        stop_set: &[TERMINATOR],
        reject_marker: REJECT_MARKER,
        max_frame: 64,
        // Sets are silent; the identity query always answers, so a `?;`
        // read in its place belongs to the set.
        set_reply: SetReply::Verify("ID"),
        frequency: FTX1_FREQUENCY,
        mode: FTX1_MODE,
        mode_codes: FTX1_MODE_CODES,
        passband: FTX1_PASSBAND,
        passband_widths: FTX1_WIDTHS,
        vfo_select: Some(Field::new("VS", 1)),
        vfo_codes: FTX1_VFO_CODES,
        ptt: Some(Field::new("TX", 1)),
        split: Some(Field::new("FT", 1)),
        rit: FTX1_RIT,
        // The clarifier is shared between RX and TX; only the RX form is
        // exposed.
        xit: &[],
        levels: FTX1_LEVELS,
        head_levels: FTX1_HEAD_LEVELS,
        funcs: FTX1_FUNCS,
        memory: Some(MemoryLayout {
            // `MC0` + five digits renders the six-digit channel field.
            select: Field::new("MC0", 5),
            read: "MR",
            write: "MW",
            channel_digits: 5,
            write_trailer: "10000",
        }),
        scan: Some(Field::new("SC", 1)),
        menu: Some("EX"),
    }
}

/// Yaesu FTX-1 model definition.
///
/// A portable HF/VHF/UHF SDR transceiver whose body is driven by either the
/// field head (6 W on battery, 10 W on an external supply) or the SPA-1
/// amplifier head (5 to 100 W, with an antenna tuner). RF power bounds,
/// the power-set command and the per-band ceiling menu items follow the
/// detected head. Main and sub receivers are
/// independent. Memories 1-99 are regular channels, 100-117 the
/// programmable scan limits.
///
/// - Default CAT baud rate: 38400, 8N1
/// - Two-second response budget with a 50 ms settle after each write
/// - Head and amplifier detected at session start
pub fn ftx1() -> CapabilityDescriptor {
    let mut levels = BTreeMap::new();
    levels.insert(Level::AfGain, GainRange::new(0, 255, 1));
    levels.insert(Level::RfGain, GainRange::new(0, 255, 1));
    levels.insert(Level::MicGain, GainRange::new(0, 100, 1));
    levels.insert(Level::Squelch, GainRange::new(0, 100, 1));
    levels.insert(Level::KeySpeed, GainRange::new(4, 60, 1));
    levels.insert(Level::Monitor, GainRange::new(0, 100, 1));
    levels.insert(Level::RfPower, FTX1_FIELD_POWER);
    levels.insert(Level::Strength, GainRange::new(0, 255, 1));

    CapabilityDescriptor {
        model_id: "ftx1",
        name: "FTX-1",
        manufacturer: Manufacturer::Yaesu,
        protocol: Protocol::Text(ftx1_spec()),
        port: PortConfig {
            baud_rate: 38_400,
            post_write_delay: Duration::from_millis(50),
            timeout: Duration::from_millis(2000),
            retry: 3,
            ..PortConfig::default()
        },
        operations: OperationSet::all()
            .without(Operation::GetXit)
            .without(Operation::SetXit),
        vfos: vec![Vfo::Main, Vfo::Sub],
        freq_ranges: vec![
            FreqRange::new(30_000, 56_000_000),
            FreqRange::new(118_000_000, 164_000_000).for_modes(&[Mode::AM, Mode::FM, Mode::DataFM]),
            FreqRange::new(430_000_000, 470_000_000),
        ],
        modes: FTX1_MODE_CODES.iter().map(|(m, _)| *m).collect(),
        levels,
        power_ranges: vec![
            (PowerClass::Battery, FTX1_BATTERY_POWER),
            (PowerClass::Amplified, FTX1_SPA1_POWER),
        ],
        max_power_menu: FTX1_MAX_POWER.to_vec(),
        functions: FTX1_FUNCS.iter().map(|(f, _)| *f).collect(),
        memory_channels: Some((1, 117)),
        rit_max_hz: Some(9999),
        xit_max_hz: None,
        menu: ftx1_menu(),
        cache_ttl: DEFAULT_CACHE_TTL,
        probe: Some(Arc::new(Ftx1HeadProbe)),
    }
}

// ---------------------------------------------------------------
// TS-590SG
// ---------------------------------------------------------------

const TS590_FREQUENCY: &[(Vfo, Field)] = &[
    (Vfo::A, Field::new("FA", 11)),
    (Vfo::B, Field::new("FB", 11)),
];

// `MD` reads and writes the operating VFO only.
const TS590_MODE: &[(Vfo, Field)] = &[(Vfo::A, Field::new("MD", 1))];

const TS590_MODE_CODES: &[(Mode, char)] = &[
    (Mode::LSB, '1'),
    (Mode::USB, '2'),
    (Mode::CW, '3'),
    (Mode::FM, '4'),
    (Mode::AM, '5'),
    (Mode::RTTY, '6'),
    (Mode::CWR, '7'),
    (Mode::RTTYR, '9'),
];

const TS590_VFO_CODES: &[(Vfo, char)] = &[(Vfo::A, '0'), (Vfo::B, '1')];

const TS590_LEVELS: &[(Level, Field)] = &[
    (Level::AfGain, Field::new("AG0", 3)),
    (Level::RfGain, Field::new("RG", 3)),
    (Level::Squelch, Field::new("SQ0", 3)),
    (Level::MicGain, Field::new("MG", 3)),
    (Level::KeySpeed, Field::new("KS", 3)),
    (Level::RfPower, Field::new("PC", 3)),
    (Level::Strength, Field::new("SM0", 4)),
];

const TS590_FUNCS: &[(Func, Field)] = &[
    (Func::NoiseBlanker, Field::new("NB", 1)),
    (Func::NoiseReduction, Field::new("NR", 1)),
    (Func::Compressor, Field::new("PR", 1)),
    (Func::Vox, Field::new("VX", 1)),
];

fn ts590sg_spec() -> TextSpec {
    TextSpec {
        terminator: TERMINATOR,
        stop_set: &[TERMINATOR],
        reject_marker: REJECT_MARKER,
        max_frame: 64,
        set_reply: SetReply::Silent,
        frequency: TS590_FREQUENCY,
        mode: TS590_MODE,
        mode_codes: TS590_MODE_CODES,
        passband: &[],
        passband_widths: &[],
        vfo_select: Some(Field::new("FR", 1)),
        vfo_codes: TS590_VFO_CODES,
        ptt: None,
        split: None,
        // RU/RD step the clarifier relative to its current value, which is
        // unsafe to resend on retry.
        rit: &[],
        xit: &[],
        levels: TS590_LEVELS,
        head_levels: &[],
        funcs: TS590_FUNCS,
        memory: None,
        scan: None,
        menu: None,
    }
}

/// Kenwood TS-590SG model definition.
///
/// A 100 W HF + 6 m transceiver with VFO A/B switching. Sets are never
/// answered; only a `?;` within the drain window reports a rejection.
///
/// - Default CAT baud rate: 9600, 8N1
pub fn ts590sg() -> CapabilityDescriptor {
    let mut levels = BTreeMap::new();
    levels.insert(Level::AfGain, GainRange::new(0, 255, 1));
    levels.insert(Level::RfGain, GainRange::new(0, 255, 1));
    levels.insert(Level::Squelch, GainRange::new(0, 255, 1));
    levels.insert(Level::MicGain, GainRange::new(0, 100, 1));
    levels.insert(Level::KeySpeed, GainRange::new(4, 60, 1));
    levels.insert(Level::RfPower, GainRange::new(5, 100, 1));
    levels.insert(Level::Strength, GainRange::new(0, 30, 1));

    let operations = [
        Operation::GetFrequency,
        Operation::SetFrequency,
        Operation::GetMode,
        Operation::SetMode,
        Operation::GetVfo,
        Operation::SetVfo,
        Operation::GetLevel,
        Operation::SetLevel,
        Operation::GetFunc,
        Operation::SetFunc,
    ]
    .into_iter()
    .collect();

    CapabilityDescriptor {
        model_id: "ts590sg",
        name: "TS-590SG",
        manufacturer: Manufacturer::Kenwood,
        protocol: Protocol::Text(ts590sg_spec()),
        port: PortConfig {
            baud_rate: 9600,
            ..PortConfig::default()
        },
        operations,
        vfos: vec![Vfo::A, Vfo::B],
        freq_ranges: vec![FreqRange::new(30_000, 60_000_000)],
        modes: TS590_MODE_CODES.iter().map(|(m, _)| *m).collect(),
        levels,
        power_ranges: Vec::new(),
        max_power_menu: Vec::new(),
        functions: TS590_FUNCS.iter().map(|(f, _)| *f).collect(),
        memory_channels: None,
        rit_max_hz: None,
        xit_max_hz: None,
        menu: MenuTable::new(&[]),
        cache_ttl: DEFAULT_CACHE_TTL,
        probe: None,
    }
}

/// Every text-family model.
pub fn all_text_models() -> Vec<CapabilityDescriptor> {
    vec![ftx1(), ts590sg()]
}
