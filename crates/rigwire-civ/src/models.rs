//! CI-V model descriptors.
//!
//! | Model   | CI-V   | Baud    | Power | Coverage           |
//! |---------|--------|---------|-------|--------------------|
//! | IC-7300 | `0x94` | 115200  | 100W  | HF + 6m            |
//! | IC-705  | `0xA4` | 115200  | 10W   | HF + VHF + UHF     |
//!
//! Both rigs share the same command set; only the bus address, coverage
//! and power differ. Every level travels on the rig's 0-255 scale.

use std::collections::BTreeMap;

use rigwire_core::caps::{CapabilityDescriptor, DEFAULT_CACHE_TTL, GainRange};
use rigwire_core::command::{Operation, OperationSet};
use rigwire_core::dialect::{BinarySpec, DigitOrder, Protocol};
use rigwire_core::menu::MenuTable;
use rigwire_core::port::PortConfig;
use rigwire_core::types::{FreqRange, Func, Level, Manufacturer, Mode, Vfo};

use crate::civ::CONTROLLER_ADDR;

/// Base mode bytes; data modes add the data flag in the same command.
const MODES: &[(Mode, u8)] = &[
    (Mode::LSB, 0x00),
    (Mode::USB, 0x01),
    (Mode::AM, 0x02),
    (Mode::CW, 0x03),
    (Mode::RTTY, 0x04),
    (Mode::FM, 0x05),
    (Mode::CWR, 0x07),
    (Mode::RTTYR, 0x08),
];

const VFO_CODES: &[(Vfo, u8)] = &[(Vfo::A, 0x00), (Vfo::B, 0x01)];

const LEVELS: &[(Level, u8, u8)] = &[
    (Level::AfGain, 0x14, 0x01),
    (Level::RfGain, 0x14, 0x02),
    (Level::Squelch, 0x14, 0x03),
    (Level::NoiseReduction, 0x14, 0x06),
    (Level::RfPower, 0x14, 0x0A),
    (Level::MicGain, 0x14, 0x0B),
    (Level::KeySpeed, 0x14, 0x0C),
    (Level::Compressor, 0x14, 0x0E),
    (Level::Monitor, 0x14, 0x15),
    (Level::Strength, 0x15, 0x02),
    (Level::Swr, 0x15, 0x12),
    (Level::Alc, 0x15, 0x13),
];

const FUNCS: &[(Func, u8, u8)] = &[
    (Func::NoiseBlanker, 0x16, 0x22),
    (Func::NoiseReduction, 0x16, 0x40),
    (Func::AutoNotch, 0x16, 0x41),
    (Func::Tone, 0x16, 0x42),
    (Func::ToneSquelch, 0x16, 0x43),
    (Func::Compressor, 0x16, 0x44),
    (Func::Monitor, 0x16, 0x45),
    (Func::Vox, 0x16, 0x46),
    (Func::Lock, 0x16, 0x50),
];

/// FIL1, FIL2, FIL3 factory widths for SSB.
const FILTER_WIDTHS: &[u32] = &[3000, 2400, 1800];

fn spec(address: u8) -> BinarySpec {
    BinarySpec {
        address,
        controller: CONTROLLER_ADDR,
        digit_order: DigitOrder::LittleEndian,
        freq_bytes: 5,
        echoes_requests: true,
        modes: MODES,
        vfo_codes: VFO_CODES,
        levels: LEVELS,
        funcs: FUNCS,
        passband_widths: FILTER_WIDTHS,
        max_frame: 64,
    }
}

fn all_modes() -> Vec<Mode> {
    let mut modes: Vec<Mode> = MODES.iter().map(|(m, _)| *m).collect();
    modes.extend([Mode::DataUSB, Mode::DataLSB, Mode::DataFM, Mode::DataAM]);
    modes
}

fn levels() -> BTreeMap<Level, GainRange> {
    LEVELS
        .iter()
        .map(|(level, ..)| (*level, GainRange::new(0, 255, 1)))
        .collect()
}

fn operations() -> OperationSet {
    OperationSet::all()
        .without(Operation::GetVfo)
        .without(Operation::SetPassband)
        .without(Operation::GetXit)
        .without(Operation::SetXit)
        .without(Operation::GetMemory)
        .without(Operation::GetMenu)
        .without(Operation::SetMenu)
}

fn descriptor(
    model_id: &'static str,
    name: &'static str,
    address: u8,
    freq_ranges: Vec<FreqRange>,
) -> CapabilityDescriptor {
    CapabilityDescriptor {
        model_id,
        name,
        manufacturer: Manufacturer::Icom,
        protocol: Protocol::Binary(spec(address)),
        port: PortConfig {
            baud_rate: 115_200,
            ..PortConfig::default()
        },
        operations: operations(),
        vfos: vec![Vfo::A, Vfo::B],
        freq_ranges,
        modes: all_modes(),
        levels: levels(),
        power_ranges: Vec::new(),
        max_power_menu: Vec::new(),
        functions: FUNCS.iter().map(|(f, ..)| *f).collect(),
        memory_channels: Some((1, 99)),
        rit_max_hz: Some(9999),
        xit_max_hz: None,
        menu: MenuTable::new(&[]),
        cache_ttl: DEFAULT_CACHE_TTL,
        probe: None,
    }
}

/// IC-7300 model definition.
///
/// Icom's single-receiver direct-sampling HF + 6 m transceiver.
///
/// - CI-V address: `0x94`
/// - General coverage receive 30 kHz - 74.8 MHz
/// - USB connection at 115200 baud
pub fn ic7300() -> CapabilityDescriptor {
    descriptor("ic7300", "IC-7300", 0x94, vec![FreqRange::new(30_000, 74_800_000)])
}

/// IC-705 model definition.
///
/// The portable 10 W HF/VHF/UHF transceiver.
///
/// - CI-V address: `0xA4`
/// - Frequency coverage: 1.8-54 MHz, 144-148 MHz, 420-450 MHz
pub fn ic705() -> CapabilityDescriptor {
    descriptor(
        "ic705",
        "IC-705",
        0xA4,
        vec![
            FreqRange::new(1_800_000, 54_000_000),
            FreqRange::new(144_000_000, 148_000_000),
            FreqRange::new(420_000_000, 450_000_000),
        ],
    )
}

/// Every CI-V model.
pub fn all_civ_models() -> Vec<CapabilityDescriptor> {
    vec![ic7300(), ic705()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rigwire_core::Error;
    use rigwire_core::command::Command;

    #[test]
    fn addresses_differ() {
        let addresses: Vec<u8> = all_civ_models()
            .iter()
            .map(|m| match &m.protocol {
                Protocol::Binary(spec) => spec.address,
                Protocol::Text(_) => 0,
            })
            .collect();
        assert_eq!(addresses, vec![0x94, 0xA4]);
    }

    #[test]
    fn ic7300_defaults() {
        let m = ic7300();
        assert_eq!(m.port.baud_rate, 115_200);
        assert_eq!(m.manufacturer, Manufacturer::Icom);
        assert!(m.supports(Operation::SetRit));
        assert!(!m.supports(Operation::GetVfo));
        assert!(m.menu.is_empty());
    }

    #[test]
    fn ic705_coverage() {
        let m = ic705();
        assert!(m.validate(&Command::SetFrequency(Vfo::A, 145_000_000)).is_ok());
        assert!(matches!(
            m.validate(&Command::SetFrequency(Vfo::A, 100_000_000)),
            Err(Error::OutOfRange { .. })
        ));
    }

    #[test]
    fn levels_on_byte_scale() {
        let m = ic7300();
        assert!(m.validate(&Command::SetLevel(Level::RfPower, 255)).is_ok());
        assert!(m.validate(&Command::SetLevel(Level::RfPower, 256)).is_err());
    }

    #[test]
    fn data_modes_listed() {
        assert!(ic7300().modes.contains(&Mode::DataUSB));
    }
}
