//! Capability descriptors and operation dispatch.
//!
//! A [`CapabilityDescriptor`] is the static description of one device
//! model: which operations it supports, what it can tune, the bounds of its
//! continuously variable settings, its dialect data and its extended menu.
//! Descriptors are built once, shared behind an `Arc`, and never mutated.
//!
//! # Out-of-range policy
//!
//! Values outside a declared bound are rejected with
//! [`Error::OutOfRange`] before anything is sent. Nothing is clamped;
//! callers that prefer clamping can read the bounds from the descriptor
//! and clamp themselves.
//!
//! Transmit power bounds can depend on the power head found by detection;
//! the session validates against [`CapabilityDescriptor::validate_for`]
//! with its current [`DetectedHardware`].

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use crate::command::{Command, Operation, OperationSet};
use crate::dialect::Protocol;
use crate::error::{Error, Result};
use crate::hardware::{DetectedHardware, PowerClass};
use crate::menu::{MenuTable, MenuToken};
use crate::port::PortConfig;
use crate::probe::HardwareProbe;
use crate::types::{Func, FreqRange, Level, Manufacturer, Mode, PowerBand, Vfo};

/// Default freshness window for cached state.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_millis(500);

/// Bounds of one continuously variable setting, in device units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GainRange {
    /// Inclusive minimum.
    pub min: i32,
    /// Inclusive maximum.
    pub max: i32,
    /// Granularity; accepted values are `min + k * step`.
    pub step: i32,
}

impl GainRange {
    /// Create a range with the given granularity.
    pub const fn new(min: i32, max: i32, step: i32) -> Self {
        GainRange { min, max, step }
    }

    /// Check `value` against the bounds and the step grid.
    pub fn check(&self, what: impl std::fmt::Display, value: i32) -> Result<()> {
        let out = || {
            Error::out_of_range(
                what.to_string(),
                i64::from(value),
                i64::from(self.min),
                i64::from(self.max),
            )
        };
        if value < self.min || value > self.max {
            return Err(out());
        }
        if self.step > 1 && (value - self.min) % self.step != 0 {
            return Err(out());
        }
        Ok(())
    }
}

/// Menu items holding one band's power ceiling.
///
/// Radios with an amplifier head keep a separate set of ceilings for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxPowerItem {
    /// Band group the ceiling applies to.
    pub band: PowerBand,
    /// Item used with the built-in head.
    pub standard: MenuToken,
    /// Item used while an amplifier head drives the radio.
    pub amplified: MenuToken,
}

/// Static description of one device model.
#[derive(Debug, Clone)]
pub struct CapabilityDescriptor {
    /// Registry key, e.g. `"ftx1"`.
    pub model_id: &'static str,
    /// Human-readable model name.
    pub name: &'static str,
    /// Manufacturer.
    pub manufacturer: Manufacturer,
    /// Framing family and dialect data.
    pub protocol: Protocol,
    /// Default link settings and transaction timing.
    pub port: PortConfig,
    /// Supported operations.
    pub operations: OperationSet,
    /// Addressable VFOs; the first is selected after open.
    pub vfos: Vec<Vfo>,
    /// Tunable ranges.
    pub freq_ranges: Vec<FreqRange>,
    /// Supported operating modes.
    pub modes: Vec<Mode>,
    /// Bounds of each supported level.
    pub levels: BTreeMap<Level, GainRange>,
    /// RF power bounds replacing the [`levels`](Self::levels) entry while
    /// detection reports the given power class.
    pub power_ranges: Vec<(PowerClass, GainRange)>,
    /// Per-band power ceiling menu items.
    pub max_power_menu: Vec<MaxPowerItem>,
    /// Supported function toggles.
    pub functions: Vec<Func>,
    /// Memory channel numbers, inclusive.
    pub memory_channels: Option<(u16, u16)>,
    /// Largest RIT magnitude in hertz.
    pub rit_max_hz: Option<i32>,
    /// Largest XIT magnitude in hertz.
    pub xit_max_hz: Option<i32>,
    /// Extended menu.
    pub menu: MenuTable,
    /// Freshness window for the state cache. Zero disables caching.
    pub cache_ttl: Duration,
    /// Detection sequence for optional hardware.
    pub probe: Option<Arc<dyn HardwareProbe>>,
}

impl CapabilityDescriptor {
    /// Resolve `op` against the supported-operation bitmap.
    pub fn bind(&self, op: Operation) -> Result<Operation> {
        if self.operations.contains(op) {
            Ok(op)
        } else {
            Err(Error::Unavailable(format!("{op} is not supported by {}", self.name)))
        }
    }

    /// Whether `op` is supported.
    pub fn supports(&self, op: Operation) -> bool {
        self.operations.contains(op)
    }

    /// Check that `vfo` is addressable on this model.
    pub fn check_vfo(&self, vfo: Vfo) -> Result<()> {
        if self.vfos.contains(&vfo) {
            Ok(())
        } else {
            Err(Error::Unavailable(format!("{} has no {vfo}", self.name)))
        }
    }

    /// Check that `freq_hz` is tunable on `vfo`, optionally in `mode`.
    ///
    /// The error carries the bounds of the closest applicable range.
    pub fn check_frequency(&self, vfo: Vfo, mode: Option<Mode>, freq_hz: u64) -> Result<()> {
        let applicable: Vec<&FreqRange> = self
            .freq_ranges
            .iter()
            .filter(|r| r.applies_to(vfo, mode))
            .collect();
        if applicable.iter().any(|r| r.contains(freq_hz)) {
            return Ok(());
        }
        let distance = |r: &&FreqRange| {
            if freq_hz < r.low_hz {
                r.low_hz - freq_hz
            } else {
                freq_hz.saturating_sub(r.high_hz)
            }
        };
        let (min, max) = applicable
            .into_iter()
            .min_by_key(distance)
            .map(|r| (r.low_hz, r.high_hz))
            .unwrap_or((0, 0));
        Err(Error::out_of_range(
            "frequency",
            clamp_i64(freq_hz),
            clamp_i64(min),
            clamp_i64(max),
        ))
    }

    /// Check that `mode` is supported.
    pub fn check_mode(&self, mode: Mode) -> Result<()> {
        if self.modes.contains(&mode) {
            Ok(())
        } else {
            Err(Error::Unavailable(format!("{} does not support {mode}", self.name)))
        }
    }

    /// Bounds of `level`, or [`Error::Unavailable`].
    pub fn level_range(&self, level: Level) -> Result<GainRange> {
        self.levels
            .get(&level)
            .copied()
            .ok_or_else(|| Error::Unavailable(format!("{} has no {level} level", self.name)))
    }

    /// Bounds of `level` with `hw` fitted. Only RF power varies with the
    /// detected power class; unknown hardware gets the static bounds.
    pub fn level_range_for(&self, level: Level, hw: &DetectedHardware) -> Result<GainRange> {
        let range = self.level_range(level)?;
        if level != Level::RfPower {
            return Ok(range);
        }
        Ok(self
            .power_ranges
            .iter()
            .find(|(class, _)| *class == hw.power)
            .map(|(_, r)| *r)
            .unwrap_or(range))
    }

    /// Check a level write.
    pub fn check_level(&self, level: Level, value: i32) -> Result<()> {
        self.check_level_for(level, value, &DetectedHardware::default())
    }

    /// Check a level write against the bounds for `hw`.
    pub fn check_level_for(&self, level: Level, value: i32, hw: &DetectedHardware) -> Result<()> {
        let range = self.level_range_for(level, hw)?;
        if level.is_read_only() {
            return Err(Error::Unavailable(format!("{level} is read-only")));
        }
        range.check(level, value)
    }

    /// Menu item holding the power ceiling of `band` for the head in `hw`.
    pub fn max_power_token(&self, band: PowerBand, hw: &DetectedHardware) -> Result<MenuToken> {
        let item = self
            .max_power_menu
            .iter()
            .find(|item| item.band == band)
            .ok_or_else(|| Error::Unavailable(format!("{} has no {band} power ceiling", self.name)))?;
        Ok(if hw.power == PowerClass::Amplified {
            item.amplified
        } else {
            item.standard
        })
    }

    /// Check that `func` is supported.
    pub fn check_func(&self, func: Func) -> Result<()> {
        if self.functions.contains(&func) {
            Ok(())
        } else {
            Err(Error::Unavailable(format!("{} has no {func} function", self.name)))
        }
    }

    /// Check a memory channel number.
    pub fn check_channel(&self, number: u16) -> Result<()> {
        let (min, max) = self
            .memory_channels
            .ok_or_else(|| Error::Unavailable(format!("{} has no memory channels", self.name)))?;
        if number < min || number > max {
            return Err(Error::out_of_range(
                "memory channel",
                i64::from(number),
                i64::from(min),
                i64::from(max),
            ));
        }
        Ok(())
    }

    fn check_offset(&self, what: &str, limit: Option<i32>, offset: i32) -> Result<()> {
        let limit =
            limit.ok_or_else(|| Error::Unavailable(format!("{} has no {what}", self.name)))?;
        if offset.unsigned_abs() > limit.unsigned_abs() {
            return Err(Error::out_of_range(
                what,
                i64::from(offset),
                -i64::from(limit),
                i64::from(limit),
            ));
        }
        Ok(())
    }

    /// Full pre-flight check of a command: operation bitmap first, then
    /// every argument against the declared bounds.
    ///
    /// Nothing here touches the device; a command that passes may still be
    /// rejected by it. Hardware-dependent bounds use their static values;
    /// see [`validate_for`](Self::validate_for).
    pub fn validate(&self, cmd: &Command) -> Result<()> {
        self.validate_for(cmd, &DetectedHardware::default())
    }

    /// [`validate`](Self::validate) with the bounds for the hardware in `hw`.
    pub fn validate_for(&self, cmd: &Command, hw: &DetectedHardware) -> Result<()> {
        self.bind(cmd.operation())?;
        match cmd {
            Command::GetFrequency(vfo)
            | Command::GetMode(vfo)
            | Command::GetPassband(vfo)
            | Command::SetPassband(vfo, _)
            | Command::GetRit(vfo)
            | Command::GetXit(vfo)
            | Command::SetVfo(vfo) => self.check_vfo(*vfo),
            Command::SetFrequency(vfo, freq) => {
                self.check_vfo(*vfo)?;
                self.check_frequency(*vfo, None, *freq)
            }
            Command::SetMode(vfo, mode) => {
                self.check_vfo(*vfo)?;
                self.check_mode(*mode)
            }
            Command::SetSplit(split) => self.check_vfo(split.tx_vfo),
            Command::SetRit(vfo, offset) => {
                self.check_vfo(*vfo)?;
                self.check_offset("RIT offset", self.rit_max_hz, *offset)
            }
            Command::SetXit(vfo, offset) => {
                self.check_vfo(*vfo)?;
                self.check_offset("XIT offset", self.xit_max_hz, *offset)
            }
            Command::GetLevel(level) => self.level_range(*level).map(|_| ()),
            Command::SetLevel(level, value) => self.check_level_for(*level, *value, hw),
            Command::GetFunc(func) | Command::SetFunc(func, _) => self.check_func(*func),
            Command::SetMemory(n) | Command::ReadChannel(n) => self.check_channel(*n),
            Command::WriteChannel(ch) => {
                self.check_channel(ch.number)?;
                self.check_mode(ch.mode)?;
                self.check_frequency(Vfo::Memory, Some(ch.mode), ch.freq_hz)?;
                if ch.clarifier_hz != 0 {
                    self.check_offset("clarifier offset", self.rit_max_hz, ch.clarifier_hz)?;
                }
                Ok(())
            }
            Command::GetMenu(token) | Command::SetMenu(token, _) => self
                .menu
                .get(*token)
                .map(|_| ())
                .ok_or_else(|| Error::Config(format!("unknown menu token {token}"))),
            Command::GetVfo
            | Command::GetPtt
            | Command::SetPtt(_)
            | Command::GetSplit
            | Command::GetMemory
            | Command::Scan(_) => Ok(()),
        }
    }
}

fn clamp_i64(v: u64) -> i64 {
    i64::try_from(v).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::{BinarySpec, DigitOrder};
    use crate::menu::{MenuItem, MenuToken};
    use crate::types::{Channel, SplitState};

    fn descriptor() -> CapabilityDescriptor {
        let mut levels = BTreeMap::new();
        levels.insert(Level::RfPower, GainRange::new(5, 100, 1));
        levels.insert(Level::KeySpeed, GainRange::new(4, 60, 1));
        levels.insert(Level::MicGain, GainRange::new(0, 100, 5));
        levels.insert(Level::Strength, GainRange::new(0, 255, 1));
        CapabilityDescriptor {
            model_id: "test",
            name: "Test Rig",
            manufacturer: Manufacturer::Icom,
            protocol: Protocol::Binary(BinarySpec {
                address: 0x94,
                controller: 0xE0,
                digit_order: DigitOrder::LittleEndian,
                freq_bytes: 5,
                echoes_requests: true,
                modes: &[],
                vfo_codes: &[],
                levels: &[],
                funcs: &[],
                passband_widths: &[],
                max_frame: 32,
            }),
            port: PortConfig::default(),
            operations: OperationSet::all().without(Operation::Scan),
            vfos: vec![Vfo::A, Vfo::B],
            freq_ranges: vec![
                FreqRange::new(30_000, 60_000_000),
                FreqRange::new(144_000_000, 148_000_000).for_modes(&[Mode::FM, Mode::USB]),
            ],
            modes: vec![Mode::USB, Mode::LSB, Mode::CW, Mode::FM],
            levels,
            power_ranges: vec![
                (PowerClass::Battery, GainRange::new(5, 20, 1)),
                (PowerClass::Amplified, GainRange::new(5, 500, 5)),
            ],
            max_power_menu: vec![MaxPowerItem {
                band: PowerBand::Hf,
                standard: MenuToken::new(1, 1, 1),
                amplified: MenuToken::new(1, 2, 1),
            }],
            functions: vec![Func::NoiseBlanker],
            memory_channels: Some((1, 99)),
            rit_max_hz: Some(9999),
            xit_max_hz: None,
            menu: MenuTable::new(&[MenuItem::number(MenuToken::new(1, 1, 1), "A", 2, 0, 10)]),
            cache_ttl: DEFAULT_CACHE_TTL,
            probe: None,
        }
    }

    #[test]
    fn bind_unsupported_is_unavailable() {
        let d = descriptor();
        assert_eq!(d.bind(Operation::GetFrequency).unwrap(), Operation::GetFrequency);
        assert!(matches!(d.bind(Operation::Scan), Err(Error::Unavailable(_))));
        assert!(matches!(
            d.validate(&Command::Scan(crate::types::ScanOp::Up)),
            Err(Error::Unavailable(_))
        ));
    }

    #[test]
    fn frequency_bounds() {
        let d = descriptor();
        assert!(d.check_frequency(Vfo::A, None, 14_074_000).is_ok());
        assert!(d.check_frequency(Vfo::A, None, 146_520_000).is_ok());
        let err = d.check_frequency(Vfo::A, None, 100_000_000).unwrap_err();
        assert!(matches!(err, Error::OutOfRange { min: 30_000, max: 60_000_000, .. }));
        let err = d.check_frequency(Vfo::A, None, 150_000_000).unwrap_err();
        assert!(matches!(err, Error::OutOfRange { min: 144_000_000, .. }));
    }

    #[test]
    fn frequency_range_respects_mode() {
        let d = descriptor();
        assert!(d.check_frequency(Vfo::A, Some(Mode::FM), 146_000_000).is_ok());
        assert!(d.check_frequency(Vfo::A, Some(Mode::CW), 146_000_000).is_err());
    }

    #[test]
    fn gain_range_rejects_instead_of_clamping() {
        let d = descriptor();
        assert!(d.check_level(Level::RfPower, 50).is_ok());
        assert!(matches!(
            d.check_level(Level::RfPower, 101),
            Err(Error::OutOfRange { value: 101, min: 5, max: 100, .. })
        ));
        assert!(matches!(d.check_level(Level::RfPower, 4), Err(Error::OutOfRange { .. })));
    }

    #[test]
    fn gain_range_step_grid() {
        let d = descriptor();
        assert!(d.check_level(Level::MicGain, 45).is_ok());
        assert!(matches!(d.check_level(Level::MicGain, 47), Err(Error::OutOfRange { .. })));
    }

    #[test]
    fn power_bounds_follow_detected_class() {
        let d = descriptor();
        let hw = |power: PowerClass| DetectedHardware {
            probed: true,
            power,
            ..Default::default()
        };
        let battery = hw(PowerClass::Battery);
        assert!(d.check_level_for(Level::RfPower, 20, &battery).is_ok());
        assert!(matches!(
            d.validate_for(&Command::SetLevel(Level::RfPower, 50), &battery),
            Err(Error::OutOfRange { value: 50, min: 5, max: 20, .. })
        ));

        let amplified = hw(PowerClass::Amplified);
        assert!(d.validate_for(&Command::SetLevel(Level::RfPower, 400), &amplified).is_ok());
        assert!(d.check_level_for(Level::RfPower, 401, &amplified).is_err());

        // External supply has no entry: static bounds apply.
        assert_eq!(
            d.level_range_for(Level::RfPower, &hw(PowerClass::External)).unwrap(),
            GainRange::new(5, 100, 1)
        );
        assert_eq!(
            d.level_range_for(Level::MicGain, &amplified).unwrap(),
            GainRange::new(0, 100, 5)
        );
    }

    #[test]
    fn max_power_item_follows_head() {
        let d = descriptor();
        let field = DetectedHardware::default();
        let amplified = DetectedHardware {
            probed: true,
            power: PowerClass::Amplified,
            ..Default::default()
        };
        assert_eq!(d.max_power_token(PowerBand::Hf, &field).unwrap(), MenuToken::new(1, 1, 1));
        assert_eq!(d.max_power_token(PowerBand::Hf, &amplified).unwrap(), MenuToken::new(1, 2, 1));
        assert!(matches!(
            d.max_power_token(PowerBand::Uhf, &field),
            Err(Error::Unavailable(_))
        ));
    }

    #[test]
    fn meters_cannot_be_set() {
        let d = descriptor();
        assert!(d.validate(&Command::GetLevel(Level::Strength)).is_ok());
        assert!(matches!(
            d.check_level(Level::Strength, 10),
            Err(Error::Unavailable(_))
        ));
    }

    #[test]
    fn unknown_level_and_func_unavailable() {
        let d = descriptor();
        assert!(matches!(d.validate(&Command::GetLevel(Level::Swr)), Err(Error::Unavailable(_))));
        assert!(matches!(
            d.validate(&Command::SetFunc(Func::Vox, true)),
            Err(Error::Unavailable(_))
        ));
    }

    #[test]
    fn vfo_and_split_checks() {
        let d = descriptor();
        assert!(matches!(
            d.validate(&Command::GetFrequency(Vfo::Sub)),
            Err(Error::Unavailable(_))
        ));
        assert!(d.validate(&Command::SetSplit(SplitState::on(Vfo::B))).is_ok());
        assert!(d.validate(&Command::SetSplit(SplitState::on(Vfo::Main))).is_err());
    }

    #[test]
    fn offsets_bounded_symmetrically() {
        let d = descriptor();
        assert!(d.validate(&Command::SetRit(Vfo::A, -9999)).is_ok());
        assert!(matches!(
            d.validate(&Command::SetRit(Vfo::A, 10_000)),
            Err(Error::OutOfRange { min: -9999, max: 9999, .. })
        ));
        assert!(matches!(
            d.validate(&Command::SetXit(Vfo::A, 10)),
            Err(Error::Unavailable(_))
        ));
    }

    #[test]
    fn channel_checks() {
        let d = descriptor();
        assert!(d.validate(&Command::SetMemory(1)).is_ok());
        assert!(matches!(d.validate(&Command::SetMemory(0)), Err(Error::OutOfRange { .. })));
        let ch = Channel {
            number: 5,
            freq_hz: 7_074_000,
            mode: Mode::USB,
            clarifier_hz: 0,
        };
        assert!(d.validate(&Command::WriteChannel(ch.clone())).is_ok());
        let bad = Channel {
            mode: Mode::AM,
            ..ch
        };
        assert!(matches!(d.validate(&Command::WriteChannel(bad)), Err(Error::Unavailable(_))));
    }

    #[test]
    fn menu_token_must_exist() {
        let d = descriptor();
        assert!(d.validate(&Command::GetMenu(MenuToken::new(1, 1, 1))).is_ok());
        assert!(matches!(
            d.validate(&Command::GetMenu(MenuToken::new(2, 1, 1))),
            Err(Error::Config(_))
        ));
    }
}
