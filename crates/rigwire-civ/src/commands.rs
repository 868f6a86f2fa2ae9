//! CI-V dialect: abstract commands to binary exchanges and back.
//!
//! Queries expect a data frame carrying the command byte (and sub-command,
//! where one applies); sets expect `0xFB`. Numeric fields are packed
//! decimal. VFOs are addressed relative to the current selection: the
//! `0x25`/`0x26` commands take `0x00` for the selected VFO and `0x01` for
//! its partner, and the clarifier only exists on the selected one.
//!
//! # Wire examples (IC-7300, address `0x94`)
//!
//! | Command                   | Request                                   | Reply                  |
//! |---------------------------|-------------------------------------------|------------------------|
//! | get frequency, current    | `FE FE 94 E0 25 00 FD`                    | `... 25 00 <5 BCD> FD` |
//! | set mode, current, USB    | `FE FE 94 E0 26 00 01 00 01 FD`           | `FE FE E0 94 FB FD`    |
//! | set RF power 128          | `FE FE 94 E0 14 0A 01 28 FD`              | `FE FE E0 94 FB FD`    |
//! | set RIT -300 Hz           | `FE FE 94 E0 21 00 00 03 01 FD`           | `FE FE E0 94 FB FD`    |

use rigwire_core::codec::{Dialect, Exchange, FrameCodec};
use rigwire_core::command::Command;
use rigwire_core::dialect::{BinarySpec, DigitOrder};
use rigwire_core::error::{Error, Result};
use rigwire_core::transport::ReadUntil;
use rigwire_core::types::{Channel, Func, Level, Mode, Passband, ScanOp, Value, Vfo};

use crate::civ::{
    CivCodec, CivFrame, decode_bcd, decode_offset, encode_bcd, encode_offset,
};

const CMD_SPLIT: u8 = 0x0F;
const CMD_SCAN: u8 = 0x0E;
const CMD_SELECT_VFO: u8 = 0x07;
const CMD_SELECT_MEMORY: u8 = 0x08;
const CMD_MISC: u8 = 0x1A;
const CMD_PTT: u8 = 0x1C;
const CMD_OFFSET: u8 = 0x21;
const CMD_FREQUENCY: u8 = 0x25;
const CMD_MODE: u8 = 0x26;

const SUB_PTT: u8 = 0x00;
const SUB_RIT: u8 = 0x00;
const SUB_MEMORY_CONTENTS: u8 = 0x00;
const SUB_SCAN_STOP: u8 = 0x00;
const SUB_SCAN_START: u8 = 0x01;

/// Selected VFO in `0x25`/`0x26`.
const SEL_CURRENT: u8 = 0x00;
/// Unselected VFO in `0x25`/`0x26`.
const SEL_OTHER: u8 = 0x01;

/// Filter byte sent with mode sets: FIL1.
const FILTER_DEFAULT: u8 = 0x01;
/// Level values are four packed digits (0000-0255).
const LEVEL_BYTES: usize = 2;
const CHANNEL_BYTES: usize = 2;
/// Memory contents reply for a channel that holds nothing.
const CHANNEL_BLANK: u8 = 0xFF;

/// Encoder/decoder for one CI-V model.
#[derive(Debug, Clone)]
pub struct CivDialect {
    spec: BinarySpec,
    codec: CivCodec,
}

impl CivDialect {
    /// Build a dialect from its table.
    pub fn new(spec: BinarySpec) -> Self {
        let codec = CivCodec::new(&spec);
        CivDialect { spec, codec }
    }

    /// The dialect table.
    pub fn spec(&self) -> &BinarySpec {
        &self.spec
    }

    /// The framing rules.
    pub fn codec(&self) -> &CivCodec {
        &self.codec
    }

    fn query(&self, cmd: u8, sub: Option<u8>) -> Exchange {
        let prefix: Vec<u8> = std::iter::once(cmd).chain(sub).collect();
        Exchange::reply(self.codec.request(cmd, sub, &[]), prefix)
    }

    fn set(&self, cmd: u8, sub: Option<u8>, data: &[u8]) -> Exchange {
        Exchange::ack(self.codec.request(cmd, sub, data))
    }

    /// `0x00` for the selected VFO, `0x01` for its partner.
    fn selector(&self, vfo: Vfo, current: Vfo) -> Result<u8> {
        if vfo == current {
            Ok(SEL_CURRENT)
        } else if current.other() == Some(vfo) {
            Ok(SEL_OTHER)
        } else {
            Err(Error::Unavailable(format!(
                "{vfo} is not addressable while {current} is selected"
            )))
        }
    }

    fn mode_byte(&self, mode: Mode) -> Result<(u8, bool)> {
        let (base, data) = match mode {
            Mode::DataUSB => (Mode::USB, true),
            Mode::DataLSB => (Mode::LSB, true),
            Mode::DataFM => (Mode::FM, true),
            Mode::DataAM => (Mode::AM, true),
            other => (other, false),
        };
        self.spec
            .modes
            .iter()
            .find(|(m, _)| *m == base)
            .map(|(_, b)| (*b, data))
            .ok_or_else(|| Error::Unavailable(format!("mode {mode} has no code")))
    }

    fn mode_from_byte(&self, byte: u8, data: bool) -> Result<Mode> {
        let base = self
            .spec
            .modes
            .iter()
            .find(|(_, b)| *b == byte)
            .map(|(m, _)| *m)
            .ok_or_else(|| Error::Garbled(format!("unknown mode byte 0x{byte:02X}")))?;
        Ok(match (base, data) {
            (Mode::USB, true) => Mode::DataUSB,
            (Mode::LSB, true) => Mode::DataLSB,
            (Mode::FM, true) => Mode::DataFM,
            (Mode::AM, true) => Mode::DataAM,
            (m, _) => m,
        })
    }

    fn vfo_code(&self, vfo: Vfo) -> Result<u8> {
        self.spec
            .vfo_codes
            .iter()
            .find(|(v, _)| *v == vfo)
            .map(|(_, c)| *c)
            .ok_or_else(|| Error::Unavailable(format!("{vfo} cannot be selected")))
    }

    fn level_address(&self, level: Level) -> Result<(u8, u8)> {
        self.spec
            .levels
            .iter()
            .find(|(l, ..)| *l == level)
            .map(|(_, cmd, sub)| (*cmd, *sub))
            .ok_or_else(|| Error::Unavailable(format!("no {level} command")))
    }

    fn func_address(&self, func: Func) -> Result<(u8, u8)> {
        self.spec
            .funcs
            .iter()
            .find(|(f, ..)| *f == func)
            .map(|(_, cmd, sub)| (*cmd, *sub))
            .ok_or_else(|| Error::Unavailable(format!("no {func} command")))
    }

    fn frequency(&self, freq_hz: u64) -> Result<Vec<u8>> {
        encode_bcd(freq_hz, self.spec.freq_bytes, self.spec.digit_order)
            .map_err(|_| self.frequency_out_of_range(freq_hz))
    }

    fn frequency_out_of_range(&self, freq_hz: u64) -> Error {
        let max = u32::try_from(self.spec.freq_bytes * 2)
            .ok()
            .and_then(|d| 10i64.checked_pow(d))
            .map_or(i64::MAX, |p| p - 1);
        Error::out_of_range("frequency", i64::try_from(freq_hz).unwrap_or(i64::MAX), 0, max)
    }

    fn channel_number(&self, number: u16) -> Result<Vec<u8>> {
        encode_bcd(u64::from(number), CHANNEL_BYTES, DigitOrder::BigEndian)
    }

    /// `<channel:2> <select> <freq> <mode> <data> <filter>`
    fn channel_record(&self, ch: &Channel) -> Result<Vec<u8>> {
        if ch.clarifier_hz != 0 {
            return Err(Error::Unavailable(
                "memory channels do not store a clarifier offset".into(),
            ));
        }
        let (mode, data) = self.mode_byte(ch.mode)?;
        let mut record = self.channel_number(ch.number)?;
        record.push(0x00);
        record.extend(self.frequency(ch.freq_hz)?);
        record.extend([mode, u8::from(data), FILTER_DEFAULT]);
        Ok(record)
    }

    fn decode_channel(&self, number: u16, frame: &CivFrame) -> Result<Channel> {
        // sub-command, channel
        let head = 1 + CHANNEL_BYTES;
        if frame.payload.get(head) == Some(&CHANNEL_BLANK) {
            return Err(Error::Unavailable(format!("memory channel {number} is blank")));
        }
        // select flag, frequency, mode, data flag, filter
        let need = head + 1 + self.spec.freq_bytes + 3;
        if frame.payload.len() < need {
            return Err(Error::Garbled(format!(
                "memory record too short: {} < {need}",
                frame.payload.len()
            )));
        }
        let echoed = decode_bcd(&frame.payload[1..head], DigitOrder::BigEndian)?;
        if echoed != u64::from(number) {
            return Err(Error::Garbled(format!(
                "memory record for channel {echoed}, asked for {number}"
            )));
        }
        let at = head + 1;
        let freq_end = at + self.spec.freq_bytes;
        let freq_hz = decode_bcd(&frame.payload[at..freq_end], self.spec.digit_order)?;
        let mode = self.mode_from_byte(frame.payload[freq_end], frame.payload[freq_end + 1] != 0)?;
        Ok(Channel {
            number,
            freq_hz,
            mode,
            clarifier_hz: 0,
        })
    }

    fn decode_level(&self, level: Level, frame: &CivFrame) -> Result<i32> {
        let raw = decode_bcd(frame.data(1, LEVEL_BYTES, &level.to_string())?, DigitOrder::BigEndian)?;
        // Four digits always fit.
        Ok(raw as i32)
    }

    fn decode_flag(&self, frame: &CivFrame, skip: usize, what: &str) -> Result<bool> {
        Ok(frame.data(skip, 1, what)?[0] != 0x00)
    }
}

impl FrameCodec for CivDialect {
    type Frame = CivFrame;

    fn read_rule(&self) -> ReadUntil {
        self.codec.read_rule()
    }

    fn max_frame(&self) -> usize {
        self.codec.max_frame()
    }

    fn decode_frame(&self, raw: &[u8]) -> Result<CivFrame> {
        self.codec.decode_frame(raw)
    }

    fn echoes_requests(&self) -> bool {
        self.codec.echoes_requests()
    }

    fn matches(&self, prefix: &[u8], frame: &CivFrame) -> bool {
        self.codec.matches(prefix, frame)
    }

    fn is_ack(&self, frame: &CivFrame) -> bool {
        self.codec.is_ack(frame)
    }
}

impl Dialect for CivDialect {
    fn encode(&self, cmd: &Command, current: Vfo) -> Result<Exchange> {
        match cmd {
            Command::GetFrequency(vfo) => {
                Ok(self.query(CMD_FREQUENCY, Some(self.selector(*vfo, current)?)))
            }
            Command::SetFrequency(vfo, freq) => {
                let sel = self.selector(*vfo, current)?;
                Ok(self.set(CMD_FREQUENCY, Some(sel), &self.frequency(*freq)?))
            }
            Command::GetMode(vfo) | Command::GetPassband(vfo) => {
                Ok(self.query(CMD_MODE, Some(self.selector(*vfo, current)?)))
            }
            Command::SetMode(vfo, mode) => {
                let sel = self.selector(*vfo, current)?;
                let (byte, data) = self.mode_byte(*mode)?;
                Ok(self.set(CMD_MODE, Some(sel), &[byte, u8::from(data), FILTER_DEFAULT]))
            }
            Command::SetPassband(..) => Err(Error::Unavailable(
                "filter widths are set through the rig's filter menu".into(),
            )),
            Command::GetVfo => Err(Error::Unavailable("the selected VFO cannot be read".into())),
            Command::SetVfo(vfo) => Ok(self.set(CMD_SELECT_VFO, Some(self.vfo_code(*vfo)?), &[])),
            Command::GetPtt => Ok(self.query(CMD_PTT, Some(SUB_PTT))),
            Command::SetPtt(on) => Ok(self.set(CMD_PTT, Some(SUB_PTT), &[u8::from(*on)])),
            Command::GetSplit => Ok(self.query(CMD_SPLIT, None)),
            Command::SetSplit(split) => {
                if split.enabled && current.other() != Some(split.tx_vfo) {
                    return Err(Error::Unavailable(format!(
                        "split can only transmit on the partner of {current}"
                    )));
                }
                Ok(self.set(CMD_SPLIT, Some(u8::from(split.enabled)), &[]))
            }
            Command::GetRit(vfo) => {
                if *vfo != current {
                    return Err(Error::Unavailable(format!("RIT is only readable on {current}")));
                }
                Ok(self.query(CMD_OFFSET, Some(SUB_RIT)))
            }
            Command::SetRit(vfo, offset) => {
                if *vfo != current {
                    return Err(Error::Unavailable(format!("RIT is only settable on {current}")));
                }
                Ok(self.set(CMD_OFFSET, Some(SUB_RIT), &encode_offset(*offset)?))
            }
            Command::GetXit(_) | Command::SetXit(..) => {
                Err(Error::Unavailable("no separate XIT offset".into()))
            }
            Command::GetLevel(level) => {
                let (cmd, sub) = self.level_address(*level)?;
                Ok(self.query(cmd, Some(sub)))
            }
            Command::SetLevel(level, value) => {
                if level.is_read_only() {
                    return Err(Error::Unavailable(format!("{level} is a meter")));
                }
                let (cmd, sub) = self.level_address(*level)?;
                let raw = u64::try_from(*value)
                    .ok()
                    .filter(|v| *v <= 255)
                    .ok_or_else(|| Error::out_of_range(level.to_string(), i64::from(*value), 0, 255))?;
                let data = encode_bcd(raw, LEVEL_BYTES, DigitOrder::BigEndian)?;
                Ok(self.set(cmd, Some(sub), &data))
            }
            Command::GetFunc(func) => {
                let (cmd, sub) = self.func_address(*func)?;
                Ok(self.query(cmd, Some(sub)))
            }
            Command::SetFunc(func, on) => {
                let (cmd, sub) = self.func_address(*func)?;
                Ok(self.set(cmd, Some(sub), &[u8::from(*on)]))
            }
            Command::GetMemory => Err(Error::Unavailable(
                "the selected memory channel cannot be read".into(),
            )),
            Command::SetMemory(n) => {
                let data = self.channel_number(*n)?;
                Ok(self.set(CMD_SELECT_MEMORY, None, &data))
            }
            Command::ReadChannel(n) => {
                let number = self.channel_number(*n)?;
                let mut prefix = vec![CMD_MISC, SUB_MEMORY_CONTENTS];
                prefix.extend(&number);
                Ok(Exchange::reply(
                    self.codec.request(CMD_MISC, Some(SUB_MEMORY_CONTENTS), &number),
                    prefix,
                ))
            }
            Command::WriteChannel(ch) => {
                let record = self.channel_record(ch)?;
                Ok(self.set(CMD_MISC, Some(SUB_MEMORY_CONTENTS), &record))
            }
            Command::Scan(op) => match op {
                ScanOp::Stop => Ok(self.set(CMD_SCAN, Some(SUB_SCAN_STOP), &[])),
                ScanOp::Up => Ok(self.set(CMD_SCAN, Some(SUB_SCAN_START), &[])),
                ScanOp::Down => Err(Error::Unavailable("no downward scan command".into())),
            },
            Command::GetMenu(_) | Command::SetMenu(..) => {
                Err(Error::Unavailable("no extended menu access".into()))
            }
        }
    }

    fn decode(&self, cmd: &Command, frame: Option<&CivFrame>) -> Result<Value> {
        if cmd.operation().is_set() {
            return Ok(Value::Ack);
        }
        let frame = frame.ok_or_else(|| Error::Garbled(format!("no reply to {cmd:?}")))?;
        match cmd {
            Command::GetFrequency(_) => {
                let bcd = frame.data(1, self.spec.freq_bytes, "frequency")?;
                Ok(Value::Frequency(decode_bcd(bcd, self.spec.digit_order)?))
            }
            Command::GetMode(_) => {
                let data = frame.data(1, 3, "mode")?;
                Ok(Value::Mode(self.mode_from_byte(data[0], data[1] != 0)?))
            }
            Command::GetPassband(_) => {
                let filter = frame.data(1, 3, "mode")?[2];
                let width = usize::from(filter)
                    .checked_sub(1)
                    .and_then(|i| self.spec.passband_widths.get(i))
                    .ok_or_else(|| Error::Garbled(format!("unknown filter {filter}")))?;
                Ok(Value::Passband(Passband::from_hz(*width)))
            }
            Command::GetPtt => Ok(Value::Bool(self.decode_flag(frame, 1, "PTT")?)),
            Command::GetSplit => Ok(Value::Bool(frame.data(0, 1, "split")?[0] == 0x01)),
            Command::GetRit(_) => Ok(Value::Offset(decode_offset(frame.data(1, 3, "RIT")?)?)),
            Command::GetLevel(level) => Ok(Value::Level(self.decode_level(*level, frame)?)),
            Command::GetFunc(func) => Ok(Value::Bool(self.decode_flag(frame, 1, &func.to_string())?)),
            Command::ReadChannel(n) => Ok(Value::Channel(self.decode_channel(*n, frame)?)),
            other => Err(Error::Garbled(format!("no decoder for {other:?}"))),
        }
    }
}
