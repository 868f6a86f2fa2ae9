//! Text dialect: abstract commands to mnemonic exchanges and back.
//!
//! [`TextDialect`] interprets a model's [`TextSpec`] table. Encoding picks
//! the field for the command (per VFO where the dialect has one), formats
//! the value to its fixed width and attaches the reply shape; decoding
//! checks the echoed mnemonic and the minimum length before slicing the
//! value out.
//!
//! # Wire examples (`;` terminator)
//!
//! | Command                       | Request          | Expected reply     |
//! |-------------------------------|------------------|--------------------|
//! | get frequency, MAIN           | `FA;`            | `FA014074000;`     |
//! | set frequency, MAIN, 14.074   | `FA014074000;`   | per set-reply rule |
//! | get mode, SUB                 | `MD1;`           | `MD12;`            |
//! | set RIT, MAIN, -120 Hz        | `CF001-0120;`    | per set-reply rule |
//! | get menu 01-01-01             | `EX010101;`      | `EX010101+005;`    |

use rigwire_core::codec::{Dialect, Exchange, FrameCodec};
use rigwire_core::command::Command;
use rigwire_core::dialect::{Field, SetReply, TextSpec};
use rigwire_core::error::{Error, Result};
use rigwire_core::hardware::{DetectedHardware, PowerClass};
use rigwire_core::transport::ReadUntil;
use rigwire_core::types::{Channel, Func, Level, Mode, Passband, ScanOp, Value, Vfo};

use crate::protocol::{
    TextCodec, TextFrame, field_value, format_signed, format_unsigned, parse_level, parse_signed,
    parse_unsigned,
};

/// Width of the frequency field inside memory channel records.
const CHANNEL_FREQ_DIGITS: usize = 9;
/// Width of the clarifier magnitude inside memory channel records.
const CHANNEL_CLAR_DIGITS: usize = 4;

/// Encoder/decoder for one text-family model.
#[derive(Debug, Clone)]
pub struct TextDialect {
    spec: TextSpec,
    codec: TextCodec,
}

impl TextDialect {
    /// Build a dialect from its table.
    pub fn new(spec: TextSpec) -> Self {
        let codec = TextCodec::new(&spec);
        TextDialect { spec, codec }
    }

    /// The dialect table.
    pub fn spec(&self) -> &TextSpec {
        &self.spec
    }

    /// The framing rules.
    pub fn codec(&self) -> &TextCodec {
        &self.codec
    }

    /// Exchange for a set, shaped by the model's set-reply rule.
    pub fn set_exchange(&self, request: Vec<u8>) -> Exchange {
        match self.spec.set_reply {
            SetReply::Silent => Exchange::silent(request),
            SetReply::Echo => Exchange::echo(request),
            SetReply::Verify(query) => Exchange::verify(request, self.codec.frame(query)),
        }
    }

    fn query(&self, field: &Field) -> Exchange {
        Exchange::reply(self.codec.frame(field.query), field.query)
    }

    fn set(&self, field: &Field, value: &str) -> Exchange {
        self.set_exchange(self.codec.frame(&format!("{}{value}", field.set)))
    }

    fn per_vfo(&self, table: &[(Vfo, Field)], vfo: Vfo, what: &str) -> Result<Field> {
        TextSpec::field_for(table, vfo)
            .ok_or_else(|| Error::Unavailable(format!("no {what} command for {vfo}")))
    }

    fn single<T>(&self, item: Option<T>, what: &str) -> Result<T> {
        item.ok_or_else(|| Error::Unavailable(format!("no {what} command")))
    }

    fn mode_code(&self, mode: Mode) -> Result<char> {
        self.spec
            .mode_codes
            .iter()
            .find(|(m, _)| *m == mode)
            .map(|(_, c)| *c)
            .ok_or_else(|| Error::Unavailable(format!("mode {mode} has no code")))
    }

    fn mode_from_code(&self, code: char) -> Result<Mode> {
        self.spec
            .mode_codes
            .iter()
            .find(|(_, c)| *c == code)
            .map(|(m, _)| *m)
            .ok_or_else(|| Error::Garbled(format!("unknown mode code {code:?}")))
    }

    fn vfo_code(&self, vfo: Vfo) -> Result<char> {
        self.spec
            .vfo_codes
            .iter()
            .find(|(v, _)| *v == vfo)
            .map(|(_, c)| *c)
            .ok_or_else(|| Error::Unavailable(format!("{vfo} cannot be selected")))
    }

    fn vfo_from_code(&self, code: char) -> Result<Vfo> {
        self.spec
            .vfo_codes
            .iter()
            .find(|(_, c)| *c == code)
            .map(|(v, _)| *v)
            .ok_or_else(|| Error::Garbled(format!("unknown VFO code {code:?}")))
    }

    fn passband_index(&self, passband: Passband) -> Result<usize> {
        let widths = self.spec.passband_widths;
        widths
            .iter()
            .position(|w| *w == passband.hz())
            .ok_or_else(|| {
                let min = widths.iter().min().copied().unwrap_or(0);
                let max = widths.iter().max().copied().unwrap_or(0);
                Error::out_of_range(
                    "passband",
                    i64::from(passband.hz()),
                    i64::from(min),
                    i64::from(max),
                )
            })
    }

    fn level_field(&self, level: Level) -> Result<Field> {
        self.spec
            .levels
            .iter()
            .find(|(l, _)| *l == level)
            .map(|(_, f)| *f)
            .ok_or_else(|| Error::Unavailable(format!("no {level} command")))
    }

    /// Field replacing the `level` entry while `power` is detected.
    fn head_level_field(&self, level: Level, power: PowerClass) -> Option<Field> {
        self.spec
            .head_levels
            .iter()
            .find(|(class, l, _)| *class == power && *l == level)
            .map(|(_, _, f)| *f)
    }

    fn set_level(&self, field: &Field, level: Level, value: i32) -> Result<Exchange> {
        let value = u64::try_from(value)
            .map_err(|_| Error::out_of_range(level.to_string(), i64::from(value), 0, i64::MAX))?;
        Ok(self.set(field, &format_unsigned(&level.to_string(), value, field.digits)?))
    }

    fn func_field(&self, func: Func) -> Result<Field> {
        self.spec
            .funcs
            .iter()
            .find(|(f, _)| *f == func)
            .map(|(_, f)| *f)
            .ok_or_else(|| Error::Unavailable(format!("no {func} command")))
    }

    fn menu_mnemonic(&self) -> Result<&'static str> {
        self.spec
            .menu
            .ok_or_else(|| Error::Unavailable("no extended menu command".into()))
    }

    fn channel_record(&self, ch: &Channel) -> Result<String> {
        let memory = self.single(self.spec.memory, "memory write")?;
        let mode = self.mode_code(ch.mode)?;
        let number = format_unsigned("memory channel", u64::from(ch.number), memory.channel_digits)?;
        let freq = format_unsigned("frequency", ch.freq_hz, CHANNEL_FREQ_DIGITS)?;
        let clar = format_signed("clarifier offset", ch.clarifier_hz, CHANNEL_CLAR_DIGITS)?;
        let rx_clar = if ch.clarifier_hz != 0 { '1' } else { '0' };
        Ok(format!(
            "{}{number}{freq}{clar}{rx_clar}0{mode}{}",
            memory.write, memory.write_trailer
        ))
    }

    fn decode_channel(&self, number: u16, frame: &TextFrame) -> Result<Channel> {
        let memory = self.single(self.spec.memory, "memory read")?;
        let body = frame.body();
        let head = memory.read.len() + memory.channel_digits;
        // freq, sign + clarifier, rx flag, tx flag, mode
        let need = head + CHANNEL_FREQ_DIGITS + 1 + CHANNEL_CLAR_DIGITS + 3;
        if body.len() < need {
            return Err(Error::Garbled(format!(
                "memory record too short: {} < {need}",
                body.len()
            )));
        }
        let echoed = parse_unsigned("memory channel", &body[memory.read.len()..head])?;
        if echoed != u64::from(number) {
            return Err(Error::Garbled(format!(
                "memory record for channel {echoed}, asked for {number}"
            )));
        }
        let mut at = head;
        let freq_hz = parse_unsigned("frequency", &body[at..at + CHANNEL_FREQ_DIGITS])?;
        at += CHANNEL_FREQ_DIGITS;
        let offset = parse_signed("clarifier", &body[at..at + 1 + CHANNEL_CLAR_DIGITS])?;
        at += 1 + CHANNEL_CLAR_DIGITS;
        let rx_on = &body[at..at + 1] == "1";
        at += 2;
        let code = body[at..].chars().next().ok_or_else(|| {
            Error::Garbled("memory record missing mode".into())
        })?;
        Ok(Channel {
            number,
            freq_hz,
            mode: self.mode_from_code(code)?,
            clarifier_hz: if rx_on { offset } else { 0 },
        })
    }
}

impl FrameCodec for TextDialect {
    type Frame = TextFrame;

    fn read_rule(&self) -> ReadUntil {
        self.codec.read_rule()
    }

    fn max_frame(&self) -> usize {
        self.codec.max_frame()
    }

    fn decode_frame(&self, raw: &[u8]) -> Result<TextFrame> {
        self.codec.decode_frame(raw)
    }

    fn matches(&self, prefix: &[u8], frame: &TextFrame) -> bool {
        self.codec.matches(prefix, frame)
    }

    fn is_ack(&self, frame: &TextFrame) -> bool {
        self.codec.is_ack(frame)
    }
}

impl Dialect for TextDialect {
    fn encode(&self, cmd: &Command, current: Vfo) -> Result<Exchange> {
        let spec = &self.spec;
        match cmd {
            Command::GetFrequency(vfo) => Ok(self.query(&self.per_vfo(spec.frequency, *vfo, "frequency")?)),
            Command::SetFrequency(vfo, freq) => {
                let field = self.per_vfo(spec.frequency, *vfo, "frequency")?;
                Ok(self.set(&field, &format_unsigned("frequency", *freq, field.digits)?))
            }
            Command::GetMode(vfo) => Ok(self.query(&self.per_vfo(spec.mode, *vfo, "mode")?)),
            Command::SetMode(vfo, mode) => {
                let field = self.per_vfo(spec.mode, *vfo, "mode")?;
                Ok(self.set(&field, &self.mode_code(*mode)?.to_string()))
            }
            Command::GetPassband(vfo) => {
                Ok(self.query(&self.per_vfo(spec.passband, *vfo, "passband")?))
            }
            Command::SetPassband(vfo, passband) => {
                let field = self.per_vfo(spec.passband, *vfo, "passband")?;
                let index = self.passband_index(*passband)?;
                Ok(self.set(&field, &format_unsigned("passband index", index as u64, field.digits)?))
            }
            Command::GetVfo => Ok(self.query(&self.single(spec.vfo_select, "VFO select")?)),
            Command::SetVfo(vfo) => {
                let field = self.single(spec.vfo_select, "VFO select")?;
                Ok(self.set(&field, &self.vfo_code(*vfo)?.to_string()))
            }
            Command::GetPtt => Ok(self.query(&self.single(spec.ptt, "PTT")?)),
            Command::SetPtt(on) => {
                let field = self.single(spec.ptt, "PTT")?;
                Ok(self.set(&field, if *on { "1" } else { "0" }))
            }
            Command::GetSplit => Ok(self.query(&self.single(spec.split, "split")?)),
            Command::SetSplit(split) => {
                let field = self.single(spec.split, "split")?;
                if split.enabled && current.other() != Some(split.tx_vfo) {
                    return Err(Error::Unavailable(format!(
                        "split can only transmit on the partner of {current}"
                    )));
                }
                Ok(self.set(&field, if split.enabled { "1" } else { "0" }))
            }
            Command::GetRit(vfo) => Ok(self.query(&self.per_vfo(spec.rit, *vfo, "RIT")?)),
            Command::SetRit(vfo, offset) => {
                let field = self.per_vfo(spec.rit, *vfo, "RIT")?;
                Ok(self.set(&field, &format_signed("RIT offset", *offset, field.digits)?))
            }
            Command::GetXit(vfo) => Ok(self.query(&self.per_vfo(spec.xit, *vfo, "XIT")?)),
            Command::SetXit(vfo, offset) => {
                let field = self.per_vfo(spec.xit, *vfo, "XIT")?;
                Ok(self.set(&field, &format_signed("XIT offset", *offset, field.digits)?))
            }
            Command::GetLevel(level) => Ok(self.query(&self.level_field(*level)?)),
            Command::SetLevel(level, value) => self.set_level(&self.level_field(*level)?, *level, *value),
            Command::GetFunc(func) => Ok(self.query(&self.func_field(*func)?)),
            Command::SetFunc(func, on) => {
                let field = self.func_field(*func)?;
                Ok(self.set(&field, if *on { "1" } else { "0" }))
            }
            Command::GetMemory => {
                let memory = self.single(spec.memory, "memory")?;
                Ok(self.query(&memory.select))
            }
            Command::SetMemory(n) => {
                let memory = self.single(spec.memory, "memory")?;
                let value = format_unsigned("memory channel", u64::from(*n), memory.select.digits)?;
                Ok(self.set(&memory.select, &value))
            }
            Command::ReadChannel(n) => {
                let memory = self.single(spec.memory, "memory read")?;
                let head = format!(
                    "{}{}",
                    memory.read,
                    format_unsigned("memory channel", u64::from(*n), memory.channel_digits)?
                );
                Ok(Exchange::reply(self.codec.frame(&head), head.into_bytes()))
            }
            Command::WriteChannel(ch) => {
                let record = self.channel_record(ch)?;
                Ok(self.set_exchange(self.codec.frame(&record)))
            }
            Command::Scan(op) => {
                let field = self.single(spec.scan, "scan")?;
                let code = match op {
                    ScanOp::Stop => "0",
                    ScanOp::Up => "1",
                    ScanOp::Down => "2",
                };
                Ok(self.set(&field, code))
            }
            Command::GetMenu(token) => {
                let head = format!("{}{}", self.menu_mnemonic()?, token.address());
                Ok(Exchange::reply(self.codec.frame(&head), head.into_bytes()))
            }
            Command::SetMenu(token, value) => {
                let body = format!("{}{}{value}", self.menu_mnemonic()?, token.address());
                Ok(self.set_exchange(self.codec.frame(&body)))
            }
        }
    }

    fn encode_for(&self, cmd: &Command, current: Vfo, hw: &DetectedHardware) -> Result<Exchange> {
        if let Command::SetLevel(level, value) = cmd {
            if let Some(field) = self.head_level_field(*level, hw.power) {
                return self.set_level(&field, *level, *value);
            }
        }
        self.encode(cmd, current)
    }

    fn decode(&self, cmd: &Command, frame: Option<&TextFrame>) -> Result<Value> {
        if cmd.operation().is_set() {
            return Ok(Value::Ack);
        }
        let frame = frame.ok_or_else(|| Error::Garbled(format!("no reply to {cmd:?}")))?;
        let spec = &self.spec;
        match cmd {
            Command::GetFrequency(vfo) => {
                let field = self.per_vfo(spec.frequency, *vfo, "frequency")?;
                let raw = field_value(frame, &field, false)?;
                Ok(Value::Frequency(parse_unsigned("frequency", raw)?))
            }
            Command::GetMode(vfo) => {
                let field = self.per_vfo(spec.mode, *vfo, "mode")?;
                let raw = field_value(frame, &field, false)?;
                let code = raw.chars().next().ok_or_else(|| Error::Garbled("empty mode field".into()))?;
                Ok(Value::Mode(self.mode_from_code(code)?))
            }
            Command::GetPassband(vfo) => {
                let field = self.per_vfo(spec.passband, *vfo, "passband")?;
                let index = parse_unsigned("passband index", field_value(frame, &field, false)?)?;
                let width = usize::try_from(index)
                    .ok()
                    .and_then(|i| spec.passband_widths.get(i))
                    .ok_or_else(|| Error::Garbled(format!("unknown passband index {index}")))?;
                Ok(Value::Passband(Passband::from_hz(*width)))
            }
            Command::GetVfo => {
                let field = self.single(spec.vfo_select, "VFO select")?;
                let raw = field_value(frame, &field, false)?;
                let code = raw.chars().next().ok_or_else(|| Error::Garbled("empty VFO field".into()))?;
                Ok(Value::Vfo(self.vfo_from_code(code)?))
            }
            Command::GetPtt => {
                let field = self.single(spec.ptt, "PTT")?;
                Ok(Value::Bool(field_value(frame, &field, false)? != "0"))
            }
            Command::GetSplit => {
                let field = self.single(spec.split, "split")?;
                Ok(Value::Bool(field_value(frame, &field, false)? != "0"))
            }
            Command::GetRit(vfo) => {
                let field = self.per_vfo(spec.rit, *vfo, "RIT")?;
                Ok(Value::Offset(parse_signed("RIT", field_value(frame, &field, true)?)?))
            }
            Command::GetXit(vfo) => {
                let field = self.per_vfo(spec.xit, *vfo, "XIT")?;
                Ok(Value::Offset(parse_signed("XIT", field_value(frame, &field, true)?)?))
            }
            Command::GetLevel(level) => {
                let field = self.level_field(*level)?;
                Ok(Value::Level(parse_level(&level.to_string(), field_value(frame, &field, false)?)?))
            }
            Command::GetFunc(func) => {
                let field = self.func_field(*func)?;
                Ok(Value::Bool(field_value(frame, &field, false)? != "0"))
            }
            Command::GetMemory => {
                let memory = self.single(spec.memory, "memory")?;
                let raw = parse_unsigned("memory channel", field_value(frame, &memory.select, false)?)?;
                let number = u16::try_from(raw)
                    .map_err(|_| Error::Garbled(format!("memory channel {raw} overflows")))?;
                Ok(Value::MemoryNumber(number))
            }
            Command::ReadChannel(n) => Ok(Value::Channel(self.decode_channel(*n, frame)?)),
            Command::GetMenu(token) => {
                let head = format!("{}{}", self.menu_mnemonic()?, token.address());
                let value = frame.body().strip_prefix(head.as_str()).ok_or_else(|| {
                    Error::Garbled(format!("expected {head} reply, got {:?}", frame.body()))
                })?;
                Ok(Value::Menu(value.to_string()))
            }
            other => Err(Error::Garbled(format!("no decoder for {other:?}"))),
        }
    }
}
