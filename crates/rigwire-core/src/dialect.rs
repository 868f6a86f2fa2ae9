//! Per-model wire dialect data for the two framing families.
//!
//! A dialect is pure data: mnemonics, field widths, code tables and
//! addresses. The `rigwire-text` and `rigwire-civ` crates turn a
//! [`TextSpec`] or [`BinarySpec`] into encoders and decoders, so adding a
//! model means adding a table, not code.

use crate::hardware::PowerClass;
use crate::types::{Func, Level, Mode, Vfo};

/// Which framing family a model speaks, with its dialect data.
#[derive(Debug, Clone)]
pub enum Protocol {
    /// Mnemonic + fixed-width decimal fields + terminator.
    Text(TextSpec),
    /// Start marker + addresses + command + packed decimal + end marker.
    Binary(BinarySpec),
}

/// What a text-family device sends back after a set command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetReply {
    /// Nothing on success; only a rejection marker can arrive.
    Silent,
    /// The command echoed back verbatim.
    Echo,
    /// Nothing, so follow with this query body (which always answers) to
    /// learn whether the set was rejected. The terminator is appended.
    Verify(&'static str),
}

/// One text command family: how to query it, how to set it, and where the
/// value sits in the reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// Query mnemonic; replies start with it.
    pub query: &'static str,
    /// Set mnemonic, followed directly by the value.
    pub set: &'static str,
    /// Characters between the echoed mnemonic and the value in a reply.
    pub reply_skip: usize,
    /// Value width in characters (excluding any sign).
    pub digits: usize,
}

impl Field {
    /// Same mnemonic for query and set, value right after it.
    pub const fn new(mnemonic: &'static str, digits: usize) -> Self {
        Field {
            query: mnemonic,
            set: mnemonic,
            reply_skip: 0,
            digits,
        }
    }

    /// Use a different mnemonic for sets.
    pub const fn set_as(mut self, set: &'static str) -> Self {
        self.set = set;
        self
    }

    /// Skip `n` characters after the mnemonic when reading a reply.
    pub const fn skip(mut self, n: usize) -> Self {
        self.reply_skip = n;
        self
    }

    /// Shortest reply that still holds the whole value (mnemonic included,
    /// terminator excluded).
    pub const fn min_reply_len(&self, signed: bool) -> usize {
        self.query.len() + self.reply_skip + self.digits + if signed { 1 } else { 0 }
    }
}

/// Memory channel commands of a text dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryLayout {
    /// Select / query the current channel.
    pub select: Field,
    /// Read a channel's contents: `<read><channel>` answered by
    /// `<read><channel><freq><sign><clar:4><rx><tx><mode>...`.
    pub read: &'static str,
    /// Write a channel: same layout as the read reply.
    pub write: &'static str,
    /// Channel number width in read/write commands.
    pub channel_digits: usize,
    /// Fixed characters appended after the mode code on writes.
    pub write_trailer: &'static str,
}

/// Dialect data for the delimiter-terminated ASCII family.
#[derive(Debug, Clone)]
pub struct TextSpec {
    /// Byte appended to every command.
    pub terminator: u8,
    /// Any of these bytes ends a response.
    pub stop_set: &'static [u8],
    /// A response consisting of only this character means "rejected".
    pub reject_marker: u8,
    /// Longest response accepted before the read is declared garbled.
    pub max_frame: usize,
    /// Reply shape after sets.
    pub set_reply: SetReply,
    /// Frequency field per VFO.
    pub frequency: &'static [(Vfo, Field)],
    /// Mode field per VFO.
    pub mode: &'static [(Vfo, Field)],
    /// Mode to single-character code.
    pub mode_codes: &'static [(Mode, char)],
    /// Passband index field per VFO.
    pub passband: &'static [(Vfo, Field)],
    /// Passband index to width in hertz.
    pub passband_widths: &'static [u32],
    /// VFO selection field, value is a [`vfo_codes`](Self::vfo_codes) entry.
    pub vfo_select: Option<Field>,
    /// VFO to single-character code.
    pub vfo_codes: &'static [(Vfo, char)],
    /// Transmit field (`0`/`1`).
    pub ptt: Option<Field>,
    /// Split field (`0`/`1`); transmit VFO is the partner of the current one.
    pub split: Option<Field>,
    /// Receive clarifier offset (signed) per VFO.
    pub rit: &'static [(Vfo, Field)],
    /// Transmit clarifier offset (signed) per VFO.
    pub xit: &'static [(Vfo, Field)],
    /// Level fields.
    pub levels: &'static [(Level, Field)],
    /// Level fields used instead of a [`levels`](Self::levels) entry while
    /// detection reports the given power class.
    pub head_levels: &'static [(PowerClass, Level, Field)],
    /// Function toggle fields (`0`/`1`).
    pub funcs: &'static [(Func, Field)],
    /// Memory channel commands.
    pub memory: Option<MemoryLayout>,
    /// Scan command; value is `0` stop, `1` up, `2` down.
    pub scan: Option<Field>,
    /// Extended menu mnemonic.
    pub menu: Option<&'static str>,
}

impl TextSpec {
    /// Field for `vfo` in a per-VFO table.
    pub fn field_for(table: &[(Vfo, Field)], vfo: Vfo) -> Option<Field> {
        table.iter().find(|(v, _)| *v == vfo).map(|(_, f)| *f)
    }
}

/// Digit order of packed-decimal numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitOrder {
    /// Least significant byte first (CI-V frequencies).
    LittleEndian,
    /// Most significant byte first.
    BigEndian,
}

/// Dialect data for the marker-delimited binary family.
#[derive(Debug, Clone)]
pub struct BinarySpec {
    /// Transceiver bus address.
    pub address: u8,
    /// Controller (our) bus address.
    pub controller: u8,
    /// Digit order of frequency fields.
    pub digit_order: DigitOrder,
    /// Packed-decimal bytes in a frequency field.
    pub freq_bytes: usize,
    /// Whether the bus echoes every request back to the sender.
    pub echoes_requests: bool,
    /// Mode to mode byte.
    pub modes: &'static [(Mode, u8)],
    /// VFO to select sub-command.
    pub vfo_codes: &'static [(Vfo, u8)],
    /// Level to (command, sub-command); values are 0-255 packed as two bytes.
    pub levels: &'static [(Level, u8, u8)],
    /// Function to (command, sub-command).
    pub funcs: &'static [(Func, u8, u8)],
    /// IF filter width table, index to hertz.
    pub passband_widths: &'static [u32],
    /// Longest frame accepted.
    pub max_frame: usize,
}
