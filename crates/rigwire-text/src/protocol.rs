//! Delimiter-terminated ASCII framing.
//!
//! Every command and response is a run of printable ASCII ended by one byte
//! from a small stop set (almost always `;`). A response that consists of
//! nothing but the reject marker (`?;`) means the device refused the last
//! command. [`TextCodec`] validates raw responses into [`TextFrame`]s; the
//! helpers here extract fixed-width fields from a frame body with the length
//! check done before any slicing.

use rigwire_core::codec::FrameCodec;
use rigwire_core::dialect::{Field, TextSpec};
use rigwire_core::error::{Error, Result};
use rigwire_core::transport::ReadUntil;

/// The semicolon that terminates most text-family frames.
pub const TERMINATOR: u8 = b';';

/// The reserved character a device sends in place of a reply when it
/// refuses a command.
pub const REJECT_MARKER: u8 = b'?';

/// A validated response: the frame body without its terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFrame {
    body: String,
}

impl TextFrame {
    /// Wrap a body that is already known to be valid.
    pub fn new(body: impl Into<String>) -> Self {
        TextFrame { body: body.into() }
    }

    /// The frame body, terminator excluded.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Whether the body starts with `mnemonic`.
    pub fn starts_with(&self, mnemonic: &str) -> bool {
        self.body.starts_with(mnemonic)
    }
}

/// Framing rules of one text dialect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextCodec {
    terminator: u8,
    stop_set: Vec<u8>,
    reject_marker: u8,
    max_frame: usize,
}

impl TextCodec {
    /// Framing taken from a dialect table.
    pub fn new(spec: &TextSpec) -> Self {
        TextCodec {
            terminator: spec.terminator,
            stop_set: spec.stop_set.to_vec(),
            reject_marker: spec.reject_marker,
            max_frame: spec.max_frame,
        }
    }

    /// Plain `;`-terminated framing with `?;` rejections.
    pub fn semicolon(max_frame: usize) -> Self {
        TextCodec {
            terminator: TERMINATOR,
            stop_set: vec![TERMINATOR],
            reject_marker: REJECT_MARKER,
            max_frame,
        }
    }

    /// The byte appended to every command.
    pub fn terminator(&self) -> u8 {
        self.terminator
    }

    /// Append the terminator to a command body.
    pub fn frame(&self, body: &str) -> Vec<u8> {
        let mut out = Vec::with_capacity(body.len() + 1);
        out.extend_from_slice(body.as_bytes());
        out.push(self.terminator);
        out
    }
}

impl FrameCodec for TextCodec {
    type Frame = TextFrame;

    fn read_rule(&self) -> ReadUntil {
        ReadUntil::Stop(self.stop_set.clone())
    }

    fn max_frame(&self) -> usize {
        self.max_frame
    }

    fn decode_frame(&self, raw: &[u8]) -> Result<TextFrame> {
        let Some((&last, body)) = raw.split_last() else {
            return Err(Error::Garbled("empty response".into()));
        };
        if !self.stop_set.contains(&last) {
            return Err(Error::Garbled(format!(
                "response not terminated: {:?}",
                String::from_utf8_lossy(raw)
            )));
        }
        if raw.len() > self.max_frame {
            return Err(Error::Garbled(format!(
                "response of {} bytes exceeds {}",
                raw.len(),
                self.max_frame
            )));
        }
        // Leftover line-ending bytes from CR+LF framing belong to the
        // previous frame.
        let body = trim_leading_line_ends(body);
        if body == [self.reject_marker] {
            return Err(Error::Rejected(String::from_utf8_lossy(raw).into_owned()));
        }
        if body.is_empty() {
            return Err(Error::Garbled("empty frame body".into()));
        }
        if !body.iter().all(|b| b.is_ascii() && !b.is_ascii_control()) {
            return Err(Error::Garbled(format!(
                "non-printable bytes in response {body:02X?}"
            )));
        }
        let body = std::str::from_utf8(body)
            .map_err(|e| Error::Garbled(format!("invalid text response: {e}")))?;
        Ok(TextFrame::new(body))
    }

    fn matches(&self, prefix: &[u8], frame: &TextFrame) -> bool {
        frame.body.as_bytes().starts_with(prefix)
    }

    fn is_ack(&self, _frame: &TextFrame) -> bool {
        false
    }
}

fn trim_leading_line_ends(body: &[u8]) -> &[u8] {
    let start = body
        .iter()
        .position(|b| *b != b'\r' && *b != b'\n')
        .unwrap_or(body.len());
    &body[start..]
}

// ---------------------------------------------------------------
// Field extraction
// ---------------------------------------------------------------

/// Slice the value of `field` out of a reply body.
///
/// Checks the mnemonic echo and the minimum length first; the returned
/// slice is exactly `digits` characters, plus the sign when `signed`.
pub fn field_value<'a>(frame: &'a TextFrame, field: &Field, signed: bool) -> Result<&'a str> {
    let body = frame.body();
    if !body.starts_with(field.query) {
        return Err(Error::Garbled(format!(
            "expected {} reply, got {body:?}",
            field.query
        )));
    }
    let need = field.min_reply_len(signed);
    if body.len() < need {
        return Err(Error::Garbled(format!(
            "{} reply too short: {} < {need}",
            field.query,
            body.len()
        )));
    }
    let start = field.query.len() + field.reply_skip;
    let width = field.digits + usize::from(signed);
    body.get(start..start + width)
        .ok_or_else(|| Error::Garbled(format!("{} reply misaligned: {body:?}", field.query)))
}

/// Parse an all-digit unsigned field.
pub fn parse_unsigned(what: &str, digits: &str) -> Result<u64> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::Garbled(format!("{what}: non-numeric field {digits:?}")));
    }
    digits
        .parse()
        .map_err(|_| Error::Garbled(format!("{what}: field {digits:?} overflows")))
}

/// Parse a level reading. Sub-unit readings come with a decimal point
/// (`0.5`) and round to the nearest unit.
pub fn parse_level(what: &str, field: &str) -> Result<i32> {
    let Some((whole, fraction)) = field.split_once('.') else {
        let raw = parse_unsigned(what, field)?;
        return i32::try_from(raw)
            .map_err(|_| Error::Garbled(format!("{what}: reading {raw} overflows")));
    };
    let digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if whole.is_empty() || fraction.is_empty() || !digits(whole) || !digits(fraction) {
        return Err(Error::Garbled(format!("{what}: non-numeric field {field:?}")));
    }
    let value: f64 = field
        .parse()
        .map_err(|_| Error::Garbled(format!("{what}: non-numeric field {field:?}")))?;
    Ok(value.round() as i32)
}

/// Parse a `+`/`-` prefixed field.
pub fn parse_signed(what: &str, field: &str) -> Result<i32> {
    let (sign, body) = match field.as_bytes().first() {
        Some(b'+') => (1, &field[1..]),
        Some(b'-') => (-1, &field[1..]),
        _ => {
            return Err(Error::Garbled(format!(
                "{what}: expected explicit sign, got {field:?}"
            )));
        }
    };
    let magnitude = parse_unsigned(what, body)?;
    let magnitude = i32::try_from(magnitude)
        .map_err(|_| Error::Garbled(format!("{what}: field {field:?} overflows")))?;
    Ok(sign * magnitude)
}

/// Render `value` zero-padded to `digits`, or fail with `OutOfRange` when it
/// does not fit.
pub fn format_unsigned(what: &str, value: u64, digits: usize) -> Result<String> {
    let max = max_for(digits);
    if value > max {
        return Err(Error::out_of_range(
            what,
            i64::try_from(value).unwrap_or(i64::MAX),
            0,
            i64::try_from(max).unwrap_or(i64::MAX),
        ));
    }
    Ok(format!("{value:0digits$}"))
}

/// Render `value` with an explicit sign and a zero-padded magnitude.
pub fn format_signed(what: &str, value: i32, digits: usize) -> Result<String> {
    let max = max_for(digits);
    if u64::from(value.unsigned_abs()) > max {
        let max = i64::try_from(max).unwrap_or(i64::MAX);
        return Err(Error::out_of_range(what, i64::from(value), -max, max));
    }
    let sign = if value < 0 { '-' } else { '+' };
    Ok(format!("{sign}{:0digits$}", value.unsigned_abs()))
}

fn max_for(digits: usize) -> u64 {
    u32::try_from(digits)
        .ok()
        .and_then(|d| 10u64.checked_pow(d))
        .map_or(u64::MAX, |p| p - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codec() -> TextCodec {
        TextCodec::semicolon(64)
    }

    // ---------------------------------------------------------------
    // decode_frame
    // ---------------------------------------------------------------

    #[test]
    fn level_readings_accept_a_decimal_point() {
        assert_eq!(parse_level("RFPOWER", "010").unwrap(), 10);
        assert_eq!(parse_level("RFPOWER", "0.5").unwrap(), 1);
        assert_eq!(parse_level("RFPOWER", "5.1").unwrap(), 5);
        for bad in ["0.", ".50", "1.2.", "a.5", ""] {
            assert!(matches!(parse_level("RFPOWER", bad), Err(Error::Garbled(_))), "{bad:?}");
        }
    }

    #[test]
    fn decode_plain_reply() {
        let frame = codec().decode_frame(b"FA014074000;").unwrap();
        assert_eq!(frame.body(), "FA014074000");
    }

    #[test]
    fn decode_reject_marker() {
        let err = codec().decode_frame(b"?;").unwrap_err();
        assert!(matches!(err, Error::Rejected(_)));
    }

    #[test]
    fn decode_empty_is_garbled() {
        assert!(matches!(codec().decode_frame(b""), Err(Error::Garbled(_))));
        assert!(matches!(codec().decode_frame(b";"), Err(Error::Garbled(_))));
    }

    #[test]
    fn decode_unterminated_is_garbled() {
        assert!(matches!(
            codec().decode_frame(b"FA0140"),
            Err(Error::Garbled(_))
        ));
    }

    #[test]
    fn decode_oversized_is_garbled() {
        let codec = TextCodec::semicolon(8);
        assert!(matches!(
            codec.decode_frame(b"FA014074000;"),
            Err(Error::Garbled(_))
        ));
    }

    #[test]
    fn decode_binary_noise_is_garbled() {
        assert!(matches!(
            codec().decode_frame(&[b'F', 0x00, 0xFE, b';']),
            Err(Error::Garbled(_))
        ));
    }

    #[test]
    fn decode_skips_leftover_line_ends() {
        let codec = TextCodec {
            terminator: b';',
            stop_set: vec![b';', b'\n'],
            reject_marker: b'?',
            max_frame: 64,
        };
        assert_eq!(codec.decode_frame(b"\r\nID0840;").unwrap().body(), "ID0840");
    }

    #[test]
    fn matches_by_prefix() {
        let c = codec();
        let frame = c.decode_frame(b"MD02;").unwrap();
        assert!(c.matches(b"MD0", &frame));
        assert!(!c.matches(b"MD1", &frame));
        assert!(!c.is_ack(&frame));
    }

    // ---------------------------------------------------------------
    // Fields
    // ---------------------------------------------------------------

    #[test]
    fn field_value_extracts_fixed_width() {
        let field = Field::new("FA", 9);
        let frame = TextFrame::new("FA014074000");
        assert_eq!(field_value(&frame, &field, false).unwrap(), "014074000");
    }

    #[test]
    fn field_value_honours_skip() {
        let field = Field::new("SH0", 2).skip(1);
        let frame = TextFrame::new("SH0018");
        assert_eq!(field_value(&frame, &field, false).unwrap(), "18");
    }

    #[test]
    fn field_value_short_reply_is_garbled() {
        let field = Field::new("FA", 9);
        let frame = TextFrame::new("FA0140");
        assert!(matches!(
            field_value(&frame, &field, false),
            Err(Error::Garbled(_))
        ));
    }

    #[test]
    fn field_value_wrong_mnemonic_is_garbled() {
        let field = Field::new("FA", 9);
        let frame = TextFrame::new("FB014074000");
        assert!(matches!(
            field_value(&frame, &field, false),
            Err(Error::Garbled(_))
        ));
    }

    #[test]
    fn signed_field_includes_sign() {
        let field = Field::new("CF001", 4);
        let frame = TextFrame::new("CF001-0120");
        let raw = field_value(&frame, &field, true).unwrap();
        assert_eq!(raw, "-0120");
        assert_eq!(parse_signed("rit", raw).unwrap(), -120);
    }

    #[test]
    fn parse_rejects_non_digits() {
        assert!(matches!(parse_unsigned("f", "01a"), Err(Error::Garbled(_))));
        assert!(matches!(parse_unsigned("f", ""), Err(Error::Garbled(_))));
        assert!(matches!(parse_signed("o", "0120"), Err(Error::Garbled(_))));
        assert!(matches!(parse_signed("o", "+"), Err(Error::Garbled(_))));
    }

    #[test]
    fn format_pads_and_bounds() {
        assert_eq!(format_unsigned("f", 14_074_000, 9).unwrap(), "014074000");
        assert!(matches!(
            format_unsigned("f", 1_000_000_000, 9),
            Err(Error::OutOfRange { max: 999_999_999, .. })
        ));
        assert_eq!(format_signed("o", -120, 4).unwrap(), "-0120");
        assert_eq!(format_signed("o", 0, 4).unwrap(), "+0000");
        assert!(matches!(
            format_signed("o", 10_000, 4),
            Err(Error::OutOfRange { .. })
        ));
    }
}
