//! CI-V frame encoder/decoder and packed-decimal helpers.
//!
//! The CI-V protocol uses binary frames on a half-duplex bus. This module
//! handles byte-level framing, validation of received frames, and the
//! packed-decimal (BCD) numbers every numeric field uses.
//!
//! # Frame format
//!
//! ```text
//! 0xFE 0xFE <dst> <src> <cmd> [<sub>] [<data>...] 0xFD
//! ```
//!
//! - Preamble: two `0xFE` bytes
//! - `dst`: target address (e.g. `0x94` for the IC-7300)
//! - `src`: controller address (typically `0xE0`)
//! - `cmd`: command byte; `0xFB` acknowledges, `0xFA` refuses
//! - Terminator: `0xFD`

use bytes::{BufMut, BytesMut};
use rigwire_core::codec::FrameCodec;
use rigwire_core::dialect::{BinarySpec, DigitOrder};
use rigwire_core::error::{Error, Result};
use rigwire_core::transport::ReadUntil;
use tracing::trace;

/// Preamble byte repeated twice at the start of every frame.
pub const PREAMBLE: u8 = 0xFE;

/// Frame terminator byte.
pub const TERMINATOR: u8 = 0xFD;

/// Standard PC controller address.
pub const CONTROLLER_ADDR: u8 = 0xE0;

/// Positive acknowledgement command byte.
pub const ACK: u8 = 0xFB;

/// Negative acknowledgement command byte.
pub const NAK: u8 = 0xFA;

/// Collision indicator on the bus.
///
/// When two devices transmit at once the echoed byte may read as `0xFC`.
pub const COLLISION: u8 = 0xFC;

/// Preamble, two addresses, command, terminator.
pub const MIN_FRAME: usize = 6;

/// A validated frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CivFrame {
    /// Destination address.
    pub dst_addr: u8,
    /// Source address.
    pub src_addr: u8,
    /// Command byte.
    pub cmd: u8,
    /// Everything between the command byte and the terminator. Whether the
    /// first byte is a sub-command depends on the command.
    pub payload: Vec<u8>,
}

impl CivFrame {
    /// Returns `true` for a positive acknowledgement.
    pub fn is_ack(&self) -> bool {
        self.cmd == ACK && self.payload.is_empty()
    }

    /// Returns `true` for a negative acknowledgement.
    pub fn is_nak(&self) -> bool {
        self.cmd == NAK
    }

    /// The first payload byte, for commands that carry a sub-command.
    pub fn sub_cmd(&self) -> Option<u8> {
        self.payload.first().copied()
    }

    /// Payload after the first `skip` bytes, required to be exactly `len`
    /// bytes long.
    pub fn data(&self, skip: usize, len: usize, what: &str) -> Result<&[u8]> {
        let rest = self.payload.get(skip..).unwrap_or(&[]);
        if rest.len() != len {
            return Err(Error::Garbled(format!(
                "expected {len} bytes of {what}, got {}",
                rest.len()
            )));
        }
        Ok(rest)
    }
}

/// Encode a frame into raw bytes ready for transmission.
///
/// # Example
///
/// ```
/// use rigwire_civ::civ::{encode_frame, CONTROLLER_ADDR};
///
/// // Read-frequency command to IC-7300 (addr 0x94)
/// let bytes = encode_frame(0x94, CONTROLLER_ADDR, 0x03, None, &[]);
/// assert_eq!(bytes, vec![0xFE, 0xFE, 0x94, 0xE0, 0x03, 0xFD]);
/// ```
pub fn encode_frame(
    dst_addr: u8,
    src_addr: u8,
    cmd: u8,
    sub_cmd: Option<u8>,
    data: &[u8],
) -> Vec<u8> {
    let capacity = MIN_FRAME + usize::from(sub_cmd.is_some()) + data.len();
    let mut buf = BytesMut::with_capacity(capacity);
    buf.put_u8(PREAMBLE);
    buf.put_u8(PREAMBLE);
    buf.put_u8(dst_addr);
    buf.put_u8(src_addr);
    buf.put_u8(cmd);
    if let Some(sub) = sub_cmd {
        buf.put_u8(sub);
    }
    buf.put_slice(data);
    buf.put_u8(TERMINATOR);
    buf.to_vec()
}

/// Framing rules for one transceiver on the bus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CivCodec {
    address: u8,
    controller: u8,
    echoes_requests: bool,
    max_frame: usize,
}

impl CivCodec {
    /// Framing for the transceiver a [`BinarySpec`] describes.
    pub fn new(spec: &BinarySpec) -> Self {
        CivCodec {
            address: spec.address,
            controller: spec.controller,
            echoes_requests: spec.echoes_requests,
            max_frame: spec.max_frame,
        }
    }

    /// Transceiver address.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Controller address.
    pub fn controller(&self) -> u8 {
        self.controller
    }

    /// A request from the controller to the transceiver.
    pub fn request(&self, cmd: u8, sub_cmd: Option<u8>, data: &[u8]) -> Vec<u8> {
        let frame = encode_frame(self.address, self.controller, cmd, sub_cmd, data);
        trace!(addr = self.address, bytes = ?frame, "encoded CI-V request");
        frame
    }
}

impl FrameCodec for CivCodec {
    type Frame = CivFrame;

    fn read_rule(&self) -> ReadUntil {
        ReadUntil::Stop(vec![TERMINATOR])
    }

    fn max_frame(&self) -> usize {
        self.max_frame
    }

    /// Markers first, then length, collision and addresses, and only then
    /// the command byte.
    fn decode_frame(&self, raw: &[u8]) -> Result<CivFrame> {
        if raw.len() < MIN_FRAME {
            return Err(Error::Garbled(format!(
                "frame of {} bytes is shorter than {MIN_FRAME}: {raw:02X?}",
                raw.len()
            )));
        }
        if raw[0] != PREAMBLE || raw[1] != PREAMBLE {
            return Err(Error::Garbled(format!("bad start marker: {raw:02X?}")));
        }
        if raw[raw.len() - 1] != TERMINATOR {
            return Err(Error::Garbled(format!("missing end marker: {raw:02X?}")));
        }
        if raw.len() > self.max_frame {
            return Err(Error::Garbled(format!(
                "frame of {} bytes exceeds {}",
                raw.len(),
                self.max_frame
            )));
        }
        let body = &raw[2..raw.len() - 1];
        if body.contains(&COLLISION) {
            return Err(Error::Garbled("bus collision".into()));
        }
        if body.contains(&PREAMBLE) || body.contains(&TERMINATOR) {
            return Err(Error::Garbled(format!("marker inside frame body: {raw:02X?}")));
        }
        let (dst_addr, src_addr, cmd) = (body[0], body[1], body[2]);
        if dst_addr != self.controller || src_addr != self.address {
            return Err(Error::Garbled(format!(
                "frame from {src_addr:02X} to {dst_addr:02X}, expected {:02X} to {:02X}",
                self.address, self.controller
            )));
        }
        let frame = CivFrame {
            dst_addr,
            src_addr,
            cmd,
            payload: body[3..].to_vec(),
        };
        if frame.is_nak() {
            trace!(bytes = ?raw, "CI-V NAK");
            return Err(Error::Rejected(format!("{raw:02X?}")));
        }
        trace!(cmd = frame.cmd, payload = ?frame.payload, "decoded CI-V frame");
        Ok(frame)
    }

    fn echoes_requests(&self) -> bool {
        self.echoes_requests
    }

    /// `prefix` is the command byte, optionally followed by the
    /// sub-command the reply must carry.
    fn matches(&self, prefix: &[u8], frame: &CivFrame) -> bool {
        match prefix.split_first() {
            Some((cmd, rest)) => *cmd == frame.cmd && frame.payload.starts_with(rest),
            None => false,
        }
    }

    fn is_ack(&self, frame: &CivFrame) -> bool {
        frame.is_ack()
    }
}

// ---------------------------------------------------------------
// Packed decimal
// ---------------------------------------------------------------

/// Encode `value` as `bytes` bytes of packed decimal, two digits per byte.
///
/// Fails with [`Error::OutOfRange`] when `value` needs more digits than
/// fit.
///
/// # Example
///
/// ```
/// use rigwire_civ::civ::encode_bcd;
/// use rigwire_core::DigitOrder;
///
/// // 14.250 MHz, least significant byte first
/// let bcd = encode_bcd(14_250_000, 5, DigitOrder::LittleEndian).unwrap();
/// assert_eq!(bcd, [0x00, 0x00, 0x25, 0x14, 0x00]);
///
/// // Level 128, most significant byte first
/// let bcd = encode_bcd(128, 2, DigitOrder::BigEndian).unwrap();
/// assert_eq!(bcd, [0x01, 0x28]);
/// ```
pub fn encode_bcd(value: u64, bytes: usize, order: DigitOrder) -> Result<Vec<u8>> {
    let max = u32::try_from(bytes * 2)
        .ok()
        .and_then(|d| 10u64.checked_pow(d))
        .map_or(u64::MAX, |p| p - 1);
    if value > max {
        return Err(Error::out_of_range(
            "packed decimal",
            i64::try_from(value).unwrap_or(i64::MAX),
            0,
            i64::try_from(max).unwrap_or(i64::MAX),
        ));
    }
    let mut out = Vec::with_capacity(bytes);
    let mut rest = value;
    for _ in 0..bytes {
        let lo = (rest % 10) as u8;
        rest /= 10;
        let hi = (rest % 10) as u8;
        rest /= 10;
        out.push((hi << 4) | lo);
    }
    if order == DigitOrder::BigEndian {
        out.reverse();
    }
    Ok(out)
}

/// Decode packed decimal. Inverse of [`encode_bcd`].
pub fn decode_bcd(bcd: &[u8], order: DigitOrder) -> Result<u64> {
    validate_bcd(bcd)?;
    let digits = |byte: u8| u64::from(byte >> 4) * 10 + u64::from(byte & 0x0F);
    let fold = |acc: u64, byte: &u8| acc.saturating_mul(100).saturating_add(digits(*byte));
    Ok(match order {
        DigitOrder::BigEndian => bcd.iter().fold(0, fold),
        DigitOrder::LittleEndian => bcd.iter().rev().fold(0, fold),
    })
}

/// Check that every nibble is a decimal digit.
pub fn validate_bcd(bcd: &[u8]) -> Result<()> {
    for (i, &byte) in bcd.iter().enumerate() {
        if byte & 0x0F > 9 || byte >> 4 > 9 {
            return Err(Error::Garbled(format!(
                "invalid BCD digit at byte {i}: 0x{byte:02X}"
            )));
        }
    }
    Ok(())
}

/// Encode a clarifier offset: two bytes of least-significant-first packed
/// decimal magnitude, then a sign byte (`0x01` negative).
///
/// Example: +150 Hz = `[0x50, 0x01, 0x00]`, -300 Hz = `[0x00, 0x03, 0x01]`
pub fn encode_offset(offset_hz: i32) -> Result<Vec<u8>> {
    let mut out = encode_bcd(u64::from(offset_hz.unsigned_abs()), 2, DigitOrder::LittleEndian)
        .map_err(|_| Error::out_of_range("clarifier offset", i64::from(offset_hz), -9999, 9999))?;
    out.push(u8::from(offset_hz < 0));
    Ok(out)
}

/// Decode a clarifier offset. Inverse of [`encode_offset`].
pub fn decode_offset(data: &[u8]) -> Result<i32> {
    let [lo, hi, sign] = data else {
        return Err(Error::Garbled(format!(
            "expected 3 bytes of clarifier offset, got {}",
            data.len()
        )));
    };
    let magnitude = decode_bcd(&[*lo, *hi], DigitOrder::LittleEndian)?;
    // At most four digits.
    let magnitude = magnitude as i32;
    match sign {
        0x00 => Ok(magnitude),
        0x01 => Ok(-magnitude),
        other => Err(Error::Garbled(format!("bad offset sign byte 0x{other:02X}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codec() -> CivCodec {
        CivCodec {
            address: 0x94,
            controller: CONTROLLER_ADDR,
            echoes_requests: true,
            max_frame: 32,
        }
    }

    // ---------------------------------------------------------------
    // Packed decimal
    // ---------------------------------------------------------------

    #[test]
    fn bcd_14_250_mhz_little_endian() {
        let bcd = encode_bcd(14_250_000, 5, DigitOrder::LittleEndian).unwrap();
        assert_eq!(bcd, [0x00, 0x00, 0x25, 0x14, 0x00]);
        assert_eq!(decode_bcd(&bcd, DigitOrder::LittleEndian).unwrap(), 14_250_000);
    }

    #[test]
    fn bcd_big_endian() {
        let bcd = encode_bcd(14_250_000, 5, DigitOrder::BigEndian).unwrap();
        assert_eq!(bcd, [0x00, 0x14, 0x25, 0x00, 0x00]);
        assert_eq!(decode_bcd(&bcd, DigitOrder::BigEndian).unwrap(), 14_250_000);
    }

    #[test]
    fn bcd_max_ten_digits() {
        let bcd = encode_bcd(9_999_999_999, 5, DigitOrder::LittleEndian).unwrap();
        assert_eq!(bcd, [0x99; 5]);
        assert!(matches!(
            encode_bcd(10_000_000_000, 5, DigitOrder::LittleEndian),
            Err(Error::OutOfRange { .. })
        ));
    }

    #[test]
    fn bcd_invalid_nibble_is_garbled() {
        assert!(matches!(
            decode_bcd(&[0x0A, 0x00], DigitOrder::BigEndian),
            Err(Error::Garbled(_))
        ));
        assert!(matches!(
            decode_bcd(&[0xF0], DigitOrder::BigEndian),
            Err(Error::Garbled(_))
        ));
    }

    #[test]
    fn offsets() {
        assert_eq!(encode_offset(150).unwrap(), [0x50, 0x01, 0x00]);
        assert_eq!(encode_offset(-300).unwrap(), [0x00, 0x03, 0x01]);
        assert_eq!(decode_offset(&[0x99, 0x99, 0x01]).unwrap(), -9999);
        assert!(matches!(encode_offset(10_000), Err(Error::OutOfRange { .. })));
        assert!(matches!(decode_offset(&[0x00, 0x00]), Err(Error::Garbled(_))));
        assert!(matches!(decode_offset(&[0x00, 0x00, 0x02]), Err(Error::Garbled(_))));
    }

    // ---------------------------------------------------------------
    // Framing
    // ---------------------------------------------------------------

    #[test]
    fn encode_with_sub_command() {
        let bytes = codec().request(0x14, Some(0x0A), &[0x01, 0x28]);
        assert_eq!(bytes, [0xFE, 0xFE, 0x94, 0xE0, 0x14, 0x0A, 0x01, 0x28, 0xFD]);
    }

    #[test]
    fn decode_ack() {
        let frame = codec()
            .decode_frame(&[0xFE, 0xFE, 0xE0, 0x94, 0xFB, 0xFD])
            .unwrap();
        assert!(frame.is_ack());
        assert!(codec().is_ack(&frame));
    }

    #[test]
    fn decode_nak_is_rejected() {
        assert!(matches!(
            codec().decode_frame(&[0xFE, 0xFE, 0xE0, 0x94, 0xFA, 0xFD]),
            Err(Error::Rejected(_))
        ));
    }

    #[test]
    fn decode_data_frame() {
        let frame = codec()
            .decode_frame(&[0xFE, 0xFE, 0xE0, 0x94, 0x25, 0x00, 0x00, 0x00, 0x25, 0x14, 0x00, 0xFD])
            .unwrap();
        assert_eq!(frame.cmd, 0x25);
        assert_eq!(frame.sub_cmd(), Some(0x00));
        assert_eq!(frame.data(1, 5, "frequency").unwrap(), [0x00, 0x00, 0x25, 0x14, 0x00]);
        assert!(frame.data(1, 4, "frequency").is_err());
        assert!(codec().matches(&[0x25, 0x00], &frame));
        assert!(!codec().matches(&[0x25, 0x01], &frame));
        assert!(!codec().matches(&[0x26], &frame));
    }

    #[test]
    fn decode_rejects_bad_markers() {
        let c = codec();
        assert!(matches!(c.decode_frame(&[0xFE, 0xFE, 0xE0, 0x94, 0xFD]), Err(Error::Garbled(_))));
        assert!(matches!(
            c.decode_frame(&[0xFE, 0x00, 0xE0, 0x94, 0xFB, 0xFD]),
            Err(Error::Garbled(_))
        ));
        assert!(matches!(
            c.decode_frame(&[0xFE, 0xFE, 0xE0, 0x94, 0xFB, 0x00]),
            Err(Error::Garbled(_))
        ));
    }

    #[test]
    fn decode_rejects_collision_and_wrong_address() {
        let c = codec();
        assert!(matches!(
            c.decode_frame(&[0xFE, 0xFE, 0xE0, 0x94, 0xFC, 0xFD]),
            Err(Error::Garbled(_))
        ));
        // Our own request echoed back is not a reply.
        assert!(matches!(
            c.decode_frame(&[0xFE, 0xFE, 0x94, 0xE0, 0x03, 0xFD]),
            Err(Error::Garbled(_))
        ));
        assert!(matches!(
            c.decode_frame(&[0xFE, 0xFE, 0xE0, 0xA4, 0xFB, 0xFD]),
            Err(Error::Garbled(_))
        ));
    }

    #[test]
    fn decode_rejects_oversized() {
        let mut raw = vec![0xFE, 0xFE, 0xE0, 0x94, 0x1A];
        raw.extend(std::iter::repeat_n(0x00, 40));
        raw.push(0xFD);
        assert!(matches!(codec().decode_frame(&raw), Err(Error::Garbled(_))));
    }
}
