use std::fmt;

use bytes::{BufMut, BytesMut};
use crc::{Crc, CRC_16_XMODEM};

use crate::error::{FrameError, Integrity, Result};
use crate::frame_type::FrameType;

/// Frame header: preamble (1) + type (2) + length (2) = 5 bytes.
pub const HEADER_SIZE: usize = 5;

/// Trailing checksum size.
pub const CHECKSUM_SIZE: usize = 2;

/// Preamble marker that starts every frame.
pub const PREAMBLE: u8 = 0xAA;

/// Largest payload the 16-bit length field can describe.
pub const MAX_PAYLOAD: usize = u16::MAX as usize - HEADER_SIZE - CHECKSUM_SIZE;

const CRC16: Crc<u16> = Crc::<u16>::new(&CRC_16_XMODEM);

/// CRC-16/XMODEM (polynomial 0x1021, initial value 0).
pub fn checksum(bytes: &[u8]) -> u16 {
    CRC16.checksum(bytes)
}

/// Fixed header of a well-formed frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Raw type code.
    pub code: [u8; 2],
    /// Resolved type, `None` for codes outside the known table.
    pub frame_type: Option<FrameType>,
    /// Total frame length including header and checksum.
    pub length: u16,
}

/// Encode a frame into the wire format.
///
/// Wire format:
/// ```text
/// ┌──────────┬──────────┬──────────┬──────────────┬──────────┐
/// │ Preamble │ Type     │ Length   │ Payload      │ CRC      │
/// │ 0xAA     │ (2B)     │ (2B LE)  │              │ (2B LE)  │
/// └──────────┴──────────┴──────────┴──────────────┴──────────┘
/// ```
/// The length counts every byte from the preamble through the CRC; the CRC
/// covers every byte before it.
pub fn encode_frame(frame_type: FrameType, payload: &[u8], dst: &mut BytesMut) -> Result<()> {
    if payload.len() > MAX_PAYLOAD {
        return Err(FrameError::PayloadTooLarge {
            size: payload.len(),
            max: MAX_PAYLOAD,
        });
    }
    let start = dst.len();
    let total = HEADER_SIZE + payload.len() + CHECKSUM_SIZE;
    dst.reserve(total);
    dst.put_u8(PREAMBLE);
    dst.put_slice(&frame_type.code());
    dst.put_u16_le(total as u16);
    dst.put_slice(payload);
    let crc = checksum(&dst[start..]);
    dst.put_u16_le(crc);
    Ok(())
}

/// Check that `buf` holds exactly one well-formed frame.
pub fn check(buf: &[u8]) -> std::result::Result<Header, Integrity> {
    if buf.len() < HEADER_SIZE {
        return Err(Integrity::TooShort { len: buf.len() });
    }
    if buf[0] != PREAMBLE {
        return Err(Integrity::Preamble { found: buf[0] });
    }

    let length = u16::from_le_bytes([buf[3], buf[4]]);
    if usize::from(length) != buf.len() {
        return Err(Integrity::Length {
            declared: usize::from(length),
            actual: buf.len(),
        });
    }

    let split = buf.len() - CHECKSUM_SIZE;
    let computed = checksum(&buf[..split]);
    let received = u16::from_le_bytes([buf[split], buf[split + 1]]);
    if computed != received {
        return Err(Integrity::Checksum { computed, received });
    }

    let code = [buf[1], buf[2]];
    Ok(Header {
        code,
        frame_type: FrameType::from_code(code),
        length,
    })
}

/// Lowercase hex rendering of a byte slice, for logs and CLI output.
pub struct Hex<'a>(pub &'a [u8]);

impl fmt::Display for Hex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(frame_type: FrameType, payload: &[u8]) -> BytesMut {
        let mut buf = BytesMut::new();
        encode_frame(frame_type, payload, &mut buf).unwrap();
        buf
    }

    #[test]
    fn checksum_matches_xmodem_check_value() {
        assert_eq!(checksum(b"123456789"), 0x31C3);
        assert_eq!(checksum(b""), 0);
    }

    #[test]
    fn encode_layout() {
        let buf = frame(FrameType::SubInfo1, &[0x00]);
        assert_eq!(buf.len(), 8);
        assert_eq!(&buf[..6], &[0xAA, 0xf4, 0x1f, 0x08, 0x00, 0x00]);
        let crc = checksum(&buf[..6]);
        assert_eq!(&buf[6..], &crc.to_le_bytes());
    }

    #[test]
    fn encode_appends_to_existing_buffer() {
        let mut buf = frame(FrameType::SubInfo1, &[0x00]);
        encode_frame(FrameType::SubInfo2, &[0x00], &mut buf).unwrap();
        assert_eq!(buf.len(), 16);
        check(&buf[..8]).unwrap();
        check(&buf[8..]).unwrap();
    }

    #[test]
    fn check_accepts_encoded_frame() {
        let buf = frame(FrameType::Reset, &[12]);
        let header = check(&buf).unwrap();
        assert_eq!(header.frame_type, Some(FrameType::Reset));
        assert_eq!(header.length, 8);
    }

    #[test]
    fn check_rejects_short_buffer() {
        assert_eq!(
            check(&[0xAA, 0xf2, 0x00]),
            Err(Integrity::TooShort { len: 3 })
        );
    }

    #[test]
    fn check_rejects_bad_preamble() {
        let mut buf = frame(FrameType::Reset, &[12]);
        buf[0] = 0x55;
        assert_eq!(check(&buf), Err(Integrity::Preamble { found: 0x55 }));
    }

    #[test]
    fn check_rejects_truncated_frame() {
        let buf = frame(FrameType::MemoryRead, &[4, 0, 0, 0, 0x2c, 0, 2, 0]);
        let err = check(&buf[..10]).unwrap_err();
        assert_eq!(
            err,
            Integrity::Length {
                declared: 15,
                actual: 10
            }
        );
    }

    #[test]
    fn every_single_bit_flip_is_detected() {
        let payload = [4, 0, 0, 0, 0x2c, 0, 2, 0, 0x83, 0xff];
        let clean = frame(FrameType::MemoryWrite, &payload);
        for byte in HEADER_SIZE..clean.len() - CHECKSUM_SIZE {
            for bit in 0..8 {
                let mut corrupted = clean.clone();
                corrupted[byte] ^= 1 << bit;
                assert!(
                    matches!(check(&corrupted), Err(Integrity::Checksum { .. })),
                    "flip of bit {bit} in byte {byte} went unnoticed"
                );
            }
        }
    }

    #[test]
    fn unknown_code_is_still_well_formed() {
        let mut buf = BytesMut::new();
        buf.put_slice(&[PREAMBLE, 0x12, 0x34, 0x08, 0x00, 0x00]);
        let crc = checksum(&buf);
        buf.put_u16_le(crc);
        let header = check(&buf).unwrap();
        assert_eq!(header.code, [0x12, 0x34]);
        assert_eq!(header.frame_type, None);
    }

    #[test]
    fn hex_renders_lowercase() {
        assert_eq!(Hex(&[0xAA, 0x0f, 0x10]).to_string(), "aa0f10");
    }
}
