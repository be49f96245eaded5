//! Conversion between typed values and the device's stored bytes.
//!
//! Numeric attributes are stored as signed fixed-point, ten times the real
//! value, in a 16-bit little-endian word. Text attributes are zero padded to
//! the descriptor width.

use bytes::{BufMut, BytesMut};

use crate::descriptor::{Descriptor, Domain};
use crate::error::{RegistryError, Result};
use crate::value::AttributeValue;

/// Fixed-point scale factor.
pub const SCALE: f64 = 10.0;

/// Width of a stored numeric value.
pub const NUMERIC_WIDTH: usize = 2;

/// Raw words at or above this value decode as negative.
///
/// This is narrower than a real two's-complement decode: a raw word in
/// `0x8000..0xF000` reads as a large positive number. No attribute in the
/// register map can produce one.
pub const NEGATIVE_THRESHOLD: u16 = 0xF000;

/// Validate `value` against `descriptor` and append its stored bytes to `dst`.
pub fn encode(descriptor: &Descriptor, value: &AttributeValue, dst: &mut BytesMut) -> Result<()> {
    match (descriptor.domain(), value) {
        (Domain::Text, AttributeValue::Text(text)) if !text.is_empty() => {
            put_text(text, usize::from(descriptor.width()), dst);
            Ok(())
        }
        (domain, value) if domain.is_numeric() => match value.as_f64() {
            Some(number) if domain.contains(number) => {
                dst.put_slice(&to_fixed_point(number));
                Ok(())
            }
            _ => Err(out_of_domain(descriptor, value)),
        },
        _ => Err(out_of_domain(descriptor, value)),
    }
}

/// Decode the stored bytes of `descriptor`.
///
/// Returns `Ok(None)` when the reading is not a valid member of the domain
/// or when too few bytes are available; such readings are dropped rather
/// than reported. Text that is not UTF-8 fails with [`RegistryError::Decode`].
pub fn decode(descriptor: &Descriptor, bytes: &[u8]) -> Result<Option<AttributeValue>> {
    let domain = descriptor.domain();
    match domain {
        Domain::Text => {
            let end = bytes
                .iter()
                .rposition(|b| *b != 0)
                .map_or(0, |last| last + 1);
            let text = std::str::from_utf8(&bytes[..end]).map_err(|err| RegistryError::Decode {
                name: descriptor.name(),
                reason: err.to_string(),
            })?;
            Ok(Some(AttributeValue::Text(text.to_string())))
        }
        Domain::Range { .. } | Domain::Discrete(_) => {
            let Some(word) = bytes.get(..NUMERIC_WIDTH) else {
                return Ok(None);
            };
            let value = from_fixed_point(u16::from_le_bytes([word[0], word[1]]));
            if domain.contains(value) {
                Ok(Some(AttributeValue::number(value)))
            } else {
                tracing::debug!(
                    attribute = descriptor.name(),
                    value,
                    "dropping reading outside domain"
                );
                Ok(None)
            }
        }
        Domain::Group | Domain::Action => Ok(None),
    }
}

/// Scale, round and store `value` as a little-endian two's-complement word.
pub fn to_fixed_point(value: f64) -> [u8; 2] {
    let scaled = (value * SCALE).round() as i16;
    scaled.to_le_bytes()
}

/// Recover a real value from a stored word using the 0xF000 sign threshold.
pub fn from_fixed_point(raw: u16) -> f64 {
    if raw >= NEGATIVE_THRESHOLD {
        -(f64::from(0x1_0000 - u32::from(raw)) / SCALE)
    } else {
        f64::from(raw) / SCALE
    }
}

fn put_text(text: &str, width: usize, dst: &mut BytesMut) {
    let mut end = text.len().min(width);
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    dst.put_slice(&text.as_bytes()[..end]);
    dst.put_bytes(0, width - end);
}

fn out_of_domain(descriptor: &Descriptor, value: &AttributeValue) -> RegistryError {
    RegistryError::OutOfDomain {
        name: descriptor.name(),
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::STANDARD;

    fn encode_to_vec(name: &str, value: AttributeValue) -> Result<Vec<u8>> {
        let descriptor = STANDARD.lookup(name)?;
        let mut dst = BytesMut::new();
        encode(descriptor, &value, &mut dst)?;
        Ok(dst.to_vec())
    }

    #[test]
    fn volume_negative_half_step() {
        let bytes = encode_to_vec("VOLUME", AttributeValue::from(-12.5)).unwrap();
        assert_eq!(bytes, (-125i16).to_le_bytes());
        assert_eq!(bytes, [0x83, 0xFF]);

        let volume = STANDARD.lookup("VOLUME").unwrap();
        let decoded = decode(volume, &bytes).unwrap();
        assert_eq!(decoded, Some(AttributeValue::Decimal(-12.5)));
    }

    #[test]
    fn encode_rounds_to_nearest_tenth() {
        let bytes = encode_to_vec("PEQ1_QFACTOR", AttributeValue::from(0.66)).unwrap();
        assert_eq!(u16::from_le_bytes([bytes[0], bytes[1]]), 7);

        let bytes = encode_to_vec("VOLUME", AttributeValue::from(-12.9)).unwrap();
        assert_eq!(i16::from_le_bytes([bytes[0], bytes[1]]), -129);
    }

    #[test]
    fn round_trip_every_numeric_descriptor() {
        for descriptor in STANDARD.iter() {
            let samples: Vec<f64> = match descriptor.domain() {
                Domain::Range { min, max } => {
                    let steps = ((max - min) * SCALE).round() as i64;
                    (0..=steps).map(|i| min + i as f64 / SCALE).collect()
                }
                Domain::Discrete(values) => values.to_vec(),
                _ => continue,
            };

            for sample in samples {
                let sample = (sample * SCALE).round() / SCALE;
                let mut dst = BytesMut::new();
                encode(descriptor, &AttributeValue::from(sample), &mut dst).unwrap();
                let decoded = decode(descriptor, &dst).unwrap().unwrap();
                let decoded = decoded.as_f64().unwrap();
                assert!(
                    (decoded - sample).abs() < 1e-9,
                    "{}: {sample} decoded as {decoded}",
                    descriptor.name()
                );
            }
        }
    }

    #[test]
    fn out_of_domain_values_are_rejected() {
        for descriptor in STANDARD.iter() {
            let outside = match descriptor.domain() {
                Domain::Range { max, .. } => AttributeValue::from(max + 1.0),
                Domain::Discrete(values) => {
                    let largest = values.iter().copied().fold(f64::MIN, f64::max);
                    AttributeValue::from(largest + 0.5)
                }
                Domain::Text => AttributeValue::from(1),
                Domain::Group | Domain::Action => AttributeValue::from(0),
            };
            let mut dst = BytesMut::new();
            let err = encode(descriptor, &outside, &mut dst).unwrap_err();
            assert!(
                matches!(err, RegistryError::OutOfDomain { .. }),
                "{}",
                descriptor.name()
            );
            assert!(dst.is_empty(), "{} wrote bytes", descriptor.name());
        }
    }

    #[test]
    fn numeric_rejects_text_value() {
        let err = encode_to_vec("PHASE", AttributeValue::from("90")).unwrap_err();
        assert!(matches!(err, RegistryError::OutOfDomain { name: "PHASE", .. }));
    }

    #[test]
    fn discrete_rejects_non_member() {
        let err = encode_to_vec("ROOM_GAIN_FREQ", AttributeValue::from(30)).unwrap_err();
        assert!(matches!(err, RegistryError::OutOfDomain { .. }));
        assert!(encode_to_vec("ROOM_GAIN_FREQ", AttributeValue::from(31)).is_ok());
    }

    #[test]
    fn text_is_padded_and_truncated() {
        let bytes = encode_to_vec("PRESET1NAME", AttributeValue::from("Movie")).unwrap();
        assert_eq!(bytes, b"Movie\0\0\0");

        let bytes = encode_to_vec("PRESET1NAME", AttributeValue::from("Late Night Jazz")).unwrap();
        assert_eq!(bytes, b"Late Nig");
    }

    #[test]
    fn text_truncation_keeps_whole_characters() {
        let bytes = encode_to_vec("PRESET2NAME", AttributeValue::from("Kinoabcé")).unwrap();
        assert_eq!(bytes, b"Kinoabc\0");
    }

    #[test]
    fn empty_text_is_rejected() {
        let err = encode_to_vec("PRESET3NAME", AttributeValue::from("")).unwrap_err();
        assert!(matches!(err, RegistryError::OutOfDomain { .. }));
    }

    #[test]
    fn decode_text_strips_padding() {
        let name = STANDARD.lookup("PRESET1NAME").unwrap();
        let decoded = decode(name, b"Music\0\0\0").unwrap();
        assert_eq!(decoded, Some(AttributeValue::Text("Music".to_string())));
    }

    #[test]
    fn decode_invalid_text_fails() {
        let name = STANDARD.lookup("PRESET1NAME").unwrap();
        let err = decode(name, &[0xff, 0xfe, 0, 0, 0, 0, 0, 0]).unwrap_err();
        assert!(matches!(err, RegistryError::Decode { name: "PRESET1NAME", .. }));
    }

    #[test]
    fn sign_threshold_is_0xf000() {
        assert_eq!(from_fixed_point(0xF000), -409.6);
        assert_eq!(from_fixed_point(0xEFFF), 6143.9);
        assert_eq!(from_fixed_point(0xFFFF), -0.1);
        assert_eq!(from_fixed_point(0x0384), 90.0);
    }

    #[test]
    fn decode_drops_out_of_domain_reading() {
        let volume = STANDARD.lookup("VOLUME").unwrap();
        assert_eq!(decode(volume, &[0x21, 0x03]).unwrap(), None);
        assert_eq!(decode(volume, &[0x10]).unwrap(), None);
    }

    #[test]
    fn decode_normalizes_whole_numbers() {
        let phase = STANDARD.lookup("PHASE").unwrap();
        let decoded = decode(phase, &900u16.to_le_bytes()).unwrap();
        assert_eq!(decoded, Some(AttributeValue::Integer(90)));
    }

    #[test]
    fn group_and_action_never_decode() {
        let group = STANDARD.lookup("FULL_SETTINGS").unwrap();
        assert_eq!(decode(group, &[0, 0]).unwrap(), None);
        let action = STANDARD.lookup("PRESET1LOAD").unwrap();
        assert_eq!(decode(action, &[]).unwrap(), None);
    }
}
