use std::{fmt, slice};

use crate::error::{CodecError, Malformation};
use crate::utf::*;

const CONTINUATION_TAG: u8 = 0b10_000000;
const PAYLOAD_MASK: u8 = 0b00_111111;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Utf8Type {
    Ascii(u8),
    Western([u8; 2]),
    Bmp([u8; 3]),
    Other([u8; 4]),
}

/// One codepoint encoded as 1 to 4 UTF-8 code units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Utf8Sequence(Utf8Type);

/// The 8-bit variable-width form.
#[derive(Clone, Copy, Debug, Default)]
pub struct Utf8;

impl Codec for Utf8 {
    const FORM: Form = Form::Utf8;
    type Unit = u8;
    type Sequence = Utf8Sequence;

    #[inline]
    fn encode_codepoint(codepoint: Codepoint) -> Utf8Sequence {
        let value = codepoint.value();
        let utf8_type = match value {
            0..=0x7F => Utf8Type::Ascii(value as u8),
            0x80..=0x7FF => {
                Utf8Type::Western([0b1100_0000 | (value >> 6) as u8, continuation(value)])
            }
            0x800..=0xFFFF => Utf8Type::Bmp([
                0b1110_0000 | (value >> 12) as u8,
                continuation(value >> 6),
                continuation(value),
            ]),
            _ => Utf8Type::Other([
                0b1111_0000 | (value >> 18) as u8,
                continuation(value >> 12),
                continuation(value >> 6),
                continuation(value),
            ]),
        };
        Utf8Sequence(utf8_type)
    }

    fn decode(units: &[u8]) -> Result<Codepoint, CodecError> {
        let malformed = |reason| CodecError::malformed(Form::Utf8, reason);
        let (&lead, rest) = units
            .split_first()
            .ok_or_else(|| malformed(Malformation::Empty))?;
        let (full_len, mut codepoint) = match lead.leading_ones() {
            0 => (1, lead as u32),
            2 => (2, (lead ^ 0b1100_0000) as u32),
            3 => (3, (lead ^ 0b1110_0000) as u32),
            4 => (4, (lead ^ 0b1111_0000) as u32),
            _ => return Err(malformed(Malformation::InvalidLeadingUnit(lead as u32))),
        };
        if units.len() != full_len {
            return Err(malformed(Malformation::WrongLength {
                expected: full_len,
                found: units.len(),
            }));
        }
        for (index, &unit) in rest.iter().enumerate() {
            if unit & !PAYLOAD_MASK != CONTINUATION_TAG {
                return Err(malformed(Malformation::MissingContinuation { index: index + 1 }));
            }
            codepoint = (codepoint << 6) | (unit & PAYLOAD_MASK) as u32;
        }
        if Utf8Sequence::units_for(codepoint) != full_len {
            return Err(malformed(Malformation::Overlong));
        }
        Codepoint::decoded(Form::Utf8, codepoint)
    }
}

#[inline]
const fn continuation(bits: u32) -> u8 {
    CONTINUATION_TAG | (bits as u8 & PAYLOAD_MASK)
}

impl Utf8Sequence {
    /// Number of units the shortest encoding of `codepoint` takes.
    ///
    /// Values past the 4-unit range still report 4; the domain check is
    /// separate.
    const fn units_for(codepoint: u32) -> usize {
        match codepoint {
            0..=0x7F => 1,
            0x80..=0x7FF => 2,
            0x800..=0xFFFF => 3,
            _ => 4,
        }
    }

    pub const fn full_len(&self) -> usize {
        match self.0 {
            Utf8Type::Ascii(_) => 1,
            Utf8Type::Western(v) => v.len(),
            Utf8Type::Bmp(v) => v.len(),
            Utf8Type::Other(v) => v.len(),
        }
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        match &self.0 {
            Utf8Type::Ascii(value) => slice::from_ref(value),
            Utf8Type::Western(bytes) => bytes,
            Utf8Type::Bmp(bytes) => bytes,
            Utf8Type::Other(bytes) => bytes,
        }
    }
}

impl AsRef<[u8]> for Utf8Sequence {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Display for Utf8Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Bits(self.as_bytes()), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn malformed(reason: Malformation) -> CodecError {
        CodecError::MalformedSequence {
            form: Form::Utf8,
            reason,
        }
    }

    #[test]
    fn round_trips_every_scalar() {
        for value in (0..=0x10FFFF).filter(|&v| is_valid_codepoint(v)) {
            let sequence = Utf8::encode(value).unwrap();
            assert_eq!(Utf8::decode(sequence.as_bytes()).unwrap().value(), value);
        }
    }

    #[test]
    fn matches_std_encoding() {
        for c in [
            '\0', 'A', '\u{7F}', '\u{80}', 'é', '\u{7FF}', '\u{800}', '我', '\u{FFFF}', '😀',
            '\u{10FFFF}',
        ] {
            let mut buffer = [0u8; 4];
            let expected = c.encode_utf8(&mut buffer).as_bytes();
            assert_eq!(Utf8::encode(c as u32).unwrap().as_bytes(), expected);
        }
    }

    #[test]
    fn boundaries() {
        assert_eq!(Utf8::encode_bits(0).unwrap(), "00000000");
        assert_eq!(Utf8::encode_bits(0x7F).unwrap(), "01111111");
        assert_eq!(Utf8::encode_bits(0x80).unwrap(), "1100001010000000");
        assert_eq!(Utf8::encode_bits(0x7FF).unwrap(), "1101111110111111");
        assert_eq!(Utf8::encode_bits(0x800).unwrap(), "111000001010000010000000");
        assert_eq!(Utf8::encode_bits(0xFFFF).unwrap(), "111011111011111110111111");
        assert_eq!(
            Utf8::encode_bits(0x10000).unwrap(),
            "11110000100100001000000010000000"
        );
        assert_eq!(
            Utf8::encode_bits(0x10FFFF).unwrap(),
            "11110100100011111011111110111111"
        );
        for value in [0, 0x7F, 0x80, 0x7FF, 0x800, 0xFFFF, 0x10000, 0x10FFFF] {
            let bits = Utf8::encode_bits(value).unwrap();
            assert_eq!(Utf8::decode_bits(&bits).unwrap().value(), value);
        }
    }

    #[test]
    fn unit_counts() {
        for (value, bits) in [
            (0x00, 8),
            (0x7F, 8),
            (0x80, 16),
            (0x7FF, 16),
            (0x800, 24),
            (0xFFFF, 24),
            (0x10000, 32),
            (0x10FFFF, 32),
        ] {
            let sequence = Utf8::encode(value).unwrap();
            assert_eq!(sequence.full_len() * 8, bits);
            assert_eq!(sequence.to_string().len(), bits);
        }
    }

    #[test]
    fn decodes_spaced_bits() {
        assert_eq!(
            Utf8::decode_bits("11000010 10000000").unwrap().value(),
            0x80
        );
        assert_eq!(format!("{:#}", Utf8::encode(0x80).unwrap()), "11000010 10000000");
    }

    #[test]
    fn rejects_out_of_domain() {
        assert_eq!(Utf8::encode(0x110000), Err(CodecError::OutOfDomain(0x110000)));
        assert_eq!(Utf8::encode(0xD800), Err(CodecError::OutOfDomain(0xD800)));
        assert_eq!(Utf8::encode(0xDFFF), Err(CodecError::OutOfDomain(0xDFFF)));
        assert_eq!(Utf8::encode(u32::MAX), Err(CodecError::OutOfDomain(u32::MAX)));
    }

    #[test]
    fn rejects_truncated_sequences() {
        assert_eq!(
            Utf8::decode(&[0xF0, 0x90, 0x80]),
            Err(malformed(Malformation::WrongLength {
                expected: 4,
                found: 3
            }))
        );
        assert_eq!(
            Utf8::decode_bits("11110000"),
            Err(malformed(Malformation::WrongLength {
                expected: 4,
                found: 1
            }))
        );
        assert_eq!(
            Utf8::decode(&[0x41, 0x41]),
            Err(malformed(Malformation::WrongLength {
                expected: 1,
                found: 2
            }))
        );
        assert_eq!(Utf8::decode(&[]), Err(malformed(Malformation::Empty)));
    }

    #[test]
    fn rejects_missing_continuation() {
        assert_eq!(
            Utf8::decode(&[0xE6, 0x88, 0x51]),
            Err(malformed(Malformation::MissingContinuation { index: 2 }))
        );
        assert_eq!(
            Utf8::decode(&[0xC2, 0xC0]),
            Err(malformed(Malformation::MissingContinuation { index: 1 }))
        );
    }

    #[test]
    fn rejects_invalid_leading_units() {
        assert_eq!(
            Utf8::decode(&[0x80]),
            Err(malformed(Malformation::InvalidLeadingUnit(0x80)))
        );
        assert_eq!(
            Utf8::decode(&[0xF8, 0x80, 0x80, 0x80, 0x80]),
            Err(malformed(Malformation::InvalidLeadingUnit(0xF8)))
        );
    }

    #[test]
    fn rejects_overlong_and_non_scalar() {
        assert_eq!(Utf8::decode(&[0xC0, 0x80]), Err(malformed(Malformation::Overlong)));
        assert_eq!(
            Utf8::decode(&[0xE0, 0x9F, 0xBF]),
            Err(malformed(Malformation::Overlong))
        );
        assert_eq!(
            Utf8::decode(&[0xED, 0xA0, 0x80]),
            Err(malformed(Malformation::NotAScalar(0xD800)))
        );
        assert_eq!(
            Utf8::decode(&[0xF4, 0x90, 0x80, 0x80]),
            Err(malformed(Malformation::NotAScalar(0x110000)))
        );
    }
}
