use std::{fmt, slice};

use crate::error::{CodecError, Malformation};
use crate::utf::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Utf16Type {
    Bmp(u16),
    Surrogate([u16; 2]),
}

/// One codepoint encoded as a single UTF-16 unit or a surrogate pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Utf16Sequence(Utf16Type);

/// The 16-bit variable-width form.
#[derive(Clone, Copy, Debug, Default)]
pub struct Utf16;

impl Codec for Utf16 {
    const FORM: Form = Form::Utf16;
    type Unit = u16;
    type Sequence = Utf16Sequence;

    #[inline]
    fn encode_codepoint(codepoint: Codepoint) -> Utf16Sequence {
        let utf16_type = match codepoint.value() {
            value @ 0..=0xFFFF => Utf16Type::Bmp(value as u16),
            value => {
                let offset = value - 0x10000;
                Utf16Type::Surrogate([
                    0xD800 | (offset >> 10) as u16,
                    0xDC00 | (offset & 0x3FF) as u16,
                ])
            }
        };
        Utf16Sequence(utf16_type)
    }

    fn decode(units: &[u16]) -> Result<Codepoint, CodecError> {
        let malformed = |reason| CodecError::malformed(Form::Utf16, reason);
        match *units {
            [] => Err(malformed(Malformation::Empty)),
            [high @ 0xD800..=0xDBFF, low @ 0xDC00..=0xDFFF] => {
                let high = (high - 0xD800) as u32;
                let low = (low - 0xDC00) as u32;
                Codepoint::decoded(Form::Utf16, ((high << 10) | low) + 0x10000)
            }
            [0xD800..=0xDBFF] | [0xD800..=0xDBFF, _] => {
                Err(malformed(Malformation::LoneHighSurrogate))
            }
            [0xDC00..=0xDFFF, ..] => Err(malformed(Malformation::LoneLowSurrogate)),
            [0xD800..=0xDBFF, ..] => Err(malformed(Malformation::WrongLength {
                expected: 2,
                found: units.len(),
            })),
            [unit] => Codepoint::decoded(Form::Utf16, unit as u32),
            [_, ..] => Err(malformed(Malformation::WrongLength {
                expected: 1,
                found: units.len(),
            })),
        }
    }
}

impl Utf16Sequence {
    pub const fn is_surrogate(&self) -> bool {
        matches!(self.0, Utf16Type::Surrogate(_))
    }

    pub const fn full_len(&self) -> usize {
        match self.0 {
            Utf16Type::Bmp(_) => 1,
            Utf16Type::Surrogate(v) => v.len(),
        }
    }

    #[inline]
    pub fn as_units(&self) -> &[u16] {
        match &self.0 {
            Utf16Type::Bmp(unit) => slice::from_ref(unit),
            Utf16Type::Surrogate(units) => units,
        }
    }
}

impl AsRef<[u16]> for Utf16Sequence {
    fn as_ref(&self) -> &[u16] {
        self.as_units()
    }
}

impl fmt::Display for Utf16Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Bits(self.as_units()), f)
    }
}
