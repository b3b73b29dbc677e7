use std::{fmt, slice};

use crate::error::{CodecError, Malformation};
use crate::utf::*;

/// One codepoint as a single UTF-32 unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Utf32Sequence(u32);

/// The fixed 32-bit form. Only scalar values are accepted even though the
/// unit could hold any `u32`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Utf32;

impl Codec for Utf32 {
    const FORM: Form = Form::Utf32;
    type Unit = u32;
    type Sequence = Utf32Sequence;

    #[inline]
    fn encode_codepoint(codepoint: Codepoint) -> Utf32Sequence {
        Utf32Sequence(codepoint.value())
    }

    fn decode(units: &[u32]) -> Result<Codepoint, CodecError> {
        match *units {
            [unit] => Codepoint::decoded(Form::Utf32, unit),
            [] => Err(CodecError::malformed(Form::Utf32, Malformation::Empty)),
            [..] => Err(CodecError::malformed(
                Form::Utf32,
                Malformation::WrongLength {
                    expected: 1,
                    found: units.len(),
                },
            )),
        }
    }
}

impl Utf32Sequence {
    #[inline]
    pub fn as_units(&self) -> &[u32] {
        slice::from_ref(&self.0)
    }
}

impl AsRef<[u32]> for Utf32Sequence {
    fn as_ref(&self) -> &[u32] {
        self.as_units()
    }
}

impl fmt::Display for Utf32Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Bits(self.as_units()), f)
    }
}
