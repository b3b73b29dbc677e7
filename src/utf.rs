pub(crate) mod bits;
pub(crate) mod utf16sequence;
pub(crate) mod utf32sequence;
pub(crate) mod utf8sequence;

use std::fmt;

use crate::error::{CodecError, Malformation};

pub use bits::{Bits, CodeUnit};
pub use utf16sequence::{Utf16, Utf16Sequence};
pub use utf32sequence::{Utf32, Utf32Sequence};
pub use utf8sequence::{Utf8, Utf8Sequence};

/// One encoding form's mapping between codepoints and unit sequences.
///
/// Implementors are stateless markers; every operation is a pure associated
/// function and may be called from any thread.
pub trait Codec {
    const FORM: Form;
    type Unit: CodeUnit;
    type Sequence: AsRef<[Self::Unit]> + fmt::Display;

    fn encode_codepoint(codepoint: Codepoint) -> Self::Sequence;
    fn decode(units: &[Self::Unit]) -> Result<Codepoint, CodecError>;

    #[inline]
    fn encode(codepoint: u32) -> Result<Self::Sequence, CodecError> {
        Ok(Self::encode_codepoint(Codepoint::new(codepoint)?))
    }

    fn encode_bits(codepoint: u32) -> Result<String, CodecError> {
        Ok(Self::encode(codepoint)?.to_string())
    }

    fn decode_bits(text: &str) -> Result<Codepoint, CodecError> {
        Self::decode(&bits::parse_bits::<Self::Unit>(Self::FORM, text)?)
    }
}

pub const fn is_valid_codepoint(codepoint: u32) -> bool {
    matches!(codepoint, 0..=0xD7FF | 0xE000..=0x10FFFF)
}

/// A Unicode scalar value: U+0000 to U+10FFFF minus the surrogates.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Codepoint(u32);

impl Codepoint {
    pub const MIN: Codepoint = Codepoint(0);
    pub const MAX: Codepoint = Codepoint(0x10FFFF);

    #[inline]
    pub const fn new(value: u32) -> Result<Self, CodecError> {
        if is_valid_codepoint(value) {
            Ok(Self(value))
        } else {
            Err(CodecError::OutOfDomain(value))
        }
    }

    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Checks a value recovered by a decoder.
    #[inline]
    pub(crate) const fn decoded(form: Form, value: u32) -> Result<Self, CodecError> {
        if is_valid_codepoint(value) {
            Ok(Self(value))
        } else {
            Err(CodecError::malformed(form, Malformation::NotAScalar(value)))
        }
    }
}

impl From<char> for Codepoint {
    #[inline]
    fn from(value: char) -> Self {
        Self(value as u32)
    }
}

impl From<Codepoint> for char {
    #[inline]
    fn from(value: Codepoint) -> Self {
        char::from_u32(value.0).unwrap_or(char::REPLACEMENT_CHARACTER)
    }
}

impl TryFrom<u32> for Codepoint {
    type Error = CodecError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Debug for Codepoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U+{:04X}", self.0)
    }
}

impl fmt::Display for Codepoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Form {
    Utf8,
    Utf16,
    Utf32,
}

impl Form {
    pub const fn unit_bits(self) -> usize {
        match self {
            Form::Utf8 => 8,
            Form::Utf16 => 16,
            Form::Utf32 => 32,
        }
    }
}

impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Form::Utf8 => "UTF-8",
            Form::Utf16 => "UTF-16",
            Form::Utf32 => "UTF-32",
        })
    }
}
