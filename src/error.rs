use thiserror::Error;

use crate::utf::Form;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    #[error("{0:#X} is not a Unicode scalar value")]
    OutOfDomain(u32),

    #[error("malformed {form} sequence: {reason}")]
    MalformedSequence { form: Form, reason: Malformation },
}

/// The grammar rule a rejected sequence broke.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Malformation {
    #[error("sequence has no units")]
    Empty,

    #[error("{0} bits do not fill a whole number of units")]
    PartialUnit(usize),

    #[error("{0:?} is not a binary digit")]
    InvalidDigit(char),

    #[error("unit {0:#X} cannot start a sequence")]
    InvalidLeadingUnit(u32),

    #[error("expected {expected} units, got {found}")]
    WrongLength { expected: usize, found: usize },

    #[error("unit {index} is not a continuation unit")]
    MissingContinuation { index: usize },

    #[error("sequence is longer than its codepoint needs")]
    Overlong,

    #[error("high surrogate is not followed by a low surrogate")]
    LoneHighSurrogate,

    #[error("low surrogate is not preceded by a high surrogate")]
    LoneLowSurrogate,

    #[error("decoded value {0:#X} is not a Unicode scalar value")]
    NotAScalar(u32),
}

impl CodecError {
    pub(crate) const fn malformed(form: Form, reason: Malformation) -> Self {
        Self::MalformedSequence { form, reason }
    }
}
