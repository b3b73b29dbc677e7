use std::fmt;

use itertools::Itertools;

use crate::error::{CodecError, Malformation};
use crate::utf::Form;

/// A fixed-width code unit of one encoding form.
pub trait CodeUnit: Copy + fmt::Binary {
    const BITS: usize;
    fn from_bits(value: u32) -> Self;
}

macro_rules! code_unit {
    ($($unit:ty),*) => {
        $(
            impl CodeUnit for $unit {
                const BITS: usize = <$unit>::BITS as usize;

                #[inline]
                fn from_bits(value: u32) -> Self {
                    value as $unit
                }
            }
        )*
    };
}

code_unit!(u8, u16, u32);

/// Renders units as zero-padded binary, one group per unit.
///
/// `{}` concatenates the groups, `{:#}` separates them with a space.
pub struct Bits<'a, U>(pub &'a [U]);

impl<U: CodeUnit> fmt::Display for Bits<'_, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = if f.alternate() { " " } else { "" };
        let groups = self.0.iter().format_with(separator, |unit, g| {
            g(&format_args!("{:0width$b}", unit, width = U::BITS))
        });
        write!(f, "{groups}")
    }
}

/// Parses a bit string back into units. Whitespace between digits is skipped.
pub fn parse_bits<U: CodeUnit>(form: Form, text: &str) -> Result<Vec<U>, CodecError> {
    let digits = text
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .map(|c| {
            c.to_digit(2)
                .ok_or_else(|| CodecError::malformed(form, Malformation::InvalidDigit(c)))
        })
        .collect::<Result<Vec<u32>, _>>()?;
    if digits.len() % U::BITS != 0 {
        return Err(CodecError::malformed(
            form,
            Malformation::PartialUnit(digits.len()),
        ));
    }
    let units = digits
        .chunks(U::BITS)
        .map(|chunk| U::from_bits(chunk.iter().fold(0, |acc, bit| (acc << 1) | bit)))
        .collect();
    Ok(units)
}
