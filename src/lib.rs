pub mod error;
pub mod utf;

use std::{error::Error, ffi::OsString, io::Write, path::Path};

pub use error::{CodecError, Malformation};
pub use utf::{
    is_valid_codepoint, Bits, Codec, CodeUnit, Codepoint, Form, Utf16, Utf16Sequence, Utf32,
    Utf32Sequence, Utf8, Utf8Sequence,
};

pub const DEMO_CODEPOINTS: [u32; 9] = [
    '我' as u32,
    'A' as u32,
    0x10000,
    0x10FFFF,
    0x7F,
    0x80,
    0x7FF,
    0x800,
    0xFFFF,
];

/// Prints every demonstration codepoint through each encoding form, then dumps
/// the raw bytes of every file named in `argv`.
///
/// A file that cannot be read is reported in the output and does not stop the
/// run.
pub fn transcode<I, W>(argv: I, out: &mut W) -> Result<(), Box<dyn Error>>
where
    I: IntoIterator<Item = OsString>,
    W: Write,
{
    log::debug!("transcoding {} demonstration codepoints", DEMO_CODEPOINTS.len());
    writeln!(out, "codepoint:")?;
    for codepoint in DEMO_CODEPOINTS {
        writeln!(out, "{codepoint}")?;
    }
    report::<Utf32, _>(out, &DEMO_CODEPOINTS)?;
    report::<Utf16, _>(out, &DEMO_CODEPOINTS)?;
    report::<Utf8, _>(out, &DEMO_CODEPOINTS)?;

    for argument in argv {
        write!(out, "{}: ", argument.to_string_lossy())?;
        match std::fs::read(Path::new(&argument)) {
            Ok(bytes) => {
                log::debug!("read {} bytes from {}", bytes.len(), argument.to_string_lossy());
                writeln!(out, "{bytes:?}")?;
            }
            Err(error) => {
                log::warn!("cannot read {}: {error}", argument.to_string_lossy());
                writeln!(out, "{error}")?;
            }
        }
    }
    Ok(())
}

/// Writes `<codepoint> <bits> <redecoded>` for each codepoint under the form's
/// heading.
fn report<C: Codec, W: Write>(out: &mut W, codepoints: &[u32]) -> Result<(), Box<dyn Error>> {
    writeln!(out, "{}:", C::FORM)?;
    for &codepoint in codepoints {
        let sequence = C::encode(codepoint)?;
        let decoded = C::decode(sequence.as_ref())?;
        writeln!(out, "{codepoint} {sequence} {}", decoded.value())?;
    }
    Ok(())
}
