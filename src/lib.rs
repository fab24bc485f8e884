#[cfg(test)]
mod capture;
pub mod error;
pub mod utf32;
pub mod utf8;

use std::ffi::OsString;

use itertools::Itertools;

pub use error::CodecError;
pub use utf32::encode::{
    encode, encode_into, encode_rune, utf32_cp_to_utf8_rune, utf8_encode,
};
pub use utf32::{bytelen, cp_bytesize, utf32_bytelen, MAX_CODEPOINT};
pub use utf8::decode::{decode, decode_into, utf8_decode};
pub use utf8::scan::{runes, scan, utf8_strlen, Runes};
pub use utf8::{rune_size, Rune};

pub fn inspect(
    argv: impl IntoIterator<Item = OsString>,
) -> Result<(), Box<dyn std::error::Error>> {
    let argv: Vec<OsString> = argv.into_iter().collect();
    if argv.is_empty() {
        if let Ok(exe) = std::env::current_exe() {
            eprintln!("Not enough arguments. Usage: {} [files]", exe.display());
        }
        return Err(std::io::Error::from(std::io::ErrorKind::InvalidInput).into());
    }
    for argument in argv.iter() {
        print!("{}: ", argument.to_string_lossy());
        match std::fs::read(std::path::Path::new(&argument)) {
            Ok(contents) => match describe(&contents) {
                Ok(report) => println!("{report}"),
                Err(error) => println!("{error}"),
            },
            Err(error) => {
                println!("{error}");
            }
        }
    }
    Ok(())
}

fn describe(contents: &[u8]) -> Result<String, CodecError> {
    let codepoints = decode(contents)?;
    let byte_count = bytelen(&codepoints)?;
    let round_trip = if encode(&codepoints)? == utf8::terminated(contents) {
        "round-trips"
    } else {
        "does not round-trip"
    };
    let listing = codepoints
        .iter()
        .format_with(" ", |codepoint, f| f(&format_args!("U+{codepoint:04X}")));
    Ok(format!(
        "{} runes, {byte_count} bytes, {round_trip}\n{listing}",
        codepoints.len()
    ))
}
