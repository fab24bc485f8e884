pub mod encode;

use crate::error::CodecError;

/// Largest codepoint the sizer accepts as a 4-byte rune.
///
/// This is the Unicode ceiling. It departs from the historical `0x10FFF`
/// ceiling, which the `narrow-ceiling` feature restores.
#[cfg(not(feature = "narrow-ceiling"))]
pub const MAX_CODEPOINT: u32 = 0x10FFFF;

/// Largest codepoint the sizer accepts as a 4-byte rune. This is the
/// historical ceiling, one hex digit short of the Unicode one.
#[cfg(feature = "narrow-ceiling")]
pub const MAX_CODEPOINT: u32 = 0x10FFF;

/// Number of bytes `codepoint` takes once encoded as UTF-8, or 0 when it is
/// above [`MAX_CODEPOINT`].
#[inline]
pub const fn cp_bytesize(codepoint: u32) -> usize {
    if codepoint <= 0x7F {
        1
    } else if codepoint <= 0x7FF {
        2
    } else if codepoint <= 0xFFFF {
        3
    } else if codepoint <= MAX_CODEPOINT {
        4
    } else {
        0
    }
}

#[inline]
pub(crate) fn terminated(input: &[u32]) -> &[u32] {
    match input.iter().position(|&codepoint| codepoint == 0) {
        Some(end) => &input[..end],
        None => input,
    }
}

/// Number of bytes the null-terminated `input` takes once encoded as UTF-8.
pub fn bytelen(input: &[u32]) -> Result<usize, CodecError> {
    terminated(input)
        .iter()
        .enumerate()
        .try_fold(0, |total, (index, &codepoint)| match cp_bytesize(codepoint) {
            0 => Err(CodecError::InvalidCodepoint { index, codepoint }),
            size => Ok(total + size),
        })
}

/// Like [`bytelen`], but logs the fault and returns 0.
pub fn utf32_bytelen(input: &[u32]) -> usize {
    bytelen(input).unwrap_or_else(|error| {
        log::error!("utf32_bytelen: {error}");
        0
    })
}
