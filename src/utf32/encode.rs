use crate::error::CodecError;
use crate::utf32::{bytelen, cp_bytesize, terminated};
use crate::utf8::{
    CONTINUATION_BITS, CONTINUATION_MASK, FOUR_BYTES_BITS, ONE_BYTE_BITS, THREE_BYTES_BITS,
    TWO_BYTES_BITS,
};

const LEAD_BITS: [u8; 4] = [ONE_BYTE_BITS, TWO_BYTES_BITS, THREE_BYTES_BITS, FOUR_BYTES_BITS];

/// Encodes one codepoint into `out`, most significant bits first.
/// Returns the rune width, or `None` when the codepoint has no encoding.
#[inline]
pub fn encode_rune(codepoint: u32, out: &mut [u8; 4]) -> Option<usize> {
    let size = match cp_bytesize(codepoint) {
        0 => return None,
        n => n,
    };
    // the width check above leaves the high bits of each cast free for the markers
    out[0] = LEAD_BITS[size - 1] | (codepoint >> (6 * (size - 1))) as u8;
    for (n, byte) in out[1..size].iter_mut().enumerate() {
        let shift = 6 * (size - 2 - n);
        *byte = CONTINUATION_BITS | ((codepoint >> shift) as u8 & !CONTINUATION_MASK);
    }
    Some(size)
}

/// Like [`encode_rune`], but logs the fault and returns 0.
pub fn utf32_cp_to_utf8_rune(codepoint: u32, out: &mut [u8; 4]) -> usize {
    encode_rune(codepoint, out).unwrap_or_else(|| {
        log::error!("utf32_cp_to_utf8_rune: invalid UTF-32 codepoint {codepoint:#x}");
        0
    })
}

/// Encodes the null-terminated `input` into `out`, keeping the last byte of
/// `out` for the terminator. Returns the number of bytes written.
///
/// Runes are copied whole: a rune that does not fit is an overflow, and the
/// output is terminated after the last rune that did.
pub fn encode_into(input: &[u32], out: &mut [u8]) -> Result<usize, CodecError> {
    let capacity = out
        .len()
        .checked_sub(1)
        .ok_or(CodecError::OutputBufferAbsent)?;
    encode_bounded(input, out, capacity, false)
}

/// `capacity` must be below `out.len()`. With `skip_invalid`, codepoints
/// without an encoding are logged and left out instead of aborting.
fn encode_bounded(
    input: &[u32],
    out: &mut [u8],
    capacity: usize,
    skip_invalid: bool,
) -> Result<usize, CodecError> {
    let mut scratch = [0u8; 4];
    let mut written = 0;
    let result = terminated(input)
        .iter()
        .enumerate()
        .try_for_each(|(index, &codepoint)| {
            let Some(size) = encode_rune(codepoint, &mut scratch) else {
                let error = CodecError::InvalidCodepoint { index, codepoint };
                if skip_invalid {
                    log::error!("utf8_encode: {error}");
                    return Ok(());
                }
                return Err(error);
            };
            let end = written + size;
            if end > capacity {
                return Err(CodecError::OutputBufferOverflow {
                    capacity,
                    written,
                    required: size,
                });
            }
            out[written..end].copy_from_slice(&scratch[..size]);
            written = end;
            Ok(())
        });
    out[written] = 0;
    result.map(|()| written)
}

/// Encodes at most `bytelen` bytes into `out` and terminates them.
/// Invalid codepoints are logged and skipped. Returns the number of bytes
/// written, or 0 after logging an absent or overflowing output.
pub fn utf8_encode(input: &[u32], out: &mut [u8], bytelen: usize) -> usize {
    let Some(slots) = out.len().checked_sub(1) else {
        log::error!("utf8_encode: {}", CodecError::OutputBufferAbsent);
        return 0;
    };
    encode_bounded(input, out, bytelen.min(slots), true).unwrap_or_else(|error| {
        log::error!("utf8_encode: {error}");
        0
    })
}

/// Encodes `input` into an exactly sized byte vector.
pub fn encode(input: &[u32]) -> Result<Vec<u8>, CodecError> {
    let mut out = vec![0; bytelen(input)? + 1];
    let written = encode_into(input, &mut out)?;
    out.truncate(written);
    Ok(out)
}
