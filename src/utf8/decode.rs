use crate::error::CodecError;
use crate::utf8::scan::{runes, scan};

/// Decodes `input` into `out`, keeping the last slot of `out` for the
/// terminator. Returns the number of codepoints written.
///
/// Decoding stops at the end of the input or when `out` is full. On a
/// malformed input the valid prefix is decoded and terminated before the
/// fault is returned.
pub fn decode_into(input: &[u8], out: &mut [u32]) -> Result<usize, CodecError> {
    let capacity = out
        .len()
        .checked_sub(1)
        .ok_or(CodecError::OutputBufferAbsent)?;
    decode_bounded(input, out, capacity)
}

/// `capacity` must be below `out.len()`.
fn decode_bounded(input: &[u8], out: &mut [u32], capacity: usize) -> Result<usize, CodecError> {
    let (bound, fault) = match scan(input) {
        Ok(count) => (count, None),
        Err(error) => (error.valid_runes().unwrap_or(0), Some(error)),
    };
    let limit = bound.min(capacity);
    if limit < bound {
        log::debug!("decode: output capacity {capacity} reached before {bound} runes");
    }
    let mut written = 0;
    let decoded = runes(input).take(limit).map_while(Result::ok);
    for (slot, rune) in out.iter_mut().zip(decoded) {
        *slot = rune.codepoint();
        written += 1;
    }
    out[written] = 0;
    match fault {
        Some(error) => Err(error),
        None => Ok(written),
    }
}

/// Decodes at most `num_runes` codepoints into `out` and terminates them.
/// Returns the number of codepoints written; faults are logged.
pub fn utf8_decode(input: &[u8], out: &mut [u32], num_runes: usize) -> usize {
    let Some(slots) = out.len().checked_sub(1) else {
        log::error!("utf8_decode: {}", CodecError::OutputBufferAbsent);
        return 0;
    };
    let capacity = num_runes.min(slots);
    match decode_bounded(input, out, capacity) {
        Ok(written) => written,
        Err(error) => {
            let valid_runes = error.valid_runes().unwrap_or(0);
            if valid_runes < capacity {
                log::error!("utf8_decode: {error}");
            } else {
                log::debug!("utf8_decode: {error} past capacity {capacity}");
            }
            valid_runes.min(capacity)
        }
    }
}

/// Decodes `input` into an exactly sized codepoint vector.
pub fn decode(input: &[u8]) -> Result<Vec<u32>, CodecError> {
    let mut out = vec![0; scan(input)? + 1];
    let written = decode_into(input, &mut out)?;
    out.truncate(written);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture;

    const OHAYO: [u32; 5] = [0x043E, 0x0445, 0x0430, 0x0439, 0x043E];

    #[test]
    fn cyrillic() {
        assert_eq!(decode("охайо".as_bytes()), Ok(OHAYO.to_vec()));
    }

    #[test]
    fn every_width() {
        assert_eq!(
            decode("A\u{e9}\u{20ac}\u{10348}".as_bytes()),
            Ok(vec![0x41, 0xE9, 0x20AC, 0x10348])
        );
    }

    #[test]
    fn writes_terminator() {
        let mut out = [u32::MAX; 7];
        assert_eq!(decode_into("охайо\0".as_bytes(), &mut out), Ok(5));
        assert_eq!(out[..6], [0x043E, 0x0445, 0x0430, 0x0439, 0x043E, 0]);
        assert_eq!(out[6], u32::MAX);
    }

    #[test]
    fn exact_capacity_does_not_overrun() {
        let mut out = [u32::MAX; 6];
        assert_eq!(utf8_decode("охайо".as_bytes(), &mut out, 5), 5);
        assert_eq!(out, [0x043E, 0x0445, 0x0430, 0x0439, 0x043E, 0]);
    }

    #[test]
    fn declared_capacity_limits_output() {
        let mut out = [u32::MAX; 8];
        assert_eq!(utf8_decode("охайо".as_bytes(), &mut out, 2), 2);
        assert_eq!(out[..3], [0x043E, 0x0445, 0]);
        assert_eq!(out[3], u32::MAX);
    }

    #[test]
    fn slice_limits_declared_capacity() {
        let mut out = [u32::MAX; 3];
        assert_eq!(utf8_decode("охайо".as_bytes(), &mut out, 5), 2);
        assert_eq!(out, [0x043E, 0x0445, 0]);
        assert_eq!(decode_into("охайо".as_bytes(), &mut out), Ok(2));
    }

    #[test]
    fn absent_output() {
        assert_eq!(
            decode_into(b"abc", &mut []),
            Err(CodecError::OutputBufferAbsent)
        );
        assert_eq!(utf8_decode(b"abc", &mut [], 3), 0);
    }

    #[test]
    fn truncated_lead() {
        let mut out = [u32::MAX; 2];
        assert_eq!(
            decode_into(b"\xE0\0", &mut out),
            Err(CodecError::TruncatedRune {
                offset: 1,
                valid_runes: 0
            })
        );
        assert_eq!(out[0], 0);
        assert_eq!(utf8_decode(b"\xE0\0", &mut out, 1), 0);
    }

    #[test]
    fn valid_prefix_survives_fault() {
        let mut out = [u32::MAX; 4];
        let result = decode_into(b"ab\x80c", &mut out);
        assert!(matches!(
            result,
            Err(CodecError::MalformedLeadByte { offset: 2, .. })
        ));
        assert_eq!(out[..3], [0x61, 0x62, 0]);
        assert_eq!(utf8_decode(b"ab\x80c", &mut out, 3), 2);
        assert_eq!(utf8_decode(b"ab\x80c", &mut out, 1), 1);
    }

    #[test]
    fn empty_input() {
        let mut out = [u32::MAX; 1];
        assert_eq!(decode_into(b"\0", &mut out), Ok(0));
        assert_eq!(out, [0]);
        assert_eq!(decode(b""), Ok(vec![]));
    }

    #[test]
    fn truncation_is_logged() {
        let mut out = [u32::MAX; 2];
        let (written, errors) = capture::errors(|| utf8_decode(b"\xE0\0", &mut out, 1));
        assert_eq!(written, 0);
        assert_eq!(
            errors,
            ["utf8_decode: null terminator in the middle of a UTF-8 rune at byte 1"]
        );
    }

    #[test]
    fn fault_past_capacity_is_not_an_error() {
        let mut out = [u32::MAX; 4];
        let (written, errors) = capture::errors(|| utf8_decode(b"ab\x80", &mut out, 1));
        assert_eq!(written, 1);
        assert_eq!(out[..2], [0x61, 0]);
        assert!(errors.is_empty());

        let (written, errors) = capture::errors(|| utf8_decode(b"ab\x80", &mut out, 3));
        assert_eq!(written, 2);
        assert_eq!(errors.len(), 1);
    }
}
