use thiserror::Error;

/// Faults reported by the codec.
///
/// The scanner faults carry `valid_runes`, the number of runes that were
/// validated before the fault was hit, so callers can still use the prefix.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    #[error("invalid UTF-8 lead byte {byte:#04x} at byte {offset}")]
    MalformedLeadByte {
        offset: usize,
        byte: u8,
        valid_runes: usize,
    },

    #[error("null terminator in the middle of a UTF-8 rune at byte {offset}")]
    TruncatedRune { offset: usize, valid_runes: usize },

    #[error("invalid byte {byte:#04x} in a UTF-8 rune at byte {offset}")]
    MalformedContinuation {
        offset: usize,
        byte: u8,
        valid_runes: usize,
    },

    #[error("invalid UTF-32 codepoint {codepoint:#x} at index {index}")]
    InvalidCodepoint { index: usize, codepoint: u32 },

    #[error("output buffer is absent")]
    OutputBufferAbsent,

    #[error("output buffer overflow: {required} units needed past {written}, capacity {capacity}")]
    OutputBufferOverflow {
        capacity: usize,
        written: usize,
        required: usize,
    },
}

impl CodecError {
    /// Runes validated before a scanner fault, `None` for every other fault.
    pub const fn valid_runes(&self) -> Option<usize> {
        match *self {
            CodecError::MalformedLeadByte { valid_runes, .. }
            | CodecError::TruncatedRune { valid_runes, .. }
            | CodecError::MalformedContinuation { valid_runes, .. } => Some(valid_runes),
            _ => None,
        }
    }
}
