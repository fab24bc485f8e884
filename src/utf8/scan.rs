use std::iter::FusedIterator;

use crate::error::CodecError;
use crate::utf8::{terminated, Rune};

/// Walks a null-terminated UTF-8 buffer rune by rune.
///
/// Yields every validated rune, then at most one fault. Iteration stops at
/// the terminator or after the fault.
#[derive(Clone, Debug)]
pub struct Runes<'a> {
    input: &'a [u8],
    offset: usize,
    count: usize,
    failed: bool,
}

pub fn runes(input: &[u8]) -> Runes<'_> {
    Runes {
        input: terminated(input),
        offset: 0,
        count: 0,
        failed: false,
    }
}

impl Runes<'_> {
    /// Byte offset of the next rune.
    pub const fn offset(&self) -> usize {
        self.offset
    }

    fn next_rune(&self, lead: u8) -> Result<Rune, CodecError> {
        let Some(mut rune) = Rune::build(lead) else {
            return Err(CodecError::MalformedLeadByte {
                offset: self.offset,
                byte: lead,
                valid_runes: self.count,
            });
        };
        for offset in self.offset + 1..self.offset + rune.len() {
            match self.input.get(offset) {
                None => {
                    return Err(CodecError::TruncatedRune {
                        offset,
                        valid_runes: self.count,
                    })
                }
                Some(&byte) if !rune.add_point(byte) => {
                    return Err(CodecError::MalformedContinuation {
                        offset,
                        byte,
                        valid_runes: self.count,
                    })
                }
                Some(_) => {}
            }
        }
        Ok(rune)
    }
}

impl Iterator for Runes<'_> {
    type Item = Result<Rune, CodecError>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let &lead = self.input.get(self.offset)?;
        let item = self.next_rune(lead);
        match item {
            Ok(ref rune) => {
                self.offset += rune.len();
                self.count += 1;
            }
            Err(_) => self.failed = true,
        }
        Some(item)
    }
}

impl FusedIterator for Runes<'_> {}

/// Number of codepoints in a null-terminated UTF-8 buffer.
pub fn scan(input: &[u8]) -> Result<usize, CodecError> {
    runes(input).try_fold(0, |count, rune| rune.map(|_| count + 1))
}

/// Codepoint count of `input`. A fault is logged and the count of runes
/// before it is returned.
pub fn utf8_strlen(input: &[u8]) -> usize {
    scan(input).unwrap_or_else(|error| {
        log::error!("utf8_strlen: {error}");
        error.valid_runes().unwrap_or(0)
    })
}
