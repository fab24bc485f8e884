pub mod decode;
pub mod scan;

pub(crate) const ONE_BYTE_MASK: u8 = 0x80;
pub(crate) const ONE_BYTE_BITS: u8 = 0x00;
pub(crate) const TWO_BYTES_MASK: u8 = 0xE0;
pub(crate) const TWO_BYTES_BITS: u8 = 0xC0;
pub(crate) const THREE_BYTES_MASK: u8 = 0xF0;
pub(crate) const THREE_BYTES_BITS: u8 = 0xE0;
pub(crate) const FOUR_BYTES_MASK: u8 = 0xF8;
pub(crate) const FOUR_BYTES_BITS: u8 = 0xF0;
pub(crate) const CONTINUATION_MASK: u8 = 0xC0;
pub(crate) const CONTINUATION_BITS: u8 = 0x80;

/// `(mask, bits)` per rune width, narrowest mask first.
const LEAD_PATTERNS: [(u8, u8); 4] = [
    (ONE_BYTE_MASK, ONE_BYTE_BITS),
    (TWO_BYTES_MASK, TWO_BYTES_BITS),
    (THREE_BYTES_MASK, THREE_BYTES_BITS),
    (FOUR_BYTES_MASK, FOUR_BYTES_BITS),
];

/// Size in bytes of the rune introduced by the lead byte `byte`, or 0 when
/// `byte` cannot start a rune.
#[inline]
pub const fn rune_size(byte: u8) -> usize {
    let mut width = 0;
    while width < LEAD_PATTERNS.len() {
        let (mask, bits) = LEAD_PATTERNS[width];
        if byte & mask == bits {
            return width + 1;
        }
        width += 1;
    }
    0
}

/// The string part of a null-terminated buffer: everything before the first
/// `0x00`, or the whole slice when it carries no terminator.
#[inline]
pub(crate) fn terminated(input: &[u8]) -> &[u8] {
    match input.iter().position(|&byte| byte == 0) {
        Some(end) => &input[..end],
        None => input,
    }
}

/// A single UTF-8 rune, built from its lead byte and filled one
/// continuation byte at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rune {
    full_length: u8,
    current_length: u8,
    bytes: [u8; 4],
}

impl Rune {
    #[inline]
    pub(crate) const fn build(byte: u8) -> Option<Self> {
        let full_length = match rune_size(byte) {
            0 => return None,
            n => n,
        } as u8;
        let mut bytes: [u8; 4] = [0; 4];
        bytes[0] = byte;
        Some(Self {
            full_length,
            current_length: 1,
            bytes,
        })
    }

    #[inline]
    pub(crate) fn add_point(&mut self, point: u8) -> bool {
        if self.is_complete() {
            return false;
        }
        if point & CONTINUATION_MASK != CONTINUATION_BITS {
            return false;
        }
        self.bytes[self.current_length as usize] = point;
        self.current_length += 1;
        true
    }

    #[inline]
    pub(crate) const fn is_complete(&self) -> bool {
        self.current_length == self.full_length
    }

    /// Declared width of the rune, taken from its lead byte.
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(&self) -> usize {
        self.full_length as usize
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.current_length as usize]
    }

    /// Reassembles the codepoint. Only meaningful once the rune is complete.
    #[inline]
    pub fn codepoint(&self) -> u32 {
        let payload = |index: usize| (self.bytes[index] & !CONTINUATION_MASK) as u32;
        let lead = self.bytes[0];
        match self.full_length {
            1 => (lead & !ONE_BYTE_MASK) as u32,
            2 => ((lead & !TWO_BYTES_MASK) as u32) << 6 | payload(1),
            3 => ((lead & !THREE_BYTES_MASK) as u32) << 12 | payload(1) << 6 | payload(2),
            4 => {
                ((lead & !FOUR_BYTES_MASK) as u32) << 18
                    | payload(1) << 12
                    | payload(2) << 6
                    | payload(3)
            }
            _ => unreachable!(),
        }
    }
}
