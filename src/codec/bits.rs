//! # Bit Buffer and Bit Reader
//!
//! The encoder accumulates bits into a buffer bounded at one 24-bit block.
//! A full block is flushed as three bytes.
//!
//! ## Block Layout
//!
//! Appending bits b0, b1, ..., b23 and flushing produces:
//!
//! ```text
//! reverse digit string      b23 b22 ... b1 b0        (b23 = MSB)
//! as unsigned integer       Σ bk << k
//! little-endian bytes       [b7..b0] [b15..b8] [b23..b16]
//! ```
//!
//! i.e. bit k of the block lands in byte `k / 8` at bit position `k % 8`.
//! The buffer stores bits at exactly that position, so a flush is a plain
//! little-endian split with no explicit reversal step.
//!
//! The same layout makes the whole byte sequence readable as one
//! least-significant-bit-first stream, which is what [`BitReader`] does.

/// Bits per block.
pub const BLOCK_BITS: usize = 24;

/// Bytes per block.
pub const BLOCK_BYTES: usize = BLOCK_BITS / 8;

/// Append-only bit accumulator holding at most one block.
#[derive(Debug, Clone, Default)]
pub struct BitBuffer {
    bits: u32,
    len: usize,
}

impl BitBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of bits currently held.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == BLOCK_BITS
    }

    /// Append one bit.
    ///
    /// # Panics
    ///
    /// Panics if the buffer already holds a full block. Callers flush first.
    #[inline]
    pub fn push(&mut self, bit: bool) {
        assert!(self.len < BLOCK_BITS, "bit buffer overflow");
        if bit {
            self.bits |= 1 << self.len;
        }
        self.len += 1;
    }

    /// Append the low `width` bits of `code`, most significant first.
    /// `width` is at most 8.
    pub fn push_code(&mut self, code: u8, width: u8) {
        for shift in (0..width).rev() {
            self.push((code >> shift) & 1 == 1);
        }
    }

    /// Convert a full block into three bytes and clear the buffer.
    ///
    /// Returns `None` (and keeps the bits) unless the buffer is full.
    pub fn flush(&mut self) -> Option<[u8; BLOCK_BYTES]> {
        if !self.is_full() {
            return None;
        }
        let [b0, b1, b2, _] = self.bits.to_le_bytes();
        self.clear();
        Some([b0, b1, b2])
    }

    /// Drop any pending bits.
    pub fn clear(&mut self) {
        self.bits = 0;
        self.len = 0;
    }
}

/// Least-significant-bit-first reader over a byte slice.
///
/// Reads past the end of the data return `false`, matching the zero digits a
/// left-padded binary rendering of the byte sequence would supply.
pub struct BitReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> BitReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Bit offset of the next read.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bit at absolute offset `index`.
    #[inline]
    pub fn bit_at(data: &[u8], index: usize) -> bool {
        data.get(index / 8)
            .is_some_and(|&byte| (byte >> (index % 8)) & 1 == 1)
    }

    #[inline]
    pub fn read(&mut self) -> bool {
        let bit = Self::bit_at(self.data, self.pos);
        self.pos += 1;
        bit
    }

    /// Read `width` bits, first bit read becoming the most significant.
    pub fn read_code(&mut self, width: u8) -> u8 {
        (0..width).fold(0u8, |code, _| (code << 1) | self.read() as u8)
    }
}

/// Number of significant bits in the little-endian integer formed by `data`.
pub fn significant_bits(data: &[u8]) -> usize {
    data.iter()
        .rposition(|&byte| byte != 0)
        .map(|i| i * 8 + (8 - data[i].leading_zeros() as usize))
        .unwrap_or(0)
}

// ============================================================================
// TESTS
// ============================================================================
