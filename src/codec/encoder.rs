//! # Block Encoder
//!
//! Serializes a symbol stream into bytes, one 24-bit block at a time.
//!
//! ## Append
//!
//! ```text
//! append(symbol):
//!   if buffer holds 24 bits → flush 3 bytes, clear
//!   push symbol's code
//! ```
//!
//! The flush check runs *before* the new code is pushed. Alphabet codes are
//! 3 bits and 24 is a multiple of 3, so during normal appends the buffer is
//! always block-aligned.
//!
//! ## Finalize
//!
//! The tail is pushed out by appending [`FILLER_RUN`] one-bit filler codes.
//! Whatever the buffer held (0-24 bits), at least one flush happens within
//! that run. Bits still pending afterwards are filler only and are dropped,
//! because `StreamEnd` was appended before the first filler bit.

use super::bits::{BLOCK_BITS, BitBuffer};
use super::symbol::{CODE_BITS, Symbol};
use crate::error::InkgridError;

/// Number of filler bits appended by [`Encoder::finalize`].
pub const FILLER_RUN: usize = BLOCK_BITS;

/// Code and width of the filler pseudo-symbol.
const FILLER_CODE: u8 = 0b0;
const FILLER_BITS: u8 = 1;

/// A single encode session.
///
/// ```
/// use inkgrid::codec::{Encoder, Ink, Symbol};
///
/// let mut encoder = Encoder::new();
/// encoder.append(Symbol::Ink(Ink::Darkest));
/// encoder.append(Symbol::LineEnd);
/// encoder.append(Symbol::StreamEnd);
/// let bytes = encoder.finalize();
/// assert_eq!(bytes.len(), 3);
/// ```
#[derive(Debug, Default)]
pub struct Encoder {
    buffer: BitBuffer,
    output: Vec<u8>,
}

impl Encoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one alphabet symbol.
    pub fn append(&mut self, symbol: Symbol) {
        self.push_code(symbol.code(), CODE_BITS);
    }

    /// Append one text-artifact character (`\n` or an ink character).
    pub fn append_char(&mut self, ch: char) -> Result<(), InkgridError> {
        self.append(Symbol::from_char(ch)?);
        Ok(())
    }

    /// Append every symbol from an iterator.
    pub fn extend<I>(&mut self, symbols: I)
    where
        I: IntoIterator<Item = Symbol>,
    {
        for symbol in symbols {
            self.append(symbol);
        }
    }

    /// Bytes flushed so far.
    pub fn output(&self) -> &[u8] {
        &self.output
    }

    /// Bits waiting in the buffer.
    pub fn pending_bits(&self) -> usize {
        self.buffer.len()
    }

    /// Flush the tail with filler bits and hand over the byte sequence.
    pub fn finalize(mut self) -> Vec<u8> {
        for _ in 0..FILLER_RUN {
            self.push_code(FILLER_CODE, FILLER_BITS);
        }
        log::debug!(
            "Finalized {} bytes, discarded {} filler bits",
            self.output.len(),
            self.buffer.len()
        );
        self.output
    }

    fn push_code(&mut self, code: u8, width: u8) {
        if let Some(block) = self.buffer.flush() {
            self.output.extend_from_slice(&block);
        }
        self.buffer.push_code(code, width);
    }
}

/// Encode a complete symbol stream (which must already end in `StreamEnd`).
pub fn encode<I>(symbols: I) -> Vec<u8>
where
    I: IntoIterator<Item = Symbol>,
{
    let mut encoder = Encoder::new();
    encoder.extend(symbols);
    encoder.finalize()
}

/// Pack a symbol-grid text artifact.
///
/// Newlines become `LineEnd`, a `StreamEnd` is appended after the last
/// character. Every character is validated before any bits are produced, so
/// an `UnknownSymbol` error never leaves a partial byte sequence behind.
///
/// ```
/// use inkgrid::codec::{decode, encode_text, PaddingMode};
///
/// let bytes = encode_text("@#\n+-\n").unwrap();
/// assert_eq!(bytes.len(), 3);
/// assert_eq!(decode(&bytes, PaddingMode::ByteLength).unwrap(), "@#\n+-\n");
/// ```
pub fn encode_text(text: &str) -> Result<Vec<u8>, InkgridError> {
    let symbols = text
        .chars()
        .map(Symbol::from_char)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(encode(
        symbols.into_iter().chain(std::iter::once(Symbol::StreamEnd)),
    ))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::symbol::Ink;
    use pretty_assertions::assert_eq;

    fn ink(index: usize) -> Symbol {
        Symbol::Ink(Ink::from_index(index).unwrap())
    }

    #[test]
    fn test_flush_happens_before_append() {
        let mut encoder = Encoder::new();
        for _ in 0..8 {
            encoder.append(ink(0));
        }
        // Exactly 24 bits pending, nothing flushed yet
        assert_eq!(encoder.pending_bits(), 24);
        assert!(encoder.output().is_empty());

        encoder.append(ink(1));
        assert_eq!(encoder.output().len(), 3);
        assert_eq!(encoder.pending_bits(), 3);
    }

    #[test]
    fn test_two_by_two_grid_bytes() {
        // @# LE +- LE SE = 000 001 101 010 011 101 111, then 3 filler zeros
        let bytes = encode([
            ink(0),
            ink(1),
            Symbol::LineEnd,
            ink(2),
            ink(3),
            Symbol::LineEnd,
            Symbol::StreamEnd,
        ]);
        let digits = "000001101010011101111000";
        let reversed: String = digits.chars().rev().collect();
        let value = u32::from_str_radix(&reversed, 2).unwrap().to_le_bytes();
        assert_eq!(bytes, value[..3].to_vec());
    }

    #[test]
    fn test_finalize_empty_session() {
        // 24 fillers fill the buffer but never trigger a flush
        assert!(Encoder::new().finalize().is_empty());
    }

    #[test]
    fn test_finalize_aligned_buffer() {
        // 8 symbols = one full block pending; the first filler flushes it
        let mut encoder = Encoder::new();
        encoder.extend(std::iter::repeat_n(ink(4), 7));
        encoder.append(Symbol::StreamEnd);
        assert_eq!(encoder.finalize().len(), 3);
    }

    #[test]
    fn test_output_is_block_aligned() {
        for count in 0..100 {
            let mut encoder = Encoder::new();
            encoder.extend(std::iter::repeat_n(ink(count % 5), count));
            encoder.append(Symbol::StreamEnd);
            let bytes = encoder.finalize();
            assert_eq!(bytes.len() % 3, 0, "{} symbols gave {} bytes", count, bytes.len());
            // Every symbol bit, StreamEnd included, made it into the output
            assert!(bytes.len() * 8 >= (count + 1) * 3);
        }
    }

    #[test]
    fn test_encode_text_rejects_unknown_symbol() {
        let err = encode_text("@@\n@x\n").unwrap_err();
        assert!(matches!(err, InkgridError::UnknownSymbol('x')));
    }

    #[test]
    fn test_append_char() {
        let mut encoder = Encoder::new();
        encoder.append_char('@').unwrap();
        encoder.append_char('\n').unwrap();
        assert!(encoder.append_char('l').is_err());
        assert_eq!(encoder.pending_bits(), 6);
    }
}
