//! # Block Decoder
//!
//! Reads a byte sequence as one least-significant-bit-first stream and
//! decodes consecutive 3-bit groups until `StreamEnd`.
//!
//! ## Stream Length
//!
//! Conceptually the bytes form one little-endian integer, rendered in binary
//! and reversed. How many digits that rendering has is a [`PaddingMode`]:
//!
//! | Mode | Stream length |
//! |------|---------------|
//! | `ByteLength` | `8 × byte count` |
//! | `Legacy` | significant bits, at least [`LEGACY_MIN_WIDTH`] |
//!
//! Both modes agree on anything the encoder produced: every bit up to and
//! including the `StreamEnd` code is below the integer's highest set bit, and
//! scanning stops there. They only differ on truncated or corrupt input.

use std::fmt;
use std::str::FromStr;

use super::bits::{BitReader, significant_bits};
use super::symbol::{CODE_BITS, Symbol};
use crate::error::InkgridError;

/// Minimum binary width used by [`PaddingMode::Legacy`].
pub const LEGACY_MIN_WIDTH: usize = 23;

/// How many bits of the byte sequence are scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaddingMode {
    /// Every bit of every byte.
    #[default]
    ByteLength,
    /// Significant bits of the little-endian integer, padded to
    /// [`LEGACY_MIN_WIDTH`].
    Legacy,
}

impl PaddingMode {
    /// Stream length in bits for `data`.
    pub fn stream_bits(self, data: &[u8]) -> usize {
        match self {
            PaddingMode::ByteLength => data.len() * 8,
            PaddingMode::Legacy => significant_bits(data).max(LEGACY_MIN_WIDTH),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PaddingMode::ByteLength => "byte-length",
            PaddingMode::Legacy => "legacy",
        }
    }
}

impl fmt::Display for PaddingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PaddingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "byte-length" | "bytes" => Ok(PaddingMode::ByteLength),
            "legacy" => Ok(PaddingMode::Legacy),
            _ => Err(format!(
                "Unknown padding mode '{}'. Available: byte-length, legacy",
                s
            )),
        }
    }
}

/// Decode a byte sequence into the symbol-grid text.
///
/// ```
/// use inkgrid::codec::{decode, encode_text, PaddingMode};
///
/// let bytes = encode_text("..\n@@\n").unwrap();
/// assert_eq!(decode(&bytes, PaddingMode::default()).unwrap(), "..\n@@\n");
/// ```
pub fn decode(data: &[u8], padding: PaddingMode) -> Result<String, InkgridError> {
    let symbols = decode_symbols(data, padding)?;
    let mut text = String::with_capacity(symbols.len());
    for symbol in symbols {
        match symbol {
            Symbol::Ink(ink) => text.push(ink.as_char()),
            Symbol::LineEnd => text.push('\n'),
            Symbol::StreamEnd => break,
        }
    }
    Ok(text)
}

/// Decode a byte sequence into symbols, up to and including `StreamEnd`.
pub fn decode_symbols(data: &[u8], padding: PaddingMode) -> Result<Vec<Symbol>, InkgridError> {
    let total = padding.stream_bits(data);
    let width = CODE_BITS as usize;
    let mut reader = BitReader::new(data);
    let mut symbols = Vec::with_capacity(total / width);

    while reader.position() + width <= total {
        let offset = reader.position();
        let code = reader.read_code(CODE_BITS);
        let symbol = Symbol::from_code(code).ok_or(InkgridError::InvalidCode { code, offset })?;
        symbols.push(symbol);
        if symbol == Symbol::StreamEnd {
            log::debug!("StreamEnd at bit {}, {} bits unread", offset, total - offset - width);
            return Ok(symbols);
        }
    }

    Err(InkgridError::MissingStreamEnd { bits: total })
}

// ============================================================================
// TESTS
// ============================================================================
