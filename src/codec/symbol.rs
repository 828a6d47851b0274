//! # Alphabet and Code Tables
//!
//! Five ink levels plus two control symbols, each with a fixed 3-bit code.
//!
//! ```text
//! Symbol     Char   Code
//! ─────────  ────   ────
//! Ink 0       @     000   darkest
//! Ink 1       #     001
//! Ink 2       +     010
//! Ink 3       -     011
//! Ink 4       .     100   lightest
//! LineEnd     \n    101
//! (unused)          110
//! StreamEnd         111
//! Filler            0     (1 bit, finalization only)
//! ```
//!
//! Codes are written into the bit stream left digit first, so `101` emits
//! the bits 1, 0, 1 in that order.

use crate::error::InkgridError;

/// Width of every alphabet code in bits.
pub const CODE_BITS: u8 = 3;

/// One quantized brightness level, darkest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ink {
    Darkest,
    Dark,
    Mid,
    Light,
    Lightest,
}

impl Ink {
    /// All levels, darkest to lightest.
    pub const ALL: [Ink; 5] = [Ink::Darkest, Ink::Dark, Ink::Mid, Ink::Light, Ink::Lightest];

    /// Map a level index (0 = darkest) to an ink. Returns `None` above 4.
    pub fn from_index(index: usize) -> Option<Ink> {
        Self::ALL.get(index).copied()
    }

    /// Quantize an 8-bit brightness value: `floor(value * 4 / 255)`.
    ///
    /// ```
    /// use inkgrid::codec::Ink;
    ///
    /// assert_eq!(Ink::from_brightness(0), Ink::Darkest);
    /// assert_eq!(Ink::from_brightness(63), Ink::Darkest);
    /// assert_eq!(Ink::from_brightness(64), Ink::Dark);
    /// assert_eq!(Ink::from_brightness(255), Ink::Lightest);
    /// ```
    pub fn from_brightness(value: u8) -> Ink {
        match value as u32 * 4 / 255 {
            0 => Ink::Darkest,
            1 => Ink::Dark,
            2 => Ink::Mid,
            3 => Ink::Light,
            _ => Ink::Lightest,
        }
    }

    /// Printable character for this level.
    pub fn as_char(self) -> char {
        match self {
            Ink::Darkest => '@',
            Ink::Dark => '#',
            Ink::Mid => '+',
            Ink::Light => '-',
            Ink::Lightest => '.',
        }
    }

    /// Inverse of [`Ink::as_char`].
    pub fn from_char(ch: char) -> Option<Ink> {
        match ch {
            '@' => Some(Ink::Darkest),
            '#' => Some(Ink::Dark),
            '+' => Some(Ink::Mid),
            '-' => Some(Ink::Light),
            '.' => Some(Ink::Lightest),
            _ => None,
        }
    }
}

/// A member of the codec alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Ink(Ink),
    /// Row separator
    LineEnd,
    /// Stream terminator
    StreamEnd,
}

impl Symbol {
    /// Fixed 3-bit code for this symbol.
    pub fn code(self) -> u8 {
        match self {
            Symbol::Ink(Ink::Darkest) => 0b000,
            Symbol::Ink(Ink::Dark) => 0b001,
            Symbol::Ink(Ink::Mid) => 0b010,
            Symbol::Ink(Ink::Light) => 0b011,
            Symbol::Ink(Ink::Lightest) => 0b100,
            Symbol::LineEnd => 0b101,
            Symbol::StreamEnd => 0b111,
        }
    }

    /// Exact inverse of [`Symbol::code`]. `0b110` and anything wider than
    /// three bits have no symbol.
    pub fn from_code(code: u8) -> Option<Symbol> {
        match code {
            0b000 => Some(Symbol::Ink(Ink::Darkest)),
            0b001 => Some(Symbol::Ink(Ink::Dark)),
            0b010 => Some(Symbol::Ink(Ink::Mid)),
            0b011 => Some(Symbol::Ink(Ink::Light)),
            0b100 => Some(Symbol::Ink(Ink::Lightest)),
            0b101 => Some(Symbol::LineEnd),
            0b111 => Some(Symbol::StreamEnd),
            _ => None,
        }
    }

    /// Map a text-artifact character to a symbol. Newline is `LineEnd`;
    /// `StreamEnd` has no textual form.
    pub fn from_char(ch: char) -> Result<Symbol, InkgridError> {
        if ch == '\n' {
            return Ok(Symbol::LineEnd);
        }
        Ink::from_char(ch)
            .map(Symbol::Ink)
            .ok_or(InkgridError::UnknownSymbol(ch))
    }
}

impl From<Ink> for Symbol {
    fn from(ink: Ink) -> Self {
        Symbol::Ink(ink)
    }
}

// ============================================================================
// TESTS
// ============================================================================
