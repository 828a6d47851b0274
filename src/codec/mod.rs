//! # Block Codec
//!
//! Packs a symbol grid into bytes with a fixed 3-bit code per symbol, and
//! unpacks it again.
//!
//! ## Stream Layout
//!
//! ```text
//! row 0:  ink ink ... ink LineEnd
//! row 1:  ink ink ... ink LineEnd
//! ...
//!         StreamEnd  filler filler ...
//! ```
//!
//! Bits accumulate in 24-bit blocks; each full block becomes 3 bytes, so the
//! output length is always a multiple of 3. The `StreamEnd` sentinel lets the
//! decoder stop without any length header.
//!
//! ## Modules
//!
//! - [`symbol`]: Alphabet and code tables
//! - [`bits`]: 24-bit block buffer and bit reader
//! - [`encoder`]: Symbol stream → bytes
//! - [`decoder`]: Bytes → symbol-grid text

pub mod bits;
pub mod decoder;
pub mod encoder;
pub mod symbol;

pub use decoder::{LEGACY_MIN_WIDTH, PaddingMode, decode, decode_symbols};
pub use encoder::{Encoder, FILLER_RUN, encode, encode_text};
pub use symbol::{Ink, Symbol};
