//! # Error Types
//!
//! This module defines error types used throughout the inkgrid library.

use thiserror::Error;

/// Main error type for inkgrid operations
#[derive(Debug, Error)]
pub enum InkgridError {
    /// Requested grid does not fit into the image's pixel dimensions
    #[error(
        "Image too small: {columns} cols x {rows} rows requested from a {width}x{height} image"
    )]
    ImageTooSmall {
        columns: usize,
        rows: usize,
        width: u32,
        height: u32,
    },

    /// Encoder was handed a character outside the code table
    #[error("Unknown symbol {0:?}: not part of the ink alphabet")]
    UnknownSymbol(char),

    /// Decoder found a 3-bit group with no table entry
    #[error("Invalid code {code:03b} at bit offset {offset}")]
    InvalidCode { code: u8, offset: usize },

    /// Bit stream ran out before the end-of-stream marker
    #[error("Stream ended after {bits} bits without an end-of-stream marker")]
    MissingStreamEnd { bits: usize },

    /// Invalid tiling or canvas parameter
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Image decoding or encoding error
    #[error("Image error: {0}")]
    Image(String),

    /// Font loading error
    #[error("Font error: {0}")]
    Font(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
