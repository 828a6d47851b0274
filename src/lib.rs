//! # Inkgrid - ASCII Art Block Codec
//!
//! Inkgrid renders raster images as a coarse grid of five brightness
//! characters and packs that grid into a compact byte stream. It provides:
//!
//! - **Tiling**: Aspect-corrected tile grid with per-tile mean brightness
//! - **Block codec**: 3 bits per symbol, 24-bit blocks, sentinel-terminated
//! - **Canvas rendering**: Draw a text grid back onto an image for display
//!
//! ## Quick Start
//!
//! ```no_run
//! use inkgrid::{codec, config::TileConfig, render};
//! use std::path::Path;
//!
//! // Load and convert to grayscale
//! let image = render::open_luma(Path::new("photo.jpg"))?;
//!
//! // 120 columns, Courier aspect ratio
//! let config = TileConfig::new(120);
//!
//! // Tile + pack
//! let bytes = render::encode_image(&image, &config)?;
//! std::fs::write("encoded_image.asc", &bytes)?;
//!
//! // Unpack
//! let text = codec::decode(&bytes, codec::PaddingMode::default())?;
//! print!("{}", text);
//!
//! # Ok::<(), inkgrid::InkgridError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`codec`] | Alphabet, bit buffer, encoder, decoder |
//! | [`render`] | Image loading and tiling |
//! | [`preview`] | Text-to-image canvas rendering |
//! | [`config`] | Tile and canvas settings |
//! | [`error`] | Error types |
//!
//! ## Alphabet
//!
//! `@ # + - .` from darkest to lightest, one character per tile.

pub mod codec;
pub mod config;
pub mod error;
pub mod preview;
pub mod render;

// Re-exports for convenience
pub use config::{CanvasConfig, TileConfig};
pub use error::InkgridError;
