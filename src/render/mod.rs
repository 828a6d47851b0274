//! # Rendering Module
//!
//! Turns raster images into ink symbol grids.
//!
//! ## Modules
//!
//! - [`luma`]: Image loading and BT.601 grayscale conversion
//! - [`tiler`]: Tile geometry and per-tile quantization
//!
//! ## Usage Example
//!
//! ```
//! use image::{GrayImage, Luma};
//! use inkgrid::codec::{decode, PaddingMode};
//! use inkgrid::config::TileConfig;
//! use inkgrid::render;
//!
//! // Dark left half, light right half
//! let image = GrayImage::from_fn(40, 40, |x, _| Luma([if x < 20 { 10 } else { 255 }]));
//! let config = TileConfig::new(4).with_scale(1.0);
//!
//! let bytes = render::encode_image(&image, &config).unwrap();
//! let text = decode(&bytes, PaddingMode::default()).unwrap();
//! assert_eq!(text, "@@..\n@@..\n@@..\n@@..\n");
//! ```

pub mod luma;
pub mod tiler;

use image::GrayImage;

use crate::codec::encode;
use crate::config::TileConfig;
use crate::error::InkgridError;

pub use luma::{open_luma, to_luma};
pub use tiler::{Symbols, TileGeometry, Tiler};

/// Tile an image and pack its symbol stream.
pub fn encode_image(image: &GrayImage, config: &TileConfig) -> Result<Vec<u8>, InkgridError> {
    let tiler = Tiler::new(image, config)?;
    Ok(encode(tiler.into_symbols()))
}

/// Tile an image into its text form without packing.
pub fn render_ascii(image: &GrayImage, config: &TileConfig) -> Result<String, InkgridError> {
    Ok(Tiler::new(image, config)?.to_text())
}
