//! # Configuration
//!
//! Typed settings for tiling images and drawing text canvases.
//!
//! ## Usage
//!
//! ```
//! use inkgrid::config::{CanvasConfig, TileConfig};
//!
//! let tiles = TileConfig::new(80);
//! assert_eq!(tiles.scale, TileConfig::DEFAULT_SCALE);
//!
//! let canvas = CanvasConfig::QHD;
//! println!("Canvas: {}x{} px, {} px font", canvas.width, canvas.height, canvas.font_size);
//! ```

use crate::error::InkgridError;

/// # Tile Configuration
///
/// Controls how an image is divided into character cells.
///
/// ## Geometry
///
/// ```text
/// tile_width  = image_width / columns
/// tile_height = tile_width / scale
/// rows        = floor(image_height / tile_height)
/// ```
///
/// Character cells are taller than they are wide, so `scale` (cell width over
/// cell height) stretches each tile vertically. 0.43 suits Courier-like
/// monospace fonts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileConfig {
    /// Number of symbols per row
    pub columns: usize,

    /// Character cell aspect ratio (width / height)
    pub scale: f64,
}

impl TileConfig {
    /// Aspect ratio of a Courier cell.
    pub const DEFAULT_SCALE: f64 = 0.43;

    pub fn new(columns: usize) -> Self {
        Self {
            columns,
            scale: Self::DEFAULT_SCALE,
        }
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Reject a zero column count or a non-positive, non-finite scale.
    pub fn validate(&self) -> Result<(), InkgridError> {
        if self.columns == 0 {
            return Err(InkgridError::InvalidConfig(
                "column count must be at least 1".to_string(),
            ));
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(InkgridError::InvalidConfig(format!(
                "scale must be a positive number, got {}",
                self.scale
            )));
        }
        Ok(())
    }
}

/// # Canvas Configuration
///
/// Layout for drawing a symbol-grid text artifact onto a grayscale image.
///
/// ## Placement
///
/// ```text
/// line i baseline box top:  y = origin_y + margin + i * line_height
/// line start:               x = origin_x
/// ```
///
/// Origins may be negative to crop into the middle of a large grid; glyphs
/// outside the canvas are clipped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasConfig {
    /// Canvas width in pixels
    pub width: u32,

    /// Canvas height in pixels
    pub height: u32,

    /// Glyph pixel height
    pub font_size: u32,

    /// Distance between consecutive lines in pixels
    pub line_height: u32,

    /// Top margin in pixels
    pub margin: i32,

    /// Horizontal offset of every line
    pub origin_x: i32,

    /// Vertical offset added to every line
    pub origin_y: i32,

    /// Canvas fill value (255 = white)
    pub background: u8,

    /// Text value (0 = black)
    pub ink: u8,
}

impl CanvasConfig {
    /// # 2560x1440 White Canvas
    ///
    /// | Property | Value |
    /// |----------|-------|
    /// | Size | 2560 x 1440 |
    /// | Font | 12 px, 12 px line pitch |
    /// | Margin | 20 px |
    /// | Colours | black on white |
    pub const QHD: Self = Self {
        width: 2560,
        height: 1440,
        font_size: 12,
        line_height: 12,
        margin: 20,
        origin_x: 0,
        origin_y: 0,
        background: 255,
        ink: 0,
    };

    pub fn validate(&self) -> Result<(), InkgridError> {
        if self.width == 0 || self.height == 0 {
            return Err(InkgridError::InvalidConfig(format!(
                "canvas must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        if self.font_size == 0 {
            return Err(InkgridError::InvalidConfig(
                "font size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self::QHD
    }
}
