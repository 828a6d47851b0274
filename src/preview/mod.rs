//! # Text Canvas Renderer
//!
//! Draws a symbol-grid text artifact onto a grayscale image for display.
//!
//! ## Architecture
//!
//! ```text
//! text → lines (right-trimmed) → TextCanvas → GrayImage → PNG
//!                                    ↓
//!                   per line: glyph coverage into an f32 buffer
//!                   (Spleen bitmap or TrueType outline)
//!                                    ↓
//!                   pixel = background + (ink - background) × coverage
//! ```
//!
//! ## Example
//!
//! ```
//! use inkgrid::config::CanvasConfig;
//! use inkgrid::preview::{render_text_image, CanvasFont};
//!
//! let config = CanvasConfig { width: 64, height: 48, ..CanvasConfig::QHD };
//! let image = render_text_image("@@\n..\n", &config, &CanvasFont::Spleen).unwrap();
//! assert_eq!(image.dimensions(), (64, 48));
//! ```

mod font;
pub mod ttf_font;

pub use font::BitmapFont;
pub use ttf_font::TtfFont;

use std::path::Path;

use image::{GrayImage, Luma};

use crate::config::CanvasConfig;
use crate::error::InkgridError;

/// Font used to draw canvas text.
#[derive(Clone, Default)]
pub enum CanvasFont {
    /// Built-in Spleen bitmap font
    #[default]
    Spleen,
    /// TrueType font loaded at runtime
    Ttf(TtfFont),
}

/// Coverage accumulator for one canvas.
pub struct TextCanvas {
    config: CanvasConfig,
    coverage: Vec<f32>,
}

impl TextCanvas {
    pub fn new(config: CanvasConfig) -> Result<Self, InkgridError> {
        config.validate()?;
        Ok(Self {
            config,
            coverage: vec![0.0; config.width as usize * config.height as usize],
        })
    }

    /// Add `amount` of ink at (`x`, `y`). Off-canvas points are dropped.
    fn plot(&mut self, x: i32, y: i32, amount: f32) {
        if x < 0 || y < 0 || x >= self.config.width as i32 || y >= self.config.height as i32 {
            return;
        }
        let idx = y as usize * self.config.width as usize + x as usize;
        self.coverage[idx] = (self.coverage[idx] + amount).min(1.0);
    }

    /// Top edge of line `index`.
    pub fn line_top(&self, index: usize) -> i32 {
        self.config.origin_y + self.config.margin + index as i32 * self.config.line_height as i32
    }

    /// Draw every line of `text` with the given font.
    pub fn draw_text(&mut self, text: &str, font: &CanvasFont) -> Result<(), InkgridError> {
        let lines: Vec<&str> = text.lines().map(str::trim_end).collect();
        match font {
            CanvasFont::Spleen => {
                let mut bitmap = BitmapFont::new(self.config.font_size)?;
                for (i, line) in lines.iter().enumerate() {
                    let top = self.line_top(i);
                    self.draw_bitmap_line(line, top, &mut bitmap)?;
                }
            }
            CanvasFont::Ttf(ttf) => {
                let pixel_height = self.config.font_size as f32;
                let x = self.config.origin_x as f32;
                for (i, line) in lines.iter().enumerate() {
                    let top = self.line_top(i) as f32;
                    ttf.draw_line(line, x, top, pixel_height, |px, py, c| self.plot(px, py, c));
                }
            }
        }
        log::debug!("Drew {} lines", lines.len());
        Ok(())
    }

    fn draw_bitmap_line(
        &mut self,
        line: &str,
        top: i32,
        font: &mut BitmapFont,
    ) -> Result<(), InkgridError> {
        let (cell_w, cell_h) = (font.cell_width(), font.cell_height());
        if top >= self.config.height as i32 || top + (cell_h as i32) < 0 {
            return Ok(());
        }
        let mut left = self.config.origin_x;
        for ch in line.chars() {
            if left >= self.config.width as i32 {
                break;
            }
            if left + cell_w as i32 > 0 {
                let glyph = font.glyph(ch)?;
                for gy in 0..cell_h {
                    for gx in 0..cell_w {
                        if glyph[gy * cell_w + gx] != 0 {
                            self.plot(left + gx as i32, top + gy as i32, 1.0);
                        }
                    }
                }
            }
            left += cell_w as i32;
        }
        Ok(())
    }

    /// Resolve coverage into pixel values.
    pub fn into_image(self) -> GrayImage {
        let CanvasConfig {
            width,
            height,
            background,
            ink,
            ..
        } = self.config;
        let (bg, fg) = (background as f32, ink as f32);
        let coverage = self.coverage;
        GrayImage::from_fn(width, height, |x, y| {
            let c = coverage[y as usize * width as usize + x as usize];
            Luma([(bg + (fg - bg) * c).round().clamp(0.0, 255.0) as u8])
        })
    }
}

/// Draw `text` onto a fresh canvas.
pub fn render_text_image(
    text: &str,
    config: &CanvasConfig,
    font: &CanvasFont,
) -> Result<GrayImage, InkgridError> {
    let mut canvas = TextCanvas::new(*config)?;
    canvas.draw_text(text, font)?;
    Ok(canvas.into_image())
}

/// Save a grayscale image, format chosen from the file extension.
pub fn save_image(image: &GrayImage, path: &Path) -> Result<(), InkgridError> {
    image
        .save(path)
        .map_err(|e| InkgridError::Image(format!("Failed to save {}: {}", path.display(), e)))
}
