//! TrueType font rendering for canvas text.
//!
//! Loads a TTF/OTF file at runtime and rasterizes lines of text with
//! ab_glyph, reporting anti-aliased coverage per pixel.

use std::path::Path;

use ab_glyph::{Font, FontArc, ScaleFont};

use crate::error::InkgridError;

/// A TrueType font loaded from disk.
#[derive(Clone)]
pub struct TtfFont {
    font: FontArc,
}

impl TtfFont {
    /// Load a font file.
    pub fn open(path: &Path) -> Result<Self, InkgridError> {
        let bytes = std::fs::read(path)?;
        let font = FontArc::try_from_vec(bytes)
            .map_err(|e| InkgridError::Font(format!("{}: {}", path.display(), e)))?;
        Ok(Self { font })
    }

    /// Parse a font from memory.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, InkgridError> {
        let font = FontArc::try_from_vec(bytes).map_err(|e| InkgridError::Font(e.to_string()))?;
        Ok(Self { font })
    }

    /// Rasterize one line whose box top-left is (`x`, `top`).
    ///
    /// `plot` receives absolute pixel coordinates (possibly negative) and a
    /// coverage value in `[0, 1]`.
    pub fn draw_line<F>(&self, text: &str, x: f32, top: f32, pixel_height: f32, mut plot: F)
    where
        F: FnMut(i32, i32, f32),
    {
        let scaled = self.font.as_scaled(pixel_height);
        let baseline_y = top + scaled.ascent();
        let mut caret_x = x;

        for ch in text.chars() {
            let glyph_id = self.font.glyph_id(ch);
            let glyph = glyph_id.with_scale_and_position(
                pixel_height,
                ab_glyph::point(caret_x, baseline_y),
            );
            caret_x += scaled.h_advance(glyph_id);

            if let Some(outlined) = self.font.outline_glyph(glyph) {
                let bounds = outlined.px_bounds();
                outlined.draw(|px, py, coverage| {
                    let gx = px as i32 + bounds.min.x as i32;
                    let gy = py as i32 + bounds.min.y as i32;
                    plot(gx, gy, coverage.min(1.0));
                });
            }
        }
    }
}
