//! Bitmap glyphs for canvas rendering.
//!
//! Uses the Spleen 6x12 bitmap font, scaled by nearest neighbour to the
//! requested cell size. Cells keep the font's 1:2 aspect ratio.

use std::collections::HashMap;

use spleen_font::{FONT_6X12, PSF2Font};

use crate::error::InkgridError;

const SPLEEN_WIDTH: usize = 6;
const SPLEEN_HEIGHT: usize = 12;

/// Spleen-backed glyph source with a per-character cache.
pub struct BitmapFont {
    cell_width: usize,
    cell_height: usize,
    cache: HashMap<char, Vec<u8>>,
}

impl BitmapFont {
    /// Build a font whose cells are `pixel_height` tall.
    pub fn new(pixel_height: u32) -> Result<Self, InkgridError> {
        PSF2Font::new(FONT_6X12).map_err(spleen_error)?;
        let cell_height = (pixel_height as usize).max(1);
        let cell_width = (cell_height * SPLEEN_WIDTH / SPLEEN_HEIGHT).max(1);
        Ok(Self {
            cell_width,
            cell_height,
            cache: HashMap::new(),
        })
    }

    pub fn cell_width(&self) -> usize {
        self.cell_width
    }

    pub fn cell_height(&self) -> usize {
        self.cell_height
    }

    /// Glyph bitmap for `ch`, `cell_width * cell_height` bytes of 0 or 1.
    pub fn glyph(&mut self, ch: char) -> Result<&[u8], InkgridError> {
        if !self.cache.contains_key(&ch) {
            let glyph = generate_glyph(ch, self.cell_width, self.cell_height)?;
            self.cache.insert(ch, glyph);
        }
        Ok(&self.cache[&ch])
    }
}

fn spleen_error(e: impl std::fmt::Debug) -> InkgridError {
    InkgridError::Font(format!("Failed to load Spleen 6x12: {:?}", e))
}

/// Render one character at the given cell size.
///
/// Spaces are blank; characters missing from Spleen are drawn as a box.
fn generate_glyph(ch: char, width: usize, height: usize) -> Result<Vec<u8>, InkgridError> {
    let mut glyph = vec![0u8; width * height];
    if ch == ' ' {
        return Ok(glyph);
    }

    let mut spleen = PSF2Font::new(FONT_6X12).map_err(spleen_error)?;
    let utf8 = ch.to_string();
    match spleen.glyph_for_utf8(utf8.as_bytes()) {
        Some(spleen_glyph) => {
            let mut src_bitmap = vec![0u8; SPLEEN_WIDTH * SPLEEN_HEIGHT];
            for (row_y, row) in spleen_glyph.enumerate() {
                for (col_x, on) in row.enumerate() {
                    if row_y < SPLEEN_HEIGHT && col_x < SPLEEN_WIDTH {
                        src_bitmap[row_y * SPLEEN_WIDTH + col_x] = on as u8;
                    }
                }
            }
            scale_bitmap(&src_bitmap, SPLEEN_WIDTH, SPLEEN_HEIGHT, &mut glyph, width, height);
        }
        None => draw_box(&mut glyph, width, height),
    }
    Ok(glyph)
}

/// Scale a bitmap from src dimensions to dst dimensions using nearest neighbor.
fn scale_bitmap(src: &[u8], src_w: usize, src_h: usize, dst: &mut [u8], dst_w: usize, dst_h: usize) {
    for dy in 0..dst_h {
        for dx in 0..dst_w {
            let sx = dx * src_w / dst_w;
            let sy = dy * src_h / dst_h;
            dst[dy * dst_w + dx] = src[sy * src_w + sx];
        }
    }
}

/// Draw a box outline in the glyph buffer.
fn draw_box(glyph: &mut [u8], width: usize, height: usize) {
    for x in 0..width {
        glyph[x] = 1;
        glyph[(height - 1) * width + x] = 1;
    }
    for y in 0..height {
        glyph[y * width] = 1;
        glyph[y * width + width - 1] = 1;
    }
}
