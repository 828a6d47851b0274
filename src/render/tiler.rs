//! # Tiler
//!
//! Divides a grayscale image into a grid of tiles and quantizes each tile's
//! mean brightness into one ink symbol.
//!
//! ## Tile Bounds
//!
//! ```text
//! w = W / C          tile width  (real)
//! h = w / scale      tile height (real)
//! R = floor(H / h)   row count
//!
//! column i:  x in [floor(i*w), floor((i+1)*w))    last column: [.., W)
//! row j:     y in [floor(j*h), floor((j+1)*h))    last row:    [.., H)
//! ```
//!
//! The last column always extends to `W` and the last row to `H`, so the
//! rounding remainder lands in the final tiles.
//!
//! ## Output
//!
//! A lazy symbol stream: `C` inks then `LineEnd` per row, `StreamEnd` after
//! the last row.

use image::GrayImage;

use crate::codec::{Ink, Symbol};
use crate::config::TileConfig;
use crate::error::InkgridError;

/// Grid dimensions derived from an image and a [`TileConfig`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileGeometry {
    pub columns: usize,
    pub rows: usize,
    pub tile_width: f64,
    pub tile_height: f64,
    image_width: u32,
    image_height: u32,
}

impl TileGeometry {
    /// Compute the grid for a `width` x `height` image.
    ///
    /// Fails with `ImageTooSmall` when there are more columns than pixel
    /// columns or more rows than pixel rows. An image too short for one row
    /// yields zero rows.
    ///
    /// ```
    /// use inkgrid::config::TileConfig;
    /// use inkgrid::render::tiler::TileGeometry;
    ///
    /// let geometry = TileGeometry::new(200, 100, &TileConfig::new(20).with_scale(0.5)).unwrap();
    /// assert_eq!(geometry.tile_width, 10.0);
    /// assert_eq!(geometry.tile_height, 20.0);
    /// assert_eq!(geometry.rows, 5);
    /// ```
    pub fn new(width: u32, height: u32, config: &TileConfig) -> Result<Self, InkgridError> {
        config.validate()?;

        let columns = config.columns;
        let tile_width = width as f64 / columns as f64;
        let tile_height = tile_width / config.scale;
        let rows = (height as f64 / tile_height).floor() as usize;

        if columns > width as usize || rows > height as usize {
            return Err(InkgridError::ImageTooSmall {
                columns,
                rows,
                width,
                height,
            });
        }

        Ok(Self {
            columns,
            rows,
            tile_width,
            tile_height,
            image_width: width,
            image_height: height,
        })
    }

    /// Pixel columns `[x0, x1)` covered by column `i`.
    pub fn column_bounds(&self, i: usize) -> (u32, u32) {
        let x0 = (i as f64 * self.tile_width).floor() as u32;
        let x1 = if i + 1 == self.columns {
            self.image_width
        } else {
            ((i + 1) as f64 * self.tile_width).floor() as u32
        };
        (x0, x1)
    }

    /// Pixel rows `[y0, y1)` covered by row `j`.
    ///
    /// Tiles shorter than a pixel (`tile_height < 1`) can round to an empty
    /// band; those take the single pixel row at `y0`.
    pub fn row_bounds(&self, j: usize) -> (u32, u32) {
        let y0 = (j as f64 * self.tile_height).floor() as u32;
        let y1 = if j + 1 == self.rows {
            self.image_height
        } else {
            ((j + 1) as f64 * self.tile_height).floor() as u32
        };
        (y0, y1.max(y0 + 1))
    }
}

/// Quantizes one image into a symbol stream.
pub struct Tiler<'a> {
    image: &'a GrayImage,
    geometry: TileGeometry,
}

impl<'a> Tiler<'a> {
    /// Validate the grid against the image. No tiling work happens here.
    pub fn new(image: &'a GrayImage, config: &TileConfig) -> Result<Self, InkgridError> {
        let geometry = TileGeometry::new(image.width(), image.height(), config)?;
        log::debug!(
            "Tiling {}x{} image into {} cols x {} rows ({:.3} x {:.3} px tiles)",
            image.width(),
            image.height(),
            geometry.columns,
            geometry.rows,
            geometry.tile_width,
            geometry.tile_height
        );
        Ok(Self { image, geometry })
    }

    pub fn geometry(&self) -> &TileGeometry {
        &self.geometry
    }

    /// Truncated mean brightness of tile (`i`, `j`).
    pub fn tile_mean(&self, i: usize, j: usize) -> u8 {
        let (x0, x1) = self.geometry.column_bounds(i);
        let (y0, y1) = self.geometry.row_bounds(j);
        let stride = self.image.width() as usize;
        let raw = self.image.as_raw();

        let mut sum = 0u64;
        for y in y0 as usize..y1 as usize {
            let row = &raw[y * stride + x0 as usize..y * stride + x1 as usize];
            sum += row.iter().map(|&p| p as u64).sum::<u64>();
        }
        let count = (x1 - x0) as u64 * (y1 - y0) as u64;
        (sum / count) as u8
    }

    /// Ink symbol for tile (`i`, `j`).
    pub fn tile_ink(&self, i: usize, j: usize) -> Ink {
        Ink::from_brightness(self.tile_mean(i, j))
    }

    /// Consume the tiler into its symbol stream.
    pub fn into_symbols(self) -> Symbols<'a> {
        Symbols {
            tiler: self,
            row: 0,
            column: 0,
            finished: false,
        }
    }

    /// Render the grid directly as text, one newline-terminated line per row.
    pub fn to_text(&self) -> String {
        let mut text =
            String::with_capacity((self.geometry.columns + 1) * self.geometry.rows);
        for j in 0..self.geometry.rows {
            for i in 0..self.geometry.columns {
                text.push(self.tile_ink(i, j).as_char());
            }
            text.push('\n');
        }
        text
    }
}

/// Row-major symbol stream produced by [`Tiler::into_symbols`].
pub struct Symbols<'a> {
    tiler: Tiler<'a>,
    row: usize,
    column: usize,
    finished: bool,
}

impl Iterator for Symbols<'_> {
    type Item = Symbol;

    fn next(&mut self) -> Option<Symbol> {
        let geometry = self.tiler.geometry;
        if self.row < geometry.rows {
            if self.column < geometry.columns {
                let ink = self.tiler.tile_ink(self.column, self.row);
                self.column += 1;
                return Some(Symbol::Ink(ink));
            }
            log::trace!("Row {}/{} done", self.row + 1, geometry.rows);
            self.row += 1;
            self.column = 0;
            return Some(Symbol::LineEnd);
        }
        if self.finished {
            return None;
        }
        self.finished = true;
        Some(Symbol::StreamEnd)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let geometry = self.tiler.geometry;
        let remaining = if self.finished {
            0
        } else {
            let per_row = geometry.columns + 1;
            (geometry.rows - self.row) * per_row - self.column + 1
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Symbols<'_> {}

// ============================================================================
// TESTS
// ============================================================================
