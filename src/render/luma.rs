//! # Image Loading and Luma Conversion
//!
//! Opens an image file and converts it to 8-bit grayscale with ITU-R BT.601
//! weights in 16-bit fixed point, rounded to nearest:
//!
//! ```text
//! Y = (19595 R + 38470 G + 7471 B + 0x8000) >> 16
//! ```
//!
//! These are 0.299, 0.587 and 0.114 scaled by 65536, the same fixed-point
//! form common image libraries use for their "L" mode. Alpha is ignored.
//! Gray inputs pass through unchanged, since the weights sum to 65536.
//!
//! With the `heif` feature, HEIC/HEIF files are decoded through libheif;
//! everything else goes through the `image` crate's format detection.

use std::path::Path;

use image::{DynamicImage, GrayImage, Luma};

use crate::error::InkgridError;

/// Open an image file and convert it to grayscale.
pub fn open_luma(path: &Path) -> Result<GrayImage, InkgridError> {
    let bytes = std::fs::read(path)?;
    let image = decode_image(&bytes, path)?;
    log::debug!(
        "Decoded {} ({}x{}, {:?})",
        path.display(),
        image.width(),
        image.height(),
        image.color()
    );
    Ok(to_luma(&image))
}

/// Fixed-point BT.601 weights, summing to `1 << 16`.
const LUMA_WEIGHTS: [u32; 3] = [19595, 38470, 7471];

/// Convert any image to grayscale using rounded BT.601 weights.
pub fn to_luma(image: &DynamicImage) -> GrayImage {
    let rgb = image.to_rgb8();
    GrayImage::from_fn(rgb.width(), rgb.height(), |x, y| {
        let [r, g, b] = rgb.get_pixel(x, y).0;
        let [wr, wg, wb] = LUMA_WEIGHTS;
        let luminance = (wr * r as u32 + wg * g as u32 + wb * b as u32 + 0x8000) >> 16;
        Luma([luminance as u8])
    })
}

#[cfg(feature = "heif")]
fn decode_image(bytes: &[u8], path: &Path) -> Result<DynamicImage, InkgridError> {
    if is_heic(bytes) || has_heif_extension(path) {
        return heif::decode_heic(bytes).map_err(InkgridError::Image);
    }
    load(bytes, path)
}

#[cfg(not(feature = "heif"))]
fn decode_image(bytes: &[u8], path: &Path) -> Result<DynamicImage, InkgridError> {
    load(bytes, path)
}

fn load(bytes: &[u8], path: &Path) -> Result<DynamicImage, InkgridError> {
    image::load_from_memory(bytes)
        .map_err(|e| InkgridError::Image(format!("Failed to decode {}: {}", path.display(), e)))
}

/// Check the ISO-BMFF `ftyp` box for a HEIF-family brand.
pub fn is_heic(data: &[u8]) -> bool {
    if data.len() < 12 || &data[4..8] != b"ftyp" {
        return false;
    }
    matches!(
        &data[8..12],
        b"heic" | b"heix" | b"hevc" | b"hevx" | b"heim" | b"heis" | b"hevm" | b"hevs" | b"mif1" | b"msf1"
    )
}

#[cfg(feature = "heif")]
fn has_heif_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("heic") || ext.eq_ignore_ascii_case("heif"))
}

#[cfg(feature = "heif")]
mod heif {
    use image::{DynamicImage, RgbImage};
    use libheif_rs::{ColorSpace, HeifContext, LibHeif, RgbChroma};

    /// Decode the primary image of a HEIC/HEIF file to RGB.
    pub fn decode_heic(data: &[u8]) -> Result<DynamicImage, String> {
        let lib_heif = LibHeif::new();
        let ctx =
            HeifContext::read_from_bytes(data).map_err(|e| format!("Failed to read HEIC: {}", e))?;
        let handle = ctx
            .primary_image_handle()
            .map_err(|e| format!("Failed to get primary image: {}", e))?;
        let image = lib_heif
            .decode(&handle, ColorSpace::Rgb(RgbChroma::Rgb), None)
            .map_err(|e| format!("Failed to decode HEIC image: {}", e))?;

        let planes = image.planes();
        let interleaved = planes
            .interleaved
            .ok_or("No interleaved RGB data in HEIC")?;
        let stride = interleaved.stride;
        let data = interleaved.data;

        let rgb = RgbImage::from_fn(image.width(), image.height(), |x, y| {
            let offset = y as usize * stride + x as usize * 3;
            match data.get(offset..offset + 3) {
                Some(px) => image::Rgb([px[0], px[1], px[2]]),
                None => image::Rgb([0, 0, 0]),
            }
        });
        Ok(DynamicImage::ImageRgb8(rgb))
    }
}
