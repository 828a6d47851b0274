//! # Codec Tests
//!
//! End-to-end checks through the public API: image → tiles → bytes → text.
//!
//! ## Test Coverage
//!
//! - **Golden bytes**: small grids pinned to exact byte sequences
//! - **Round trips**: single- and multi-block grids, both padding modes
//! - **Tiling limits**: column/row boundaries against image dimensions
//! - **Corrupt input**: invalid codes, truncated streams, unknown symbols
//! - **Files**: the same pipeline through the file system

use image::{GrayImage, Luma};
use inkgrid::codec::{self, Encoder, FILLER_RUN, Ink, PaddingMode, Symbol};
use inkgrid::config::TileConfig;
use inkgrid::render::{self, Tiler};
use inkgrid::InkgridError;
use pretty_assertions::assert_eq;
use std::fs;

/// Grids pinned to their packed bytes.
const GOLDEN: &[(&str, &[u8])] = &[
    ("@\n", &[232, 1, 0]),
    ("@#\n+-\n", &[96, 229, 30]),
    (".@.@\n@.@.\n-+#@\n", &[65, 80, 4, 169, 69, 244]),
];

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Deterministic grid of `rows` x `cols` ink characters.
fn make_grid(rows: usize, cols: usize, seed: usize) -> String {
    let mut text = String::with_capacity(rows * (cols + 1));
    for r in 0..rows {
        for c in 0..cols {
            let index = (r * 31 + c * 17 + seed * 7) % 5;
            text.push(Ink::from_index(index).unwrap().as_char());
        }
        text.push('\n');
    }
    text
}

/// Image whose tiles are exactly `tile` px squares filled with a level.
fn level_image(levels: &[&[u8]], tile: u32) -> GrayImage {
    let rows = levels.len() as u32;
    let cols = levels[0].len() as u32;
    GrayImage::from_fn(cols * tile, rows * tile, |x, y| {
        Luma([levels[(y / tile) as usize][(x / tile) as usize]])
    })
}

fn roundtrip(grid: &str, padding: PaddingMode) -> String {
    let bytes = codec::encode_text(grid).expect("grid should encode");
    assert_eq!(bytes.len() % 3, 0, "unaligned output for {:?}", grid);
    codec::decode(&bytes, padding).expect("packed grid should decode")
}

// ============================================================================
// GOLDEN BYTES
// ============================================================================

#[test]
fn test_golden_bytes() {
    for &(grid, expected) in GOLDEN {
        let bytes = codec::encode_text(grid).unwrap();
        assert_eq!(bytes, expected.to_vec(), "packed bytes for {:?}", grid);
        assert_eq!(codec::decode(expected, PaddingMode::Legacy).unwrap(), grid);
        assert_eq!(codec::decode(expected, PaddingMode::ByteLength).unwrap(), grid);
    }
}

#[test]
fn test_two_by_two_scenario() {
    for (a, b) in [(Ink::Darkest, Ink::Lightest), (Ink::Mid, Ink::Dark)] {
        let bytes = codec::encode([
            Symbol::Ink(a),
            Symbol::Ink(b),
            Symbol::LineEnd,
            Symbol::Ink(b),
            Symbol::Ink(a),
            Symbol::LineEnd,
            Symbol::StreamEnd,
        ]);
        assert_eq!(bytes.len(), 3);

        let expected = format!(
            "{}{}\n{}{}\n",
            a.as_char(),
            b.as_char(),
            b.as_char(),
            a.as_char()
        );
        assert_eq!(codec::decode(&bytes, PaddingMode::default()).unwrap(), expected);
    }
}

// ============================================================================
// ROUND TRIPS
// ============================================================================

#[test]
fn test_roundtrip_grid_shapes() {
    for rows in 1..=6 {
        for cols in 1..=9 {
            let grid = make_grid(rows, cols, rows + cols);
            assert_eq!(roundtrip(&grid, PaddingMode::ByteLength), grid);
            assert_eq!(roundtrip(&grid, PaddingMode::Legacy), grid);
        }
    }
}

#[test]
fn test_roundtrip_multi_block() {
    // 40 x 30 grid: 1231 symbols, 3693 bits, ~154 blocks
    let grid = make_grid(30, 40, 3);
    let bytes = codec::encode_text(&grid).unwrap();
    assert!(bytes.len() > 3 * 100);
    assert_eq!(codec::decode(&bytes, PaddingMode::ByteLength).unwrap(), grid);
    assert_eq!(codec::decode(&bytes, PaddingMode::Legacy).unwrap(), grid);
}

#[test]
fn test_roundtrip_all_dark() {
    // All-zero ink codes keep the integer small; legacy padding must still reach StreamEnd
    let grid = "@@@@@@@@\n".repeat(20);
    assert_eq!(roundtrip(&grid, PaddingMode::Legacy), grid);
}

#[test]
fn test_block_alignment_for_every_tail_length() {
    for symbols in 0..(FILLER_RUN * 3) {
        let mut encoder = Encoder::new();
        for i in 0..symbols {
            encoder.append(Symbol::Ink(Ink::from_index(i % 5).unwrap()));
        }
        encoder.append(Symbol::StreamEnd);
        let bytes = encoder.finalize();
        assert_eq!(bytes.len() % 3, 0);
        let decoded = codec::decode_symbols(&bytes, PaddingMode::ByteLength).unwrap();
        assert_eq!(decoded.len(), symbols + 1);
    }
}

#[test]
fn test_sentinel_precedence() {
    let mut bytes = codec::encode_text("-.\n").unwrap();
    // Garbage after the block holding StreamEnd, including unused codes
    bytes.extend_from_slice(&[0xFF, 0xDB, 0xB6, 0x03, 0x00, 0x00]);
    assert_eq!(codec::decode(&bytes, PaddingMode::ByteLength).unwrap(), "-.\n");
    assert_eq!(codec::decode(&bytes, PaddingMode::Legacy).unwrap(), "-.\n");
}

// ============================================================================
// TILING
// ============================================================================

#[test]
fn test_image_roundtrip() {
    let levels: &[&[u8]] = &[&[0, 70, 130, 200, 255], &[255, 200, 130, 70, 0]];
    let image = level_image(levels, 8);
    let config = TileConfig::new(5).with_scale(1.0);

    let bytes = render::encode_image(&image, &config).unwrap();
    let text = codec::decode(&bytes, PaddingMode::default()).unwrap();
    assert_eq!(text, "@#+-.\n.-+#@\n");
    assert_eq!(render::render_ascii(&image, &config).unwrap(), text);
}

#[test]
fn test_image_roundtrip_with_aspect() {
    // 100 x 60 gradient, 25 cols at 0.43: w = 4, h = 9.3, R = 6
    let image = GrayImage::from_fn(100, 60, |x, y| Luma([((x * 2 + y) % 256) as u8]));
    let config = TileConfig::new(25);
    let tiler = Tiler::new(&image, &config).unwrap();
    assert_eq!(tiler.geometry().rows, 6);

    let text = tiler.to_text();
    let bytes = render::encode_image(&image, &config).unwrap();
    assert_eq!(codec::decode(&bytes, PaddingMode::default()).unwrap(), text);
    assert!(text.lines().all(|line| line.chars().count() == 25));
}

#[test]
fn test_boundary_columns() {
    let image = GrayImage::from_pixel(10, 10, Luma([128]));
    assert!(Tiler::new(&image, &TileConfig::new(10).with_scale(1.0)).is_ok());
    let err = Tiler::new(&image, &TileConfig::new(11)).err().unwrap();
    assert!(matches!(err, InkgridError::ImageTooSmall { columns: 11, width: 10, .. }));
}

#[test]
fn test_boundary_rows() {
    // w = 1, h = 1: R = 10 = H
    let image = GrayImage::from_pixel(10, 10, Luma([128]));
    let tiler = Tiler::new(&image, &TileConfig::new(10).with_scale(1.0)).unwrap();
    assert_eq!(tiler.geometry().rows, 10);

    // w = 1, h = 0.5: R = 2 = H + 1
    let image = GrayImage::from_pixel(10, 1, Luma([128]));
    let result = Tiler::new(&image, &TileConfig::new(10).with_scale(2.0));
    assert!(matches!(
        result.err().unwrap(),
        InkgridError::ImageTooSmall { rows: 2, height: 1, .. }
    ));
}

#[test]
fn test_image_shorter_than_one_row() {
    // 1 col at 0.43: h = 23.3 > 5, R = 0
    let image = GrayImage::from_pixel(10, 5, Luma([0]));
    let bytes = render::encode_image(&image, &TileConfig::new(1)).unwrap();
    assert_eq!(bytes.len(), 3);
    assert_eq!(codec::decode(&bytes, PaddingMode::ByteLength).unwrap(), "");
    assert_eq!(codec::decode(&bytes, PaddingMode::Legacy).unwrap(), "");
}

// ============================================================================
// CORRUPT INPUT
// ============================================================================

#[test]
fn test_invalid_code_pattern() {
    // "@" "#" then "110"
    let bytes = [0b1110_0000, 0x00, 0x00];
    let err = codec::decode(&bytes, PaddingMode::ByteLength).unwrap_err();
    assert!(matches!(err, InkgridError::InvalidCode { code: 0b110, offset: 6 }));
}

#[test]
fn test_truncated_stream() {
    let bytes = codec::encode_text(&make_grid(5, 10, 1)).unwrap();
    let err = codec::decode(&bytes[..bytes.len() - 6], PaddingMode::ByteLength).unwrap_err();
    assert!(matches!(err, InkgridError::MissingStreamEnd { .. }));
}

#[test]
fn test_unknown_symbol_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("encoded_image.asc");

    let grid = make_grid(20, 20, 0) + "@?\n";
    let result = codec::encode_text(&grid).map(|bytes| fs::write(&output, bytes));
    assert!(matches!(result, Err(InkgridError::UnknownSymbol('?'))));
    assert!(!output.exists());
}

// ============================================================================
// FILES
// ============================================================================

#[test]
fn test_file_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let image_path = dir.path().join("input.png");
    let packed_path = dir.path().join("encoded_image.asc");

    let levels: &[&[u8]] = &[&[255, 0, 255], &[0, 255, 0], &[255, 0, 255]];
    level_image(levels, 4).save(&image_path).unwrap();

    let image = render::open_luma(&image_path).unwrap();
    let bytes = render::encode_image(&image, &TileConfig::new(3).with_scale(1.0)).unwrap();
    fs::write(&packed_path, &bytes).unwrap();

    let stored = fs::read(&packed_path).unwrap();
    assert_eq!(stored.len() % 3, 0);
    assert_eq!(
        codec::decode(&stored, PaddingMode::default()).unwrap(),
        ".@.\n@.@\n.@.\n"
    );
}
