//! # Inkgrid CLI
//!
//! Command-line interface for converting images to packed ASCII art.
//!
//! ## Usage
//!
//! ```bash
//! # Convert an image to a packed grid (120 columns)
//! inkgrid encode --file photo.jpg --cols 120
//!
//! # Same, and also unpack to ASCII_image.txt
//! inkgrid encode --file photo.jpg --cols 120 --decode
//!
//! # Use a different character aspect ratio
//! inkgrid encode --file photo.jpg --cols 120 --scale 0.5
//!
//! # Unpack to text
//! inkgrid decode --input encoded_image.asc --output ASCII_image.txt
//!
//! # Pack an existing text grid
//! inkgrid pack --input ASCII_image.txt
//!
//! # Draw a text grid onto a PNG
//! inkgrid render --input ASCII_image.txt --output content.png
//! ```
//!
//! Set `RUST_LOG=debug` for tiling geometry, `RUST_LOG=trace` for per-row
//! progress.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Instant;

use inkgrid::{
    CanvasConfig, InkgridError, TileConfig,
    codec::{self, PaddingMode},
    preview::{self, CanvasFont, TtfFont},
    render::{self, Tiler},
};

/// Inkgrid - ASCII art block codec
#[derive(Parser, Debug)]
#[command(name = "inkgrid")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert an image into a packed symbol grid
    Encode {
        /// Input image
        #[arg(long, value_name = "IMAGE")]
        file: PathBuf,

        /// Symbols per row
        #[arg(long)]
        cols: usize,

        /// Character cell aspect ratio (width / height)
        #[arg(long, default_value_t = TileConfig::DEFAULT_SCALE, value_parser = parse_scale)]
        scale: f64,

        /// Packed output file
        #[arg(long, default_value = "encoded_image.asc")]
        output: PathBuf,

        /// Also unpack the result to a text file
        #[arg(
            long,
            value_name = "TEXT",
            num_args = 0..=1,
            default_missing_value = "ASCII_image.txt"
        )]
        decode: Option<PathBuf>,
    },

    /// Unpack a symbol grid to text
    Decode {
        /// Packed input file
        #[arg(long, default_value = "encoded_image.asc")]
        input: PathBuf,

        /// Text output file
        #[arg(long, default_value = "ASCII_image.txt")]
        output: PathBuf,

        /// Bit stream length rule (byte-length, legacy)
        #[arg(long, default_value_t = PaddingMode::ByteLength)]
        padding: PaddingMode,
    },

    /// Pack an existing text grid
    Pack {
        /// Text input file
        #[arg(long, default_value = "ASCII_image.txt")]
        input: PathBuf,

        /// Packed output file
        #[arg(long, default_value = "encoded_image.asc")]
        output: PathBuf,
    },

    /// Draw a text grid onto an image
    Render {
        /// Text input file
        #[arg(long, default_value = "ASCII_image.txt")]
        input: PathBuf,

        /// Image output file (format from extension)
        #[arg(long, default_value = "content.png")]
        output: PathBuf,

        /// TrueType font file (defaults to the built-in bitmap font)
        #[arg(long, value_name = "TTF")]
        font: Option<PathBuf>,

        /// Canvas width in pixels
        #[arg(long, default_value_t = CanvasConfig::QHD.width)]
        width: u32,

        /// Canvas height in pixels
        #[arg(long, default_value_t = CanvasConfig::QHD.height)]
        height: u32,

        /// Glyph height in pixels (also the line pitch)
        #[arg(long, default_value_t = CanvasConfig::QHD.font_size)]
        font_size: u32,

        /// Top margin in pixels
        #[arg(long, default_value_t = CanvasConfig::QHD.margin, allow_negative_numbers = true)]
        margin: i32,

        /// Horizontal offset of the text block
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        origin_x: i32,

        /// Vertical offset of the text block
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        origin_y: i32,
    },
}

/// Parse and validate the scale factor (positive, finite)
fn parse_scale(s: &str) -> Result<f64, String> {
    let scale: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if !scale.is_finite() || scale <= 0.0 {
        return Err(format!("Scale must be a positive number, got {}", scale));
    }
    Ok(scale)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), InkgridError> {
    let cli = Cli::parse();
    let start = Instant::now();

    match cli.command {
        Commands::Encode {
            file,
            cols,
            scale,
            output,
            decode,
        } => {
            encode_image(&file, TileConfig::new(cols).with_scale(scale), &output)?;
            if let Some(text_output) = decode {
                decode_file(&output, &text_output, PaddingMode::default())?;
            }
        }
        Commands::Decode {
            input,
            output,
            padding,
        } => decode_file(&input, &output, padding)?,
        Commands::Pack { input, output } => pack_text(&input, &output)?,
        Commands::Render {
            input,
            output,
            font,
            width,
            height,
            font_size,
            margin,
            origin_x,
            origin_y,
        } => {
            let config = CanvasConfig {
                width,
                height,
                font_size,
                line_height: font_size,
                margin,
                origin_x,
                origin_y,
                ..CanvasConfig::QHD
            };
            render_text(&input, &output, font.as_deref(), &config)?
        }
    }

    log::info!("Finished in {}ms", start.elapsed().as_millis());
    Ok(())
}

/// Tile an image, pack the grid and write the packed file
fn encode_image(file: &Path, config: TileConfig, output: &Path) -> Result<(), InkgridError> {
    let image = render::open_luma(file)?;
    log::info!("Input image: {} x {}", image.width(), image.height());

    let tiler = Tiler::new(&image, &config)?;
    let geometry = *tiler.geometry();
    log::info!("Grid: {} cols x {} rows", geometry.columns, geometry.rows);
    log::info!(
        "Tile size: {:.2} x {:.2} px",
        geometry.tile_width,
        geometry.tile_height
    );

    let bytes = codec::encode(tiler.into_symbols());
    std::fs::write(output, &bytes)?;
    println!("Saved {} bytes to {}", bytes.len(), output.display());
    Ok(())
}

/// Unpack a packed file to text
fn decode_file(input: &Path, output: &Path, padding: PaddingMode) -> Result<(), InkgridError> {
    let bytes = std::fs::read(input)?;
    log::info!("Read {} bytes ({} padding)", bytes.len(), padding);
    let text = codec::decode(&bytes, padding)?;
    std::fs::write(output, &text)?;
    println!("Saved {} lines to {}", text.lines().count(), output.display());
    Ok(())
}

/// Pack a text grid file
fn pack_text(input: &Path, output: &Path) -> Result<(), InkgridError> {
    let text = std::fs::read_to_string(input)?;
    let bytes = codec::encode_text(&text)?;
    std::fs::write(output, &bytes)?;
    println!("Saved {} bytes to {}", bytes.len(), output.display());
    Ok(())
}

/// Draw a text grid file onto an image
fn render_text(
    input: &Path,
    output: &Path,
    font: Option<&Path>,
    config: &CanvasConfig,
) -> Result<(), InkgridError> {
    let text = std::fs::read_to_string(input)?;
    let font = match font {
        Some(path) => {
            log::info!("Using font \"{}\"", path.display());
            CanvasFont::Ttf(TtfFont::open(path)?)
        }
        None => {
            log::info!("Using built-in Spleen font");
            CanvasFont::Spleen
        }
    };

    let image = preview::render_text_image(&text, config, &font)?;
    preview::save_image(&image, output)?;
    println!("Saved to {}", output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};
    use pretty_assertions::assert_eq;

    fn encode_args(extra: &[&str]) -> Option<PathBuf> {
        let mut args = vec!["inkgrid", "encode", "--file", "in.png", "--cols", "4"];
        args.extend_from_slice(extra);
        match Cli::try_parse_from(args).unwrap().command {
            Commands::Encode { decode, .. } => decode,
            other => panic!("parsed as {:?}", other),
        }
    }

    #[test]
    fn test_decode_flag() {
        assert_eq!(encode_args(&[]), None);
        assert_eq!(encode_args(&["--decode"]), Some(PathBuf::from("ASCII_image.txt")));
        assert_eq!(encode_args(&["--decode", "grid.txt"]), Some(PathBuf::from("grid.txt")));
    }

    #[test]
    fn test_scale_must_be_positive() {
        assert!(parse_scale("0.43").is_ok());
        assert!(parse_scale("0").is_err());
        assert!(parse_scale("-1").is_err());
        assert!(parse_scale("inf").is_err());
        assert!(parse_scale("wide").is_err());
    }

    #[test]
    fn test_encode_then_decode_files() {
        let dir = tempfile::tempdir().unwrap();
        let image_path = dir.path().join("in.png");
        let packed = dir.path().join("encoded_image.asc");
        let text = dir.path().join("ASCII_image.txt");

        GrayImage::from_fn(8, 4, |x, _| Luma([if x < 4 { 0 } else { 255 }]))
            .save(&image_path)
            .unwrap();
        encode_image(&image_path, TileConfig::new(2).with_scale(1.0), &packed).unwrap();
        decode_file(&packed, &text, PaddingMode::default()).unwrap();

        assert_eq!(std::fs::read_to_string(&text).unwrap(), "@.\n");
    }
}
