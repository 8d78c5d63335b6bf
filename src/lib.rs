//! # Dominant Colors
//!
//! A Rust crate for detecting the dominant colors in an image and naming
//! them against a reference palette.
//!
//! The pipeline is a single linear pass:
//! - Load the image, normalize to RGB, and downsample to bound pixel count
//! - Tally exact pixel colors into a frequency-ranked list
//! - Match a sampled subset against the palette by L1 channel distance
//! - Resolve matched codes to human-readable names, most frequent first
//!
//! ## Example
//!
//! ```rust,no_run
//! use dominant_colors::{detect_colors, DetectConfig, ReferencePalette};
//! use std::path::{Path, PathBuf};
//!
//! let palette = ReferencePalette::from_csv_file(Path::new("colors.csv"))?;
//! let config = DetectConfig {
//!     image_path: PathBuf::from("photo.jpg"),
//!     ..DetectConfig::default()
//! };
//! for entry in detect_colors(&config, &palette)? {
//!     println!("{} {}", entry.name, entry.code);
//! }
//! # Ok::<(), dominant_colors::DetectError>(())
//! ```

use log::info;

pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod image_loader;
pub mod palette;

pub use config::DetectConfig;
pub use error::{DetectError, Result};
pub use palette::{NamedColor, PaletteRow, ReferencePalette};

/// Run the full detection pipeline on one image.
///
/// This is the main entry point. It loads and downsamples the image at
/// `config.image_path`, tallies pixel colors, matches every
/// `config.sample_stride`-th frequency rank against `palette`, and resolves
/// the matched codes to names. The first entry of the result corresponds to
/// the most dominant detected color.
///
/// # Errors
///
/// Returns `DetectError` if:
/// - The image cannot be loaded or is an invalid format
/// - The palette has no rows
/// - The configured sample stride is zero
/// - A matched code cannot be resolved (defensive; should not happen)
pub fn detect_colors(
    config: &DetectConfig,
    palette: &ReferencePalette,
) -> Result<Vec<NamedColor>> {
    let image = image_loader::load_and_resize(&config.image_path, config.resize_threshold)?;

    let ranked = color::tally(&image);
    let codes = color::match_codes(&ranked, palette, config.sample_stride)?;
    info!("found {} unique palette colors", codes.len());

    palette.resolve(&codes)
}
