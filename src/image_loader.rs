//! Image loading and aspect-preserving downsampling
//!
//! Single entry point for turning an image file into a bounded-size RGB
//! pixel buffer for color detection. Any format the `image` crate can decode
//! is accepted (JPEG, PNG, GIF, WebP, TIFF, BMP, and others); alpha and
//! indexed sources are normalized to 3-channel RGB.
//!
//! ## Design
//!
//! The resize exists to bound the pixel count for the tally and match
//! phases, not for display, so the interpolation filter is not critical;
//! triangle (bilinear) filtering is used. Dimension computation truncates
//! toward zero, so the aspect ratio may be off by a fraction of a pixel.

use crate::error::{DetectError, Result};
use image::imageops::{self, FilterType};
use image::{ImageReader, RgbImage};
use log::{debug, info};
use std::path::Path;

/// Compute downsampled dimensions for an image.
///
/// If both dimensions are at or below `threshold`, dimensions are unchanged.
/// Otherwise the larger dimension is set to `threshold` and the other is
/// scaled proportionally with integer truncation.
///
/// Width is the driving dimension on square inputs: the width branch decides,
/// so `new_width == threshold` (both branches produce identical values for
/// squares; non-square inputs are unaffected by the choice).
pub fn resized_dimensions(width: u32, height: u32, threshold: u32) -> (u32, u32) {
    if width <= threshold && height <= threshold {
        return (width, height);
    }

    if height > width {
        let new_width = (width as u64 * threshold as u64 / height as u64) as u32;
        (new_width, threshold)
    } else {
        let new_height = (height as u64 * threshold as u64 / width as u64) as u32;
        (threshold, new_height)
    }
}

/// Load an image from disk, normalize to RGB, and downsample.
///
/// The returned [`RgbImage`] is the pixel accessor for the rest of the
/// pipeline: `get_pixel(x, y)` yields the (R, G, B) triple for any
/// `0 <= x < width`, `0 <= y < height`.
///
/// # Errors
///
/// Returns [`DetectError::ImageLoad`] if the file cannot be opened, is not a
/// recognized image format, or fails to decode.
pub fn load_and_resize(path: &Path, threshold: u32) -> Result<RgbImage> {
    let reader = ImageReader::open(path).map_err(|e| {
        DetectError::image_load(
            format!("Failed to open image file: {}", path.display()),
            e,
        )
    })?;

    let decoded = reader
        .with_guessed_format()
        .map_err(|e| {
            DetectError::image_load(
                format!("Failed to probe image format: {}", path.display()),
                e,
            )
        })?
        .decode()
        .map_err(|e| {
            DetectError::image_load(format!("Failed to decode image: {}", path.display()), e)
        })?;

    // Normalize to 3-channel RGB; alpha is dropped, not composited.
    let rgb = decoded.to_rgb8();
    let (width, height) = rgb.dimensions();
    info!("original dimensions: {} x {}", width, height);

    let (new_width, new_height) = resized_dimensions(width, height, threshold);
    if (new_width, new_height) == (width, height) {
        debug!("image within threshold {}, no resize", threshold);
        return Ok(rgb);
    }

    info!("resized dimensions: {} x {}", new_width, new_height);
    Ok(imageops::resize(
        &rgb,
        new_width,
        new_height,
        FilterType::Triangle,
    ))
}
