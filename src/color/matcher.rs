//! Nearest-palette-entry matching over a sampled subset of tallied colors
//!
//! This is the dominant cost center of the pipeline: every sampled detected
//! color is scanned against every palette row. Cost is bounded from both
//! sides — the tally operates on a downsampled image, and only every
//! `stride`-th frequency rank is matched, on the empirical assumption that
//! adjacent ranks are near-duplicate shades (anti-aliasing noise).

use crate::color::tally::{ColorCount, PixelColor};
use crate::error::{DetectError, Result};
use crate::palette::ReferencePalette;
use log::debug;

/// Match sampled detected colors to their nearest palette entries.
///
/// Walks every `stride`-th element of `ranked` (starting at index 0) and for
/// each computes the L1 (Manhattan) channel distance to every palette row,
/// keeping the closest. Distance ties go to the earlier palette row. The
/// winning row's code, marker stripped, is appended to the result unless
/// already present, so the output is duplicate-free and ordered by first
/// occurrence — which follows the frequency ranking, most dominant first.
///
/// # Errors
///
/// - [`DetectError::EmptyPalette`] if the palette has no rows.
/// - [`DetectError::InvalidParameter`] if `stride` is zero.
pub fn match_codes(
    ranked: &[ColorCount],
    palette: &ReferencePalette,
    stride: usize,
) -> Result<Vec<String>> {
    if stride == 0 {
        return Err(DetectError::InvalidParameter {
            parameter: "sample_stride".to_string(),
            value: "0".to_string(),
        });
    }
    if palette.is_empty() {
        return Err(DetectError::EmptyPalette);
    }

    // Flat (code, rgb) view of the palette, computed once before the scan.
    let entries: Vec<(&str, PixelColor)> = palette
        .rows()
        .iter()
        .map(|row| (row.code.trim_start_matches('#'), [row.r, row.g, row.b]))
        .collect();

    let mut codes: Vec<String> = Vec::new();
    let mut sampled = 0usize;

    for (color, _count) in ranked.iter().step_by(stride) {
        sampled += 1;

        let mut best_code = entries[0].0;
        let mut best_distance = l1_distance(*color, entries[0].1);
        for &(code, rgb) in &entries[1..] {
            let distance = l1_distance(*color, rgb);
            // Strict comparison keeps the first palette row on ties.
            if distance < best_distance {
                best_code = code;
                best_distance = distance;
            }
        }

        if !codes.iter().any(|c| c == best_code) {
            codes.push(best_code.to_string());
        }
    }

    debug!(
        "matched {} unique codes from {} sampled colors",
        codes.len(),
        sampled
    );
    Ok(codes)
}

/// Sum of absolute per-channel differences
fn l1_distance(a: PixelColor, b: PixelColor) -> u32 {
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| (x as i32 - y as i32).unsigned_abs())
        .sum()
}
