//! Exact-color frequency tally over the resized image

use image::RgbImage;
use log::debug;
use std::collections::HashMap;

/// An exact (R, G, B) triple used as a tally key
pub type PixelColor = [u8; 3];

/// One tally entry: a color and its occurrence count in the resized image
pub type ColorCount = (PixelColor, u32);

/// Count occurrences of every exact color in the image.
///
/// Scan order is x-major, y-minor: the outer loop walks columns, the inner
/// loop walks rows. The result is sorted by descending count; colors with
/// equal counts keep their first-scan relative order, so the output is fully
/// deterministic for a given image.
///
/// The sum of all counts equals `width * height`.
pub fn tally(image: &RgbImage) -> Vec<ColorCount> {
    let (width, height) = image.dimensions();

    // Count plus first-seen sequence number; the sequence number makes the
    // descending sort tie-break on scan order.
    let mut counts: HashMap<PixelColor, (u32, usize)> = HashMap::new();
    let mut seen = 0usize;

    for x in 0..width {
        for y in 0..height {
            let color = image.get_pixel(x, y).0;
            let entry = counts.entry(color).or_insert_with(|| {
                let slot = (0, seen);
                seen += 1;
                slot
            });
            entry.0 += 1;
        }
    }

    debug!(
        "tallied {} distinct colors over {} pixels",
        counts.len(),
        width as u64 * height as u64
    );

    let mut ranked: Vec<(PixelColor, u32, usize)> = counts
        .into_iter()
        .map(|(color, (count, order))| (color, count, order))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    ranked.into_iter().map(|(color, count, _)| (color, count)).collect()
}
