//! Default tuning constants for the detection pipeline

/// Maximum width/height (in pixels) after downsampling.
///
/// Images larger than this in either dimension are shrunk so the larger
/// dimension equals this value, preserving aspect ratio. Keeps the pixel
/// count bounded so the tally and match phases stay cheap.
pub const DEFAULT_RESIZE_THRESHOLD: u32 = 100;

/// Interval at which frequency-ranked detected colors are sampled for
/// palette matching.
///
/// Adjacent ranks are usually near-duplicate shades from anti-aliasing, so
/// matching every rank buys little. Exposed as configuration; this is only
/// the default.
pub const DEFAULT_SAMPLE_STRIDE: usize = 10;

/// Name of the reference palette table loaded when no path is configured
pub const DEFAULT_PALETTE_FILE: &str = "colors.csv";
