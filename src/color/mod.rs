//! Color tallying and palette matching
//!
//! This module counts exact pixel colors in the resized image and matches a
//! sampled subset of them against the reference palette.

pub mod matcher;
pub mod tally;

pub use matcher::match_codes;
pub use tally::{tally, ColorCount, PixelColor};
