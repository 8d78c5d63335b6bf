//! Configuration for the detection pipeline.
//!
//! All tunable parameters live in [`DetectConfig`]. Configuration can be
//! loaded from a JSON file or constructed programmatically:
//!
//! ```no_run
//! use dominant_colors::DetectConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = DetectConfig::from_json_file(Path::new("config.json"))?;
//!
//! // Or use defaults
//! let config = DetectConfig::default();
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::constants::{DEFAULT_PALETTE_FILE, DEFAULT_RESIZE_THRESHOLD, DEFAULT_SAMPLE_STRIDE};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete configuration for one detection run.
///
/// Can be serialized to/from JSON for reproducible runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectConfig {
    /// Path to the image to analyze
    pub image_path: PathBuf,

    /// Path to the reference palette CSV (columns: color, code, R, G, B).
    /// This path is honored; there is no hardcoded fallback location.
    pub palette_path: PathBuf,

    /// Maximum dimension after downsampling
    #[serde(default = "default_resize_threshold")]
    pub resize_threshold: u32,

    /// Sampling interval over frequency-ranked detected colors
    #[serde(default = "default_sample_stride")]
    pub sample_stride: usize,
}

fn default_resize_threshold() -> u32 {
    DEFAULT_RESIZE_THRESHOLD
}

fn default_sample_stride() -> usize {
    DEFAULT_SAMPLE_STRIDE
}

impl Default for DetectConfig {
    fn default() -> Self {
        Self {
            image_path: PathBuf::new(),
            palette_path: PathBuf::from(DEFAULT_PALETTE_FILE),
            resize_threshold: DEFAULT_RESIZE_THRESHOLD,
            sample_stride: DEFAULT_SAMPLE_STRIDE,
        }
    }
}

impl DetectConfig {
    /// Load configuration from JSON file
    pub fn from_json_file(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &std::path::Path) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
