//! Error types for the dominant-colors pipeline

use thiserror::Error;

/// Result type alias for detection operations
pub type Result<T> = std::result::Result<T, DetectError>;

/// Error types for the color detection pipeline.
///
/// Every error is fatal to the run: the pipeline is a single linear batch
/// job with no retry or partial-result policy.
#[derive(Error, Debug)]
pub enum DetectError {
    /// Image file could not be opened or decoded
    #[error("Failed to load image: {message}")]
    ImageLoad {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Reference palette table could not be read or parsed
    #[error("Failed to load palette: {message}")]
    PaletteLoad {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Reference palette has zero rows; matching cannot produce a result
    #[error("Reference palette is empty")]
    EmptyPalette,

    /// A matched code was absent from the palette during name resolution.
    /// Unreachable in normal operation since the matcher only emits palette
    /// codes, but handled defensively.
    #[error("Color code not found in palette: {code}")]
    UnknownCode { code: String },

    /// Invalid input parameters
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },
}

impl DetectError {
    /// Create an image load error with context
    pub fn image_load<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ImageLoad {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a palette load error with context
    pub fn palette_load<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::PaletteLoad {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            DetectError::ImageLoad { .. } => {
                "Could not load the image. Please check the file format and try again.".to_string()
            }
            DetectError::PaletteLoad { .. } => {
                "Could not read the reference color table. Expected a CSV with columns: color, code, R, G, B.".to_string()
            }
            DetectError::EmptyPalette => {
                "The reference color table has no entries. Please provide a non-empty table.".to_string()
            }
            DetectError::UnknownCode { code } => {
                format!("Internal inconsistency: matched code '{}' is missing from the palette.", code)
            }
            DetectError::InvalidParameter { parameter, value } => {
                format!("Invalid value '{}' for parameter '{}'.", value, parameter)
            }
        }
    }
}
