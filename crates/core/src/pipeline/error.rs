//! Error types for the transform pipeline.

use thiserror::Error;

/// Errors that can occur while converting a single image.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Input bytes are not a decodable JPEG.
    #[error("Failed to decode JPEG: {reason}")]
    Decode { reason: String },

    /// Raster could not be encoded as PNG.
    #[error("Failed to encode PNG: {reason}")]
    Encode { reason: String },
}

impl PipelineError {
    /// Creates a new decode error.
    pub fn decode(reason: impl Into<String>) -> Self {
        Self::Decode {
            reason: reason.into(),
        }
    }

    /// Creates a new encode error.
    pub fn encode(reason: impl Into<String>) -> Self {
        Self::Encode {
            reason: reason.into(),
        }
    }
}
