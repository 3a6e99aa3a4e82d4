//! Types for the batch orchestrator.

use thiserror::Error;

use crate::pipeline::PipelineError;

/// Per-slot result of a batch conversion, before failures are dropped.
///
/// Keeping the index explicit makes the "drop failed slots" step in the
/// runner a visible mapping rather than a hidden default.
#[derive(Debug)]
pub struct BatchOutcome {
    /// Position of the source image in the input sequence.
    pub index: usize,
    /// Converted PNG bytes, or the failure for this slot.
    pub outcome: Result<Vec<u8>, PipelineError>,
}

/// Aggregate result of a batch with at least one success.
#[derive(Debug)]
pub struct BatchResult {
    /// Converted PNG payloads, failed slots removed, input order kept.
    pub images: Vec<Vec<u8>>,
    /// Number of images the batch attempted.
    pub attempted: usize,
    /// Number of slots that failed and were dropped.
    pub failed: usize,
}

/// Errors that fail the whole batch.
#[derive(Debug, Error)]
pub enum BatchError {
    /// No input images were supplied; the batch never starts.
    #[error("No images to convert")]
    Empty,

    /// Every conversion in the batch failed.
    #[error("All {count} conversions failed")]
    AllFailed { count: usize },
}
