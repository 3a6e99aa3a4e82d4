//! Batch conversion runner.

use std::sync::Arc;
use std::time::Instant;

use futures::future::join_all;
use tracing::warn;

use super::types::{BatchError, BatchOutcome, BatchResult};
use crate::metrics::{BATCH_SIZE, CONVERSIONS_TOTAL, CONVERSION_DURATION};
use crate::pipeline::{convert, PipelineError, TransformOptions};

/// Converts a batch of JPEG payloads with one shared set of options.
///
/// Each image runs independently on the blocking thread pool; there is
/// no shared mutable state between conversions and no cancellation once
/// a conversion has started. The runner waits for every slot to finish
/// rather than short-circuiting on the first failure.
///
/// Failed slots are logged, counted, and dropped from the result; the
/// relative order of successful slots follows the input order. The
/// batch as a whole fails only when the input is empty or when zero
/// images succeed.
pub async fn convert_batch(
    images: Vec<Vec<u8>>,
    options: TransformOptions,
) -> Result<BatchResult, BatchError> {
    if images.is_empty() {
        return Err(BatchError::Empty);
    }

    let attempted = images.len();
    BATCH_SIZE.observe(attempted as f64);

    let options = Arc::new(options);
    let handles: Vec<_> = images
        .into_iter()
        .enumerate()
        .map(|(index, bytes)| {
            let options = Arc::clone(&options);
            tokio::task::spawn_blocking(move || {
                let start = Instant::now();
                let outcome = convert(&bytes, &options);
                CONVERSION_DURATION.observe(start.elapsed().as_secs_f64());
                BatchOutcome { index, outcome }
            })
        })
        .collect();

    // join_all preserves the order of the handles, so outcomes arrive
    // already sorted by input index.
    let mut result = BatchResult {
        images: Vec::with_capacity(attempted),
        attempted,
        failed: 0,
    };

    for joined in join_all(handles).await {
        match joined {
            Ok(BatchOutcome {
                outcome: Ok(png), ..
            }) => {
                CONVERSIONS_TOTAL.with_label_values(&["success"]).inc();
                result.images.push(png);
            }
            Ok(BatchOutcome {
                index,
                outcome: Err(e),
            }) => {
                record_failure(&e);
                warn!(index, error = %e, "Dropping failed conversion from batch");
                result.failed += 1;
            }
            // A panicked conversion task is treated like any other
            // per-image failure: the slot is dropped.
            Err(join_error) => {
                CONVERSIONS_TOTAL.with_label_values(&["panic"]).inc();
                warn!(error = %join_error, "Conversion task aborted");
                result.failed += 1;
            }
        }
    }

    if result.images.is_empty() {
        return Err(BatchError::AllFailed { count: attempted });
    }

    Ok(result)
}

fn record_failure(error: &PipelineError) {
    let label = match error {
        PipelineError::Decode { .. } => "decode_error",
        PipelineError::Encode { .. } => "encode_error",
    };
    CONVERSIONS_TOTAL.with_label_values(&[label]).inc();
}
