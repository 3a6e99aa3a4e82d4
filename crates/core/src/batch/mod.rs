//! Batch orchestration over the transform pipeline.
//!
//! A batch shares one [`TransformOptions`](crate::pipeline::TransformOptions)
//! across an ordered sequence of source images. Conversions run
//! concurrently and independently; per-image failures are dropped from
//! the result rather than failing the batch, which fails only when it
//! is empty or when every slot failed.

mod runner;
mod types;

pub use runner::convert_batch;
pub use types::{BatchError, BatchOutcome, BatchResult};
