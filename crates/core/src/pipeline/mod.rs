//! Transform pipeline for converting JPEG images to PNG.
//!
//! The pipeline is a stateless function of `(bytes, options)` with a
//! fixed operation order:
//!
//! 1. Decode the JPEG (capturing the embedded ICC profile)
//! 2. Optionally rotate per the EXIF orientation tag
//! 3. Optionally resize with one of three fit strategies (max/crop/scale)
//! 4. Encode as PNG, carrying or stripping metadata
//!
//! # Example
//!
//! ```ignore
//! use repix_core::pipeline::{convert, FitMode, ResizeMode, TransformOptions};
//!
//! let options = TransformOptions {
//!     resize_mode: ResizeMode::Resize,
//!     target_width: 800,
//!     target_height: 600,
//!     fit: FitMode::Max,
//!     auto_orient: true,
//!     ..Default::default()
//! };
//!
//! let png_bytes = convert(&jpeg_bytes, &options)?;
//! ```

mod convert;
mod decode;
mod encode;
mod error;
mod orientation;
mod resize;
mod types;

pub use convert::convert;
pub use decode::{decode_jpeg, DecodedJpeg};
pub use encode::encode_png;
pub use error::PipelineError;
pub use orientation::{apply_orientation, read_orientation, Orientation};
pub use resize::resize_raster;
pub use types::{FitMode, ResizeMode, TransformOptions, DEFAULT_QUALITY};
