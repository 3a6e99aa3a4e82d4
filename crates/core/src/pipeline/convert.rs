//! The per-image transform pipeline.

use tracing::debug;

use super::decode::decode_jpeg;
use super::encode::encode_png;
use super::error::PipelineError;
use super::orientation::{apply_orientation, read_orientation};
use super::resize::resize_raster;
use super::types::TransformOptions;

/// Converts a JPEG byte stream to PNG.
///
/// A pure function of `(bytes, options)`; no state is carried between
/// invocations. The processing order is fixed — decode, auto-orient,
/// resize, encode — because reordering changes the visual result
/// (resizing before rotation would apply the box to the wrong axes).
pub fn convert(bytes: &[u8], options: &TransformOptions) -> Result<Vec<u8>, PipelineError> {
    let decoded = decode_jpeg(bytes)?;
    let mut raster = decoded.raster;

    if options.auto_orient {
        if let Some(orientation) = read_orientation(bytes) {
            debug!(?orientation, "Applying EXIF orientation");
            raster = apply_orientation(raster, orientation);
        }
    }

    if let Some((width, height)) = options.resize_target() {
        debug!(width, height, fit = ?options.fit, "Resizing raster");
        raster = resize_raster(raster, width, height, options.fit);
    }

    let icc_profile = if options.strip_metadata {
        None
    } else {
        decoded.icc_profile
    };

    encode_png(&raster, icc_profile.as_deref(), options.quality)
}
