//! PNG encoding.

use std::io::Cursor;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{DynamicImage, ImageEncoder};

use super::error::PipelineError;

/// Encodes the raster as PNG.
///
/// `quality` is an opaque compression-effort knob: PNG is lossless
/// regardless, lower values just trade CPU time for smaller files.
/// When `icc_profile` is present it is embedded in the output.
pub fn encode_png(
    raster: &DynamicImage,
    icc_profile: Option<&[u8]>,
    quality: u8,
) -> Result<Vec<u8>, PipelineError> {
    let mut buf = Cursor::new(Vec::new());

    let mut encoder =
        PngEncoder::new_with_quality(&mut buf, compression_for(quality), FilterType::Adaptive);

    if let Some(profile) = icc_profile {
        encoder
            .set_icc_profile(profile.to_vec())
            .map_err(|e| PipelineError::encode(e.to_string()))?;
    }

    raster
        .write_with_encoder(encoder)
        .map_err(|e| PipelineError::encode(e.to_string()))?;

    Ok(buf.into_inner())
}

/// Maps the 1..=100 quality knob onto the encoder's compression types.
/// Lower quality buys more compression effort, hence smaller files.
fn compression_for(quality: u8) -> CompressionType {
    match quality {
        0..=39 => CompressionType::Best,
        40..=89 => CompressionType::Default,
        _ => CompressionType::Fast,
    }
}
