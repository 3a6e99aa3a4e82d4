//! JPEG decoding.

use std::io::Cursor;

use image::codecs::jpeg::JpegDecoder;
use image::{DynamicImage, ImageDecoder};

use super::error::PipelineError;

/// A decoded JPEG: the pixel raster plus the metadata that can be
/// carried into the output encoding.
pub struct DecodedJpeg {
    pub raster: DynamicImage,
    /// Embedded ICC color profile, if the source had one.
    pub icc_profile: Option<Vec<u8>>,
}

/// Decodes a JPEG byte stream into a raster.
///
/// The ICC profile is read off the decoder before the pixel data is
/// consumed; a missing or unreadable profile is not an error.
pub fn decode_jpeg(bytes: &[u8]) -> Result<DecodedJpeg, PipelineError> {
    let mut decoder =
        JpegDecoder::new(Cursor::new(bytes)).map_err(|e| PipelineError::decode(e.to_string()))?;

    let icc_profile = decoder.icc_profile().ok().flatten();

    let raster =
        DynamicImage::from_decoder(decoder).map_err(|e| PipelineError::decode(e.to_string()))?;

    Ok(DecodedJpeg {
        raster,
        icc_profile,
    })
}
