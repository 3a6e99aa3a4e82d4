//! Raster resizing with the three fit strategies.

use image::imageops::FilterType;
use image::DynamicImage;

use super::types::FitMode;

/// Maps the raster into the `width` x `height` box per the fit mode.
///
/// All three strategies resample with Lanczos3.
pub fn resize_raster(raster: DynamicImage, width: u32, height: u32, fit: FitMode) -> DynamicImage {
    match fit {
        FitMode::Max => raster.resize(width, height, FilterType::Lanczos3),
        FitMode::Crop => raster.resize_to_fill(width, height, FilterType::Lanczos3),
        FitMode::Scale => raster.resize_exact(width, height, FilterType::Lanczos3),
    }
}
