//! Types for the transform pipeline.

use serde::{Deserialize, Serialize};

/// Default PNG quality when the caller omits the field.
pub const DEFAULT_QUALITY: u8 = 100;

/// Whether an image keeps its decoded dimensions or is resized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeMode {
    /// Keep the decoded dimensions.
    Original,
    /// Resize to the configured target box.
    Resize,
}

impl ResizeMode {
    /// Parses the wire value. Anything other than `"resize"` keeps the
    /// original dimensions.
    pub fn parse(value: &str) -> Self {
        match value {
            "resize" => Self::Resize,
            _ => Self::Original,
        }
    }
}

impl Default for ResizeMode {
    fn default() -> Self {
        Self::Original
    }
}

/// Policy for mapping an image into the target width/height box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitMode {
    /// Fit entirely within the box, preserving aspect ratio. The result
    /// may be smaller than the box in one dimension; never crops.
    Max,
    /// Cover the box, preserving aspect ratio, then crop the overflow.
    /// The result is exactly the target dimensions.
    Crop,
    /// Stretch to exactly the target dimensions, ignoring aspect ratio.
    Scale,
}

impl FitMode {
    /// Parses the wire value, defaulting to [`FitMode::Max`] for
    /// unrecognized input.
    pub fn parse(value: &str) -> Self {
        match value {
            "crop" => Self::Crop,
            "scale" => Self::Scale,
            _ => Self::Max,
        }
    }
}

impl Default for FitMode {
    fn default() -> Self {
        Self::Max
    }
}

/// Options for a single JPEG to PNG conversion.
///
/// A value object shared by every image in a batch. Numeric ranges are
/// not validated beyond what is documented here; `quality` is passed
/// through to the encoder as an opaque compression-effort knob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformOptions {
    /// Whether to resize at all.
    #[serde(default)]
    pub resize_mode: ResizeMode,
    /// Target width, meaningful only when `resize_mode` is `Resize`.
    /// Zero disables resizing.
    #[serde(default)]
    pub target_width: u32,
    /// Target height, meaningful only when `resize_mode` is `Resize`.
    /// Zero disables resizing.
    #[serde(default)]
    pub target_height: u32,
    /// Fit strategy applied when resizing.
    #[serde(default)]
    pub fit: FitMode,
    /// PNG compression quality in 1..=100. PNG is lossless regardless;
    /// this only tunes the compressor.
    #[serde(default = "default_quality")]
    pub quality: u8,
    /// Omit embedded metadata (ICC profile) from the output.
    #[serde(default)]
    pub strip_metadata: bool,
    /// Rotate the raster according to the EXIF orientation tag.
    #[serde(default)]
    pub auto_orient: bool,
}

fn default_quality() -> u8 {
    DEFAULT_QUALITY
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            resize_mode: ResizeMode::Original,
            target_width: 0,
            target_height: 0,
            fit: FitMode::Max,
            quality: DEFAULT_QUALITY,
            strip_metadata: false,
            auto_orient: false,
        }
    }
}

impl TransformOptions {
    /// The effective resize box, or `None` when no resize applies.
    ///
    /// Resizing requires `resize_mode = Resize` and both target
    /// dimensions to be positive.
    pub fn resize_target(&self) -> Option<(u32, u32)> {
        match self.resize_mode {
            ResizeMode::Resize if self.target_width > 0 && self.target_height > 0 => {
                Some((self.target_width, self.target_height))
            }
            _ => None,
        }
    }
}
