//! EXIF orientation handling.
//!
//! Only the pure rotations (orientation values 3, 6, 8) are corrected.
//! The mirrored orientations (2, 4, 5, 7) pass through unchanged; they
//! are rare in practice, coming from scanners and front cameras rather
//! than regular captures.

use std::io::Cursor;

use image::DynamicImage;

/// EXIF orientation tag values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum Orientation {
    Normal = 1,
    FlipHorizontal = 2,
    Rotate180 = 3,
    FlipVertical = 4,
    Transpose = 5,
    Rotate90 = 6,
    Transverse = 7,
    Rotate270 = 8,
}

impl Orientation {
    /// Creates an `Orientation` from the raw tag value.
    pub fn from_u16(value: u16) -> Option<Self> {
        match value {
            1 => Some(Self::Normal),
            2 => Some(Self::FlipHorizontal),
            3 => Some(Self::Rotate180),
            4 => Some(Self::FlipVertical),
            5 => Some(Self::Transpose),
            6 => Some(Self::Rotate90),
            7 => Some(Self::Transverse),
            8 => Some(Self::Rotate270),
            _ => None,
        }
    }

    /// Whether this orientation involves a mirror flip.
    pub fn is_mirrored(&self) -> bool {
        matches!(
            self,
            Self::FlipHorizontal | Self::FlipVertical | Self::Transpose | Self::Transverse
        )
    }
}

/// Reads the EXIF orientation tag from a JPEG byte stream.
///
/// Returns `None` when there is no EXIF block, no orientation field,
/// or the value is outside 1..=8.
pub fn read_orientation(bytes: &[u8]) -> Option<Orientation> {
    let mut cursor = Cursor::new(bytes);
    let exif = exif::Reader::new().read_from_container(&mut cursor).ok()?;

    let field = exif.get_field(exif::Tag::Orientation, exif::In::PRIMARY)?;
    let value = field.value.get_uint(0)?;

    Orientation::from_u16(value as u16)
}

/// Rotates the raster upright according to the orientation tag.
///
/// Mirrored orientations are returned unchanged (see module docs).
pub fn apply_orientation(raster: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Rotate180 => raster.rotate180(),
        Orientation::Rotate90 => raster.rotate90(),
        Orientation::Rotate270 => raster.rotate270(),
        Orientation::Normal
        | Orientation::FlipHorizontal
        | Orientation::FlipVertical
        | Orientation::Transpose
        | Orientation::Transverse => raster,
    }
}
