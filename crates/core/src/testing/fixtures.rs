//! In-memory JPEG fixtures.
//!
//! All fixtures are generated deterministically so tests never depend
//! on files on disk. The EXIF fixture splices a minimal APP1 segment
//! containing only the orientation tag into an encoded JPEG.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbImage};

/// Bytes that are not a decodable JPEG.
pub const CORRUPT_JPEG: &[u8] = b"definitely not a jpeg stream";

/// A recognizable stand-in for an ICC color profile.
pub const TEST_ICC_PROFILE: &[u8] = b"repix-test-icc-profile-payload";

/// Deterministic gradient raster.
pub fn gradient_raster(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([
            ((x * 255) / width.max(1)) as u8,
            ((y * 255) / height.max(1)) as u8,
            128,
        ])
    })
}

/// A plain JPEG with no EXIF block and no ICC profile.
pub fn jpeg_image(width: u32, height: u32) -> Vec<u8> {
    let img = gradient_raster(width, height);
    let mut buf = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buf, 90);
    encoder
        .write_image(img.as_raw(), width, height, ExtendedColorType::Rgb8)
        .expect("JPEG fixture encoding failed");
    buf.into_inner()
}

/// A JPEG carrying an ICC profile in its APP2 segment.
pub fn jpeg_image_with_icc(width: u32, height: u32, profile: &[u8]) -> Vec<u8> {
    let img = gradient_raster(width, height);
    let mut buf = Cursor::new(Vec::new());
    let mut encoder = JpegEncoder::new_with_quality(&mut buf, 90);
    encoder
        .set_icc_profile(profile.to_vec())
        .expect("JPEG encoder rejected ICC profile");
    encoder
        .write_image(img.as_raw(), width, height, ExtendedColorType::Rgb8)
        .expect("JPEG fixture encoding failed");
    buf.into_inner()
}

/// A JPEG tagged with the given EXIF orientation value (1..=8).
///
/// The tag is injected as a hand-built APP1 segment right after the
/// SOI marker; decoders that ignore EXIF see an ordinary JPEG.
pub fn jpeg_image_with_orientation(width: u32, height: u32, orientation: u16) -> Vec<u8> {
    let plain = jpeg_image(width, height);
    splice_exif_orientation(&plain, orientation)
}

/// Inserts an APP1 EXIF segment with a single orientation entry after
/// the SOI marker of `jpeg`.
fn splice_exif_orientation(jpeg: &[u8], orientation: u16) -> Vec<u8> {
    assert_eq!(&jpeg[0..2], &[0xFF, 0xD8], "fixture input is not a JPEG");

    // Little-endian TIFF with one IFD0 entry: tag 0x0112 (Orientation),
    // type SHORT, count 1.
    let [lo, hi] = orientation.to_le_bytes();
    let tiff: [u8; 26] = [
        0x49, 0x49, 0x2A, 0x00, // "II", magic 42
        0x08, 0x00, 0x00, 0x00, // offset of IFD0
        0x01, 0x00, // entry count
        0x12, 0x01, 0x03, 0x00, // tag 0x0112, type SHORT
        0x01, 0x00, 0x00, 0x00, // count 1
        lo, hi, 0x00, 0x00, // value + padding
        0x00, 0x00, 0x00, 0x00, // no next IFD
    ];

    let exif_body: Vec<u8> = [b"Exif\x00\x00".as_slice(), &tiff].concat();
    let segment_len = (exif_body.len() + 2) as u16;

    let mut out = Vec::with_capacity(jpeg.len() + exif_body.len() + 4);
    out.extend_from_slice(&jpeg[0..2]);
    out.extend_from_slice(&[0xFF, 0xE1]);
    out.extend_from_slice(&segment_len.to_be_bytes());
    out.extend_from_slice(&exif_body);
    out.extend_from_slice(&jpeg[2..]);
    out
}
