//! Integration tests for the full convert/batch lifecycle.
//!
//! These exercise the pipeline end to end on in-memory fixtures:
//! decode, orientation, resize, metadata carry, PNG re-decode.

use std::io::Cursor;

use image::codecs::png::PngDecoder;
use image::{DynamicImage, ImageDecoder};

use repix_core::testing::fixtures;
use repix_core::{
    convert, convert_batch, BatchError, FitMode, ResizeMode, TransformOptions,
};

fn decode_png(bytes: &[u8]) -> (DynamicImage, Option<Vec<u8>>) {
    let mut decoder = PngDecoder::new(Cursor::new(bytes)).expect("output is not a PNG");
    let icc = decoder.icc_profile().ok().flatten();
    let img = DynamicImage::from_decoder(decoder).unwrap();
    (img, icc)
}

// =============================================================================
// Pixel fidelity
// =============================================================================

#[test]
fn no_transform_round_trip_preserves_raster() {
    let jpeg = fixtures::jpeg_image(40, 30);

    // The raster the source decodes to (JPEG loss already baked in).
    let source = image::load_from_memory(&jpeg).unwrap();

    let png = convert(&jpeg, &TransformOptions::default()).unwrap();
    let (output, _) = decode_png(&png);

    assert_eq!((output.width(), output.height()), (40, 30));
    assert_eq!(source.to_rgb8().as_raw(), output.to_rgb8().as_raw());
}

// =============================================================================
// Metadata carry
// =============================================================================

#[test]
fn icc_profile_preserved_by_default() {
    let jpeg = fixtures::jpeg_image_with_icc(20, 20, fixtures::TEST_ICC_PROFILE);
    let png = convert(&jpeg, &TransformOptions::default()).unwrap();
    let (_, icc) = decode_png(&png);
    assert_eq!(icc.as_deref(), Some(fixtures::TEST_ICC_PROFILE));
}

#[test]
fn strip_metadata_drops_icc_profile() {
    let jpeg = fixtures::jpeg_image_with_icc(20, 20, fixtures::TEST_ICC_PROFILE);
    let options = TransformOptions {
        strip_metadata: true,
        ..Default::default()
    };
    let png = convert(&jpeg, &options).unwrap();
    let (_, icc) = decode_png(&png);
    assert_eq!(icc, None);
}

#[test]
fn source_without_metadata_yields_no_profile() {
    let jpeg = fixtures::jpeg_image(20, 20);
    let png = convert(&jpeg, &TransformOptions::default()).unwrap();
    let (_, icc) = decode_png(&png);
    assert_eq!(icc, None);
}

// =============================================================================
// Orientation + resize interplay
// =============================================================================

#[test]
fn auto_orient_applies_before_resize() {
    // 80x40 tagged 90 CW: upright raster is 40x80, so a scale-to-40x40
    // squashes the *rotated* raster.
    let jpeg = fixtures::jpeg_image_with_orientation(80, 40, 6);
    let options = TransformOptions {
        resize_mode: ResizeMode::Resize,
        target_width: 40,
        target_height: 40,
        fit: FitMode::Scale,
        auto_orient: true,
        ..Default::default()
    };
    let png = convert(&jpeg, &options).unwrap();
    let (output, _) = decode_png(&png);
    assert_eq!((output.width(), output.height()), (40, 40));
}

#[test]
fn orientation_180_keeps_dimensions_but_flips_pixels() {
    let jpeg = fixtures::jpeg_image_with_orientation(16, 8, 3);
    let options = TransformOptions {
        auto_orient: true,
        ..Default::default()
    };
    let png = convert(&jpeg, &options).unwrap();
    let (output, _) = decode_png(&png);
    assert_eq!((output.width(), output.height()), (16, 8));

    let unrotated = convert(&jpeg, &TransformOptions::default()).unwrap();
    let (plain, _) = decode_png(&unrotated);
    assert_ne!(plain.to_rgb8().as_raw(), output.to_rgb8().as_raw());
}

// =============================================================================
// Batch semantics
// =============================================================================

#[tokio::test]
async fn batch_preserves_order_of_survivors() {
    // Distinguish the two valid images by size.
    let images = vec![
        fixtures::jpeg_image(10, 10),
        fixtures::CORRUPT_JPEG.to_vec(),
        fixtures::jpeg_image(20, 20),
    ];
    let result = convert_batch(images, TransformOptions::default())
        .await
        .unwrap();

    assert_eq!(result.images.len(), 2);
    assert_eq!(result.failed, 1);

    let (first, _) = decode_png(&result.images[0]);
    let (second, _) = decode_png(&result.images[1]);
    assert_eq!(first.width(), 10);
    assert_eq!(second.width(), 20);
}

#[tokio::test]
async fn batch_all_corrupt_is_overall_failure() {
    let images = vec![
        fixtures::CORRUPT_JPEG.to_vec(),
        fixtures::CORRUPT_JPEG.to_vec(),
        fixtures::CORRUPT_JPEG.to_vec(),
    ];
    let result = convert_batch(images, TransformOptions::default()).await;
    assert!(matches!(result, Err(BatchError::AllFailed { count: 3 })));
}

#[tokio::test]
async fn batch_shares_options_across_images() {
    let images = vec![fixtures::jpeg_image(40, 20), fixtures::jpeg_image(20, 40)];
    let options = TransformOptions {
        resize_mode: ResizeMode::Resize,
        target_width: 10,
        target_height: 10,
        fit: FitMode::Crop,
        ..Default::default()
    };
    let result = convert_batch(images, options).await.unwrap();
    for png in &result.images {
        let (img, _) = decode_png(png);
        assert_eq!((img.width(), img.height()), (10, 10));
    }
}
