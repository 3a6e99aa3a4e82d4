//! Conversion API handler.
//!
//! `POST /api/convert` takes a multipart form with one or more `image`
//! file parts plus flat text fields mirroring the transform options.
//! The response is a JSON array of base64-encoded PNG payloads; images
//! that failed to convert are silently absent from the array (order of
//! the survivors follows the upload order).

use std::time::Instant;

use axum::{
    extract::multipart::{Multipart, MultipartError},
    http::StatusCode,
    Json,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::Serialize;
use tracing::{info, warn};

use repix_core::{
    convert_batch, pipeline::DEFAULT_QUALITY, BatchError, FitMode, ResizeMode, TransformOptions,
};

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn error_response(status: StatusCode, message: &str) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

/// Text fields as they arrive on the wire, before interpretation.
#[derive(Debug, Default)]
struct RawFields {
    resize_option: Option<String>,
    width: Option<String>,
    height: Option<String>,
    fit_option: Option<String>,
    quality: Option<String>,
    strip: Option<String>,
    auto_orient: Option<String>,
}

impl RawFields {
    /// Interprets the string-encoded fields, falling back to defaults
    /// for absent or unparsable values.
    fn into_options(self) -> TransformOptions {
        TransformOptions {
            resize_mode: self
                .resize_option
                .as_deref()
                .map(ResizeMode::parse)
                .unwrap_or_default(),
            target_width: parse_u32(self.width),
            target_height: parse_u32(self.height),
            fit: self
                .fit_option
                .as_deref()
                .map(FitMode::parse)
                .unwrap_or_default(),
            quality: self
                .quality
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_QUALITY),
            strip_metadata: parse_flag(self.strip),
            auto_orient: parse_flag(self.auto_orient),
        }
    }
}

fn parse_u32(value: Option<String>) -> u32 {
    value.and_then(|s| s.parse().ok()).unwrap_or(0)
}

fn parse_flag(value: Option<String>) -> bool {
    value.and_then(|s| s.parse().ok()).unwrap_or(false)
}

/// POST /api/convert
///
/// Convert a batch of uploaded JPEGs to PNG with one shared set of
/// options. Rejects the whole request up front when any upload has a
/// content type other than `image/jpeg` / `image/jpg`.
pub async fn convert_images(mut multipart: Multipart) -> Result<Json<Vec<String>>, ApiError> {
    let mut images: Vec<Vec<u8>> = Vec::new();
    let mut fields = RawFields::default();

    while let Some(field) = next_field(&mut multipart).await? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("image") => {
                let content_type = field.content_type().map(str::to_owned);
                if !matches!(
                    content_type.as_deref(),
                    Some("image/jpeg") | Some("image/jpg")
                ) {
                    warn!(?content_type, "Rejecting upload with disallowed type");
                    return Err(error_response(StatusCode::BAD_REQUEST, "Invalid image type"));
                }
                let bytes = field.bytes().await.map_err(read_error)?;
                images.push(bytes.to_vec());
            }
            Some("resizeOption") => fields.resize_option = field.text().await.ok(),
            Some("width") => fields.width = field.text().await.ok(),
            Some("height") => fields.height = field.text().await.ok(),
            Some("fitOption") => fields.fit_option = field.text().await.ok(),
            Some("quality") => fields.quality = field.text().await.ok(),
            Some("strip") => fields.strip = field.text().await.ok(),
            Some("autoOrient") => fields.auto_orient = field.text().await.ok(),
            // Unknown parts are ignored.
            _ => {}
        }
    }

    if images.is_empty() {
        return Err(error_response(StatusCode::BAD_REQUEST, "No images provided"));
    }

    let options = fields.into_options();
    let count = images.len();
    let start = Instant::now();

    match convert_batch(images, options).await {
        Ok(batch) => {
            info!(
                attempted = batch.attempted,
                failed = batch.failed,
                duration_ms = start.elapsed().as_millis() as u64,
                "Batch conversion finished"
            );
            let encoded = batch.images.iter().map(|png| BASE64.encode(png)).collect();
            Ok(Json(encoded))
        }
        Err(BatchError::Empty) => {
            Err(error_response(StatusCode::BAD_REQUEST, "No images provided"))
        }
        Err(e @ BatchError::AllFailed { .. }) => {
            warn!(count, error = %e, "Batch conversion failed");
            Err(error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to convert images",
            ))
        }
    }
}

async fn next_field(
    multipart: &mut Multipart,
) -> Result<Option<axum::extract::multipart::Field<'_>>, ApiError> {
    multipart.next_field().await.map_err(read_error)
}

fn read_error(e: MultipartError) -> ApiError {
    warn!(error = %e, "Failed to read multipart form");
    error_response(StatusCode::BAD_REQUEST, "Failed to read form data")
}
