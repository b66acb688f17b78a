//! Image encoders for the two export paths.
//!
//! The upload path is lossy JPEG (the generation service reads layout, not
//! pixels); the preview path is lossless PNG wrapped in a data URI so the
//! browser can display it without a network fetch.
//!
//! ERROR HANDLING
//! ==============
//! Encoder failures surface as [`ExportError`] instead of empty byte vectors
//! so callers can log a diagnostic and abort the action instead of shipping
//! a blank payload.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use std::io::Cursor;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::codecs::jpeg::JpegEncoder;
use image::{ImageFormat, RgbImage, RgbaImage};
use thiserror::Error;

use crate::consts::JPEG_QUALITY;
use crate::raster::Raster;

/// Prefix of every preview data URI.
pub const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Failure to encode the raster into an image payload.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The raster dimensions and buffer length disagree.
    #[error("raster buffer does not match its stated dimensions")]
    InvalidBuffer,
    /// The underlying codec rejected the image.
    #[error("image encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

/// JPEG-encode the raster for upload.
///
/// # Errors
///
/// Returns [`ExportError`] when the encoder cannot produce bytes.
pub fn jpeg_bytes(raster: &Raster) -> Result<Vec<u8>, ExportError> {
    // JPEG has no alpha; drop the (always-opaque) channel first.
    let rgb: Vec<u8> = raster
        .as_rgba()
        .chunks_exact(4)
        .flat_map(|px| [px[0], px[1], px[2]])
        .collect();
    let img = RgbImage::from_raw(raster.width(), raster.height(), rgb)
        .ok_or(ExportError::InvalidBuffer)?;

    let mut out = Vec::new();
    let encoder = JpegEncoder::new_with_quality(Cursor::new(&mut out), JPEG_QUALITY);
    img.write_with_encoder(encoder)?;
    Ok(out)
}

/// PNG-encode the raster and wrap it as a self-contained data URI.
///
/// # Errors
///
/// Returns [`ExportError`] when the encoder cannot produce bytes.
pub fn png_data_uri(raster: &Raster) -> Result<String, ExportError> {
    let img = RgbaImage::from_raw(raster.width(), raster.height(), raster.as_rgba().to_vec())
        .ok_or(ExportError::InvalidBuffer)?;

    let mut out = Vec::new();
    img.write_to(&mut Cursor::new(&mut out), ImageFormat::Png)?;
    Ok(format!("{PNG_DATA_URI_PREFIX}{}", STANDARD.encode(&out)))
}
