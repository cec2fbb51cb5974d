//! PNG encoding for output.

use std::io::Cursor;
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use thiserror::Error;

use crate::decode::RgbaCanvas;

/// Errors that can occur during PNG encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    EncodingFailed(String),

    /// The encoded bytes could not be written out
    #[error("Write failed: {0}")]
    WriteFailed(String),
}

/// Encode RGBA pixel data to PNG bytes.
///
/// # Arguments
///
/// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
///
/// # Returns
///
/// PNG-encoded bytes on success, or an error if encoding fails.
pub fn encode_png(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, EncodeError> {
    // Validate dimensions
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    // Validate pixel data length
    let expected_len = (width as usize) * (height as usize) * 4;
    if pixels.len() != expected_len {
        return Err(EncodeError::InvalidPixelData {
            expected: expected_len,
            actual: pixels.len(),
        });
    }

    let mut buffer = Cursor::new(Vec::new());

    PngEncoder::new(&mut buffer)
        .write_image(pixels, width, height, ExtendedColorType::Rgba8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

/// Encode a canvas as PNG and write it to `path`, replacing any existing file.
///
/// Encoding happens fully in memory first, so a failed encode never
/// truncates an existing file.
///
/// # Errors
///
/// Returns `EncodeError::WriteFailed` if the file cannot be created or
/// written (missing parent directory, permissions), otherwise the same
/// errors as [`encode_png`].
pub fn write_png<P: AsRef<Path>>(canvas: &RgbaCanvas, path: P) -> Result<(), EncodeError> {
    let bytes = encode_png(&canvas.pixels, canvas.width, canvas.height)?;
    std::fs::write(path.as_ref(), bytes).map_err(|e| EncodeError::WriteFailed(e.to_string()))
}


// ============================================================================
// Property-Based Tests
// ============================================================================
