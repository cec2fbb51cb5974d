//! Format-sniffing decode from bytes or from a file path.

use std::io::Cursor;
use std::path::Path;

use image::{ImageError, ImageReader};

use super::{normalize_to_rgba, DecodeError, RgbaCanvas, SourceLayout};

/// Decode an image from bytes and normalize it to RGBA.
///
/// The format is guessed from the content, not from a file extension.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the bytes are not a recognized
/// image format.
/// Returns `DecodeError::CorruptedFile` if the image is recognized but
/// cannot be decoded.
pub fn decode_rgba(bytes: &[u8]) -> Result<(RgbaCanvas, SourceLayout), DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }

    let img = reader.decode().map_err(map_image_error)?;

    Ok(normalize_to_rgba(img))
}

/// Read an image file and normalize it to RGBA.
///
/// The whole file is read up front; no handle outlives this call.
///
/// # Errors
///
/// Returns `DecodeError::IoError` if the file does not exist or cannot be
/// read, otherwise the same errors as [`decode_rgba`].
pub fn load_rgba<P: AsRef<Path>>(path: P) -> Result<(RgbaCanvas, SourceLayout), DecodeError> {
    let bytes = std::fs::read(path.as_ref()).map_err(|e| DecodeError::IoError(e.to_string()))?;
    decode_rgba(&bytes)
}

fn map_image_error(err: ImageError) -> DecodeError {
    match err {
        ImageError::Unsupported(_) => DecodeError::InvalidFormat,
        other => DecodeError::CorruptedFile(other.to_string()),
    }
}
