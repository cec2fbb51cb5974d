//! Core types for image decoding.

use thiserror::Error;

/// Error types for image decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The file could not be read (missing, permissions, ...).
    #[error("I/O error: {0}")]
    IoError(String),

    /// The file format is not recognized or supported.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The image file is corrupted or incomplete.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),
}

/// Channel layout of a source image before normalization.
///
/// Palette images never show up here: the PNG, GIF and BMP decoders
/// expand them to `Rgb` or `Rgba` on the way in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceLayout {
    /// 8-bit luminance.
    Gray,
    /// 8-bit luminance with alpha.
    GrayAlpha,
    /// 8-bit RGB.
    Rgb,
    /// 8-bit RGBA, already canonical.
    Rgba,
    /// 16-bit or floating point samples, down-converted to 8 bits.
    Wide {
        /// Whether the wide source had an alpha channel.
        alpha: bool,
    },
}

impl SourceLayout {
    /// Returns true if the source carried its own alpha channel.
    #[inline]
    pub fn has_alpha(self) -> bool {
        match self {
            SourceLayout::GrayAlpha | SourceLayout::Rgba => true,
            SourceLayout::Wide { alpha } => alpha,
            SourceLayout::Gray | SourceLayout::Rgb => false,
        }
    }
}

/// An image with 8-bit RGBA pixel data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaCanvas {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGBA pixel data in row-major order (4 bytes per pixel).
    /// Length should be width * height * 4.
    pub pixels: Vec<u8>,
}

impl RgbaCanvas {
    /// Create a new RgbaCanvas with the given dimensions and pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            (width as usize) * (height as usize) * 4,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a canvas where every pixel has the same value.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let count = (width as usize) * (height as usize);
        Self::new(width, height, rgba.repeat(count))
    }

    /// Create an RgbaCanvas from an image::RgbaImage.
    pub fn from_rgba_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        let pixels = img.into_raw();
        Self {
            width,
            height,
            pixels,
        }
    }

    /// The RGBA value at (x, y), or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y as usize) * (self.width as usize) + x as usize) * 4;
        let px = self.pixels.get(idx..idx + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Overwrite the RGBA value at (x, y). Out-of-bounds writes are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = ((y as usize) * (self.width as usize) + x as usize) * 4;
        if let Some(px) = self.pixels.get_mut(idx..idx + 4) {
            px.copy_from_slice(&rgba);
        }
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Get the size of the pixel buffer in bytes.
    pub fn byte_size(&self) -> usize {
        self.pixels.len()
    }

    /// Check if this is an empty/invalid image.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }
}
