//! Channel layout normalization to canonical 8-bit RGBA.

use image::DynamicImage;

use super::{RgbaCanvas, SourceLayout};

/// Alpha given to pixels from sources without an alpha channel.
const OPAQUE: u8 = 255;

/// Convert a decoded image of any channel layout to an RGBA canvas.
///
/// 8-bit layouts are expanded explicitly:
///
/// * gray `l` becomes `(l, l, l, 255)`
/// * gray+alpha `(l, a)` becomes `(l, l, l, a)`
/// * rgb `(r, g, b)` becomes `(r, g, b, 255)`
/// * rgba is taken as-is
///
/// Anything wider (16-bit, float) is down-converted by the `image` crate
/// and reported as [`SourceLayout::Wide`].
pub fn normalize_to_rgba(img: DynamicImage) -> (RgbaCanvas, SourceLayout) {
    match img {
        DynamicImage::ImageLuma8(gray) => {
            let (width, height) = gray.dimensions();
            let pixels = expand_gray(gray.as_raw());
            (RgbaCanvas::new(width, height, pixels), SourceLayout::Gray)
        }
        DynamicImage::ImageLumaA8(gray_alpha) => {
            let (width, height) = gray_alpha.dimensions();
            let pixels = expand_gray_alpha(gray_alpha.as_raw());
            (
                RgbaCanvas::new(width, height, pixels),
                SourceLayout::GrayAlpha,
            )
        }
        DynamicImage::ImageRgb8(rgb) => {
            let (width, height) = rgb.dimensions();
            let pixels = expand_rgb(rgb.as_raw());
            (RgbaCanvas::new(width, height, pixels), SourceLayout::Rgb)
        }
        DynamicImage::ImageRgba8(rgba) => (RgbaCanvas::from_rgba_image(rgba), SourceLayout::Rgba),
        other => {
            let alpha = other.color().has_alpha();
            (
                RgbaCanvas::from_rgba_image(other.into_rgba8()),
                SourceLayout::Wide { alpha },
            )
        }
    }
}

fn expand_gray(samples: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(samples.len() * 4);
    for &l in samples {
        out.extend_from_slice(&[l, l, l, OPAQUE]);
    }
    out
}

fn expand_gray_alpha(samples: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(samples.len() * 2);
    for chunk in samples.chunks_exact(2) {
        let (l, a) = (chunk[0], chunk[1]);
        out.extend_from_slice(&[l, l, l, a]);
    }
    out
}

fn expand_rgb(samples: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(samples.len() / 3 * 4);
    for chunk in samples.chunks_exact(3) {
        out.extend_from_slice(&[chunk[0], chunk[1], chunk[2], OPAQUE]);
    }
    out
}
