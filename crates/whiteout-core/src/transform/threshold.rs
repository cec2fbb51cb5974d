//! Near-white thresholding.
//!
//! A pixel counts as near-white when each of R, G and B is strictly
//! greater than [`WHITE_THRESHOLD`]. Such pixels are replaced wholesale
//! with [`TRANSPARENT_WHITE`]; every other pixel is left bit-identical,
//! alpha included.

use crate::decode::RgbaCanvas;

/// Channel value that R, G and B must all exceed to count as near-white.
pub const WHITE_THRESHOLD: u8 = 230;

/// Replacement value for near-white pixels.
pub const TRANSPARENT_WHITE: [u8; 4] = [255, 255, 255, 0];

/// Returns true if the color is near-white.
#[inline]
pub fn is_near_white(r: u8, g: u8, b: u8) -> bool {
    r > WHITE_THRESHOLD && g > WHITE_THRESHOLD && b > WHITE_THRESHOLD
}

/// Replace every near-white pixel with [`TRANSPARENT_WHITE`], in place.
///
/// Pixels are visited once each in raster order. The existing alpha of a
/// pixel plays no part in the decision.
///
/// # Returns
///
/// The number of pixels that matched the threshold.
pub fn clear_near_white(canvas: &mut RgbaCanvas) -> usize {
    let mut cleared = 0;

    for px in canvas.pixels.chunks_exact_mut(4) {
        if is_near_white(px[0], px[1], px[2]) {
            px.copy_from_slice(&TRANSPARENT_WHITE);
            cleared += 1;
        }
    }

    cleared
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_strict() {
        assert!(is_near_white(231, 231, 231));
        assert!(!is_near_white(230, 255, 255));
        assert!(!is_near_white(255, 230, 255));
        assert!(!is_near_white(255, 255, 230));
        assert!(is_near_white(255, 255, 255));
        assert!(!is_near_white(0, 0, 0));
    }

    #[test]
    fn test_white_becomes_transparent() {
        let mut canvas = RgbaCanvas::filled(2, 2, [255, 255, 255, 255]);
        let cleared = clear_near_white(&mut canvas);

        assert_eq!(cleared, 4);
        assert!(canvas
            .pixels
            .chunks_exact(4)
            .all(|px| px == TRANSPARENT_WHITE));
    }

    #[test]
    fn test_off_white_rgb_is_normalized() {
        // RGB of a matched pixel is forced to 255, not just alpha
        let mut canvas = RgbaCanvas::filled(1, 1, [240, 235, 250, 128]);
        clear_near_white(&mut canvas);
        assert_eq!(canvas.pixel(0, 0), Some(TRANSPARENT_WHITE));
    }

    #[test]
    fn test_other_pixels_untouched() {
        let mut canvas = RgbaCanvas::filled(2, 1, [255, 255, 255, 255]);
        canvas.set_pixel(1, 0, [230, 231, 255, 77]);
        let cleared = clear_near_white(&mut canvas);

        assert_eq!(cleared, 1);
        assert_eq!(canvas.pixel(1, 0), Some([230, 231, 255, 77]));
    }

    #[test]
    fn test_transparent_dark_pixel_stays() {
        // Alpha does not matter to the threshold
        let mut canvas = RgbaCanvas::filled(1, 1, [10, 10, 10, 0]);
        assert_eq!(clear_near_white(&mut canvas), 0);
        assert_eq!(canvas.pixel(0, 0), Some([10, 10, 10, 0]));
    }

    #[test]
    fn test_empty_canvas() {
        let mut canvas = RgbaCanvas::new(0, 0, vec![]);
        assert_eq!(clear_near_white(&mut canvas), 0);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
