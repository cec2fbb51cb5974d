//! Image cropping operations.
//!
//! Crops are expressed as a [`BoundingBox`] in pixel coordinates, usually
//! the one returned by [`opaque_bounds`]. [`autocrop`] combines the two.
//!
//! # Example
//!
//! ```ignore
//! // Cut away fully transparent borders
//! let (cropped, bbox) = autocrop(canvas);
//! ```

use super::{opaque_bounds, BoundingBox};
use crate::decode::RgbaCanvas;

/// Copy the pixels inside `bbox` into a new canvas.
///
/// # Behavior
///
/// - The box is clamped to the canvas bounds
/// - A box covering the whole canvas returns a copy of the original
/// - Channel values are copied bit for bit
///
/// # Example
///
/// ```
/// use whiteout_core::decode::RgbaCanvas;
/// use whiteout_core::transform::{crop_to_bounds, BoundingBox};
///
/// let canvas = RgbaCanvas::filled(100, 100, [128, 128, 128, 255]);
/// let cropped = crop_to_bounds(&canvas, BoundingBox::new(25, 25, 75, 75));
/// assert_eq!(cropped.width, 50);
/// assert_eq!(cropped.height, 50);
/// ```
pub fn crop_to_bounds(canvas: &RgbaCanvas, bbox: BoundingBox) -> RgbaCanvas {
    // Fast path: full crop returns a clone
    if bbox.covers(canvas) {
        return canvas.clone();
    }

    let right = bbox.right.min(canvas.width);
    let bottom = bbox.bottom.min(canvas.height);
    let left = bbox.left.min(right);
    let top = bbox.top.min(bottom);

    let out_width = right - left;
    let out_height = bottom - top;

    let src_stride = canvas.width as usize * 4;
    let row_bytes = out_width as usize * 4;
    let mut output = Vec::with_capacity(row_bytes * out_height as usize);

    // Copy pixel data row by row
    for src_y in top..bottom {
        let row_start = src_y as usize * src_stride + left as usize * 4;
        output.extend_from_slice(&canvas.pixels[row_start..row_start + row_bytes]);
    }

    RgbaCanvas::new(out_width, out_height, output)
}

/// Crop a canvas to the bounding box of its visible pixels.
///
/// If no pixel has alpha > 0 the canvas is returned untouched, at full
/// size, together with `None`.
pub fn autocrop(canvas: RgbaCanvas) -> (RgbaCanvas, Option<BoundingBox>) {
    match opaque_bounds(&canvas) {
        Some(bbox) => (crop_to_bounds(&canvas, bbox), Some(bbox)),
        None => (canvas, None),
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for generating image dimensions (keep reasonable for speed).
    fn dimensions_strategy() -> impl Strategy<Value = (u32, u32)> {
        (1u32..=40, 1u32..=40)
    }

    /// Strategy for canvases with random alpha, mostly transparent.
    fn sparse_canvas_strategy() -> impl Strategy<Value = RgbaCanvas> {
        dimensions_strategy().prop_flat_map(|(width, height)| {
            let count = (width as usize) * (height as usize);
            prop::collection::vec((any::<u8>(), prop::bool::weighted(0.15)), count..=count)
                .prop_map(move |cells| {
                    let pixels: Vec<u8> = cells
                        .iter()
                        .flat_map(|&(v, visible)| [v, v / 2, v / 3, if visible { 255 } else { 0 }])
                        .collect();
                    RgbaCanvas::new(width, height, pixels)
                })
        })
    }

    proptest! {
        /// Property: Output dimensions don't exceed input dimensions.
        #[test]
        fn prop_output_bounded_by_input(canvas in sparse_canvas_strategy()) {
            let (width, height) = (canvas.width, canvas.height);
            let (result, _) = autocrop(canvas);

            prop_assert!(result.width <= width, "Output width should not exceed input");
            prop_assert!(result.height <= height, "Output height should not exceed input");
        }

        /// Property: Pixel data length matches dimensions.
        #[test]
        fn prop_pixel_data_matches_dimensions(canvas in sparse_canvas_strategy()) {
            let (result, _) = autocrop(canvas);

            let expected_len = (result.width * result.height * 4) as usize;
            prop_assert_eq!(result.pixels.len(), expected_len);
        }

        /// Property: Cropped pixels are exactly the source pixels at the offset.
        #[test]
        fn prop_cropped_pixels_from_original(canvas in sparse_canvas_strategy()) {
            let (result, bbox) = autocrop(canvas.clone());

            if let Some(bbox) = bbox {
                for y in 0..result.height {
                    for x in 0..result.width {
                        prop_assert_eq!(
                            result.pixel(x, y),
                            canvas.pixel(bbox.left + x, bbox.top + y)
                        );
                    }
                }
            } else {
                prop_assert_eq!(result, canvas);
            }
        }

        /// Property: Autocrop leaves no fully transparent border row or column.
        #[test]
        fn prop_no_transparent_border(canvas in sparse_canvas_strategy()) {
            let (result, bbox) = autocrop(canvas);
            if bbox.is_none() {
                return Ok(());
            }

            let visible = |x: u32, y: u32| result.pixel(x, y).unwrap()[3] > 0;
            let (w, h) = (result.width, result.height);

            prop_assert!((0..w).any(|x| visible(x, 0)));
            prop_assert!((0..w).any(|x| visible(x, h - 1)));
            prop_assert!((0..h).any(|y| visible(0, y)));
            prop_assert!((0..h).any(|y| visible(w - 1, y)));
        }

        /// Property: Autocrop is idempotent.
        #[test]
        fn prop_autocrop_idempotent(canvas in sparse_canvas_strategy()) {
            let (once, _) = autocrop(canvas);
            let (twice, _) = autocrop(once.clone());

            prop_assert_eq!(once, twice);
        }
    }
}
