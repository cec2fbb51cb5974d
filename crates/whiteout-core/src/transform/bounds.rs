//! Bounding box of the visible content of a canvas.

use crate::decode::RgbaCanvas;

/// A pixel rectangle, `left`/`top` inclusive and `right`/`bottom` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl BoundingBox {
    pub fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        debug_assert!(left <= right && top <= bottom, "Inverted bounding box");
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }

    /// Returns true if (x, y) lies inside the rectangle.
    #[inline]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }

    /// Returns true if the rectangle covers the whole canvas.
    pub fn covers(&self, canvas: &RgbaCanvas) -> bool {
        self.left == 0 && self.top == 0 && self.right == canvas.width && self.bottom == canvas.height
    }
}

/// Compute the smallest rectangle containing every pixel with alpha > 0.
///
/// Returns `None` if the canvas is empty or every pixel is fully
/// transparent; there is no meaningful box in that case.
pub fn opaque_bounds(canvas: &RgbaCanvas) -> Option<BoundingBox> {
    if canvas.is_empty() {
        return None;
    }

    let width = canvas.width as usize;
    let mut left = u32::MAX;
    let mut top = u32::MAX;
    let mut right = 0u32;
    let mut bottom = 0u32;

    for (y, row) in canvas.pixels.chunks_exact(width * 4).enumerate() {
        let mut visible = row
            .chunks_exact(4)
            .enumerate()
            .filter(|(_, px)| px[3] > 0)
            .map(|(x, _)| x as u32);

        let Some(first) = visible.next() else {
            continue;
        };
        let last = visible.last().unwrap_or(first);

        let y = y as u32;
        left = left.min(first);
        right = right.max(last + 1);
        top = top.min(y);
        bottom = y + 1;
    }

    if left == u32::MAX {
        return None;
    }

    Some(BoundingBox::new(left, top, right, bottom))
}


// ============================================================================
// Property-Based Tests
// ============================================================================
