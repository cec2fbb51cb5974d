//! Pixel transforms: near-white removal and cropping to content.
//!
//! # Transform Order
//!
//! The pipeline applies these in a fixed order:
//! 1. Threshold: near-white pixels become fully transparent white
//! 2. Bounds: the smallest rectangle holding every pixel with alpha > 0
//! 3. Crop: cut the canvas down to that rectangle, if there is one
//!
//! # Coordinate System
//!
//! - Pixel coordinates, origin at the top-left corner
//! - Rectangles are half-open: `left`/`top` inclusive, `right`/`bottom` exclusive

mod bounds;
mod crop;
mod threshold;

pub use bounds::{opaque_bounds, BoundingBox};
pub use crop::{autocrop, crop_to_bounds};
pub use threshold::{clear_near_white, is_near_white, TRANSPARENT_WHITE, WHITE_THRESHOLD};
