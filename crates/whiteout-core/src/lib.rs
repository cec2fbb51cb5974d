//! whiteout core - near-white removal and autocrop
//!
//! This crate turns near-white pixels transparent and crops the result
//! to its visible content. It is built from three stages, each usable on
//! its own:
//!
//! - [`decode`]: read any common raster format into an RGBA canvas
//! - [`transform`]: threshold near-white pixels, find bounds, crop
//! - [`encode`]: write the canvas out as RGBA PNG
//!
//! [`transparentize_and_crop`] runs all three for one input/output pair.

pub mod decode;
pub mod encode;
pub mod error;
pub mod pipeline;
pub mod transform;

pub use decode::{RgbaCanvas, SourceLayout};
pub use error::{Error, Result};
pub use pipeline::{transparentize_and_crop, PathPair, ProcessReport};
pub use transform::{BoundingBox, WHITE_THRESHOLD};
