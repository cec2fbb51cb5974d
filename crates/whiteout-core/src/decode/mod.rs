//! Image decoding for whiteout.
//!
//! This module provides functionality for:
//! - Reading an image file and sniffing its format from the content
//! - Decoding PNG, JPEG, BMP and GIF (first frame) sources
//! - Normalizing every source channel layout to 8-bit RGBA
//!
//! # Architecture
//!
//! Files are read into memory in one call, so the handle is released
//! before decoding starts. Decoding then works on the byte slice, which
//! keeps the in-memory path and the file path identical.
//!
//! # Examples
//!
//! ```ignore
//! use whiteout_core::decode::load_rgba;
//!
//! let (canvas, layout) = load_rgba("product.jpg")?;
//! println!("Decoded {}x{} {:?} image", canvas.width, canvas.height, layout);
//! ```

mod file;
mod normalize;
mod types;

pub use file::{decode_rgba, load_rgba};
pub use normalize::normalize_to_rgba;
pub use types::{DecodeError, RgbaCanvas, SourceLayout};
