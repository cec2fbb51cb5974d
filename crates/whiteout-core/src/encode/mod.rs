//! Image encoding for whiteout.
//!
//! Output is always PNG with 8-bit RGBA samples, regardless of the
//! input format, since the alpha channel has to survive losslessly.
//!
//! # Examples
//!
//! ```ignore
//! use whiteout_core::encode::encode_png;
//!
//! let pixels = vec![255u8; 100 * 100 * 4]; // Opaque white image
//! let png_bytes = encode_png(&pixels, 100, 100)?;
//! println!("Encoded {} bytes", png_bytes.len());
//! ```

mod png;

pub use png::{encode_png, write_png, EncodeError};
