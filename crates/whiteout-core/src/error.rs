//! Crate-level error type.

use std::path::PathBuf;
use thiserror::Error;

use crate::decode::DecodeError;
use crate::encode::EncodeError;

/// Main error type for whiteout-core.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to load or decode an input image.
    #[error("failed to decode image from {path}")]
    Decode {
        path: PathBuf,
        #[source]
        source: DecodeError,
    },

    /// Failed to encode or write an output image.
    #[error("failed to write image to {path}")]
    Encode {
        path: PathBuf,
        #[source]
        source: EncodeError,
    },
}

/// Result type alias for whiteout-core operations.
pub type Result<T> = std::result::Result<T, Error>;
