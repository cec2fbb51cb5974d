//! The full decode → threshold → autocrop → encode run for one image.

use std::path::{Path, PathBuf};

use crate::decode::{self, SourceLayout};
use crate::encode;
use crate::error::{Error, Result};
use crate::transform::{self, BoundingBox};

/// An input image path and the path its PNG output goes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPair {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl PathPair {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }

    /// Run [`transparentize_and_crop`] on this pair.
    pub fn process(&self) -> Result<ProcessReport> {
        transparentize_and_crop(&self.input, &self.output)
    }
}

/// What happened to one image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessReport {
    /// Channel layout of the decoded source.
    pub layout: SourceLayout,
    /// Source dimensions (width, height).
    pub input_size: (u32, u32),
    /// Number of pixels replaced with transparent white.
    pub cleared: usize,
    /// Crop rectangle, `None` when nothing visible was left.
    pub bounds: Option<BoundingBox>,
    /// Dimensions of the written PNG (width, height).
    pub output_size: (u32, u32),
}

impl ProcessReport {
    /// Returns true if the output is smaller than the input.
    pub fn was_cropped(&self) -> bool {
        self.output_size != self.input_size
    }
}

/// Make near-white pixels transparent, crop to the visible content and
/// save the result as PNG.
///
/// 1. Decode `input_path` and normalize it to RGBA
/// 2. Replace every pixel with R, G and B all above 230 by `(255, 255, 255, 0)`
/// 3. Crop to the bounding box of pixels with alpha > 0; if there are
///    none, keep the full (now transparent) canvas
/// 4. Encode as PNG at `output_path`, overwriting any existing file
///
/// # Errors
///
/// Returns `Error::Decode` if the input is missing or not a decodable
/// image, and `Error::Encode` if the output cannot be written. Nothing is
/// written when decoding fails.
pub fn transparentize_and_crop<P, Q>(input_path: P, output_path: Q) -> Result<ProcessReport>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let input_path = input_path.as_ref();
    let output_path = output_path.as_ref();

    let (mut canvas, layout) = decode::load_rgba(input_path).map_err(|source| Error::Decode {
        path: input_path.to_path_buf(),
        source,
    })?;
    let input_size = (canvas.width, canvas.height);
    tracing::debug!(
        "Decoded {} ({}x{}, {:?}, source alpha: {})",
        input_path.display(),
        canvas.width,
        canvas.height,
        layout,
        layout.has_alpha()
    );

    let cleared = transform::clear_near_white(&mut canvas);
    tracing::debug!("Cleared {cleared} of {} pixels", canvas.pixel_count());

    let (canvas, bounds) = transform::autocrop(canvas);
    match bounds {
        Some(bbox) => tracing::debug!(
            "Cropping to ({}, {})..({}, {})",
            bbox.left,
            bbox.top,
            bbox.right,
            bbox.bottom
        ),
        None => tracing::debug!("No visible pixels left, keeping full canvas"),
    }

    encode::write_png(&canvas, output_path).map_err(|source| Error::Encode {
        path: output_path.to_path_buf(),
        source,
    })?;

    let report = ProcessReport {
        layout,
        input_size,
        cleared,
        bounds,
        output_size: (canvas.width, canvas.height),
    };

    if report.was_cropped() {
        tracing::info!(
            "Processed {} -> {} (cropped to {}x{})",
            input_path.display(),
            output_path.display(),
            canvas.width,
            canvas.height
        );
    } else {
        tracing::info!(
            "Processed {} -> {}",
            input_path.display(),
            output_path.display()
        );
    }

    Ok(report)
}
