//! Error types for atlas loading and glyph packing.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or packing a character atlas.
///
/// None of these are recoverable: any error aborts the whole conversion.
#[derive(Debug, Error)]
pub enum PackError {
    /// The source file could not be opened or read.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The image crate could not decode the source.
    #[error("Image decode error: {0}")]
    Decode(#[from] image::ImageError),

    /// The image does not cover the full 16x16 grid of 8x8 cells.
    #[error("Image too small: {width}x{height}, need at least 128x128")]
    AtlasTooSmall { width: u32, height: u32 },

    /// A grid index outside the 16x16 grid was requested.
    #[error("Glyph cell ({row}, {column}) is outside the 16x16 grid")]
    CellOutOfRange { row: u32, column: u32 },

    /// A pixel outside the image was sampled.
    #[error("Pixel ({x}, {y}) is outside the {width}x{height} image")]
    PixelOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
}

/// Result alias for packing operations.
pub type PackResult<T> = Result<T, PackError>;
