//! Test fixture utilities for creating atlas images on disk.

use std::fs;
use std::path::PathBuf;

use glyphpack_cli::config::ExportConfig;
use image::{GrayImage, Luma, Rgba, RgbaImage};
use tempfile::TempDir;

/// A temporary directory holding atlas images.
pub struct AtlasFixture {
    pub root: TempDir,
}

impl Default for AtlasFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl AtlasFixture {
    /// Create a new empty fixture directory.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp dir");
        Self { root }
    }

    /// Path of a file inside the fixture directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.root.path().join(name)
    }

    /// Export config reading `name` and writing to stdout.
    pub fn config(&self, name: &str) -> ExportConfig {
        ExportConfig {
            source: self.path(name),
            output: None,
        }
    }

    /// Save a grayscale atlas as PNG.
    pub fn add_gray(&self, name: &str, image: &GrayImage) -> PathBuf {
        let path = self.path(name);
        image.save(&path).expect("Failed to write PNG");
        path
    }

    /// Save an RGBA atlas as PNG.
    pub fn add_rgba(&self, name: &str, image: &RgbaImage) -> PathBuf {
        let path = self.path(name);
        image.save(&path).expect("Failed to write PNG");
        path
    }

    /// Write arbitrary bytes, e.g. a file that is not an image.
    pub fn add_raw(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, bytes).expect("Failed to write file");
        path
    }
}

/// An all-black 128x128 atlas.
pub fn black_atlas() -> GrayImage {
    GrayImage::new(128, 128)
}

/// A black atlas with one level-3 pixel at the top-left of cell `(row, column)`.
pub fn single_pixel_atlas(row: u32, column: u32) -> GrayImage {
    let mut image = black_atlas();
    image.put_pixel(column * 8, row * 8, Luma([255]));
    image
}

/// An RGBA atlas whose red channel sweeps every intensity.
///
/// Green and blue carry unrelated noise so that reading the wrong channel
/// shows up in the output.
pub fn sweep_atlas_rgba() -> RgbaImage {
    RgbaImage::from_fn(128, 128, |x, y| {
        let red = ((x + y * 128) % 256) as u8;
        Rgba([red, red.wrapping_mul(7), 255 - red, 255])
    })
}
