//! Character atlas loading and whole-grid export.

use std::fmt;
use std::path::Path;

use image::{ColorType, DynamicImage, GenericImageView, ImageFormat, ImageReader};

use crate::emit::render_hex;
use crate::error::{PackError, PackResult};
use crate::grid::{cells, check_dimensions, GLYPH_COUNT};
use crate::packing::{pack_glyph_2bit, pack_glyph_bitplanes, PackedGlyph, PlanarGlyph};

/// Decoded image properties, echoed ahead of every export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtlasInfo {
    /// Container format detected from the file contents.
    pub format: Option<ImageFormat>,
    pub width: u32,
    pub height: u32,
    /// Decoded pixel layout.
    pub color: ColorType,
}

impl AtlasInfo {
    /// Upper-case container name, e.g. `PNG`.
    pub fn format_name(&self) -> String {
        match self.format {
            Some(format) => format!("{:?}", format).to_uppercase(),
            None => "UNKNOWN".to_string(),
        }
    }

    /// Short colour mode name, e.g. `RGBA` or `L`.
    pub fn mode_name(&self) -> &'static str {
        match self.color {
            ColorType::L8 => "L",
            ColorType::La8 => "LA",
            ColorType::Rgb8 => "RGB",
            ColorType::Rgba8 => "RGBA",
            ColorType::L16 => "I;16",
            ColorType::La16 => "LA;16",
            ColorType::Rgb16 => "RGB;16",
            ColorType::Rgba16 => "RGBA;16",
            ColorType::Rgb32F => "F;32",
            ColorType::Rgba32F => "RGBA;F32",
            _ => "UNKNOWN",
        }
    }
}

impl fmt::Display for AtlasInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {}) {}",
            self.format_name(),
            self.width,
            self.height,
            self.mode_name()
        )
    }
}

/// A decoded character atlas, checked to cover the full 16x16 grid.
#[derive(Debug, Clone)]
pub struct Atlas {
    image: DynamicImage,
    info: AtlasInfo,
}

impl Atlas {
    /// Open and fully decode an atlas image.
    ///
    /// The format is guessed from the file contents. The file is closed
    /// before this returns, whether decoding succeeded or not.
    pub fn open(path: impl AsRef<Path>) -> PackResult<Self> {
        let path = path.as_ref();
        let io_err = |source| PackError::Io {
            path: path.to_path_buf(),
            source,
        };

        let reader = ImageReader::open(path)
            .map_err(io_err)?
            .with_guessed_format()
            .map_err(io_err)?;
        let format = reader.format();
        let image = reader.decode()?;

        Self::with_format(image, format)
    }

    /// Wrap an already decoded image.
    pub fn from_image(image: DynamicImage) -> PackResult<Self> {
        Self::with_format(image, None)
    }

    fn with_format(image: DynamicImage, format: Option<ImageFormat>) -> PackResult<Self> {
        let (width, height) = image.dimensions();
        check_dimensions(width, height)?;
        let info = AtlasInfo {
            format,
            width,
            height,
            color: image.color(),
        };
        Ok(Self { image, info })
    }

    pub fn info(&self) -> &AtlasInfo {
        &self.info
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    /// Pack every glyph at 2 bits per pixel, in grid order.
    pub fn pack_2bit(&self) -> PackResult<Vec<PackedGlyph>> {
        let mut glyphs = Vec::with_capacity(GLYPH_COUNT);
        for cell in cells() {
            glyphs.push(pack_glyph_2bit(&self.image, cell)?);
        }
        Ok(glyphs)
    }

    /// Pack every glyph as two bit planes, in grid order.
    pub fn pack_bitplanes(&self) -> PackResult<Vec<PlanarGlyph>> {
        let mut glyphs = Vec::with_capacity(GLYPH_COUNT);
        for cell in cells() {
            glyphs.push(pack_glyph_bitplanes(&self.image, cell)?);
        }
        Ok(glyphs)
    }
}

/// Hex dump of the 2-bit packing: one line per glyph, `HH LL` per row.
pub fn export_hex(atlas: &Atlas) -> PackResult<String> {
    let glyphs = atlas.pack_2bit()?;
    Ok(render_hex(&glyphs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, RgbaImage};

    #[test]
    fn test_info_display() {
        let info = AtlasInfo {
            format: Some(ImageFormat::Png),
            width: 128,
            height: 128,
            color: ColorType::Rgba8,
        };
        assert_eq!(info.to_string(), "PNG (128, 128) RGBA");

        let info = AtlasInfo {
            format: None,
            width: 256,
            height: 128,
            color: ColorType::L8,
        };
        assert_eq!(info.to_string(), "UNKNOWN (256, 128) L");
    }

    #[test]
    fn test_from_image_rejects_small() {
        let image = DynamicImage::ImageLuma8(GrayImage::new(120, 128));
        let err = Atlas::from_image(image).unwrap_err();
        assert!(matches!(
            err,
            PackError::AtlasTooSmall {
                width: 120,
                height: 128
            }
        ));
    }

    #[test]
    fn test_pack_counts() {
        let atlas = Atlas::from_image(DynamicImage::ImageRgba8(RgbaImage::new(128, 128))).unwrap();
        assert_eq!(atlas.info().color, ColorType::Rgba8);
        assert_eq!(atlas.pack_2bit().unwrap().len(), GLYPH_COUNT);
        assert_eq!(atlas.pack_bitplanes().unwrap().len(), GLYPH_COUNT);
    }

    #[test]
    fn test_excess_area_ignored() {
        let mut image = GrayImage::new(200, 160);
        image.put_pixel(150, 150, Luma([255]));
        let atlas = Atlas::from_image(DynamicImage::ImageLuma8(image)).unwrap();
        let glyphs = atlas.pack_2bit().unwrap();
        assert!(glyphs.iter().all(|g| g.iter().all(|&v| v == 0)));
    }

    #[test]
    fn test_grid_order() {
        let mut image = GrayImage::new(128, 128);
        // Mark the first pixel of cell (1, 0) only.
        image.put_pixel(0, 8, Luma([255]));
        let atlas = Atlas::from_image(DynamicImage::ImageLuma8(image)).unwrap();
        let glyphs = atlas.pack_2bit().unwrap();
        for (i, glyph) in glyphs.iter().enumerate() {
            if i == 16 {
                assert_eq!(glyph[0], 0xC000);
            } else {
                assert_eq!(glyph[0], 0);
            }
        }
    }

    #[test]
    fn test_export_hex_black() {
        let atlas = Atlas::from_image(DynamicImage::ImageLuma8(GrayImage::new(128, 128))).unwrap();
        let text = export_hex(&atlas).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), GLYPH_COUNT);
        for line in lines {
            assert_eq!(line, "00 00 00 00 00 00 00 00 00 00 00 00 00 00 00 00");
        }
    }

    #[test]
    fn test_open_missing_file() {
        let err = Atlas::open("definitely/not/here.png").unwrap_err();
        assert!(matches!(err, PackError::Io { .. }));
    }
}
