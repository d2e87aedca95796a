//! Export command implementation
//!
//! Loads a character atlas and renders it in one of the three ROM layouts.
//! The whole rendering is built in memory before anything is written, so a
//! failed run never leaves partial output behind.

use anyhow::{Context, Result};
use colored::Colorize;
use glyphpack_core::{export_hex, render_array, with_header, Atlas, GLYPH_COUNT};
use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::process::ExitCode;

use crate::config::ExportConfig;

/// Output layout selected by the subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Brace literal of 2-bit packed rows, 8 values per glyph.
    Array,
    /// Brace literal of bit-plane bytes, 16 values per glyph.
    Planes,
    /// Hex byte pairs of 2-bit packed rows, one line per glyph.
    Hex,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExportFormat::Array => "2-bit array",
            ExportFormat::Planes => "bit-plane array",
            ExportFormat::Hex => "hex dump",
        };
        f.write_str(name)
    }
}

/// Run the export command
///
/// # Arguments
/// * `format` - Output layout
/// * `config` - Source atlas and output destination
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(format: ExportFormat, config: &ExportConfig) -> Result<ExitCode> {
    eprintln!(
        "{} {} ({})",
        "Exporting:".cyan().bold(),
        config.source.display(),
        format
    );

    let text = render(format, config)?;

    match &config.output {
        Some(path) => fs::write(path, &text)
            .with_context(|| format!("Failed to write output: {}", path.display()))?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .and_then(|_| stdout.flush())
                .context("Failed to write to stdout")?;
        }
    }

    let digest = blake3::hash(text.as_bytes()).to_hex().to_string();
    eprintln!(
        "{} {} glyphs {} {}",
        "SUCCESS".green().bold(),
        GLYPH_COUNT,
        "blake3:".dimmed(),
        &digest[..16]
    );
    if let Some(path) = &config.output {
        eprintln!("{} {}", "Wrote:".dimmed(), path.display());
    }

    Ok(ExitCode::SUCCESS)
}

/// Load the atlas and render the full text, echo line included.
pub fn render(format: ExportFormat, config: &ExportConfig) -> Result<String> {
    let atlas = Atlas::open(&config.source)
        .with_context(|| format!("Failed to load atlas: {}", config.source.display()))?;

    let body = match format {
        ExportFormat::Array => render_array(&atlas.pack_2bit()?),
        ExportFormat::Planes => render_array(&atlas.pack_bitplanes()?),
        ExportFormat::Hex => export_hex(&atlas)?,
    };

    Ok(with_header(atlas.info(), &body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn write_atlas(dir: &TempDir, image: &GrayImage) -> ExportConfig {
        let path = dir.path().join("characters.png");
        image.save(&path).unwrap();
        ExportConfig {
            source: path,
            output: None,
        }
    }

    #[test]
    fn test_render_array_header_and_count() {
        let dir = TempDir::new().unwrap();
        let config = write_atlas(&dir, &GrayImage::new(128, 128));

        let text = render(ExportFormat::Array, &config).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "PNG (128, 128) L");
        assert_eq!(lines[1], "{");
        assert_eq!(lines[2], "{ 0, 0, 0, 0, 0, 0, 0, 0, },");
        assert_eq!(*lines.last().unwrap(), "}");
        assert_eq!(lines.len(), 1 + 1 + GLYPH_COUNT + 1);
    }

    #[test]
    fn test_render_planes_single_pixel() {
        let dir = TempDir::new().unwrap();
        let mut image = GrayImage::new(128, 128);
        image.put_pixel(0, 0, Luma([255]));
        let config = write_atlas(&dir, &image);

        let text = render(ExportFormat::Planes, &config).unwrap();
        let first_glyph = text.lines().nth(2).unwrap();
        assert_eq!(
            first_glyph,
            "{ 128, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, },"
        );
    }

    #[test]
    fn test_render_hex_lines() {
        let dir = TempDir::new().unwrap();
        let mut image = GrayImage::new(128, 128);
        image.put_pixel(0, 0, Luma([255]));
        let config = write_atlas(&dir, &image);

        let text = render(ExportFormat::Hex, &config).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 1 + GLYPH_COUNT);
        assert_eq!(lines[1], "C0 00 00 00 00 00 00 00 00 00 00 00 00 00 00 00");
        assert_eq!(lines[2], "00 00 00 00 00 00 00 00 00 00 00 00 00 00 00 00");
    }

    #[test]
    fn test_run_writes_output_file() {
        let dir = TempDir::new().unwrap();
        let mut config = write_atlas(&dir, &GrayImage::new(128, 128));
        let out = dir.path().join("font.h");
        config.output = Some(out.clone());

        run(ExportFormat::Array, &config).unwrap();

        let written = fs::read_to_string(&out).unwrap();
        assert_eq!(written, render(ExportFormat::Array, &config).unwrap());
    }

    #[test]
    fn test_run_missing_source_fails_without_output() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("font.h");
        let config = ExportConfig {
            source: dir.path().join("missing.png"),
            output: Some(out.clone()),
        };

        let err = run(ExportFormat::Hex, &config).unwrap_err();
        assert!(err.to_string().contains("missing.png"));
        assert!(!out.exists());
    }

    #[test]
    fn test_render_too_small() {
        let dir = TempDir::new().unwrap();
        let config = write_atlas(&dir, &GrayImage::new(64, 128));
        let err = render(ExportFormat::Array, &config).unwrap_err();
        assert!(format!("{:#}", err).contains("too small"));
    }
}
