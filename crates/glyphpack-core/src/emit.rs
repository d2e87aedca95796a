//! Text renderings of packed glyph data.
//!
//! Every line ends in `\n`. Values are plain decimal in the brace literal and
//! upper-case two-digit hex in the dump.

use std::fmt::Display;

use crate::atlas::AtlasInfo;
use crate::packing::PackedGlyph;

/// Render glyphs as a nested brace literal, one glyph group per line.
///
/// ```text
/// {
/// { 0, 0, 0, 0, 0, 0, 0, 0, },
/// ...
/// }
/// ```
pub fn render_array<T: Display, const N: usize>(glyphs: &[[T; N]]) -> String {
    let mut out = String::from("{\n");
    for glyph in glyphs {
        out.push('{');
        for value in glyph {
            out.push(' ');
            out.push_str(&value.to_string());
            out.push(',');
        }
        out.push_str(" },\n");
    }
    out.push_str("}\n");
    out
}

/// Render 2-bit glyphs as hex byte pairs, high byte first, one glyph per line.
pub fn render_hex(glyphs: &[PackedGlyph]) -> String {
    let mut out = String::with_capacity(glyphs.len() * 48);
    for glyph in glyphs {
        let pairs: Vec<String> = glyph
            .iter()
            .map(|&value| format!("{:02X} {:02X}", (value >> 8) & 0xFF, value & 0xFF))
            .collect();
        out.push_str(&pairs.join(" "));
        out.push('\n');
    }
    out
}

/// Prefix a rendering with the atlas echo line.
pub fn with_header(info: &AtlasInfo, body: &str) -> String {
    format!("{}\n{}", info, body)
}
