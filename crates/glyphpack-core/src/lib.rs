//! Glyphpack core library
//!
//! Converts a 16x16 grid of 8x8 character cells, read from a bitmap atlas,
//! into packed row data for firmware and retro font ROMs.
//!
//! # Encodings
//!
//! - **2-bit rows**: each pixel is quantized to a level in `0..=3` and eight
//!   levels are packed into one `u16` per row, leftmost pixel highest.
//! - **Bit planes**: levels are inverted to ink density (`0` stays `0`,
//!   otherwise `4 - level`) and split into two planes of one byte per row.
//!
//! Glyphs are always emitted in row-major grid order, 256 per atlas.
//!
//! # Example
//!
//! ```no_run
//! use glyphpack_core::{export_hex, Atlas};
//!
//! let atlas = Atlas::open("assets/characters.png").unwrap();
//! println!("{}", atlas.info());
//! print!("{}", export_hex(&atlas).unwrap());
//! ```

pub mod atlas;
pub mod emit;
pub mod error;
pub mod grid;
pub mod packing;
pub mod quantize;

pub use atlas::{export_hex, Atlas, AtlasInfo};
pub use emit::{render_array, render_hex, with_header};
pub use error::{PackError, PackResult};
pub use grid::{cells, check_dimensions, GlyphCell, GLYPH_COUNT};
pub use packing::{
    merge_planes, pack_glyph_2bit, pack_glyph_bitplanes, unpack_row_2bit, PackedGlyph,
    PlanarGlyph,
};
pub use quantize::{ink_level, quantize};
