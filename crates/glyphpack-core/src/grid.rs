//! Fixed atlas geometry: a 16x16 grid of 8x8 glyph cells.

use crate::error::{PackError, PackResult};

/// Number of glyph columns in the atlas.
pub const GRID_COLUMNS: u32 = 16;

/// Number of glyph rows in the atlas.
pub const GRID_ROWS: u32 = 16;

/// Width and height of one glyph cell in pixels.
pub const CELL_SIZE: u32 = 8;

/// Total number of glyphs emitted per atlas.
pub const GLYPH_COUNT: usize = (GRID_COLUMNS * GRID_ROWS) as usize;

/// Minimum atlas width in pixels.
pub const ATLAS_WIDTH: u32 = GRID_COLUMNS * CELL_SIZE;

/// Minimum atlas height in pixels.
pub const ATLAS_HEIGHT: u32 = GRID_ROWS * CELL_SIZE;

/// One 8x8 character cell, addressed by grid row and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GlyphCell {
    pub row: u32,
    pub column: u32,
}

impl GlyphCell {
    /// Create a cell, rejecting indices outside the grid.
    pub fn new(row: u32, column: u32) -> PackResult<Self> {
        if row >= GRID_ROWS || column >= GRID_COLUMNS {
            return Err(PackError::CellOutOfRange { row, column });
        }
        Ok(Self { row, column })
    }

    /// Position of this cell in emission order (row-major).
    pub fn index(&self) -> usize {
        (self.row * GRID_COLUMNS + self.column) as usize
    }

    /// Pixel coordinate of the cell's top-left corner.
    pub fn origin(&self) -> (u32, u32) {
        (self.column * CELL_SIZE, self.row * CELL_SIZE)
    }

    /// Check that the whole cell lies inside an image of the given size.
    pub(crate) fn check_fits(&self, width: u32, height: u32) -> PackResult<()> {
        let (x, y) = self.origin();
        if x + CELL_SIZE > width || y + CELL_SIZE > height {
            return Err(PackError::AtlasTooSmall { width, height });
        }
        Ok(())
    }
}

/// All glyph cells in emission order: row 0's sixteen columns, then row 1, ...
pub fn cells() -> impl Iterator<Item = GlyphCell> {
    (0..GRID_ROWS).flat_map(|row| (0..GRID_COLUMNS).map(move |column| GlyphCell { row, column }))
}

/// Reject images that cannot hold the full grid. Excess area is ignored.
pub fn check_dimensions(width: u32, height: u32) -> PackResult<()> {
    if width < ATLAS_WIDTH || height < ATLAS_HEIGHT {
        return Err(PackError::AtlasTooSmall { width, height });
    }
    Ok(())
}
