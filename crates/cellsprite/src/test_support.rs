//! Test support utilities for cellsprite.
//!
//! Helpers for rendering single cells and inspecting their coverage in
//! tests and benches. Not part of the stable API.

use crate::{render_glyph, Bitmap, CellMetrics, Result};

/// Renders `codepoint` at `width` x `height` with default metrics.
pub fn render_cell(codepoint: u32, width: u32, height: u32) -> Result<Bitmap> {
    render_glyph(codepoint, &CellMetrics::new(width, height))
}

/// ASCII picture of the logical cell: `#` for full coverage, `+` for partial
/// and `.` for none. One line per row.
pub fn ascii(bitmap: &Bitmap) -> String {
    bitmap
        .cell_rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|&alpha| match alpha {
                    0 => '.',
                    255 => '#',
                    _ => '+',
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Columns of the cell whose coverage is 255 on row `y`.
pub fn solid_columns(bitmap: &Bitmap, y: i32) -> Vec<i32> {
    (0..bitmap.cell_width() as i32)
        .filter(|&x| bitmap.get(x, y) == 255)
        .collect()
}

/// Rows of the cell whose coverage is 255 in column `x`.
pub fn solid_rows(bitmap: &Bitmap, x: i32) -> Vec<i32> {
    (0..bitmap.cell_height() as i32)
        .filter(|&y| bitmap.get(x, y) == 255)
        .collect()
}

/// Every codepoint in every supported range.
pub fn all_codepoints() -> Vec<u32> {
    crate::supported_ranges().flat_map(|(range, _)| range).collect()
}
