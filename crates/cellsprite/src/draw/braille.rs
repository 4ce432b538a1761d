//! Braille patterns, U+2800..=U+28FF.
//!
//! The low byte of the codepoint is the dot mask, with Unicode's bit order:
//!
//! ```text
//!  bit 0  bit 3
//!  bit 1  bit 4
//!  bit 2  bit 5
//!  bit 6  bit 7
//! ```

use crate::canvas::Canvas;
use crate::metrics::{CellMetrics, Shade};

/// `(bit, column, row)` of every dot.
pub const DOTS: [(u8, usize, usize); 8] = [
    (0, 0, 0),
    (1, 0, 1),
    (2, 0, 2),
    (3, 1, 0),
    (4, 1, 1),
    (5, 1, 2),
    (6, 0, 3),
    (7, 1, 3),
];

/// Pixel layout of the 2x4 dot grid for one cell size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BrailleLayout {
    pub dot: u32,
    pub x_spacing: u32,
    pub y_spacing: u32,
    pub x_margin: u32,
    pub y_margin: u32,
}

impl BrailleLayout {
    /// Spends the pixels left over after the naive layout, one step at a
    /// time: dot size, then margins, then spacing, then margins, then dot
    /// size again.
    pub fn new(width: u32, height: u32) -> Self {
        let mut dot = (width / 4).min(height / 8);
        let mut x_spacing = width / 4;
        let mut y_spacing = height / 8;
        let mut x_margin = x_spacing / 2;
        let mut y_margin = y_spacing / 2;

        let mut x_left = width
            .saturating_sub(2 * x_margin)
            .saturating_sub(x_spacing)
            .saturating_sub(2 * dot);
        let mut y_left = height
            .saturating_sub(2 * y_margin)
            .saturating_sub(3 * y_spacing)
            .saturating_sub(4 * dot);

        if x_left >= 2 && y_left >= 4 && dot == 0 {
            dot += 1;
            x_left -= 2;
            y_left -= 4;
        }

        if x_left >= 2 && x_margin == 0 {
            x_margin = 1;
            x_left -= 2;
        }
        if y_left >= 2 && y_margin == 0 {
            y_margin = 1;
            y_left -= 2;
        }

        if x_left >= 1 {
            x_spacing += 1;
            x_left -= 1;
        }
        if y_left >= 3 {
            y_spacing += 1;
            y_left -= 3;
        }

        if x_left >= 2 {
            x_margin += 1;
            x_left -= 2;
        }
        if y_left >= 2 {
            y_margin += 1;
            y_left -= 2;
        }

        if x_left >= 2 && y_left >= 4 {
            dot += 1;
        }

        debug_assert!(2 * x_margin + 2 * dot + x_spacing <= width);
        debug_assert!(2 * y_margin + 4 * dot + 3 * y_spacing <= height);
        Self {
            dot,
            x_spacing,
            y_spacing,
            x_margin,
            y_margin,
        }
    }

    pub fn column_x(&self, column: usize) -> u32 {
        self.x_margin + column as u32 * (self.dot + self.x_spacing)
    }

    pub fn row_y(&self, row: usize) -> u32 {
        self.y_margin + row as u32 * (self.dot + self.y_spacing)
    }
}

pub(crate) fn draw(codepoint: u32, canvas: &mut Canvas, metrics: &CellMetrics) {
    let Some(mask) = codepoint
        .checked_sub(0x2800)
        .filter(|m| *m <= 0xff)
    else {
        unreachable!("U+{codepoint:04X} is not a braille pattern");
    };
    let layout = BrailleLayout::new(metrics.cell_width, metrics.cell_height);
    let dot = layout.dot as i32;
    for (bit, column, row) in DOTS {
        if mask & (1 << bit) == 0 {
            continue;
        }
        let x = layout.column_x(column) as i32;
        let y = layout.row_y(row) as i32;
        canvas.box_fill(x, y, x + dot, y + dot, Shade::On.alpha());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn layout_for_common_cell() {
        assert_eq!(
            BrailleLayout::new(10, 20),
            BrailleLayout {
                dot: 2,
                x_spacing: 3,
                y_spacing: 3,
                x_margin: 1,
                y_margin: 1,
            }
        );
    }

    #[test]
    fn layout_fits_the_cell() {
        for width in 2..64 {
            for height in 4..96 {
                let l = BrailleLayout::new(width, height);
                assert!(l.column_x(1) + l.dot <= width, "{width}x{height}");
                assert!(l.row_y(3) + l.dot <= height, "{width}x{height}");
            }
        }
    }

    #[test]
    fn tiny_cells_still_get_dots() {
        let l = BrailleLayout::new(3, 6);
        assert_eq!(l.dot, 1);
    }
}
