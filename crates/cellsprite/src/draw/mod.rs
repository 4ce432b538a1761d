//! Shape composers, one module per glyph family.
//!
//! Every composer takes the codepoint, the canvas and the metrics of the cell
//! being drawn and issues canvas primitives; none of them keep state.

pub(crate) mod block;
pub(crate) mod box_drawing;
pub(crate) mod braille;
pub(crate) mod geometric;
pub(crate) mod legacy;
pub(crate) mod mosaic;
pub(crate) mod octant;
pub(crate) mod powerline;
pub(crate) mod special;

use crate::canvas::Canvas;
use crate::fraction::Fraction;
use crate::metrics::{CellMetrics, Shade, Thickness};

/// Fills the region between fractional edges of the cell.
pub(crate) fn fill(
    canvas: &mut Canvas,
    metrics: &CellMetrics,
    x0: Fraction,
    x1: Fraction,
    y0: Fraction,
    y1: Fraction,
    shade: Shade,
) {
    canvas.box_fill(
        x0.min(metrics.cell_width) as i32,
        y0.min(metrics.cell_height) as i32,
        x1.max(metrics.cell_width) as i32,
        y1.max(metrics.cell_height) as i32,
        shade.alpha(),
    );
}

/// Pixel edge of `fraction` of `size` as a path coordinate, so that path
/// fills line up with rectangle fills of the same fraction.
pub(crate) fn edge(fraction: Fraction, size: u32) -> f64 {
    f64::from(fraction.max(size))
}

/// Horizontal line of `thickness` pixels from `x0` to `x1`, top edge at `y`.
pub(crate) fn hline(canvas: &mut Canvas, x0: i32, x1: i32, y: i32, thickness: u32) {
    canvas.box_fill(x0, y, x1, y + thickness as i32, Shade::On.alpha());
}

/// Vertical line of `thickness` pixels from `y0` to `y1`, left edge at `x`.
pub(crate) fn vline(canvas: &mut Canvas, y0: i32, y1: i32, x: i32, thickness: u32) {
    canvas.box_fill(x, y0, x + thickness as i32, y1, Shade::On.alpha());
}

/// Full-width horizontal line centred vertically.
pub(crate) fn hline_middle(canvas: &mut Canvas, metrics: &CellMetrics, thickness: Thickness) {
    let px = metrics.thickness(thickness);
    let y = metrics.cell_height.saturating_sub(px) / 2;
    hline(canvas, 0, metrics.cell_width as i32, y as i32, px);
}

/// Full-height vertical line centred horizontally.
pub(crate) fn vline_middle(canvas: &mut Canvas, metrics: &CellMetrics, thickness: Thickness) {
    let px = metrics.thickness(thickness);
    let x = metrics.cell_width.saturating_sub(px) / 2;
    vline(canvas, 0, metrics.cell_height as i32, x as i32, px);
}

/// Corner a rounded or triangular shape is anchored to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// Logical pixel position of this corner of the cell.
    pub(crate) fn point(self, metrics: &CellMetrics) -> (f64, f64) {
        let w = f64::from(metrics.cell_width);
        let h = f64::from(metrics.cell_height);
        match self {
            Corner::TopLeft => (0.0, 0.0),
            Corner::TopRight => (w, 0.0),
            Corner::BottomLeft => (0.0, h),
            Corner::BottomRight => (w, h),
        }
    }
}
