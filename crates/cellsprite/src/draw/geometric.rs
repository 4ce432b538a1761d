//! Corner triangles from the Geometric Shapes block: ◢◣◤◥ (U+25E2..=U+25E5)
//! and their outlines ◸◹◺ (U+25F8..=U+25FA) and ◿ (U+25FF).

use super::Corner;
use crate::canvas::{Canvas, Path, StrokeStyle};
use crate::error::Result;
use crate::metrics::{CellMetrics, Shade, Thickness};

/// The right-angle corner and the two cell corners adjacent to it.
fn corner_vertices(corner: Corner, metrics: &CellMetrics) -> [(f64, f64); 3] {
    let (first, second) = match corner {
        Corner::TopLeft => (Corner::TopRight, Corner::BottomLeft),
        Corner::TopRight => (Corner::TopLeft, Corner::BottomRight),
        Corner::BottomLeft => (Corner::TopLeft, Corner::BottomRight),
        Corner::BottomRight => (Corner::TopRight, Corner::BottomLeft),
    };
    [
        first.point(metrics),
        corner.point(metrics),
        second.point(metrics),
    ]
}

/// Half of the cell cut along the diagonal, with its right angle at `corner`.
pub(crate) fn corner_triangle(
    canvas: &mut Canvas,
    metrics: &CellMetrics,
    corner: Corner,
    shade: Shade,
) -> Result<()> {
    let [a, b, c] = corner_vertices(corner, metrics);
    canvas.triangle(a, b, c, shade.alpha())
}

/// Outline of [`corner_triangle`], kept inside the cell.
pub(crate) fn corner_triangle_outline(
    canvas: &mut Canvas,
    metrics: &CellMetrics,
    corner: Corner,
) -> Result<()> {
    let thick = metrics.thickness(Thickness::Light);
    let path = Path::polygon(&corner_vertices(corner, metrics));
    canvas.inner_stroke_path(path, StrokeStyle::butt(thick), Shade::On.alpha())
}

pub(crate) fn draw(codepoint: u32, canvas: &mut Canvas, metrics: &CellMetrics) -> Result<()> {
    match codepoint {
        0x25E2 => corner_triangle(canvas, metrics, Corner::BottomRight, Shade::On),
        0x25E3 => corner_triangle(canvas, metrics, Corner::BottomLeft, Shade::On),
        0x25E4 => corner_triangle(canvas, metrics, Corner::TopLeft, Shade::On),
        0x25E5 => corner_triangle(canvas, metrics, Corner::TopRight, Shade::On),
        0x25F8 => corner_triangle_outline(canvas, metrics, Corner::TopLeft),
        0x25F9 => corner_triangle_outline(canvas, metrics, Corner::TopRight),
        0x25FA => corner_triangle_outline(canvas, metrics, Corner::BottomLeft),
        0x25FF => corner_triangle_outline(canvas, metrics, Corner::BottomRight),
        _ => unreachable!("U+{codepoint:04X} is not a corner triangle"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(codepoint: u32) -> Canvas {
        let metrics = CellMetrics::new(16, 16).with_box_thickness(2);
        let mut canvas = Canvas::new(16, 16).unwrap();
        draw(codepoint, &mut canvas, &metrics).unwrap();
        canvas
    }

    #[test]
    fn filled_triangles_cover_their_corner() {
        let lower_right = render('◢' as u32);
        assert!(lower_right.alpha(15, 15) > 200);
        assert_eq!(lower_right.alpha(0, 0), 0);

        let upper_left = render('◤' as u32);
        assert!(upper_left.alpha(0, 0) > 200);
        assert_eq!(upper_left.alpha(15, 15), 0);
    }

    #[test]
    fn outlines_are_hollow() {
        let canvas = render('◸' as u32);
        assert!(canvas.alpha(0, 8) > 200);
        assert!(canvas.alpha(8, 0) > 200);
        assert_eq!(canvas.alpha(4, 4), 0);
        assert_eq!(canvas.alpha(15, 15), 0);
    }
}
