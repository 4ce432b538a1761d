//! Symbols for Legacy Computing: U+1FB00..=U+1FBAF, U+1FBCE..=U+1FBCF and
//! U+1FBE4..=U+1FBE7.

use log::debug;

use super::block::{block_shade, full_shade};
use super::geometric::corner_triangle;
use super::{edge, fill, hline_middle, mosaic, vline, Corner};
use crate::canvas::{Canvas, Path, StrokeStyle};
use crate::error::Result;
use crate::fraction::{Alignment, Fraction, EIGHTHS};
use crate::metrics::{CellMetrics, Shade, Thickness};

use Fraction::*;

pub(crate) fn draw(codepoint: u32, canvas: &mut Canvas, metrics: &CellMetrics) -> Result<()> {
    match codepoint {
        mosaic::SEXTANT_FIRST..=mosaic::SEXTANT_LAST => {
            mosaic::draw_sextant(codepoint, canvas, metrics)
        }
        mosaic::SMOOTH_FIRST..=mosaic::SMOOTH_LAST => {
            return mosaic::draw_smooth(codepoint, canvas, metrics)
        }

        // inverted edge triangles
        0x1FB68..=0x1FB6B => {
            edge_triangle(canvas, metrics, Edge::ALL[(codepoint - 0x1FB68) as usize])?;
            canvas.invert();
            canvas.clip_to_cell();
        }
        0x1FB6C..=0x1FB6F => {
            edge_triangle(canvas, metrics, Edge::ALL[(codepoint - 0x1FB6C) as usize])?
        }

        0x1FB70..=0x1FB75 => eighth_column(canvas, metrics, (codepoint - 0x1FB70 + 1) as usize),
        0x1FB76..=0x1FB7B => eighth_row(canvas, metrics, (codepoint - 0x1FB76 + 1) as usize),
        0x1FB7C => {
            eighth_column(canvas, metrics, 0);
            eighth_row(canvas, metrics, 7);
        }
        0x1FB7D => {
            eighth_column(canvas, metrics, 0);
            eighth_row(canvas, metrics, 0);
        }
        0x1FB7E => {
            eighth_column(canvas, metrics, 7);
            eighth_row(canvas, metrics, 0);
        }
        0x1FB7F => {
            eighth_column(canvas, metrics, 7);
            eighth_row(canvas, metrics, 7);
        }
        0x1FB80 => {
            eighth_row(canvas, metrics, 0);
            eighth_row(canvas, metrics, 7);
        }
        0x1FB81 => {
            for row in [0, 2, 4, 7] {
                eighth_row(canvas, metrics, row);
            }
        }

        0x1FB82..=0x1FB86 => {
            let height = [OneQuarter, ThreeEighths, FiveEighths, ThreeQuarters, SevenEighths]
                [(codepoint - 0x1FB82) as usize];
            block_shade(canvas, metrics, Alignment::UPPER, Full, height, Shade::On);
        }
        0x1FB87..=0x1FB8B => {
            let width = [OneQuarter, ThreeEighths, FiveEighths, ThreeQuarters, SevenEighths]
                [(codepoint - 0x1FB87) as usize];
            block_shade(canvas, metrics, Alignment::RIGHT, width, Full, Shade::On);
        }

        0x1FB8C => block_shade(canvas, metrics, Alignment::LEFT, Half, Full, Shade::Medium),
        0x1FB8D => block_shade(canvas, metrics, Alignment::RIGHT, Half, Full, Shade::Medium),
        0x1FB8E => block_shade(canvas, metrics, Alignment::UPPER, Full, Half, Shade::Medium),
        0x1FB8F => block_shade(canvas, metrics, Alignment::LOWER, Full, Half, Shade::Medium),
        0x1FB90 => full_shade(canvas, metrics, Shade::Medium),
        0x1FB91 => {
            block_shade(canvas, metrics, Alignment::UPPER, Full, Half, Shade::On);
            block_shade(canvas, metrics, Alignment::LOWER, Full, Half, Shade::Medium);
        }
        0x1FB92 => {
            block_shade(canvas, metrics, Alignment::UPPER, Full, Half, Shade::Medium);
            block_shade(canvas, metrics, Alignment::LOWER, Full, Half, Shade::On);
        }
        // unassigned; drawn as the mirror of U+1FB94
        0x1FB93 => {
            block_shade(canvas, metrics, Alignment::LEFT, Half, Full, Shade::On);
            block_shade(canvas, metrics, Alignment::RIGHT, Half, Full, Shade::Medium);
        }
        0x1FB94 => {
            block_shade(canvas, metrics, Alignment::LEFT, Half, Full, Shade::Medium);
            block_shade(canvas, metrics, Alignment::RIGHT, Half, Full, Shade::On);
        }

        0x1FB95 => checkerboard(canvas, metrics, 0),
        0x1FB96 => checkerboard(canvas, metrics, 1),
        0x1FB97 => {
            fill(canvas, metrics, Zero, Full, OneQuarter, Half, Shade::On);
            fill(canvas, metrics, Zero, Full, ThreeQuarters, Full, Shade::On);
        }
        0x1FB98 => hatch_falling(canvas, metrics),
        0x1FB99 => {
            hatch_falling(canvas, metrics);
            canvas.flip_horizontal();
        }

        0x1FB9A => {
            edge_triangle(canvas, metrics, Edge::Upper)?;
            edge_triangle(canvas, metrics, Edge::Lower)?;
        }
        0x1FB9B => {
            edge_triangle(canvas, metrics, Edge::Left)?;
            edge_triangle(canvas, metrics, Edge::Right)?;
        }
        0x1FB9C => corner_triangle(canvas, metrics, Corner::TopLeft, Shade::Medium)?,
        0x1FB9D => corner_triangle(canvas, metrics, Corner::TopRight, Shade::Medium)?,
        0x1FB9E => corner_triangle(canvas, metrics, Corner::BottomRight, Shade::Medium)?,
        0x1FB9F => corner_triangle(canvas, metrics, Corner::BottomLeft, Shade::Medium)?,

        0x1FBA0..=0x1FBAE => {
            let segments = MIDPOINT_DIAGONALS[(codepoint - 0x1FBA0) as usize];
            for segment in Segment::ALL {
                if segments & segment.bit() != 0 {
                    midpoint_diagonal(canvas, metrics, segment)?;
                }
            }
        }
        0x1FBAF => {
            hline_middle(canvas, metrics, Thickness::Light);
            let thick = metrics.thickness(Thickness::Light);
            let x = metrics.cell_width.saturating_sub(thick) / 2;
            vline(
                canvas,
                ThreeEighths.min(metrics.cell_height) as i32,
                FiveEighths.max(metrics.cell_height) as i32,
                x as i32,
                thick,
            );
        }

        0x1FBCE => block_shade(canvas, metrics, Alignment::LEFT, TwoThirds, Full, Shade::On),
        0x1FBCF => block_shade(canvas, metrics, Alignment::LEFT, OneThird, Full, Shade::On),

        0x1FBE4 => fill(canvas, metrics, OneQuarter, ThreeQuarters, Zero, Half, Shade::On),
        0x1FBE5 => fill(canvas, metrics, OneQuarter, ThreeQuarters, Half, Full, Shade::On),
        0x1FBE6 => fill(canvas, metrics, Zero, Half, OneQuarter, ThreeQuarters, Shade::On),
        0x1FBE7 => fill(canvas, metrics, Half, Full, OneQuarter, ThreeQuarters, Shade::On),

        _ => unreachable!("U+{codepoint:04X} is not a legacy computing symbol"),
    }
    Ok(())
}

/// Cell edge a triangular quarter block rests on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Edge {
    Left,
    Upper,
    Right,
    Lower,
}

impl Edge {
    const ALL: [Edge; 4] = [Edge::Left, Edge::Upper, Edge::Right, Edge::Lower];
}

/// Triangle between one cell edge and the cell centre.
fn edge_triangle(canvas: &mut Canvas, metrics: &CellMetrics, edge_side: Edge) -> Result<()> {
    let w = f64::from(metrics.cell_width);
    let h = f64::from(metrics.cell_height);
    let center = (edge(Half, metrics.cell_width), edge(Half, metrics.cell_height));
    let (a, b) = match edge_side {
        Edge::Left => ((0.0, 0.0), (0.0, h)),
        Edge::Upper => ((0.0, 0.0), (w, 0.0)),
        Edge::Right => ((w, 0.0), (w, h)),
        Edge::Lower => ((0.0, h), (w, h)),
    };
    canvas.triangle(a, center, b, Shade::On.alpha())
}

/// Column `index` (0-based) of the cell split into eighths.
fn eighth_column(canvas: &mut Canvas, metrics: &CellMetrics, index: usize) {
    fill(
        canvas,
        metrics,
        EIGHTHS[index],
        EIGHTHS[index + 1],
        Zero,
        Full,
        Shade::On,
    );
}

fn eighth_row(canvas: &mut Canvas, metrics: &CellMetrics, index: usize) {
    fill(
        canvas,
        metrics,
        Zero,
        Full,
        EIGHTHS[index],
        EIGHTHS[index + 1],
        Shade::On,
    );
}

/// Four columns wide, with rows roughly as tall as the columns are wide.
fn checkerboard(canvas: &mut Canvas, metrics: &CellMetrics, parity: u32) {
    let w = metrics.cell_width;
    let h = metrics.cell_height;
    let x_size = 4u32;
    let y_size = ((2.0 * f64::from(h) / f64::from(w.max(1))).round() as u32).max(1);
    for x in 0..x_size {
        let x0 = w * x / x_size;
        let x1 = w * (x + 1) / x_size;
        for y in 0..y_size {
            let y0 = h * y / y_size;
            let y1 = h * (y + 1) / y_size;
            if (x + y) % 2 == parity {
                canvas.box_fill(x0 as i32, y0 as i32, x1 as i32, y1 as i32, Shade::On.alpha());
            }
        }
    }
}

/// Parallel lines running from the upper left to the lower right, spaced
/// half a cell apart so that they continue into neighbouring cells.
fn hatch_falling(canvas: &mut Canvas, metrics: &CellMetrics) {
    let w = f64::from(metrics.cell_width);
    let h = f64::from(metrics.cell_height);
    let thick = f64::from(metrics.thickness(Thickness::Light));
    for step in -2..=2 {
        let x = f64::from(step) * w / 2.0;
        let drawn = canvas.line(
            (x - w / 2.0, -h / 2.0),
            (x + w * 1.5, h * 1.5),
            thick,
            Shade::On.alpha(),
        );
        if let Err(err) = drawn {
            debug!("skipping hatch line {step}: {err}");
        }
    }
    canvas.clip_to_cell();
}

/// A diagonal between two edge midpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Segment {
    /// top centre to middle left
    UpperLeft,
    /// top centre to middle right
    UpperRight,
    /// middle left to bottom centre
    LowerLeft,
    /// middle right to bottom centre
    LowerRight,
}

impl Segment {
    const ALL: [Segment; 4] = [
        Segment::UpperLeft,
        Segment::UpperRight,
        Segment::LowerLeft,
        Segment::LowerRight,
    ];

    const fn bit(self) -> u8 {
        match self {
            Segment::UpperLeft => 0b0001,
            Segment::UpperRight => 0b0010,
            Segment::LowerLeft => 0b0100,
            Segment::LowerRight => 0b1000,
        }
    }
}

const UL: u8 = Segment::UpperLeft.bit();
const UR: u8 = Segment::UpperRight.bit();
const LL: u8 = Segment::LowerLeft.bit();
const LR: u8 = Segment::LowerRight.bit();

/// Segments of U+1FBA0..=U+1FBAE.
const MIDPOINT_DIAGONALS: [u8; 15] = [
    UL,
    UR,
    LL,
    LR,
    UL | LL,
    UR | LR,
    LL | LR,
    UL | UR,
    UL | LR,
    UR | LL,
    UR | LR | LL,
    UL | LL | LR,
    UL | UR | LR,
    UR | UL | LL,
    UL | UR | LL | LR,
];

fn midpoint_diagonal(canvas: &mut Canvas, metrics: &CellMetrics, segment: Segment) -> Result<()> {
    let w = metrics.cell_width;
    let h = metrics.cell_height;
    let thick = f64::from(metrics.thickness(Thickness::Light));
    let top = (edge(Half, w), 0.0);
    let bottom = (edge(Half, w), f64::from(h));
    let left = (0.0, edge(Half, h));
    let right = (f64::from(w), edge(Half, h));
    let (p0, p1) = match segment {
        Segment::UpperLeft => (top, left),
        Segment::UpperRight => (top, right),
        Segment::LowerLeft => (left, bottom),
        Segment::LowerRight => (right, bottom),
    };
    let mut path = Path::new();
    path.move_to(p0.0, p0.1).line_to(p1.0, p1.1);
    canvas.stroke_path(path, StrokeStyle::butt(thick), Shade::On.alpha())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(codepoint: u32, width: u32, height: u32) -> Vec<Vec<u8>> {
        let metrics = CellMetrics::new(width, height);
        let mut canvas = Canvas::new(width, height).unwrap();
        draw(codepoint, &mut canvas, &metrics).unwrap();
        canvas.apply_clip();
        canvas.into_bitmap().cell_rows()
    }

    #[test]
    fn eighth_columns() {
        let rows = render(0x1FB70, 8, 4);
        assert_eq!(rows[0], vec![0, 255, 0, 0, 0, 0, 0, 0]);
        let rows = render(0x1FB75, 8, 4);
        assert_eq!(rows[3], vec![0, 0, 0, 0, 0, 0, 255, 0]);
    }

    #[test]
    fn eighth_rows_1358() {
        let rows = render(0x1FB81, 2, 8);
        let ink: Vec<bool> = rows.iter().map(|r| r[0] == 255).collect();
        assert_eq!(ink, vec![true, false, true, false, true, false, false, true]);
    }

    #[test]
    fn inverted_triangle_complements_the_triangle() {
        let solid = render(0x1FB6C, 12, 24);
        let inverted = render(0x1FB68, 12, 24);
        for (a, b) in solid.iter().flatten().zip(inverted.iter().flatten()) {
            assert_eq!(u32::from(*a) + u32::from(*b), 255);
        }
    }

    #[test]
    fn half_shades_mix_full_and_medium() {
        let rows = render(0x1FB94, 4, 2);
        assert_eq!(rows[0], vec![0x80, 0x80, 0xff, 0xff]);
        let rows = render(0x1FB93, 4, 2);
        assert_eq!(rows[0], vec![0xff, 0xff, 0x80, 0x80]);
        let rows = render(0x1FB91, 2, 4);
        assert_eq!(rows.iter().map(|r| r[0]).collect::<Vec<_>>(), vec![0xff, 0xff, 0x80, 0x80]);
    }

    #[test]
    fn checkerboards_are_complementary() {
        let board = render(0x1FB95, 8, 16);
        let inverse = render(0x1FB96, 8, 16);
        for (a, b) in board.iter().flatten().zip(inverse.iter().flatten()) {
            assert_eq!(u32::from(*a) + u32::from(*b), 255);
        }
        assert_eq!(board[0][0], 255);
        assert_eq!(board[0][2], 0);
    }

    #[test]
    fn hatch_stays_in_cell_and_mirrors() {
        let metrics = CellMetrics::new(10, 20);
        let mut canvas = Canvas::new(10, 20).unwrap();
        draw(0x1FB98, &mut canvas, &metrics).unwrap();
        canvas.apply_clip();
        assert_eq!(canvas.alpha(-1, 5), 0);
        assert!(canvas.cell_coverage().iter().any(|&a| a > 0));

        let falling = render(0x1FB98, 10, 20);
        let rising = render(0x1FB99, 10, 20);
        for (f, r) in falling.iter().zip(&rising) {
            let mut f = f.clone();
            f.reverse();
            assert_eq!(&f, r);
        }
    }

    #[test]
    fn midpoint_diagonal_table() {
        assert_eq!(MIDPOINT_DIAGONALS[0], UL);
        assert_eq!(MIDPOINT_DIAGONALS[14].count_ones(), 4);
        assert!(MIDPOINT_DIAGONALS.iter().all(|&m| m != 0 && m < 16));
    }

    #[test]
    fn horizontal_with_vertical_stroke() {
        let rows = render(0x1FBAF, 8, 16);
        // the stroke spans rows 6..10 at column 3
        assert_eq!(rows[5][3], 0);
        assert_eq!(rows[6][3], 255);
        assert_eq!(rows[9][3], 255);
        assert_eq!(rows[10][3], 0);
        assert_eq!(rows[7], vec![255; 8]);
    }

    #[test]
    fn centred_quarters() {
        let rows = render(0x1FBE4, 8, 8);
        assert_eq!(rows[0], vec![0, 0, 255, 255, 255, 255, 0, 0]);
        assert_eq!(rows[4], vec![0; 8]);
        let rows = render(0x1FBE7, 8, 8);
        assert_eq!(rows[1], vec![0; 8]);
        assert_eq!(rows[2], vec![0, 0, 0, 0, 255, 255, 255, 255]);
    }
}
