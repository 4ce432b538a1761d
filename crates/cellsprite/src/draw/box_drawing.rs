//! Box drawing, U+2500..=U+257F.
//!
//! Most glyphs are a [`Lines`] record: the style of the stroke leaving the
//! cell centre in each of the four directions. The junction resolver turns
//! that record into at most two rectangles per direction, choosing where each
//! stroke stops so that crossings of different weights meet without notches.

use log::debug;

use super::{hline, hline_middle, vline, vline_middle, Corner};
use crate::canvas::{Canvas, Path, StrokeStyle};
use crate::error::Result;
use crate::metrics::{CellMetrics, Shade, Thickness};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Style {
    None,
    Light,
    Heavy,
    Double,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lines {
    pub up: Style,
    pub right: Style,
    pub down: Style,
    pub left: Style,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Axis {
    Horizontal,
    Vertical,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BoxGlyph {
    Lines(Lines),
    Dash {
        axis: Axis,
        count: u32,
        weight: Thickness,
    },
    Arc(Corner),
    DiagonalRising,
    DiagonalFalling,
    DiagonalCross,
}

const N: Style = Style::None;
const L: Style = Style::Light;
const H: Style = Style::Heavy;
const D: Style = Style::Double;

const fn lines(up: Style, right: Style, down: Style, left: Style) -> BoxGlyph {
    BoxGlyph::Lines(Lines {
        up,
        right,
        down,
        left,
    })
}

const fn dash(axis: Axis, count: u32, weight: Thickness) -> BoxGlyph {
    BoxGlyph::Dash {
        axis,
        count,
        weight,
    }
}

use Axis::{Horizontal as HZ, Vertical as VT};
use Thickness::{Heavy as HV, Light as LT};

/// Indexed by `codepoint - 0x2500`. Columns of `lines` are up, right, down, left.
#[rustfmt::skip]
const TABLE: [BoxGlyph; 128] = [
    // 2500 ─ ━ │ ┃ ┄ ┅ ┆ ┇
    lines(N, L, N, L), lines(N, H, N, H), lines(L, N, L, N), lines(H, N, H, N),
    dash(HZ, 3, LT), dash(HZ, 3, HV), dash(VT, 3, LT), dash(VT, 3, HV),
    // 2508 ┈ ┉ ┊ ┋ ┌ ┍ ┎ ┏
    dash(HZ, 4, LT), dash(HZ, 4, HV), dash(VT, 4, LT), dash(VT, 4, HV),
    lines(N, L, L, N), lines(N, H, L, N), lines(N, L, H, N), lines(N, H, H, N),
    // 2510 ┐ ┑ ┒ ┓ └ ┕ ┖ ┗
    lines(N, N, L, L), lines(N, N, L, H), lines(N, N, H, L), lines(N, N, H, H),
    lines(L, L, N, N), lines(L, H, N, N), lines(H, L, N, N), lines(H, H, N, N),
    // 2518 ┘ ┙ ┚ ┛ ├ ┝ ┞ ┟
    lines(L, N, N, L), lines(L, N, N, H), lines(H, N, N, L), lines(H, N, N, H),
    lines(L, L, L, N), lines(L, H, L, N), lines(H, L, L, N), lines(L, L, H, N),
    // 2520 ┠ ┡ ┢ ┣ ┤ ┥ ┦ ┧
    lines(H, L, H, N), lines(H, H, L, N), lines(L, H, H, N), lines(H, H, H, N),
    lines(L, N, L, L), lines(L, N, L, H), lines(H, N, L, L), lines(L, N, H, L),
    // 2528 ┨ ┩ ┪ ┫ ┬ ┭ ┮ ┯
    lines(H, N, H, L), lines(H, N, L, H), lines(L, N, H, H), lines(H, N, H, H),
    lines(N, L, L, L), lines(N, L, L, H), lines(N, H, L, L), lines(N, H, L, H),
    // 2530 ┰ ┱ ┲ ┳ ┴ ┵ ┶ ┷
    lines(N, L, H, L), lines(N, L, H, H), lines(N, H, H, L), lines(N, H, H, H),
    lines(L, L, N, L), lines(L, L, N, H), lines(L, H, N, L), lines(L, H, N, H),
    // 2538 ┸ ┹ ┺ ┻ ┼ ┽ ┾ ┿
    lines(H, L, N, L), lines(H, L, N, H), lines(H, H, N, L), lines(H, H, N, H),
    lines(L, L, L, L), lines(L, L, L, H), lines(L, H, L, L), lines(L, H, L, H),
    // 2540 ╀ ╁ ╂ ╃ ╄ ╅ ╆ ╇
    lines(H, L, L, L), lines(L, L, H, L), lines(H, L, H, L), lines(H, L, L, H),
    lines(H, H, L, L), lines(L, L, H, H), lines(L, H, H, L), lines(H, H, L, H),
    // 2548 ╈ ╉ ╊ ╋ ╌ ╍ ╎ ╏
    lines(L, H, H, H), lines(H, L, H, H), lines(H, H, H, L), lines(H, H, H, H),
    dash(HZ, 2, LT), dash(HZ, 2, HV), dash(VT, 2, LT), dash(VT, 2, HV),
    // 2550 ═ ║ ╒ ╓ ╔ ╕ ╖ ╗
    lines(N, D, N, D), lines(D, N, D, N), lines(N, D, L, N), lines(N, L, D, N),
    lines(N, D, D, N), lines(N, N, L, D), lines(N, N, D, L), lines(N, N, D, D),
    // 2558 ╘ ╙ ╚ ╛ ╜ ╝ ╞ ╟
    lines(L, D, N, N), lines(D, L, N, N), lines(D, D, N, N), lines(L, N, N, D),
    lines(D, N, N, L), lines(D, N, N, D), lines(L, D, L, N), lines(D, L, D, N),
    // 2560 ╠ ╡ ╢ ╣ ╤ ╥ ╦ ╧
    lines(D, D, D, N), lines(L, N, L, D), lines(D, N, D, L), lines(D, N, D, D),
    lines(N, D, L, D), lines(N, L, D, L), lines(N, D, D, D), lines(L, D, N, D),
    // 2568 ╨ ╩ ╪ ╫ ╬ ╭ ╮ ╯
    lines(D, L, N, L), lines(D, D, N, D), lines(L, D, L, D), lines(D, L, D, L),
    lines(D, D, D, D), BoxGlyph::Arc(Corner::BottomRight), BoxGlyph::Arc(Corner::BottomLeft),
    BoxGlyph::Arc(Corner::TopLeft),
    // 2570 ╰ ╱ ╲ ╳ ╴ ╵ ╶ ╷
    BoxGlyph::Arc(Corner::TopRight), BoxGlyph::DiagonalRising, BoxGlyph::DiagonalFalling,
    BoxGlyph::DiagonalCross,
    lines(N, N, N, L), lines(L, N, N, N), lines(N, L, N, N), lines(N, N, L, N),
    // 2578 ╸ ╹ ╺ ╻ ╼ ╽ ╾ ╿
    lines(N, N, N, H), lines(H, N, N, N), lines(N, H, N, N), lines(N, N, H, N),
    lines(N, H, N, L), lines(L, N, H, N), lines(N, L, N, H), lines(H, N, L, N),
];

/// The junction record behind a box-drawing codepoint, if it is one.
pub fn lines_for(codepoint: u32) -> Option<Lines> {
    match glyph(codepoint)? {
        BoxGlyph::Lines(lines) => Some(lines),
        _ => None,
    }
}

fn glyph(codepoint: u32) -> Option<BoxGlyph> {
    let index = codepoint.checked_sub(0x2500)? as usize;
    TABLE.get(index).copied()
}

pub(crate) fn draw(codepoint: u32, canvas: &mut Canvas, metrics: &CellMetrics) -> Result<()> {
    let Some(glyph) = glyph(codepoint) else {
        unreachable!("U+{codepoint:04X} is not a box-drawing codepoint");
    };
    match glyph {
        BoxGlyph::Lines(lines) => draw_lines(canvas, metrics, lines),
        BoxGlyph::Dash {
            axis: Axis::Horizontal,
            count,
            weight,
        } => dash_horizontal(canvas, metrics, count, weight),
        BoxGlyph::Dash {
            axis: Axis::Vertical,
            count,
            weight,
        } => dash_vertical(canvas, metrics, count, weight),
        BoxGlyph::Arc(corner) => arc(canvas, metrics, corner, Thickness::Light),
        BoxGlyph::DiagonalRising => diagonal_rising(canvas, metrics),
        BoxGlyph::DiagonalFalling => {
            diagonal_rising(canvas, metrics);
            canvas.flip_horizontal();
        }
        BoxGlyph::DiagonalCross => {
            diagonal_rising(canvas, metrics);
            canvas.flip_horizontal();
            diagonal_rising(canvas, metrics);
        }
    }
    Ok(())
}

/// Resolves a junction record into rectangles.
pub(crate) fn draw_lines(canvas: &mut Canvas, metrics: &CellMetrics, lines: Lines) {
    let light = metrics.thickness(Thickness::Light);
    let heavy = metrics.thickness(Thickness::Heavy);
    let width = metrics.cell_width;
    let height = metrics.cell_height;

    let h_light_top = height.saturating_sub(light) / 2;
    let h_light_bottom = h_light_top + light;
    let h_heavy_top = height.saturating_sub(heavy) / 2;
    let h_heavy_bottom = h_heavy_top + heavy;
    let h_double_top = h_light_top.saturating_sub(light);
    let h_double_bottom = h_light_bottom + light;

    let v_light_left = width.saturating_sub(light) / 2;
    let v_light_right = v_light_left + light;
    let v_heavy_left = width.saturating_sub(heavy) / 2;
    let v_heavy_right = v_heavy_left + heavy;
    let v_double_left = v_light_left.saturating_sub(light);
    let v_double_right = v_light_right + light;

    let Lines {
        up,
        right,
        down,
        left,
    } = lines;

    let up_bottom = if left == Style::Heavy || right == Style::Heavy {
        h_heavy_bottom
    } else if left != right || down == up {
        if left == Style::Double || right == Style::Double {
            h_double_bottom
        } else {
            h_light_bottom
        }
    } else if left == Style::None && right == Style::None {
        h_light_bottom
    } else {
        h_light_top
    };

    let down_top = if left == Style::Heavy || right == Style::Heavy {
        h_heavy_top
    } else if left != right || up == down {
        if left == Style::Double || right == Style::Double {
            h_double_top
        } else {
            h_light_top
        }
    } else if left == Style::None && right == Style::None {
        h_light_top
    } else {
        h_light_bottom
    };

    let left_right = if up == Style::Heavy || down == Style::Heavy {
        v_heavy_right
    } else if up != down || left == right {
        if up == Style::Double || down == Style::Double {
            v_double_right
        } else {
            v_light_right
        }
    } else if up == Style::None && down == Style::None {
        v_light_right
    } else {
        v_light_left
    };

    let right_left = if up == Style::Heavy || down == Style::Heavy {
        v_heavy_left
    } else if up != down || right == left {
        if up == Style::Double || down == Style::Double {
            v_double_left
        } else {
            v_light_left
        }
    } else if up == Style::None && down == Style::None {
        v_light_left
    } else {
        v_light_right
    };

    let on = Shade::On.alpha();
    let mut rect = |x0: u32, y0: u32, x1: u32, y1: u32| {
        canvas.box_fill(x0 as i32, y0 as i32, x1 as i32, y1 as i32, on);
    };

    match up {
        Style::None => {}
        Style::Light => rect(v_light_left, 0, v_light_right, up_bottom),
        Style::Heavy => rect(v_heavy_left, 0, v_heavy_right, up_bottom),
        Style::Double => {
            let left_bottom = if left == Style::Double {
                h_light_top
            } else {
                up_bottom
            };
            let right_bottom = if right == Style::Double {
                h_light_top
            } else {
                up_bottom
            };
            rect(v_double_left, 0, v_light_left, left_bottom);
            rect(v_light_right, 0, v_double_right, right_bottom);
        }
    }

    match right {
        Style::None => {}
        Style::Light => rect(right_left, h_light_top, width, h_light_bottom),
        Style::Heavy => rect(right_left, h_heavy_top, width, h_heavy_bottom),
        Style::Double => {
            let top_left = if up == Style::Double {
                v_light_right
            } else {
                right_left
            };
            let bottom_left = if down == Style::Double {
                v_light_right
            } else {
                right_left
            };
            rect(top_left, h_double_top, width, h_light_top);
            rect(bottom_left, h_light_bottom, width, h_double_bottom);
        }
    }

    match down {
        Style::None => {}
        Style::Light => rect(v_light_left, down_top, v_light_right, height),
        Style::Heavy => rect(v_heavy_left, down_top, v_heavy_right, height),
        Style::Double => {
            let left_top = if left == Style::Double {
                h_light_bottom
            } else {
                down_top
            };
            let right_top = if right == Style::Double {
                h_light_bottom
            } else {
                down_top
            };
            rect(v_double_left, left_top, v_light_left, height);
            rect(v_light_right, right_top, v_double_right, height);
        }
    }

    match left {
        Style::None => {}
        Style::Light => rect(0, h_light_top, left_right, h_light_bottom),
        Style::Heavy => rect(0, h_heavy_top, left_right, h_heavy_bottom),
        Style::Double => {
            let top_right = if up == Style::Double {
                v_light_left
            } else {
                left_right
            };
            let bottom_right = if down == Style::Double {
                v_light_left
            } else {
                left_right
            };
            rect(0, h_double_top, top_right, h_light_top);
            rect(0, h_light_bottom, bottom_right, h_double_bottom);
        }
    }
}

/// `count` dashes, each with half a gap on both sides so that neighbouring
/// cells keep the spacing even.
fn dash_horizontal(canvas: &mut Canvas, metrics: &CellMetrics, count: u32, weight: Thickness) {
    let thick = metrics.thickness(weight);
    let desired_gap = metrics.thickness(Thickness::Light).max(4);
    let Some(layout) = DashLayout::new(metrics.cell_width, count, desired_gap) else {
        hline_middle(canvas, metrics, weight);
        return;
    };
    let y = metrics.cell_height.saturating_sub(thick) / 2;
    for (x0, x1) in layout.spans() {
        hline(canvas, x0 as i32, x1 as i32, y as i32, thick);
    }
}

fn dash_vertical(canvas: &mut Canvas, metrics: &CellMetrics, count: u32, weight: Thickness) {
    let thick = metrics.thickness(weight);
    let desired_gap = metrics.thickness(Thickness::Light).max(4);
    let Some(layout) = DashLayout::new(metrics.cell_height, count, desired_gap) else {
        vline_middle(canvas, metrics, weight);
        return;
    };
    let x = metrics.cell_width.saturating_sub(thick) / 2;
    for (y0, y1) in layout.spans() {
        vline(canvas, y0 as i32, y1 as i32, x as i32, thick);
    }
}

/// Dash positions along one axis of the cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct DashLayout {
    count: u32,
    gap: u32,
    dash: u32,
    remaining: u32,
}

impl DashLayout {
    fn new(size: u32, count: u32, desired_gap: u32) -> Option<Self> {
        if size < 2 * count {
            return None;
        }
        let gap = desired_gap.min(size / (2 * count));
        let total_dash = size - gap * count;
        Some(Self {
            count,
            gap,
            dash: total_dash / count,
            remaining: total_dash % count,
        })
    }

    /// `[start, end)` of each dash; leftover pixels widen the first dashes.
    fn spans(self) -> impl Iterator<Item = (u32, u32)> {
        let mut pos = self.gap / 2;
        (0..self.count).map(move |i| {
            let end = pos + self.dash + u32::from(i < self.remaining);
            let span = (pos, end);
            pos = end + self.gap;
            span
        })
    }
}

/// ╱, overshooting both corners along the line's own slope so that tiled
/// cells join into one unbroken diagonal.
pub(crate) fn diagonal_rising(canvas: &mut Canvas, metrics: &CellMetrics) {
    let w = f64::from(metrics.cell_width);
    let h = f64::from(metrics.cell_height);
    let slope_x = (w / h).min(1.0);
    let slope_y = (h / w).min(1.0);
    let thick = f64::from(metrics.thickness(Thickness::Light));
    let drawn = canvas.line(
        (w + 0.5 * slope_x, -0.5 * slope_y),
        (-0.5 * slope_x, h + 0.5 * slope_y),
        thick,
        Shade::On.alpha(),
    );
    if let Err(err) = drawn {
        debug!("skipping diagonal stroke: {err}");
    }
}

/// Rounded corner joining the two cell edges named by `corner`.
pub(crate) fn arc(canvas: &mut Canvas, metrics: &CellMetrics, corner: Corner, weight: Thickness) {
    let thick_px = metrics.thickness(weight);
    let thick = f64::from(thick_px);
    let w = f64::from(metrics.cell_width);
    let h = f64::from(metrics.cell_height);
    let cx = f64::from(metrics.cell_width.saturating_sub(thick_px) / 2) + thick / 2.0;
    let cy = f64::from(metrics.cell_height.saturating_sub(thick_px) / 2) + thick / 2.0;
    let r = w.min(h) / 2.0;
    let s = 0.25;

    let (edge_y, dir_y) = match corner {
        Corner::TopLeft | Corner::TopRight => (0.0, -1.0),
        Corner::BottomLeft | Corner::BottomRight => (h, 1.0),
    };
    let (edge_x, dir_x) = match corner {
        Corner::TopLeft | Corner::BottomLeft => (0.0, -1.0),
        Corner::TopRight | Corner::BottomRight => (w, 1.0),
    };

    let mut path = Path::new();
    path.move_to(cx, edge_y)
        .line_to(cx, cy + dir_y * r)
        .curve_to(
            cx,
            cy + dir_y * s * r,
            cx + dir_x * s * r,
            cy,
            cx + dir_x * r,
            cy,
        )
        .line_to(edge_x, cy);
    if let Err(err) = canvas.stroke_path(path, StrokeStyle::butt(thick), Shade::On.alpha()) {
        debug!("skipping {corner:?} arc: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(codepoint: u32, metrics: &CellMetrics) -> Canvas {
        let mut canvas = Canvas::new(metrics.cell_width, metrics.cell_height).unwrap();
        draw(codepoint, &mut canvas, metrics).unwrap();
        canvas
    }

    fn column(canvas: &Canvas, x: i32) -> Vec<u8> {
        (0..canvas.cell_height() as i32).map(|y| canvas.alpha(x, y)).collect()
    }

    fn row(canvas: &Canvas, y: i32) -> Vec<u8> {
        (0..canvas.cell_width() as i32).map(|x| canvas.alpha(x, y)).collect()
    }

    #[test]
    fn table_spot_checks() {
        assert_eq!(lines_for('─' as u32), Some(Lines { up: N, right: L, down: N, left: L }));
        assert_eq!(lines_for('┏' as u32), Some(Lines { up: N, right: H, down: H, left: N }));
        assert_eq!(lines_for('╬' as u32), Some(Lines { up: D, right: D, down: D, left: D }));
        assert_eq!(lines_for('╿' as u32), Some(Lines { up: H, right: N, down: L, left: N }));
        assert_eq!(lines_for('╭' as u32), None);
        assert_eq!(lines_for('┄' as u32), None);
        assert_eq!(lines_for(0x2580), None);
    }

    #[test]
    fn every_lines_record_has_a_mirror() {
        // Every record with a left stroke has a partner whose right stroke matches.
        let records: Vec<Lines> = (0x2500..=0x257f).filter_map(lines_for).collect();
        for l in &records {
            let mirrored = Lines {
                up: l.up,
                right: l.left,
                down: l.down,
                left: l.right,
            };
            assert!(records.contains(&mirrored), "{l:?} has no mirror");
        }
    }

    #[test]
    fn vertical_light_line_is_centred() {
        let metrics = CellMetrics::new(10, 20).with_box_thickness(1);
        let canvas = render('│' as u32, &metrics);
        assert_eq!(column(&canvas, 4), vec![255; 20]);
        assert_eq!(column(&canvas, 3), vec![0; 20]);
        assert_eq!(column(&canvas, 5), vec![0; 20]);
    }

    #[test]
    fn heavy_crossing_widens_the_junction() {
        // ┭: heavy left, light right, light down
        let metrics = CellMetrics::new(12, 24).with_box_thickness(2);
        let canvas = render(0x252d, &metrics);
        let heavy_top = (24 - 4) / 2;
        let light_top = (24 - 2) / 2;
        let vx = (12 - 2) / 2;
        assert_eq!(canvas.alpha(vx, heavy_top), 255);
        assert_eq!(canvas.alpha(vx, heavy_top - 1), 0);
        assert!(heavy_top < light_top);
        // the heavy arm is heavy-thick, the light arm light-thick
        assert_eq!(canvas.alpha(0, heavy_top), 255);
        assert_eq!(canvas.alpha(11, heavy_top), 0);
        assert_eq!(canvas.alpha(11, light_top), 255);
    }

    #[test]
    fn light_cross_has_no_gaps() {
        let metrics = CellMetrics::new(9, 17).with_box_thickness(1);
        let canvas = render('┼' as u32, &metrics);
        assert_eq!(row(&canvas, 8), vec![255; 9]);
        assert_eq!(column(&canvas, 4), vec![255; 17]);
    }

    #[test]
    fn double_corner_keeps_inner_gap() {
        // ╔ at 10x20, light 1: strokes at x 3 and 5, y 8 and 10
        let metrics = CellMetrics::new(10, 20).with_box_thickness(1);
        let canvas = render('╔' as u32, &metrics);
        assert_eq!(canvas.alpha(3, 8), 255);
        assert_eq!(canvas.alpha(9, 8), 255);
        assert_eq!(canvas.alpha(5, 10), 255);
        assert_eq!(canvas.alpha(4, 9), 0);
        assert_eq!(canvas.alpha(5, 9), 0);
        assert_eq!(canvas.alpha(3, 19), 255);
        assert_eq!(canvas.alpha(5, 19), 255);
        assert_eq!(canvas.alpha(4, 19), 0);
        assert_eq!(canvas.alpha(3, 7), 0);
    }

    #[test]
    fn dash_layout_is_even() {
        let layout = DashLayout::new(16, 4, 4).unwrap();
        assert_eq!(layout.spans().collect::<Vec<_>>(), vec![(1, 3), (5, 7), (9, 11), (13, 15)]);

        let layout = DashLayout::new(11, 3, 4).unwrap();
        let spans: Vec<_> = layout.spans().collect();
        let ink: u32 = spans.iter().map(|(a, b)| b - a).sum();
        assert_eq!(ink + 3 * layout.gap, 11);
        assert_eq!(spans[0].0, layout.gap / 2);

        assert_eq!(DashLayout::new(5, 3, 4), None);
    }

    #[test]
    fn tiny_cell_dash_falls_back_to_solid_line() {
        let metrics = CellMetrics::new(3, 6).with_box_thickness(1);
        let canvas = render('┈' as u32, &metrics);
        assert_eq!(row(&canvas, 2), vec![255; 3]);
    }

    #[test]
    fn diagonals_are_mirror_images() {
        let metrics = CellMetrics::new(9, 18).with_box_thickness(1);
        let rising = render('╱' as u32, &metrics);
        let falling = render('╲' as u32, &metrics);
        for y in 0..18 {
            let mut r = row(&rising, y);
            r.reverse();
            assert_eq!(r, row(&falling, y));
        }
        assert!(rising.alpha(8, 0) > 0);
        assert!(rising.alpha(0, 17) > 0);
        assert!(falling.alpha(0, 0) > 0);
    }

    #[test]
    fn arc_reaches_its_two_edges() {
        let metrics = CellMetrics::new(10, 20).with_box_thickness(2);
        let canvas = render('╭' as u32, &metrics);
        // down edge at the vertical stroke, right edge at the horizontal stroke
        assert!(canvas.alpha(4, 19) > 200);
        assert!(canvas.alpha(9, 9) > 200);
        assert_eq!(canvas.alpha(0, 0), 0);
        assert_eq!(canvas.alpha(4, 0), 0);
    }
}
