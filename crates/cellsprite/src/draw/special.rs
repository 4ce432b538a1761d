//! Sprites without a codepoint: cursors, underline styles, strikethrough and
//! overline.

use std::f64::consts::TAU;

use super::{hline, powerline};
use crate::canvas::{Canvas, Path};
use crate::error::Result;
use crate::fraction::Fraction;
use crate::metrics::{CellMetrics, Shade};
use crate::sprite::{CursorShape, Sprite, UnderlineStyle};

pub(crate) fn draw(sprite: Sprite, canvas: &mut Canvas, metrics: &CellMetrics) -> Result<()> {
    let width = metrics.cell_width as i32;
    match sprite {
        Sprite::Cursor(shape) => cursor(canvas, metrics, shape),
        Sprite::Underline(UnderlineStyle::Single) => hline(
            canvas,
            0,
            width,
            metrics.underline_position as i32,
            metrics.underline_thickness,
        ),
        Sprite::Underline(UnderlineStyle::Double) => double_underline(canvas, metrics),
        Sprite::Underline(UnderlineStyle::Dotted) => dotted_underline(canvas, metrics)?,
        Sprite::Underline(UnderlineStyle::Dashed) => dashed_underline(canvas, metrics),
        Sprite::Underline(UnderlineStyle::Curly) => curly_underline(canvas, metrics),
        Sprite::Strikethrough => hline(
            canvas,
            0,
            width,
            metrics.strikethrough_position as i32,
            metrics.strikethrough_thickness,
        ),
        Sprite::Overline => hline(
            canvas,
            0,
            width,
            metrics.overline_position as i32,
            metrics.overline_thickness,
        ),
        Sprite::Fade(direction) => powerline::fade(canvas, metrics, direction),
    }
    Ok(())
}

fn cursor(canvas: &mut Canvas, metrics: &CellMetrics, shape: CursorShape) {
    let w = metrics.cell_width as i32;
    let h = metrics.cell_height as i32;
    let t = metrics.cursor_thickness as i32;
    let on = Shade::On.alpha();
    match shape {
        CursorShape::Block => canvas.box_fill(0, 0, w, h, on),
        CursorShape::Hollow => {
            canvas.box_fill(0, 0, w, t, on);
            canvas.box_fill(0, h - t, w, h, on);
            canvas.box_fill(0, 0, t, h, on);
            canvas.box_fill(w - t, 0, w, h, on);
        }
        // centred on the left edge of the cell
        CursorShape::Bar => {
            let x = -(t / 2);
            canvas.box_fill(x, 0, x + t, h, on);
        }
        CursorShape::Underline => {
            let y = metrics.underline_position as i32;
            canvas.box_fill(0, y, w, y + t, on);
        }
    }
}

fn double_underline(canvas: &mut Canvas, metrics: &CellMetrics) {
    let width = metrics.cell_width as i32;
    let pos = metrics.underline_position as i32;
    let thick = metrics.underline_thickness;
    hline(canvas, 0, width, pos - thick as i32, thick);
    hline(canvas, 0, width, pos + thick as i32, thick);
}

/// Round dots of the underline thickness, spread evenly so that every cell
/// starts and ends with half a gap.
fn dotted_underline(canvas: &mut Canvas, metrics: &CellMetrics) -> Result<()> {
    let dot = metrics.underline_thickness.max(1);
    let count = (metrics.cell_width / (2 * dot)).max(1);
    let spacing = f64::from(metrics.cell_width) / f64::from(count);
    let r = f64::from(dot) / 2.0;
    let cy = f64::from(metrics.underline_position) + r;
    let k = powerline::CIRCLE_KAPPA * r;

    let mut path = Path::new();
    for i in 0..count {
        let cx = (f64::from(i) + 0.5) * spacing;
        path.move_to(cx + r, cy)
            .curve_to(cx + r, cy + k, cx + k, cy + r, cx, cy + r)
            .curve_to(cx - k, cy + r, cx - r, cy + k, cx - r, cy)
            .curve_to(cx - r, cy - k, cx - k, cy - r, cx, cy - r)
            .curve_to(cx + k, cy - r, cx + r, cy - k, cx + r, cy)
            .close();
    }
    canvas.fill_path(path, Shade::On.alpha())
}

/// One dash per cell covering the middle half, so tiled cells alternate
/// evenly between dash and gap.
fn dashed_underline(canvas: &mut Canvas, metrics: &CellMetrics) {
    let x0 = Fraction::OneQuarter.min(metrics.cell_width) as i32;
    let x1 = Fraction::ThreeQuarters.max(metrics.cell_width) as i32;
    hline(
        canvas,
        x0,
        x1,
        metrics.underline_position as i32,
        metrics.underline_thickness,
    );
}

/// One full period of a cosine wave per cell, rasterized column by column
/// with fractional coverage on the two boundary pixels.
fn curly_underline(canvas: &mut Canvas, metrics: &CellMetrics) {
    let width = f64::from(metrics.cell_width);
    let thick = f64::from(metrics.underline_thickness);
    let mid = f64::from(metrics.underline_position) + thick / 2.0;
    // steepest slope of the wave is 1
    let amplitude = width / TAU;

    for x in 0..metrics.cell_width {
        let phase = TAU * (f64::from(x) + 0.5) / width;
        let center = mid + amplitude * phase.cos();
        let slope = -amplitude * TAU / width * phase.sin();
        let half = thick / 2.0 * (1.0 + slope * slope).sqrt();
        let (top, bottom) = (center - half, center + half);
        for (y, alpha) in column_coverage(top, bottom) {
            canvas.pixel(x as i32, y, alpha);
        }
    }
}

/// Coverage of the pixel rows crossed by the span `[top, bottom)`.
fn column_coverage(top: f64, bottom: f64) -> Vec<(i32, u8)> {
    let first = top.floor();
    let last = bottom.floor();
    let to_alpha = |coverage: f64| (255.0 * coverage).round().clamp(0.0, 255.0) as u8;
    if first == last {
        return vec![(first as i32, to_alpha(bottom - top))];
    }
    let mut out = vec![(first as i32, to_alpha(1.0 - (top - first)))];
    let mut y = first as i32 + 1;
    while y < last as i32 {
        out.push((y, 255));
        y += 1;
    }
    let tail = bottom - last;
    if tail > 0.0 {
        out.push((last as i32, to_alpha(tail)));
    }
    out
}
