//! Powerline separators, U+E0B0..=U+E0BF, and the gradient fade sprites.
//!
//! Left-pointing variants are drawn as their right-pointing counterpart and
//! mirrored, so every pair is exactly symmetric.

use super::box_drawing::diagonal_rising;
use crate::canvas::{Canvas, Path, StrokeStyle};
use crate::error::Result;
use crate::metrics::{CellMetrics, Shade, Thickness};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Cubic Bezier control distance, relative to the radius, of a quarter
/// circle.
pub(crate) const CIRCLE_KAPPA: f64 = (std::f64::consts::SQRT_2 - 1.0) * 4.0 / 3.0;

pub(crate) fn draw(codepoint: u32, canvas: &mut Canvas, metrics: &CellMetrics) -> Result<()> {
    match codepoint {
        0xE0B0 => right_triangle(canvas, metrics)?,
        0xE0B1 => right_chevron(canvas, metrics)?,
        0xE0B2 => {
            right_triangle(canvas, metrics)?;
            canvas.flip_horizontal();
        }
        0xE0B3 => {
            right_chevron(canvas, metrics)?;
            canvas.flip_horizontal();
        }
        0xE0B4 => right_half_circle(canvas, metrics, false)?,
        0xE0B5 => right_half_circle(canvas, metrics, true)?,
        0xE0B6 => {
            right_half_circle(canvas, metrics, false)?;
            canvas.flip_horizontal();
        }
        0xE0B7 => {
            right_half_circle(canvas, metrics, true)?;
            canvas.flip_horizontal();
        }
        0xE0B8 => lower_left_half_plane(canvas, metrics)?,
        0xE0BA => {
            lower_left_half_plane(canvas, metrics)?;
            canvas.flip_horizontal();
        }
        0xE0BC => upper_left_half_plane(canvas, metrics)?,
        0xE0BE => {
            upper_left_half_plane(canvas, metrics)?;
            canvas.flip_horizontal();
        }
        0xE0B9 | 0xE0BF => {
            diagonal_rising(canvas, metrics);
            canvas.flip_horizontal();
        }
        0xE0BB | 0xE0BD => diagonal_rising(canvas, metrics),
        _ => unreachable!("U+{codepoint:04X} is not a Powerline separator"),
    }
    Ok(())
}

/// Solid triangle pointing right, spanning the cell height.
fn right_triangle(canvas: &mut Canvas, metrics: &CellMetrics) -> Result<()> {
    let w = f64::from(metrics.cell_width);
    let h = f64::from(metrics.cell_height);
    canvas.triangle((0.0, 0.0), (w, h / 2.0), (0.0, h), Shade::On.alpha())
}

fn right_chevron(canvas: &mut Canvas, metrics: &CellMetrics) -> Result<()> {
    let w = f64::from(metrics.cell_width);
    let h = f64::from(metrics.cell_height);
    let thick = metrics.thickness(Thickness::Light);
    let mut path = Path::new();
    path.move_to(0.0, 0.0).line_to(w, h / 2.0).line_to(0.0, h);
    canvas.stroke_path(path, StrokeStyle::butt(thick), Shade::On.alpha())
}

/// Half disc bulging to the right from the left edge; `outline` strokes the
/// arc instead of filling it.
fn right_half_circle(canvas: &mut Canvas, metrics: &CellMetrics, outline: bool) -> Result<()> {
    let w = f64::from(metrics.cell_width);
    let h = f64::from(metrics.cell_height);
    let cy = h / 2.0;
    let r = w.min(cy);
    let c = CIRCLE_KAPPA * r;

    let mut path = Path::new();
    path.move_to(0.0, cy - r)
        .curve_to(c, cy - r, r, cy - c, r, cy)
        .curve_to(r, cy + c, c, cy + r, 0.0, cy + r);
    if outline {
        let thick = metrics.thickness(Thickness::Light);
        canvas.stroke_path(path, StrokeStyle::butt(thick), Shade::On.alpha())
    } else {
        path.close();
        canvas.fill_path(path, Shade::On.alpha())
    }
}

/// Everything below the cell diagonal from the top-left to the bottom-right
/// corner, continued across the padding.
fn lower_left_half_plane(canvas: &mut Canvas, metrics: &CellMetrics) -> Result<()> {
    let w = f64::from(metrics.cell_width);
    let h = f64::from(metrics.cell_height);
    canvas.triangle((-w, -h), (2.0 * w, 2.0 * h), (-w, 2.0 * h), Shade::On.alpha())
}

/// Everything above the cell diagonal from the bottom-left to the top-right
/// corner, continued across the padding.
fn upper_left_half_plane(canvas: &mut Canvas, metrics: &CellMetrics) -> Result<()> {
    let w = f64::from(metrics.cell_width);
    let h = f64::from(metrics.cell_height);
    canvas.triangle((-w, 2.0 * h), (2.0 * w, -h), (-w, -h), Shade::On.alpha())
}

/// Edge of the cell a fade starts transparent at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FadeDirection {
    LeftToRight,
    RightToLeft,
    TopToBottom,
    BottomToTop,
}

/// Linear coverage ramp across the whole cell, from 0 at the starting edge to
/// 255 at the far one.
pub(crate) fn fade(canvas: &mut Canvas, metrics: &CellMetrics, direction: FadeDirection) {
    let w = metrics.cell_width;
    let h = metrics.cell_height;
    let ramp = |pos: u32, len: u32| -> u8 {
        if len <= 1 {
            return 255;
        }
        (255.0 * f64::from(pos) / f64::from(len - 1)).round() as u8
    };
    for y in 0..h {
        for x in 0..w {
            let alpha = match direction {
                FadeDirection::LeftToRight => ramp(x, w),
                FadeDirection::RightToLeft => ramp(w - 1 - x, w),
                FadeDirection::TopToBottom => ramp(y, h),
                FadeDirection::BottomToTop => ramp(h - 1 - y, h),
            };
            canvas.pixel(x as i32, y as i32, alpha);
        }
    }
}
