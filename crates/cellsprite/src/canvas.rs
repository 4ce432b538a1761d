//! Padded coverage raster and the drawing primitives the shape composers use.
//!
//! Rasterization of paths and strokes is done by `tiny-skia`; this module only
//! owns the padded coordinate system (logical `(0, 0)` is the top-left corner
//! of the cell, regardless of padding), the clip margins, and a handful of
//! whole-canvas transforms. Coverage is kept as premultiplied white, so the
//! alpha channel of every pixel is the glyph's ink amount.

use crate::error::{RasterError, Result};
use tiny_skia::{FillRule, LineCap, Mask, Paint, PathBuilder, Pixmap, Stroke, Transform};

/// End cap of stroked paths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Cap {
    #[default]
    Butt,
    Round,
    Square,
}

impl From<Cap> for LineCap {
    fn from(cap: Cap) -> Self {
        match cap {
            Cap::Butt => LineCap::Butt,
            Cap::Round => LineCap::Round,
            Cap::Square => LineCap::Square,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub width: f64,
    pub cap: Cap,
}

impl StrokeStyle {
    pub fn butt(width: impl Into<f64>) -> Self {
        Self {
            width: width.into(),
            cap: Cap::Butt,
        }
    }
}

/// A path in logical cell coordinates.
#[derive(Clone, Debug, Default)]
pub struct Path {
    builder: PathBuilder,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.builder.move_to(x as f32, y as f32);
        self
    }

    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.builder.line_to(x as f32, y as f32);
        self
    }

    /// Cubic Bezier through control points `(x1, y1)` and `(x2, y2)`.
    pub fn curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) -> &mut Self {
        self.builder
            .cubic_to(x1 as f32, y1 as f32, x2 as f32, y2 as f32, x as f32, y as f32);
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.builder.close();
        self
    }

    /// Convenience for closed polygons.
    pub fn polygon(points: &[(f64, f64)]) -> Self {
        let mut path = Path::new();
        if let Some((&(x, y), rest)) = points.split_first() {
            path.move_to(x, y);
            for &(x, y) in rest {
                path.line_to(x, y);
            }
            path.close();
        }
        path
    }

    fn finish(self) -> Result<tiny_skia::Path> {
        self.builder.finish().ok_or(RasterError::EmptyPath)
    }
}

/// Pixel margins of the padded canvas that are cleared once a glyph is done.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Clip {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

pub struct Canvas {
    pixmap: Pixmap,
    cell_width: u32,
    cell_height: u32,
    pad_x: u32,
    pad_y: u32,
    pub clip: Clip,
}

impl Canvas {
    /// Blank canvas for a `cell_width` x `cell_height` cell, padded by a
    /// quarter of the cell on every side.
    pub fn new(cell_width: u32, cell_height: u32) -> Result<Self> {
        let pad_x = cell_width / 4;
        let pad_y = cell_height / 4;
        let width = cell_width + 2 * pad_x;
        let height = cell_height + 2 * pad_y;
        let pixmap =
            Pixmap::new(width, height).ok_or(RasterError::CanvasAllocation { width, height })?;
        Ok(Self {
            pixmap,
            cell_width,
            cell_height,
            pad_x,
            pad_y,
            clip: Clip::default(),
        })
    }

    pub fn cell_width(&self) -> u32 {
        self.cell_width
    }

    pub fn cell_height(&self) -> u32 {
        self.cell_height
    }

    pub fn pad_x(&self) -> u32 {
        self.pad_x
    }

    pub fn pad_y(&self) -> u32 {
        self.pad_y
    }

    /// Padded width.
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    /// Padded height.
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    fn transform(&self) -> Transform {
        Transform::from_translate(self.pad_x as f32, self.pad_y as f32)
    }

    fn paint(alpha: u8) -> Paint<'static> {
        let mut paint = Paint::default();
        paint.set_color_rgba8(0xff, 0xff, 0xff, alpha);
        paint.anti_alias = true;
        paint
    }

    /// Padded-canvas byte offset of logical `(x, y)`, if it lies on the canvas.
    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        let px = x + self.pad_x as i32;
        let py = y + self.pad_y as i32;
        if px < 0 || py < 0 || px >= self.width() as i32 || py >= self.height() as i32 {
            return None;
        }
        Some((py as usize * self.width() as usize + px as usize) * 4)
    }

    /// Coverage at logical `(x, y)`; zero off the canvas.
    pub fn alpha(&self, x: i32, y: i32) -> u8 {
        self.offset(x, y)
            .map(|o| self.pixmap.data()[o + 3])
            .unwrap_or(0)
    }

    /// Sets one pixel's coverage, replacing what was there.
    pub fn pixel(&mut self, x: i32, y: i32, alpha: u8) {
        if let Some(o) = self.offset(x, y) {
            self.pixmap.data_mut()[o..o + 4].fill(alpha);
        }
    }

    /// Fills `[x0, x1) x [y0, y1)` in logical coordinates, clipped to the
    /// padded canvas and composited over what is already there.
    pub fn box_fill(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, alpha: u8) {
        let left = (x0 + self.pad_x as i32).clamp(0, self.width() as i32) as usize;
        let right = (x1 + self.pad_x as i32).clamp(0, self.width() as i32) as usize;
        let top = (y0 + self.pad_y as i32).clamp(0, self.height() as i32) as usize;
        let bottom = (y1 + self.pad_y as i32).clamp(0, self.height() as i32) as usize;
        if left >= right || top >= bottom {
            return;
        }
        let stride = self.width() as usize * 4;
        let data = self.pixmap.data_mut();
        let a = u32::from(alpha);
        for row in top..bottom {
            let line = &mut data[row * stride + left * 4..row * stride + right * 4];
            for px in line.chunks_exact_mut(4) {
                let dst = u32::from(px[3]);
                let out = (a + dst * (255 - a) / 255) as u8;
                px.fill(out);
            }
        }
    }

    /// Strokes the segment `p0`-`p1` with butt caps.
    pub fn line(&mut self, p0: (f64, f64), p1: (f64, f64), thickness: f64, alpha: u8) -> Result<()> {
        let mut path = Path::new();
        path.move_to(p0.0, p0.1).line_to(p1.0, p1.1);
        self.stroke_path(path, StrokeStyle::butt(thickness), alpha)
    }

    pub fn triangle(&mut self, p0: (f64, f64), p1: (f64, f64), p2: (f64, f64), alpha: u8) -> Result<()> {
        self.fill_path(Path::polygon(&[p0, p1, p2]), alpha)
    }

    pub fn fill_path(&mut self, path: Path, alpha: u8) -> Result<()> {
        let path = path.finish()?;
        let transform = self.transform();
        self.pixmap
            .fill_path(&path, &Self::paint(alpha), FillRule::Winding, transform, None);
        Ok(())
    }

    pub fn stroke_path(&mut self, path: Path, style: StrokeStyle, alpha: u8) -> Result<()> {
        let path = path.finish()?;
        let stroke = stroke(style)?;
        let transform = self.transform();
        self.pixmap
            .stroke_path(&path, &Self::paint(alpha), &stroke, transform, None);
        Ok(())
    }

    /// Strokes `path` so that the ink stays entirely inside the filled
    /// region of the path: the stroke is drawn at twice the width and masked
    /// by the path's own fill.
    pub fn inner_stroke_path(&mut self, path: Path, style: StrokeStyle, alpha: u8) -> Result<()> {
        let path = path.finish()?;
        let doubled = StrokeStyle {
            width: style.width * 2.0,
            cap: style.cap,
        };
        let stroke = stroke(doubled)?;
        let transform = self.transform();
        let (width, height) = (self.width(), self.height());
        let mut mask =
            Mask::new(width, height).ok_or(RasterError::CanvasAllocation { width, height })?;
        mask.fill_path(&path, FillRule::Winding, true, transform);
        self.pixmap
            .stroke_path(&path, &Self::paint(alpha), &stroke, transform, Some(&mask));
        Ok(())
    }

    /// Restricts the finished glyph to the logical cell.
    pub fn clip_to_cell(&mut self) {
        self.clip = Clip {
            left: self.pad_x,
            right: self.pad_x,
            top: self.pad_y,
            bottom: self.pad_y,
        };
    }

    /// Clears the clip margins and resets them.
    pub fn apply_clip(&mut self) {
        let clip = std::mem::take(&mut self.clip);
        if clip == Clip::default() {
            return;
        }
        let width = self.width() as usize;
        let height = self.height() as usize;
        let (left, right) = (clip.left as usize, clip.right as usize);
        let (top, bottom) = (clip.top as usize, clip.bottom as usize);
        let data = self.pixmap.data_mut();
        for y in 0..height {
            for x in 0..width {
                let outside = x < left
                    || x + right >= width
                    || y < top
                    || y + bottom >= height;
                if outside {
                    let o = (y * width + x) * 4;
                    data[o..o + 4].fill(0);
                }
            }
        }
    }

    /// `255 - v` for every pixel of the padded canvas.
    pub fn invert(&mut self) {
        for px in self.pixmap.data_mut().chunks_exact_mut(4) {
            let v = 255 - px[3];
            px.fill(v);
        }
    }

    /// Mirrors the padded canvas left to right. Padding is symmetric, so the
    /// logical cell maps onto itself.
    pub fn flip_horizontal(&mut self) {
        let stride = self.width() as usize * 4;
        for row in self.pixmap.data_mut().chunks_exact_mut(stride) {
            let (mut l, mut r) = (0, row.len() / 4);
            while l + 1 < r {
                r -= 1;
                for c in 0..4 {
                    row.swap(l * 4 + c, r * 4 + c);
                }
                l += 1;
            }
        }
    }

    /// Coverage of the logical cell, row-major.
    pub fn cell_coverage(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity((self.cell_width * self.cell_height) as usize);
        for y in 0..self.cell_height as i32 {
            for x in 0..self.cell_width as i32 {
                out.push(self.alpha(x, y));
            }
        }
        out
    }

    pub fn into_bitmap(self) -> Bitmap {
        let data = self.pixmap.data().chunks_exact(4).map(|px| px[3]).collect();
        Bitmap {
            width: self.pixmap.width(),
            height: self.pixmap.height(),
            pad_x: self.pad_x,
            pad_y: self.pad_y,
            data,
        }
    }
}

fn stroke(style: StrokeStyle) -> Result<Stroke> {
    let width = style.width as f32;
    if !width.is_finite() || width <= 0.0 {
        return Err(RasterError::Stroke { width });
    }
    Ok(Stroke {
        width,
        line_cap: style.cap.into(),
        ..Stroke::default()
    })
}

/// Finished single channel raster of a padded canvas.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    pub width: u32,
    pub height: u32,
    pub pad_x: u32,
    pub pad_y: u32,
    pub data: Vec<u8>,
}

impl Bitmap {
    pub fn cell_width(&self) -> u32 {
        self.width - 2 * self.pad_x
    }

    pub fn cell_height(&self) -> u32 {
        self.height - 2 * self.pad_y
    }

    /// Coverage at logical `(x, y)`; zero off the raster.
    pub fn get(&self, x: i32, y: i32) -> u8 {
        let px = x + self.pad_x as i32;
        let py = y + self.pad_y as i32;
        if px < 0 || py < 0 || px >= self.width as i32 || py >= self.height as i32 {
            return 0;
        }
        self.data[py as usize * self.width as usize + px as usize]
    }

    /// Rows of the logical cell.
    pub fn cell_rows(&self) -> Vec<Vec<u8>> {
        (0..self.cell_height() as i32)
            .map(|y| (0..self.cell_width() as i32).map(|x| self.get(x, y)).collect())
            .collect()
    }
}
