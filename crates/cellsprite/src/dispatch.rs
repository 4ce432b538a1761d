//! Codepoint routing: which composer draws which range, and the public
//! render entry points built on top of it.

use std::ops::RangeInclusive;

use log::trace;

use crate::canvas::{Bitmap, Canvas};
use crate::draw::{block, box_drawing, braille, geometric, legacy, octant, powerline, special};
use crate::error::{RasterError, Result};
use crate::metrics::CellMetrics;
use crate::sprite::Sprite;

/// Glyph family a supported range belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Family {
    BoxDrawing,
    Block,
    Geometric,
    Braille,
    Powerline,
    Octant,
    LegacyComputing,
}

impl Family {
    pub fn name(self) -> &'static str {
        match self {
            Family::BoxDrawing => "box drawing",
            Family::Block => "block elements",
            Family::Geometric => "geometric shapes",
            Family::Braille => "braille",
            Family::Powerline => "powerline",
            Family::Octant => "octants",
            Family::LegacyComputing => "legacy computing",
        }
    }
}

const RANGES: [(u32, u32, Family); 11] = [
    (0x2500, 0x257F, Family::BoxDrawing),
    (0x2580, 0x259F, Family::Block),
    (0x25E2, 0x25E5, Family::Geometric),
    (0x25F8, 0x25FA, Family::Geometric),
    (0x25FF, 0x25FF, Family::Geometric),
    (0x2800, 0x28FF, Family::Braille),
    (0xE0B0, 0xE0BF, Family::Powerline),
    (octant::FIRST, octant::LAST, Family::Octant),
    (0x1FB00, 0x1FBAF, Family::LegacyComputing),
    (0x1FBCE, 0x1FBCF, Family::LegacyComputing),
    (0x1FBE4, 0x1FBE7, Family::LegacyComputing),
];

/// Every codepoint range this crate can draw, with its family.
pub fn supported_ranges() -> impl Iterator<Item = (RangeInclusive<u32>, Family)> {
    RANGES
        .iter()
        .map(|&(start, end, family)| (start..=end, family))
}

pub fn family(codepoint: u32) -> Option<Family> {
    RANGES
        .iter()
        .find(|(start, end, _)| (*start..=*end).contains(&codepoint))
        .map(|(_, _, family)| *family)
}

pub fn is_supported(codepoint: u32) -> bool {
    family(codepoint).is_some()
}

/// Metrics for this call, checked against the canvas it will draw on.
fn prepare(canvas: &Canvas, width: u32, height: u32, metrics: &CellMetrics) -> Result<CellMetrics> {
    let metrics = metrics.resized(width, height);
    metrics.validate()?;
    if canvas.cell_width() != width || canvas.cell_height() != height {
        return Err(RasterError::InvalidMetrics(format!(
            "canvas cell is {}x{} but {}x{} was requested",
            canvas.cell_width(),
            canvas.cell_height(),
            width,
            height
        )));
    }
    Ok(metrics)
}

/// Draws `codepoint` into a blank `canvas` whose cell is `width` x `height`.
///
/// # Panics
///
/// Panics when `codepoint` is not covered by [`supported_ranges`]; gate calls
/// with [`is_supported`].
pub fn render(
    codepoint: u32,
    canvas: &mut Canvas,
    width: u32,
    height: u32,
    metrics: &CellMetrics,
) -> Result<()> {
    let metrics = prepare(canvas, width, height, metrics)?;
    let family = family(codepoint)
        .unwrap_or_else(|| unreachable!("U+{codepoint:04X} has no registered composer"));
    trace!("rendering U+{codepoint:04X} ({}) at {width}x{height}", family.name());

    match family {
        Family::BoxDrawing => box_drawing::draw(codepoint, canvas, &metrics)?,
        Family::Block => block::draw(codepoint, canvas, &metrics),
        Family::Geometric => geometric::draw(codepoint, canvas, &metrics)?,
        Family::Braille => braille::draw(codepoint, canvas, &metrics),
        Family::Powerline => powerline::draw(codepoint, canvas, &metrics)?,
        Family::Octant => octant::draw(codepoint, canvas, &metrics),
        Family::LegacyComputing => legacy::draw(codepoint, canvas, &metrics)?,
    }
    canvas.apply_clip();
    Ok(())
}

/// Draws a sprite key into a blank `canvas` whose cell is `width` x `height`.
pub fn render_sprite(
    sprite: Sprite,
    canvas: &mut Canvas,
    width: u32,
    height: u32,
    metrics: &CellMetrics,
) -> Result<()> {
    let metrics = prepare(canvas, width, height, metrics)?;
    trace!("rendering sprite {sprite} at {width}x{height}");
    special::draw(sprite, canvas, &metrics)?;
    canvas.apply_clip();
    Ok(())
}

/// Allocates a canvas for `metrics`, draws `codepoint` and returns the raster.
pub fn render_glyph(codepoint: u32, metrics: &CellMetrics) -> Result<Bitmap> {
    let mut canvas = Canvas::new(metrics.cell_width, metrics.cell_height)?;
    render(codepoint, &mut canvas, metrics.cell_width, metrics.cell_height, metrics)?;
    Ok(canvas.into_bitmap())
}

pub fn render_sprite_glyph(sprite: Sprite, metrics: &CellMetrics) -> Result<Bitmap> {
    let mut canvas = Canvas::new(metrics.cell_width, metrics.cell_height)?;
    render_sprite(sprite, &mut canvas, metrics.cell_width, metrics.cell_height, metrics)?;
    Ok(canvas.into_bitmap())
}
