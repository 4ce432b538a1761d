//! cellsprite: procedural rasterizer for terminal cell glyphs.
//! Box drawing, blocks, braille, Powerline, legacy computing mosaics and
//! cursor/underline sprites, drawn as anti-aliased coverage masks that tile
//! seamlessly across neighbouring cells.

mod canvas;
mod dispatch;
mod draw;
mod error;
mod fraction;
mod metrics;
mod sprite;

pub use canvas::{Bitmap, Canvas, Cap, Clip, Path, StrokeStyle};
pub use dispatch::{
    family, is_supported, render, render_glyph, render_sprite, render_sprite_glyph,
    supported_ranges, Family,
};
pub use draw::box_drawing::{lines_for, Lines, Style as LineStyle};
pub use draw::braille::{BrailleLayout, DOTS as BRAILLE_DOTS};
pub use draw::mosaic::{sextant_mask, Mosaic, SMOOTH_MOSAICS};
pub use draw::octant::{octant_mask, parse_table as parse_octant_table};
pub use error::{RasterError, Result};
pub use fraction::{Alignment, Fraction, Horizontal, Vertical, EIGHTHS, HALVES, QUARTERS, THIRDS};
pub use metrics::{CellMetrics, Shade, Thickness};
pub use sprite::{CursorShape, FadeDirection, Sprite, UnderlineStyle};

// Test utilities
pub mod test_support;
