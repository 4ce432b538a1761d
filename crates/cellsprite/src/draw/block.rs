//! Block elements, U+2580..=U+259F.

use super::fill;
use crate::canvas::Canvas;
use crate::fraction::{Alignment, Fraction};
use crate::metrics::{CellMetrics, Shade};

pub(crate) const QUADRANT_TL: u8 = 0b0001;
pub(crate) const QUADRANT_TR: u8 = 0b0010;
pub(crate) const QUADRANT_BL: u8 = 0b0100;
pub(crate) const QUADRANT_BR: u8 = 0b1000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BlockGlyph {
    Block {
        alignment: Alignment,
        width: Fraction,
        height: Fraction,
    },
    Shade(Shade),
    Quadrants(u8),
}

const fn block(alignment: Alignment, width: Fraction, height: Fraction) -> BlockGlyph {
    BlockGlyph::Block {
        alignment,
        width,
        height,
    }
}

const fn lower(height: Fraction) -> BlockGlyph {
    block(Alignment::LOWER, Fraction::Full, height)
}

const fn left(width: Fraction) -> BlockGlyph {
    block(Alignment::LEFT, width, Fraction::Full)
}

use Fraction::*;

const TL: u8 = QUADRANT_TL;
const TR: u8 = QUADRANT_TR;
const BL: u8 = QUADRANT_BL;
const BR: u8 = QUADRANT_BR;

/// Indexed by `codepoint - 0x2580`.
#[rustfmt::skip]
const TABLE: [BlockGlyph; 32] = [
    // ▀ ▁ ▂ ▃ ▄ ▅ ▆ ▇
    block(Alignment::UPPER, Full, Half),
    lower(OneEighth), lower(OneQuarter), lower(ThreeEighths), lower(Half),
    lower(FiveEighths), lower(ThreeQuarters), lower(SevenEighths),
    // █ ▉ ▊ ▋ ▌ ▍ ▎ ▏
    block(Alignment::CENTER, Full, Full),
    left(SevenEighths), left(ThreeQuarters), left(FiveEighths), left(Half),
    left(ThreeEighths), left(OneQuarter), left(OneEighth),
    // ▐ ░ ▒ ▓ ▔ ▕
    block(Alignment::RIGHT, Half, Full),
    BlockGlyph::Shade(Shade::Light), BlockGlyph::Shade(Shade::Medium), BlockGlyph::Shade(Shade::Dark),
    block(Alignment::UPPER, Full, OneEighth),
    block(Alignment::RIGHT, OneEighth, Full),
    // ▖ ▗ ▘ ▙ ▚ ▛ ▜ ▝ ▞ ▟
    BlockGlyph::Quadrants(BL),
    BlockGlyph::Quadrants(BR),
    BlockGlyph::Quadrants(TL),
    BlockGlyph::Quadrants(TL | BL | BR),
    BlockGlyph::Quadrants(TL | BR),
    BlockGlyph::Quadrants(TL | TR | BL),
    BlockGlyph::Quadrants(TL | TR | BR),
    BlockGlyph::Quadrants(TR),
    BlockGlyph::Quadrants(TR | BL),
    BlockGlyph::Quadrants(TR | BL | BR),
];

pub(crate) fn draw(codepoint: u32, canvas: &mut Canvas, metrics: &CellMetrics) {
    let Some(glyph) = codepoint
        .checked_sub(0x2580)
        .and_then(|i| TABLE.get(i as usize))
    else {
        unreachable!("U+{codepoint:04X} is not a block element");
    };
    match *glyph {
        BlockGlyph::Block {
            alignment,
            width,
            height,
        } => block_shade(canvas, metrics, alignment, width, height, Shade::On),
        BlockGlyph::Shade(shade) => full_shade(canvas, metrics, shade),
        BlockGlyph::Quadrants(mask) => quadrants(canvas, metrics, mask, Shade::On),
    }
}

/// One rectangle of `width` x `height` of the cell, anchored by `alignment`.
pub(crate) fn block_shade(
    canvas: &mut Canvas,
    metrics: &CellMetrics,
    alignment: Alignment,
    width: Fraction,
    height: Fraction,
    shade: Shade,
) {
    let (x0, x1) = alignment.x_span(width, metrics.cell_width);
    let (y0, y1) = alignment.y_span(height, metrics.cell_height);
    canvas.box_fill(x0 as i32, y0 as i32, x1 as i32, y1 as i32, shade.alpha());
}

pub(crate) fn full_shade(canvas: &mut Canvas, metrics: &CellMetrics, shade: Shade) {
    canvas.box_fill(
        0,
        0,
        metrics.cell_width as i32,
        metrics.cell_height as i32,
        shade.alpha(),
    );
}

/// Union of the quarter cells selected by `mask` (bits tl, tr, bl, br).
pub(crate) fn quadrants(canvas: &mut Canvas, metrics: &CellMetrics, mask: u8, shade: Shade) {
    if mask & QUADRANT_TL != 0 {
        fill(canvas, metrics, Zero, Half, Zero, Half, shade);
    }
    if mask & QUADRANT_TR != 0 {
        fill(canvas, metrics, Half, Full, Zero, Half, shade);
    }
    if mask & QUADRANT_BL != 0 {
        fill(canvas, metrics, Zero, Half, Half, Full, shade);
    }
    if mask & QUADRANT_BR != 0 {
        fill(canvas, metrics, Half, Full, Half, Full, shade);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(codepoint: u32, width: u32, height: u32) -> Vec<Vec<u8>> {
        let metrics = CellMetrics::new(width, height);
        let mut canvas = Canvas::new(width, height).unwrap();
        draw(codepoint, &mut canvas, &metrics);
        canvas.into_bitmap().cell_rows()
    }

    #[test]
    fn full_block_is_solid() {
        assert_eq!(render('█' as u32, 8, 16), vec![vec![255; 8]; 16]);
    }

    #[test]
    fn upper_and_lower_halves_partition_odd_cells() {
        for height in 1..40 {
            let upper = render('▀' as u32, 5, height);
            let lower = render('▄' as u32, 5, height);
            for y in 0..height as usize {
                let sum: u32 = u32::from(upper[y][0]) + u32::from(lower[y][0]);
                assert_eq!(sum, 255, "row {y} of {height}");
            }
        }
    }

    #[test]
    fn lower_eighths_grow_monotonically() {
        let mut previous = 0;
        for cp in 0x2581..=0x2588 {
            let rows = render(cp, 8, 24);
            let ink = rows.iter().filter(|r| r[0] == 255).count();
            assert!(ink > previous, "U+{cp:04X}");
            previous = ink;
        }
        assert_eq!(previous, 24);
    }

    #[test]
    fn shades_are_flat() {
        assert_eq!(render('░' as u32, 4, 4), vec![vec![0x40; 4]; 4]);
        assert_eq!(render('▒' as u32, 4, 4), vec![vec![0x80; 4]; 4]);
        assert_eq!(render('▓' as u32, 4, 4), vec![vec![0xc0; 4]; 4]);
    }

    #[test]
    fn quadrants_follow_their_mask() {
        let rows = render('▚' as u32, 4, 4);
        assert_eq!(
            rows,
            vec![
                vec![255, 255, 0, 0],
                vec![255, 255, 0, 0],
                vec![0, 0, 255, 255],
                vec![0, 0, 255, 255],
            ]
        );
        let rows = render('▟' as u32, 2, 2);
        assert_eq!(rows, vec![vec![0, 255], vec![255, 255]]);
    }

    #[test]
    fn right_eighth_and_upper_eighth() {
        let rows = render('▕' as u32, 8, 8);
        assert!(rows.iter().all(|r| r[7] == 255 && r[6] == 0));
        let rows = render('▔' as u32, 8, 8);
        assert_eq!(rows[0], vec![255; 8]);
        assert_eq!(rows[1], vec![0; 8]);
    }
}
