//! Sextants (U+1FB00..=U+1FB3B) and smooth mosaics (U+1FB3C..=U+1FB67).

use super::{edge, fill};
use crate::canvas::{Canvas, Path};
use crate::error::Result;
use crate::fraction::{Fraction, HALVES, THIRDS};
use crate::metrics::{CellMetrics, Shade};

pub const SEXTANT_FIRST: u32 = 0x1FB00;
pub const SEXTANT_LAST: u32 = 0x1FB3B;
pub const SMOOTH_FIRST: u32 = 0x1FB3C;
pub const SMOOTH_LAST: u32 = 0x1FB67;

/// Cell mask of a sextant codepoint; bit `n - 1` is cell `n` of
///
/// ```text
///  1 2
///  3 4
///  5 6
/// ```
///
/// Unicode leaves out the empty cell, the left and right halves and the
/// full block, which shifts the dense enumeration once every 20 codepoints.
pub fn sextant_mask(codepoint: u32) -> Option<u8> {
    if !(SEXTANT_FIRST..=SEXTANT_LAST).contains(&codepoint) {
        return None;
    }
    let index = codepoint - SEXTANT_FIRST;
    Some((index + index / 0x14 + 1) as u8)
}

pub(crate) fn draw_sextant(codepoint: u32, canvas: &mut Canvas, metrics: &CellMetrics) {
    let Some(mask) = sextant_mask(codepoint) else {
        unreachable!("U+{codepoint:04X} is not a sextant");
    };
    for bit in 0..6usize {
        if mask & (1 << bit) == 0 {
            continue;
        }
        let (column, row) = (bit % 2, bit / 2);
        fill(
            canvas,
            metrics,
            HALVES[column],
            HALVES[column + 1],
            THIRDS[row],
            THIRDS[row + 1],
            Shade::On,
        );
    }
}

/// Which of the ten perimeter points of the halves x thirds grid a smooth
/// mosaic's polygon passes through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mosaic {
    pub tl: bool,
    pub tc: bool,
    pub tr: bool,
    pub ul: bool,
    pub ur: bool,
    pub ll: bool,
    pub lr: bool,
    pub bl: bool,
    pub bc: bool,
    pub br: bool,
}

impl Mosaic {
    /// Reads a four line, three column sketch of the cell perimeter where
    /// `#` marks a polygon vertex:
    ///
    /// ```text
    ///  tl tc tr
    ///  ul .. ur
    ///  ll .. lr
    ///  bl bc br
    /// ```
    pub const fn from_pattern(pattern: &str) -> Mosaic {
        let b = pattern.as_bytes();
        assert!(b.len() == 15, "mosaic pattern must be 4 rows of 3");
        Mosaic {
            tl: b[0] == b'#',
            tc: b[1] == b'#',
            tr: b[2] == b'#',
            ul: b[4] == b'#',
            ur: b[6] == b'#',
            ll: b[8] == b'#',
            lr: b[10] == b'#',
            bl: b[12] == b'#',
            bc: b[13] == b'#',
            br: b[14] == b'#',
        }
    }

    /// Vertices in drawing order, counter-clockwise from the top left.
    pub fn vertices(&self, metrics: &CellMetrics) -> Vec<(f64, f64)> {
        let w = metrics.cell_width;
        let h = metrics.cell_height;
        let left = 0.0;
        let center = edge(Fraction::Half, w);
        let right = f64::from(w);
        let top = 0.0;
        let upper = edge(Fraction::OneThird, h);
        let lower = edge(Fraction::TwoThirds, h);
        let bottom = f64::from(h);

        [
            (self.tl, (left, top)),
            (self.ul, (left, upper)),
            (self.ll, (left, lower)),
            (self.bl, (left, bottom)),
            (self.bc, (center, bottom)),
            (self.br, (right, bottom)),
            (self.lr, (right, lower)),
            (self.ur, (right, upper)),
            (self.tr, (right, top)),
            (self.tc, (center, top)),
        ]
        .into_iter()
        .filter_map(|(on, point)| on.then_some(point))
        .collect()
    }
}

const fn m(pattern: &str) -> Mosaic {
    Mosaic::from_pattern(pattern)
}

/// Indexed by `codepoint - SMOOTH_FIRST`.
#[rustfmt::skip]
pub const SMOOTH_MOSAICS: [Mosaic; 44] = [
    m("...\n...\n#..\n##."), // 1FB3C
    m("...\n...\n#..\n###"),
    m("...\n#..\n...\n##."),
    m("...\n#..\n...\n###"),
    m("#..\n...\n...\n##."), // 1FB40
    m(".##\n#..\n...\n#.#"),
    m("..#\n#..\n...\n#.#"),
    m(".##\n...\n#..\n#.#"),
    m("..#\n...\n#..\n#.#"),
    m(".##\n...\n...\n#.#"),
    m("...\n..#\n#..\n#.#"),
    m("...\n...\n..#\n.##"),
    m("...\n...\n..#\n###"), // 1FB48
    m("...\n..#\n...\n.##"),
    m("...\n..#\n...\n###"),
    m("..#\n...\n...\n.##"),
    m("##.\n..#\n...\n#.#"),
    m("#..\n..#\n...\n#.#"),
    m("##.\n...\n..#\n#.#"),
    m("#..\n...\n..#\n#.#"),
    m("##.\n...\n...\n#.#"), // 1FB50
    m("...\n#..\n..#\n#.#"),
    m("#.#\n...\n#..\n.##"),
    m("#.#\n...\n#..\n..#"),
    m("#.#\n#..\n...\n.##"),
    m("#.#\n#..\n...\n..#"),
    m("#.#\n...\n...\n.##"),
    m("##.\n#..\n...\n..."),
    m("#.#\n#..\n...\n..."), // 1FB58
    m("##.\n...\n#..\n..."),
    m("#.#\n...\n#..\n..."),
    m("##.\n...\n...\n#.."),
    m("#.#\n..#\n#..\n..."),
    m("#.#\n...\n..#\n##."),
    m("#.#\n...\n..#\n#.."),
    m("#.#\n..#\n...\n##."),
    m("#.#\n..#\n...\n#.."), // 1FB60
    m("#.#\n...\n...\n##."),
    m(".##\n..#\n...\n..."),
    m("#.#\n..#\n...\n..."),
    m(".##\n...\n..#\n..."),
    m("#.#\n...\n..#\n..."),
    m(".##\n...\n...\n..#"),
    m("#.#\n#..\n..#\n..."),
];

pub(crate) fn draw_smooth(codepoint: u32, canvas: &mut Canvas, metrics: &CellMetrics) -> Result<()> {
    let Some(mosaic) = codepoint
        .checked_sub(SMOOTH_FIRST)
        .and_then(|i| SMOOTH_MOSAICS.get(i as usize))
    else {
        unreachable!("U+{codepoint:04X} is not a smooth mosaic");
    };
    canvas.fill_path(Path::polygon(&mosaic.vertices(metrics)), Shade::On.alpha())
}
