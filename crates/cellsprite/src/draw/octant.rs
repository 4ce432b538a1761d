//! Octants, U+1CD00..=U+1CDE5.
//!
//! The cell is split into a 2x4 grid numbered
//!
//! ```text
//!  1 2
//!  3 4
//!  5 6
//!  7 8
//! ```
//!
//! Unicode skips every pattern that already exists elsewhere (halves,
//! quadrants, some quarter blocks), so the codepoint order cannot be
//! derived from the mask. The pattern of each codepoint comes from the
//! embedded `octants.txt`, one `<codepoint>;BLOCK OCTANT-<cells>` per line.

use once_cell::sync::Lazy;

use super::fill;
use crate::canvas::Canvas;
use crate::error::{RasterError, Result};
use crate::fraction::{HALVES, QUARTERS};
use crate::metrics::{CellMetrics, Shade};

pub const FIRST: u32 = 0x1CD00;
pub const LAST: u32 = 0x1CDE5;

const TABLE_SOURCE: &str = include_str!("octants.txt");
const NAME_PREFIX: &str = "BLOCK OCTANT-";

/// Cell masks indexed by `codepoint - FIRST`; bit `n - 1` is cell `n`.
static OCTANTS: Lazy<Vec<u8>> = Lazy::new(|| match parse_table(TABLE_SOURCE) {
    Ok(table) => table,
    Err(err) => panic!("embedded octant table is malformed: {err}"),
});

/// Parses an octant table, checking that it covers the whole block in
/// codepoint order.
pub fn parse_table(source: &str) -> Result<Vec<u8>> {
    let mut masks = Vec::with_capacity((LAST - FIRST + 1) as usize);
    for (index, raw) in source.lines().enumerate() {
        let line = index + 1;
        let raw = raw.trim();
        if raw.is_empty() {
            continue;
        }
        let err = |reason: String| RasterError::OctantTable { line, reason };

        let (codepoint, name) = raw
            .split_once(';')
            .ok_or_else(|| err("missing ';'".to_string()))?;
        let codepoint = u32::from_str_radix(codepoint.trim(), 16)
            .map_err(|e| err(format!("bad codepoint {codepoint:?}: {e}")))?;
        let expected = FIRST + masks.len() as u32;
        if codepoint != expected {
            return Err(err(format!(
                "expected U+{expected:04X}, found U+{codepoint:04X}"
            )));
        }
        let cells = name
            .trim()
            .strip_prefix(NAME_PREFIX)
            .ok_or_else(|| err(format!("unexpected name {name:?}")))?;
        if cells.is_empty() {
            return Err(err("no cells listed".to_string()));
        }

        let mut mask = 0u8;
        for cell in cells.chars() {
            let n = cell
                .to_digit(10)
                .filter(|n| (1..=8).contains(n))
                .ok_or_else(|| err(format!("bad cell {cell:?}")))?;
            let bit = 1u8 << (n - 1);
            if mask & bit != 0 {
                return Err(err(format!("cell {n} listed twice")));
            }
            mask |= bit;
        }
        masks.push(mask);
    }

    let expected = (LAST - FIRST + 1) as usize;
    if masks.len() != expected {
        return Err(RasterError::OctantTable {
            line: source.lines().count(),
            reason: format!("expected {expected} octants, found {}", masks.len()),
        });
    }
    Ok(masks)
}

/// The cells of an octant codepoint.
pub fn octant_mask(codepoint: u32) -> Option<u8> {
    let index = codepoint.checked_sub(FIRST)? as usize;
    OCTANTS.get(index).copied()
}

pub(crate) fn draw(codepoint: u32, canvas: &mut Canvas, metrics: &CellMetrics) {
    let Some(mask) = octant_mask(codepoint) else {
        unreachable!("U+{codepoint:04X} is not an octant");
    };
    for bit in 0..8usize {
        if mask & (1 << bit) == 0 {
            continue;
        }
        let (column, row) = (bit % 2, bit / 2);
        fill(
            canvas,
            metrics,
            HALVES[column],
            HALVES[column + 1],
            QUARTERS[row],
            QUARTERS[row + 1],
            Shade::On,
        );
    }
}
