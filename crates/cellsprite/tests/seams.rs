use cellsprite::{test_support::render_cell, Fraction, EIGHTHS, HALVES, QUARTERS, THIRDS};
use pretty_assertions::assert_eq;

const ALL_FRACTIONS: [Fraction; 11] = [
    Fraction::Zero,
    Fraction::OneEighth,
    Fraction::OneQuarter,
    Fraction::ThreeEighths,
    Fraction::OneThird,
    Fraction::Half,
    Fraction::FiveEighths,
    Fraction::TwoThirds,
    Fraction::ThreeQuarters,
    Fraction::SevenEighths,
    Fraction::Full,
];

#[test]
fn fraction_edges_agree_for_every_size() {
    for size in 1..=256 {
        for f in ALL_FRACTIONS {
            assert_eq!(f.min(size), f.max(size), "{f:?} of {size}");
            assert_eq!(
                f.max(size) + f.complement().max(size),
                size,
                "{f:?} and its complement of {size}"
            );
        }
        assert_eq!(Fraction::Zero.max(size), 0);
        assert_eq!(Fraction::Full.min(size), size);
    }
}

#[test]
fn split_tables_are_monotonic() {
    for size in 1..=256 {
        for table in [&HALVES[..], &THIRDS[..], &QUARTERS[..], &EIGHTHS[..]] {
            let edges: Vec<u32> = table.iter().map(|f| f.max(size)).collect();
            assert!(edges.windows(2).all(|p| p[0] <= p[1]), "{edges:?} at {size}");
            assert_eq!(edges.first(), Some(&0));
            assert_eq!(edges.last(), Some(&size));
        }
    }
}

/// Two glyphs that together cover every pixel of the cell exactly once.
fn assert_partition(a: char, b: char, width: u32, height: u32) {
    let first = render_cell(a as u32, width, height).unwrap();
    let second = render_cell(b as u32, width, height).unwrap();
    for y in 0..height as i32 {
        for x in 0..width as i32 {
            let (p, q) = (first.get(x, y), second.get(x, y));
            assert!(
                (p, q) == (255, 0) || (p, q) == (0, 255),
                "{a}{b} at {width}x{height}, pixel ({x}, {y}): {p} + {q}"
            );
        }
    }
}

#[test]
fn complementary_blocks_partition_the_cell() {
    for size in 1..=64 {
        for (width, height) in [(size, size), (size, 2 * size + 1)] {
            assert_partition('▀', '▄', width, height);
            assert_partition('▌', '▐', width, height);
            assert_partition('▔', '▇', width, height);
            assert_partition('▕', '▉', width, height);
            assert_partition('▘', '▟', width, height);
            assert_partition('▚', '▞', width, height);
        }
    }
}

#[test]
fn horizontal_lines_run_edge_to_edge() {
    for width in 3..=40 {
        let height = 2 * width + 1;
        let line = render_cell('─' as u32, width, height).unwrap();
        let cross = render_cell('┼' as u32, width, height).unwrap();
        let rows = |x: i32, bitmap: &cellsprite::Bitmap| -> Vec<i32> {
            (0..height as i32).filter(|&y| bitmap.get(x, y) == 255).collect()
        };
        let expected = rows(0, &line);
        assert!(!expected.is_empty());
        for x in 0..width as i32 {
            assert_eq!(rows(x, &line), expected, "─ column {x} at {width}x{height}");
        }
        // junction arms meet the neighbouring cell at the same rows
        assert_eq!(rows(0, &cross), expected);
        assert_eq!(rows(width as i32 - 1, &cross), expected);
    }
}

#[test]
fn vertical_lines_run_edge_to_edge() {
    for height in 6..=60 {
        let width = height / 2 + 1;
        let line = render_cell('║' as u32, width, height).unwrap();
        let junction = render_cell('╬' as u32, width, height).unwrap();
        let columns = |y: i32, bitmap: &cellsprite::Bitmap| -> Vec<i32> {
            (0..width as i32).filter(|&x| bitmap.get(x, y) == 255).collect()
        };
        let expected = columns(0, &line);
        for y in 0..height as i32 {
            assert_eq!(columns(y, &line), expected, "║ row {y} at {width}x{height}");
        }
        assert_eq!(columns(0, &junction), expected);
        assert_eq!(columns(height as i32 - 1, &junction), expected);
    }
}
