use cellsprite::{render_glyph, test_support::ascii, CellMetrics};

fn main() {
    let metrics = CellMetrics::new(8, 16);
    for ch in ['┼', '╭', '▚', '⣿', '\u{E0B0}', '\u{1FB3C}'] {
        match render_glyph(ch as u32, &metrics) {
            Ok(bitmap) => println!("U+{:04X}\n{}\n", ch as u32, ascii(&bitmap)),
            Err(err) => eprintln!("U+{:04X}: {err}", ch as u32),
        }
    }
}
