use cellsprite::{
    is_supported, render, render_glyph, render_sprite_glyph, test_support::all_codepoints,
    Canvas, CellMetrics, Sprite,
};

const SIZES: [(u32, u32); 8] = [
    (4, 8),
    (5, 11),
    (7, 15),
    (8, 16),
    (9, 19),
    (10, 20),
    (16, 32),
    (23, 47),
];

fn metric_variants(width: u32, height: u32) -> [CellMetrics; 2] {
    [
        CellMetrics::new(width, height),
        CellMetrics::new(width, height)
            .with_box_thickness(1)
            .with_underline(height - 2, 1)
            .with_cursor_thickness(1),
    ]
}

#[test]
fn catalog_covers_every_range() {
    let codepoints = all_codepoints();
    assert_eq!(codepoints.len(), 852);
    assert!(codepoints.iter().all(|&cp| is_supported(cp)));
}

#[test]
fn every_supported_codepoint_renders_at_every_size() {
    for (width, height) in SIZES {
        for metrics in metric_variants(width, height) {
            for codepoint in all_codepoints() {
                let bitmap = render_glyph(codepoint, &metrics)
                    .unwrap_or_else(|e| panic!("U+{codepoint:04X} at {width}x{height}: {e}"));
                assert_eq!(bitmap.cell_width(), width);
                assert_eq!(bitmap.cell_height(), height);
                let inked = bitmap.data.iter().any(|&a| a != 0);
                assert_eq!(
                    inked,
                    codepoint != 0x2800,
                    "U+{codepoint:04X} at {width}x{height} ink"
                );
            }
        }
    }
}

#[test]
fn every_sprite_renders_at_every_size() {
    for (width, height) in SIZES {
        for metrics in metric_variants(width, height) {
            for sprite in Sprite::all() {
                let bitmap = render_sprite_glyph(sprite, &metrics)
                    .unwrap_or_else(|e| panic!("{sprite} at {width}x{height}: {e}"));
                assert!(bitmap.data.iter().any(|&a| a != 0), "{sprite} at {width}x{height}");
            }
        }
    }
}

#[test]
fn rendering_is_idempotent() {
    let metrics = CellMetrics::new(9, 19);
    for codepoint in all_codepoints() {
        let first = render_glyph(codepoint, &metrics).unwrap();
        let second = render_glyph(codepoint, &metrics).unwrap();
        assert!(first == second, "U+{codepoint:04X} differs between renders");
    }
}

#[test]
fn caller_owned_canvas_matches_render_glyph() {
    let metrics = CellMetrics::new(10, 20);
    for codepoint in ['╭' as u32, '░' as u32, 0xE0B4, 0x1FB3C, 0x1CD42] {
        let mut canvas = Canvas::new(10, 20).unwrap();
        render(codepoint, &mut canvas, 10, 20, &metrics).unwrap();
        assert!(canvas.into_bitmap() == render_glyph(codepoint, &metrics).unwrap());
    }
}
