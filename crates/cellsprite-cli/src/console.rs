use cellsprite::Bitmap;

/// Shade ramp used for the plain text preview, from empty to solid.
const RAMP: [char; 5] = [' ', '░', '▒', '▓', '█'];

/// Terminal preview of a rasterized cell, one character per pixel.
pub struct ConsoleRenderer {
    rows: Vec<Vec<u8>>,
}

impl ConsoleRenderer {
    /// Preview of the logical cell, or of the whole padded raster when
    /// `padded` is set.
    pub fn new(bitmap: &Bitmap, padded: bool) -> Self {
        let rows = if padded {
            bitmap
                .data
                .chunks_exact(bitmap.width as usize)
                .map(|row| row.to_vec())
                .collect()
        } else {
            bitmap.cell_rows()
        };
        Self { rows }
    }

    pub fn into_text_string(self) -> String {
        self.rows
            .iter()
            .map(|row| row.iter().map(|&alpha| shade_char(alpha)).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Two spaces per pixel on a 256-colour greyscale background, so pixels
    /// come out roughly square.
    pub fn into_ansi_string(self) -> String {
        let mut out = String::new();
        for (li, row) in self.rows.iter().enumerate() {
            if li > 0 {
                out.push('\n');
            }
            for &alpha in row {
                out.push_str(&format!("\x1B[48;5;{}m  ", grey_index(alpha)));
            }
            out.push_str("\x1B[0m");
        }
        out
    }
}

fn shade_char(alpha: u8) -> char {
    match alpha {
        0 => RAMP[0],
        255 => RAMP[4],
        a => RAMP[1 + usize::from(a) * 3 / 256],
    }
}

/// Nearest xterm-256 greyscale entry; 16 and 231 are the cube's black and
/// white.
fn grey_index(alpha: u8) -> u8 {
    match alpha {
        0 => 16,
        255 => 231,
        a => 232 + (u16::from(a) * 23 / 255) as u8,
    }
}

/// Binary PGM (P5) image of the raster.
pub fn to_pgm(bitmap: &Bitmap, padded: bool) -> Vec<u8> {
    let (width, height, pixels) = if padded {
        (bitmap.width, bitmap.height, bitmap.data.clone())
    } else {
        let pixels = bitmap.cell_rows().concat();
        (bitmap.cell_width(), bitmap.cell_height(), pixels)
    };
    let mut out = format!("P5\n{width} {height}\n255\n").into_bytes();
    out.extend_from_slice(&pixels);
    out
}
