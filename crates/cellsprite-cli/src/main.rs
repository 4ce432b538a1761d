use anyhow::{bail, Context, Result};
use cellsprite::{
    is_supported, render_glyph, render_sprite_glyph, supported_ranges, Bitmap, CellMetrics,
    Sprite,
};
use clap::{Args, Parser, Subcommand};
use log::{debug, info};
use std::fs;
use std::path::PathBuf;

use crate::console::{to_pgm, ConsoleRenderer};
mod console;

#[derive(Parser)]
#[command(name = "cellsprite", about = "Procedural terminal glyph rasterizer")]
struct Cli {
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Rasterize one codepoint
    Render {
        /// A character, or a hex codepoint such as `2500` or `U+1FB3C`
        glyph: String,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Rasterize a cursor, underline or fade sprite
    Sprite {
        /// Sprite name, e.g. `cursor-bar` or `underline-curly`
        name: String,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// List the supported codepoint ranges and sprite names
    Ranges,
}

#[derive(Args)]
struct OutputArgs {
    #[arg(long, default_value = "10")]
    width: u32,
    #[arg(long, default_value = "20")]
    height: u32,
    /// Box-drawing line thickness in pixels
    #[arg(long)]
    thickness: Option<u32>,
    /// Write a binary PGM image instead of printing a preview
    #[arg(long)]
    pgm: Option<PathBuf>,
    /// Include the overdraw padding around the cell
    #[arg(long)]
    padded: bool,
    /// Preview with ANSI greyscale colours
    #[arg(long)]
    ansi: bool,
}

impl OutputArgs {
    fn metrics(&self) -> CellMetrics {
        let metrics = CellMetrics::new(self.width, self.height);
        match self.thickness {
            Some(t) => metrics.with_box_thickness(t),
            None => metrics,
        }
    }

    fn emit(&self, bitmap: &Bitmap) -> Result<()> {
        if let Some(path) = &self.pgm {
            fs::write(path, to_pgm(bitmap, self.padded))
                .with_context(|| format!("writing {}", path.display()))?;
            info!("wrote {}", path.display());
            return Ok(());
        }
        let preview = ConsoleRenderer::new(bitmap, self.padded);
        if self.ansi {
            println!("{}", preview.into_ansi_string());
        } else {
            println!("{}", preview.into_text_string());
        }
        Ok(())
    }
}

/// Accepts a literal character or a hex codepoint with optional `U+`/`0x`.
fn parse_codepoint(input: &str) -> Result<u32> {
    let mut chars = input.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if !c.is_ascii_hexdigit() {
            return Ok(c as u32);
        }
    }
    let hex = input
        .strip_prefix("U+")
        .or_else(|| input.strip_prefix("u+"))
        .or_else(|| input.strip_prefix("0x"))
        .unwrap_or(input);
    u32::from_str_radix(hex, 16).with_context(|| format!("`{input}` is not a codepoint"))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    match cli.command {
        Cmd::Render { glyph, output } => {
            let codepoint = parse_codepoint(&glyph)?;
            if !is_supported(codepoint) {
                bail!("U+{codepoint:04X} is not a procedurally drawn glyph");
            }
            debug!("rendering U+{codepoint:04X} at {}x{}", output.width, output.height);
            let bitmap = render_glyph(codepoint, &output.metrics())?;
            output.emit(&bitmap)?;
        }
        Cmd::Sprite { name, output } => {
            let Some(sprite) = Sprite::from_name(&name) else {
                bail!("unknown sprite `{name}`; run `cellsprite ranges` for the list");
            };
            let bitmap = render_sprite_glyph(sprite, &output.metrics())?;
            output.emit(&bitmap)?;
        }
        Cmd::Ranges => {
            for (range, family) in supported_ranges() {
                if range.start() == range.end() {
                    println!("U+{:04X}          {}", range.start(), family.name());
                } else {
                    println!("U+{:04X}-U+{:04X} {}", range.start(), range.end(), family.name());
                }
            }
            println!();
            for sprite in Sprite::all() {
                println!("{sprite}");
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_codepoints() {
        assert_eq!(parse_codepoint("│").unwrap(), 0x2502);
        assert_eq!(parse_codepoint("2502").unwrap(), 0x2502);
        assert_eq!(parse_codepoint("U+1FB3C").unwrap(), 0x1FB3C);
        assert_eq!(parse_codepoint("0xE0B0").unwrap(), 0xE0B0);
        assert_eq!(parse_codepoint("a").unwrap(), 0xA);
        assert!(parse_codepoint("zz").is_err());
    }
}
