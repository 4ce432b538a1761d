//! Cell geometry supplied by the font/grid layer for one render call.

use crate::error::{RasterError, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CellMetrics {
    pub cell_width: u32,
    pub cell_height: u32,
    pub box_thickness: u32,
    pub underline_position: u32,
    pub underline_thickness: u32,
    pub strikethrough_position: u32,
    pub strikethrough_thickness: u32,
    pub overline_position: u32,
    pub overline_thickness: u32,
    pub cursor_thickness: u32,
}

impl CellMetrics {
    /// Metrics for a `width` x `height` cell with every line metric derived
    /// from the cell size.
    pub fn new(cell_width: u32, cell_height: u32) -> Self {
        let thickness = ((cell_width + 4) / 8).max(1);
        Self {
            cell_width,
            cell_height,
            box_thickness: thickness,
            underline_position: cell_height.saturating_sub(2 * thickness),
            underline_thickness: thickness,
            strikethrough_position: cell_height.saturating_sub(thickness) / 2,
            strikethrough_thickness: thickness,
            overline_position: 0,
            overline_thickness: thickness,
            cursor_thickness: thickness,
        }
    }

    pub fn with_box_thickness(mut self, thickness: u32) -> Self {
        self.box_thickness = thickness;
        self
    }

    pub fn with_underline(mut self, position: u32, thickness: u32) -> Self {
        self.underline_position = position;
        self.underline_thickness = thickness;
        self
    }

    pub fn with_strikethrough(mut self, position: u32, thickness: u32) -> Self {
        self.strikethrough_position = position;
        self.strikethrough_thickness = thickness;
        self
    }

    pub fn with_overline(mut self, position: u32, thickness: u32) -> Self {
        self.overline_position = position;
        self.overline_thickness = thickness;
        self
    }

    pub fn with_cursor_thickness(mut self, thickness: u32) -> Self {
        self.cursor_thickness = thickness;
        self
    }

    /// Same metrics for a cell of a different size.
    pub fn resized(mut self, cell_width: u32, cell_height: u32) -> Self {
        self.cell_width = cell_width;
        self.cell_height = cell_height;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.cell_width == 0 || self.cell_height == 0 {
            return Err(RasterError::InvalidMetrics(format!(
                "cell size {}x{} is empty",
                self.cell_width, self.cell_height
            )));
        }
        let thicknesses = [
            ("box", self.box_thickness),
            ("underline", self.underline_thickness),
            ("strikethrough", self.strikethrough_thickness),
            ("overline", self.overline_thickness),
            ("cursor", self.cursor_thickness),
        ];
        for (name, value) in thicknesses {
            if value == 0 {
                return Err(RasterError::InvalidMetrics(format!(
                    "{name} thickness must be positive"
                )));
            }
        }
        Ok(())
    }

    pub fn thickness(&self, thickness: Thickness) -> u32 {
        thickness.pixels(self.box_thickness)
    }
}

/// Stroke weight of box-drawing lines, relative to the box thickness.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Thickness {
    SuperLight,
    Light,
    Heavy,
}

impl Thickness {
    pub fn pixels(self, base: u32) -> u32 {
        match self {
            Thickness::SuperLight => (base / 2).max(1),
            Thickness::Light => base,
            Thickness::Heavy => base * 2,
        }
    }
}

/// The fixed coverage levels used by shaded glyphs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shade {
    Off,
    Light,
    Medium,
    Dark,
    On,
}

impl Shade {
    pub const fn alpha(self) -> u8 {
        match self {
            Shade::Off => 0,
            Shade::Light => 0x40,
            Shade::Medium => 0x80,
            Shade::Dark => 0xc0,
            Shade::On => 0xff,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_defaults() {
        let m = CellMetrics::new(10, 20);
        assert_eq!(m.box_thickness, 1);
        assert_eq!(m.underline_position, 18);
        assert_eq!(m.strikethrough_position, 9);
        assert_eq!(m.cursor_thickness, 1);

        let m = CellMetrics::new(20, 40);
        assert_eq!(m.box_thickness, 3);
        assert_eq!(m.underline_position, 34);
    }

    #[test]
    fn tiny_cells_keep_positive_thickness() {
        let m = CellMetrics::new(1, 1);
        assert_eq!(m.box_thickness, 1);
        assert_eq!(m.underline_position, 0);
        assert!(m.validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_cells_and_zero_thickness() {
        assert!(CellMetrics::new(0, 10).validate().is_err());
        let err = CellMetrics::new(8, 16)
            .with_box_thickness(0)
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("box thickness"));
    }

    #[test]
    fn thickness_classes() {
        assert_eq!(Thickness::SuperLight.pixels(1), 1);
        assert_eq!(Thickness::SuperLight.pixels(5), 2);
        assert_eq!(Thickness::Light.pixels(3), 3);
        assert_eq!(Thickness::Heavy.pixels(3), 6);
    }
}
