//! Symbolic cell fractions and their pixel edges.
//!
//! Glyphs describe regions in fractions of the cell ("the left half", "the
//! upper three eighths") and only turn them into pixels at the last moment.
//! Two neighbouring glyphs that split the cell at the same fraction must agree
//! on the pixel that separates them, otherwise tiled blocks show a one pixel
//! seam or overlap. [`Fraction::max`] is used for the far (right/bottom) edge
//! of a region and [`Fraction::min`] for the near (left/top) edge; the former
//! rounds ties up, the latter rounds the complementary tie down, so the two
//! always land on the same pixel.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Fraction {
    Zero,
    OneEighth,
    OneQuarter,
    ThreeEighths,
    OneThird,
    Half,
    FiveEighths,
    TwoThirds,
    ThreeQuarters,
    SevenEighths,
    Full,
}

pub const HALVES: [Fraction; 3] = [Fraction::Zero, Fraction::Half, Fraction::Full];

pub const THIRDS: [Fraction; 4] = [
    Fraction::Zero,
    Fraction::OneThird,
    Fraction::TwoThirds,
    Fraction::Full,
];

pub const QUARTERS: [Fraction; 5] = [
    Fraction::Zero,
    Fraction::OneQuarter,
    Fraction::Half,
    Fraction::ThreeQuarters,
    Fraction::Full,
];

pub const EIGHTHS: [Fraction; 9] = [
    Fraction::Zero,
    Fraction::OneEighth,
    Fraction::OneQuarter,
    Fraction::ThreeEighths,
    Fraction::Half,
    Fraction::FiveEighths,
    Fraction::ThreeQuarters,
    Fraction::SevenEighths,
    Fraction::Full,
];

impl Fraction {
    /// Numerator and denominator.
    pub const fn ratio(self) -> (u64, u64) {
        match self {
            Fraction::Zero => (0, 1),
            Fraction::OneEighth => (1, 8),
            Fraction::OneQuarter => (1, 4),
            Fraction::ThreeEighths => (3, 8),
            Fraction::OneThird => (1, 3),
            Fraction::Half => (1, 2),
            Fraction::FiveEighths => (5, 8),
            Fraction::TwoThirds => (2, 3),
            Fraction::ThreeQuarters => (3, 4),
            Fraction::SevenEighths => (7, 8),
            Fraction::Full => (1, 1),
        }
    }

    pub fn value(self) -> f64 {
        let (n, d) = self.ratio();
        n as f64 / d as f64
    }

    /// `1 - self`.
    pub const fn complement(self) -> Fraction {
        match self {
            Fraction::Zero => Fraction::Full,
            Fraction::OneEighth => Fraction::SevenEighths,
            Fraction::OneQuarter => Fraction::ThreeQuarters,
            Fraction::ThreeEighths => Fraction::FiveEighths,
            Fraction::OneThird => Fraction::TwoThirds,
            Fraction::Half => Fraction::Half,
            Fraction::FiveEighths => Fraction::ThreeEighths,
            Fraction::TwoThirds => Fraction::OneThird,
            Fraction::ThreeQuarters => Fraction::OneQuarter,
            Fraction::SevenEighths => Fraction::OneEighth,
            Fraction::Full => Fraction::Zero,
        }
    }

    /// Pixel coordinate of this fraction used as the right or bottom edge of
    /// a region: `round(f * size)` with ties rounded up.
    pub fn max(self, size: u32) -> u32 {
        let (n, d) = self.ratio();
        let size = u64::from(size);
        ((2 * n * size + d) / (2 * d)) as u32
    }

    /// Pixel coordinate of this fraction used as the left or top edge of a
    /// region: `size - round((1 - f) * size)` with ties of the complement
    /// rounded down.
    pub fn min(self, size: u32) -> u32 {
        let (n, d) = self.ratio();
        let size64 = u64::from(size);
        let rest = (d - n) * size64;
        let rounded = (2 * rest + d - 1) / (2 * d);
        size - rounded as u32
    }

    /// Exact, unrounded position for path coordinates.
    pub fn float(self, size: u32) -> f64 {
        self.value() * f64::from(size)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Horizontal {
    Left,
    Right,
    Center,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Vertical {
    Top,
    Bottom,
    Middle,
}

/// Where a block sits inside its cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Alignment {
    pub horizontal: Horizontal,
    pub vertical: Vertical,
}

impl Alignment {
    pub const UPPER: Alignment = Alignment::new(Horizontal::Center, Vertical::Top);
    pub const LOWER: Alignment = Alignment::new(Horizontal::Center, Vertical::Bottom);
    pub const LEFT: Alignment = Alignment::new(Horizontal::Left, Vertical::Middle);
    pub const RIGHT: Alignment = Alignment::new(Horizontal::Right, Vertical::Middle);
    pub const CENTER: Alignment = Alignment::new(Horizontal::Center, Vertical::Middle);
    pub const UPPER_LEFT: Alignment = Alignment::new(Horizontal::Left, Vertical::Top);
    pub const UPPER_RIGHT: Alignment = Alignment::new(Horizontal::Right, Vertical::Top);
    pub const LOWER_LEFT: Alignment = Alignment::new(Horizontal::Left, Vertical::Bottom);
    pub const LOWER_RIGHT: Alignment = Alignment::new(Horizontal::Right, Vertical::Bottom);

    pub const fn new(horizontal: Horizontal, vertical: Vertical) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Pixel span `[start, end)` of an extent `fraction` of `size` along the
    /// horizontal axis.
    pub fn x_span(self, fraction: Fraction, size: u32) -> (u32, u32) {
        span(self.horizontal_anchor(), fraction, size)
    }

    /// Pixel span `[start, end)` along the vertical axis.
    pub fn y_span(self, fraction: Fraction, size: u32) -> (u32, u32) {
        span(self.vertical_anchor(), fraction, size)
    }

    fn horizontal_anchor(self) -> Anchor {
        match self.horizontal {
            Horizontal::Left => Anchor::Start,
            Horizontal::Right => Anchor::End,
            Horizontal::Center => Anchor::Middle,
        }
    }

    fn vertical_anchor(self) -> Anchor {
        match self.vertical {
            Vertical::Top => Anchor::Start,
            Vertical::Bottom => Anchor::End,
            Vertical::Middle => Anchor::Middle,
        }
    }
}

#[derive(Clone, Copy)]
enum Anchor {
    Start,
    End,
    Middle,
}

fn span(anchor: Anchor, fraction: Fraction, size: u32) -> (u32, u32) {
    match anchor {
        Anchor::Start => (0, fraction.max(size)),
        Anchor::End => (fraction.complement().min(size), size),
        Anchor::Middle => {
            let len = fraction.max(size);
            let start = (size - len) / 2;
            (start, start + len)
        }
    }
}
