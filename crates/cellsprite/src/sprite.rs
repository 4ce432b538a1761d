//! Keys for sprites that have no Unicode codepoint.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use crate::draw::powerline::FadeDirection;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CursorShape {
    Block,
    Hollow,
    Bar,
    Underline,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnderlineStyle {
    Single,
    Double,
    Dotted,
    Dashed,
    Curly,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Sprite {
    Cursor(CursorShape),
    Underline(UnderlineStyle),
    Strikethrough,
    Overline,
    Fade(FadeDirection),
}

const NAMES: [(&str, Sprite); 15] = [
    ("cursor-block", Sprite::Cursor(CursorShape::Block)),
    ("cursor-hollow", Sprite::Cursor(CursorShape::Hollow)),
    ("cursor-bar", Sprite::Cursor(CursorShape::Bar)),
    ("cursor-underline", Sprite::Cursor(CursorShape::Underline)),
    ("underline", Sprite::Underline(UnderlineStyle::Single)),
    ("underline-double", Sprite::Underline(UnderlineStyle::Double)),
    ("underline-dotted", Sprite::Underline(UnderlineStyle::Dotted)),
    ("underline-dashed", Sprite::Underline(UnderlineStyle::Dashed)),
    ("underline-curly", Sprite::Underline(UnderlineStyle::Curly)),
    ("strikethrough", Sprite::Strikethrough),
    ("overline", Sprite::Overline),
    ("fade-left-to-right", Sprite::Fade(FadeDirection::LeftToRight)),
    ("fade-right-to-left", Sprite::Fade(FadeDirection::RightToLeft)),
    ("fade-top-to-bottom", Sprite::Fade(FadeDirection::TopToBottom)),
    ("fade-bottom-to-top", Sprite::Fade(FadeDirection::BottomToTop)),
];

impl Sprite {
    /// Every sprite key.
    pub fn all() -> impl Iterator<Item = Sprite> {
        NAMES.iter().map(|(_, sprite)| *sprite)
    }

    /// Looks a sprite up by its kebab-case name, e.g. `underline-curly`.
    pub fn from_name(name: &str) -> Option<Sprite> {
        NAMES
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, sprite)| *sprite)
    }

    pub fn name(self) -> &'static str {
        NAMES
            .iter()
            .find(|(_, sprite)| *sprite == self)
            .map(|(n, _)| *n)
            .unwrap_or("unknown")
    }
}

impl std::fmt::Display for Sprite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for sprite in Sprite::all() {
            assert_eq!(Sprite::from_name(sprite.name()), Some(sprite));
        }
        assert_eq!(Sprite::all().count(), NAMES.len());
        assert_eq!(Sprite::from_name("Underline-Curly"), Some(Sprite::Underline(UnderlineStyle::Curly)));
        assert_eq!(Sprite::from_name("sparkles"), None);
    }
}
