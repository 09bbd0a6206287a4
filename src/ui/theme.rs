use ratatui::style::Color;

use crate::config::ThemeName;

pub const HERO_BLUE: Color = Color::Rgb(0x3a, 0x5b, 0xa0);
pub const HERO_GOLD: Color = Color::Rgb(0xf2, 0xb7, 0x05);

/// Colour palette of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub title: Color,
    pub text: Color,
    pub muted: Color,
    pub card_border: Color,
    pub frame_border: Color,
    pub accent: Color,
    pub error: Color,
    pub highlight: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            title: HERO_GOLD,
            text: Color::Rgb(0xe5, 0xe5, 0xe5),
            muted: Color::Rgb(0x6b, 0x72, 0x80),
            card_border: Color::Rgb(0x4b, 0x5e, 0x8a),
            frame_border: Color::Rgb(0x40, 0x40, 0x40),
            accent: Color::Rgb(0x22, 0xc5, 0x5e),
            error: Color::Rgb(0xef, 0x44, 0x44),
            highlight: Color::Rgb(0x26, 0x26, 0x26),
        }
    }

    pub fn light() -> Self {
        Self {
            title: HERO_BLUE,
            text: Color::Rgb(0x1f, 0x24, 0x2c),
            muted: Color::Rgb(0x6b, 0x72, 0x80),
            card_border: Color::Rgb(0x9a, 0xad, 0xd6),
            frame_border: Color::Rgb(0xc8, 0xc8, 0xc8),
            accent: Color::Rgb(0x16, 0x83, 0x3f),
            error: Color::Rgb(0xb9, 0x1c, 0x1c),
            highlight: Color::Rgb(0xe4, 0xe9, 0xf5),
        }
    }
}

impl From<ThemeName> for Theme {
    fn from(name: ThemeName) -> Self {
        match name {
            ThemeName::Dark => Self::dark(),
            ThemeName::Light => Self::light(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
