//! Colour themes: the fixed theme table and the `random` resolver.

use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::ThumbError;

use super::Colour;

/// The config value that asks for a randomly picked theme.
pub const RANDOM_THEME: &str = "random";

/// Overlay colour plus the fill colours for both text lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorTheme {
    pub overlay: Colour,
    pub primary_font: Colour,
    pub secondary_font: Colour,
}

impl ColorTheme {
    const fn solid(font: Colour) -> Self {
        Self {
            overlay: Colour::BLACK,
            primary_font: font,
            secondary_font: font,
        }
    }
}

/// A named entry of the theme table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    Blank,
    LightBlue,
    DarkGreen,
    Orange,
}

impl Theme {
    /// Every theme, in table order.
    pub const ALL: [Theme; 4] = [Theme::Blank, Theme::LightBlue, Theme::DarkGreen, Theme::Orange];

    /// The config key for this theme.
    pub fn key(self) -> &'static str {
        match self {
            Theme::Blank => "blank",
            Theme::LightBlue => "light_blue",
            Theme::DarkGreen => "dark_green",
            Theme::Orange => "orange",
        }
    }

    pub fn colors(self) -> ColorTheme {
        match self {
            Theme::Blank => ColorTheme::solid(Colour::WHITE),
            Theme::LightBlue => ColorTheme::solid(Colour::rgb(135, 206, 250)),
            Theme::DarkGreen => ColorTheme::solid(Colour::rgb(3, 125, 70)),
            Theme::Orange => ColorTheme::solid(Colour::rgb(255, 165, 0)),
        }
    }

    /// Pick a theme uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Theme {
        *Self::ALL.choose(rng).unwrap_or(&Theme::Blank)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Theme {
    type Err = ThumbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|theme| theme.key() == s)
            .ok_or_else(|| ThumbError::InvalidTheme {
                name: s.to_string(),
            })
    }
}

/// The `color` setting of a config: a fixed theme or the `random` sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeChoice {
    Named(Theme),
    Random,
}

impl ThemeChoice {
    /// Resolve to a concrete theme, drawing from `rng` for `Random`.
    pub fn resolve<R: Rng + ?Sized>(self, rng: &mut R) -> Theme {
        match self {
            ThemeChoice::Named(theme) => theme,
            ThemeChoice::Random => Theme::random(rng),
        }
    }
}

impl fmt::Display for ThemeChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeChoice::Named(theme) => theme.fmt(f),
            ThemeChoice::Random => f.write_str(RANDOM_THEME),
        }
    }
}

impl FromStr for ThemeChoice {
    type Err = ThumbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == RANDOM_THEME {
            Ok(ThemeChoice::Random)
        } else {
            s.parse().map(ThemeChoice::Named)
        }
    }
}
