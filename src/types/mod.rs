//! Core domain types for thumbgen.
//!
//! - `Colour` - RGB colour values and blending
//! - `Theme` / `ColorTheme` - the fixed colour theme table

mod colour;
mod theme;

pub use colour::{blend_channel, blend_pixel, Colour};
pub use theme::{ColorTheme, Theme, ThemeChoice, RANDOM_THEME};
