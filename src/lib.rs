//! thumbgen - Header and thumbnail image generator
//!
//! Composites a background image, a colour overlay, two lines of text and an
//! optional logo into a single header image, driven by a small JSON config.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod render;
pub mod types;

pub use config::{RawConfig, RenderConfig, CONFIG_FILENAME, DEFAULT_FONT_SIZE};
pub use error::{Result, ThumbError};
pub use render::{
    apply_overlay, load_background, load_logo, paste_logo, save_canvas, write_image, Canvas,
    FontFace, Origin, TextLayout,
};
pub use types::{ColorTheme, Colour, Theme, ThemeChoice};
