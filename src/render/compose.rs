//! The compositing pipeline: overlay, text, then an optional logo.

use image::{DynamicImage, RgbaImage};

use crate::types::ColorTheme;

use super::logo::paste_logo;
use super::overlay::{apply_overlay, FULL_OPACITY};
use super::text::{draw_lines, FontFace, TextLayout};
use super::Canvas;

/// Composite a header image.
///
/// Without a logo both lines are centered. With a logo the lines are
/// anchored at a quarter of the width and the logo is pasted on the left.
pub fn write_image(
    background: &DynamicImage,
    theme: &ColorTheme,
    line1: &str,
    line2: &str,
    font: &FontFace,
    logo: Option<&RgbaImage>,
) -> Canvas {
    let mut canvas = apply_overlay(background, theme.overlay, FULL_OPACITY);
    let colours = [theme.primary_font, theme.secondary_font];

    match logo {
        None => draw_lines(&mut canvas, font, TextLayout::Centered, [line1, line2], colours),
        Some(logo) => {
            draw_lines(&mut canvas, font, TextLayout::LogoAnchored, [line1, line2], colours);
            paste_logo(&mut canvas, logo);
        }
    }

    canvas
}
