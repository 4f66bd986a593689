//! Solid-colour overlay.

use image::DynamicImage;

use crate::types::{blend_pixel, Colour};

use super::Canvas;

/// Opacity value that keeps the background untouched.
pub const FULL_OPACITY: u8 = 255;

/// Blend a uniform colour layer with the background.
///
/// `transparency` is the weight of the background: 255 keeps the background,
/// 0 replaces it with `colour`. The result is always RGB and has the
/// background's dimensions.
pub fn apply_overlay(background: &DynamicImage, colour: Colour, transparency: u8) -> Canvas {
    let mut canvas = Canvas::from_image(background);
    overlay_canvas(&mut canvas, colour, transparency);
    canvas
}

/// In-place variant of [`apply_overlay`] for an existing canvas.
pub fn overlay_canvas(canvas: &mut Canvas, colour: Colour, transparency: u8) {
    if transparency == FULL_OPACITY {
        return;
    }

    let over = colour.to_array();
    for pixel in canvas.image_mut().pixels_mut() {
        pixel.0 = blend_pixel(pixel.0, over, transparency);
    }
}
