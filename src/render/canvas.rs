//! The RGB pixel buffer that the pipeline draws onto.

use image::{DynamicImage, RgbImage};

use crate::types::Colour;

/// An RGB image being composited.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    pixels: RgbImage,
}

impl Canvas {
    /// Wrap an existing RGB buffer.
    pub fn new(pixels: RgbImage) -> Self {
        Self { pixels }
    }

    /// A canvas filled with a single colour.
    pub fn filled(width: u32, height: u32, colour: Colour) -> Self {
        Self::new(RgbImage::from_pixel(width, height, colour.to_pixel()))
    }

    /// Flatten any decoded image to RGB, dropping its alpha channel.
    pub fn from_image(image: &DynamicImage) -> Self {
        Self::new(image.to_rgb8())
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Get the dimensions as (width, height).
    pub fn size(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    /// Get a pixel, or `None` outside the canvas.
    pub fn get(&self, x: u32, y: u32) -> Option<Colour> {
        self.pixels.get_pixel_checked(x, y).map(|p| Colour::from(*p))
    }

    /// Mutable access to the pixel at signed coordinates, `None` when off-canvas.
    pub fn pixel_mut(&mut self, x: i64, y: i64) -> Option<&mut [u8; 3]> {
        if x < 0 || y < 0 {
            return None;
        }
        self.pixels
            .get_pixel_mut_checked(x as u32, y as u32)
            .map(|p| &mut p.0)
    }

    pub fn as_image(&self) -> &RgbImage {
        &self.pixels
    }

    pub fn image_mut(&mut self) -> &mut RgbImage {
        &mut self.pixels
    }

    pub fn into_image(self) -> RgbImage {
        self.pixels
    }
}
