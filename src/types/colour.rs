//! Colour type and blending.

use std::fmt;

use image::Rgb;

/// An RGB colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    /// Create a new colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Convert to an RGB array.
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Convert to an `image` pixel.
    pub fn to_pixel(self) -> Rgb<u8> {
        Rgb(self.to_array())
    }
}

impl From<Rgb<u8>> for Colour {
    fn from(pixel: Rgb<u8>) -> Self {
        let [r, g, b] = pixel.0;
        Self::rgb(r, g, b)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Blend one channel: `alpha` weights `over`, the rest goes to `under`.
///
/// `alpha = 255` returns `over`, `alpha = 0` returns `under`.
pub fn blend_channel(over: u8, under: u8, alpha: u8) -> u8 {
    let a = alpha as u32;
    let value = over as u32 * a + under as u32 * (255 - a);
    ((value + 127) / 255) as u8
}

/// Blend two RGB pixels channel-wise with [`blend_channel`].
pub fn blend_pixel(over: [u8; 3], under: [u8; 3], alpha: u8) -> [u8; 3] {
    [
        blend_channel(over[0], under[0], alpha),
        blend_channel(over[1], under[1], alpha),
        blend_channel(over[2], under[2], alpha),
    ]
}
