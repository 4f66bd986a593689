//! Logo compositing.

use std::path::Path;

use image::RgbaImage;

use crate::error::{Result, ThumbError};
use crate::types::blend_pixel;

use super::Canvas;

/// Left margin of the logo in pixels.
pub const LOGO_MARGIN: i64 = 20;

/// Top-left position of a logo: fixed left margin, vertically centered.
pub fn logo_offset(canvas_height: u32, logo_height: u32) -> (i64, i64) {
    let top = (canvas_height as i64 - logo_height as i64).div_euclid(2);
    (LOGO_MARGIN, top)
}

/// Decode a logo file, keeping its alpha channel.
pub fn load_logo(path: &Path) -> Result<RgbaImage> {
    image::open(path)
        .map(|img| img.to_rgba8())
        .map_err(|e| ThumbError::MissingResource {
            kind: "logo",
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}

/// Paste `logo` onto the canvas, using its alpha channel as the mask.
///
/// Parts of the logo that fall outside the canvas are clipped.
pub fn paste_logo(canvas: &mut Canvas, logo: &RgbaImage) {
    let (left, top) = logo_offset(canvas.height(), logo.height());

    for (lx, ly, pixel) in logo.enumerate_pixels() {
        let [r, g, b, a] = pixel.0;
        if a == 0 {
            continue;
        }
        if let Some(dst) = canvas.pixel_mut(left + lx as i64, top + ly as i64) {
            *dst = blend_pixel([r, g, b], *dst, a);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Colour;
    use image::Rgba;
    use tempfile::tempdir;

    #[test]
    fn test_logo_offset() {
        assert_eq!(logo_offset(600, 200), (20, 200));
        assert_eq!(logo_offset(600, 201), (20, 199));
        assert_eq!(logo_offset(100, 140), (20, -20));
    }

    #[test]
    fn test_paste_opaque_logo_position() {
        let mut canvas = Canvas::filled(100, 60, Colour::BLACK);
        let logo = RgbaImage::from_pixel(10, 20, Rgba([255, 0, 0, 255]));
        paste_logo(&mut canvas, &logo);

        let red = Colour::rgb(255, 0, 0);
        // (60 - 20) / 2 = 20
        assert_eq!(canvas.get(20, 20), Some(red));
        assert_eq!(canvas.get(29, 39), Some(red));
        assert_eq!(canvas.get(19, 20), Some(Colour::BLACK));
        assert_eq!(canvas.get(20, 19), Some(Colour::BLACK));
        assert_eq!(canvas.get(30, 20), Some(Colour::BLACK));
        assert_eq!(canvas.get(20, 40), Some(Colour::BLACK));
    }

    #[test]
    fn test_paste_respects_alpha_mask() {
        let mut canvas = Canvas::filled(50, 10, Colour::WHITE);
        let mut logo = RgbaImage::from_pixel(3, 2, Rgba([0, 0, 0, 0]));
        logo.put_pixel(1, 0, Rgba([0, 0, 0, 255]));
        logo.put_pixel(2, 0, Rgba([0, 0, 0, 128]));
        paste_logo(&mut canvas, &logo);

        // top = (10 - 2) / 2 = 4
        assert_eq!(canvas.get(20, 4), Some(Colour::WHITE));
        assert_eq!(canvas.get(21, 4), Some(Colour::BLACK));
        assert_eq!(canvas.get(22, 4), Some(Colour::rgb(127, 127, 127)));
        assert_eq!(canvas.get(21, 5), Some(Colour::WHITE));
    }

    #[test]
    fn test_paste_tall_logo_is_clipped() {
        let mut canvas = Canvas::filled(40, 10, Colour::BLACK);
        let logo = RgbaImage::from_pixel(5, 30, Rgba([0, 255, 0, 255]));
        paste_logo(&mut canvas, &logo);

        let green = Colour::rgb(0, 255, 0);
        assert_eq!(canvas.get(20, 0), Some(green));
        assert_eq!(canvas.get(24, 9), Some(green));
        assert_eq!(canvas.get(25, 5), Some(Colour::BLACK));
    }

    #[test]
    fn test_load_logo() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("logo.png");
        RgbaImage::from_pixel(4, 4, Rgba([1, 2, 3, 100])).save(&path).unwrap();

        let logo = load_logo(&path).unwrap();
        assert_eq!(logo.dimensions(), (4, 4));
        assert_eq!(logo.get_pixel(0, 0).0, [1, 2, 3, 100]);

        let err = load_logo(&dir.path().join("missing.png")).unwrap_err();
        assert!(matches!(err, ThumbError::MissingResource { kind: "logo", .. }));
    }
}
