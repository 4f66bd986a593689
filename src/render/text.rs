//! Two-line text placement and drawing.
//!
//! Lines are positioned by their top-left corner: line 1 sits a third of the
//! way down the canvas and line 2 a further fifth below it. Horizontally the
//! lines are either centered on their own measured width or anchored a
//! quarter of the way across when a logo occupies the left side.

use std::path::Path;

use rusttype::{point, Font, Scale};

use crate::error::{Result, ThumbError};
use crate::types::{blend_pixel, Colour};

use super::Canvas;

/// How the two text lines are laid out horizontally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextLayout {
    /// Each line centered on its own width.
    Centered,
    /// Both lines start at a quarter of the canvas width.
    LogoAnchored,
}

/// Top-left origin of a line of text, in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Origin {
    pub x: i32,
    pub y: i32,
}

/// Vertical offsets of (line 1, line 2).
pub fn line_offsets(canvas_height: u32) -> (i32, i32) {
    let first = (canvas_height / 3) as i32;
    (first, first + (canvas_height / 5) as i32)
}

/// Compute both line origins for a canvas size and the lines' pixel widths.
pub fn place_lines(layout: TextLayout, (width, height): (u32, u32), widths: [f32; 2]) -> [Origin; 2] {
    let (y1, y2) = line_offsets(height);
    let x_for = |text_width: f32| match layout {
        TextLayout::Centered => ((width as f32 - text_width) / 2.0).round() as i32,
        TextLayout::LogoAnchored => (width / 4) as i32,
    };

    [
        Origin { x: x_for(widths[0]), y: y1 },
        Origin { x: x_for(widths[1]), y: y2 },
    ]
}

/// A TrueType font at a fixed point size.
pub struct FontFace {
    font: Font<'static>,
    scale: Scale,
    size: u32,
}

impl FontFace {
    /// Load a font file at the given point size.
    pub fn load(path: &Path, size: u32) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|e| ThumbError::MissingResource {
            kind: "font",
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::from_bytes(bytes, size).ok_or_else(|| ThumbError::MissingResource {
            kind: "font",
            path: path.to_path_buf(),
            message: "not a TrueType/OpenType font".to_string(),
        })
    }

    /// Parse font data. Returns `None` when the data is not a usable font.
    pub fn from_bytes(bytes: Vec<u8>, size: u32) -> Option<Self> {
        let font = Font::try_from_vec(bytes)?;

        // Point size is the em size; rusttype scales by ascent-to-descent height.
        let metrics = font.v_metrics_unscaled();
        let units_per_em = font.units_per_em().max(1) as f32;
        let pixel_height = (metrics.ascent - metrics.descent) / units_per_em * size as f32;

        Some(Self {
            font,
            scale: Scale::uniform(pixel_height),
            size,
        })
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Advance width of `text` in pixels.
    pub fn measure(&self, text: &str) -> f32 {
        self.font
            .layout(text, self.scale, point(0.0, 0.0))
            .last()
            .map(|g| g.position().x + g.unpositioned().h_metrics().advance_width)
            .unwrap_or(0.0)
    }

    /// Draw `text` with its line box's top-left corner at `origin`.
    ///
    /// Glyph pixels that fall outside the canvas are dropped.
    pub fn draw(&self, canvas: &mut Canvas, origin: Origin, text: &str, colour: Colour) {
        let ascent = self.font.v_metrics(self.scale).ascent;
        let start = point(origin.x as f32, origin.y as f32 + ascent);
        let fill = colour.to_array();

        for glyph in self.font.layout(text, self.scale, start) {
            let Some(bb) = glyph.pixel_bounding_box() else {
                continue;
            };
            glyph.draw(|gx, gy, coverage| {
                let alpha = (coverage.clamp(0.0, 1.0) * 255.0).round() as u8;
                if alpha == 0 {
                    return;
                }
                let x = bb.min.x as i64 + gx as i64;
                let y = bb.min.y as i64 + gy as i64;
                if let Some(dst) = canvas.pixel_mut(x, y) {
                    *dst = blend_pixel(fill, *dst, alpha);
                }
            });
        }
    }
}

/// Draw both lines in the given layout, line 1 in `colours[0]` and line 2 in
/// `colours[1]`.
pub fn draw_lines(
    canvas: &mut Canvas,
    font: &FontFace,
    layout: TextLayout,
    lines: [&str; 2],
    colours: [Colour; 2],
) {
    let widths = [font.measure(lines[0]), font.measure(lines[1])];
    let origins = place_lines(layout, canvas.size(), widths);

    for ((text, origin), colour) in lines.into_iter().zip(origins).zip(colours) {
        font.draw(canvas, origin, text, colour);
    }
}
