//! Image file input and output.
//!
//! The output format is inferred from the file extension.

use std::path::Path;

use image::DynamicImage;

use crate::error::{Result, ThumbError};

use super::Canvas;

/// Decode the background image.
pub fn load_background(path: &Path) -> Result<DynamicImage> {
    image::open(path).map_err(|e| ThumbError::MissingResource {
        kind: "background",
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Write the composited canvas to `path`.
pub fn save_canvas(canvas: &Canvas, path: &Path) -> Result<()> {
    canvas.as_image().save(path).map_err(|e| ThumbError::Write {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
