//! Rendering module for thumbgen.
//!
//! This module composites the header image: an overlay over the
//! background, two lines of text, and an optional logo.

mod canvas;
mod compose;
mod logo;
mod overlay;
mod text;
mod write;

pub use canvas::Canvas;
pub use compose::write_image;
pub use logo::{load_logo, logo_offset, paste_logo, LOGO_MARGIN};
pub use overlay::{apply_overlay, overlay_canvas, FULL_OPACITY};
pub use text::{draw_lines, line_offsets, place_lines, FontFace, Origin, TextLayout};
pub use write::{load_background, save_canvas};
