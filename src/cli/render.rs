//! Render command implementation.
//!
//! Loads the config, resolves the theme, composites the image and writes it.

use std::path::PathBuf;

use clap::Args;
use image::{DynamicImage, RgbaImage};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{RenderConfig, CONFIG_FILENAME};
use crate::error::Result;
use crate::output::{display_path, Printer};
use crate::render::{load_background, load_logo, save_canvas, write_image, FontFace};
use crate::types::{Theme, ThemeChoice};

/// Render the image described by a config file
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Config file (JSON, or YAML by extension)
    #[arg(long, short, default_value = CONFIG_FILENAME)]
    pub config: PathBuf,

    /// Seed for the `random` theme pick
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Decoded inputs of a render.
pub(crate) struct Inputs {
    pub background: DynamicImage,
    pub font: FontFace,
    pub logo: Option<RgbaImage>,
}

impl Inputs {
    pub(crate) fn load(config: &RenderConfig) -> Result<Self> {
        let background = load_background(&config.background)?;
        let font = FontFace::load(&config.font, config.font_size)?;
        let logo = config.logo.as_deref().map(load_logo).transpose()?;

        Ok(Self {
            background,
            font,
            logo,
        })
    }
}

pub fn run(args: RenderArgs, printer: &Printer) -> Result<()> {
    printer.status("Loading", &display_path(&args.config));
    let (config, raw) = RenderConfig::load(&args.config)?;
    println!("config loaded:\n{}", raw.to_pretty_json());

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let theme = resolve_theme(&config, &mut rng, printer);

    let inputs = Inputs::load(&config)?;
    printer.status(
        "Rendering",
        &format!(
            "{} ({}x{})",
            display_path(&config.output),
            inputs.background.width(),
            inputs.background.height()
        ),
    );

    let canvas = write_image(
        &inputs.background,
        &theme.colors(),
        &config.line1,
        &config.line2,
        &inputs.font,
        inputs.logo.as_ref(),
    );
    save_canvas(&canvas, &config.output)?;

    printer.success("Finished", &display_path(&config.output));
    Ok(())
}

/// Resolve the configured theme, reporting the pick when it was random.
fn resolve_theme(config: &RenderConfig, rng: &mut StdRng, printer: &Printer) -> Theme {
    let theme = config.color.resolve(rng);
    if config.color == ThemeChoice::Random {
        printer.info("Picked", &format!("theme {}", printer.cyan(theme.key())));
    }
    theme
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ThumbError;
    use image::{Rgb, RgbImage};
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn font_path() -> Option<&'static str> {
        [
            "/usr/share/fonts/truetype/dejavu/DejaVuSansMono-Bold.ttf",
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/TTF/DejaVuSans.ttf",
            "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        ]
        .into_iter()
        .find(|p| Path::new(p).exists())
    }

    fn write_config(dir: &Path, color: &str, font: &str) -> PathBuf {
        let background = dir.join("default_1500_wide.png");
        RgbImage::from_pixel(1500, 600, Rgb([40, 40, 40]))
            .save(&background)
            .unwrap();

        let config = serde_json::json!({
            "imageName": dir.join("out.png"),
            "text": ["Leetcode", "1. Two Sum"],
            "color": color,
            "font": font,
            "background": background,
        });
        let path = dir.join("config.json");
        fs::write(&path, config.to_string()).unwrap();
        path
    }

    fn pixels_of(path: &Path, colour: [u8; 3]) -> usize {
        image::open(path)
            .unwrap()
            .to_rgb8()
            .pixels()
            .filter(|p| p.0 == colour)
            .count()
    }

    #[test]
    fn test_render_orange_config() {
        let Some(font) = font_path() else {
            return;
        };
        let dir = tempdir().unwrap();
        let config = write_config(dir.path(), "orange", font);

        run(RenderArgs { config, seed: None }, &Printer::new()).unwrap();

        let out = dir.path().join("out.png");
        let img = image::open(&out).unwrap();
        assert_eq!((img.width(), img.height()), (1500, 600));
        assert!(pixels_of(&out, [255, 165, 0]) > 0);
        // Corners keep the background under a full-opacity overlay
        assert_eq!(img.to_rgb8().get_pixel(0, 0).0, [40, 40, 40]);
    }

    #[test]
    fn test_render_random_uses_one_theme() {
        let Some(font) = font_path() else {
            return;
        };
        let dir = tempdir().unwrap();
        let config = write_config(dir.path(), "random", font);

        run(RenderArgs { config, seed: Some(3) }, &Printer::new()).unwrap();

        let out = dir.path().join("out.png");
        let used: Vec<Theme> = Theme::ALL
            .into_iter()
            .filter(|t| pixels_of(&out, t.colors().primary_font.to_array()) > 0)
            .collect();
        assert_eq!(used.len(), 1, "themes used: {:?}", used);

        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(used[0], ThemeChoice::Random.resolve(&mut rng));
    }

    #[test]
    fn test_unknown_theme_writes_nothing() {
        let dir = tempdir().unwrap();
        let config = write_config(dir.path(), "nonexistent_theme", "missing.ttf");

        let err = run(RenderArgs { config, seed: None }, &Printer::new()).unwrap_err();

        assert!(matches!(err, ThumbError::InvalidTheme { .. }));
        assert!(!dir.path().join("out.png").exists());
    }

    #[test]
    fn test_missing_font_writes_nothing() {
        let dir = tempdir().unwrap();
        let config = write_config(dir.path(), "blank", "/nonexistent/font.ttf");

        let err = run(RenderArgs { config, seed: None }, &Printer::new()).unwrap_err();

        assert!(matches!(err, ThumbError::MissingResource { kind: "font", .. }));
        assert!(!dir.path().join("out.png").exists());
    }

    #[test]
    fn test_missing_config_fails_immediately() {
        let dir = tempdir().unwrap();
        let args = RenderArgs {
            config: dir.path().join("config.json"),
            seed: None,
        };
        let err = run(args, &Printer::new()).unwrap_err();
        assert!(matches!(err, ThumbError::ConfigRead { .. }));
    }
}
