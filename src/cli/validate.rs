//! Validate command implementation.
//!
//! Loads a config and decodes every input it names, without rendering.

use std::path::PathBuf;

use clap::Args;

use crate::config::{RenderConfig, CONFIG_FILENAME};
use crate::error::Result;
use crate::output::{display_path, Printer};
use crate::types::ThemeChoice;

use super::render::Inputs;

/// Check a config and its inputs without writing an image
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Config file (JSON, or YAML by extension)
    #[arg(long, short, default_value = CONFIG_FILENAME)]
    pub config: PathBuf,
}

pub fn run(args: ValidateArgs, printer: &Printer) -> Result<()> {
    let (config, _) = RenderConfig::load(&args.config).inspect_err(|e| {
        printer.error("Invalid", &format!("{}: {}", display_path(&args.config), e));
    })?;

    let theme = match config.color {
        ThemeChoice::Named(theme) => printer.cyan(theme.key()),
        ThemeChoice::Random => printer.cyan("random"),
    };
    printer.info("Theme", &theme);

    let inputs = Inputs::load(&config).inspect_err(|e| {
        printer.error("Invalid", &e.to_string());
    })?;

    printer.info(
        "Background",
        &format!(
            "{} ({}x{})",
            display_path(&config.background),
            inputs.background.width(),
            inputs.background.height()
        ),
    );
    printer.info(
        "Font",
        &format!("{} at {}pt", display_path(&config.font), inputs.font.size()),
    );
    if let (Some(path), Some(logo)) = (&config.logo, &inputs.logo) {
        printer.info(
            "Logo",
            &format!("{} ({}x{})", display_path(path), logo.width(), logo.height()),
        );
    }

    printer.success(
        "Valid",
        &format!("{} -> {}", display_path(&args.config), printer.bold(&display_path(&config.output))),
    );
    Ok(())
}
