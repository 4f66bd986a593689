pub mod completions;
pub mod render;
pub mod themes;
pub mod validate;

use clap::{Parser, Subcommand};

/// thumbgen - Header and thumbnail image generator
///
/// Running without a subcommand renders `config.json`.
#[derive(Parser, Debug)]
#[command(name = "thumbgen")]
#[command(version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub render: render::RenderArgs,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the image described by a config file
    Render(render::RenderArgs),

    /// Check a config and its inputs without writing an image
    Validate(validate::ValidateArgs),

    /// List the colour themes
    Themes,

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_no_subcommand_defaults_to_config_json() {
        let cli = Cli::try_parse_from(["thumbgen"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.render.config, PathBuf::from("config.json"));
        assert_eq!(cli.render.seed, None);
    }

    #[test]
    fn test_render_subcommand_flags() {
        let cli =
            Cli::try_parse_from(["thumbgen", "render", "--config", "header.yaml", "--seed", "9"])
                .unwrap();
        match cli.command {
            Some(Commands::Render(args)) => {
                assert_eq!(args.config, PathBuf::from("header.yaml"));
                assert_eq!(args.seed, Some(9));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_top_level_flags() {
        let cli = Cli::try_parse_from(["thumbgen", "-c", "other.json"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.render.config, PathBuf::from("other.json"));
    }

    #[test]
    fn test_validate_subcommand() {
        let cli = Cli::try_parse_from(["thumbgen", "validate"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Validate(_))));
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        <Cli as clap::CommandFactory>::command().debug_assert();
    }
}
