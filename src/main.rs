use clap::Parser;
use miette::Result;
use thumbgen::cli::{Cli, Commands};
use thumbgen::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        None => thumbgen::cli::render::run(cli.render, &printer)?,
        Some(Commands::Render(args)) => thumbgen::cli::render::run(args, &printer)?,
        Some(Commands::Validate(args)) => thumbgen::cli::validate::run(args, &printer)?,
        Some(Commands::Themes) => thumbgen::cli::themes::run()?,
        Some(Commands::Completions(args)) => thumbgen::cli::completions::run(args)?,
    }

    Ok(())
}
