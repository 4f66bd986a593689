use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for thumbgen operations
#[derive(Error, Diagnostic, Debug)]
pub enum ThumbError {
    #[error("Could not read config {path}: {message}")]
    #[diagnostic(code(thumbgen::config::read))]
    ConfigRead { path: PathBuf, message: String },

    #[error("Malformed config: {message}")]
    #[diagnostic(code(thumbgen::config::malformed))]
    MalformedConfig {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Unknown colour theme: {name}")]
    #[diagnostic(
        code(thumbgen::theme),
        help("Use one of blank, light_blue, dark_green, orange, or random")
    )]
    InvalidTheme { name: String },

    #[error("Could not load {kind} {path}: {message}")]
    #[diagnostic(code(thumbgen::resource))]
    MissingResource {
        kind: &'static str,
        path: PathBuf,
        message: String,
    },

    #[error("Could not write {path}: {message}")]
    #[diagnostic(code(thumbgen::write))]
    Write { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, ThumbError>;
