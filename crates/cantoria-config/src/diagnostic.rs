// SPDX-FileCopyrightText: 2026 Cantoria Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Diagnostic error types for configuration failures.
//!
//! Figment deserialization errors and post-deserialization validation
//! failures are both rendered as miette diagnostics so that a startup
//! failure reads like a compiler error, not a panic.

use miette::Diagnostic;
use thiserror::Error;

/// A configuration error suitable for terminal rendering.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    /// TOML parsing or deserialization failed.
    #[error("failed to load configuration: {message}")]
    #[diagnostic(
        code(cantoria::config::parse),
        help("check cantoria.toml and CANTORIA_* environment variables")
    )]
    Parse {
        /// Figment's description of the failure.
        message: String,
    },

    /// A required configuration key is missing.
    #[error("missing required key `{key}`")]
    #[diagnostic(
        code(cantoria::config::missing_key),
        help("add `{key} = <value>` to your cantoria.toml")
    )]
    MissingKey { key: String },

    /// A configuration value failed semantic validation.
    #[error("validation error: {message}")]
    #[diagnostic(code(cantoria::config::validation))]
    Validation { message: String },
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        ConfigError::Parse {
            message: err.to_string(),
        }
    }
}

/// Render a list of configuration errors to stderr via miette.
pub fn render_errors(errors: &[ConfigError]) {
    for error in errors {
        let report = miette::Report::msg(format!("{error}"));
        eprintln!("{report:?}");
        if let Some(help) = error.help() {
            eprintln!("  help: {help}");
        }
    }
    eprintln!(
        "cantoria: {} configuration error(s), aborting before any processing",
        errors.len()
    );
}
