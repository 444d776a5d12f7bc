// SPDX-FileCopyrightText: 2026 Cantoria Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration system for the Cantoria roster notifier.
//!
//! Provides TOML configuration parsing with strict validation
//! (`deny_unknown_fields`), file hierarchy lookup, environment variable
//! overrides, and miette diagnostic rendering.
//!
//! # Usage
//!
//! ```no_run
//! let config = cantoria_config::load_and_validate().expect("config errors");
//! println!("timezone: {}", config.agent.timezone);
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

use std::path::Path;

pub use diagnostic::{render_errors, ConfigError};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::CantoriaConfig;

/// Load configuration from the file hierarchy and validate it.
///
/// The high-level startup entry point: loads via Figment, then runs
/// post-deserialization validation. Returns either a usable config or the
/// full list of diagnostics (fail fast, nothing partially sent).
pub fn load_and_validate() -> Result<CantoriaConfig, Vec<ConfigError>> {
    finish(loader::load_config())
}

/// Load configuration from a specific file path and validate it.
pub fn load_and_validate_path(path: &Path) -> Result<CantoriaConfig, Vec<ConfigError>> {
    finish(loader::load_config_from_path(path))
}

/// Load configuration from a TOML string and validate it.
pub fn load_and_validate_str(toml_content: &str) -> Result<CantoriaConfig, Vec<ConfigError>> {
    finish(loader::load_config_from_str(toml_content))
}

fn finish(
    loaded: Result<CantoriaConfig, figment::Error>,
) -> Result<CantoriaConfig, Vec<ConfigError>> {
    match loaded {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => Err(vec![err.into()]),
    }
}
