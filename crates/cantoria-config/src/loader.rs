// SPDX-FileCopyrightText: 2026 Cantoria Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports `./cantoria.toml` > `~/.config/cantoria/cantoria.toml` with
//! environment variable overrides via the `CANTORIA_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::CantoriaConfig;

/// Load configuration from the standard file hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `~/.config/cantoria/cantoria.toml` (user XDG config)
/// 3. `./cantoria.toml` (local directory)
/// 4. `CANTORIA_*` environment variables
pub fn load_config() -> Result<CantoriaConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(CantoriaConfig::default()))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("cantoria/cantoria.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("cantoria.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no file lookup, no env vars).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<CantoriaConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(CantoriaConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<CantoriaConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(CantoriaConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `CANTORIA_TELEGRAM_BOT_TOKEN` must map
/// to `telegram.bot_token`, not `telegram.bot.token`.
fn env_provider() -> Env {
    Env::prefixed("CANTORIA_").map(|key| {
        // `key` is the lowercased env var name with the prefix stripped,
        // e.g. CANTORIA_TELEGRAM_BOT_TOKEN -> "telegram_bot_token".
        let mapped = key
            .as_str()
            .replacen("agent_", "agent.", 1)
            .replacen("source_", "source.", 1)
            .replacen("output_", "output.", 1)
            .replacen("sheets_", "sheets.", 1)
            .replacen("telegram_", "telegram.", 1)
            .replacen("whatsapp_", "whatsapp.", 1)
            .replacen("notify_", "notify.", 1);
        mapped.into()
    })
}
