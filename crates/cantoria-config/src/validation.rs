// SPDX-FileCopyrightText: 2026 Cantoria Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes: required credentials, timezone names, pacing bounds.
//! A run must fail here, before anything is read or sent, rather than
//! halfway through the recipient loop.

use std::str::FromStr;

use crate::diagnostic::ConfigError;
use crate::model::CantoriaConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast on the first one).
pub fn validate_config(config: &CantoriaConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if !LOG_LEVELS.contains(&config.agent.log_level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "agent.log_level must be one of {LOG_LEVELS:?}, got `{}`",
                config.agent.log_level
            ),
        });
    }

    if chrono_tz::Tz::from_str(&config.agent.timezone).is_err() {
        errors.push(ConfigError::Validation {
            message: format!("agent.timezone `{}` is not a known timezone", config.agent.timezone),
        });
    }

    if config.source.spreadsheet_id.trim().is_empty() {
        errors.push(ConfigError::MissingKey {
            key: "source.spreadsheet_id".to_string(),
        });
    }

    if config.output.spreadsheet_id.trim().is_empty() {
        errors.push(ConfigError::MissingKey {
            key: "output.spreadsheet_id".to_string(),
        });
    }

    if config
        .sheets
        .api_token
        .as_deref()
        .is_none_or(|t| t.trim().is_empty())
    {
        errors.push(ConfigError::MissingKey {
            key: "sheets.api_token".to_string(),
        });
    }

    if config.telegram.enabled
        && config
            .telegram
            .bot_token
            .as_deref()
            .is_none_or(|t| t.trim().is_empty())
    {
        errors.push(ConfigError::MissingKey {
            key: "telegram.bot_token".to_string(),
        });
    }

    if config.whatsapp.enabled
        && config
            .whatsapp
            .endpoint_url
            .as_deref()
            .is_none_or(|u| u.trim().is_empty())
    {
        errors.push(ConfigError::MissingKey {
            key: "whatsapp.endpoint_url".to_string(),
        });
    }

    if config.notify.digest_len == 0 {
        errors.push(ConfigError::Validation {
            message: "notify.digest_len must be at least 1".to_string(),
        });
    }

    if config.notify.pacing_min_secs > config.notify.pacing_max_secs {
        errors.push(ConfigError::Validation {
            message: format!(
                "notify.pacing_min_secs ({}) must not exceed notify.pacing_max_secs ({})",
                config.notify.pacing_min_secs, config.notify.pacing_max_secs
            ),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
