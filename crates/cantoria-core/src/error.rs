// SPDX-FileCopyrightText: 2026 Cantoria Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Cantoria roster notifier.

use thiserror::Error;

/// The primary error type used across all Cantoria capability traits and
/// pipeline operations.
///
/// Expected absences (a worksheet that does not exist yet, an unparseable
/// date cell) are *not* errors; they surface as normal return values.
#[derive(Debug, Error)]
pub enum CantoriaError {
    /// Configuration errors (invalid TOML, missing required fields).
    #[error("configuration error: {0}")]
    Config(String),

    /// Tabular store errors (HTTP failure, malformed response, bad range).
    #[error("store error: {message}")]
    Store {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Message transport errors (network failure, API rejection).
    #[error("transport error: {message}")]
    Transport {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A recipient identifier failed send-time validation.
    #[error("validation error: {0}")]
    Validation(String),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl CantoriaError {
    /// Shorthand for a store error with no underlying source.
    pub fn store(message: impl Into<String>) -> Self {
        CantoriaError::Store {
            message: message.into(),
            source: None,
        }
    }

    /// Shorthand for a transport error with no underlying source.
    pub fn transport(message: impl Into<String>) -> Self {
        CantoriaError::Transport {
            message: message.into(),
            source: None,
        }
    }
}
