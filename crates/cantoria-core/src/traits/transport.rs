// SPDX-FileCopyrightText: 2026 Cantoria Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Message transport capability: deliver one text message to one recipient
//! identifier on one platform.

use async_trait::async_trait;

use crate::error::CantoriaError;
use crate::types::ChannelKind;

/// Outbound-only messaging channel.
///
/// Implementations validate the identifier as needed for their platform;
/// a validation failure is a [`CantoriaError::Validation`] and the caller
/// records it without aborting the run.
///
/// [`CantoriaError::Validation`]: crate::error::CantoriaError::Validation
#[async_trait]
pub trait MessageTransport: Send + Sync {
    /// The platform this transport delivers to.
    fn kind(&self) -> ChannelKind;

    /// Sends `text` to `identifier`.
    async fn send(&self, identifier: &str, text: &str) -> Result<(), CantoriaError>;
}
