// SPDX-FileCopyrightText: 2026 Cantoria Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Telegram message transport for the Cantoria roster notifier.
//!
//! Implements [`MessageTransport`] over the Telegram Bot API via teloxide.
//! Outbound only: the notifier never polls for inbound messages.

use async_trait::async_trait;
use cantoria_core::traits::MessageTransport;
use cantoria_core::types::ChannelKind;
use cantoria_core::CantoriaError;
use teloxide::prelude::*;
use tracing::debug;

/// Telegram transport wrapping a teloxide [`Bot`].
pub struct TelegramTransport {
    bot: Bot,
}

impl TelegramTransport {
    /// Creates a transport from a bot token.
    pub fn new(bot_token: &str) -> Result<Self, CantoriaError> {
        if bot_token.trim().is_empty() {
            return Err(CantoriaError::Config(
                "telegram.bot_token cannot be empty".into(),
            ));
        }
        Ok(Self {
            bot: Bot::new(bot_token),
        })
    }
}

#[async_trait]
impl MessageTransport for TelegramTransport {
    fn kind(&self) -> ChannelKind {
        ChannelKind::Telegram
    }

    async fn send(&self, identifier: &str, text: &str) -> Result<(), CantoriaError> {
        // Chat ids are numeric strings in the directory sheet.
        let chat_id: i64 = identifier.trim().parse().map_err(|_| {
            CantoriaError::Validation(format!("telegram chat id is not numeric: {identifier:?}"))
        })?;

        self.bot
            .send_message(ChatId(chat_id), text)
            .await
            .map_err(|e| CantoriaError::Transport {
                message: format!("telegram send to {chat_id} failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        debug!(chat_id, "telegram message delivered");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_token_is_a_config_error() {
        assert!(matches!(
            TelegramTransport::new("  "),
            Err(CantoriaError::Config(_))
        ));
    }

    #[tokio::test]
    async fn non_numeric_chat_id_fails_validation_before_any_request() {
        let transport = TelegramTransport::new("123:ABC").unwrap();
        let err = transport.send("not-a-chat-id", "hi").await.unwrap_err();
        assert!(matches!(err, CantoriaError::Validation(_)));
    }
}
