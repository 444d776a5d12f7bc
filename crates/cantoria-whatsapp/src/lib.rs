// SPDX-FileCopyrightText: 2026 Cantoria Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! WhatsApp gateway transport for the Cantoria roster notifier.
//!
//! Implements [`MessageTransport`] against an HTTP REST gateway that takes
//! `{number, message}` JSON with bearer-token auth. Numbers are strictly
//! validated before any request leaves the process; validation failures are
//! local errors the dispatcher records, not transport failures.

use std::time::Duration;

use async_trait::async_trait;
use cantoria_core::identity;
use cantoria_core::traits::MessageTransport;
use cantoria_core::types::ChannelKind;
use cantoria_core::CantoriaError;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::StatusCode;
use serde::Serialize;
use tracing::debug;

/// Request timeout for one gateway send.
const SEND_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    number: &'a str,
    message: &'a str,
}

/// WhatsApp REST gateway transport.
pub struct WhatsAppTransport {
    client: reqwest::Client,
    endpoint_url: String,
}

impl WhatsAppTransport {
    /// Creates a transport for `endpoint_url`, attaching a bearer token
    /// when the gateway requires one.
    pub fn new(endpoint_url: &str, api_token: Option<&str>) -> Result<Self, CantoriaError> {
        if endpoint_url.trim().is_empty() {
            return Err(CantoriaError::Config(
                "whatsapp.endpoint_url cannot be empty".into(),
            ));
        }

        let mut headers = HeaderMap::new();
        if let Some(token) = api_token {
            let bearer = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|e| CantoriaError::Config(format!("invalid whatsapp API token: {e}")))?;
            headers.insert(reqwest::header::AUTHORIZATION, bearer);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(SEND_TIMEOUT)
            .build()
            .map_err(|e| CantoriaError::Transport {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            endpoint_url: endpoint_url.trim().to_string(),
        })
    }
}

#[async_trait]
impl MessageTransport for WhatsAppTransport {
    fn kind(&self) -> ChannelKind {
        ChannelKind::Whatsapp
    }

    async fn send(&self, identifier: &str, text: &str) -> Result<(), CantoriaError> {
        let number = identity::validate_msisdn(identifier)?;

        let response = self
            .client
            .post(&self.endpoint_url)
            .json(&SendRequest {
                number: &number,
                message: text,
            })
            .send()
            .await
            .map_err(|e| CantoriaError::Transport {
                message: format!("whatsapp gateway unreachable: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CantoriaError::transport(format!(
                "whatsapp gateway {} ({status}): {body}",
                status_label(status)
            )));
        }

        debug!(number, "whatsapp message delivered");
        Ok(())
    }
}

/// Human label for the gateway status codes the notifier distinguishes.
pub fn status_label(status: StatusCode) -> &'static str {
    match status.as_u16() {
        400 => "bad request",
        401 => "unauthorized",
        403 => "forbidden",
        404 => "not found",
        409 => "conflict",
        429 => "rate limited",
        500 => "server error",
        _ => "unexpected status",
    }
}
