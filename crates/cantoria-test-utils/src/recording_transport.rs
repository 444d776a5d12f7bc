// SPDX-FileCopyrightText: 2026 Cantoria Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! A message transport that captures sends for assertion and can be told
//! to fail, for exercising the dispatcher's error path.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use cantoria_core::traits::MessageTransport;
use cantoria_core::types::ChannelKind;
use cantoria_core::CantoriaError;

/// Recording transport for one channel kind.
#[derive(Clone)]
pub struct RecordingTransport {
    kind: ChannelKind,
    sent: Arc<Mutex<Vec<(String, String)>>>,
    fail_with: Arc<Mutex<Option<String>>>,
}

impl RecordingTransport {
    pub fn new(kind: ChannelKind) -> Self {
        Self {
            kind,
            sent: Arc::new(Mutex::new(Vec::new())),
            fail_with: Arc::new(Mutex::new(None)),
        }
    }

    /// All (identifier, text) pairs delivered so far.
    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().expect("transport lock").clone()
    }

    /// Makes every subsequent send fail with `detail`.
    pub fn fail_with(&self, detail: &str) {
        *self.fail_with.lock().expect("transport lock") = Some(detail.to_string());
    }

    /// Restores normal delivery.
    pub fn succeed(&self) {
        *self.fail_with.lock().expect("transport lock") = None;
    }
}

#[async_trait]
impl MessageTransport for RecordingTransport {
    fn kind(&self) -> ChannelKind {
        self.kind
    }

    async fn send(&self, identifier: &str, text: &str) -> Result<(), CantoriaError> {
        if let Some(detail) = self.fail_with.lock().expect("transport lock").clone() {
            return Err(CantoriaError::transport(detail));
        }
        self.sent
            .lock()
            .expect("transport lock")
            .push((identifier.to_string(), text.to_string()));
        Ok(())
    }
}
