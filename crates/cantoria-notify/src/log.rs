// SPDX-FileCopyrightText: 2026 Cantoria Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The notification deduplication log.
//!
//! One worksheet, one live row per (channel, canonicalized identifier)
//! pair. Reads scan bottom-up so the latest row wins even if history ever
//! leaks in; writes overwrite the matching row in place or append a new
//! one. A missing worksheet is created lazily with a fixed header row.

use cantoria_core::identity;
use cantoria_core::traits::{Sheet, SheetLookup, Spreadsheet};
use cantoria_core::types::{ChannelKind, DeliveryStatus, LogRecord};
use cantoria_core::CantoriaError;
use tracing::info;

/// Fixed header row of the log worksheet.
pub const LOG_HEADER: [&str; 7] = [
    "Timestamp",
    "Name",
    "Chat Id / Whatsapp No",
    "Message Preview",
    "Schedule Hash",
    "Status",
    "Platform",
];

const IDENTIFIER_COLUMN: &str = "Chat Id / Whatsapp No";
const HASH_COLUMN: &str = "Schedule Hash";
const STATUS_COLUMN: &str = "Status";
const PLATFORM_COLUMN: &str = "Platform";

/// Maximum characters kept of the message preview.
const PREVIEW_LEN: usize = 100;

/// What the dispatcher should do for one (recipient, channel) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchAction {
    Send,
    Skip,
}

/// Deduplication decision: send unless the previous record carries the
/// same fingerprint.
pub fn decide(previous: Option<&LogRecord>, fingerprint: &str) -> DispatchAction {
    match previous {
        Some(record) if record.fingerprint == fingerprint => DispatchAction::Skip,
        _ => DispatchAction::Send,
    }
}

/// Truncates a message body to its log preview, respecting char boundaries.
pub fn preview(text: &str) -> String {
    text.chars().take(PREVIEW_LEN).collect()
}

/// Handle to the log worksheet within the output spreadsheet.
pub struct NotificationLog<'a> {
    spreadsheet: &'a dyn Spreadsheet,
    worksheet: String,
}

impl<'a> NotificationLog<'a> {
    pub fn new(spreadsheet: &'a dyn Spreadsheet, worksheet: impl Into<String>) -> Self {
        Self {
            spreadsheet,
            worksheet: worksheet.into(),
        }
    }

    /// Opens the log worksheet, creating it with the header row on first use.
    async fn sheet(&self) -> Result<Box<dyn Sheet>, CantoriaError> {
        match self.spreadsheet.worksheet(&self.worksheet).await? {
            SheetLookup::Found(sheet) => Ok(sheet),
            SheetLookup::NotFound => {
                info!(worksheet = %self.worksheet, "log worksheet missing, creating");
                let sheet = self
                    .spreadsheet
                    .add_worksheet(&self.worksheet, 10, LOG_HEADER.len() as u32)
                    .await?;
                sheet
                    .append_row(LOG_HEADER.iter().map(|h| h.to_string()).collect())
                    .await?;
                Ok(sheet)
            }
        }
    }

    /// Returns the latest record for (channel, identifier), or `None`.
    pub async fn read_last(
        &self,
        channel: ChannelKind,
        identifier: &str,
    ) -> Result<Option<LogRecord>, CantoriaError> {
        let sheet = self.sheet().await?;
        let records = sheet.get_all_records().await?;

        for row in records.iter().rev() {
            if row_matches(row, channel, identifier) {
                return Ok(Some(LogRecord {
                    timestamp: field(row, "Timestamp"),
                    recipient_name: field(row, "Name"),
                    identifier: field(row, IDENTIFIER_COLUMN),
                    message_preview: field(row, "Message Preview"),
                    fingerprint: field(row, HASH_COLUMN),
                    status: parse_status(&field(row, STATUS_COLUMN)),
                    channel,
                }));
            }
        }
        Ok(None)
    }

    /// Writes `record`, overwriting the matching row in place or appending.
    ///
    /// Keeps the single-row-per-(channel, identifier) invariant.
    pub async fn upsert(&self, record: &LogRecord) -> Result<(), CantoriaError> {
        let sheet = self.sheet().await?;
        let row_values = render_row(record);

        let records = sheet.get_all_records().await?;
        for (i, row) in records.iter().enumerate() {
            if row_matches(row, record.channel, &record.identifier) {
                // Records start at sheet row 2, below the header.
                let idx = i + 2;
                return sheet
                    .update(&format!("A{idx}:G{idx}"), vec![row_values])
                    .await;
            }
        }
        sheet.append_row(row_values).await
    }
}

fn row_matches(
    row: &std::collections::BTreeMap<String, String>,
    channel: ChannelKind,
    identifier: &str,
) -> bool {
    let row_platform = field(row, PLATFORM_COLUMN);
    let row_identifier = field(row, IDENTIFIER_COLUMN);
    row_platform.trim().eq_ignore_ascii_case(&channel.to_string())
        && identity::identifiers_match(channel, &row_identifier, identifier)
}

fn field(row: &std::collections::BTreeMap<String, String>, key: &str) -> String {
    row.get(key).cloned().unwrap_or_default()
}

fn parse_status(label: &str) -> DeliveryStatus {
    match label.trim() {
        "sent" => DeliveryStatus::Sent,
        "skipped" => DeliveryStatus::Skipped,
        other => DeliveryStatus::Error(
            other.strip_prefix("error: ").unwrap_or(other).to_string(),
        ),
    }
}

fn render_row(record: &LogRecord) -> Vec<String> {
    vec![
        record.timestamp.clone(),
        record.recipient_name.clone(),
        identity::normalize_identifier(record.channel, &record.identifier),
        record.message_preview.clone(),
        record.fingerprint.clone(),
        record.status.label(),
        record.channel.to_string(),
    ]
}
