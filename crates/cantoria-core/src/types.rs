// SPDX-FileCopyrightText: 2026 Cantoria Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common domain types shared across the Cantoria workspace.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The messaging platforms a reminder can be delivered over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ChannelKind {
    Telegram,
    Whatsapp,
}

/// One duty assignment extracted from the source roster sheet.
///
/// `date` is `None` when the source cell could not be parsed; such entries
/// are kept for raw inspection but excluded from date-ordered views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub date: Option<NaiveDate>,
    /// The original date cell text, verbatim.
    pub date_label: String,
    /// Service time, free text, not parsed.
    pub time_label: String,
    pub notes_primary: String,
    pub notes_secondary: String,
    /// Choir/ensemble label for the service.
    pub group_label: String,
    /// Duty-holder name; matched case-insensitively against the directory.
    pub assignee: String,
}

/// A duty-holder loaded from the recipient directory worksheet.
///
/// Loaded fresh each run; never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipient {
    pub name: String,
    pub telegram_chat_id: Option<String>,
    pub whatsapp_number: Option<String>,
}

impl Recipient {
    /// Returns the raw identifier for `kind`, if the recipient has one.
    pub fn identifier(&self, kind: ChannelKind) -> Option<&str> {
        match kind {
            ChannelKind::Telegram => self.telegram_chat_id.as_deref(),
            ChannelKind::Whatsapp => self.whatsapp_number.as_deref(),
        }
    }
}

/// Outcome of one delivery attempt, as persisted in the notification log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryStatus {
    Sent,
    Skipped,
    Error(String),
}

impl DeliveryStatus {
    /// Renders the status the way the log sheet stores it.
    pub fn label(&self) -> String {
        match self {
            DeliveryStatus::Sent => "sent".to_string(),
            DeliveryStatus::Skipped => "skipped".to_string(),
            DeliveryStatus::Error(detail) => format!("error: {detail}"),
        }
    }
}

/// One persisted deduplication record; at most one live row exists per
/// (channel, canonicalized identifier) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// Wall-clock time of the attempt, rendered in the reference timezone
    /// (`%Y-%m-%d %H:%M:%S`), stored as the sheet stores it.
    pub timestamp: String,
    pub recipient_name: String,
    pub identifier: String,
    pub message_preview: String,
    pub fingerprint: String,
    pub status: DeliveryStatus,
    pub channel: ChannelKind,
}

/// A single range write within a values batch update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeUpdate {
    /// A1-notation range, e.g. `"A1:G12"` or `"K1"`.
    pub range: String,
    pub values: Vec<Vec<String>>,
}

impl RangeUpdate {
    pub fn new(range: impl Into<String>, values: Vec<Vec<String>>) -> Self {
        Self {
            range: range.into(),
            values,
        }
    }

    /// Convenience for a single-cell write.
    pub fn cell(range: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            range: range.into(),
            values: vec![vec![value.into()]],
        }
    }
}
