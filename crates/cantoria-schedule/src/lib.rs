// SPDX-FileCopyrightText: 2026 Cantoria Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Schedule derivation for the Cantoria roster notifier.
//!
//! Turns the loosely structured, human-maintained roster worksheet into
//! normalized [`ScheduleEntry`](cantoria_core::types::ScheduleEntry)
//! records, enriches them with liturgical-year tags and localized day
//! names, and produces the per-recipient publish tables, reminder
//! digests, and fingerprints the dispatcher works from.

pub mod dates;
pub mod directory;
pub mod extract;
pub mod liturgy;
pub mod view;

pub use extract::{extract, finalize, ExtractOptions};
pub use view::{digest_lines, fingerprint, recipient_view, reminder_text, roster_rows};
