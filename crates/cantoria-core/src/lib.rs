// SPDX-FileCopyrightText: 2026 Cantoria Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Cantoria roster notifier.
//!
//! Provides the shared error type, domain types, identifier normalization,
//! and the capability traits behind which the spreadsheet backend and the
//! messaging platforms live.

pub mod error;
pub mod identity;
pub mod traits;
pub mod types;

pub use error::CantoriaError;
pub use traits::{MessageTransport, Sheet, SheetLookup, Spreadsheet, TabularStore};
pub use types::{ChannelKind, DeliveryStatus, LogRecord, RangeUpdate, Recipient, ScheduleEntry};
