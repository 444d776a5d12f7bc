// SPDX-FileCopyrightText: 2026 Cantoria Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Notification side of the Cantoria roster notifier: the persisted
//! deduplication log, roster publishing, and the sequential reminder
//! dispatcher.
//!
//! The core guarantee lives here: at most one effective notification per
//! schedule fingerprint per (recipient, channel), across repeated and
//! overlapping runs, because the log is read before every send and
//! written after every attempt.

pub mod dispatch;
pub mod log;
pub mod publish;

pub use dispatch::{Dispatcher, DispatcherOptions, RunSummary};
pub use log::{decide, DispatchAction, NotificationLog, LOG_HEADER};
pub use publish::{publish_roster, PublishStamp};
