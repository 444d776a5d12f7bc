// SPDX-FileCopyrightText: 2026 Cantoria Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Capability traits at the system's external seams.
//!
//! The spreadsheet backend and the messaging platforms are collaborators,
//! not part of the pipeline; each is modeled as a trait so the pipeline can
//! run against in-memory implementations in tests.

pub mod store;
pub mod transport;

pub use store::{find_or_create, Sheet, SheetLookup, Spreadsheet, TabularStore};
pub use transport::MessageTransport;
