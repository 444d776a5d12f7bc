// SPDX-FileCopyrightText: 2026 Cantoria Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Cantoria integration tests.
//!
//! Provides in-memory stand-ins for the external collaborators so
//! pipeline tests run fast, deterministically, and without credentials:
//!
//! - [`MemoryStore`] - in-memory tabular store with A1-range semantics
//! - [`RecordingTransport`] - message transport with send capture and
//!   failure injection

pub mod memory_store;
pub mod recording_transport;

pub use memory_store::MemoryStore;
pub use recording_transport::RecordingTransport;
