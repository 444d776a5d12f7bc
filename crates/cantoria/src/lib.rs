// SPDX-FileCopyrightText: 2026 Cantoria Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Library surface of the cantoria binary: the batch pipeline, exposed
//! so integration tests can drive it against in-memory collaborators.

pub mod run;
