// SPDX-FileCopyrightText: 2026 Cantoria Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wire types for the Sheets v4 REST API.
//!
//! Only the fields this crate reads are modeled; everything else in the
//! API responses is ignored.

use serde::{Deserialize, Serialize};

/// Spreadsheet metadata response (`GET /{spreadsheetId}?fields=...`).
#[derive(Debug, Deserialize)]
pub struct SpreadsheetMeta {
    #[serde(default)]
    pub sheets: Vec<SheetMeta>,
}

#[derive(Debug, Deserialize)]
pub struct SheetMeta {
    pub properties: SheetProperties,
}

#[derive(Debug, Deserialize)]
pub struct SheetProperties {
    pub title: String,
}

/// A values read response. Cell values may arrive as JSON strings,
/// numbers, or booleans depending on cell formatting.
#[derive(Debug, Deserialize)]
pub struct ValueRange {
    #[serde(default)]
    pub values: Vec<Vec<serde_json::Value>>,
}

/// Body for a values write (`PUT .../values/{range}` or `:append`).
#[derive(Debug, Serialize)]
pub struct ValueWrite {
    pub values: Vec<Vec<String>>,
}

/// Body for a multi-range values write (`POST .../values:batchUpdate`).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchValueWrite {
    pub value_input_option: &'static str,
    pub data: Vec<BatchRange>,
}

#[derive(Debug, Serialize)]
pub struct BatchRange {
    pub range: String,
    pub values: Vec<Vec<String>>,
}

/// Renders one cell of a values response as the raw string the pipeline
/// works with.
pub fn cell_to_string(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}
