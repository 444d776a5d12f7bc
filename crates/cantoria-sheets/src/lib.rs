// SPDX-FileCopyrightText: 2026 Cantoria Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Google Sheets implementation of the Cantoria tabular-store traits.
//!
//! Maps the [`TabularStore`]/[`Spreadsheet`]/[`Sheet`] capability traits
//! onto the Sheets v4 REST API: whole-sheet values reads, RAW-mode
//! writes and appends, range clears, and lazy worksheet creation via
//! `addSheet`. A missing worksheet is a normal [`SheetLookup::NotFound`],
//! never an error.

pub mod client;
pub mod types;

use std::collections::BTreeMap;

use async_trait::async_trait;
use cantoria_core::traits::{Sheet, SheetLookup, Spreadsheet, TabularStore};
use cantoria_core::types::RangeUpdate;
use cantoria_core::CantoriaError;
use reqwest::Method;
use serde_json::json;
use tracing::info;

use client::SheetsClient;
use types::{cell_to_string, BatchRange, BatchValueWrite, SpreadsheetMeta, ValueRange, ValueWrite};

/// Google Sheets backend entry point.
#[derive(Debug, Clone)]
pub struct GoogleSheets {
    client: SheetsClient,
}

impl GoogleSheets {
    /// Creates a backend handle with a bearer token and API base URL.
    pub fn new(api_token: &str, base_url: impl Into<String>) -> Result<Self, CantoriaError> {
        Ok(Self {
            client: SheetsClient::new(api_token, base_url)?,
        })
    }
}

#[async_trait]
impl TabularStore for GoogleSheets {
    async fn open(&self, spreadsheet_id: &str) -> Result<Box<dyn Spreadsheet>, CantoriaError> {
        // The API has no "open" call; the handle is just the id paired
        // with the authenticated client.
        Ok(Box::new(GoogleSpreadsheet {
            client: self.client.clone(),
            spreadsheet_id: spreadsheet_id.to_string(),
        }))
    }
}

/// One spreadsheet on the Sheets backend.
#[derive(Debug, Clone)]
pub struct GoogleSpreadsheet {
    client: SheetsClient,
    spreadsheet_id: String,
}

impl GoogleSpreadsheet {
    fn sheet(&self, title: &str) -> GoogleWorksheet {
        GoogleWorksheet {
            client: self.client.clone(),
            spreadsheet_id: self.spreadsheet_id.clone(),
            title: title.to_string(),
        }
    }
}

#[async_trait]
impl Spreadsheet for GoogleSpreadsheet {
    async fn worksheet(&self, name: &str) -> Result<SheetLookup, CantoriaError> {
        let url = self.client.url(
            &[&self.spreadsheet_id],
            &[("fields", "sheets.properties.title")],
        )?;
        let meta: SpreadsheetMeta = self
            .client
            .request_json::<_, ()>(Method::GET, url, None)
            .await?;

        let found = meta
            .sheets
            .iter()
            .any(|sheet| sheet.properties.title == name);
        if found {
            Ok(SheetLookup::Found(Box::new(self.sheet(name))))
        } else {
            Ok(SheetLookup::NotFound)
        }
    }

    async fn add_worksheet(
        &self,
        name: &str,
        rows: u32,
        cols: u32,
    ) -> Result<Box<dyn Sheet>, CantoriaError> {
        let url = self
            .client
            .url(&[&format!("{}:batchUpdate", self.spreadsheet_id)], &[])?;
        let body = json!({
            "requests": [{
                "addSheet": {
                    "properties": {
                        "title": name,
                        "gridProperties": { "rowCount": rows, "columnCount": cols }
                    }
                }
            }]
        });
        self.client
            .request_unit(Method::POST, url, Some(&body))
            .await?;
        info!(worksheet = name, rows, cols, "created worksheet");
        Ok(Box::new(self.sheet(name)))
    }
}

/// One worksheet, addressed by its title.
#[derive(Debug, Clone)]
pub struct GoogleWorksheet {
    client: SheetsClient,
    spreadsheet_id: String,
    title: String,
}

impl GoogleWorksheet {
    /// A1-notation range scoped to this worksheet. A bare quoted title
    /// addresses the whole sheet.
    fn scoped(&self, range: Option<&str>) -> String {
        match range {
            Some(range) => format!("'{}'!{range}", self.title),
            None => format!("'{}'", self.title),
        }
    }
}

#[async_trait]
impl Sheet for GoogleWorksheet {
    async fn get_all_values(&self) -> Result<Vec<Vec<String>>, CantoriaError> {
        let url = self.client.url(
            &[&self.spreadsheet_id, "values", &self.scoped(None)],
            &[("majorDimension", "ROWS")],
        )?;
        let range: ValueRange = self
            .client
            .request_json::<_, ()>(Method::GET, url, None)
            .await?;
        Ok(range
            .values
            .iter()
            .map(|row| row.iter().map(cell_to_string).collect())
            .collect())
    }

    async fn get_all_records(&self) -> Result<Vec<BTreeMap<String, String>>, CantoriaError> {
        let rows = self.get_all_values().await?;
        let Some((header, data)) = rows.split_first() else {
            return Ok(Vec::new());
        };
        Ok(data
            .iter()
            .map(|row| {
                header
                    .iter()
                    .enumerate()
                    .map(|(i, key)| {
                        (key.clone(), row.get(i).cloned().unwrap_or_default())
                    })
                    .collect()
            })
            .collect())
    }

    async fn clear(&self) -> Result<(), CantoriaError> {
        let url = self.client.url(
            &[
                &self.spreadsheet_id,
                "values",
                &format!("{}:clear", self.scoped(None)),
            ],
            &[],
        )?;
        self.client
            .request_unit::<serde_json::Value>(Method::POST, url, Some(&json!({})))
            .await
    }

    async fn update(&self, range: &str, values: Vec<Vec<String>>) -> Result<(), CantoriaError> {
        let url = self.client.url(
            &[&self.spreadsheet_id, "values", &self.scoped(Some(range))],
            &[("valueInputOption", "RAW")],
        )?;
        self.client
            .request_unit(Method::PUT, url, Some(&ValueWrite { values }))
            .await
    }

    async fn batch_update(&self, updates: Vec<RangeUpdate>) -> Result<(), CantoriaError> {
        let url = self
            .client
            .url(&[&self.spreadsheet_id, "values:batchUpdate"], &[])?;
        let body = BatchValueWrite {
            value_input_option: "RAW",
            data: updates
                .into_iter()
                .map(|u| BatchRange {
                    range: self.scoped(Some(&u.range)),
                    values: u.values,
                })
                .collect(),
        };
        self.client
            .request_unit(Method::POST, url, Some(&body))
            .await
    }

    async fn append_row(&self, values: Vec<String>) -> Result<(), CantoriaError> {
        let url = self.client.url(
            &[
                &self.spreadsheet_id,
                "values",
                &format!("{}:append", self.scoped(None)),
            ],
            &[("valueInputOption", "RAW")],
        )?;
        self.client
            .request_unit(
                Method::POST,
                url,
                Some(&ValueWrite {
                    values: vec![values],
                }),
            )
            .await
    }
}
