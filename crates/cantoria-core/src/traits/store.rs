// SPDX-FileCopyrightText: 2026 Cantoria Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tabular store capability: a spreadsheet-shaped key-value table with
//! read, write, and append operations.

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::error::CantoriaError;
use crate::types::RangeUpdate;

/// Entry point to a spreadsheet backend.
#[async_trait]
pub trait TabularStore: Send + Sync {
    /// Opens a spreadsheet by its backend identifier.
    async fn open(&self, spreadsheet_id: &str) -> Result<Box<dyn Spreadsheet>, CantoriaError>;
}

/// A spreadsheet: a named collection of worksheets.
#[async_trait]
pub trait Spreadsheet: Send + Sync {
    /// Looks up a worksheet by title.
    ///
    /// A missing worksheet is an expected condition, reported as
    /// [`SheetLookup::NotFound`] rather than an error.
    async fn worksheet(&self, name: &str) -> Result<SheetLookup, CantoriaError>;

    /// Creates a new worksheet with the given grid dimensions.
    async fn add_worksheet(
        &self,
        name: &str,
        rows: u32,
        cols: u32,
    ) -> Result<Box<dyn Sheet>, CantoriaError>;
}

/// Result of a worksheet lookup.
pub enum SheetLookup {
    Found(Box<dyn Sheet>),
    NotFound,
}

impl std::fmt::Debug for SheetLookup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SheetLookup::Found(_) => f.write_str("Found(..)"),
            SheetLookup::NotFound => f.write_str("NotFound"),
        }
    }
}

impl SheetLookup {
    /// Converts the lookup into an `Option`, discarding the tag.
    pub fn found(self) -> Option<Box<dyn Sheet>> {
        match self {
            SheetLookup::Found(sheet) => Some(sheet),
            SheetLookup::NotFound => None,
        }
    }
}

/// A single worksheet.
#[async_trait]
pub trait Sheet: Send + Sync {
    /// Returns every populated row as raw cell strings.
    async fn get_all_values(&self) -> Result<Vec<Vec<String>>, CantoriaError>;

    /// Returns rows keyed by the first (header) row.
    async fn get_all_records(&self) -> Result<Vec<BTreeMap<String, String>>, CantoriaError>;

    /// Clears every cell in the worksheet.
    async fn clear(&self) -> Result<(), CantoriaError>;

    /// Writes `values` to an A1-notation range.
    async fn update(&self, range: &str, values: Vec<Vec<String>>) -> Result<(), CantoriaError>;

    /// Applies several range writes in one call.
    async fn batch_update(&self, updates: Vec<RangeUpdate>) -> Result<(), CantoriaError>;

    /// Appends one row after the last populated row.
    async fn append_row(&self, values: Vec<String>) -> Result<(), CantoriaError>;
}

/// Find a worksheet or lazily create it with the given dimensions.
pub async fn find_or_create(
    spreadsheet: &dyn Spreadsheet,
    name: &str,
    rows: u32,
    cols: u32,
) -> Result<Box<dyn Sheet>, CantoriaError> {
    match spreadsheet.worksheet(name).await? {
        SheetLookup::Found(sheet) => Ok(sheet),
        SheetLookup::NotFound => spreadsheet.add_worksheet(name, rows, cols).await,
    }
}
