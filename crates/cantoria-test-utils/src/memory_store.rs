// SPDX-FileCopyrightText: 2026 Cantoria Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory implementation of the tabular-store traits.
//!
//! Behaves like the real backend for everything the pipeline relies on:
//! worksheet lookup vs. lazy creation, whole-sheet reads, A1-range
//! writes, batch writes, and appends. Grids grow on demand.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use cantoria_core::traits::{Sheet, SheetLookup, Spreadsheet, TabularStore};
use cantoria_core::types::RangeUpdate;
use cantoria_core::CantoriaError;

type Grid = Vec<Vec<String>>;
type SheetMap = HashMap<String, Arc<Mutex<Grid>>>;

/// In-memory store holding any number of spreadsheets.
#[derive(Default, Clone)]
pub struct MemoryStore {
    spreadsheets: Arc<Mutex<HashMap<String, Arc<Mutex<SheetMap>>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates a worksheet with rows, creating it if needed.
    pub fn seed(&self, spreadsheet_id: &str, worksheet: &str, rows: Grid) {
        let sheets = self.sheets_of(spreadsheet_id);
        let mut sheets = sheets.lock().expect("store lock");
        sheets.insert(worksheet.to_string(), Arc::new(Mutex::new(rows)));
    }

    /// Returns a copy of a worksheet's grid, if the worksheet exists.
    pub fn snapshot(&self, spreadsheet_id: &str, worksheet: &str) -> Option<Grid> {
        let sheets = self.sheets_of(spreadsheet_id);
        let sheets = sheets.lock().expect("store lock");
        sheets
            .get(worksheet)
            .map(|grid| grid.lock().expect("grid lock").clone())
    }

    fn sheets_of(&self, spreadsheet_id: &str) -> Arc<Mutex<SheetMap>> {
        let mut spreadsheets = self.spreadsheets.lock().expect("store lock");
        spreadsheets
            .entry(spreadsheet_id.to_string())
            .or_default()
            .clone()
    }
}

#[async_trait]
impl TabularStore for MemoryStore {
    async fn open(&self, spreadsheet_id: &str) -> Result<Box<dyn Spreadsheet>, CantoriaError> {
        Ok(Box::new(MemorySpreadsheet {
            sheets: self.sheets_of(spreadsheet_id),
        }))
    }
}

/// One in-memory spreadsheet.
pub struct MemorySpreadsheet {
    sheets: Arc<Mutex<SheetMap>>,
}

#[async_trait]
impl Spreadsheet for MemorySpreadsheet {
    async fn worksheet(&self, name: &str) -> Result<SheetLookup, CantoriaError> {
        let sheets = self.sheets.lock().expect("store lock");
        match sheets.get(name) {
            Some(grid) => Ok(SheetLookup::Found(Box::new(MemorySheet {
                grid: grid.clone(),
            }))),
            None => Ok(SheetLookup::NotFound),
        }
    }

    async fn add_worksheet(
        &self,
        name: &str,
        _rows: u32,
        _cols: u32,
    ) -> Result<Box<dyn Sheet>, CantoriaError> {
        let grid = Arc::new(Mutex::new(Grid::new()));
        let mut sheets = self.sheets.lock().expect("store lock");
        sheets.insert(name.to_string(), grid.clone());
        Ok(Box::new(MemorySheet { grid }))
    }
}

/// One in-memory worksheet.
pub struct MemorySheet {
    grid: Arc<Mutex<Grid>>,
}

#[async_trait]
impl Sheet for MemorySheet {
    async fn get_all_values(&self) -> Result<Grid, CantoriaError> {
        Ok(self.grid.lock().expect("grid lock").clone())
    }

    async fn get_all_records(&self) -> Result<Vec<BTreeMap<String, String>>, CantoriaError> {
        let grid = self.grid.lock().expect("grid lock");
        let Some((header, data)) = grid.split_first() else {
            return Ok(Vec::new());
        };
        Ok(data
            .iter()
            .map(|row| {
                header
                    .iter()
                    .enumerate()
                    .map(|(i, key)| (key.clone(), row.get(i).cloned().unwrap_or_default()))
                    .collect()
            })
            .collect())
    }

    async fn clear(&self) -> Result<(), CantoriaError> {
        self.grid.lock().expect("grid lock").clear();
        Ok(())
    }

    async fn update(&self, range: &str, values: Grid) -> Result<(), CantoriaError> {
        let (row, col) = parse_a1_start(range)?;
        let mut grid = self.grid.lock().expect("grid lock");
        write_at(&mut grid, row, col, &values);
        Ok(())
    }

    async fn batch_update(&self, updates: Vec<RangeUpdate>) -> Result<(), CantoriaError> {
        let mut grid = self.grid.lock().expect("grid lock");
        for update in updates {
            let (row, col) = parse_a1_start(&update.range)?;
            write_at(&mut grid, row, col, &update.values);
        }
        Ok(())
    }

    async fn append_row(&self, values: Vec<String>) -> Result<(), CantoriaError> {
        self.grid.lock().expect("grid lock").push(values);
        Ok(())
    }
}

/// Parses the start cell of an A1 range ("A2:G2" or "K1") into
/// zero-based (row, col).
fn parse_a1_start(range: &str) -> Result<(usize, usize), CantoriaError> {
    let start = range.split(':').next().unwrap_or(range);
    let letters: String = start.chars().take_while(|c| c.is_ascii_alphabetic()).collect();
    let digits: String = start.chars().skip_while(|c| c.is_ascii_alphabetic()).collect();
    if letters.is_empty() || digits.chars().any(|c| !c.is_ascii_digit()) || digits.is_empty() {
        return Err(CantoriaError::store(format!("bad A1 range: {range:?}")));
    }
    let col = letters
        .chars()
        .fold(0usize, |acc, c| acc * 26 + (c.to_ascii_uppercase() as usize - 'A' as usize + 1))
        - 1;
    let row: usize = digits
        .parse::<usize>()
        .map_err(|_| CantoriaError::store(format!("bad A1 range: {range:?}")))?
        - 1;
    Ok((row, col))
}

fn write_at(grid: &mut Grid, row: usize, col: usize, values: &Grid) {
    for (dr, value_row) in values.iter().enumerate() {
        let r = row + dr;
        if grid.len() <= r {
            grid.resize(r + 1, Vec::new());
        }
        let target = &mut grid[r];
        for (dc, value) in value_row.iter().enumerate() {
            let c = col + dc;
            if target.len() <= c {
                target.resize(c + 1, String::new());
            }
            target[c] = value.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a1_parsing() {
        assert_eq!(parse_a1_start("A1").unwrap(), (0, 0));
        assert_eq!(parse_a1_start("K1").unwrap(), (0, 10));
        assert_eq!(parse_a1_start("A2:G2").unwrap(), (1, 0));
        assert_eq!(parse_a1_start("AA10").unwrap(), (9, 26));
        assert!(parse_a1_start("7").is_err());
        assert!(parse_a1_start("").is_err());
    }

    #[tokio::test]
    async fn update_grows_the_grid_and_append_extends_it() {
        let store = MemoryStore::new();
        let spreadsheet = store.open("s").await.unwrap();
        let sheet = spreadsheet.add_worksheet("w", 10, 7).await.unwrap();

        sheet
            .update("B2", vec![vec!["x".into(), "y".into()]])
            .await
            .unwrap();
        sheet.append_row(vec!["tail".into()]).await.unwrap();

        let grid = store.snapshot("s", "w").unwrap();
        assert_eq!(grid[1], vec!["", "x", "y"]);
        assert_eq!(grid[2], vec!["tail"]);
    }

    #[tokio::test]
    async fn lookup_distinguishes_found_and_not_found() {
        let store = MemoryStore::new();
        store.seed("s", "w", vec![vec!["a".into()]]);
        let spreadsheet = store.open("s").await.unwrap();
        assert!(matches!(
            spreadsheet.worksheet("w").await.unwrap(),
            SheetLookup::Found(_)
        ));
        assert!(matches!(
            spreadsheet.worksheet("missing").await.unwrap(),
            SheetLookup::NotFound
        ));
    }
}
