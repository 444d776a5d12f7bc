// SPDX-FileCopyrightText: 2026 Cantoria Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-recipient roster publishing.
//!
//! Publishing is a full overwrite: clear, then one batch write carrying
//! the table plus a last-update stamp and a liturgical-calendar link off
//! to the side. A run interrupted mid-write leaves the sheet briefly
//! empty; the next run rewrites it wholesale.

use cantoria_core::traits::{find_or_create, Spreadsheet};
use cantoria_core::types::RangeUpdate;
use cantoria_core::CantoriaError;
use tracing::info;

/// Side-cell metadata written next to every published roster.
#[derive(Debug, Clone)]
pub struct PublishStamp {
    /// E.g. `"Last Update: 07-Dec-2025 06:00:00 WIB"`.
    pub last_update: String,
    /// Liturgical calendar URL for the current month.
    pub calendar_url: String,
}

/// Overwrites `sheet_name` with `rows` (header included) and the stamp cells.
pub async fn publish_roster(
    spreadsheet: &dyn Spreadsheet,
    sheet_name: &str,
    rows: Vec<Vec<String>>,
    stamp: &PublishStamp,
) -> Result<(), CantoriaError> {
    let cols = rows.first().map(Vec::len).unwrap_or(1);
    let sheet = find_or_create(
        spreadsheet,
        sheet_name,
        (rows.len() + 10) as u32,
        (cols + 5) as u32,
    )
    .await?;

    sheet.clear().await?;

    let data_range = format!("A1:{}{}", column_letter(cols.saturating_sub(1)), rows.len());
    let row_count = rows.len();
    sheet
        .batch_update(vec![
            RangeUpdate::new(data_range, rows),
            RangeUpdate::cell("K1", stamp.last_update.clone()),
            RangeUpdate::cell("K2", "Liturgical Calendar:"),
            RangeUpdate::cell("L2", stamp.calendar_url.clone()),
        ])
        .await?;

    info!(worksheet = sheet_name, rows = row_count, "published roster");
    Ok(())
}

/// Zero-based column index to A1 letters (0 -> "A", 26 -> "AA").
fn column_letter(mut idx: usize) -> String {
    let mut letters = Vec::new();
    loop {
        letters.push(b'A' + (idx % 26) as u8);
        if idx < 26 {
            break;
        }
        idx = idx / 26 - 1;
    }
    letters.reverse();
    String::from_utf8(letters).expect("ASCII letters")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_letters() {
        assert_eq!(column_letter(0), "A");
        assert_eq!(column_letter(8), "I");
        assert_eq!(column_letter(25), "Z");
        assert_eq!(column_letter(26), "AA");
        assert_eq!(column_letter(27), "AB");
    }
}
