// SPDX-FileCopyrightText: 2026 Cantoria Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Extraction of normalized schedule records from the raw roster table.
//!
//! The source worksheet is human-maintained: a fixed block of header rows,
//! a primary column window, an override pair of columns that replaces the
//! {group, assignee} pair when populated, and (some years) a disjoint
//! second section further right on the same rows. All of that is flattened
//! here into [`ScheduleEntry`] records; nothing downstream ever touches a
//! raw row again.

use cantoria_core::types::ScheduleEntry;
use chrono::NaiveDate;
use tracing::debug;

use crate::dates;

/// Column geometry and merge options for one extraction run.
///
/// Indices are absolute 0-based column positions within a raw row; the
/// defaults mirror the production roster layout (data in B..K, override
/// pair in J/K, second section in O..R).
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Header rows to skip before data starts.
    pub header_rows: usize,
    /// First column of the primary window.
    pub primary_start: usize,
    /// Width of the primary window; shorter rows are skipped.
    pub primary_width: usize,
    /// Offset of the override trigger cell within the primary window.
    /// When non-blank, the trigger and its right neighbor replace the
    /// {group, assignee} pair together.
    pub override_offset: usize,
    /// Whether to extract and append the second section.
    pub include_second_section: bool,
    /// First column of the second-section window ({date, time, group,
    /// assignee}, 4 columns wide).
    pub second_start: usize,
    /// Data-row bound for the second section.
    pub second_max_rows: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            header_rows: 4,
            primary_start: 1,  // column B
            primary_width: 10, // B..K
            override_offset: 8, // column J, pair J/K replacing F/G
            include_second_section: false,
            second_start: 14, // column O, window O..R
            second_max_rows: 978,
        }
    }
}

// Offsets within the primary window: {date, time, notes, notes, group, assignee}.
const DATE: usize = 0;
const TIME: usize = 1;
const NOTES_PRIMARY: usize = 2;
const NOTES_SECONDARY: usize = 3;
const GROUP: usize = 4;
const ASSIGNEE: usize = 5;

const SECOND_WIDTH: usize = 4;

/// Extracts the full record set from raw rows: primary window first, then
/// the second section when enabled.
pub fn extract(rows: &[Vec<String>], opts: &ExtractOptions) -> Vec<ScheduleEntry> {
    let data_rows = rows.get(opts.header_rows..).unwrap_or_default();
    let mut entries = primary_entries(data_rows, opts);

    if opts.include_second_section {
        let bounded = &data_rows[..data_rows.len().min(opts.second_max_rows)];
        let extra = second_section_entries(bounded, opts);
        debug!(extra = extra.len(), "merged second roster section");
        entries.extend(extra);
    }

    entries
}

fn primary_entries(data_rows: &[Vec<String>], opts: &ExtractOptions) -> Vec<ScheduleEntry> {
    let needed = opts.primary_start + opts.primary_width;
    data_rows
        .iter()
        .filter(|row| row.len() >= needed)
        .map(|row| {
            let window = &row[opts.primary_start..opts.primary_start + opts.primary_width];
            let (group, assignee) = resolve_pair(window, opts.override_offset);
            build_entry(
                &window[DATE],
                &window[TIME],
                &window[NOTES_PRIMARY],
                &window[NOTES_SECONDARY],
                group,
                assignee,
            )
        })
        .collect()
}

/// Applies the override rule: a populated trigger cell replaces both fields
/// of the {group, assignee} pair, never just one.
fn resolve_pair(window: &[String], override_offset: usize) -> (String, String) {
    let trigger = window.get(override_offset).map(String::as_str).unwrap_or("");
    if !trigger.trim().is_empty() {
        let replacement = window
            .get(override_offset + 1)
            .map(String::as_str)
            .unwrap_or("");
        (trigger.to_string(), replacement.to_string())
    } else {
        (window[GROUP].clone(), window[ASSIGNEE].clone())
    }
}

/// The disjoint second section carries {date, time, group, assignee} only;
/// the notes fields are forced blank.
fn second_section_entries(data_rows: &[Vec<String>], opts: &ExtractOptions) -> Vec<ScheduleEntry> {
    let needed = opts.second_start + SECOND_WIDTH;
    data_rows
        .iter()
        .filter(|row| row.len() >= needed)
        .map(|row| {
            let window = &row[opts.second_start..opts.second_start + SECOND_WIDTH];
            build_entry(&window[0], &window[1], "", "", window[2].clone(), window[3].clone())
        })
        .collect()
}

fn build_entry(
    date_label: &str,
    time_label: &str,
    notes_primary: &str,
    notes_secondary: &str,
    group_label: String,
    assignee: String,
) -> ScheduleEntry {
    ScheduleEntry {
        date: dates::parse_cell(date_label),
        date_label: date_label.trim().to_string(),
        time_label: time_label.trim().to_string(),
        notes_primary: notes_primary.trim().to_string(),
        notes_secondary: notes_secondary.trim().to_string(),
        group_label: group_label.trim().to_string(),
        assignee: assignee.trim().to_string(),
    }
}

/// Drops entries with no parseable date or a date before `today`, then
/// sorts ascending by date (stable, so same-day entries keep sheet order).
pub fn finalize(entries: Vec<ScheduleEntry>, today: NaiveDate) -> Vec<ScheduleEntry> {
    let mut kept: Vec<ScheduleEntry> = entries
        .into_iter()
        .filter(|e| e.date.is_some_and(|d| d >= today))
        .collect();
    kept.sort_by_key(|e| e.date);
    kept
}
