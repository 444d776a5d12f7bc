// SPDX-FileCopyrightText: 2026 Cantoria Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tolerant parsing of human-typed date cells.
//!
//! The source sheet mixes day-first numeric dates ("7/12/2025"), dates with
//! English month abbreviations ("7 Dec 2025"), and raw spreadsheet serial
//! numbers that leak through when a cell loses its date formatting. Anything
//! else is somebody's note, not a date. Unparseable input yields `None`,
//! never an error.

use chrono::{Duration, NaiveDate};

/// English month abbreviations and their 2-digit month numbers.
///
/// Case-sensitive, matching how the sheet is actually typed. "Sept" must
/// precede "Sep" so the longer form is substituted whole.
const MONTH_ABBREVIATIONS: [(&str, &str); 13] = [
    ("Sept", "09"),
    ("Jan", "01"),
    ("Feb", "02"),
    ("Mar", "03"),
    ("Apr", "04"),
    ("May", "05"),
    ("Jun", "06"),
    ("Jul", "07"),
    ("Aug", "08"),
    ("Sep", "09"),
    ("Oct", "10"),
    ("Nov", "11"),
    ("Dec", "12"),
];

/// Day-first formats attempted in order, after month substitution.
const DAY_FIRST_FORMATS: [&str; 7] = [
    "%d-%m-%Y",
    "%d/%m/%Y",
    "%d.%m.%Y",
    "%d %m %Y",
    "%d-%m-%y",
    "%d/%m/%y",
    "%Y-%m-%d",
];

/// Day zero of the spreadsheet serial-date scheme.
fn serial_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1899, 12, 30).expect("1899-12-30 is a valid date")
}

/// Parses one raw date cell.
///
/// Steps in order, first match wins: trim and substitute month
/// abbreviations; day-first numeric parse; 4-6 digit serial-date
/// interpretation. Anything else is `None`.
pub fn parse_cell(raw: &str) -> Option<NaiveDate> {
    let mut cleaned = raw.trim().to_string();
    for (abbrev, month) in MONTH_ABBREVIATIONS {
        if cleaned.contains(abbrev) {
            cleaned = cleaned.replace(abbrev, month);
        }
    }

    for format in DAY_FIRST_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(&cleaned, format) {
            return Some(date);
        }
    }

    if let Some(days) = as_serial(&cleaned) {
        return serial_epoch().checked_add_signed(Duration::days(days));
    }

    None
}

/// Returns the day count if `cleaned` is a 4-6 digit serial date.
fn as_serial(cleaned: &str) -> Option<i64> {
    if (4..=6).contains(&cleaned.len()) && cleaned.chars().all(|c| c.is_ascii_digit()) {
        cleaned.parse().ok()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn day_first_numeric_dates() {
        assert_eq!(parse_cell("7-12-2025"), Some(date(2025, 12, 7)));
        assert_eq!(parse_cell("07/12/2025"), Some(date(2025, 12, 7)));
        assert_eq!(parse_cell(" 1.3.2026 "), Some(date(2026, 3, 1)));
    }

    #[test]
    fn month_abbreviations_are_substituted() {
        assert_eq!(parse_cell("7 Dec 2025"), Some(date(2025, 12, 7)));
        assert_eq!(parse_cell("25-Jan-2026"), Some(date(2026, 1, 25)));
        // "Sept" must not decay into "09t".
        assert_eq!(parse_cell("14 Sept 2025"), Some(date(2025, 9, 14)));
    }

    #[test]
    fn serial_dates_count_from_the_1899_epoch() {
        // 45000 days after 1899-12-30 is 2023-03-15.
        assert_eq!(parse_cell("45000"), Some(date(2023, 3, 15)));
        // A manual check near the epoch.
        assert_eq!(parse_cell("36526"), Some(date(2000, 1, 1)));
    }

    #[test]
    fn serial_requires_four_to_six_digits() {
        assert_eq!(parse_cell("123"), None);
        assert_eq!(parse_cell("1234567"), None);
    }

    #[test]
    fn garbage_yields_none_not_a_panic() {
        assert_eq!(parse_cell(""), None);
        assert_eq!(parse_cell("TBD"), None);
        assert_eq!(parse_cell("setelah misa sore"), None);
        assert_eq!(parse_cell("32-13-2025"), None);
    }

    #[test]
    fn iso_dates_still_parse() {
        assert_eq!(parse_cell("2025-12-07"), Some(date(2025, 12, 7)));
    }
}
