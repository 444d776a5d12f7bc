// SPDX-FileCopyrightText: 2026 Cantoria Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Liturgical-year derivation and locale-aware date rendering.
//!
//! The liturgical year rolls over on the first Sunday of Advent (the 4th
//! Sunday before December 25) and cycles A, B, C with a fixed three-year
//! period. Weekday and month names come from chrono's localized
//! formatting; an unknown locale tag falls back to `en_US` and is logged,
//! never fatal.

use chrono::{Datelike, Duration, Locale, NaiveDate, Weekday};
use tracing::warn;

/// Returns the first Advent Sunday of `year`: the 4th Sunday before Dec 25.
pub fn anchor_sunday(year: i32) -> NaiveDate {
    let dec_25 = NaiveDate::from_ymd_opt(year, 12, 25).expect("December 25 is a valid date");
    let days_to_sunday = i64::from(dec_25.weekday().num_days_from_monday()) + 1;
    dec_25 - Duration::days(days_to_sunday + 21)
}

/// Returns the liturgical-year tag ("A", "B", or "C") for a date.
///
/// Dates on or after that calendar year's Advent anchor belong to the
/// following liturgical year.
pub fn liturgical_year(date: NaiveDate) -> &'static str {
    let year = date.year();
    let adjusted = if date >= anchor_sunday(year) {
        year + 1
    } else {
        year
    };
    match adjusted.rem_euclid(3) {
        1 => "A",
        2 => "B",
        _ => "C",
    }
}

/// Whether the date falls outside the Saturday/Sunday service days.
pub fn is_weekday(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Resolves a locale tag, trying the bare tag and the doubled `xx_XX`
/// region form before falling back to `en_US`.
pub fn resolve_locale(tag: &str) -> Locale {
    if let Ok(locale) = Locale::try_from(tag) {
        return locale;
    }
    let doubled = format!("{}_{}", tag, tag.to_uppercase());
    if let Ok(locale) = Locale::try_from(doubled.as_str()) {
        return locale;
    }
    warn!(tag, "unknown locale, falling back to en_US");
    Locale::en_US
}

/// Localized full weekday name, e.g. "Minggu" under `id_ID`.
pub fn weekday_name(date: NaiveDate, locale: Locale) -> String {
    date.format_localized("%A", locale).to_string()
}

/// Localized long date, e.g. "7 Desember 2025" under `id_ID`.
pub fn long_date(date: NaiveDate, locale: Locale) -> String {
    date.format_localized("%-d %B %Y", locale).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn anchor_is_the_fourth_sunday_before_christmas() {
        // Dec 25 2025 is a Thursday; first Advent is Nov 30 2025.
        assert_eq!(anchor_sunday(2025), date(2025, 11, 30));
        assert_eq!(anchor_sunday(2025).weekday(), Weekday::Sun);
        // Dec 25 2022 is a Sunday; first Advent is Nov 27 2022.
        assert_eq!(anchor_sunday(2022), date(2022, 11, 27));
    }

    #[test]
    fn cycle_fixtures() {
        assert_eq!(liturgical_year(date(2020, 1, 1)), "A");
        assert_eq!(liturgical_year(date(2021, 1, 1)), "B");
        assert_eq!(liturgical_year(date(2022, 1, 1)), "C");
    }

    #[test]
    fn advent_rolls_into_the_next_cycle_year() {
        // The day before Advent 2025 is still year 2025 -> "C" branch check:
        // 2025 % 3 == 0 -> C; from Advent onward 2026 % 3 == 1 -> A.
        assert_eq!(liturgical_year(date(2025, 11, 29)), "C");
        assert_eq!(liturgical_year(date(2025, 11, 30)), "A");
        assert_eq!(liturgical_year(date(2025, 12, 25)), "A");
    }

    #[test]
    fn weekday_flag_excludes_weekends() {
        assert!(is_weekday(date(2025, 12, 1))); // Monday
        assert!(!is_weekday(date(2025, 12, 6))); // Saturday
        assert!(!is_weekday(date(2025, 12, 7))); // Sunday
    }

    #[test]
    fn locale_resolution_handles_short_tags_and_garbage() {
        assert_eq!(resolve_locale("id"), Locale::id_ID);
        assert_eq!(resolve_locale("id_ID"), Locale::id_ID);
        assert_eq!(resolve_locale("xx-nope"), Locale::en_US);
    }

    #[test]
    fn localized_rendering() {
        let d = date(2025, 12, 7); // a Sunday
        assert_eq!(weekday_name(d, Locale::id_ID), "Minggu");
        assert_eq!(long_date(d, Locale::id_ID), "7 Desember 2025");
        assert_eq!(weekday_name(d, Locale::en_US), "Sunday");
    }
}
