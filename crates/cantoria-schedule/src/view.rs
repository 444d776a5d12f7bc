// SPDX-FileCopyrightText: 2026 Cantoria Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-recipient views: the published roster table, the next-N reminder
//! digest, and the digest fingerprint used for deduplication.
//!
//! The fingerprint is simply the digest lines joined with `|`: two runs
//! produce the same fingerprint iff the recipient's next-N entries are
//! unchanged in content and order, which is exactly the "nothing new to
//! say" condition.

use cantoria_core::types::ScheduleEntry;
use chrono::Locale;

use crate::liturgy;

/// Fixed output column order of a published roster sheet.
pub const ROSTER_HEADER: [&str; 9] = [
    "Hari",
    "Tanggal",
    "Jam",
    "Anamnesis",
    "Cara Tobat",
    "Koor",
    "Organis",
    "Tahun Liturgi",
    "Weekday",
];

/// Separator joining digest lines into a fingerprint.
const FINGERPRINT_SEPARATOR: &str = "|";

/// Filters entries assigned to `name`, case-insensitively, preserving the
/// incoming (already date-sorted) order.
pub fn recipient_view(entries: &[ScheduleEntry], name: &str) -> Vec<ScheduleEntry> {
    let needle = name.trim().to_lowercase();
    entries
        .iter()
        .filter(|e| e.assignee.to_lowercase() == needle)
        .cloned()
        .collect()
}

/// Renders the publish table for one recipient: header row plus one row
/// per entry in [`ROSTER_HEADER`] order.
pub fn roster_rows(entries: &[ScheduleEntry], locale: Locale) -> Vec<Vec<String>> {
    let mut rows = Vec::with_capacity(entries.len() + 1);
    rows.push(ROSTER_HEADER.iter().map(|h| h.to_string()).collect());
    for entry in entries {
        let (hari, tahun, weekday) = match entry.date {
            Some(date) => (
                liturgy::weekday_name(date, locale),
                liturgy::liturgical_year(date).to_string(),
                if liturgy::is_weekday(date) { "yes" } else { "no" }.to_string(),
            ),
            None => (String::new(), String::new(), String::new()),
        };
        rows.push(vec![
            hari,
            entry.date_label.clone(),
            entry.time_label.clone(),
            entry.notes_primary.clone(),
            entry.notes_secondary.clone(),
            entry.group_label.clone(),
            entry.assignee.clone(),
            tahun,
            weekday,
        ]);
    }
    rows
}

/// Renders the next-N reminder digest, one line per dated entry.
///
/// Empty when the recipient has no upcoming entries.
pub fn digest_lines(
    entries: &[ScheduleEntry],
    n: usize,
    locale: Locale,
    group_fallback: &str,
) -> Vec<String> {
    entries
        .iter()
        .take(n)
        .filter_map(|entry| {
            let date = entry.date?;
            let group = if entry.group_label.is_empty() {
                group_fallback
            } else {
                entry.group_label.as_str()
            };
            Some(format!(
                "- {}, {} • {} (Koor: {})",
                liturgy::weekday_name(date, locale),
                liturgy::long_date(date, locale),
                entry.time_label,
                group
            ))
        })
        .collect()
}

/// Collapses digest lines into the deduplication fingerprint.
pub fn fingerprint(lines: &[String]) -> String {
    lines.join(FINGERPRINT_SEPARATOR)
}

/// Assembles the full reminder message body around the digest lines.
pub fn reminder_text(name: &str, lines: &[String], header_template: &str, footer: &str) -> String {
    let header = header_template.replace("{name}", &capitalize(name));
    format!("{header}\n{}\n\n{footer}", lines.join("\n"))
}

/// First letter uppercased, the rest lowercased, as the greeting expects.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry(date: &str, time: &str, group: &str, assignee: &str) -> ScheduleEntry {
        ScheduleEntry {
            date: crate::dates::parse_cell(date),
            date_label: date.to_string(),
            time_label: time.to_string(),
            notes_primary: String::new(),
            notes_secondary: String::new(),
            group_label: group.to_string(),
            assignee: assignee.to_string(),
        }
    }

    #[test]
    fn recipient_filter_is_case_insensitive() {
        let entries = vec![
            entry("7-12-2025", "08.00", "Cantate", "MARIA"),
            entry("14-12-2025", "17.00", "Laudate", "agnes"),
            entry("21-12-2025", "08.00", "Jubilate", "maria"),
        ];
        let view = recipient_view(&entries, "Maria");
        assert_eq!(view.len(), 2);
        assert_eq!(view[0].date_label, "7-12-2025");
        assert_eq!(view[1].date_label, "21-12-2025");
    }

    #[test]
    fn digest_renders_localized_lines_with_group_fallback() {
        let entries = vec![
            entry("7-12-2025", "08.00", "Cantate", "Maria"),
            entry("14-12-2025", "17.00", "", "Maria"),
        ];
        let lines = digest_lines(&entries, 3, Locale::id_ID, "-");
        assert_eq!(
            lines,
            vec![
                "- Minggu, 7 Desember 2025 • 08.00 (Koor: Cantate)",
                "- Minggu, 14 Desember 2025 • 17.00 (Koor: -)",
            ]
        );
    }

    #[test]
    fn digest_truncates_to_n_and_skips_undated() {
        let mut entries: Vec<ScheduleEntry> = (1..=5)
            .map(|week| entry(&format!("{}-12-2025", week * 7), "08.00", "g", "Maria"))
            .collect();
        entries.insert(0, entry("TBD", "", "", "Maria"));

        let lines = digest_lines(&entries, 3, Locale::en_US, "-");
        assert_eq!(lines.len(), 2, "undated entry consumes a slot but renders nothing");
        assert!(entries[0].date.is_none());
    }

    #[test]
    fn fingerprint_changes_with_content_and_order() {
        let a = vec!["- Sunday, 7 December 2025 • 08.00 (Koor: Cantate)".to_string()];
        let mut b = a.clone();
        b.push("- Sunday, 14 December 2025 • 17.00 (Koor: -)".to_string());

        assert_eq!(fingerprint(&a), fingerprint(&a.clone()));
        assert_ne!(fingerprint(&a), fingerprint(&b));

        let reversed: Vec<String> = b.iter().rev().cloned().collect();
        assert_ne!(fingerprint(&b), fingerprint(&reversed));
        assert!(fingerprint(&b).contains('|'));
        assert_eq!(fingerprint(&[]), "");
    }

    #[test]
    fn roster_rows_carry_enrichment_columns() {
        let entries = vec![entry("7-12-2025", "08.00", "Cantate", "Maria")];
        let rows = roster_rows(&entries, Locale::id_ID);
        assert_eq!(rows[0][0], "Hari");
        assert_eq!(rows[1][0], "Minggu");
        assert_eq!(rows[1][7], "A"); // post-Advent 2025 -> cycle year 2026
        assert_eq!(rows[1][8], "no"); // Sunday
    }

    #[test]
    fn roster_rows_blank_enrichment_for_undated_entries() {
        let rows = roster_rows(&[entry("TBD", "", "", "Maria")], Locale::en_US);
        assert_eq!(rows[1][0], "");
        assert_eq!(rows[1][1], "TBD");
        assert_eq!(rows[1][7], "");
    }

    #[test]
    fn reminder_text_substitutes_and_capitalizes_name() {
        let lines = vec!["- line".to_string()];
        let text = reminder_text("MARIA", &lines, "Hi {name}, next up:", "footer");
        assert_eq!(text, "Hi Maria, next up:\n- line\n\nfooter");
    }

    #[test]
    fn past_entries_never_reach_the_view() {
        // Scenario: one entry yesterday, one in 8 days; only the future one
        // survives finalize and therefore the publish table and digest.
        let today = NaiveDate::from_ymd_opt(2025, 12, 8).unwrap();
        let entries = crate::extract::finalize(
            vec![
                entry("7-12-2025", "08.00", "Cantate", "Maria"),
                entry("16-12-2025", "17.00", "Laudate", "Maria"),
            ],
            today,
        );
        let view = recipient_view(&entries, "maria");
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].date_label, "16-12-2025");
        assert_eq!(digest_lines(&view, 3, Locale::en_US, "-").len(), 1);
    }
}
