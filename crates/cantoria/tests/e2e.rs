// SPDX-FileCopyrightText: 2026 Cantoria Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Whole-pipeline test: seeded spreadsheets in, reminders and log rows out.

use cantoria::run::execute;
use cantoria_core::traits::MessageTransport;
use cantoria_core::types::ChannelKind;
use cantoria_test_utils::{MemoryStore, RecordingTransport};
use chrono::NaiveDate;

const CONFIG: &str = r#"
[agent]
locale = "id"
timezone = "Asia/Jakarta"

[source]
spreadsheet_id = "src"
worksheet = "Roster"
header_rows = 1

[output]
spreadsheet_id = "out"

[sheets]
api_token = "unused-in-memory"

[notify]
pacing_min_secs = 0
pacing_max_secs = 0
"#;

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

/// A primary-layout roster row: pad column A, data in B..K.
fn roster_row(date: &str, time: &str, group: &str, assignee: &str) -> Vec<String> {
    row(&["", date, time, "", "", group, assignee, "", "", "", ""])
}

fn seeded_store() -> MemoryStore {
    let store = MemoryStore::new();
    store.seed(
        "out",
        "Data Organis",
        vec![
            row(&["Nama", "Chat Id", "No WA"]),
            row(&["Maria", "12345", "0812-345-6789"]),
            row(&["Agnes", "", ""]),
        ],
    );
    store.seed(
        "src",
        "Roster",
        vec![
            row(&["header"]),
            roster_row("30-11-2025", "08.00", "Cantate", "Maria"), // past
            roster_row("14-12-2025", "17.00", "Laudate", "maria"),
            roster_row("7-12-2025", "08.00", "Cantate", "MARIA"),
            roster_row("21-12-2025", "10.00", "Jubilate", "Ghost"), // not in directory
        ],
    );
    store
}

#[tokio::test]
async fn full_run_publishes_sorts_and_notifies_once() {
    let store = seeded_store();
    let config = cantoria_config::load_and_validate_str(CONFIG).unwrap();
    let today = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();

    let telegram = RecordingTransport::new(ChannelKind::Telegram);
    let whatsapp = RecordingTransport::new(ChannelKind::Whatsapp);
    let transports: Vec<Box<dyn MessageTransport>> =
        vec![Box::new(telegram.clone()), Box::new(whatsapp.clone())];

    let summary = execute(&store, transports, &config, today).await.unwrap();

    // Maria and Agnes each get a roster sheet; only Maria has entries.
    assert_eq!(summary.published, 2);
    assert_eq!(summary.sent, 2, "one send per populated channel");
    assert_eq!(summary.errored, 0);

    // The published roster is date-sorted and excludes the past entry.
    let roster = store.snapshot("out", "Jadwal Maria").unwrap();
    assert_eq!(roster[1][1], "7-12-2025");
    assert_eq!(roster[2][1], "14-12-2025");
    assert_eq!(roster.len(), 3, "header + two upcoming entries");

    // The digest is rendered in the configured locale, oldest first.
    let (_, text) = &telegram.sent()[0];
    assert!(text.starts_with("Hi Maria,"), "got: {text}");
    let first = text.find("7 Desember 2025").unwrap();
    let second = text.find("14 Desember 2025").unwrap();
    assert!(first < second);
    assert!(text.contains("(Koor: Cantate)"));

    // Both channels share one fingerprint in the log.
    let log = store.snapshot("out", "Notification Chat Log").unwrap();
    assert_eq!(log.len(), 3);
    assert_eq!(log[1][4], log[2][4], "fingerprint shared across channels");

    // An unchanged second run transmits nothing new.
    let telegram2 = RecordingTransport::new(ChannelKind::Telegram);
    let whatsapp2 = RecordingTransport::new(ChannelKind::Whatsapp);
    let transports: Vec<Box<dyn MessageTransport>> =
        vec![Box::new(telegram2.clone()), Box::new(whatsapp2.clone())];
    let summary = execute(&store, transports, &config, today).await.unwrap();

    assert_eq!(summary.sent, 0);
    assert_eq!(summary.skipped, 2);
    assert_eq!(telegram2.sent().len(), 0);
    assert_eq!(whatsapp2.sent().len(), 0);
}

#[tokio::test]
async fn missing_directory_worksheet_is_a_startup_error() {
    let store = MemoryStore::new();
    store.seed("src", "Roster", vec![row(&["header"])]);
    let config = cantoria_config::load_and_validate_str(CONFIG).unwrap();
    let today = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();

    let err = execute(&store, Vec::new(), &config, today).await.unwrap_err();
    assert!(err.to_string().contains("Data Organis"), "got: {err}");
}
