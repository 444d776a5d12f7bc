// SPDX-FileCopyrightText: 2026 Cantoria Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Recipient directory parsing.
//!
//! The directory worksheet lists one duty-holder per row: name, Telegram
//! chat id, WhatsApp number. Either channel column may be blank; a blank
//! name means the row is padding and is skipped.

use cantoria_core::types::Recipient;

/// Parses directory rows (header row first) into recipients.
pub fn parse_directory(rows: &[Vec<String>]) -> Vec<Recipient> {
    rows.iter()
        .skip(1)
        .filter_map(|row| {
            let name = row.first()?.trim();
            if name.is_empty() {
                return None;
            }
            Some(Recipient {
                name: name.to_string(),
                telegram_chat_id: optional_cell(row, 1),
                whatsapp_number: optional_cell(row, 2),
            })
        })
        .collect()
}

fn optional_cell(row: &[String], idx: usize) -> Option<String> {
    row.get(idx)
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .map(str::to_string)
}
