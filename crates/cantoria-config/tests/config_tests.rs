// SPDX-FileCopyrightText: 2026 Cantoria Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Cantoria configuration system.

use cantoria_config::diagnostic::ConfigError;
use cantoria_config::{load_and_validate_str, load_config_from_str};

/// A complete runnable config for use as a baseline in tests.
const FULL_TOML: &str = r#"
[agent]
name = "test-run"
log_level = "debug"
locale = "id"
timezone = "Asia/Jakarta"

[source]
spreadsheet_id = "src-sheet-1"
worksheet = "Roster"
header_rows = 4
include_second_section = true
second_section_max_rows = 200

[output]
spreadsheet_id = "out-sheet-1"
log_worksheet = "Notification Chat Log"

[sheets]
api_token = "ya29.test"

[telegram]
enabled = true
bot_token = "123:ABC"

[whatsapp]
enabled = true
endpoint_url = "https://wa.example/send"
api_token = "wa-secret"

[notify]
digest_len = 3
pacing_min_secs = 0
pacing_max_secs = 0
"#;

#[test]
fn valid_toml_deserializes_into_cantoria_config() {
    let config = load_config_from_str(FULL_TOML).expect("valid TOML should deserialize");
    assert_eq!(config.agent.name, "test-run");
    assert_eq!(config.agent.log_level, "debug");
    assert_eq!(config.source.spreadsheet_id, "src-sheet-1");
    assert_eq!(config.source.worksheet, "Roster");
    assert!(config.source.include_second_section);
    assert_eq!(config.source.second_section_max_rows, 200);
    assert_eq!(config.output.spreadsheet_id, "out-sheet-1");
    assert_eq!(config.telegram.bot_token.as_deref(), Some("123:ABC"));
    assert_eq!(
        config.whatsapp.endpoint_url.as_deref(),
        Some("https://wa.example/send")
    );
    assert_eq!(config.notify.digest_len, 3);
}

#[test]
fn full_config_passes_validation() {
    load_and_validate_str(FULL_TOML).expect("full config should validate");
}

#[test]
fn defaults_fill_unspecified_sections() {
    let config = load_config_from_str("").expect("empty TOML should deserialize");
    assert_eq!(config.agent.name, "cantoria");
    assert_eq!(config.agent.timezone, "Asia/Jakarta");
    assert_eq!(config.agent.locale, "id");
    assert_eq!(config.source.header_rows, 4);
    assert_eq!(config.output.log_worksheet, "Notification Chat Log");
    assert_eq!(config.output.roster_sheet_prefix, "Jadwal ");
    assert_eq!(config.notify.digest_len, 3);
    assert_eq!(config.notify.pacing_min_secs, 6);
    assert_eq!(config.notify.pacing_max_secs, 15);
    assert!(!config.telegram.enabled);
    assert!(!config.whatsapp.enabled);
}

#[test]
fn env_vars_override_file_values_with_section_mapping() {
    figment::Jail::expect_with(|jail| {
        jail.create_file(
            "cantoria.toml",
            r#"
            [agent]
            log_level = "info"
            "#,
        )?;
        jail.set_env("CANTORIA_AGENT_LOG_LEVEL", "debug");
        // Underscores inside key names must survive the section mapping.
        jail.set_env("CANTORIA_TELEGRAM_BOT_TOKEN", "123:FromEnv");
        jail.set_env("CANTORIA_SOURCE_SPREADSHEET_ID", "env-sheet");

        let config = cantoria_config::load_config().expect("config should load");
        assert_eq!(config.agent.log_level, "debug");
        assert_eq!(config.telegram.bot_token.as_deref(), Some("123:FromEnv"));
        assert_eq!(config.source.spreadsheet_id, "env-sheet");
        Ok(())
    });
}

#[test]
fn unknown_key_is_rejected() {
    let toml = r#"
[agent]
naem = "oops"
"#;
    let result = load_config_from_str(toml);
    assert!(result.is_err(), "unknown key must fail deserialization");
}

#[test]
fn missing_spreadsheet_ids_fail_validation() {
    let errors = load_and_validate_str("").expect_err("empty config must not validate");
    let missing: Vec<_> = errors
        .iter()
        .filter_map(|e| match e {
            ConfigError::MissingKey { key } => Some(key.as_str()),
            _ => None,
        })
        .collect();
    assert!(missing.contains(&"source.spreadsheet_id"));
    assert!(missing.contains(&"output.spreadsheet_id"));
    assert!(missing.contains(&"sheets.api_token"));
}

#[test]
fn enabled_transport_requires_credentials() {
    let toml = r#"
[source]
spreadsheet_id = "a"

[output]
spreadsheet_id = "b"

[sheets]
api_token = "t"

[telegram]
enabled = true

[whatsapp]
enabled = true
"#;
    let errors = load_and_validate_str(toml).expect_err("must flag missing credentials");
    let missing: Vec<_> = errors
        .iter()
        .filter_map(|e| match e {
            ConfigError::MissingKey { key } => Some(key.as_str()),
            _ => None,
        })
        .collect();
    assert!(missing.contains(&"telegram.bot_token"));
    assert!(missing.contains(&"whatsapp.endpoint_url"));
}

#[test]
fn bad_timezone_and_pacing_are_validation_errors() {
    let toml = r#"
[agent]
timezone = "Mars/Olympus"

[source]
spreadsheet_id = "a"

[output]
spreadsheet_id = "b"

[sheets]
api_token = "t"

[notify]
digest_len = 0
pacing_min_secs = 20
pacing_max_secs = 5
"#;
    let errors = load_and_validate_str(toml).expect_err("must collect validation errors");
    let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    assert!(messages.iter().any(|m| m.contains("timezone")));
    assert!(messages.iter().any(|m| m.contains("digest_len")));
    assert!(messages.iter().any(|m| m.contains("pacing_min_secs")));
}
