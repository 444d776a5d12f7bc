// SPDX-FileCopyrightText: 2026 Cantoria Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Cantoria roster notifier.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup.

use serde::{Deserialize, Serialize};

/// Top-level Cantoria configuration.
///
/// Loaded from TOML files with `CANTORIA_*` environment variable overrides.
/// All sections are optional and default to sensible values; required
/// credentials are checked by post-deserialization validation.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CantoriaConfig {
    /// Process identity, logging, locale, and timezone settings.
    #[serde(default)]
    pub agent: AgentConfig,

    /// Source roster spreadsheet settings.
    #[serde(default)]
    pub source: SourceConfig,

    /// Output spreadsheet settings (published rosters, directory, log).
    #[serde(default)]
    pub output: OutputConfig,

    /// Google Sheets API access settings.
    #[serde(default)]
    pub sheets: SheetsConfig,

    /// Telegram bot settings.
    #[serde(default)]
    pub telegram: TelegramConfig,

    /// WhatsApp gateway settings.
    #[serde(default)]
    pub whatsapp: WhatsappConfig,

    /// Reminder rendering and pacing settings.
    #[serde(default)]
    pub notify: NotifyConfig,
}

/// Process identity, logging, locale, and timezone configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Display name used in log lines.
    #[serde(default = "default_agent_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Locale tag for weekday and month names (e.g. "id", "en_US").
    /// An unknown tag falls back to en_US with a warning; never fatal.
    #[serde(default = "default_locale")]
    pub locale: String,

    /// Fixed reference timezone for "today" comparisons and log timestamps.
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            log_level: default_log_level(),
            locale: default_locale(),
            timezone: default_timezone(),
        }
    }
}

/// Source roster spreadsheet configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SourceConfig {
    /// Backend id of the spreadsheet holding the raw roster.
    #[serde(default)]
    pub spreadsheet_id: String,

    /// Worksheet title of the raw roster table.
    #[serde(default = "default_source_worksheet")]
    pub worksheet: String,

    /// Number of header rows to skip before data starts.
    #[serde(default = "default_header_rows")]
    pub header_rows: usize,

    /// Whether to merge the disjoint second roster section into the
    /// primary one. Seasonal sheet-layout toggle, set by the operator.
    #[serde(default)]
    pub include_second_section: bool,

    /// Row bound for the second section window.
    #[serde(default = "default_second_section_max_rows")]
    pub second_section_max_rows: usize,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            spreadsheet_id: String::new(),
            worksheet: default_source_worksheet(),
            header_rows: default_header_rows(),
            include_second_section: false,
            second_section_max_rows: default_second_section_max_rows(),
        }
    }
}

/// Output spreadsheet configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Backend id of the spreadsheet receiving published rosters and the log.
    #[serde(default)]
    pub spreadsheet_id: String,

    /// Worksheet title prefix for per-recipient roster sheets.
    #[serde(default = "default_roster_prefix")]
    pub roster_sheet_prefix: String,

    /// Worksheet title of the notification deduplication log.
    #[serde(default = "default_log_worksheet")]
    pub log_worksheet: String,

    /// Worksheet title of the recipient directory.
    #[serde(default = "default_directory_worksheet")]
    pub directory_worksheet: String,

    /// Liturgical calendar URL template; `{month}` and `{year}` are
    /// substituted with the current month and year.
    #[serde(default = "default_calendar_url")]
    pub calendar_url_template: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            spreadsheet_id: String::new(),
            roster_sheet_prefix: default_roster_prefix(),
            log_worksheet: default_log_worksheet(),
            directory_worksheet: default_directory_worksheet(),
            calendar_url_template: default_calendar_url(),
        }
    }
}

/// Google Sheets API access configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SheetsConfig {
    /// OAuth bearer token for the Sheets API.
    #[serde(default)]
    pub api_token: Option<String>,

    /// Base URL of the Sheets API (overridable for testing).
    #[serde(default = "default_sheets_base_url")]
    pub base_url: String,
}

impl Default for SheetsConfig {
    fn default() -> Self {
        Self {
            api_token: None,
            base_url: default_sheets_base_url(),
        }
    }
}

/// Telegram bot configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TelegramConfig {
    /// Whether Telegram delivery is active this run.
    #[serde(default)]
    pub enabled: bool,

    /// Bot API token. Required when `enabled`.
    #[serde(default)]
    pub bot_token: Option<String>,
}

/// WhatsApp gateway configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct WhatsappConfig {
    /// Whether WhatsApp delivery is active this run.
    #[serde(default)]
    pub enabled: bool,

    /// Gateway endpoint URL. Required when `enabled`.
    #[serde(default)]
    pub endpoint_url: Option<String>,

    /// Bearer token for the gateway, if it requires one.
    #[serde(default)]
    pub api_token: Option<String>,
}

/// Reminder rendering and pacing configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct NotifyConfig {
    /// Number of upcoming entries in the reminder digest.
    #[serde(default = "default_digest_len")]
    pub digest_len: usize,

    /// Message header; `{name}` is substituted with the recipient's name.
    #[serde(default = "default_header_template")]
    pub header_template: String,

    /// Message footer appended after the digest lines.
    #[serde(default = "default_footer")]
    pub footer: String,

    /// Placeholder shown when an entry has no group label.
    #[serde(default = "default_group_fallback")]
    pub group_fallback: String,

    /// Lower bound of the random inter-recipient pacing delay.
    #[serde(default = "default_pacing_min")]
    pub pacing_min_secs: u64,

    /// Upper bound of the random inter-recipient pacing delay.
    #[serde(default = "default_pacing_max")]
    pub pacing_max_secs: u64,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            digest_len: default_digest_len(),
            header_template: default_header_template(),
            footer: default_footer(),
            group_fallback: default_group_fallback(),
            pacing_min_secs: default_pacing_min(),
            pacing_max_secs: default_pacing_max(),
        }
    }
}

fn default_agent_name() -> String {
    "cantoria".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_locale() -> String {
    "id".to_string()
}

fn default_timezone() -> String {
    "Asia/Jakarta".to_string()
}

fn default_source_worksheet() -> String {
    "Jadwal Pasdior".to_string()
}

fn default_header_rows() -> usize {
    4
}

fn default_second_section_max_rows() -> usize {
    978
}

fn default_roster_prefix() -> String {
    "Jadwal ".to_string()
}

fn default_log_worksheet() -> String {
    "Notification Chat Log".to_string()
}

fn default_directory_worksheet() -> String {
    "Data Organis".to_string()
}

fn default_calendar_url() -> String {
    "https://www.imankatolik.or.id/kalender.php?b={month}&t={year}".to_string()
}

fn default_sheets_base_url() -> String {
    "https://sheets.googleapis.com/v4/spreadsheets".to_string()
}

fn default_digest_len() -> usize {
    3
}

fn default_header_template() -> String {
    "Hi {name}, jadwal organis berikutnya adalah:".to_string()
}

fn default_footer() -> String {
    "Untuk jadwal yang lebih update silahkan cek di link berikut:\nhttps://linktr.ee/pasdiormabes"
        .to_string()
}

fn default_group_fallback() -> String {
    "-".to_string()
}

fn default_pacing_min() -> u64 {
    6
}

fn default_pacing_max() -> u64 {
    15
}
