// SPDX-FileCopyrightText: 2026 Cantoria Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The batch pipeline: load directory, extract the roster, enrich,
//! dispatch reminders.
//!
//! Everything before the dispatcher is fail-fast: if the source table or
//! the recipient directory cannot be read, nothing has been sent yet and
//! aborting is safe. From the dispatcher onward, failures are per
//! recipient and the run always completes.

use cantoria_config::CantoriaConfig;
use cantoria_core::traits::{MessageTransport, SheetLookup, TabularStore};
use cantoria_core::CantoriaError;
use cantoria_notify::{Dispatcher, DispatcherOptions, RunSummary};
use cantoria_schedule::directory::parse_directory;
use cantoria_schedule::liturgy::resolve_locale;
use cantoria_schedule::{extract, finalize, ExtractOptions};
use cantoria_sheets::GoogleSheets;
use cantoria_telegram::TelegramTransport;
use cantoria_whatsapp::WhatsAppTransport;
use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use tracing::info;

/// Executes one full notification run against the real backends.
pub async fn run(config: &CantoriaConfig) -> Result<RunSummary, CantoriaError> {
    let api_token = config
        .sheets
        .api_token
        .as_deref()
        .ok_or_else(|| CantoriaError::Config("sheets.api_token is required".into()))?;
    let store = GoogleSheets::new(api_token, config.sheets.base_url.clone())?;

    let mut transports: Vec<Box<dyn MessageTransport>> = Vec::new();
    if config.whatsapp.enabled {
        let endpoint = config
            .whatsapp
            .endpoint_url
            .as_deref()
            .ok_or_else(|| CantoriaError::Config("whatsapp.endpoint_url is required".into()))?;
        transports.push(Box::new(WhatsAppTransport::new(
            endpoint,
            config.whatsapp.api_token.as_deref(),
        )?));
    }
    if config.telegram.enabled {
        let token = config
            .telegram
            .bot_token
            .as_deref()
            .ok_or_else(|| CantoriaError::Config("telegram.bot_token is required".into()))?;
        transports.push(Box::new(TelegramTransport::new(token)?));
    }

    let timezone: Tz = config.agent.timezone.parse().map_err(|_| {
        CantoriaError::Config(format!("unknown timezone {}", config.agent.timezone))
    })?;
    let today = Utc::now().with_timezone(&timezone).date_naive();

    execute(&store, transports, config, today).await
}

/// The pipeline proper, generic over the store and transports.
pub async fn execute(
    store: &dyn TabularStore,
    transports: Vec<Box<dyn MessageTransport>>,
    config: &CantoriaConfig,
    today: NaiveDate,
) -> Result<RunSummary, CantoriaError> {
    let timezone: Tz = config.agent.timezone.parse().map_err(|_| {
        CantoriaError::Config(format!("unknown timezone {}", config.agent.timezone))
    })?;

    // Recipient directory, fresh each run.
    let output = store.open(&config.output.spreadsheet_id).await?;
    let directory = match output.worksheet(&config.output.directory_worksheet).await? {
        SheetLookup::Found(sheet) => sheet,
        SheetLookup::NotFound => {
            return Err(CantoriaError::Config(format!(
                "directory worksheet {:?} does not exist",
                config.output.directory_worksheet
            )));
        }
    };
    let recipients = parse_directory(&directory.get_all_values().await?);
    info!(recipients = recipients.len(), "loaded recipient directory");

    // Raw roster table.
    let source = store.open(&config.source.spreadsheet_id).await?;
    let roster = match source.worksheet(&config.source.worksheet).await? {
        SheetLookup::Found(sheet) => sheet,
        SheetLookup::NotFound => {
            return Err(CantoriaError::Config(format!(
                "source worksheet {:?} does not exist",
                config.source.worksheet
            )));
        }
    };
    let raw_rows = roster.get_all_values().await?;

    let options = ExtractOptions {
        header_rows: config.source.header_rows,
        include_second_section: config.source.include_second_section,
        second_max_rows: config.source.second_section_max_rows,
        ..ExtractOptions::default()
    };
    let entries = finalize(extract(&raw_rows, &options), today);
    info!(entries = entries.len(), %today, "extracted upcoming schedule");

    let dispatcher = Dispatcher::new(
        output.as_ref(),
        transports,
        DispatcherOptions {
            digest_len: config.notify.digest_len,
            header_template: config.notify.header_template.clone(),
            footer: config.notify.footer.clone(),
            group_fallback: config.notify.group_fallback.clone(),
            roster_prefix: config.output.roster_sheet_prefix.clone(),
            log_worksheet: config.output.log_worksheet.clone(),
            calendar_url_template: config.output.calendar_url_template.clone(),
            locale: resolve_locale(&config.agent.locale),
            timezone,
            pacing_min_secs: config.notify.pacing_min_secs,
            pacing_max_secs: config.notify.pacing_max_secs,
        },
    );

    Ok(dispatcher.run(&recipients, &entries).await)
}
