// SPDX-FileCopyrightText: 2026 Cantoria Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The reminder dispatcher: one sequential pass over all recipients.
//!
//! Per recipient: publish the roster sheet, render the next-N digest,
//! and for each populated channel consult the deduplication log before
//! sending. Every attempt (send, skip, error) lands in the log; no
//! single failure aborts the run. Recipients are paced with a bounded
//! random delay to stay friendly to downstream rate limits.

use cantoria_core::traits::{MessageTransport, Spreadsheet};
use cantoria_core::types::{DeliveryStatus, LogRecord, Recipient, ScheduleEntry};
use cantoria_schedule::view;
use chrono::{Datelike, Locale, Utc};
use chrono_tz::Tz;
use metrics::counter;
use rand::Rng;
use tracing::{info, warn};

use crate::log::{decide, preview, DispatchAction, NotificationLog};
use crate::publish::{publish_roster, PublishStamp};

/// Rendering, pacing, and sheet-naming options for one dispatch run.
#[derive(Debug, Clone)]
pub struct DispatcherOptions {
    pub digest_len: usize,
    pub header_template: String,
    pub footer: String,
    pub group_fallback: String,
    pub roster_prefix: String,
    pub log_worksheet: String,
    pub calendar_url_template: String,
    pub locale: Locale,
    pub timezone: Tz,
    pub pacing_min_secs: u64,
    pub pacing_max_secs: u64,
}

/// Counts reported at the end of a run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub published: usize,
    pub sent: usize,
    pub skipped: usize,
    pub errored: usize,
}

/// Sequential reminder dispatcher over one output spreadsheet.
pub struct Dispatcher<'a> {
    spreadsheet: &'a dyn Spreadsheet,
    transports: Vec<Box<dyn MessageTransport>>,
    options: DispatcherOptions,
}

impl<'a> Dispatcher<'a> {
    pub fn new(
        spreadsheet: &'a dyn Spreadsheet,
        transports: Vec<Box<dyn MessageTransport>>,
        options: DispatcherOptions,
    ) -> Self {
        Self {
            spreadsheet,
            transports,
            options,
        }
    }

    /// Processes every recipient once. Individual failures are logged and
    /// counted, never propagated; only startup-grade errors (none today)
    /// would end the run early.
    pub async fn run(
        &self,
        recipients: &[Recipient],
        entries: &[ScheduleEntry],
    ) -> RunSummary {
        let mut summary = RunSummary::default();
        info!(recipients = recipients.len(), entries = entries.len(), "starting reminder run");

        for (i, recipient) in recipients.iter().enumerate() {
            info!(name = %recipient.name, "processing recipient");
            self.process_recipient(recipient, entries, &mut summary).await;

            if i + 1 < recipients.len() {
                self.pace().await;
            }
        }

        info!(
            published = summary.published,
            sent = summary.sent,
            skipped = summary.skipped,
            errored = summary.errored,
            "reminder run finished"
        );
        summary
    }

    async fn process_recipient(
        &self,
        recipient: &Recipient,
        entries: &[ScheduleEntry],
        summary: &mut RunSummary,
    ) {
        let schedule = view::recipient_view(entries, &recipient.name);

        let sheet_name = format!(
            "{}{}",
            self.options.roster_prefix,
            view::capitalize(&recipient.name)
        );
        let rows = view::roster_rows(&schedule, self.options.locale);
        match publish_roster(self.spreadsheet, &sheet_name, rows, &self.stamp()).await {
            Ok(()) => summary.published += 1,
            Err(e) => {
                warn!(name = %recipient.name, error = %e, "failed to publish roster");
                summary.errored += 1;
            }
        }

        let lines = view::digest_lines(
            &schedule,
            self.options.digest_len,
            self.options.locale,
            &self.options.group_fallback,
        );
        if lines.is_empty() {
            info!(name = %recipient.name, "no upcoming entries, nothing to send");
            return;
        }

        let fingerprint = view::fingerprint(&lines);
        let text = view::reminder_text(
            &recipient.name,
            &lines,
            &self.options.header_template,
            &self.options.footer,
        );

        for transport in &self.transports {
            let kind = transport.kind();
            let Some(identifier) = recipient.identifier(kind) else {
                continue;
            };
            self.process_channel(
                recipient,
                transport.as_ref(),
                identifier,
                &fingerprint,
                &text,
                summary,
            )
            .await;
        }
    }

    /// Runs the log state machine for one (recipient, channel) pair.
    ///
    /// The digest and fingerprint are shared across channels; only the
    /// log row and the delivery differ.
    async fn process_channel(
        &self,
        recipient: &Recipient,
        transport: &dyn MessageTransport,
        identifier: &str,
        fingerprint: &str,
        text: &str,
        summary: &mut RunSummary,
    ) {
        let kind = transport.kind();
        let log = NotificationLog::new(self.spreadsheet, self.options.log_worksheet.clone());

        let previous = match log.read_last(kind, identifier).await {
            Ok(previous) => previous,
            Err(e) => {
                warn!(name = %recipient.name, channel = %kind, error = %e, "log read failed");
                summary.errored += 1;
                return;
            }
        };

        let status = match decide(previous.as_ref(), fingerprint) {
            DispatchAction::Skip => {
                info!(name = %recipient.name, channel = %kind, "unchanged schedule, skipping");
                counter!("cantoria_reminders_skipped_total", "channel" => kind.to_string())
                    .increment(1);
                summary.skipped += 1;
                DeliveryStatus::Skipped
            }
            DispatchAction::Send => match transport.send(identifier, text).await {
                Ok(()) => {
                    info!(name = %recipient.name, channel = %kind, "reminder sent");
                    counter!("cantoria_reminders_sent_total", "channel" => kind.to_string())
                        .increment(1);
                    summary.sent += 1;
                    DeliveryStatus::Sent
                }
                Err(e) => {
                    warn!(name = %recipient.name, channel = %kind, error = %e, "reminder failed");
                    counter!("cantoria_reminders_errored_total", "channel" => kind.to_string())
                        .increment(1);
                    summary.errored += 1;
                    DeliveryStatus::Error(e.to_string())
                }
            },
        };

        let record = LogRecord {
            timestamp: self.now_stamp(),
            recipient_name: recipient.name.clone(),
            identifier: identifier.to_string(),
            message_preview: preview(text),
            fingerprint: fingerprint.to_string(),
            status,
            channel: kind,
        };
        if let Err(e) = log.upsert(&record).await {
            warn!(name = %recipient.name, channel = %kind, error = %e, "log write failed");
            summary.errored += 1;
        }
    }

    fn now_stamp(&self) -> String {
        Utc::now()
            .with_timezone(&self.options.timezone)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
    }

    fn stamp(&self) -> PublishStamp {
        let now = Utc::now().with_timezone(&self.options.timezone);
        PublishStamp {
            last_update: format!("Last Update: {}", now.format("%d-%b-%Y %H:%M:%S %Z")),
            calendar_url: self
                .options
                .calendar_url_template
                .replace("{month}", &now.month().to_string())
                .replace("{year}", &now.year().to_string()),
        }
    }

    /// Bounded random delay between recipients, a courtesy to downstream
    /// rate limits rather than a correctness requirement.
    async fn pace(&self) {
        let (min, max) = (self.options.pacing_min_secs, self.options.pacing_max_secs);
        if max == 0 {
            return;
        }
        // Config validation enforces min <= max for the binary, but the
        // options struct is public; an inverted range must not panic.
        let secs = rand::thread_rng().gen_range(min.min(max)..=max);
        tokio::time::sleep(std::time::Duration::from_secs(secs)).await;
    }
}
