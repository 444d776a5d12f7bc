// SPDX-FileCopyrightText: 2026 Cantoria Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cantoria - duty-roster ingestion and reminder dispatch.
//!
//! This is the binary entry point: load and validate configuration, then
//! execute one batch run. Per-recipient delivery failures are recorded in
//! the notification log and never change the exit code; only startup
//! failures exit non-zero.

use std::path::PathBuf;

use cantoria::run;

use clap::{Parser, Subcommand};
use tracing::error;

/// Cantoria - duty-roster ingestion and reminder dispatch.
#[derive(Parser, Debug)]
#[command(name = "cantoria", version, about, long_about = None)]
struct Cli {
    /// Path to an explicit config file (default: cantoria.toml hierarchy).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Execute one notification run.
    Run,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Fail fast: nothing is read or sent with a broken configuration.
    let config = {
        let loaded = match &cli.config {
            Some(path) => cantoria_config::load_and_validate_path(path),
            None => cantoria_config::load_and_validate(),
        };
        match loaded {
            Ok(config) => config,
            Err(errors) => {
                cantoria_config::render_errors(&errors);
                std::process::exit(1);
            }
        }
    };

    init_tracing(&config.agent.log_level);

    match cli.command {
        Some(Commands::Run) => {
            match run::run(&config).await {
                Ok(summary) => {
                    println!(
                        "cantoria: run complete (published={}, sent={}, skipped={}, errored={})",
                        summary.published, summary.sent, summary.skipped, summary.errored
                    );
                }
                Err(e) => {
                    error!(error = %e, "run aborted");
                    std::process::exit(1);
                }
            }
        }
        None => {
            println!("cantoria: use --help for available commands");
        }
    }
}

/// Initialize the tracing subscriber from config, honoring `RUST_LOG`.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("cantoria={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
