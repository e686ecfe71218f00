/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info, warn};

use timegrid::clash::log_clashes;
use timegrid::config::RenderOptions;
use timegrid::schedule::Schedule;

// ── CLI argument definition ───────────────────────────────────────────────────

/// Render a weekly schedule as a printable HTML timetable.
///
/// Example:
///   timegrid -i demos/schedule.json -c demos/render_options.yaml -o timetable.html
#[derive(Debug, Parser)]
#[command(
    name = "timegrid",
    about = "Weekly timetable grid renderer",
    long_about = None,
)]
struct Cli {
    /// Schedule file (.json, .yaml or .yml).
    #[arg(short = 'i', long = "input")]
    input: PathBuf,

    /// YAML render options (labels, legend column).
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Output HTML file; stdout when omitted.
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Log participant double-bookings before rendering.
    #[arg(long = "check-clashes", default_value_t = false)]
    check_clashes: bool,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Level is controlled by the RUST_LOG env-var (e.g. RUST_LOG=debug).
    // Logs go to stderr so the document can be piped from stdout.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    info!(
        input         = %cli.input.display(),
        config        = ?cli.config,
        output        = ?cli.output,
        check_clashes = cli.check_clashes,
        "Configuration"
    );

    if let Err(e) = run(&cli) {
        error!("Rendering failed: {:#}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let options = match &cli.config {
        Some(path) => RenderOptions::load_from_file(path)?,
        None => {
            warn!("No render options file provided, using default labels");
            RenderOptions::default()
        }
    };

    let schedule = Schedule::load_from_file(&cli.input)?;

    if cli.check_clashes {
        let clashes = log_clashes(&schedule.entries);
        if clashes.is_empty() {
            info!("No participant clashes found");
        }
    }

    let columns = timegrid::build_columns(&schedule.time_slots, &schedule.break_slot)
        .context("Failed to build columns")?;
    let html = timegrid::render_with(&schedule, &columns, &options)
        .context("Failed to render schedule")?;

    match &cli.output {
        Some(path) => {
            std::fs::write(path, &html)
                .with_context(|| format!("Cannot write output file: {}", path.display()))?;
            info!(
                bytes = html.len(),
                columns = columns.len(),
                days = schedule.days.len(),
                "Timetable written to {}",
                path.display()
            );
        }
        None => print!("{}", html),
    }

    Ok(())
}
