// ABOUTME: Workout tracker CLI - summarizes trainer sensor packages
// ABOUTME: Runs the sample packages or summarizes one package given on the command line
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Summarize the built-in sample packages
//! workout-tracker demo
//!
//! # Summarize one running package (steps, hours, kg)
//! workout-tracker summarize RUN 15000 1 75
//!
//! # Same, as JSON
//! workout-tracker --format json summarize WLK 9000 1 75 180
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use workout_tracker::config::TrackerConfig;
use workout_tracker::demo::{run_demo, summarize_package};
use workout_tracker::errors::{AppError, AppResult, ErrorResponse};
use workout_tracker::formatters::OutputFormat;

#[derive(Parser)]
#[command(
    name = "workout-tracker",
    about = "Workout summaries from trainer sensor packages",
    long_about = "Derives distance, mean speed, and calories from raw trainer sensor packages \
                  (SWM, RUN, WLK) and prints one summary line per package."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Output format override (text, json)
    #[arg(long, global = true)]
    format: Option<OutputFormat>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Summarize the built-in sample packages (default)
    Demo,

    /// Summarize one sensor package
    Summarize {
        /// Workout type code (SWM, RUN, WLK)
        code: String,

        /// Package values in positional order
        #[arg(allow_negative_numbers = true)]
        values: Vec<f64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = TrackerConfig::from_env().context("Failed to load configuration")?;

    let logging = if cli.verbose {
        config.logging.verbose()
    } else {
        config.logging
    };
    if let Err(e) = logging.init() {
        eprintln!("Warning: {e}");
    }

    let format = cli.format.unwrap_or(config.output_format);

    let lines = run(cli.command.unwrap_or(Command::Demo), format).inspect_err(|e| {
        if format == OutputFormat::Json {
            report_json_error(e);
        }
    })?;
    for line in lines {
        println!("{line}");
    }
    Ok(())
}

fn run(command: Command, format: OutputFormat) -> AppResult<Vec<String>> {
    match command {
        Command::Demo => run_demo(format),
        Command::Summarize { code, values } => {
            summarize_package(&code, &values, format).map(|line| vec![line])
        }
    }
}

/// Machine-readable error envelope on stdout; the plain error still reaches stderr
fn report_json_error(e: &AppError) {
    if let Ok(json) = serde_json::to_string(&ErrorResponse::from(e)) {
        println!("{json}");
    }
}
