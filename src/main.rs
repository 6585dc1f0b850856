//! Main entry point for the application.
//!
//! This module initializes logging, loads environment variables and
//! configuration, and runs one validation session against the remote
//! validation service: load both documents, run the local gate, issue the
//! remote call, then render the issue list and positional markers.

mod cli;
mod config;
mod constants;
mod core;
mod errors;
mod event;
mod remote;
mod utils;

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::warn;

use crate::core::{annotate, InMemorySurface, ValidationReport, ValidationSession};
use crate::event::Command;
use crate::remote::HttpValidator;

/// Main entry point that initializes and runs the application.
///
/// # Initialization steps:
/// 1. Parse CLI arguments
/// 2. Initialize logging system
/// 3. Load environment variables and configuration
/// 4. Load both documents into the session buffers
/// 5. Run one validation attempt and render the report
#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::Cli::try_parse().expect("Failed to parse CLI arguments");

    let config = match &cli.config {
        Some(path) => match config::load_config(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load configuration: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => config::ValidatorConfig::default(),
    };
    utils::init_logging(&cli.logging_level, config.log_to_file);

    if let Err(e) = dotenvy::dotenv() {
        warn!("Failed to load .env file: {}", e);
    }

    match run(&cli, &config).await {
        Ok(report) => render_exit(report),
        Err(e) => {
            eprintln!("{}", e.to_string().red());
            ExitCode::FAILURE
        }
    }
}

async fn run(
    cli: &cli::Cli,
    config: &config::ValidatorConfig,
) -> Result<ValidationReport, errors::Error> {
    let endpoint = cli.endpoint.as_deref().unwrap_or(&config.endpoint);
    let timeout = config.request_timeout()?;
    let client = HttpValidator::new(endpoint, timeout)?;

    let mut session = ValidationSession::new(
        Box::new(client),
        Box::new(InMemorySurface::default()),
    );

    let schema_text = core::read_document(Path::new(&cli.schema))?;
    let data_text = core::read_document(Path::new(&cli.data))?;
    session.dispatch(Command::SchemaEdited(schema_text)).await?;
    session.dispatch(Command::DataEdited(data_text)).await?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("-\\|/")
            .template("{spinner} {msg}")
            .expect("valid spinner template"),
    );
    spinner.set_message("Validating against the remote service...");
    spinner.enable_steady_tick(std::time::Duration::from_millis(120));

    let report = session.dispatch(Command::Validate).await;
    spinner.finish_and_clear();

    let report = report?.expect("a Validate dispatch on an idle session yields a report");
    render(&report, session.data_text());
    Ok(report)
}

/// Prints the issue list, markers and banner for one report
fn render(report: &ValidationReport, data_text: &str) {
    match report {
        ValidationReport::Input(issues) => {
            println!("{}", "Local input errors".red().bold());
            for issue in issues {
                println!("  {}: {}", issue.path.bold(), issue.message);
            }
        }
        ValidationReport::Unreachable(banner) => {
            println!("{}", banner.red().bold());
        }
        ValidationReport::Checked { valid: true, .. } => {
            println!("{}", "✅ Document is valid against the schema".green());
        }
        ValidationReport::Checked { issues, .. } => {
            println!("{}", "Validation errors".red().bold());
            for issue in issues {
                match issue.line {
                    Some(line) => {
                        println!("  {} (line {}): {}", issue.path.bold(), line, issue.message)
                    }
                    None => println!("  {}: {}", issue.path.bold(), issue.message),
                }
            }
            for marker in annotate::project(issues, data_text) {
                println!(
                    "  {} line {}, columns {}-{}",
                    "marker".yellow(),
                    marker.line,
                    marker.column_start,
                    marker.column_end
                );
            }
        }
    }
}

fn render_exit(report: ValidationReport) -> ExitCode {
    match report {
        ValidationReport::Checked { valid: true, .. } => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    }
}
