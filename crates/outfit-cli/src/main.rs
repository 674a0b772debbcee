//! Outfit CLI
//!
//! Command-line interface for outfit coherence validation.
//!
//! ## Usage
//!
//! ```bash
//! # Validate every outfit in a request document
//! outfit validate --request request.yaml
//!
//! # JSON report with a fixed timestamp
//! outfit validate --request request.json --format json --evaluated-at 2026-01-01T00:00:00Z
//!
//! # Helpers
//! outfit zone 41
//! outfit footwear --name "Blue Flip Flops"
//! outfit check request.yaml
//! ```
//!
//! ## Exit Codes
//!
//! - 0: every outfit valid
//! - 1: at least one outfit invalid
//! - 3: Error

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use outfit_core::{BatchResult, RequestDocument, ValidationContext};

/// Outfit: coherence validation for wardrobe outfits
#[derive(Parser)]
#[command(name = "outfit")]
#[command(version)]
#[command(about = "Validate outfits against a user and weather context", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate every outfit in a request document
    Validate {
        /// Path to the request document (YAML, or JSON with a .json extension)
        #[arg(short, long)]
        request: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// List every hard fail and soft penalty
        #[arg(long)]
        explain: bool,

        /// Explicit report timestamp (RFC 3339), e.g. 2026-01-01T00:00:00Z
        #[arg(long, value_parser = parse_datetime)]
        evaluated_at: Option<DateTime<Utc>>,
    },

    /// Print the climate zone for a Fahrenheit temperature
    Zone {
        /// Temperature in °F
        #[arg(allow_negative_numbers = true)]
        temperature_f: f64,
    },

    /// Classify footwear as open or closed
    Footwear {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        subcategory: Option<String>,
    },

    /// Parse and check a request document without validating outfits
    Check {
        /// Path to the request document
        path: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// JSON report for `validate --format json`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Report<'a> {
    evaluated_at: DateTime<Utc>,
    context: &'a ValidationContext,
    #[serde(flatten)]
    batch: &'a BatchResult,
}

/// Parse RFC 3339 datetime string to DateTime<Utc>.
fn parse_datetime(s: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("Invalid datetime format: {}. Expected RFC 3339 (e.g., 2026-01-01T00:00:00Z)", e))
}

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    match run() {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(3)
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Validate {
            request,
            format,
            explain,
            evaluated_at,
        } => validate_command(request, format, explain, evaluated_at),
        Commands::Zone { temperature_f } => zone_command(temperature_f),
        Commands::Footwear { name, subcategory } => footwear_command(name, subcategory),
        Commands::Check { path } => check_command(path),
    }
}

fn load_request(path: &Path) -> Result<RequestDocument> {
    RequestDocument::from_path(path)
        .with_context(|| format!("Failed to load request from {:?}", path))
}

fn validate_command(
    request_path: PathBuf,
    format: OutputFormat,
    explain: bool,
    evaluated_at: Option<DateTime<Utc>>,
) -> Result<ExitCode> {
    let request = load_request(&request_path)?;
    let context = request.context.resolve();

    tracing::debug!(outfits = request.outfits.len(), "validating request");
    let batch = outfit_core::validate_outfits(&request.outfits, &context);

    match format {
        OutputFormat::Json => {
            let report = Report {
                evaluated_at: evaluated_at.unwrap_or_else(Utc::now),
                context: &context,
                batch: &batch,
            };
            let json = serde_json::to_string_pretty(&report)?;
            println!("{}", json);
        }
        OutputFormat::Text => print_text_result(&batch, explain),
    }

    Ok(if batch.all_valid() {
        ExitCode::from(0)
    } else {
        ExitCode::from(1)
    })
}

fn print_text_result(batch: &BatchResult, explain: bool) {
    if batch.is_empty() {
        println!("No outfits in request");
        return;
    }

    for entry in batch {
        let result = &entry.validation;
        let status = if result.valid { "VALID" } else { "INVALID" };
        println!(
            "{}: {} (score {})",
            entry.outfit_id, status, result.coherence_score
        );

        if explain {
            for fail in &result.hard_fails {
                println!("  - {}", fail);
            }
            for penalty in &result.soft_penalties {
                println!("  ~ {}", penalty);
            }
        }
    }

    println!();
    println!("{}/{} outfits valid", batch.valid_count(), batch.len());
}

fn zone_command(temperature_f: f64) -> Result<ExitCode> {
    match outfit_core::temp_to_climate_zone(Some(temperature_f)) {
        Some(zone) => {
            println!("{}", zone);
            Ok(ExitCode::from(0))
        }
        None => anyhow::bail!("Temperature is not a number: {}", temperature_f),
    }
}

fn footwear_command(name: Option<String>, subcategory: Option<String>) -> Result<ExitCode> {
    let open = outfit_core::is_open_footwear(name.as_deref(), subcategory.as_deref());
    println!("{}", if open { "open" } else { "closed" });
    Ok(ExitCode::from(0))
}

fn check_command(path: PathBuf) -> Result<ExitCode> {
    match RequestDocument::from_path(&path) {
        Ok(request) => {
            println!("Request is valid: {} outfits", request.outfits.len());
            let context = request.context.resolve();
            if let Some(zone) = context.climate_zone {
                println!("Climate zone: {}", zone);
            }
            if let Some(presentation) = context.user_presentation {
                println!("Presentation: {}", presentation);
            }
            if let Some(dress_code) = &context.requested_dress_code {
                println!("Dress code: {}", dress_code);
            }
            Ok(ExitCode::from(0))
        }
        Err(e) => {
            eprintln!("Request check failed: {}", e);
            Ok(ExitCode::from(1))
        }
    }
}
