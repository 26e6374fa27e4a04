// crates/catalog-smoke-cli/src/main.rs
// ============================================================================
// Module: Catalog Smoke CLI Entry Point
// Description: Command-line driver for the catalog smoke-test harness.
// Purpose: Run the fixed check sequence and report with CI exit codes.
// Dependencies: catalog-smoke-core, clap, serde_json, tokio
// ============================================================================

//! ## Overview
//! The CLI resolves configuration (flags override environment, environment
//! overrides literal defaults), runs the full smoke suite once, prints a
//! per-check report plus a summary block, and exits 0 iff every check passed.
//!
//! Console output goes through explicit stdout/stderr writers; the process
//! never calls `exit` directly and instead returns an [`ExitCode`].

// ============================================================================
// SECTION: Modules
// ============================================================================

mod report;

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::process::ExitCode;
use std::time::Duration;

use catalog_smoke_core::SmokeConfig;
use catalog_smoke_core::SmokeHarness;
use clap::Parser;

use crate::report::format_result_line;
use crate::report::format_summary_block;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "catalog-smoke", version, about = "Smoke-test a product catalog REST API")]
struct Cli {
    /// Base URL of the catalog API (overrides `CATALOG_SMOKE_BASE_URL`).
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,
    /// Request timeout in seconds (overrides `CATALOG_SMOKE_TIMEOUT_SEC`).
    #[arg(long, value_name = "SECONDS")]
    timeout_sec: Option<u64>,
}

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
#[tokio::main(flavor = "multi_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(message) => {
            let _ = write_stderr_line(&message);
            ExitCode::FAILURE
        }
    }
}

/// Executes the smoke run and prints the report.
async fn run() -> Result<ExitCode, String> {
    let cli = Cli::parse();
    let env_config = SmokeConfig::load()?;
    let config = resolve_config(cli.base_url, cli.timeout_sec, env_config)?;

    let mut harness = SmokeHarness::new(&config).map_err(|err| err.to_string())?;
    write_stdout_line(&format!("Testing catalog API at: {}", harness.base_url()))
        .map_err(|err| output_error("stdout", &err))?;

    let all_passed = harness.run_all().await;

    for result in harness.results() {
        write_stdout_line(&format_result_line(result))
            .map_err(|err| output_error("stdout", &err))?;
        if let Some(diagnostic) = result.diagnostic.as_ref().filter(|_| !result.success) {
            let rendered = serde_json::to_string_pretty(diagnostic)
                .unwrap_or_else(|_| diagnostic.to_string());
            write_stdout_line(&format!("   Data: {rendered}"))
                .map_err(|err| output_error("stdout", &err))?;
        }
    }

    let summary = harness.summarize();
    write_stdout_line(&format_summary_block(&summary))
        .map_err(|err| output_error("stdout", &err))?;

    if all_passed {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

// ============================================================================
// SECTION: Config Resolution
// ============================================================================

/// Applies CLI flag overrides on top of environment configuration.
fn resolve_config(
    base_url: Option<String>,
    timeout_sec: Option<u64>,
    env_config: SmokeConfig,
) -> Result<SmokeConfig, String> {
    let mut config = env_config;
    if let Some(base_url) = base_url {
        if base_url.trim().is_empty() {
            return Err("--base-url must not be empty".to_string());
        }
        config.base_url = base_url;
    }
    if let Some(seconds) = timeout_sec {
        if seconds == 0 {
            return Err("--timeout-sec must be greater than zero".to_string());
        }
        config.timeout = Duration::from_secs(seconds);
    }
    Ok(config)
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes one line to stdout.
///
/// # Errors
///
/// Returns an error when stdout is unavailable.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes one line to stderr.
///
/// # Errors
///
/// Returns an error when stderr is unavailable.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats a stream write failure message.
fn output_error(stream: &str, err: &std::io::Error) -> String {
    format!("failed to write to {stream}: {err}")
}
