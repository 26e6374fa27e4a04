// crates/catalog-smoke-cli/src/report.rs
// ============================================================================
// Module: Console Report Formatting
// Description: Pure formatting for per-check lines and the summary block.
// Purpose: Keep console rendering testable and separate from I/O.
// Dependencies: catalog-smoke-core
// ============================================================================

//! ## Overview
//! Formatting helpers for the CLI report. These functions are pure so unit
//! tests can assert on rendered output without touching stdout.

// ============================================================================
// SECTION: Imports
// ============================================================================

use catalog_smoke_core::CheckResult;
use catalog_smoke_core::Summary;

// ============================================================================
// SECTION: Formatting
// ============================================================================

/// Renders one per-check report line.
#[must_use]
pub fn format_result_line(result: &CheckResult) -> String {
    let status = if result.success { "PASS" } else { "FAIL" };
    format!("{status}: {} - {}", result.name, result.message)
}

/// Renders the final summary block.
#[must_use]
pub fn format_summary_block(summary: &Summary) -> String {
    format!(
        "{}\nTest results: {}/{} checks passed\n   Total:  {}\n   Passed: {}\n   Failed: {}\n   Success rate: {:.1}%",
        "=".repeat(60),
        summary.passed,
        summary.total,
        summary.total,
        summary.passed,
        summary.failed,
        summary.success_rate_percent
    )
}
