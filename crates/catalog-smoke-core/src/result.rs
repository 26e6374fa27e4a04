// crates/catalog-smoke-core/src/result.rs
// ============================================================================
// Module: Check Results
// Description: Immutable check results, the append-only log, and summaries.
// Purpose: Record pass/fail outcomes in execution order for reporting.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! A [`CheckResult`] is recorded once per check and never mutated afterwards.
//! The [`ResultLog`] grows monotonically in execution order; a [`Summary`] is
//! derived from the log on demand and never stored.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

// ============================================================================
// SECTION: Check Result
// ============================================================================

/// Outcome of a single smoke check.
///
/// # Invariants
/// - Immutable once recorded in a [`ResultLog`].
/// - `diagnostic` is attached on failure only; passing results carry `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Check name, stable across runs for reporting.
    pub name: String,
    /// Whether the check passed.
    pub success: bool,
    /// Human-readable outcome message.
    pub message: String,
    /// Optional diagnostic payload explaining a failure.
    pub diagnostic: Option<Value>,
}

impl CheckResult {
    /// Creates a passing result.
    #[must_use]
    pub fn pass(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            success: true,
            message: message.into(),
            diagnostic: None,
        }
    }

    /// Creates a failing result without diagnostic data.
    #[must_use]
    pub fn fail(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            success: false,
            message: message.into(),
            diagnostic: None,
        }
    }

    /// Creates a failing result carrying the offending payload.
    #[must_use]
    pub fn fail_with(
        name: impl Into<String>,
        message: impl Into<String>,
        diagnostic: Value,
    ) -> Self {
        Self {
            name: name.into(),
            success: false,
            message: message.into(),
            diagnostic: Some(diagnostic),
        }
    }
}

// ============================================================================
// SECTION: Result Log
// ============================================================================

/// Append-only log of check results in execution order.
///
/// # Invariants
/// - Entries are never removed or reordered after recording.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultLog {
    /// Recorded results in execution order.
    entries: Vec<CheckResult>,
}

impl ResultLog {
    /// Creates an empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends a result and returns whether it passed.
    pub fn record(&mut self, result: CheckResult) -> bool {
        let success = result.success;
        self.entries.push(result);
        success
    }

    /// Returns the recorded results in execution order.
    #[must_use]
    pub fn entries(&self) -> &[CheckResult] {
        &self.entries
    }

    /// Returns the number of recorded results.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether no results have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Derives a summary from the current log contents.
    #[must_use]
    pub fn summarize(&self) -> Summary {
        let total = self.entries.len();
        let passed = self.entries.iter().filter(|entry| entry.success).count();
        Summary::new(total, passed)
    }
}

// ============================================================================
// SECTION: Summary
// ============================================================================

/// Aggregate view over a [`ResultLog`].
///
/// # Invariants
/// - `total == passed + failed`.
/// - `success_rate_percent` is `0.0` when `total == 0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Total number of recorded checks.
    pub total: usize,
    /// Number of passing checks.
    pub passed: usize,
    /// Number of failing checks.
    pub failed: usize,
    /// Pass rate as a percentage of the total.
    pub success_rate_percent: f64,
}

impl Summary {
    /// Derives a summary from totals.
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        reason = "Check counts are far below f64 integer precision limits."
    )]
    pub fn new(total: usize, passed: usize) -> Self {
        let failed = total.saturating_sub(passed);
        let success_rate_percent = if total == 0 {
            0.0
        } else {
            (passed as f64 / total as f64) * 100.0
        };
        Self {
            total,
            passed,
            failed,
            success_rate_percent,
        }
    }

    /// Returns whether every recorded check passed.
    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.failed == 0 && self.total > 0
    }
}
