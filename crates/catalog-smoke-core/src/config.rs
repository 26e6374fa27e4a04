// crates/catalog-smoke-core/src/config.rs
// ============================================================================
// Module: Smoke Run Configuration
// Description: Environment-backed configuration for smoke runs.
// Purpose: Centralize env parsing with strict UTF-8 validation.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Environment values are parsed with strict UTF-8 enforcement to avoid silent
//! misconfiguration. Invalid UTF-8, empty values, and non-positive timeouts
//! fail closed with a descriptive message.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

// ============================================================================
// SECTION: Environment Constants
// ============================================================================

/// Environment keys for smoke run configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmokeEnv {
    /// Base URL of the catalog API under test.
    BaseUrl,
    /// Request timeout override in seconds (positive integer).
    TimeoutSeconds,
}

impl SmokeEnv {
    /// Returns the canonical environment variable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BaseUrl => "CATALOG_SMOKE_BASE_URL",
            Self::TimeoutSeconds => "CATALOG_SMOKE_TIMEOUT_SEC",
        }
    }
}

/// Default base URL when no override is provided.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000/api";

/// Default request timeout when no override is provided.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

// ============================================================================
// SECTION: Config Types
// ============================================================================

/// Typed smoke run configuration derived from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmokeConfig {
    /// Base URL of the catalog API under test.
    pub base_url: String,
    /// Request timeout for every HTTP call.
    pub timeout: Duration,
}

impl Default for SmokeConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl SmokeConfig {
    /// Loads configuration from environment variables, applying defaults.
    ///
    /// # Errors
    ///
    /// Returns an error when an environment value is not valid UTF-8, is empty,
    /// or fails validation (for example, a zero or non-numeric timeout).
    pub fn load() -> Result<Self, String> {
        let base_url = read_env_nonempty(SmokeEnv::BaseUrl.as_str())?
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let timeout = read_env_nonempty(SmokeEnv::TimeoutSeconds.as_str())?
            .map(|value| parse_timeout_seconds(SmokeEnv::TimeoutSeconds.as_str(), &value))
            .transpose()?
            .unwrap_or(DEFAULT_TIMEOUT);
        Ok(Self {
            base_url,
            timeout,
        })
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Reads an environment variable and enforces UTF-8 validity.
///
/// # Errors
///
/// Returns an error when the environment variable contains invalid UTF-8.
pub fn read_env_strict(name: &str) -> Result<Option<String>, String> {
    std::env::var_os(name).map_or(Ok(None), |raw| {
        raw.into_string().map(Some).map_err(|_| format!("{name} must be valid UTF-8"))
    })
}

/// Reads an environment variable and rejects empty values.
///
/// # Errors
///
/// Returns an error when the variable is set but empty or whitespace.
fn read_env_nonempty(name: &str) -> Result<Option<String>, String> {
    match read_env_strict(name)? {
        Some(value) if value.trim().is_empty() => Err(format!("{name} must not be empty")),
        Some(value) => Ok(Some(value)),
        None => Ok(None),
    }
}

/// Parses a positive integer timeout in seconds.
///
/// # Errors
///
/// Returns an error when the value is not a positive integer.
pub fn parse_timeout_seconds(name: &str, value: &str) -> Result<Duration, String> {
    let seconds: u64 = value
        .trim()
        .parse()
        .map_err(|_| format!("{name} must be a positive integer, got {value:?}"))?;
    if seconds == 0 {
        return Err(format!("{name} must be greater than zero"));
    }
    Ok(Duration::from_secs(seconds))
}
