// crates/catalog-smoke-core/src/lib.rs
// ============================================================================
// Module: Catalog Smoke Core Library
// Description: HTTP smoke-test harness for the product catalog REST API.
// Purpose: Provide the result log, shape validation, client, and harness.
// Dependencies: reqwest, serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! Core library for the catalog smoke-test harness. It owns an HTTP client
//! configured with a base URL and default headers, runs a fixed ordered
//! sequence of checks against the catalog REST API, records pass/fail results
//! with optional diagnostic payloads, and derives a summary with CI exit-code
//! semantics.
//!
//! Security posture: API responses are untrusted input; every payload is
//! shape-validated before any field is read, and oversized bodies fail closed.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod client;
pub mod config;
pub mod harness;
pub mod result;
pub mod shape;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use client::ApiResponse;
pub use client::CatalogClient;
pub use client::CatalogClientError;
pub use config::SmokeConfig;
pub use harness::SmokeHarness;
pub use result::CheckResult;
pub use result::ResultLog;
pub use result::Summary;
pub use shape::Category;
