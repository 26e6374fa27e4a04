// system-tests/src/lib.rs
// ============================================================================
// Module: Catalog Smoke System Tests Library
// Description: Shared fixtures for system test scenarios.
// Purpose: Provide catalog product fixtures for stub servers and suites.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! This crate hosts shared product fixtures used by the system-test binaries
//! in `system-tests/tests`. The stub catalog server and the test suites build
//! their payloads from the same fixtures so shape expectations stay aligned.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod fixtures;
