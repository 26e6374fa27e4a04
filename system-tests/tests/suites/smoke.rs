// system-tests/tests/suites/smoke.rs
// ============================================================================
// Module: Smoke Tests
// Description: Happy-path coverage for the full smoke run.
// Purpose: Validate the fixed check order and aggregate reporting.
// Dependencies: system-tests helpers
// ============================================================================

//! ## Overview
//! Happy-path coverage for the full smoke run.
//! Purpose: Validate the fixed check order and aggregate reporting.
//! Invariants:
//! - A healthy catalog yields nine passing results in fixed order.
//! - Passing results never carry diagnostic payloads.

use helpers::catalog_stub::StubOptions;
use helpers::catalog_stub::spawn_stub_catalog;
use helpers::harness_for;

use crate::helpers;

#[tokio::test(flavor = "multi_thread")]
async fn full_run_passes_against_healthy_catalog() -> Result<(), Box<dyn std::error::Error>> {
    let stub = spawn_stub_catalog(StubOptions::default())?;
    let mut harness = harness_for(stub.base_url())?;

    assert!(harness.run_all().await);

    let results = harness.results();
    assert_eq!(results.len(), 9);
    assert!(results.iter().all(|result| result.success));
    assert!(results.iter().all(|result| result.diagnostic.is_none()));
    assert_eq!(harness.product_ids().len(), 8);

    let summary = harness.summarize();
    assert_eq!(summary.total, 9);
    assert_eq!(summary.passed, 9);
    assert_eq!(summary.failed, 0);
    assert!(summary.all_passed());
    assert!((summary.success_rate_percent - 100.0).abs() < f64::EPSILON);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn checks_run_in_fixed_order() -> Result<(), Box<dyn std::error::Error>> {
    let stub = spawn_stub_catalog(StubOptions::default())?;
    let mut harness = harness_for(stub.base_url())?;

    assert!(harness.run_all().await);

    let names: Vec<&str> = harness.results().iter().map(|result| result.name.as_str()).collect();
    assert_eq!(names[0], "API connectivity");
    assert_eq!(names[1], "GET /products");
    assert_eq!(names[2], "GET /products/category/phone");
    assert_eq!(names[3], "GET /products/category/laptop");
    assert_eq!(names[4], "GET /products/category/tablet");
    assert_eq!(names[5], "GET /products/category/watch");
    assert!(names[6].starts_with("GET /products/"));
    assert!(names[7].contains("(invalid)"));
    assert_eq!(names[8], "POST /products/seed");
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn connectivity_reports_root_greeting() -> Result<(), Box<dyn std::error::Error>> {
    let stub = spawn_stub_catalog(StubOptions::default())?;
    let mut harness = harness_for(stub.base_url())?;

    assert!(harness.check_connectivity().await);
    let results = harness.results();
    assert_eq!(results.len(), 1);
    assert!(results[0].message.contains("Catalog API ready"));
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn listing_reports_observed_categories() -> Result<(), Box<dyn std::error::Error>> {
    let stub = spawn_stub_catalog(StubOptions::default())?;
    let mut harness = harness_for(stub.base_url())?;

    assert!(harness.check_connectivity().await);
    assert!(harness.check_list_products().await);

    let listing = &harness.results()[1];
    for category in ["phone", "laptop", "tablet", "watch"] {
        assert!(listing.message.contains(category));
    }
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn summarize_has_no_side_effects() -> Result<(), Box<dyn std::error::Error>> {
    let stub = spawn_stub_catalog(StubOptions::default())?;
    let mut harness = harness_for(stub.base_url())?;

    let before = harness.summarize();
    assert_eq!(before.total, 0);

    assert!(harness.check_connectivity().await);
    let first = harness.summarize();
    let second = harness.summarize();
    assert_eq!(first, second);
    assert_eq!(first.total, 1);
    assert_eq!(first.total, first.passed + first.failed);
    Ok(())
}
