// crates/catalog-smoke-core/src/harness.rs
// ============================================================================
// Module: Smoke Harness
// Description: Fixed-order smoke checks against the catalog API.
// Purpose: Drive connectivity, listing, lookup, and seed checks sequentially.
// Dependencies: crate::client, crate::result, crate::shape, serde_json
// ============================================================================

//! ## Overview
//! The harness owns the HTTP client, the append-only result log, and the
//! product ids captured from the listing check. Checks run strictly in order,
//! one HTTP attempt each, with no retries. Client errors are caught at the
//! check boundary and recorded as failing results; only the connectivity
//! check is a hard gate that aborts the run.
//!
//! The seed check has an external side effect: it mutates the remote
//! service's stored catalog.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;
use serde_json::json;

use crate::client::ApiResponse;
use crate::client::CatalogClient;
use crate::client::CatalogClientError;
use crate::config::SmokeConfig;
use crate::result::CheckResult;
use crate::result::ResultLog;
use crate::result::Summary;
use crate::shape::Category;
use crate::shape::REQUIRED_PRODUCT_FIELDS;
use crate::shape::field_str;
use crate::shape::missing_fields;
use crate::shape::observed_categories;
use crate::shape::products_array;
use crate::shape::wrong_category_products;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Deliberately invalid product id for the negative lookup check.
pub const INVALID_PRODUCT_ID: &str = "nonexistent-product-id-12345";

/// Number of products the seed endpoint must report.
pub const EXPECTED_SEED_COUNT: u64 = 8;

/// Check name for the connectivity gate.
const CONNECTIVITY_CHECK: &str = "API connectivity";

/// Check name for the full listing check.
const LIST_CHECK: &str = "GET /products";

/// Check name for the seed check.
const SEED_CHECK: &str = "POST /products/seed";

// ============================================================================
// SECTION: Harness
// ============================================================================

/// Sequences smoke checks and aggregates their results.
///
/// # Invariants
/// - One instance per run; no process-wide state.
/// - The result log grows monotonically in check execution order.
/// - `product_ids` is populated only by a successful listing check.
pub struct SmokeHarness {
    /// HTTP client bound to the catalog base URL.
    client: CatalogClient,
    /// Append-only log of check results.
    log: ResultLog,
    /// Product ids captured from the listing check.
    product_ids: Vec<String>,
}

impl SmokeHarness {
    /// Builds a harness for one smoke run.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogClientError`] when the HTTP client cannot be built.
    pub fn new(config: &SmokeConfig) -> Result<Self, CatalogClientError> {
        Ok(Self {
            client: CatalogClient::new(config)?,
            log: ResultLog::new(),
            product_ids: Vec::new(),
        })
    }

    /// Returns the base URL this harness targets.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    /// Returns the recorded results in execution order.
    #[must_use]
    pub fn results(&self) -> &[CheckResult] {
        self.log.entries()
    }

    /// Returns the product ids captured from the listing check.
    #[must_use]
    pub fn product_ids(&self) -> &[String] {
        &self.product_ids
    }

    /// Recomputes the summary from the result log; no side effects.
    #[must_use]
    pub fn summarize(&self) -> Summary {
        self.log.summarize()
    }

    /// Runs every check in the fixed order behind the connectivity gate.
    ///
    /// Returns `true` iff every recorded check passed. A connectivity failure
    /// aborts the run with exactly one recorded result.
    pub async fn run_all(&mut self) -> bool {
        if !self.check_connectivity().await {
            return false;
        }
        let mut all_passed = true;
        all_passed &= self.check_list_products().await;
        all_passed &= self.check_list_by_category().await;
        all_passed &= self.check_get_by_id().await;
        all_passed &= self.check_seed().await;
        all_passed
    }

    // ------------------------------------------------------------------
    // Connectivity
    // ------------------------------------------------------------------

    /// GETs the API root; passes iff status 200 with a JSON body.
    ///
    /// This gates all further checks: a failure aborts the run.
    pub async fn check_connectivity(&mut self) -> bool {
        let response = match self.client.get("").await {
            Ok(response) => response,
            Err(err) => {
                return self
                    .log
                    .record(CheckResult::fail(CONNECTIVITY_CHECK, format!("Connection failed: {err}")));
            }
        };
        if response.status.as_u16() != 200 {
            return self.log.record(CheckResult::fail_with(
                CONNECTIVITY_CHECK,
                format!("API returned status {}", response.status.as_u16()),
                json!(response.body_preview()),
            ));
        }
        match response.json() {
            Ok(body) => {
                let greeting = field_str(&body, "message").unwrap_or("OK").to_string();
                self.log.record(CheckResult::pass(
                    CONNECTIVITY_CHECK,
                    format!("API accessible, response: {greeting}"),
                ))
            }
            Err(err) => self
                .log
                .record(CheckResult::fail(CONNECTIVITY_CHECK, format!("Connection failed: {err}"))),
        }
    }

    // ------------------------------------------------------------------
    // Listing
    // ------------------------------------------------------------------

    /// GETs `/products` and validates the listing shape.
    ///
    /// On success, captures product ids for later checks and verifies the
    /// first product carries every required field. The observed category set
    /// is reported informationally, not asserted.
    pub async fn check_list_products(&mut self) -> bool {
        let body = match self.fetch_json(LIST_CHECK, "/products").await {
            Ok(body) => body,
            Err(recorded) => return recorded,
        };
        let Some(field) = body.get("products") else {
            return self.log.record(CheckResult::fail_with(
                LIST_CHECK,
                "Response missing 'products' field",
                body.clone(),
            ));
        };
        let Some(products) = field.as_array() else {
            return self.log.record(CheckResult::fail_with(
                LIST_CHECK,
                "Products field is not an array",
                body.clone(),
            ));
        };
        if products.is_empty() {
            return self.log.record(CheckResult::fail(
                LIST_CHECK,
                "No products found - catalog may be empty",
            ));
        }
        self.product_ids = products
            .iter()
            .filter_map(|product| field_str(product, "id"))
            .map(str::to_string)
            .collect();

        let sample = &products[0];
        let missing = missing_fields(sample, &REQUIRED_PRODUCT_FIELDS);
        if !missing.is_empty() {
            return self.log.record(CheckResult::fail_with(
                LIST_CHECK,
                format!("Product missing required fields: {}", missing.join(", ")),
                sample.clone(),
            ));
        }

        let categories: Vec<String> = observed_categories(products).into_iter().collect();
        self.log.record(CheckResult::pass(
            LIST_CHECK,
            format!(
                "Retrieved {} products with categories: {}",
                products.len(),
                categories.join(", ")
            ),
        ))
    }

    /// GETs each category-filtered listing and verifies partition correctness.
    ///
    /// Records one result per category; returns `true` iff all four passed.
    pub async fn check_list_by_category(&mut self) -> bool {
        let mut all_passed = true;
        for category in Category::ALL {
            all_passed &= self.check_one_category(category).await;
        }
        all_passed
    }

    /// Checks a single category-filtered listing.
    async fn check_one_category(&mut self, category: Category) -> bool {
        let name = format!("GET /products/category/{category}");
        let path = format!("/products/category/{category}");
        let body = match self.fetch_json(&name, &path).await {
            Ok(body) => body,
            Err(recorded) => return recorded,
        };
        let Some(products) = products_array(&body) else {
            return self.log.record(CheckResult::fail_with(
                name,
                "Response missing 'products' field or not an array",
                body.clone(),
            ));
        };
        let wrong = wrong_category_products(products, category);
        if !wrong.is_empty() {
            return self.log.record(CheckResult::fail_with(
                name,
                format!("Found {} products with wrong category", wrong.len()),
                Value::Array(wrong),
            ));
        }
        self.log.record(CheckResult::pass(
            name,
            format!("Retrieved {} {category} products", products.len()),
        ))
    }

    // ------------------------------------------------------------------
    // Lookup
    // ------------------------------------------------------------------

    /// GETs a single product by a captured id, then a deliberately invalid id.
    ///
    /// Records one result per lookup; the negative case passes only on a 404
    /// carrying an `error` field.
    pub async fn check_get_by_id(&mut self) -> bool {
        let valid_passed = match self.product_ids.first().cloned() {
            Some(id) => self.check_valid_lookup(&id).await,
            None => self.log.record(CheckResult::fail(
                "GET /products/{id}",
                "No product ids available for lookup",
            )),
        };
        let invalid_passed = self.check_invalid_lookup().await;
        valid_passed && invalid_passed
    }

    /// Checks the positive single-product lookup.
    async fn check_valid_lookup(&mut self, id: &str) -> bool {
        let name = format!("GET /products/{id}");
        let path = format!("/products/{id}");
        let body = match self.fetch_json(&name, &path).await {
            Ok(body) => body,
            Err(recorded) => return recorded,
        };
        let Some(product) = body.get("product") else {
            return self.log.record(CheckResult::fail_with(
                name,
                "Response missing 'product' field",
                body.clone(),
            ));
        };
        match field_str(product, "id") {
            Some(returned) if returned == id => {
                let product_name = field_str(product, "name").unwrap_or("<unnamed>");
                self.log
                    .record(CheckResult::pass(name, format!("Retrieved product: {product_name}")))
            }
            returned => self.log.record(CheckResult::fail_with(
                name,
                format!("Product id mismatch: expected {id}, got {}", returned.unwrap_or("<none>")),
                product.clone(),
            )),
        }
    }

    /// Checks the negative single-product lookup contract.
    async fn check_invalid_lookup(&mut self) -> bool {
        let name = format!("GET /products/{INVALID_PRODUCT_ID} (invalid)");
        let path = format!("/products/{INVALID_PRODUCT_ID}");
        let response = match self.client.get(&path).await {
            Ok(response) => response,
            Err(err) => {
                return self.log.record(CheckResult::fail(name, format!("Request failed: {err}")));
            }
        };
        if response.status.as_u16() != 404 {
            return self.log.record(CheckResult::fail_with(
                name,
                format!("Expected status 404, got {}", response.status.as_u16()),
                json!(response.body_preview()),
            ));
        }
        let body = match response.json() {
            Ok(body) => body,
            Err(err) => {
                return self.log.record(CheckResult::fail(name, format!("Request failed: {err}")));
            }
        };
        match field_str(&body, "error") {
            Some(error) => self.log.record(CheckResult::pass(
                name,
                format!("Correctly returned 404 with error: {error}"),
            )),
            None => self.log.record(CheckResult::fail_with(
                name,
                "404 response missing 'error' field",
                body.clone(),
            )),
        }
    }

    // ------------------------------------------------------------------
    // Seed
    // ------------------------------------------------------------------

    /// POSTs the seed endpoint and validates the reported count.
    ///
    /// Side effect: replaces the remote service's stored catalog.
    pub async fn check_seed(&mut self) -> bool {
        let response = match self.client.post("/products/seed").await {
            Ok(response) => response,
            Err(err) => {
                return self
                    .log
                    .record(CheckResult::fail(SEED_CHECK, format!("Request failed: {err}")));
            }
        };
        if response.status.as_u16() != 200 {
            return self.log.record(CheckResult::fail_with(
                SEED_CHECK,
                format!("Expected status 200, got {}", response.status.as_u16()),
                json!(response.body_preview()),
            ));
        }
        let body = match response.json() {
            Ok(body) => body,
            Err(err) => {
                return self
                    .log
                    .record(CheckResult::fail(SEED_CHECK, format!("Request failed: {err}")));
            }
        };
        let missing = missing_fields(&body, &["message", "count", "products"]);
        if !missing.is_empty() {
            return self.log.record(CheckResult::fail_with(
                SEED_CHECK,
                format!("Response missing required fields: {}", missing.join(", ")),
                body.clone(),
            ));
        }
        let count = body.get("count").and_then(Value::as_u64);
        if count != Some(EXPECTED_SEED_COUNT) {
            let reported =
                count.map_or_else(|| "non-numeric".to_string(), |value| value.to_string());
            return self.log.record(CheckResult::fail_with(
                SEED_CHECK,
                format!("Expected {EXPECTED_SEED_COUNT} products to be seeded, got {reported}"),
                body.clone(),
            ));
        }
        self.log.record(CheckResult::pass(
            SEED_CHECK,
            format!("Successfully seeded {EXPECTED_SEED_COUNT} products"),
        ))
    }

    // ------------------------------------------------------------------
    // Shared plumbing
    // ------------------------------------------------------------------

    /// GETs a path and returns its JSON body, recording failures.
    ///
    /// On transport, status, or parse failure the failing result is recorded
    /// and `Err(false)` is returned so callers can propagate the outcome.
    async fn fetch_json(&mut self, name: &str, path: &str) -> Result<Value, bool> {
        let response = match self.client.get(path).await {
            Ok(response) => response,
            Err(err) => {
                return Err(self
                    .log
                    .record(CheckResult::fail(name, format!("Request failed: {err}"))));
            }
        };
        if response.status.as_u16() != 200 {
            return Err(self.log.record(CheckResult::fail_with(
                name,
                format!("Expected status 200, got {}", response.status.as_u16()),
                json!(response.body_preview()),
            )));
        }
        Self::parse_json(&mut self.log, name, &response)
    }

    /// Parses a response body, recording a failure on invalid JSON.
    fn parse_json(log: &mut ResultLog, name: &str, response: &ApiResponse) -> Result<Value, bool> {
        response.json().map_err(|err| {
            log.record(CheckResult::fail(name, format!("Request failed: {err}")))
        })
    }
}
