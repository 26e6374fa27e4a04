// crates/catalog-smoke-core/src/shape.rs
// ============================================================================
// Module: Response Shape Validation
// Description: Field-presence and type checks for untrusted API payloads.
// Purpose: Validate catalog responses without full schema enforcement.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! The catalog API returns loosely-typed JSON. Shape validation verifies that
//! a payload contains the expected fields with plausible types before any
//! field is read, and reports which required fields are missing. It does not
//! enforce a full schema.
//!
//! Security posture: payloads are untrusted; lookups never panic on absent or
//! mistyped fields.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

// ============================================================================
// SECTION: Product Shape
// ============================================================================

/// Fields every catalog product must carry.
pub const REQUIRED_PRODUCT_FIELDS: [&str; 8] =
    ["id", "name", "category", "price", "description", "image", "features", "colors"];

/// Catalog categories with stable string forms.
///
/// # Invariants
/// - String forms are lowercase and stable for URL path segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Phone products.
    Phone,
    /// Laptop products.
    Laptop,
    /// Tablet products.
    Tablet,
    /// Watch products.
    Watch,
}

impl Category {
    /// All categories in the fixed check order.
    pub const ALL: [Self; 4] = [Self::Phone, Self::Laptop, Self::Tablet, Self::Watch];

    /// Returns the stable string form used in URL paths and payloads.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::Laptop => "laptop",
            Self::Tablet => "tablet",
            Self::Watch => "watch",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Shape Helpers
// ============================================================================

/// Returns the required fields absent from a JSON object.
///
/// A non-object value is missing every required field.
#[must_use]
pub fn missing_fields(value: &Value, required: &[&str]) -> Vec<String> {
    match value.as_object() {
        Some(map) => required
            .iter()
            .filter(|field| !map.contains_key(**field))
            .map(|field| (*field).to_string())
            .collect(),
        None => required.iter().map(|field| (*field).to_string()).collect(),
    }
}

/// Returns a string field from a JSON object, if present and a string.
#[must_use]
pub fn field_str<'a>(value: &'a Value, name: &str) -> Option<&'a str> {
    value.get(name).and_then(Value::as_str)
}

/// Returns the `products` array from a listing payload, if present.
#[must_use]
pub fn products_array(body: &Value) -> Option<&Vec<Value>> {
    body.get("products").and_then(Value::as_array)
}

/// Collects the distinct `category` values observed across products.
///
/// Products without a string `category` are ignored; the set is informational
/// and sorted for stable reporting.
#[must_use]
pub fn observed_categories(products: &[Value]) -> BTreeSet<String> {
    products
        .iter()
        .filter_map(|product| field_str(product, "category"))
        .map(str::to_string)
        .collect()
}

/// Returns the products whose `category` differs from the expected value.
///
/// A product with a missing or non-string `category` counts as mismatched.
#[must_use]
pub fn wrong_category_products(products: &[Value], expected: Category) -> Vec<Value> {
    products
        .iter()
        .filter(|product| field_str(product, "category") != Some(expected.as_str()))
        .cloned()
        .collect()
}
