// system-tests/src/fixtures.rs
// ============================================================================
// Module: Product Fixtures
// Description: Canonical product payloads for stub catalogs.
// Purpose: Keep stub responses aligned with harness shape expectations.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! Fixture products carry every field the harness requires. The default
//! catalog holds eight products, two per category, matching the seed contract
//! of the real service.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;
use serde_json::json;

// ============================================================================
// SECTION: Fixtures
// ============================================================================

/// Number of products in the default seeded catalog.
pub const SEED_CATALOG_SIZE: usize = 8;

/// Builds one product payload carrying every required field.
#[must_use]
pub fn product(id: &str, name: &str, category: &str, price: f64) -> Value {
    json!({
        "id": id,
        "name": name,
        "category": category,
        "price": price,
        "description": format!("{name} with the usual retail blurb"),
        "image": format!("https://cdn.example.invalid/{id}.png"),
        "features": ["fast", "shiny"],
        "colors": ["black", "silver"],
    })
}

/// Builds the default eight-product catalog, two products per category.
#[must_use]
pub fn seed_catalog() -> Vec<Value> {
    vec![
        product("phone-classic", "Phone Classic", "phone", 799.0),
        product("phone-max", "Phone Max", "phone", 1099.0),
        product("laptop-air", "Laptop Air", "laptop", 1299.0),
        product("laptop-pro", "Laptop Pro", "laptop", 1999.0),
        product("tablet-mini", "Tablet Mini", "tablet", 499.0),
        product("tablet-pro", "Tablet Pro", "tablet", 899.0),
        product("watch-sport", "Watch Sport", "watch", 299.0),
        product("watch-ultra", "Watch Ultra", "watch", 799.0),
    ]
}
