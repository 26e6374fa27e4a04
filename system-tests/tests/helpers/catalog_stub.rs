// system-tests/tests/helpers/catalog_stub.rs
// ============================================================================
// Module: Catalog Stub
// Description: In-process stub of the product catalog REST API.
// Purpose: Exercise the smoke harness over real HTTP with fault injection.
// Dependencies: axum, system-tests fixtures, tokio
// ============================================================================

use std::net::TcpListener as StdTcpListener;
use std::sync::Arc;
use std::thread;

use axum::Json;
use axum::Router;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::routing::get;
use axum::routing::post;
use serde_json::Value;
use serde_json::json;
use system_tests::fixtures;
use tokio::runtime::Builder;
use tokio::sync::oneshot;

/// Behavior knobs for one stub catalog instance.
#[derive(Debug, Clone)]
pub struct StubOptions {
    /// Products served by listing and lookup endpoints.
    pub products: Vec<Value>,
    /// Count reported by the seed endpoint.
    pub seed_count: u64,
    /// Serve a non-JSON body from the API root.
    pub root_not_json: bool,
    /// Inject one wrong-category product into this category's listing.
    pub wrong_category_in: Option<String>,
    /// Drop the `error` field from 404 lookup responses.
    pub omit_error_field: bool,
}

impl Default for StubOptions {
    fn default() -> Self {
        Self {
            products: fixtures::seed_catalog(),
            seed_count: 8,
            root_not_json: false,
            wrong_category_in: None,
            omit_error_field: false,
        }
    }
}

/// Handle for the stub catalog server.
pub struct StubCatalogHandle {
    base_url: String,
    shutdown: Option<oneshot::Sender<()>>,
    join: Option<thread::JoinHandle<()>>,
}

impl StubCatalogHandle {
    /// Returns the catalog base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Drop for StubCatalogHandle {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Some(join) = self.join.take() {
            let _ = join.join();
        }
    }
}

/// Spawns a stub catalog server on an ephemeral loopback port.
pub fn spawn_stub_catalog(options: StubOptions) -> Result<StubCatalogHandle, String> {
    let listener = StdTcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("catalog stub bind failed: {err}"))?;
    listener
        .set_nonblocking(true)
        .map_err(|err| format!("catalog stub listener nonblocking failed: {err}"))?;
    let addr =
        listener.local_addr().map_err(|err| format!("catalog stub local addr failed: {err}"))?;
    let base_url = format!("http://{addr}");

    let state = Arc::new(options);
    let app = Router::new()
        .route("/", get(handle_root))
        .route("/products", get(handle_list))
        .route("/products/category/{category}", get(handle_category))
        .route("/products/{id}", get(handle_lookup))
        .route("/products/seed", post(handle_seed))
        .with_state(state);
    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let join = thread::spawn(move || {
        let runtime = match Builder::new_current_thread().enable_all().build() {
            Ok(runtime) => runtime,
            Err(error) => {
                let _ = error;
                return;
            }
        };
        runtime.block_on(async move {
            let listener = match tokio::net::TcpListener::from_std(listener) {
                Ok(listener) => listener,
                Err(error) => {
                    let _ = error;
                    return;
                }
            };
            let server = axum::serve(listener, app).with_graceful_shutdown(async move {
                let _ = shutdown_rx.await;
            });
            let _ = server.await;
        });
    });
    Ok(StubCatalogHandle {
        base_url,
        shutdown: Some(shutdown_tx),
        join: Some(join),
    })
}

/// Serves the API root.
async fn handle_root(State(state): State<Arc<StubOptions>>) -> Response {
    if state.root_not_json {
        (StatusCode::OK, "catalog online").into_response()
    } else {
        Json(json!({"message": "Catalog API ready"})).into_response()
    }
}

/// Serves the full product listing.
async fn handle_list(State(state): State<Arc<StubOptions>>) -> Json<Value> {
    Json(json!({"products": state.products}))
}

/// Serves a category-filtered listing, optionally injecting a mismatch.
async fn handle_category(
    State(state): State<Arc<StubOptions>>,
    Path(category): Path<String>,
) -> Json<Value> {
    let mut products: Vec<Value> = state
        .products
        .iter()
        .filter(|product| product.get("category").and_then(Value::as_str) == Some(&category))
        .cloned()
        .collect();
    if state.wrong_category_in.as_deref() == Some(category.as_str()) {
        let rogue_category = if category == "laptop" { "phone" } else { "laptop" };
        products.push(fixtures::product("rogue-1", "Rogue Product", rogue_category, 1.0));
    }
    Json(json!({"products": products}))
}

/// Serves a single-product lookup with the 404 contract.
async fn handle_lookup(
    State(state): State<Arc<StubOptions>>,
    Path(id): Path<String>,
) -> Response {
    let found = state
        .products
        .iter()
        .find(|product| product.get("id").and_then(Value::as_str) == Some(&id));
    match found {
        Some(product) => Json(json!({"product": product})).into_response(),
        None if state.omit_error_field => {
            (StatusCode::NOT_FOUND, Json(json!({}))).into_response()
        }
        None => {
            (StatusCode::NOT_FOUND, Json(json!({"error": "Product not found"}))).into_response()
        }
    }
}

/// Serves the seed endpoint with the configured count.
async fn handle_seed(State(state): State<Arc<StubOptions>>) -> Json<Value> {
    Json(json!({
        "message": "Products seeded successfully",
        "count": state.seed_count,
        "products": state.products,
    }))
}
