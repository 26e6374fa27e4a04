// crates/catalog-smoke-core/src/client.rs
// ============================================================================
// Module: Catalog Client
// Description: HTTP client for the product catalog REST API.
// Purpose: Issue GET/POST requests with default headers and size limits.
// Dependencies: reqwest, serde_json, thiserror
// ============================================================================

//! ## Overview
//! Wraps a [`reqwest::Client`] with the base URL, default headers, timeout,
//! and response-size limit shared by every smoke check. Responses surface as
//! status plus raw bytes; JSON parsing happens at the call site so shape
//! failures can carry the offending payload as diagnostic data.
//!
//! Security posture: server responses are untrusted; redirects are disabled
//! and oversized bodies fail closed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use reqwest::Client;
use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use reqwest::header::HeaderMap;
use reqwest::header::HeaderValue;
use reqwest::redirect::Policy;
use serde_json::Value;
use thiserror::Error;

use crate::config::SmokeConfig;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Maximum response body size accepted from the catalog API.
pub const MAX_RESPONSE_BYTES: usize = 4 * 1024 * 1024;

/// User agent advertised on every request.
const USER_AGENT: &str = concat!("catalog-smoke/", env!("CARGO_PKG_VERSION"));

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Catalog client errors.
///
/// # Invariants
/// - Variants are stable for harness error mapping and tests.
/// - String payloads are user-facing and may include untrusted server text.
#[derive(Debug, Error)]
pub enum CatalogClientError {
    /// Configuration error.
    #[error("catalog client config error: {0}")]
    Config(String),
    /// Transport error (connection, timeout, protocol).
    #[error("catalog transport error: {0}")]
    Transport(String),
    /// JSON parse error.
    #[error("catalog json error: {0}")]
    Json(String),
    /// Response size exceeds limits.
    #[error("catalog response exceeds size limit ({actual} > {limit})")]
    ResponseTooLarge {
        /// Actual size in bytes.
        actual: usize,
        /// Maximum size in bytes.
        limit: usize,
    },
}

// ============================================================================
// SECTION: Response Type
// ============================================================================

/// Raw response captured from the catalog API.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Raw response body, bounded by [`MAX_RESPONSE_BYTES`].
    pub body: Vec<u8>,
}

impl ApiResponse {
    /// Parses the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogClientError::Json`] when the body is not valid JSON.
    pub fn json(&self) -> Result<Value, CatalogClientError> {
        serde_json::from_slice(&self.body)
            .map_err(|err| CatalogClientError::Json(format!("invalid json body: {err}")))
    }

    /// Returns a lossy text preview of the body for diagnostics.
    #[must_use]
    pub fn body_preview(&self) -> String {
        String::from_utf8_lossy(&self.body).trim().to_string()
    }
}

// ============================================================================
// SECTION: Client
// ============================================================================

/// HTTP client bound to one catalog API base URL.
///
/// # Invariants
/// - `base_url` carries no trailing slash; paths supplied to requests start
///   with `/` or are empty for the API root.
#[derive(Debug)]
pub struct CatalogClient {
    /// Underlying reqwest client with default headers and timeout applied.
    client: Client,
    /// Base URL without trailing slash.
    base_url: String,
}

impl CatalogClient {
    /// Builds a client from smoke run configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogClientError::Config`] when the base URL is empty and
    /// [`CatalogClientError::Transport`] when the HTTP client cannot be built.
    pub fn new(config: &SmokeConfig) -> Result<Self, CatalogClientError> {
        let base_url = config.base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(CatalogClientError::Config("base url must not be empty".to_string()));
        }
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let client = Client::builder()
            .timeout(config.timeout)
            .redirect(Policy::none())
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(|err| CatalogClientError::Transport(err.to_string()))?;
        Ok(Self {
            client,
            base_url,
        })
    }

    /// Returns the base URL this client targets.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the full URL for a request path.
    #[must_use]
    pub fn request_url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Issues a GET request against a path under the base URL.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogClientError`] when the request fails or the body
    /// exceeds [`MAX_RESPONSE_BYTES`]. Non-2xx statuses are not errors; they
    /// surface in the returned [`ApiResponse`].
    pub async fn get(&self, path: &str) -> Result<ApiResponse, CatalogClientError> {
        let request = self.client.get(self.request_url(path));
        Self::execute(request).await
    }

    /// Issues a POST request with an empty body against a path.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogClientError`] when the request fails or the body
    /// exceeds [`MAX_RESPONSE_BYTES`].
    pub async fn post(&self, path: &str) -> Result<ApiResponse, CatalogClientError> {
        let request = self.client.post(self.request_url(path));
        Self::execute(request).await
    }

    /// Sends a prepared request and captures the bounded response.
    async fn execute(
        request: reqwest::RequestBuilder,
    ) -> Result<ApiResponse, CatalogClientError> {
        let response = request
            .send()
            .await
            .map_err(|err| CatalogClientError::Transport(err.to_string()))?;
        let status = response.status();
        let body = read_response_body_with_limit(response, MAX_RESPONSE_BYTES).await?;
        Ok(ApiResponse {
            status,
            body,
        })
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Reads a response body while enforcing a byte limit.
async fn read_response_body_with_limit(
    mut response: reqwest::Response,
    limit: usize,
) -> Result<Vec<u8>, CatalogClientError> {
    let mut body = Vec::new();
    let mut total: usize = 0;
    while let Some(chunk) =
        response.chunk().await.map_err(|err| CatalogClientError::Transport(err.to_string()))?
    {
        let next_total =
            total.checked_add(chunk.len()).ok_or(CatalogClientError::ResponseTooLarge {
                actual: usize::MAX,
                limit,
            })?;
        if next_total > limit {
            return Err(CatalogClientError::ResponseTooLarge {
                actual: next_total,
                limit,
            });
        }
        body.extend_from_slice(&chunk);
        total = next_total;
    }
    Ok(body)
}
