//! HTTP client for WooCommerce REST API communication.
//!
//! This module provides the [`HttpClient`] type that executes requests
//! against a store's `/wp-json/{version}` endpoint.

use std::collections::HashMap;

use crate::clients::errors::{HttpError, HttpResponseError, MalformedBodyError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::WooCommerceConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the WooCommerce REST API.
///
/// The client handles:
/// - Base URI construction from the configured store URL
/// - Default headers including `User-Agent` and `Accept`
/// - JSON body parsing and WordPress error envelope extraction
///
/// Each call to [`request`](Self::request) is exactly one HTTP exchange.
/// There is no retry, caching, or rate limiting; timeouts are whatever the
/// underlying `reqwest` client applies.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use woocommerce_api::{HttpClient, HttpRequest, HttpMethod, WooCommerceConfig, StoreUrl};
///
/// let config = WooCommerceConfig::builder()
///     .store_url(StoreUrl::new("https://shop.example.com").unwrap())
///     .build()
///     .unwrap();
///
/// let client = HttpClient::new("/wp-json/wc/v3", &config)?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "products/tags")
///     .build()
///     .unwrap();
///
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    /// Base URI (e.g., `https://shop.example.com`).
    base_uri: String,
    /// Base path (e.g., `/wp-json/wc/v3`).
    base_path: String,
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the configured store.
    ///
    /// # Arguments
    ///
    /// * `base_path` - The base path for API requests (e.g., `/wp-json/wc/v3`)
    /// * `config` - Configuration providing the store URL and `user_agent_prefix`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be built, e.g. when TLS initialization fails.
    pub fn new(
        base_path: impl Into<String>,
        config: &WooCommerceConfig,
    ) -> Result<Self, HttpError> {
        let base_path = base_path.into();
        let base_uri = config.store_url().as_ref().to_string();

        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}WooCommerce API Library v{SDK_VERSION} | Rust {rust_version}"
        );

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        Ok(Self {
            client,
            base_uri,
            base_path,
            default_headers,
        })
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the base path for this client.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends an HTTP request to the WooCommerce REST API.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`), before any network call
    /// - A network error occurs (`Network`)
    /// - A non-2xx response is received (`Response`)
    /// - A 2xx response body is not valid JSON (`MalformedBody`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = format!("{}{}/{}", self.base_uri, self.base_path, request.path);

        let mut headers = self.default_headers.clone();
        if let Some(body_type) = &request.body_type {
            headers.insert(
                "Content-Type".to_string(),
                body_type.as_content_type().to_string(),
            );
        }

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        tracing::debug!(
            method = %request.http_method,
            path = %request.path,
            "Sending WooCommerce API request"
        );

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;

        if !(200..=299).contains(&code) {
            let error = HttpResponseError::from_body(code, &body_text);
            tracing::warn!(
                status = code,
                error_code = error.error_code.as_deref().unwrap_or_default(),
                "WooCommerce API request to {} failed: {}",
                request.path,
                error.message
            );
            return Err(error.into());
        }

        let body = if body_text.trim().is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&body_text).map_err(|e| MalformedBodyError {
                code,
                message: e.to_string(),
            })?
        };

        Ok(HttpResponse::new(code, res_headers, body))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
