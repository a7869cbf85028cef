//! REST client implementation for the WooCommerce REST API.
//!
//! This module provides the [`RestClient`] type for making REST API requests
//! with path normalization against the configured API namespace.

use std::collections::HashMap;

use crate::clients::rest::RestError;
use crate::clients::{DataType, HttpClient, HttpMethod, HttpRequest, HttpResponse};
use crate::config::{ApiVersion, WooCommerceConfig};

/// REST API client for the WooCommerce REST API.
///
/// Provides convenient methods (`get`, `post`, `put`, `delete`) for making
/// REST API requests. Paths are relative to `/wp-json/{api_version}`.
///
/// The resource services ([`ProductTagService`](crate::rest::resources::wc_v3::ProductTagService),
/// [`ProductVariationService`](crate::rest::resources::wc_v3::ProductVariationService))
/// borrow a `RestClient`; one client can back any number of services.
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use woocommerce_api::{RestClient, WooCommerceConfig, StoreUrl};
///
/// let config = WooCommerceConfig::builder()
///     .store_url(StoreUrl::new("https://shop.example.com").unwrap())
///     .build()
///     .unwrap();
///
/// let client = RestClient::new(&config)?;
///
/// let response = client.get("products/tags", None).await?;
///
/// let body = serde_json::json!({"name": "Featured"});
/// let response = client.post("products/tags", body, None).await?;
/// ```
#[derive(Debug)]
pub struct RestClient {
    http_client: HttpClient,
    api_version: ApiVersion,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new REST client using the configured API version.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if the underlying HTTP client cannot be
    /// built.
    pub fn new(config: &WooCommerceConfig) -> Result<Self, RestError> {
        Self::create_client(config, config.api_version().clone())
    }

    /// Creates a new REST client with a specific API version override.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if the underlying HTTP client cannot be
    /// built.
    pub fn with_version(
        config: &WooCommerceConfig,
        version: ApiVersion,
    ) -> Result<Self, RestError> {
        let cfg_version = config.api_version();
        if &version == cfg_version {
            tracing::debug!(
                "Rest client has a redundant API version override to the default {}",
                cfg_version
            );
        } else {
            tracing::debug!(
                "Rest client overriding default API version {} with {}",
                cfg_version,
                version
            );
        }

        Self::create_client(config, version)
    }

    fn create_client(
        config: &WooCommerceConfig,
        api_version: ApiVersion,
    ) -> Result<Self, RestError> {
        let base_path = format!("/wp-json/{api_version}");
        let http_client = HttpClient::new(base_path, config)?;

        Ok(Self {
            http_client,
            api_version,
        })
    }

    /// Returns the API version being used by this client.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Sends a GET request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid (e.g., empty).
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn get(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Get, path, None, query).await
    }

    /// Sends a POST request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn post(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Post, path, Some(body), query)
            .await
    }

    /// Sends a PUT request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn put(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Put, path, Some(body), query)
            .await
    }

    /// Sends a DELETE request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn delete(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Delete, path, None, query)
            .await
    }

    /// Sends a request with an explicit method.
    ///
    /// Resource operations dispatch through here with the method declared
    /// on their path table.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub(crate) async fn make_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        let normalized_path = normalize_path(path)?;

        let mut builder = HttpRequest::builder(method, normalized_path);

        if let Some(body_value) = body {
            builder = builder.body(body_value).body_type(DataType::Json);
        }

        if let Some(query_params) = query {
            builder = builder.query(query_params);
        }

        let request = builder.build().map_err(|e| RestError::Http(e.into()))?;

        self.http_client.request(request).await.map_err(Into::into)
    }
}

/// Normalizes a REST API path.
///
/// Strips leading and trailing `/` characters and rejects paths that are
/// empty afterwards.
fn normalize_path(path: &str) -> Result<String, RestError> {
    let trimmed = path.trim().trim_matches('/');

    if trimmed.is_empty() {
        return Err(RestError::InvalidPath {
            path: path.to_string(),
        });
    }

    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreUrl;

    fn create_config() -> WooCommerceConfig {
        WooCommerceConfig::builder()
            .store_url(StoreUrl::new("https://shop.example.com").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_normalize_path_strips_slashes() {
        assert_eq!(normalize_path("/products/tags").unwrap(), "products/tags");
        assert_eq!(normalize_path("products/tags/").unwrap(), "products/tags");
        assert_eq!(normalize_path("//products/tags//").unwrap(), "products/tags");
    }

    #[test]
    fn test_normalize_path_keeps_nested_segments() {
        assert_eq!(
            normalize_path("products/42/variations/batch").unwrap(),
            "products/42/variations/batch"
        );
    }

    #[test]
    fn test_normalize_path_empty_path_returns_error() {
        assert!(matches!(
            normalize_path(""),
            Err(RestError::InvalidPath { path }) if path.is_empty()
        ));
        assert!(matches!(
            normalize_path("/"),
            Err(RestError::InvalidPath { path }) if path == "/"
        ));
    }

    #[test]
    fn test_rest_client_new_uses_config_version() {
        let client = RestClient::new(&create_config()).unwrap();
        assert_eq!(client.api_version(), &ApiVersion::V3);
        assert_eq!(client.http_client().base_path(), "/wp-json/wc/v3");
    }

    #[test]
    fn test_rest_client_with_version_overrides_config() {
        let client = RestClient::with_version(&create_config(), ApiVersion::V2).unwrap();
        assert_eq!(client.api_version(), &ApiVersion::V2);
        assert_eq!(client.http_client().base_path(), "/wp-json/wc/v2");
    }

    #[test]
    fn test_rest_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RestClient>();
    }
}
