//! HTTP client types for WooCommerce REST API communication.
//!
//! This module provides the transport layer the resource services delegate
//! to. It builds requests, executes them, and parses the WordPress response
//! envelope.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client bound to one store
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`DataType`]: Content types for request bodies
//! - [`rest::RestClient`]: Higher-level REST API client
//! - [`rest::RestError`]: REST-specific error types
//!
//! # Example
//!
//! ```rust,ignore
//! use woocommerce_api::{HttpClient, HttpRequest, HttpMethod, WooCommerceConfig, StoreUrl};
//!
//! let config = WooCommerceConfig::builder()
//!     .store_url(StoreUrl::new("https://shop.example.com").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = HttpClient::new("/wp-json/wc/v3", &config)?;
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "products/tags")
//!     .query_param("per_page", "20")
//!     .build()
//!     .unwrap();
//!
//! let response = client.request(request).await?;
//! ```

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError, MalformedBodyError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{HttpResponse, PaginationInfo};

// Re-export REST client types at the clients module level
pub use rest::{RestClient, RestError};
