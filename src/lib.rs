//! # WooCommerce API Rust SDK
//!
//! A Rust SDK for the WooCommerce REST API, providing type-safe
//! configuration, an async HTTP client, and typed resource services.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`WooCommerceConfig`] and [`WooCommerceConfigBuilder`]
//! - Validated newtypes for the store URL and API version
//! - An async HTTP client that parses the WordPress error envelope and
//!   collection headers
//! - Typed records and services for product tags and product variations,
//!   including batch operations
//!
//! ## Quick Start
//!
//! ```rust
//! use woocommerce_api::{WooCommerceConfig, StoreUrl, ApiVersion, RestClient};
//!
//! let config = WooCommerceConfig::builder()
//!     .store_url(StoreUrl::new("https://shop.example.com").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//!
//! let client = RestClient::new(&config).unwrap();
//! assert_eq!(client.http_client().base_path(), "/wp-json/wc/v3");
//! ```
//!
//! ## Working With Resources
//!
//! ```rust,ignore
//! use woocommerce_api::rest::resources::wc_v3::{ProductTag, ProductVariation};
//! use woocommerce_api::rest::BatchRequest;
//!
//! let tags = client.product_tags();
//! let featured = tags
//!     .create(&ProductTag { name: Some("Featured".into()), ..Default::default() })
//!     .await?;
//!
//! let variations = client.product_variations();
//! let page = variations.list(22, None).await?;
//! println!("{} of {:?} variations", page.len(), page.total());
//!
//! let outcome = tags
//!     .batch(&BatchRequest::new().delete(vec![featured.id.unwrap_or_default()]))
//!     .await?;
//! for (id, error) in outcome.failures() {
//!     println!("item {id:?} failed: {}", error.message);
//! }
//! ```
//!
//! ## Authentication
//!
//! Requests are sent without credentials. Authentication (consumer keys,
//! OAuth 1.0a signing, application passwords) belongs to the transport in
//! front of this client and is not handled here.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio async runtime
//! - **No hidden retries**: Every call is one HTTP exchange; errors go to the caller

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{ApiVersion, StoreUrl, WooCommerceConfig, WooCommerceConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, MalformedBodyError, PaginationInfo, RestClient,
    RestError,
};

// Re-export resource-level types
pub use rest::{BatchRequest, BatchResponse, BatchResult, ResourceError, ResourceResponse};
