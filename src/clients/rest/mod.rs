//! REST API client for the WooCommerce REST API.
//!
//! This module provides a higher-level REST API client built on top of the
//! [`HttpClient`](crate::clients::HttpClient) that offers convenient methods
//! for interacting with a store's `/wp-json/{version}` endpoints.
//!
//! # Overview
//!
//! - [`RestClient`]: The REST API client with `get()`, `post()`, `put()`, `delete()` methods
//! - [`RestError`]: Error type for REST API operations
//!
//! # Example
//!
//! ```rust,ignore
//! use woocommerce_api::{RestClient, WooCommerceConfig, StoreUrl};
//!
//! let config = WooCommerceConfig::builder()
//!     .store_url(StoreUrl::new("https://shop.example.com").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = RestClient::new(&config)?;
//!
//! let response = client.get("products/tags", None).await?;
//! println!("Tags: {}", response.body);
//! ```
//!
//! # Path Normalization
//!
//! - Leading and trailing slashes are stripped: `/products/tags/` -> `products/tags`
//! - Empty paths are rejected with [`RestError::InvalidPath`]

mod client;
mod errors;

pub use client::RestClient;
pub use errors::RestError;
