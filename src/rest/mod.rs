//! REST Resource infrastructure for the WooCommerce API.
//!
//! This module provides the foundational infrastructure for REST resources with:
//!
//! - **[`RestResource`] trait**: A standardized interface for CRUD and batch operations
//! - **[`ResourceResponse<T>`]**: A Deref-based wrapper carrying collection metadata
//! - **[`BatchRequest`] / [`BatchResponse`]**: Batch envelopes shared by all resources
//! - **Path building**: Nested path support for sub-resources
//! - **[`ResourceError`]**: Semantic error types for resource operations
//!
//! Individual resources live in the [`resources`] submodule, grouped by API
//! version.
//!
//! # Example
//!
//! ```rust,ignore
//! use woocommerce_api::{RestClient, WooCommerceConfig, StoreUrl};
//! use woocommerce_api::rest::resources::wc_v3::ProductTag;
//!
//! let config = WooCommerceConfig::builder()
//!     .store_url(StoreUrl::new("https://shop.example.com")?)
//!     .build()?;
//! let client = RestClient::new(&config)?;
//!
//! let tag = ProductTag { name: Some("Featured".into()), ..Default::default() };
//! let created = client.product_tags().create(&tag).await?;
//! println!("Created tag {:?}", created.id);
//!
//! let tags = client.product_tags().list(None).await?;
//! for tag in tags.iter() {
//!     println!("- {:?}", tag.name);
//! }
//! ```

mod batch;
mod errors;
mod path;
mod resource;
mod response;

pub mod resources;

pub use batch::{BatchItemError, BatchRequest, BatchResponse, BatchResult};
pub use errors::ResourceError;
pub use path::{build_path, get_path, ResourceOperation, ResourcePath};
pub use resource::RestResource;
pub use response::ResourceResponse;
