//! Configuration types for the WooCommerce API SDK.
//!
//! This module provides the core configuration types used to initialize
//! the SDK for API communication with a WooCommerce store.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`WooCommerceConfig`]: The main configuration struct holding all SDK settings
//! - [`WooCommerceConfigBuilder`]: A builder for constructing [`WooCommerceConfig`] instances
//! - [`StoreUrl`]: A validated store root URL
//! - [`ApiVersion`]: The WooCommerce REST API namespace to use
//!
//! # Example
//!
//! ```rust
//! use woocommerce_api::{WooCommerceConfig, StoreUrl, ApiVersion};
//!
//! let config = WooCommerceConfig::builder()
//!     .store_url(StoreUrl::new("https://shop.example.com").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;
mod version;

pub use newtypes::StoreUrl;
pub use version::ApiVersion;

use crate::error::ConfigError;

/// Configuration for the WooCommerce API SDK.
///
/// # Thread Safety
///
/// `WooCommerceConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::{WooCommerceConfig, StoreUrl};
///
/// let config = WooCommerceConfig::builder()
///     .store_url(StoreUrl::new("https://shop.example.com").unwrap())
///     .user_agent_prefix("MyApp/1.0")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
/// ```
#[derive(Clone, Debug)]
pub struct WooCommerceConfig {
    store_url: StoreUrl,
    api_version: ApiVersion,
    user_agent_prefix: Option<String>,
}

impl WooCommerceConfig {
    /// Creates a new builder for constructing a `WooCommerceConfig`.
    #[must_use]
    pub fn builder() -> WooCommerceConfigBuilder {
        WooCommerceConfigBuilder::new()
    }

    /// Returns the store URL.
    #[must_use]
    pub const fn store_url(&self) -> &StoreUrl {
        &self.store_url
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify WooCommerceConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<WooCommerceConfig>();
};

/// Builder for constructing [`WooCommerceConfig`] instances.
///
/// The only required field is `store_url`.
///
/// # Defaults
///
/// - `api_version`: Latest stable version (`wc/v3`)
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct WooCommerceConfigBuilder {
    store_url: Option<StoreUrl>,
    api_version: Option<ApiVersion>,
    user_agent_prefix: Option<String>,
}

impl WooCommerceConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the store URL (required).
    #[must_use]
    pub fn store_url(mut self, url: StoreUrl) -> Self {
        self.store_url = Some(url);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets a prefix for the `User-Agent` header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`WooCommerceConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `store_url` is not set.
    pub fn build(self) -> Result<WooCommerceConfig, ConfigError> {
        let store_url = self
            .store_url
            .ok_or(ConfigError::MissingRequiredField { field: "store_url" })?;

        Ok(WooCommerceConfig {
            store_url,
            api_version: self.api_version.unwrap_or_else(ApiVersion::latest),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
