//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated WooCommerce store URL.
///
/// The store URL is the root of the WordPress site hosting WooCommerce
/// (e.g., `https://shop.example.com`). The REST API lives beneath it at
/// `/wp-json/{version}`.
///
/// # Validation
///
/// - The scheme must be `http` or `https`
/// - The host must be non-empty
/// - Surrounding whitespace and trailing slashes are removed
///
/// # Example
///
/// ```rust
/// use woocommerce_api::StoreUrl;
///
/// let url = StoreUrl::new("https://shop.example.com/").unwrap();
/// assert_eq!(url.as_ref(), "https://shop.example.com");
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), "shop.example.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl StoreUrl {
    /// Creates a new validated store URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidStoreUrl`] if the URL is invalid.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = url.into();
        let url = raw.trim().trim_end_matches('/').to_string();
        let invalid = || ConfigError::InvalidStoreUrl { url: raw.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        let scheme = &url[..scheme_end];
        if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
            return Err(invalid());
        }

        let host_start = scheme_end + 3;
        if host_start >= url.len() {
            return Err(invalid());
        }

        // Host ends at port, path, query, or end of string
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        let host = &url[host_start..host_end];
        if host.is_empty() || host.contains(char::is_whitespace) {
            return Err(invalid());
        }

        // Query strings and fragments have no meaning on a base URL
        if url[host_end..].contains(['?', '#']) {
            return Err(invalid());
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }
}

impl AsRef<str> for StoreUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for StoreUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

impl Serialize for StoreUrl {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.url)
    }
}

impl<'de> Deserialize<'de> for StoreUrl {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_url_accepts_https() {
        let url = StoreUrl::new("https://shop.example.com").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_name(), "shop.example.com");
    }

    #[test]
    fn test_store_url_accepts_http_with_port() {
        let url = StoreUrl::new("http://127.0.0.1:8080").unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_name(), "127.0.0.1");
        assert_eq!(url.as_ref(), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_store_url_keeps_subdirectory_install() {
        let url = StoreUrl::new("https://example.com/shop/").unwrap();
        assert_eq!(url.as_ref(), "https://example.com/shop");
        assert_eq!(url.host_name(), "example.com");
    }

    #[test]
    fn test_store_url_trims_whitespace_and_trailing_slashes() {
        let url = StoreUrl::new("  https://shop.example.com//  ").unwrap();
        assert_eq!(url.as_ref(), "https://shop.example.com");
    }

    #[test]
    fn test_store_url_rejects_invalid_values() {
        assert!(StoreUrl::new("").is_err());
        assert!(StoreUrl::new("shop.example.com").is_err());
        assert!(StoreUrl::new("ftp://shop.example.com").is_err());
        assert!(StoreUrl::new("https://").is_err());
        assert!(StoreUrl::new("https:///path").is_err());
        assert!(StoreUrl::new("https://shop.example.com?x=1").is_err());
    }

    #[test]
    fn test_store_url_error_reports_original_input() {
        let result = StoreUrl::new("nope");
        assert!(matches!(
            result,
            Err(ConfigError::InvalidStoreUrl { url }) if url == "nope"
        ));
    }

    #[test]
    fn test_store_url_serde_round_trip_validates() {
        let url = StoreUrl::new("https://shop.example.com").unwrap();
        let json = serde_json::to_string(&url).unwrap();
        assert_eq!(json, r#""https://shop.example.com""#);

        let parsed: StoreUrl = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, url);

        let invalid: Result<StoreUrl, _> = serde_json::from_str(r#""not-a-url""#);
        assert!(invalid.is_err());
    }
}
