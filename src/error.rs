//! Error types for the WooCommerce API SDK.
//!
//! This module contains error types used throughout the SDK for configuration
//! and validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use woocommerce_api::{StoreUrl, ConfigError};
//!
//! let result = StoreUrl::new("not a url");
//! assert!(matches!(result, Err(ConfigError::InvalidStoreUrl { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Store URL is invalid.
    #[error("Invalid store URL '{url}'. Please provide an http(s) URL with a host (e.g., 'https://shop.example.com').")]
    InvalidStoreUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected format: 'wc/v3' or 'v3'.")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_store_url_error_message() {
        let error = ConfigError::InvalidStoreUrl {
            url: "ftp://nope".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("ftp://nope"));
        assert!(message.contains("http(s) URL"));
    }

    #[test]
    fn test_invalid_api_version_error_message() {
        let error = ConfigError::InvalidApiVersion {
            version: "wc/v9x".to_string(),
        };
        assert!(error.to_string().contains("wc/v9x"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "store_url" };
        let message = error.to_string();
        assert!(message.contains("store_url"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::MissingRequiredField { field: "store_url" };
        let _: &dyn std::error::Error = &error;
    }
}
