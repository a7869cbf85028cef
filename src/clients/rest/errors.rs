//! REST-specific error types for the WooCommerce API SDK.
//!
//! - [`RestError::InvalidPath`]: When a REST API path fails validation
//! - [`RestError::Http`]: Wraps underlying HTTP errors
//!
//! # Example
//!
//! ```rust,ignore
//! use woocommerce_api::clients::rest::{RestClient, RestError};
//!
//! match client.get("products/tags", None).await {
//!     Ok(response) => println!("Tags: {}", response.body),
//!     Err(RestError::InvalidPath { path }) => {
//!         println!("Invalid path: {}", path);
//!     }
//!     Err(RestError::Http(e)) => {
//!         println!("HTTP error: {}", e);
//!     }
//! }
//! ```

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for REST API operations.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::clients::rest::RestError;
///
/// let error = RestError::InvalidPath { path: "".to_string() };
/// assert!(error.to_string().contains("Invalid"));
/// ```
#[derive(Debug, Error)]
pub enum RestError {
    /// The REST API path is invalid.
    ///
    /// This error is returned when a path is empty after normalization.
    #[error("Invalid REST API path: {path}")]
    InvalidPath {
        /// The invalid path that was provided.
        path: String,
    },

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl RestError {
    /// Returns the HTTP status code, when a response was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status(),
            Self::InvalidPath { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpResponseError;

    #[test]
    fn test_invalid_path_error_includes_path_in_message() {
        let error = RestError::InvalidPath {
            path: "//".to_string(),
        };
        let message = error.to_string();

        assert!(message.contains("Invalid REST API path"));
        assert!(message.contains("//"));
        assert!(error.status().is_none());
    }

    #[test]
    fn test_from_http_error_conversion() {
        let http_error = HttpError::Response(HttpResponseError::from_body(
            500,
            r#"{"code":"internal","message":"Internal Server Error"}"#,
        ));

        let rest_error: RestError = http_error.into();

        assert!(matches!(rest_error, RestError::Http(_)));
        assert_eq!(rest_error.status(), Some(500));
        assert!(rest_error.to_string().contains("Internal Server Error"));
    }
}
