//! HTTP-specific error types for the WooCommerce API SDK.
//!
//! This module contains error types for HTTP operations, including response
//! errors, undecodable bodies, and request validation failures.
//!
//! # Error Handling
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the API
//! - [`MalformedBodyError`]: A 2xx response whose body is not valid JSON
//! - [`InvalidHttpRequestError`]: When a request fails validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! Nothing here is retried. Every error is handed back to the caller.
//!
//! # Example
//!
//! ```rust,ignore
//! use woocommerce_api::clients::{HttpClient, HttpRequest, HttpMethod, HttpError};
//!
//! match client.request(request).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Response(e)) => {
//!         println!("API error {}: {}", e.code, e.message);
//!     }
//!     Err(HttpError::MalformedBody(e)) => {
//!         println!("Unreadable body with status {}", e.code);
//!     }
//!     Err(HttpError::InvalidRequest(e)) => {
//!         println!("Invalid request: {}", e);
//!     }
//!     Err(HttpError::Network(e)) => {
//!         println!("Network error: {}", e);
//!     }
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request receives a non-successful response.
///
/// WordPress reports REST errors with a JSON envelope:
///
/// ```json
/// {
///   "code": "woocommerce_rest_term_invalid",
///   "message": "Resource does not exist.",
///   "data": { "status": 404 }
/// }
/// ```
///
/// The envelope's `code` and `message` are lifted into this struct. When the
/// body is not an envelope, `message` carries the raw body text instead.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     error_code: Some("woocommerce_rest_term_invalid".to_string()),
///     message: "Resource does not exist.".to_string(),
///     data: None,
/// };
///
/// assert_eq!(
///     error.to_string(),
///     "HTTP 404 (woocommerce_rest_term_invalid): Resource does not exist."
/// );
/// ```
#[derive(Debug, Error)]
#[error("HTTP {code}{}: {message}", .error_code.as_ref().map(|c| format!(" ({c})")).unwrap_or_default())]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The machine-readable WordPress error code, if the body carried one.
    pub error_code: Option<String>,
    /// The human-readable error message.
    pub message: String,
    /// The envelope's `data` member, if present.
    pub data: Option<serde_json::Value>,
}

impl HttpResponseError {
    /// Builds an error from a non-2xx status and its raw body text.
    #[must_use]
    pub fn from_body(code: u16, body_text: &str) -> Self {
        let envelope = serde_json::from_str::<serde_json::Value>(body_text).ok();

        let error_code = envelope
            .as_ref()
            .and_then(|v| v.get("code"))
            .and_then(serde_json::Value::as_str)
            .map(ToString::to_string);

        let message = envelope
            .as_ref()
            .and_then(|v| v.get("message"))
            .and_then(serde_json::Value::as_str)
            .map_or_else(|| body_text.trim().to_string(), ToString::to_string);

        let data = envelope.as_ref().and_then(|v| v.get("data")).cloned();

        Self {
            code,
            error_code,
            message,
            data,
        }
    }
}

/// Error returned when a successful response body cannot be parsed as JSON.
#[derive(Debug, Error)]
#[error("Malformed JSON in response with status {code}: {message}")]
pub struct MalformedBodyError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The parser error message.
    pub message: String,
}

/// Error returned when an HTTP request fails validation.
///
/// This error is raised before a request is sent, so no network call is made.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::MissingBody {
///     method: "post".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "Cannot use post without specifying data.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// A GET or DELETE request carried a body. These endpoints take their
    /// arguments, including `force`, from the query string.
    #[error("Cannot send a body with {method}; use query parameters instead.")]
    UnexpectedBody {
        /// The HTTP method that must not carry a body.
        method: String,
    },

    /// The path is not a route relative to the API namespace.
    #[error("Invalid request path '{path}': expected a relative route without a query string.")]
    MalformedPath {
        /// The rejected path.
        path: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// A 2xx response whose body is not valid JSON.
    #[error(transparent)]
    MalformedBody(#[from] MalformedBodyError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the HTTP status code, when a response was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            Self::MalformedBody(e) => Some(e.code),
            Self::InvalidRequest(_) | Self::Network(_) => None,
        }
    }
}
