//! Resource-specific error types for REST API operations.
//!
//! This module contains error types for REST resource operations, extending
//! the base [`RestError`](crate::clients::RestError) with resource-specific
//! semantics like `NotFound` and `Decode`.
//!
//! # Error Handling
//!
//! Errors fall into three groups:
//!
//! - **Construction**: [`ResourceError::Serialize`] and
//!   [`ResourceError::PathResolutionFailed`] are raised before any request
//!   is sent
//! - **Transport**: [`ResourceError::Rest`] wraps invalid paths, network
//!   failures and non-2xx responses. A 404 on an id-addressed operation
//!   becomes [`ResourceError::NotFound`], with the response as its source
//! - **Decode**: [`ResourceError::Decode`] when a 2xx body does not match
//!   the expected resource shape
//!
//! # Example
//!
//! ```rust,ignore
//! use woocommerce_api::rest::ResourceError;
//!
//! match client.product_tags().get(34).await {
//!     Ok(tag) => println!("Found: {}", tag.name),
//!     Err(ResourceError::NotFound { resource, id, .. }) => {
//!         println!("{} with id {} not found", resource, id);
//!     }
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```

use crate::clients::{HttpError, RestError};
use thiserror::Error;

/// Error type for REST resource operations.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::rest::ResourceError;
/// use woocommerce_api::{HttpError, HttpResponseError, RestError};
///
/// let body = r#"{"code":"woocommerce_rest_term_invalid","message":"Resource does not exist."}"#;
/// let rest = RestError::Http(HttpError::Response(HttpResponseError::from_body(404, body)));
///
/// let error = ResourceError::from_rest_error(rest, "ProductTag", Some("34"));
/// assert_eq!(error.to_string(), "ProductTag with id 34 not found");
/// assert_eq!(error.error_code(), Some("woocommerce_rest_term_invalid"));
/// ```
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The resource was not found (HTTP 404).
    ///
    /// This error is returned when attempting to get, update, or delete
    /// a resource that doesn't exist.
    #[error("{resource} with id {id} not found")]
    NotFound {
        /// The type name of the resource (e.g., "`ProductTag`").
        resource: &'static str,
        /// The ID that was requested.
        id: String,
        /// The 404 response, including the server's error envelope.
        source: RestError,
    },

    /// No valid path matches the provided IDs and operation.
    ///
    /// This error is returned when attempting an operation without
    /// providing the required parent resource IDs.
    #[error("Cannot resolve path for {resource}::{operation} with provided IDs")]
    PathResolutionFailed {
        /// The type name of the resource.
        resource: &'static str,
        /// The operation being attempted (e.g., "get", "list", "delete").
        operation: &'static str,
    },

    /// The request body could not be serialized to JSON.
    #[error("Failed to serialize {resource}: {source}")]
    Serialize {
        /// The type name of the resource.
        resource: &'static str,
        /// The underlying serializer error.
        source: serde_json::Error,
    },

    /// A successful response body did not match the expected shape.
    #[error("Failed to decode {resource} from response with status {status}: {source}")]
    Decode {
        /// The type name of the resource.
        resource: &'static str,
        /// The HTTP status code of the response.
        status: u16,
        /// The underlying deserializer error.
        source: serde_json::Error,
    },

    /// A REST-level error occurred.
    #[error(transparent)]
    Rest(#[from] RestError),
}

impl ResourceError {
    /// Maps a REST client error into a resource error.
    ///
    /// A 404 response on an id-addressed operation becomes
    /// [`ResourceError::NotFound`], which keeps the response as its source;
    /// everything else is wrapped unchanged.
    #[must_use]
    pub fn from_rest_error(error: RestError, resource: &'static str, id: Option<&str>) -> Self {
        match (error.status(), id) {
            (Some(404), Some(id)) => Self::NotFound {
                resource,
                id: id.to_string(),
                source: error,
            },
            _ => Self::Rest(error),
        }
    }

    /// Returns the HTTP status code, when a response was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound { .. } => Some(404),
            Self::Decode { status, .. } => Some(*status),
            Self::Rest(e) => e.status(),
            Self::PathResolutionFailed { .. } | Self::Serialize { .. } => None,
        }
    }

    /// Returns the machine-readable WordPress error code, if the server sent one.
    ///
    /// For example `woocommerce_rest_trash_not_supported` when a tag delete
    /// is attempted without `force`.
    #[must_use]
    pub fn error_code(&self) -> Option<&str> {
        let http = match self {
            Self::Rest(RestError::Http(e))
            | Self::NotFound {
                source: RestError::Http(e),
                ..
            } => e,
            _ => return None,
        };

        match http {
            HttpError::Response(e) => e.error_code.as_deref(),
            _ => None,
        }
    }
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};
