//! Path building infrastructure for REST resources.
//!
//! Each resource declares the URL templates it is reachable through, keyed
//! by operation and by the ids each template needs. Sub-resources such as
//! variations declare templates nested under their parent
//! (`products/{product_id}/variations/{id}`).
//!
//! # Path Resolution
//!
//! The path resolution system selects the most specific path whose required
//! ids are all available.
//!
//! # Example
//!
//! ```rust
//! use woocommerce_api::rest::{ResourcePath, ResourceOperation, get_path, build_path};
//! use woocommerce_api::HttpMethod;
//! use std::collections::HashMap;
//!
//! const PATHS: &[ResourcePath] = &[
//!     ResourcePath::new(
//!         HttpMethod::Get,
//!         ResourceOperation::Find,
//!         &["product_id", "id"],
//!         "products/{product_id}/variations/{id}",
//!     ),
//! ];
//!
//! let path = get_path(PATHS, ResourceOperation::Find, &["product_id", "id"]).unwrap();
//!
//! let mut ids = HashMap::new();
//! ids.insert("product_id", "123");
//! ids.insert("id", "456");
//! assert_eq!(build_path(path.template, &ids), "products/123/variations/456");
//! ```

use crate::clients::HttpMethod;
use std::collections::HashMap;
use std::fmt::Display;

/// Operations that can be performed on a REST resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// Find a single resource by ID (GET /resources/{id}).
    Find,
    /// List resources (GET /resources).
    All,
    /// Create a new resource (POST /resources).
    Create,
    /// Update an existing resource (PUT /resources/{id}).
    Update,
    /// Delete a resource (DELETE /resources/{id}).
    Delete,
    /// Create, update and delete in one request (POST /resources/batch).
    Batch,
}

impl ResourceOperation {
    /// Returns the operation name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Find => "find",
            Self::All => "all",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Batch => "batch",
        }
    }
}

/// A path configuration for a REST resource operation.
///
/// Templates use `{id_name}` placeholders for ID interpolation:
/// - `products/tags/{id}` - Single ID
/// - `products/{product_id}/variations/{id}` - Parent and own ID
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePath {
    /// The HTTP method for this path.
    pub http_method: HttpMethod,
    /// The operation this path is used for.
    pub operation: ResourceOperation,
    /// Required ID parameters in order (e.g., `["product_id", "id"]`).
    pub ids: &'static [&'static str],
    /// The URL template with `{id}` placeholders.
    pub template: &'static str,
}

impl ResourcePath {
    /// Creates a new `ResourcePath`.
    ///
    /// This is a `const fn` so paths can be declared as constants.
    #[must_use]
    pub const fn new(
        http_method: HttpMethod,
        operation: ResourceOperation,
        ids: &'static [&'static str],
        template: &'static str,
    ) -> Self {
        Self {
            http_method,
            operation,
            ids,
            template,
        }
    }

    /// Returns the number of required IDs for this path.
    #[must_use]
    pub const fn id_count(&self) -> usize {
        self.ids.len()
    }

    /// Checks if all required IDs are available.
    #[must_use]
    pub fn matches_ids(&self, available_ids: &[&str]) -> bool {
        self.ids.iter().all(|id| available_ids.contains(id))
    }
}

/// Selects the best matching path for an operation.
///
/// Filters paths by operation, keeps those whose required IDs are all
/// available, and returns the one requiring the most IDs.
#[must_use]
pub fn get_path<'a>(
    paths: &'a [ResourcePath],
    operation: ResourceOperation,
    available_ids: &[&str],
) -> Option<&'a ResourcePath> {
    paths
        .iter()
        .filter(|p| p.operation == operation)
        .filter(|p| p.matches_ids(available_ids))
        .max_by_key(|p| p.id_count())
}

/// Builds a URL from a template by interpolating IDs.
///
/// Replaces `{id_name}` placeholders in the template with values from
/// the provided map.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::rest::build_path;
/// use std::collections::HashMap;
///
/// let mut ids = HashMap::new();
/// ids.insert("id", 12);
///
/// assert_eq!(build_path("products/tags/{id}", &ids), "products/tags/12");
/// ```
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn build_path<V: Display>(template: &str, ids: &HashMap<&str, V>) -> String {
    let mut result = template.to_string();

    for (key, value) in ids {
        let placeholder = format!("{{{key}}}");
        result = result.replace(&placeholder, &value.to_string());
    }

    result
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceOperation>();
    assert_send_sync::<ResourcePath>();
};
