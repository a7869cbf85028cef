//! Batch request and response envelopes.
//!
//! WooCommerce accepts up to 100 combined create, update and delete items in
//! a single `POST {collection}/batch` call. Each item succeeds or fails on
//! its own; failures come back in place as `{"id": .., "error": {..}}`
//! objects and are passed through as [`BatchResult::Failed`].

use serde::{Deserialize, Serialize};

/// Body of a batch call: records to create, records to update (each
/// carrying its `id`), and ids to delete.
///
/// Empty groups are omitted from the request JSON.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::rest::BatchRequest;
/// use serde_json::json;
///
/// let request: BatchRequest<serde_json::Value> = BatchRequest::new()
///     .create(vec![json!({"name": "Round toe"})])
///     .delete(vec![35]);
///
/// assert_eq!(
///     serde_json::to_value(&request).unwrap(),
///     json!({"create": [{"name": "Round toe"}], "delete": [35]})
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchRequest<T> {
    /// Records to create.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create: Option<Vec<T>>,
    /// Records to update; each must carry its `id`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update: Option<Vec<T>>,
    /// Ids of records to delete.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete: Option<Vec<u64>>,
}

impl<T> Default for BatchRequest<T> {
    fn default() -> Self {
        Self {
            create: None,
            update: None,
            delete: None,
        }
    }
}

impl<T> BatchRequest<T> {
    /// Creates an empty batch request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the records to create.
    #[must_use]
    pub fn create(mut self, items: Vec<T>) -> Self {
        self.create = Some(items);
        self
    }

    /// Sets the records to update.
    #[must_use]
    pub fn update(mut self, items: Vec<T>) -> Self {
        self.update = Some(items);
        self
    }

    /// Sets the ids to delete.
    #[must_use]
    pub fn delete(mut self, ids: Vec<u64>) -> Self {
        self.delete = Some(ids);
        self
    }

    /// Returns `true` if no group carries any item.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.create.as_ref().map_or(true, Vec::is_empty)
            && self.update.as_ref().map_or(true, Vec::is_empty)
            && self.delete.as_ref().map_or(true, Vec::is_empty)
    }
}

/// Per-group outcomes of a batch call, in request order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchResponse<T> {
    /// Outcomes of the `create` group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create: Option<Vec<BatchResult<T>>>,
    /// Outcomes of the `update` group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update: Option<Vec<BatchResult<T>>>,
    /// Outcomes of the `delete` group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete: Option<Vec<BatchResult<T>>>,
}

impl<T> BatchResponse<T> {
    /// Iterates over every failed item across all groups.
    pub fn failures(&self) -> impl Iterator<Item = (Option<u64>, &BatchItemError)> {
        [&self.create, &self.update, &self.delete]
            .into_iter()
            .flatten()
            .flatten()
            .filter_map(BatchResult::as_failure)
    }
}

/// Outcome of a single batch item.
///
/// Variant order matters for decoding: an object carrying an `error` member
/// is a failure; anything else decodes as the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BatchResult<T> {
    /// The item was rejected.
    Failed {
        /// The id the item referred to (`0` for failed creates).
        id: Option<u64>,
        /// Why the item was rejected.
        error: BatchItemError,
    },
    /// The item was applied; the server's view of the record.
    Ok(T),
}

impl<T> BatchResult<T> {
    /// Returns `true` if the item was applied.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns the applied record, if any.
    #[must_use]
    pub const fn as_ok(&self) -> Option<&T> {
        match self {
            Self::Ok(record) => Some(record),
            Self::Failed { .. } => None,
        }
    }

    /// Returns the id and error of a rejected item.
    #[must_use]
    pub const fn as_failure(&self) -> Option<(Option<u64>, &BatchItemError)> {
        match self {
            Self::Failed { id, error } => Some((*id, error)),
            Self::Ok(_) => None,
        }
    }
}

/// Error object attached to a rejected batch item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchItemError {
    /// Machine-readable error code (e.g. `woocommerce_rest_term_invalid`).
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Extra data; usually `{"status": 400}`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl BatchItemError {
    /// The HTTP status the server assigned to this item, if present.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        self.data
            .as_ref()
            .and_then(|d| d.get("status"))
            .and_then(serde_json::Value::as_u64)
            .and_then(|s| u16::try_from(s).ok())
    }
}
