//! Custom metadata entries.

use serde::{Deserialize, Serialize};

/// A custom `key`/`value` entry stored against a record.
///
/// Values are arbitrary JSON; plugins store strings, numbers and nested
/// objects alike.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct MetaData {
    /// Meta id. Send it to update an existing entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Meta key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Meta value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}
