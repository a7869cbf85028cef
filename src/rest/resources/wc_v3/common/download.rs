//! Downloadable files.

use serde::{Deserialize, Serialize};

/// A file offered by a downloadable variation.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Download {
    /// File id. The API uses string ids (an MD5 hash) for downloads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// File name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// File URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}
