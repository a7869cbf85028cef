//! Query parameter values shared by list operations.

use serde::{Deserialize, Serialize};

/// Scope under which the request is made; determines which fields are
/// present in the response.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Context {
    /// Public view.
    #[default]
    View,
    /// Editing view, with every writable field.
    Edit,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    /// Ascending.
    Asc,
    /// Descending.
    #[default]
    Desc,
}
