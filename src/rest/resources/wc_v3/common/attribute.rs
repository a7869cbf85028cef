//! Variation attributes.

use serde::{Deserialize, Serialize};

/// The option a variation takes for one of its product's attributes.
///
/// Global attributes are identified by `id`; custom (per-product)
/// attributes have `id` 0 and are matched by `name`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct VariationAttribute {
    /// Attribute id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Attribute name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Selected attribute term name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option: Option<String>,
}
