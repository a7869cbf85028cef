//! Package dimensions.

use serde::{Deserialize, Serialize};

/// Length, width and height of a variation, in the store's dimension unit.
///
/// Values are decimal strings, as the API sends them.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Dimensions {
    /// Length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<String>,

    /// Width.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,

    /// Height.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
}
