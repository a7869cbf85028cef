//! Image references.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// An image attached to a record.
///
/// Send `id` to reuse an existing media library item, or `src` to upload
/// from a URL.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::rest::resources::wc_v3::common::Image;
///
/// let image = Image {
///     src: Some("https://example.com/shoe-red.jpg".to_string()),
///     alt: Some("Red shoe".to_string()),
///     ..Default::default()
/// };
///
/// assert_eq!(
///     serde_json::to_string(&image).unwrap(),
///     r#"{"src":"https://example.com/shoe-red.jpg","alt":"Red shoe"}"#
/// );
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Image {
    /// Media library id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// When the image was created, in the store's timezone.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub date_created: Option<NaiveDateTime>,

    /// When the image was created, as GMT.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub date_created_gmt: Option<NaiveDateTime>,

    /// When the image was last modified, in the store's timezone.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub date_modified: Option<NaiveDateTime>,

    /// When the image was last modified, as GMT.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub date_modified_gmt: Option<NaiveDateTime>,

    /// Image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,

    /// Image name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Alternative text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}
