//! Hypermedia links attached to every record.

use serde::{Deserialize, Serialize};

/// A single hyperlink.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Link {
    /// The target URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// The `_links` block of a record.
///
/// Server-generated. Records skip it when serializing, so it never
/// appears in request bodies.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::rest::resources::wc_v3::common::ResourceLinks;
///
/// let links: ResourceLinks = serde_json::from_str(
///     r#"{"self":[{"href":"https://shop.example.com/wp-json/wc/v3/products/tags/34"}],
///         "collection":[{"href":"https://shop.example.com/wp-json/wc/v3/products/tags"}]}"#,
/// ).unwrap();
///
/// assert_eq!(links.self_link(), Some("https://shop.example.com/wp-json/wc/v3/products/tags/34"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ResourceLinks {
    /// Links to the record itself.
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_: Option<Vec<Link>>,

    /// Links to the collection the record belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection: Option<Vec<Link>>,

    /// Links to the parent record (variations point at their product).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub up: Option<Vec<Link>>,
}

impl ResourceLinks {
    /// The first `self` URL, if any.
    #[must_use]
    pub fn self_link(&self) -> Option<&str> {
        first_href(self.self_.as_deref())
    }

    /// The first `collection` URL, if any.
    #[must_use]
    pub fn collection_link(&self) -> Option<&str> {
        first_href(self.collection.as_deref())
    }
}

fn first_href(links: Option<&[Link]>) -> Option<&str> {
    links?.first()?.href.as_deref()
}
