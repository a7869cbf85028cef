//! Response wrapper for REST resource operations.
//!
//! This module provides [`ResourceResponse<T>`], a wrapper that combines
//! resource data with response metadata: the status code and the WordPress
//! collection headers. The wrapper implements `Deref` for ergonomic access
//! to the inner data.
//!
//! # Deref Pattern
//!
//! `ResourceResponse<T>` implements `Deref<Target = T>`, which means you can
//! use it like the inner type directly:
//!
//! ```rust,ignore
//! let tags = client.product_tags().list(None).await?;
//!
//! for tag in tags.iter() {
//!     println!("{}", tag.name.as_deref().unwrap_or_default());
//! }
//!
//! println!("Showing {} of {:?}", tags.len(), tags.total());
//!
//! if let Some(page) = tags.next_page() {
//!     // Fetch the next page with `page`...
//! }
//! ```

use std::ops::{Deref, DerefMut};

use serde::de::DeserializeOwned;

use crate::clients::{HttpResponse, PaginationInfo};
use crate::rest::ResourceError;

/// A response from a REST resource operation.
///
/// # Type Parameters
///
/// * `T` - The type of data contained in the response. For single resources
///   this is the resource type (e.g., `ProductTag`). For collections, this is
///   `Vec<ResourceType>`. For batch calls, a `BatchResponse`.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::rest::ResourceResponse;
/// use woocommerce_api::PaginationInfo;
///
/// let response = ResourceResponse::new(
///     vec!["item1", "item2", "item3"],
///     200,
///     Some(12),
///     Some(4),
///     PaginationInfo { prev_page: Some(1), next_page: Some(3) },
/// );
///
/// assert_eq!(response.len(), 3);
/// assert_eq!(response[0], "item1");
/// assert_eq!(response.next_page(), Some(3));
/// assert!(response.has_prev_page());
/// ```
#[derive(Debug, Clone)]
pub struct ResourceResponse<T> {
    data: T,
    status: u16,
    total: Option<u64>,
    total_pages: Option<u32>,
    pagination: PaginationInfo,
}

impl<T> ResourceResponse<T> {
    /// Creates a new `ResourceResponse` with the given data and metadata.
    #[must_use]
    pub const fn new(
        data: T,
        status: u16,
        total: Option<u64>,
        total_pages: Option<u32>,
        pagination: PaginationInfo,
    ) -> Self {
        Self {
            data,
            status,
            total,
            total_pages,
            pagination,
        }
    }

    /// Consumes the response and returns the inner data.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.data
    }

    /// Returns a reference to the inner data.
    #[must_use]
    pub const fn data(&self) -> &T {
        &self.data
    }

    /// Returns a mutable reference to the inner data.
    #[must_use]
    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    /// Returns the HTTP status code of the response.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Total number of records in the collection (`X-WP-Total`).
    #[must_use]
    pub const fn total(&self) -> Option<u64> {
        self.total
    }

    /// Total number of pages in the collection (`X-WP-TotalPages`).
    #[must_use]
    pub const fn total_pages(&self) -> Option<u32> {
        self.total_pages
    }

    /// Returns the pagination info parsed from the `Link` header.
    #[must_use]
    pub const fn pagination(&self) -> &PaginationInfo {
        &self.pagination
    }

    /// Returns `true` if there is a next page of results.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.pagination.next_page.is_some()
    }

    /// Returns `true` if there is a previous page of results.
    #[must_use]
    pub const fn has_prev_page(&self) -> bool {
        self.pagination.prev_page.is_some()
    }

    /// The `page` value for the next page, if available.
    #[must_use]
    pub const fn next_page(&self) -> Option<u32> {
        self.pagination.next_page
    }

    /// The `page` value for the previous page, if available.
    #[must_use]
    pub const fn prev_page(&self) -> Option<u32> {
        self.pagination.prev_page
    }

    /// Maps the inner data to a new type, preserving metadata.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> ResourceResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ResourceResponse {
            data: f(self.data),
            status: self.status,
            total: self.total,
            total_pages: self.total_pages,
            pagination: self.pagination,
        }
    }
}

impl<T: DeserializeOwned> ResourceResponse<T> {
    /// Creates a `ResourceResponse` by decoding an HTTP response body.
    ///
    /// WooCommerce returns resources at the top level of the body, so the
    /// whole body is decoded into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Decode`] if the body does not match `T`.
    pub fn from_http_response(
        response: HttpResponse,
        resource: &'static str,
    ) -> Result<Self, ResourceError> {
        let status = response.code;

        let data: T = serde_json::from_value(response.body).map_err(|source| {
            tracing::warn!(resource, status, error = %source, "Failed to decode response body");
            ResourceError::Decode {
                resource,
                status,
                source,
            }
        })?;

        Ok(Self {
            data,
            status,
            total: response.total,
            total_pages: response.total_pages,
            pagination: response.pagination,
        })
    }
}

impl<T> Deref for ResourceResponse<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T> DerefMut for ResourceResponse<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

// Verify ResourceResponse is Send + Sync when T is Send + Sync
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceResponse<String>>();
    assert_send_sync::<ResourceResponse<Vec<String>>>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;
    use std::collections::HashMap;

    #[derive(Debug, Clone, Deserialize, PartialEq)]
    struct TestTag {
        id: u64,
        name: String,
    }

    fn plain<T>(data: T) -> ResourceResponse<T> {
        ResourceResponse::new(data, 200, None, None, PaginationInfo::default())
    }

    #[test]
    fn test_deref_allows_direct_access_to_inner_data() {
        let response = plain(vec!["item1", "item2", "item3"]);

        assert_eq!(response.len(), 3);
        assert!(!response.is_empty());
        assert_eq!(response.first(), Some(&"item1"));
    }

    #[test]
    fn test_deref_mut_allows_mutable_access() {
        let mut response = plain(vec!["item1", "item2"]);

        response.push("item3");
        response[0] = "modified";

        assert_eq!(response.len(), 3);
        assert_eq!(response[0], "modified");
    }

    #[test]
    fn test_into_inner_returns_owned_data() {
        let data: Vec<i32> = plain(vec![1, 2, 3]).into_inner();
        assert_eq!(data, vec![1, 2, 3]);
    }

    #[test]
    fn test_page_accessors() {
        let response = ResourceResponse::new(
            "data",
            200,
            Some(31),
            Some(4),
            PaginationInfo {
                prev_page: None,
                next_page: Some(2),
            },
        );

        assert!(response.has_next_page());
        assert!(!response.has_prev_page());
        assert_eq!(response.next_page(), Some(2));
        assert_eq!(response.prev_page(), None);
        assert_eq!(response.total(), Some(31));
        assert_eq!(response.total_pages(), Some(4));

        let single = plain("data");
        assert!(!single.has_next_page());
        assert!(single.total().is_none());
    }

    #[test]
    fn test_from_http_response_decodes_top_level_body() {
        let mut headers = HashMap::new();
        headers.insert("x-wp-total".to_string(), vec!["2".to_string()]);
        headers.insert("x-wp-totalpages".to_string(), vec!["1".to_string()]);

        let body = json!([
            {"id": 34, "name": "Leather Shoes"},
            {"id": 35, "name": "Sale"}
        ]);

        let response: ResourceResponse<Vec<TestTag>> = ResourceResponse::from_http_response(
            HttpResponse::new(200, headers, body),
            "ProductTag",
        )
        .unwrap();

        assert_eq!(response.status(), 200);
        assert_eq!(response[1].name, "Sale");
        assert_eq!(response.total(), Some(2));
        assert_eq!(response.total_pages(), Some(1));
    }

    #[test]
    fn test_from_http_response_preserves_pagination() {
        let mut headers = HashMap::new();
        headers.insert(
            "link".to_string(),
            vec![
                r#"<https://shop.example.com/wp-json/wc/v3/products/tags?page=1>; rel="prev", <https://shop.example.com/wp-json/wc/v3/products/tags?page=3>; rel="next""#
                    .to_string(),
            ],
        );

        let response: ResourceResponse<Vec<TestTag>> = ResourceResponse::from_http_response(
            HttpResponse::new(200, headers, json!([])),
            "ProductTag",
        )
        .unwrap();

        assert!(response.is_empty());
        assert_eq!(response.prev_page(), Some(1));
        assert_eq!(response.next_page(), Some(3));
    }

    #[test]
    fn test_from_http_response_shape_mismatch_is_decode_error() {
        let result: Result<ResourceResponse<TestTag>, _> = ResourceResponse::from_http_response(
            HttpResponse::new(201, HashMap::new(), json!({"id": "not-a-number"})),
            "ProductTag",
        );

        assert!(matches!(
            result,
            Err(ResourceError::Decode { resource: "ProductTag", status: 201, .. })
        ));
    }

    #[test]
    fn test_map_transforms_data_preserving_metadata() {
        let response = ResourceResponse::new(
            vec![1, 2, 3],
            200,
            Some(3),
            Some(1),
            PaginationInfo {
                prev_page: None,
                next_page: Some(2),
            },
        );

        let mapped: ResourceResponse<Vec<String>> =
            response.map(|v| v.iter().map(ToString::to_string).collect());

        assert_eq!(*mapped, vec!["1", "2", "3"]);
        assert!(mapped.has_next_page());
        assert_eq!(mapped.total(), Some(3));
        assert_eq!(mapped.status(), 200);
    }
}
