//! Product tag resource implementation.
//!
//! Product tags are free-form labels attached to products. They live at the
//! top level of the API namespace (`products/tags`).
//!
//! Tags cannot be trashed: the server rejects a delete without `force=true`
//! with HTTP 501 (`woocommerce_rest_trash_not_supported`).
//!
//! # Example
//!
//! ```rust,ignore
//! use woocommerce_api::rest::resources::wc_v3::{ProductTag, ProductTagListParams, TagOrderBy};
//!
//! let tags = client.product_tags();
//!
//! let created = tags
//!     .create(&ProductTag {
//!         name: Some("Leather Shoes".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let params = ProductTagListParams {
//!     hide_empty: Some(true),
//!     orderby: Some(TagOrderBy::Count),
//!     ..Default::default()
//! };
//! let popular = tags.list(Some(&params)).await?;
//!
//! tags.delete(created.id.unwrap_or_default(), true).await?;
//! ```

use serde::{Deserialize, Serialize};

use super::common::{Context, Order, ResourceLinks};
use crate::clients::RestClient;
use crate::rest::{
    BatchRequest, BatchResponse, ResourceError, ResourceOperation, ResourcePath,
    ResourceResponse, RestResource,
};
use crate::HttpMethod;

/// A product tag.
///
/// # Fields
///
/// ## Writable Fields
/// - `name` - Tag name
/// - `slug` - URL-friendly identifier, generated from `name` when omitted
/// - `description` - HTML description
///
/// ## Read-Only Fields
/// - `count` - Number of published products carrying the tag
/// - `links` - Hypermedia links (`_links` on the wire)
///
/// `id` is sent only when set, which is what batch updates need.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductTag {
    /// The unique identifier of the tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The tag name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// An alphanumeric identifier unique to the tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    /// HTML description of the tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Number of published products for the tag.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub count: Option<u64>,

    /// Hypermedia links.
    /// Read-only field.
    #[serde(rename = "_links", skip_serializing)]
    pub links: Option<ResourceLinks>,
}

impl RestResource for ProductTag {
    type Id = u64;
    type ListParams = ProductTagListParams;

    const NAME: &'static str = "ProductTag";
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &[],
            "products/tags",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "products/tags/{id}",
        ),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "products/tags"),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::Update,
            &["id"],
            "products/tags/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "products/tags/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Batch,
            &[],
            "products/tags/batch",
        ),
    ];

    fn get_id(&self) -> Option<Self::Id> {
        self.id
    }
}

/// Sort attribute for tag listings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TagOrderBy {
    /// By id.
    Id,
    /// In the order given by `include`.
    Include,
    /// By name (the server default).
    #[default]
    Name,
    /// By slug.
    Slug,
    /// By term group.
    TermGroup,
    /// By description.
    Description,
    /// By product count.
    Count,
}

/// Parameters for listing product tags.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductTagListParams {
    /// Scope under which the request is made.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Context>,

    /// Page of the collection (default: 1).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    /// Maximum number of items per page (default: 10, max: 100).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,

    /// Limit results to those matching a string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    /// Exclude these ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<u64>>,

    /// Limit results to these ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<u64>>,

    /// Offset the result set by this many items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,

    /// Sort direction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,

    /// Sort attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orderby: Option<TagOrderBy>,

    /// Hide tags not assigned to any product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_empty: Option<bool>,

    /// Limit results to tags assigned to this product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<u64>,

    /// Limit results to the tag with this slug.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

/// Operations on `products/tags`.
///
/// Borrows the [`RestClient`]; construct one per call site with
/// [`RestClient::product_tags`].
#[derive(Debug, Clone, Copy)]
pub struct ProductTagService<'a> {
    client: &'a RestClient,
}

impl<'a> ProductTagService<'a> {
    /// Creates a service bound to `client`.
    #[must_use]
    pub const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// Creates a tag.
    ///
    /// # Errors
    ///
    /// See [`RestResource::create`].
    pub async fn create(&self, tag: &ProductTag) -> Result<ResourceResponse<ProductTag>, ResourceError> {
        ProductTag::create(self.client, &[], tag).await
    }

    /// Retrieves a tag by id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if no tag has this id.
    pub async fn get(&self, id: u64) -> Result<ResourceResponse<ProductTag>, ResourceError> {
        ProductTag::find(self.client, &[], id).await
    }

    /// Lists tags, in server order.
    ///
    /// # Errors
    ///
    /// See [`RestResource::all`].
    pub async fn list(
        &self,
        params: Option<&ProductTagListParams>,
    ) -> Result<ResourceResponse<Vec<ProductTag>>, ResourceError> {
        ProductTag::all(self.client, &[], params).await
    }

    /// Updates the tag with the given id; only fields set on `tag` are sent.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if no tag has this id.
    pub async fn update(
        &self,
        id: u64,
        tag: &ProductTag,
    ) -> Result<ResourceResponse<ProductTag>, ResourceError> {
        ProductTag::update(self.client, &[], id, tag).await
    }

    /// Deletes a tag and returns it as it was.
    ///
    /// # Errors
    ///
    /// Tags do not support trashing: with `force` unset the server answers
    /// HTTP 501 and the error is returned as-is.
    pub async fn delete(
        &self,
        id: u64,
        force: bool,
    ) -> Result<ResourceResponse<ProductTag>, ResourceError> {
        ProductTag::delete(self.client, &[], id, force).await
    }

    /// Creates, updates and deletes tags in one call.
    ///
    /// # Errors
    ///
    /// See [`RestResource::batch`]. Per-item failures are not errors.
    pub async fn batch(
        &self,
        request: &BatchRequest<ProductTag>,
    ) -> Result<ResourceResponse<BatchResponse<ProductTag>>, ResourceError> {
        ProductTag::batch(self.client, &[], request).await
    }
}

impl RestClient {
    /// Returns the product tag service backed by this client.
    #[must_use]
    pub const fn product_tags(&self) -> ProductTagService<'_> {
        ProductTagService::new(self)
    }
}
