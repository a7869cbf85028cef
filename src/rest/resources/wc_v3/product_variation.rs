//! Product variation resource implementation.
//!
//! Variations are the purchasable versions of a variable product (a size,
//! a colour). They only exist under their parent product, so every
//! operation is addressed through `products/{product_id}/variations`.
//!
//! # Example
//!
//! ```rust,ignore
//! use woocommerce_api::rest::resources::wc_v3::{ProductVariation, ManageStock};
//! use woocommerce_api::rest::resources::wc_v3::common::VariationAttribute;
//!
//! let variations = client.product_variations();
//!
//! let created = variations
//!     .create(22, &ProductVariation {
//!         regular_price: Some("9.00".to_string()),
//!         manage_stock: Some(ManageStock::Enabled(true)),
//!         stock_quantity: Some(12),
//!         attributes: Some(vec![VariationAttribute {
//!             id: Some(6),
//!             option: Some("Black".to_string()),
//!             ..Default::default()
//!         }]),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let all = variations.list(22, None).await?;
//! ```

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::common::{
    Context, Dimensions, Download, Image, MetaData, Order, ResourceLinks, VariationAttribute,
};
use crate::clients::RestClient;
use crate::rest::{
    BatchRequest, BatchResponse, ResourceError, ResourceOperation, ResourcePath,
    ResourceResponse, RestResource,
};
use crate::HttpMethod;

/// Publication status of a variation.
///
/// Statuses registered by plugins decode as [`VariationStatus::Other`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum VariationStatus {
    /// Not yet published.
    Draft,
    /// Awaiting review.
    Pending,
    /// Visible to store staff only.
    Private,
    /// Published.
    #[default]
    Publish,
    /// Moved to the trash by an unforced delete.
    Trash,
    /// A value outside the documented set, kept as sent.
    #[serde(untagged)]
    Other(String),
}

/// Stock status of a variation.
///
/// Stores can register extra stock statuses; those decode as
/// [`StockStatus::Other`] instead of failing the whole record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum StockStatus {
    /// In stock.
    #[default]
    #[serde(rename = "instock")]
    InStock,
    /// Out of stock.
    #[serde(rename = "outofstock")]
    OutOfStock,
    /// Available on backorder.
    #[serde(rename = "onbackorder")]
    OnBackorder,
    /// A value outside the documented set, kept as sent.
    #[serde(untagged)]
    Other(String),
}

/// Tax status of a variation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaxStatus {
    /// Taxable.
    #[default]
    Taxable,
    /// Only shipping is taxable.
    Shipping,
    /// Not taxable.
    None,
    /// A value outside the documented set, kept as sent.
    #[serde(untagged)]
    Other(String),
}

/// Whether backorders are accepted when out of stock.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BackorderPolicy {
    /// Backorders not allowed.
    #[default]
    No,
    /// Allowed, and the customer is notified.
    Notify,
    /// Allowed.
    Yes,
    /// A value outside the documented set, kept as sent.
    #[serde(untagged)]
    Other(String),
}

/// Stock management setting of a variation.
///
/// The API sends a boolean, or the string `"parent"` when stock is managed
/// at the product level.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::rest::resources::wc_v3::ManageStock;
///
/// let parent: ManageStock = serde_json::from_str(r#""parent""#).unwrap();
/// assert_eq!(parent, ManageStock::Parent);
///
/// let own: ManageStock = serde_json::from_str("true").unwrap();
/// assert_eq!(own, ManageStock::Enabled(true));
/// assert_eq!(serde_json::to_string(&own).unwrap(), "true");
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "ManageStockRepr", into = "ManageStockRepr")]
pub enum ManageStock {
    /// Stock is (or is not) managed at the variation level.
    Enabled(bool),
    /// Stock is managed by the parent product.
    Parent,
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum ManageStockRepr {
    Flag(bool),
    Text(String),
}

impl TryFrom<ManageStockRepr> for ManageStock {
    type Error = UnknownManageStock;

    fn try_from(value: ManageStockRepr) -> Result<Self, Self::Error> {
        match value {
            ManageStockRepr::Flag(flag) => Ok(Self::Enabled(flag)),
            ManageStockRepr::Text(text) if text == "parent" => Ok(Self::Parent),
            ManageStockRepr::Text(text) => Err(UnknownManageStock(text)),
        }
    }
}

impl From<ManageStock> for ManageStockRepr {
    fn from(value: ManageStock) -> Self {
        match value {
            ManageStock::Enabled(flag) => Self::Flag(flag),
            ManageStock::Parent => Self::Text("parent".to_string()),
        }
    }
}

/// A `manage_stock` string other than `"parent"`.
#[derive(Debug)]
pub struct UnknownManageStock(String);

impl fmt::Display for UnknownManageStock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown manage_stock value: {}", self.0)
    }
}

/// A variation of a variable product.
///
/// Dates without a `_gmt` suffix are in the store's timezone; the API sends
/// them without an offset.
///
/// # Fields
///
/// ## Read-Only Fields
/// - `date_created`, `date_created_gmt`, `date_modified`, `date_modified_gmt`
/// - `permalink` - Variation URL
/// - `price` - Current price (derived from regular and sale price)
/// - `on_sale`, `purchasable`, `backorders_allowed`, `backordered`
/// - `shipping_class_id` - Derived from `shipping_class`
/// - `links` - Hypermedia links (`_links` on the wire)
///
/// Every other field is writable and omitted from request JSON when unset.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ProductVariation {
    /// The unique identifier of the variation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// When the variation was created, in the store's timezone.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub date_created: Option<NaiveDateTime>,

    /// When the variation was created, as GMT.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub date_created_gmt: Option<NaiveDateTime>,

    /// When the variation was last modified, in the store's timezone.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub date_modified: Option<NaiveDateTime>,

    /// When the variation was last modified, as GMT.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub date_modified_gmt: Option<NaiveDateTime>,

    /// Variation description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Variation URL.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub permalink: Option<String>,

    /// Stock keeping unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    /// Current price.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub price: Option<String>,

    /// Regular price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regular_price: Option<String>,

    /// Sale price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<String>,

    /// Start of the sale, in the store's timezone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_on_sale_from: Option<NaiveDateTime>,

    /// Start of the sale, as GMT.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_on_sale_from_gmt: Option<NaiveDateTime>,

    /// End of the sale, in the store's timezone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_on_sale_to: Option<NaiveDateTime>,

    /// End of the sale, as GMT.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_on_sale_to_gmt: Option<NaiveDateTime>,

    /// Whether the variation is on sale.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub on_sale: Option<bool>,

    /// Publication status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<VariationStatus>,

    /// Whether the variation can be bought.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub purchasable: Option<bool>,

    /// Whether the variation is virtual.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#virtual: Option<bool>,

    /// Whether the variation is downloadable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub downloadable: Option<bool>,

    /// Downloadable files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub downloads: Option<Vec<Download>>,

    /// Number of times a downloadable file can be downloaded (-1 for unlimited).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_limit: Option<i64>,

    /// Days until access to downloadable files expires (-1 for never).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_expiry: Option<i64>,

    /// Tax status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_status: Option<TaxStatus>,

    /// Tax class.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_class: Option<String>,

    /// Stock management at variation level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manage_stock: Option<ManageStock>,

    /// Stock quantity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_quantity: Option<i64>,

    /// Stock status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_status: Option<StockStatus>,

    /// Whether backorders are allowed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backorders: Option<BackorderPolicy>,

    /// Whether the variation can be backordered.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub backorders_allowed: Option<bool>,

    /// Whether the variation is currently on backorder.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub backordered: Option<bool>,

    /// Weight, as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,

    /// Package dimensions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,

    /// Shipping class slug.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_class: Option<String>,

    /// Shipping class id.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub shipping_class_id: Option<String>,

    /// Variation image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,

    /// Attribute options that define this variation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<VariationAttribute>>,

    /// Menu order, used to sort variations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_order: Option<i64>,

    /// Custom metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<Vec<MetaData>>,

    /// Hypermedia links.
    /// Read-only field.
    #[serde(rename = "_links", skip_serializing)]
    pub links: Option<ResourceLinks>,
}

impl RestResource for ProductVariation {
    type Id = u64;
    type ListParams = ProductVariationListParams;

    const NAME: &'static str = "ProductVariation";
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &["product_id"],
            "products/{product_id}/variations",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["product_id", "id"],
            "products/{product_id}/variations/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::All,
            &["product_id"],
            "products/{product_id}/variations",
        ),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::Update,
            &["product_id", "id"],
            "products/{product_id}/variations/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["product_id", "id"],
            "products/{product_id}/variations/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Batch,
            &["product_id"],
            "products/{product_id}/variations/batch",
        ),
    ];

    fn get_id(&self) -> Option<Self::Id> {
        self.id
    }
}

/// Sort attribute for variation listings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum VariationOrderBy {
    /// By publication date (the server default).
    #[default]
    Date,
    /// By id.
    Id,
    /// In the order given by `include`.
    Include,
    /// By title.
    Title,
    /// By slug.
    Slug,
    /// By modification date.
    Modified,
    /// By menu order.
    MenuOrder,
}

/// Parameters for listing the variations of a product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductVariationListParams {
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

    /// Limit results to those published after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<NaiveDateTime>,

    /// Limit results to those published before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<NaiveDateTime>,

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
    pub orderby: Option<VariationOrderBy>,

    /// Limit results to these parent ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<Vec<u64>>,

    /// Exclude these parent ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_exclude: Option<Vec<u64>>,

    /// Limit results to the variation with this slug.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    /// Limit results to this status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<VariationStatus>,

    /// Limit results to this SKU.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    /// Limit results to this tax class.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_class: Option<String>,

    /// Limit results to variations on (or not on) sale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_sale: Option<bool>,

    /// Minimum price, as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<String>,

    /// Maximum price, as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<String>,

    /// Limit results to this stock status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_status: Option<StockStatus>,
}

/// Operations on `products/{product_id}/variations`.
///
/// Borrows the [`RestClient`]; construct one with
/// [`RestClient::product_variations`].
#[derive(Debug, Clone, Copy)]
pub struct ProductVariationService<'a> {
    client: &'a RestClient,
}

fn parent(product_id: u64) -> [(&'static str, String); 1] {
    [("product_id", product_id.to_string())]
}

impl<'a> ProductVariationService<'a> {
    /// Creates a service bound to `client`.
    #[must_use]
    pub const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// Creates a variation under `product_id`.
    ///
    /// # Errors
    ///
    /// See [`RestResource::create`].
    pub async fn create(
        &self,
        product_id: u64,
        variation: &ProductVariation,
    ) -> Result<ResourceResponse<ProductVariation>, ResourceError> {
        ProductVariation::create(self.client, &parent(product_id), variation).await
    }

    /// Retrieves a variation of `product_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the variation does not exist.
    pub async fn get(
        &self,
        product_id: u64,
        id: u64,
    ) -> Result<ResourceResponse<ProductVariation>, ResourceError> {
        ProductVariation::find(self.client, &parent(product_id), id).await
    }

    /// Lists the variations of `product_id`, in server order.
    ///
    /// # Errors
    ///
    /// See [`RestResource::all`].
    pub async fn list(
        &self,
        product_id: u64,
        params: Option<&ProductVariationListParams>,
    ) -> Result<ResourceResponse<Vec<ProductVariation>>, ResourceError> {
        ProductVariation::all(self.client, &parent(product_id), params).await
    }

    /// Updates a variation; only fields set on `variation` are sent.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the variation does not exist.
    pub async fn update(
        &self,
        product_id: u64,
        id: u64,
        variation: &ProductVariation,
    ) -> Result<ResourceResponse<ProductVariation>, ResourceError> {
        ProductVariation::update(self.client, &parent(product_id), id, variation).await
    }

    /// Deletes a variation and returns it as it was.
    ///
    /// Without `force` the variation is moved to the trash.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the variation does not exist.
    pub async fn delete(
        &self,
        product_id: u64,
        id: u64,
        force: bool,
    ) -> Result<ResourceResponse<ProductVariation>, ResourceError> {
        ProductVariation::delete(self.client, &parent(product_id), id, force).await
    }

    /// Creates, updates and deletes variations of `product_id` in one call.
    ///
    /// # Errors
    ///
    /// See [`RestResource::batch`]. Per-item failures are not errors.
    pub async fn batch(
        &self,
        product_id: u64,
        request: &BatchRequest<ProductVariation>,
    ) -> Result<ResourceResponse<BatchResponse<ProductVariation>>, ResourceError> {
        ProductVariation::batch(self.client, &parent(product_id), request).await
    }
}

impl RestClient {
    /// Returns the product variation service backed by this client.
    #[must_use]
    pub const fn product_variations(&self) -> ProductVariationService<'_> {
        ProductVariationService::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::resource::serialize_to_query;
    use crate::rest::{get_path, ResourceOperation};
    use chrono::NaiveDate;
    use serde_json::json;

    fn api_variation() -> serde_json::Value {
        let mut variation = json!({
            "id": 732,
            "date_created": "2017-03-23T00:36:38",
            "date_created_gmt": "2017-03-23T03:36:38",
            "date_modified": "2017-03-23T00:36:38",
            "date_modified_gmt": "2017-03-23T03:36:38",
            "description": "",
            "permalink": "https://example.com/product/ship-your-idea/?attribute_pa_color=black",
            "sku": "",
            "price": "9.00",
            "regular_price": "9.00",
            "sale_price": "",
            "date_on_sale_from": null,
            "date_on_sale_from_gmt": null,
            "date_on_sale_to": null,
            "date_on_sale_to_gmt": null,
            "on_sale": false,
            "status": "publish",
            "purchasable": true
        });

        let stock = json!({
            "virtual": false,
            "downloadable": false,
            "downloads": [],
            "download_limit": -1,
            "download_expiry": -1,
            "tax_status": "taxable",
            "tax_class": "",
            "manage_stock": "parent",
            "stock_quantity": null,
            "stock_status": "instock",
            "backorders": "no",
            "backorders_allowed": false,
            "backordered": false
        });

        let shipping = json!({
            "weight": "",
            "dimensions": {"length": "", "width": "", "height": ""},
            "shipping_class": "",
            "shipping_class_id": "0",
            "attributes": [{"id": 6, "name": "Color", "option": "Black"}],
            "menu_order": 0,
            "meta_data": []
        });

        let media = json!({
            "image": {
                "id": 425,
                "date_created": "2017-03-22T14:01:13",
                "date_created_gmt": "2017-03-22T20:01:13",
                "date_modified": "2017-03-22T14:01:13",
                "date_modified_gmt": "2017-03-22T20:01:13",
                "src": "https://example.com/wp-content/uploads/2017/03/T_4_front-12.jpg",
                "name": "",
                "alt": ""
            },
            "_links": {
                "self": [{"href": "https://example.com/wp-json/wc/v3/products/22/variations/732"}],
                "collection": [{"href": "https://example.com/wp-json/wc/v3/products/22/variations"}],
                "up": [{"href": "https://example.com/wp-json/wc/v3/products/22"}]
            }
        });

        let fields = variation.as_object_mut().unwrap();
        for part in [stock, shipping, media] {
            if let serde_json::Value::Object(part) = part {
                fields.extend(part);
            }
        }
        variation
    }

    #[test]
    fn test_variation_deserialization_from_api_response() {
        let variation: ProductVariation = serde_json::from_value(api_variation()).unwrap();

        assert_eq!(variation.get_id(), Some(732));
        assert_eq!(
            variation.date_created,
            NaiveDate::from_ymd_opt(2017, 3, 23).and_then(|d| d.and_hms_opt(0, 36, 38))
        );
        assert_eq!(variation.price.as_deref(), Some("9.00"));
        assert_eq!(variation.sale_price.as_deref(), Some(""));
        assert!(variation.date_on_sale_from.is_none());
        assert_eq!(variation.status, Some(VariationStatus::Publish));
        assert_eq!(variation.r#virtual, Some(false));
        assert_eq!(variation.download_limit, Some(-1));
        assert_eq!(variation.tax_status, Some(TaxStatus::Taxable));
        assert_eq!(variation.manage_stock, Some(ManageStock::Parent));
        assert!(variation.stock_quantity.is_none());
        assert_eq!(variation.stock_status, Some(StockStatus::InStock));
        assert_eq!(variation.backorders, Some(BackorderPolicy::No));
        assert_eq!(variation.shipping_class_id.as_deref(), Some("0"));
        assert_eq!(variation.image.as_ref().and_then(|i| i.id), Some(425));
        assert_eq!(
            variation.attributes.as_ref().and_then(|a| a[0].option.as_deref()),
            Some("Black")
        );
        assert_eq!(variation.downloads.as_ref().map(Vec::len), Some(0));
        assert!(variation.links.is_some());
    }

    #[test]
    fn test_variation_serialization_skips_read_only_fields() {
        let mut variation: ProductVariation = serde_json::from_value(api_variation()).unwrap();
        variation.regular_price = Some("10.00".to_string());

        let sent = serde_json::to_value(&variation).unwrap();

        for field in [
            "date_created",
            "date_created_gmt",
            "date_modified",
            "date_modified_gmt",
            "permalink",
            "price",
            "on_sale",
            "purchasable",
            "backorders_allowed",
            "backordered",
            "shipping_class_id",
            "_links",
        ] {
            assert!(sent.get(field).is_none(), "{field} should not be sent");
        }

        assert_eq!(sent["id"], 732);
        assert_eq!(sent["regular_price"], "10.00");
        assert_eq!(sent["virtual"], false);
        assert_eq!(sent["manage_stock"], "parent");
        assert_eq!(sent["stock_status"], "instock");
        assert!(sent.get("stock_quantity").is_none());
        assert!(sent.get("date_on_sale_from").is_none());
    }

    #[test]
    fn test_variation_zero_values_are_sent() {
        let variation = ProductVariation {
            stock_quantity: Some(0),
            manage_stock: Some(ManageStock::Enabled(false)),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_string(&variation).unwrap(),
            r#"{"manage_stock":false,"stock_quantity":0}"#
        );
        assert_eq!(serde_json::to_string(&ProductVariation::default()).unwrap(), "{}");
    }

    #[test]
    fn test_manage_stock_rejects_unknown_text() {
        let result = serde_json::from_str::<ManageStock>(r#""sometimes""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_stock_status_wire_values() {
        assert_eq!(serde_json::to_value(StockStatus::OutOfStock).unwrap(), json!("outofstock"));
        assert_eq!(
            serde_json::from_value::<StockStatus>(json!("onbackorder")).unwrap(),
            StockStatus::OnBackorder
        );
    }

    #[test]
    fn test_undocumented_status_values_are_kept() {
        let mut raw = api_variation();
        raw["stock_status"] = json!("preorder");
        raw["status"] = json!("future");
        raw["tax_status"] = json!("reduced");
        raw["backorders"] = json!("ask");

        let variation: ProductVariation = serde_json::from_value(raw).unwrap();

        assert_eq!(variation.stock_status, Some(StockStatus::Other("preorder".to_string())));
        assert_eq!(variation.status, Some(VariationStatus::Other("future".to_string())));
        assert_eq!(variation.tax_status, Some(TaxStatus::Other("reduced".to_string())));
        assert_eq!(variation.backorders, Some(BackorderPolicy::Other("ask".to_string())));

        let sent = serde_json::to_value(&variation).unwrap();
        assert_eq!(sent["stock_status"], "preorder");
        assert_eq!(sent["status"], "future");
    }

    #[test]
    fn test_variation_paths_are_nested_under_product() {
        for operation in [
            ResourceOperation::Create,
            ResourceOperation::All,
            ResourceOperation::Batch,
        ] {
            assert!(get_path(ProductVariation::PATHS, operation, &[]).is_none());
            let path = get_path(ProductVariation::PATHS, operation, &["product_id"]).unwrap();
            assert!(path.template.starts_with("products/{product_id}/variations"));
        }

        for operation in [
            ResourceOperation::Find,
            ResourceOperation::Update,
            ResourceOperation::Delete,
        ] {
            assert!(get_path(ProductVariation::PATHS, operation, &["id"]).is_none());
            let path =
                get_path(ProductVariation::PATHS, operation, &["product_id", "id"]).unwrap();
            assert_eq!(path.template, "products/{product_id}/variations/{id}");
        }
    }

    #[test]
    fn test_list_params_to_query() {
        let params = ProductVariationListParams {
            page: Some(2),
            after: NaiveDate::from_ymd_opt(2024, 1, 1).and_then(|d| d.and_hms_opt(0, 0, 0)),
            orderby: Some(VariationOrderBy::MenuOrder),
            status: Some(VariationStatus::Private),
            on_sale: Some(true),
            min_price: Some("5".to_string()),
            stock_status: Some(StockStatus::OutOfStock),
            ..Default::default()
        };

        let query = serialize_to_query(&params, ProductVariation::NAME).unwrap();

        assert_eq!(query.len(), 7);
        assert_eq!(query["page"], "2");
        assert_eq!(query["after"], "2024-01-01T00:00:00");
        assert_eq!(query["orderby"], "menu_order");
        assert_eq!(query["status"], "private");
        assert_eq!(query["on_sale"], "true");
        assert_eq!(query["min_price"], "5");
        assert_eq!(query["stock_status"], "outofstock");
    }
}
