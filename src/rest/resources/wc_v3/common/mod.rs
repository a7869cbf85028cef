//! Value objects embedded in more than one resource.
//!
//! These types are not REST resources themselves (they don't implement
//! `RestResource`) but appear nested inside `ProductTag` and
//! `ProductVariation` records. Every field is optional and omitted from
//! request JSON when unset.
//!
//! # Example
//!
//! ```rust
//! use woocommerce_api::rest::resources::wc_v3::common::{Dimensions, VariationAttribute};
//!
//! let dimensions = Dimensions {
//!     length: Some("10".to_string()),
//!     ..Default::default()
//! };
//! assert_eq!(serde_json::to_string(&dimensions).unwrap(), r#"{"length":"10"}"#);
//!
//! let attribute = VariationAttribute {
//!     id: Some(6),
//!     option: Some("Red".to_string()),
//!     ..Default::default()
//! };
//! assert_eq!(serde_json::to_string(&attribute).unwrap(), r#"{"id":6,"option":"Red"}"#);
//! ```

mod attribute;
mod dimensions;
mod download;
mod image;
mod links;
mod meta_data;
mod query;

pub use attribute::VariationAttribute;
pub use dimensions::Dimensions;
pub use download::Download;
pub use image::Image;
pub use links::{Link, ResourceLinks};
pub use meta_data::MetaData;
pub use query::{Context, Order};

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    #[test]
    fn test_links_decode_self_and_collection() {
        let links: ResourceLinks = serde_json::from_value(json!({
            "self": [{"href": "https://shop.example.com/wp-json/wc/v3/products/22/variations/732"}],
            "collection": [{"href": "https://shop.example.com/wp-json/wc/v3/products/22/variations"}],
            "up": [{"href": "https://shop.example.com/wp-json/wc/v3/products/22"}]
        }))
        .unwrap();

        assert_eq!(
            links.self_link(),
            Some("https://shop.example.com/wp-json/wc/v3/products/22/variations/732")
        );
        assert_eq!(
            links.collection_link(),
            Some("https://shop.example.com/wp-json/wc/v3/products/22/variations")
        );
        assert_eq!(links.up.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn test_links_missing_groups() {
        let links: ResourceLinks = serde_json::from_value(json!({})).unwrap();

        assert!(links.self_link().is_none());
        assert!(links.collection_link().is_none());
    }

    #[test]
    fn test_image_read_only_dates_decoded_not_sent() {
        let image: Image = serde_json::from_value(json!({
            "id": 423,
            "date_created": "2017-03-22T14:01:13",
            "date_created_gmt": "2017-03-22T20:01:13",
            "src": "https://example.com/wp-content/uploads/2017/03/T_4_front.jpg",
            "name": "",
            "alt": ""
        }))
        .unwrap();

        assert_eq!(
            image.date_created,
            NaiveDate::from_ymd_opt(2017, 3, 22).and_then(|d| d.and_hms_opt(14, 1, 13))
        );

        let sent = serde_json::to_value(&image).unwrap();
        assert!(sent.get("date_created").is_none());
        assert!(sent.get("date_created_gmt").is_none());
        assert_eq!(sent["id"], 423);
        assert_eq!(sent["name"], "");
    }

    #[test]
    fn test_meta_data_keeps_arbitrary_values() {
        let meta: MetaData = serde_json::from_value(json!({
            "id": 1,
            "key": "_gift_options",
            "value": {"wrap": true, "message": "Happy birthday"}
        }))
        .unwrap();

        assert_eq!(meta.value, Some(json!({"wrap": true, "message": "Happy birthday"})));
    }

    #[test]
    fn test_empty_string_is_distinct_from_absent() {
        let download = Download {
            name: Some(String::new()),
            ..Default::default()
        };

        assert_eq!(serde_json::to_string(&download).unwrap(), r#"{"name":""}"#);
        assert_eq!(serde_json::to_string(&Download::default()).unwrap(), "{}");
    }

    #[test]
    fn test_query_enums_serialize_lowercase() {
        assert_eq!(serde_json::to_value(Context::Edit).unwrap(), json!("edit"));
        assert_eq!(serde_json::to_value(Order::Asc).unwrap(), json!("asc"));
    }
}
