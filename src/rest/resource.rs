//! REST Resource trait for CRUD operations.
//!
//! This module defines the [`RestResource`] trait, which provides a standardized
//! interface for interacting with WooCommerce REST API resources. Resources that
//! implement this trait gain `create()`, `find()`, `all()`, `update()`,
//! `delete()` and `batch()` methods.
//!
//! # Implementing a Resource
//!
//! 1. Define a struct with serde derives, every field `Option<_>` and
//!    skipped when `None`
//! 2. Implement the `RestResource` trait with associated types and constants
//! 3. The trait provides default implementations for every operation
//!
//! # Parent IDs
//!
//! Sub-resources are addressed through their parent. Every operation takes
//! the parent ids as `(name, value)` pairs which are interpolated into the
//! matching [`ResourcePath`] template together with the resource's own id.
//! Top-level resources pass `&[]`.
//!
//! # Example
//!
//! ```rust,ignore
//! use woocommerce_api::rest::{RestResource, ResourcePath, ResourceOperation};
//! use woocommerce_api::HttpMethod;
//!
//! impl RestResource for ProductVariation {
//!     type Id = u64;
//!     type ListParams = ProductVariationListParams;
//!
//!     const NAME: &'static str = "ProductVariation";
//!     const PATHS: &'static [ResourcePath] = &[
//!         ResourcePath::new(
//!             HttpMethod::Get,
//!             ResourceOperation::Find,
//!             &["product_id", "id"],
//!             "products/{product_id}/variations/{id}",
//!         ),
//!         // ...
//!     ];
//!
//!     fn get_id(&self) -> Option<Self::Id> {
//!         self.id
//!     }
//! }
//!
//! let variation = ProductVariation::find(&client, &[("product_id", "22".into())], 732).await?;
//! ```

use std::collections::HashMap;
use std::fmt::Display;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::clients::{HttpMethod, RestClient};
use crate::rest::{
    build_path, get_path, BatchRequest, BatchResponse, ResourceError, ResourceOperation,
    ResourcePath, ResourceResponse,
};

/// A REST resource that can be created, fetched, listed, updated, deleted
/// and batch-edited.
///
/// # Associated Types
///
/// - `Id`: The type of the resource's identifier
/// - `ListParams`: Typed query parameters for `all()`
///
/// # Associated Constants
///
/// - `NAME`: The resource name used in errors and logs (e.g., "`ProductTag`")
/// - `PATHS`: Available paths for different operations
///
/// # Errors
///
/// Every operation returns early with a [`ResourceError`] and no record when
/// the request cannot be built, the transport fails, or the body cannot be
/// decoded. Nothing is retried.
#[allow(async_fn_in_trait)]
pub trait RestResource: Serialize + DeserializeOwned + Clone + Send + Sync + Sized {
    /// The type of the resource's identifier.
    type Id: Display + Clone + Send + Sync;

    /// Parameters for `all()` operations (filtering, pagination, ordering).
    type ListParams: Serialize + Default + Send + Sync;

    /// The name of the resource (e.g., "`ProductTag`").
    const NAME: &'static str;

    /// Available paths for this resource.
    ///
    /// The path selection logic chooses the most specific path that matches
    /// the available IDs.
    const PATHS: &'static [ResourcePath];

    /// Returns the resource's ID if it exists.
    ///
    /// Returns `None` for records that have not been created yet.
    fn get_id(&self) -> Option<Self::Id>;

    /// Resolves the HTTP method and request path for an operation.
    ///
    /// The method is the one declared on the matching [`ResourcePath`].
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if no declared path
    /// can be built from the given ids.
    fn resolve_path(
        operation: ResourceOperation,
        parent_ids: &[(&str, String)],
        id: Option<&Self::Id>,
    ) -> Result<(HttpMethod, String), ResourceError> {
        let mut ids: HashMap<&str, String> = parent_ids
            .iter()
            .map(|(name, value)| (*name, value.clone()))
            .collect();
        if let Some(id) = id {
            ids.insert("id", id.to_string());
        }

        let available_ids: Vec<&str> = ids.keys().copied().collect();
        let path = get_path(Self::PATHS, operation, &available_ids).ok_or(
            ResourceError::PathResolutionFailed {
                resource: Self::NAME,
                operation: operation.as_str(),
            },
        )?;

        Ok((path.http_method, build_path(path.template, &ids)))
    }

    /// Creates a new record.
    ///
    /// Only fields that are set are sent; read-only fields are never sent.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Serialize`] if the record cannot be encoded,
    /// [`ResourceError::Rest`] for transport and HTTP failures, and
    /// [`ResourceError::Decode`] if the created record cannot be decoded.
    async fn create(
        client: &RestClient,
        parent_ids: &[(&str, String)],
        resource: &Self,
    ) -> Result<ResourceResponse<Self>, ResourceError> {
        let (method, path) = Self::resolve_path(ResourceOperation::Create, parent_ids, None)?;
        let body = to_body(resource, Self::NAME)?;

        let response = client
            .make_request(method, &path, Some(body), None)
            .await
            .map_err(|e| ResourceError::from_rest_error(e, Self::NAME, None))?;

        ResourceResponse::from_http_response(response, Self::NAME)
    }

    /// Finds a single record by ID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the record doesn't exist.
    /// Returns [`ResourceError::PathResolutionFailed`] if no valid path matches.
    async fn find(
        client: &RestClient,
        parent_ids: &[(&str, String)],
        id: Self::Id,
    ) -> Result<ResourceResponse<Self>, ResourceError> {
        let (method, path) = Self::resolve_path(ResourceOperation::Find, parent_ids, Some(&id))?;

        let response = client
            .make_request(method, &path, None, None)
            .await
            .map_err(|e| ResourceError::from_rest_error(e, Self::NAME, Some(&id.to_string())))?;

        ResourceResponse::from_http_response(response, Self::NAME)
    }

    /// Lists records matching the given parameters.
    ///
    /// Records come back in server order. Use `next_page()` on the response
    /// to learn whether another page exists.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Serialize`] if the parameters cannot be
    /// encoded and [`ResourceError::Decode`] if the body is not a list of
    /// records.
    async fn all(
        client: &RestClient,
        parent_ids: &[(&str, String)],
        params: Option<&Self::ListParams>,
    ) -> Result<ResourceResponse<Vec<Self>>, ResourceError> {
        let (method, path) = Self::resolve_path(ResourceOperation::All, parent_ids, None)?;

        let query = params
            .map(|p| serialize_to_query(p, Self::NAME))
            .transpose()?
            .filter(|q| !q.is_empty());

        let response = client
            .make_request(method, &path, None, query)
            .await
            .map_err(|e| ResourceError::from_rest_error(e, Self::NAME, None))?;

        ResourceResponse::from_http_response(response, Self::NAME)
    }

    /// Updates the record with the given ID.
    ///
    /// Only fields that are set on `resource` are sent.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the record doesn't exist.
    async fn update(
        client: &RestClient,
        parent_ids: &[(&str, String)],
        id: Self::Id,
        resource: &Self,
    ) -> Result<ResourceResponse<Self>, ResourceError> {
        let (method, path) = Self::resolve_path(ResourceOperation::Update, parent_ids, Some(&id))?;
        let body = to_body(resource, Self::NAME)?;

        let response = client
            .make_request(method, &path, Some(body), None)
            .await
            .map_err(|e| ResourceError::from_rest_error(e, Self::NAME, Some(&id.to_string())))?;

        ResourceResponse::from_http_response(response, Self::NAME)
    }

    /// Deletes the record with the given ID and returns it as it was.
    ///
    /// `force=true` is sent only when `force` is set; otherwise no `force`
    /// parameter is sent and the server applies its default.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the record doesn't exist.
    /// Resources that cannot be trashed reject unforced deletes with
    /// HTTP 501, returned as [`ResourceError::Rest`].
    async fn delete(
        client: &RestClient,
        parent_ids: &[(&str, String)],
        id: Self::Id,
        force: bool,
    ) -> Result<ResourceResponse<Self>, ResourceError> {
        let (method, path) = Self::resolve_path(ResourceOperation::Delete, parent_ids, Some(&id))?;

        let query = force.then(|| HashMap::from([("force".to_string(), "true".to_string())]));

        let response = client
            .make_request(method, &path, None, query)
            .await
            .map_err(|e| ResourceError::from_rest_error(e, Self::NAME, Some(&id.to_string())))?;

        ResourceResponse::from_http_response(response, Self::NAME)
    }

    /// Creates, updates and deletes records in one call.
    ///
    /// Per-item failures do not fail the call; they are returned in place
    /// as [`BatchResult::Failed`](crate::rest::BatchResult::Failed).
    ///
    /// # Errors
    ///
    /// Returns a [`ResourceError`] only when the call as a whole fails.
    async fn batch(
        client: &RestClient,
        parent_ids: &[(&str, String)],
        request: &BatchRequest<Self>,
    ) -> Result<ResourceResponse<BatchResponse<Self>>, ResourceError> {
        let (method, path) = Self::resolve_path(ResourceOperation::Batch, parent_ids, None)?;
        let body = to_body(request, Self::NAME)?;

        let response = client
            .make_request(method, &path, Some(body), None)
            .await
            .map_err(|e| ResourceError::from_rest_error(e, Self::NAME, None))?;

        ResourceResponse::from_http_response(response, Self::NAME)
    }
}

fn to_body<T: Serialize>(value: &T, resource: &'static str) -> Result<Value, ResourceError> {
    serde_json::to_value(value).map_err(|source| ResourceError::Serialize { resource, source })
}

/// Serializes a params struct to a query parameter map.
///
/// `None` fields are skipped, arrays become comma-separated lists and
/// nested objects are sent as JSON text.
pub(crate) fn serialize_to_query<T: Serialize>(
    params: &T,
    resource: &'static str,
) -> Result<HashMap<String, String>, ResourceError> {
    let value = to_body(params, resource)?;

    let mut query = HashMap::new();

    if let Value::Object(map) = value {
        for (key, val) in map {
            match val {
                Value::Null => {}
                Value::String(s) => {
                    query.insert(key, s);
                }
                Value::Number(n) => {
                    query.insert(key, n.to_string());
                }
                Value::Bool(b) => {
                    query.insert(key, b.to_string());
                }
                Value::Array(arr) => {
                    let values: Vec<String> = arr
                        .iter()
                        .filter_map(|v| match v {
                            Value::String(s) => Some(s.clone()),
                            Value::Number(n) => Some(n.to_string()),
                            _ => None,
                        })
                        .collect();
                    if !values.is_empty() {
                        query.insert(key, values.join(","));
                    }
                }
                Value::Object(_) => {
                    query.insert(key, val.to_string());
                }
            }
        }
    }

    Ok(query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{StoreUrl, WooCommerceConfig};
    use serde::Deserialize;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct MockTag {
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<u64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    }

    #[derive(Debug, Clone, Serialize, Default)]
    struct MockListParams {
        #[serde(skip_serializing_if = "Option::is_none")]
        per_page: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        search: Option<String>,
    }

    impl RestResource for MockTag {
        type Id = u64;
        type ListParams = MockListParams;

        const NAME: &'static str = "Tag";
        const PATHS: &'static [ResourcePath] = &[
            ResourcePath::new(HttpMethod::Get, ResourceOperation::Find, &["id"], "tags/{id}"),
            ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "tags"),
            ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "tags"),
            ResourcePath::new(HttpMethod::Post, ResourceOperation::Update, &["id"], "tags/{id}"),
            ResourcePath::new(HttpMethod::Post, ResourceOperation::Batch, &[], "tags/batch"),
        ];

        fn get_id(&self) -> Option<Self::Id> {
            self.id
        }
    }

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct MockVariation {
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<u64>,
    }

    impl RestResource for MockVariation {
        type Id = u64;
        type ListParams = ();

        const NAME: &'static str = "Variation";
        const PATHS: &'static [ResourcePath] = &[
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
        ];

        fn get_id(&self) -> Option<Self::Id> {
            self.id
        }
    }

    #[test]
    fn test_get_id_reflects_creation_state() {
        let new_tag = MockTag {
            id: None,
            name: Some("New".to_string()),
        };
        let existing = MockTag {
            id: Some(34),
            name: None,
        };

        assert!(new_tag.get_id().is_none());
        assert_eq!(existing.get_id(), Some(34));
    }

    #[test]
    fn test_resolve_path_interpolates_own_id() {
        let (method, path) =
            MockTag::resolve_path(ResourceOperation::Find, &[], Some(&34)).unwrap();
        assert_eq!(method, HttpMethod::Get);
        assert_eq!(path, "tags/34");

        let (method, path) = MockTag::resolve_path(ResourceOperation::Batch, &[], None).unwrap();
        assert_eq!(method, HttpMethod::Post);
        assert_eq!(path, "tags/batch");
    }

    #[test]
    fn test_resolve_path_uses_parent_ids() {
        let parent = [("product_id", "22".to_string())];

        let (_, path) =
            MockVariation::resolve_path(ResourceOperation::Find, &parent, Some(&732)).unwrap();
        assert_eq!(path, "products/22/variations/732");

        let (_, path) = MockVariation::resolve_path(ResourceOperation::All, &parent, None).unwrap();
        assert_eq!(path, "products/22/variations");
    }

    #[test]
    fn test_resolve_path_without_parent_fails() {
        let result = MockVariation::resolve_path(ResourceOperation::All, &[], None);

        assert!(matches!(
            result,
            Err(ResourceError::PathResolutionFailed {
                resource: "Variation",
                operation: "all"
            })
        ));
    }

    #[test]
    fn test_resolve_path_missing_operation_fails() {
        let result = MockTag::resolve_path(ResourceOperation::Delete, &[], Some(&1));

        assert!(matches!(
            result,
            Err(ResourceError::PathResolutionFailed {
                operation: "delete",
                ..
            })
        ));
    }

    #[test]
    fn test_serialize_to_query_handles_basic_types() {
        #[derive(Serialize)]
        struct Params {
            per_page: u32,
            search: String,
            hide_empty: bool,
        }

        let params = Params {
            per_page: 50,
            search: "shoe".to_string(),
            hide_empty: true,
        };

        let query = serialize_to_query(&params, "Tag").unwrap();
        assert_eq!(query.get("per_page"), Some(&"50".to_string()));
        assert_eq!(query.get("search"), Some(&"shoe".to_string()));
        assert_eq!(query.get("hide_empty"), Some(&"true".to_string()));
    }

    #[test]
    fn test_serialize_to_query_skips_none() {
        let params = MockListParams {
            per_page: Some(10),
            search: None,
        };

        let query = serialize_to_query(&params, "Tag").unwrap();
        assert_eq!(query.len(), 1);
        assert_eq!(query.get("per_page"), Some(&"10".to_string()));
        assert!(!query.contains_key("search"));
    }

    #[test]
    fn test_serialize_to_query_handles_arrays() {
        #[derive(Serialize)]
        struct Params {
            include: Vec<u64>,
            exclude: Vec<u64>,
        }

        let params = Params {
            include: vec![1, 2, 3],
            exclude: Vec::new(),
        };

        let query = serialize_to_query(&params, "Tag").unwrap();
        assert_eq!(query.get("include"), Some(&"1,2,3".to_string()));
        assert!(!query.contains_key("exclude"));
    }

    #[test]
    fn test_serialize_to_query_unit_params_is_empty() {
        let query = serialize_to_query(&(), "Variation").unwrap();
        assert!(query.is_empty());
    }

    #[test]
    fn test_to_body_skips_unset_fields() {
        let tag = MockTag {
            id: None,
            name: Some("Featured".to_string()),
        };

        let body = to_body(&tag, "Tag").unwrap();
        assert_eq!(body.to_string(), r#"{"name":"Featured"}"#);
    }

    #[test]
    fn test_resource_trait_bounds() {
        fn assert_trait_bounds<T: RestResource>() {}
        assert_trait_bounds::<MockTag>();
        assert_trait_bounds::<MockVariation>();
    }

    #[tokio::test]
    async fn test_operations_send_the_declared_method() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/wp-json/wc/v3/tags/34"))
            .and(body_json(json!({"name": "Renamed"})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"id": 34, "name": "Renamed"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let config = WooCommerceConfig::builder()
            .store_url(StoreUrl::new(server.uri()).unwrap())
            .build()
            .unwrap();
        let client = RestClient::new(&config).unwrap();
        let changes = MockTag {
            id: None,
            name: Some("Renamed".to_string()),
        };

        let updated = MockTag::update(&client, &[], 34, &changes).await.unwrap();

        assert_eq!(updated.name.as_deref(), Some("Renamed"));
    }
}
