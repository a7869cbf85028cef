//! HTTP response types for the WooCommerce API SDK.
//!
//! This module provides the [`HttpResponse`] type and the pagination metadata
//! WordPress attaches to collection responses.

use std::collections::HashMap;

/// Pagination information parsed from the `Link` header.
///
/// WordPress advertises neighbouring pages as `page=N` query parameters in
/// `Link` header URLs:
///
/// ```text
/// <https://shop.example.com/wp-json/wc/v3/products/tags?page=3>; rel="next",
/// <https://shop.example.com/wp-json/wc/v3/products/tags?page=1>; rel="prev"
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PaginationInfo {
    /// The previous page number, if available.
    pub prev_page: Option<u32>,
    /// The next page number, if available.
    pub next_page: Option<u32>,
}

impl PaginationInfo {
    /// Parses pagination info from a `Link` header value.
    ///
    /// Both `rel="prev"` (WordPress) and `rel="previous"` are recognised.
    /// Links without a numeric `page` parameter are ignored.
    #[must_use]
    pub fn parse_link_header(header_value: &str) -> Self {
        let mut result = Self::default();

        for link in header_value.split(',') {
            let mut parts = link.trim().split(';');

            let url = parts
                .next()
                .map(|s| s.trim().trim_start_matches('<').trim_end_matches('>'));

            let rel = parts.find_map(|part| {
                part.trim()
                    .strip_prefix("rel=")
                    .map(|value| value.trim_matches('"'))
            });

            if let (Some(url), Some(rel)) = (url, rel) {
                let Some(page) = Self::extract_page(url) else {
                    continue;
                };
                match rel {
                    "prev" | "previous" => result.prev_page = Some(page),
                    "next" => result.next_page = Some(page),
                    _ => {}
                }
            }
        }

        result
    }

    /// Extracts the `page` parameter from a URL.
    fn extract_page(url: &str) -> Option<u32> {
        let (_, query) = url.split_once('?')?;

        query.split('&').find_map(|param| {
            let (key, value) = param.split_once('=')?;
            if key == "page" {
                value.parse().ok()
            } else {
                None
            }
        })
    }
}

/// An HTTP response from the WooCommerce REST API.
///
/// Contains the response status code, headers, body, and the WordPress
/// collection headers (`X-WP-Total`, `X-WP-TotalPages`, `Link`).
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lower-cased name (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
    /// Total number of records in the collection (from `X-WP-Total`).
    pub total: Option<u64>,
    /// Total number of pages in the collection (from `X-WP-TotalPages`).
    pub total_pages: Option<u32>,
    /// Neighbouring pages (from `Link`).
    pub pagination: PaginationInfo,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, parsing the WordPress collection headers.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let pagination = first_header(&headers, "link")
            .map(PaginationInfo::parse_link_header)
            .unwrap_or_default();

        let total = first_header(&headers, "x-wp-total").and_then(|v| v.trim().parse().ok());

        let total_pages =
            first_header(&headers, "x-wp-totalpages").and_then(|v| v.trim().parse().ok());

        Self {
            code,
            headers,
            body,
            total,
            total_pages,
            pagination,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header, if present.
    ///
    /// Header names are matched case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        first_header(&self.headers, &name.to_ascii_lowercase())
    }
}

fn first_header<'a>(headers: &'a HashMap<String, Vec<String>>, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|values| values.first())
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn headers(pairs: &[(&str, &str)]) -> HashMap<String, Vec<String>> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), vec![(*v).to_string()]))
            .collect()
    }

    #[test]
    fn test_is_ok_returns_true_for_2xx() {
        for code in 200..=299 {
            let response = HttpResponse::new(code, HashMap::new(), json!({}));
            assert!(
                response.is_ok(),
                "Expected is_ok() to be true for code {code}"
            );
        }
    }

    #[test]
    fn test_is_ok_returns_false_for_4xx_and_5xx() {
        for code in [400, 401, 404, 500, 501] {
            let response = HttpResponse::new(code, HashMap::new(), json!({}));
            assert!(!response.is_ok());
        }
    }

    #[test]
    fn test_link_header_parsing() {
        let link = r#"<https://shop.example.com/wp-json/wc/v3/products/tags?page=1>; rel="prev", <https://shop.example.com/wp-json/wc/v3/products/tags?page=3>; rel="next""#;
        let info = PaginationInfo::parse_link_header(link);
        assert_eq!(info.prev_page, Some(1));
        assert_eq!(info.next_page, Some(3));

        let link = r#"<https://shop.example.com/wp-json/wc/v3/products/tags?per_page=10&page=2>; rel="next""#;
        let info = PaginationInfo::parse_link_header(link);
        assert_eq!(info.next_page, Some(2));
        assert!(info.prev_page.is_none());

        let link = r#"<https://shop.example.com/wp-json/wc/v3/products/tags?page=4>; rel="previous""#;
        let info = PaginationInfo::parse_link_header(link);
        assert_eq!(info.prev_page, Some(4));
        assert!(info.next_page.is_none());
    }

    #[test]
    fn test_link_header_ignores_links_without_page() {
        let link = r#"<https://shop.example.com/wp-json/wc/v3/products/tags>; rel="next", <https://shop.example.com/wp-json/wc/v3/products/tags?page=abc>; rel="prev""#;
        let info = PaginationInfo::parse_link_header(link);
        assert_eq!(info, PaginationInfo::default());
    }

    #[test]
    fn test_wp_total_headers_parsing() {
        let response = HttpResponse::new(
            200,
            headers(&[("x-wp-total", "42"), ("x-wp-totalpages", "5")]),
            json!([]),
        );
        assert_eq!(response.total, Some(42));
        assert_eq!(response.total_pages, Some(5));
    }

    #[test]
    fn test_missing_or_invalid_wp_headers_are_none() {
        let response = HttpResponse::new(200, headers(&[("x-wp-total", "many")]), json!([]));
        assert!(response.total.is_none());
        assert!(response.total_pages.is_none());
        assert_eq!(response.pagination, PaginationInfo::default());
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let response = HttpResponse::new(200, headers(&[("x-wp-total", "7")]), json!([]));
        assert_eq!(response.header("X-WP-Total"), Some("7"));
        assert!(response.header("X-Missing").is_none());
    }
}
