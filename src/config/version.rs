//! WooCommerce REST API version definitions.
//!
//! This module provides the [`ApiVersion`] enum for specifying which
//! namespace of the WooCommerce REST API to use.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// WooCommerce REST API version.
///
/// WooCommerce exposes its REST API under WordPress namespaces of the form
/// `wc/vN`. `wc/v3` is the current stable namespace; `wc/v1` and `wc/v2`
/// remain available on most installs for backwards compatibility.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::ApiVersion;
///
/// let version = ApiVersion::latest();
/// assert_eq!(version, ApiVersion::V3);
///
/// let version: ApiVersion = "wc/v2".parse().unwrap();
/// assert_eq!(version, ApiVersion::V2);
///
/// assert_eq!(format!("{}", ApiVersion::V3), "wc/v3");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// The `wc/v1` namespace (legacy).
    V1,
    /// The `wc/v2` namespace (legacy).
    V2,
    /// The `wc/v3` namespace.
    V3,
    /// Custom namespace for future or plugin-provided versions (e.g., `wc/v4`).
    Custom(String),
}

impl ApiVersion {
    /// Returns the latest stable API version.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V3
    }

    /// Returns `true` if this is a known API version.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self::latest()
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V1 => f.write_str("wc/v1"),
            Self::V2 => f.write_str("wc/v2"),
            Self::V3 => f.write_str("wc/v3"),
            Self::Custom(namespace) => f.write_str(namespace),
        }
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    /// Parses `wc/vN` or the short form `vN`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_matches('/');
        let short = trimmed.strip_prefix("wc/").unwrap_or(trimmed);

        let number = short
            .strip_prefix('v')
            .filter(|n| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()))
            .ok_or_else(|| ConfigError::InvalidApiVersion {
                version: s.to_string(),
            })?;

        Ok(match number {
            "1" => Self::V1,
            "2" => Self::V2,
            "3" => Self::V3,
            other => Self::Custom(format!("wc/v{other}")),
        })
    }
}
