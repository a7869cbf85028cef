//! Version-specific REST resource implementations.
//!
//! Resources are grouped by API namespace so that a future namespace can
//! change a record's shape without disturbing the others:
//!
//! ```text
//! resources/
//!   mod.rs           <- This file (re-exports the latest namespace)
//!   wc_v3/
//!     mod.rs         <- Namespace-specific resources
//!     common/        <- Value objects shared by its resources
//! ```
//!
//! The latest namespace is re-exported at this module level:
//!
//! ```rust,ignore
//! use woocommerce_api::rest::resources::ProductTag;  // Latest namespace
//!
//! // Or explicitly:
//! use woocommerce_api::rest::resources::wc_v3::ProductTag;
//! ```

pub mod wc_v3;

pub use wc_v3::*;
