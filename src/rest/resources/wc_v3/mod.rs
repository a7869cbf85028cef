//! Resources of the `wc/v3` API namespace.
//!
//! - [`ProductTag`] with [`ProductTagService`] (`products/tags`)
//! - [`ProductVariation`] with [`ProductVariationService`]
//!   (`products/{product_id}/variations`)
//!
//! Shared value objects live in [`common`].

pub mod common;
mod product_tag;
mod product_variation;

pub use product_tag::{ProductTag, ProductTagListParams, ProductTagService, TagOrderBy};
pub use product_variation::{
    BackorderPolicy, ManageStock, ProductVariation, ProductVariationListParams,
    ProductVariationService, StockStatus, TaxStatus, UnknownManageStock, VariationOrderBy,
    VariationStatus,
};
