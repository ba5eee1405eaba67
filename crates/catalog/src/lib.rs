//! Catalog domain module.
//!
//! This crate contains the product/variant document model, the variant-status
//! predicates, and the catalog-entry projection, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage).

pub mod entry;
pub mod media;
pub mod product;
pub mod quantity;
pub mod status;
pub mod variant;

pub use entry::{CatalogEntry, PRODUCT_SIMPLE};
pub use media::MediaUrlSet;
pub use product::Product;
pub use quantity::{QuantityResolver, StoredQuantity};
pub use status::{StatusFlags, is_backorder, is_low_quantity, is_sold_out};
pub use variant::{CatalogVariant, ProductVariant};
