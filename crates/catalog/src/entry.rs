//! Read-optimized catalog entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_core::{ProductId, ShopId};

use crate::media::MediaUrlSet;
use crate::product::Product;
use crate::status::StatusFlags;
use crate::variant::{CatalogVariant, ProductVariant};

/// Entry type tag for plain (non-bundle) products.
pub const PRODUCT_SIMPLE: &str = "product-simple";

/// Denormalized storefront projection of one top-level product.
///
/// Keyed by the top-level product id; child-variant ids never key an entry.
/// An entry is a point-in-time snapshot and never the system of record: on
/// any conflict the product store wins, and the next publish replaces the
/// entry wholesale. Between publishes only the three status booleans may be
/// patched in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: ProductId,
    pub shop_id: ShopId,
    #[serde(rename = "type")]
    pub entry_type: String,
    pub title: String,
    pub handle: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub vendor: Option<String>,
    pub is_visible: bool,
    pub media: Vec<MediaUrlSet>,
    pub is_sold_out: bool,
    pub is_low_quantity: bool,
    pub is_backorder: bool,
    pub variants: Vec<CatalogVariant>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CatalogEntry {
    /// Build the catalog projection of a top-level product.
    ///
    /// Descriptive fields and timestamps are copied verbatim from the product
    /// document, so republishing an unchanged product produces an identical
    /// entry. Variants lose their stored stock counts on the way in.
    pub fn project(
        product: &Product,
        variants: &[ProductVariant],
        media: Vec<MediaUrlSet>,
        status: StatusFlags,
    ) -> Self {
        Self {
            id: product.id,
            shop_id: product.shop_id,
            entry_type: PRODUCT_SIMPLE.to_string(),
            title: product.title.clone(),
            handle: product.handle.clone(),
            description: product.description.clone(),
            vendor: product.vendor.clone(),
            is_visible: product.is_visible,
            media,
            is_sold_out: status.is_sold_out,
            is_low_quantity: status.is_low_quantity,
            is_backorder: status.is_backorder,
            variants: variants.iter().map(ProductVariant::to_catalog).collect(),
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }

    /// The three availability booleans currently stored on this entry.
    pub fn status(&self) -> StatusFlags {
        StatusFlags {
            is_sold_out: self.is_sold_out,
            is_low_quantity: self.is_low_quantity,
            is_backorder: self.is_backorder,
        }
    }

    /// Overwrite the availability booleans, leaving every other field alone.
    pub fn apply_status(&mut self, status: StatusFlags) {
        self.is_sold_out = status.is_sold_out;
        self.is_low_quantity = status.is_low_quantity;
        self.is_backorder = status.is_backorder;
    }
}
