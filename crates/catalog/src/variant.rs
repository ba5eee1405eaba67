//! Variant documents and their catalog-side projection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_core::{ProductId, ShopId};

/// A purchasable variant of a top-level product.
///
/// Inventory semantics:
/// - `inventory_management`: whether stock is tracked for this variant at all.
///   Untracked variants are always sellable.
/// - `inventory_policy`: when true, selling stops at zero stock (no
///   backorder).
/// - `inventory_quantity`: the raw stored stock count. The sellable quantity
///   may differ once reservations are taken into account; see
///   [`QuantityResolver`](crate::quantity::QuantityResolver).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductVariant {
    pub id: ProductId,
    pub shop_id: ShopId,
    pub ancestors: Vec<ProductId>,
    pub title: String,
    #[serde(default)]
    pub option_title: Option<String>,
    #[serde(default)]
    pub sku: Option<String>,
    /// Unit price in minor currency units (e.g. cents).
    #[serde(default)]
    pub price: Option<u64>,
    pub inventory_management: bool,
    pub inventory_policy: bool,
    pub inventory_quantity: i64,
    #[serde(default)]
    pub low_inventory_warning_threshold: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductVariant {
    /// Whether this variant's ancestor chain includes `product_id`.
    pub fn belongs_to(&self, product_id: ProductId) -> bool {
        self.ancestors.contains(&product_id)
    }

    /// Project this variant into its catalog representation.
    ///
    /// Live stock counts must never leak into the read-optimized catalog, so
    /// `inventory_quantity` is dropped here; the catalog carries only the
    /// derived status booleans at the entry level.
    pub fn to_catalog(&self) -> CatalogVariant {
        CatalogVariant {
            id: self.id,
            shop_id: self.shop_id,
            ancestors: self.ancestors.clone(),
            title: self.title.clone(),
            option_title: self.option_title.clone(),
            sku: self.sku.clone(),
            price: self.price,
            inventory_management: self.inventory_management,
            inventory_policy: self.inventory_policy,
            low_inventory_warning_threshold: self.low_inventory_warning_threshold,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// A variant as stored inside a catalog entry: the source variant minus the
/// mutable `inventory_quantity` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogVariant {
    pub id: ProductId,
    pub shop_id: ShopId,
    pub ancestors: Vec<ProductId>,
    pub title: String,
    #[serde(default)]
    pub option_title: Option<String>,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub price: Option<u64>,
    pub inventory_management: bool,
    pub inventory_policy: bool,
    #[serde(default)]
    pub low_inventory_warning_threshold: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
