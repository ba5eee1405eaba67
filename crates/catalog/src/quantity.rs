//! Sellable-quantity resolution.

use std::sync::Arc;

use crate::variant::ProductVariant;

/// Resolves the quantity actually available to sell for a variant.
///
/// The raw `inventory_quantity` stored on the variant is only a starting
/// point: deployments with reservation holds or multi-warehouse stock answer
/// from their own ledgers. The status predicates take the resolver as an
/// injected capability so that logic stays out of this crate.
pub trait QuantityResolver: Send + Sync {
    fn variant_quantity(&self, variant: &ProductVariant) -> i64;
}

impl<Q: QuantityResolver + ?Sized> QuantityResolver for Arc<Q> {
    fn variant_quantity(&self, variant: &ProductVariant) -> i64 {
        (**self).variant_quantity(variant)
    }
}

/// Resolver that answers with the quantity stored on the variant itself.
///
/// The right default where no reservation system exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct StoredQuantity;

impl QuantityResolver for StoredQuantity {
    fn variant_quantity(&self, variant: &ProductVariant) -> i64 {
        variant.inventory_quantity
    }
}
