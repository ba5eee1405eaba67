//! Variant-status predicates.
//!
//! Three independent boolean predicates over a product's variant list, plus
//! [`StatusFlags`] bundling them for the catalog projection. All three are
//! pure: no IO, no error paths. Malformed combinations of inventory fields
//! simply fall out of the boolean rules rather than being rejected.

use serde::{Deserialize, Serialize};

use crate::quantity::QuantityResolver;
use crate::variant::ProductVariant;

/// Product-level availability booleans derived from the variant list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusFlags {
    pub is_sold_out: bool,
    pub is_low_quantity: bool,
    pub is_backorder: bool,
}

impl StatusFlags {
    /// Evaluate all three predicates over one variant list.
    pub fn evaluate<Q>(variants: &[ProductVariant], quantity: &Q) -> Self
    where
        Q: QuantityResolver + ?Sized,
    {
        Self {
            is_sold_out: is_sold_out(variants, quantity),
            is_low_quantity: is_low_quantity(variants, quantity),
            is_backorder: is_backorder(variants),
        }
    }
}

/// True when every variant tracks inventory and has no sellable quantity
/// left.
///
/// A variant that does not track inventory is always sellable, so one
/// untracked variant keeps the whole product available. An empty variant list
/// is vacuously sold out; callers publishing option-less products rely on
/// this staying vacuous.
pub fn is_sold_out<Q>(variants: &[ProductVariant], quantity: &Q) -> bool
where
    Q: QuantityResolver + ?Sized,
{
    variants
        .iter()
        .all(|v| v.inventory_management && quantity.variant_quantity(v) <= 0)
}

/// True when at least one tracked, policy-enforcing variant sits at or below
/// its configured warning threshold.
///
/// A resolved quantity of exactly zero is excluded: that variant is sold out,
/// not running low.
pub fn is_low_quantity<Q>(variants: &[ProductVariant], quantity: &Q) -> bool
where
    Q: QuantityResolver + ?Sized,
{
    variants.iter().any(|v| {
        if !(v.inventory_management && v.inventory_policy) {
            return false;
        }
        let q = quantity.variant_quantity(v);
        q != 0 && q <= v.low_inventory_warning_threshold
    })
}

/// True when every variant tracks inventory, permits overselling (no
/// inventory policy), and has a stored quantity of exactly zero.
///
/// This predicate reads the raw `inventory_quantity` field directly, not the
/// resolver the other two predicates consult. Reservation holds therefore
/// never affect backorder status. An empty variant list is vacuously on
/// backorder.
pub fn is_backorder(variants: &[ProductVariant]) -> bool {
    variants
        .iter()
        .all(|v| !v.inventory_policy && v.inventory_management && v.inventory_quantity == 0)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use storefront_core::{ProductId, ShopId};

    use super::*;
    use crate::quantity::StoredQuantity;

    fn variant(management: bool, policy: bool, quantity: i64, threshold: i64) -> ProductVariant {
        let now = Utc::now();
        ProductVariant {
            id: ProductId::new(),
            shop_id: ShopId::new(),
            ancestors: vec![ProductId::new()],
            title: "Variant".to_string(),
            option_title: None,
            sku: None,
            price: Some(1000),
            inventory_management: management,
            inventory_policy: policy,
            inventory_quantity: quantity,
            low_inventory_warning_threshold: threshold,
            created_at: now,
            updated_at: now,
        }
    }

    /// Resolver that reports the same sellable quantity for every variant,
    /// regardless of what the variant stores.
    struct FixedQuantity(i64);

    impl QuantityResolver for FixedQuantity {
        fn variant_quantity(&self, _variant: &ProductVariant) -> i64 {
            self.0
        }
    }

    #[test]
    fn empty_variant_list_is_vacuously_sold_out() {
        assert!(is_sold_out(&[], &StoredQuantity));
    }

    #[test]
    fn tracked_variant_with_zero_stock_is_sold_out() {
        let vs = vec![variant(true, true, 0, 5)];
        assert!(is_sold_out(&vs, &StoredQuantity));
    }

    #[test]
    fn untracked_variant_keeps_product_available() {
        let vs = vec![variant(false, false, 0, 5)];
        assert!(!is_sold_out(&vs, &StoredQuantity));
    }

    #[test]
    fn one_stocked_variant_clears_sold_out() {
        let vs = vec![variant(true, true, 0, 5), variant(true, true, 3, 5)];
        assert!(!is_sold_out(&vs, &StoredQuantity));
    }

    #[test]
    fn sold_out_consults_the_resolver_not_the_stored_field() {
        // Stored quantity says stock exists; the resolver (which knows about
        // reservation holds) says none is sellable.
        let vs = vec![variant(true, true, 5, 5)];
        assert!(is_sold_out(&vs, &FixedQuantity(0)));
        assert!(!is_sold_out(&vs, &StoredQuantity));
    }

    #[test]
    fn quantity_at_or_below_threshold_is_low() {
        let vs = vec![variant(true, true, 3, 5)];
        assert!(is_low_quantity(&vs, &StoredQuantity));

        let vs = vec![variant(true, true, 5, 5)];
        assert!(is_low_quantity(&vs, &StoredQuantity));
    }

    #[test]
    fn zero_quantity_is_sold_out_territory_not_low() {
        let vs = vec![variant(true, true, 0, 5)];
        assert!(!is_low_quantity(&vs, &StoredQuantity));
    }

    #[test]
    fn low_quantity_requires_tracking_and_policy() {
        let vs = vec![variant(false, true, 3, 5)];
        assert!(!is_low_quantity(&vs, &StoredQuantity));

        let vs = vec![variant(true, false, 3, 5)];
        assert!(!is_low_quantity(&vs, &StoredQuantity));
    }

    #[test]
    fn one_low_variant_is_enough() {
        let vs = vec![variant(true, true, 100, 5), variant(true, true, 2, 5)];
        assert!(is_low_quantity(&vs, &StoredQuantity));
    }

    #[test]
    fn low_quantity_consults_the_resolver() {
        // Plenty in the stored field, almost nothing actually sellable.
        let vs = vec![variant(true, true, 100, 5)];
        assert!(is_low_quantity(&vs, &FixedQuantity(3)));
    }

    #[test]
    fn negative_resolved_quantity_counts_as_low() {
        // Oversold variants report negative availability; nonzero and under
        // the threshold, so the warning fires.
        let vs = vec![variant(true, true, 100, 5)];
        assert!(is_low_quantity(&vs, &FixedQuantity(-2)));
    }

    #[test]
    fn empty_variant_list_is_vacuously_backorder() {
        assert!(is_backorder(&[]));
    }

    #[test]
    fn oversellable_tracked_variants_at_zero_are_backorder() {
        let vs = vec![variant(true, false, 0, 5), variant(true, false, 0, 5)];
        assert!(is_backorder(&vs));
    }

    #[test]
    fn any_stocked_variant_clears_backorder() {
        let vs = vec![variant(true, false, 0, 5), variant(true, false, 1, 5)];
        assert!(!is_backorder(&vs));
    }

    #[test]
    fn policy_enforcing_variant_blocks_backorder() {
        let vs = vec![variant(true, true, 0, 5)];
        assert!(!is_backorder(&vs));
    }

    #[test]
    fn untracked_variant_blocks_backorder() {
        let vs = vec![variant(false, false, 0, 5)];
        assert!(!is_backorder(&vs));
    }

    #[test]
    fn backorder_ignores_the_resolver() {
        // Raw stored quantity is zero, so the product is on backorder even
        // though the resolver would report sellable stock.
        let vs = vec![variant(true, false, 0, 5)];
        let flags = StatusFlags::evaluate(&vs, &FixedQuantity(7));
        assert!(flags.is_backorder);
        assert!(!flags.is_sold_out);
    }

    #[test]
    fn evaluate_bundles_all_three_predicates() {
        let vs = vec![variant(true, true, 3, 5)];
        let flags = StatusFlags::evaluate(&vs, &StoredQuantity);
        assert_eq!(
            flags,
            StatusFlags {
                is_sold_out: false,
                is_low_quantity: true,
                is_backorder: false,
            }
        );
    }

    mod proptest_tests {
        use proptest::collection::vec as pvec;
        use proptest::prelude::*;

        use super::*;

        fn variants_from(specs: Vec<(bool, bool, i64, i64)>) -> Vec<ProductVariant> {
            specs
                .into_iter()
                .map(|(m, p, q, t)| variant(m, p, q, t))
                .collect()
        }

        fn arb_specs() -> impl Strategy<Value = Vec<(bool, bool, i64, i64)>> {
            pvec(
                (any::<bool>(), any::<bool>(), -20i64..20, 0i64..10),
                0..8,
            )
        }

        proptest! {
            #[test]
            fn predicates_never_panic(specs in arb_specs()) {
                let vs = variants_from(specs);
                let _ = StatusFlags::evaluate(&vs, &StoredQuantity);
            }

            #[test]
            fn any_untracked_variant_forces_not_sold_out(
                specs in arb_specs(),
                threshold in 0i64..10,
            ) {
                let mut vs = variants_from(specs);
                vs.push(variant(false, false, 0, threshold));
                prop_assert!(!is_sold_out(&vs, &StoredQuantity));
            }

            #[test]
            fn no_policy_means_no_low_quantity_warning(
                specs in pvec((any::<bool>(), -20i64..20, 0i64..10), 0..8),
            ) {
                let vs: Vec<_> = specs
                    .into_iter()
                    .map(|(m, q, t)| variant(m, false, q, t))
                    .collect();
                prop_assert!(!is_low_quantity(&vs, &StoredQuantity));
            }

            #[test]
            fn backorder_implies_every_stored_quantity_is_zero(specs in arb_specs()) {
                let vs = variants_from(specs);
                if is_backorder(&vs) {
                    prop_assert!(vs.iter().all(|v| v.inventory_quantity == 0));
                }
            }

            #[test]
            fn sold_out_is_stable_under_reordering(specs in arb_specs()) {
                let vs = variants_from(specs);
                let mut reversed = vs.clone();
                reversed.reverse();
                prop_assert_eq!(
                    is_sold_out(&vs, &StoredQuantity),
                    is_sold_out(&reversed, &StoredQuantity)
                );
            }
        }
    }
}
