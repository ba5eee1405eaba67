use thiserror::Error;

use storefront_core::{ShopId, UserId};

use crate::grants::Permission;
use crate::membership::ShopMembership;

/// A fully resolved principal for authorization decisions.
///
/// Construction of this object is intentionally decoupled from storage and
/// transport: the API layer derives grants from claims and a policy source,
/// then threads the principal explicitly through every call that needs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub user_id: UserId,
    /// Grants that apply in every shop.
    pub global_permissions: Vec<Permission>,
    /// Shop-scoped grants.
    pub memberships: Vec<ShopMembership>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("forbidden: missing permission '{0}'")]
    Forbidden(String),
}

impl Principal {
    /// Whether this principal holds `required` for resources of `shop_id`.
    ///
    /// A global grant (wildcard or exact) authorizes in every shop; a
    /// shop-scoped grant authorizes only within its membership.
    pub fn has_permission(&self, required: &Permission, shop_id: ShopId) -> bool {
        if grant_matches(&self.global_permissions, required) {
            return true;
        }
        self.memberships
            .iter()
            .filter(|m| m.shop_id == shop_id)
            .any(|m| grant_matches(&m.permissions, required))
    }

    /// Whether this principal holds `required` globally or in at least one
    /// shop.
    ///
    /// Used as the cheap pre-check before any per-resource filtering: a
    /// caller with no grant anywhere is rejected before data is touched.
    pub fn has_permission_anywhere(&self, required: &Permission) -> bool {
        grant_matches(&self.global_permissions, required)
            || self
                .memberships
                .iter()
                .any(|m| grant_matches(&m.permissions, required))
    }
}

fn grant_matches(granted: &[Permission], required: &Permission) -> bool {
    granted
        .iter()
        .any(|p| p.is_wildcard() || p.as_str() == required.as_str())
}

/// Authorize a principal for a shop-scoped action.
///
/// - No IO
/// - No panics
/// - No business logic (pure policy check)
pub fn authorize(
    principal: &Principal,
    required: &Permission,
    shop_id: ShopId,
) -> Result<(), AuthzError> {
    if principal.has_permission(required, shop_id) {
        Ok(())
    } else {
        Err(AuthzError::Forbidden(required.as_str().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn principal(global: Vec<Permission>, memberships: Vec<ShopMembership>) -> Principal {
        Principal {
            user_id: UserId::new(),
            global_permissions: global,
            memberships,
        }
    }

    #[test]
    fn global_wildcard_authorizes_any_shop() {
        let p = principal(vec![Permission::new("*")], Vec::new());
        let shop = ShopId::new();
        assert!(authorize(&p, &Permission::new("products.create"), shop).is_ok());
    }

    #[test]
    fn global_exact_grant_authorizes_any_shop() {
        let p = principal(vec![Permission::new("products.create")], Vec::new());
        assert!(p.has_permission(&Permission::new("products.create"), ShopId::new()));
        assert!(!p.has_permission(&Permission::new("catalog.read"), ShopId::new()));
    }

    #[test]
    fn shop_grant_is_scoped_to_its_shop() {
        let granted_shop = ShopId::new();
        let other_shop = ShopId::new();
        let p = principal(
            Vec::new(),
            vec![ShopMembership {
                shop_id: granted_shop,
                permissions: vec![Permission::new("products.create")],
            }],
        );

        assert!(authorize(&p, &Permission::new("products.create"), granted_shop).is_ok());
        let err = authorize(&p, &Permission::new("products.create"), other_shop).unwrap_err();
        assert_eq!(err, AuthzError::Forbidden("products.create".to_string()));
    }

    #[test]
    fn shop_wildcard_authorizes_within_the_shop_only() {
        let shop = ShopId::new();
        let p = principal(
            Vec::new(),
            vec![ShopMembership {
                shop_id: shop,
                permissions: vec![Permission::new("*")],
            }],
        );

        assert!(p.has_permission(&Permission::new("products.create"), shop));
        assert!(!p.has_permission(&Permission::new("products.create"), ShopId::new()));
    }

    #[test]
    fn anywhere_check_sees_shop_scoped_grants() {
        let shop = ShopId::new();
        let p = principal(
            Vec::new(),
            vec![ShopMembership {
                shop_id: shop,
                permissions: vec![Permission::new("products.create")],
            }],
        );

        assert!(p.has_permission_anywhere(&Permission::new("products.create")));
        assert!(!p.has_permission_anywhere(&Permission::new("catalog.read")));
    }

    #[test]
    fn empty_principal_is_denied() {
        let p = principal(Vec::new(), Vec::new());
        assert!(!p.has_permission_anywhere(&Permission::new("products.create")));
        assert!(authorize(&p, &Permission::new("products.create"), ShopId::new()).is_err());
    }
}
