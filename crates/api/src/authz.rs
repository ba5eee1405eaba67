//! API-side authorization policy.
//!
//! Turns the request's verified token context into an explicit
//! [`Principal`], mapping roles to permissions on the way. Handlers thread
//! the principal into every check; no ambient identity exists past this
//! point.

use storefront_auth::{Permission, Principal, Role, ShopMembership};

use crate::context::PrincipalContext;

/// Resolve the request's principal from its verified token context.
pub fn principal_from_context(ctx: &PrincipalContext) -> Principal {
    Principal {
        user_id: ctx.user_id(),
        global_permissions: permissions_from_roles(ctx.roles()),
        memberships: ctx
            .shops()
            .iter()
            .map(|grant| ShopMembership {
                shop_id: grant.shop_id,
                permissions: permissions_from_roles(&grant.roles),
            })
            .collect(),
    }
}

/// Minimal role→permission mapping stub.
///
/// This is intentionally simple until a real policy source exists (e.g.
/// DB-backed).
pub fn permissions_from_roles(roles: &[Role]) -> Vec<Permission> {
    // Convention: "admin" grants all permissions in its scope.
    if roles.iter().any(|r| r.as_str() == "admin") {
        return vec![Permission::new("*")];
    }

    let mut permissions = Vec::new();
    for role in roles {
        if role.as_str() == "merchandiser" {
            permissions.push(Permission::new("products.create"));
        }
    }
    permissions
}

#[cfg(test)]
mod tests {
    use storefront_auth::ShopRoles;
    use storefront_core::{ShopId, UserId};

    use super::*;

    #[test]
    fn admin_role_maps_to_the_wildcard() {
        let perms = permissions_from_roles(&[Role::new("viewer"), Role::new("admin")]);
        assert_eq!(perms, vec![Permission::new("*")]);
    }

    #[test]
    fn unknown_roles_map_to_nothing() {
        assert!(permissions_from_roles(&[Role::new("viewer")]).is_empty());
    }

    #[test]
    fn shop_roles_become_shop_scoped_grants() {
        let shop = ShopId::new();
        let ctx = PrincipalContext::new(
            UserId::new(),
            vec![Role::new("viewer")],
            vec![ShopRoles {
                shop_id: shop,
                roles: vec![Role::new("merchandiser")],
            }],
        );

        let principal = principal_from_context(&ctx);
        assert!(principal.global_permissions.is_empty());
        assert!(principal.has_permission(&Permission::new("products.create"), shop));
        assert!(!principal.has_permission(&Permission::new("products.create"), ShopId::new()));
    }
}
