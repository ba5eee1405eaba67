use storefront_auth::{Role, ShopRoles};
use storefront_core::UserId;

/// Principal context for a request (authenticated identity + role grants).
///
/// Built by the auth middleware from verified token claims and carried in
/// request extensions. Handlers turn it into a full
/// [`Principal`](storefront_auth::Principal) via [`crate::authz`] when they
/// need to make an authorization decision; nothing downstream reads ambient
/// identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrincipalContext {
    user_id: UserId,
    roles: Vec<Role>,
    shops: Vec<ShopRoles>,
}

impl PrincipalContext {
    pub fn new(user_id: UserId, roles: Vec<Role>, shops: Vec<ShopRoles>) -> Self {
        Self {
            user_id,
            roles,
            shops,
        }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Roles that apply in every shop.
    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    /// Shop-scoped role grants.
    pub fn shops(&self) -> &[ShopRoles] {
        &self.shops
    }
}
