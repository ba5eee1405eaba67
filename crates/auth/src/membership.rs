//! Per-shop permission grants.

use serde::{Deserialize, Serialize};

use storefront_core::ShopId;

use crate::grants::Permission;

/// A principal's grants within one shop.
///
/// This is an authorization boundary object: it states *which shop* the
/// grants apply to. Permissions listed here authorize actions only on
/// resources belonging to that shop; global grants live on the
/// [`Principal`](crate::Principal) directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopMembership {
    pub shop_id: ShopId,
    pub permissions: Vec<Permission>,
}
