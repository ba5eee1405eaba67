//! `storefront-auth` — pure authentication/authorization boundary (zero-trust).
//!
//! This crate is intentionally decoupled from HTTP and storage. The API layer
//! builds a [`Principal`] from verified claims plus a policy source and
//! threads it explicitly into every check; no ambient request identity exists
//! anywhere in the workspace.

pub mod authorize;
pub mod claims;
pub mod grants;
pub mod jwt;
pub mod membership;

pub use authorize::{AuthzError, Principal, authorize};
pub use claims::{JwtClaims, ShopRoles, TokenValidationError, validate_claims};
pub use grants::{Permission, Role};
pub use jwt::{Hs256JwtValidator, JwtValidator};
pub use membership::ShopMembership;
