use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use storefront_auth::{authorize, Permission};
use storefront_core::{DomainError, ProductId, ShopId};
use storefront_infra::{CatalogStore, ProductStore};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/publish/products", post(publish_products))
        .route("/publish/inventory/:id", post(publish_inventory))
        .route("/products", get(list_entries))
        .route("/products/:id", get(get_entry))
}

/// Publish a batch of products to the catalog.
///
/// The caller must hold `products.create` somewhere before any data is
/// touched; after that, products in shops where the grant is missing are
/// dropped from the batch silently. An empty batch after filtering is a
/// not-found, mirroring the unknown-id case.
pub async fn publish_products(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<crate::context::PrincipalContext>,
    Json(body): Json<dto::PublishProductsRequest>,
) -> axum::response::Response {
    if body.product_ids.is_empty() {
        return errors::domain_error_to_response(DomainError::validation(
            "product_ids must not be empty",
        ));
    }

    let product_ids = match dto::parse_product_ids(&body.product_ids) {
        Ok(ids) => ids,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let principal = crate::authz::principal_from_context(&principal);
    let create_products = Permission::new("products.create");

    if !principal.has_permission_anywhere(&create_products) {
        return errors::json_error(
            StatusCode::FORBIDDEN,
            "forbidden",
            "missing permission 'products.create'",
        );
    }

    let mut publishable = Vec::with_capacity(product_ids.len());
    for product_id in product_ids {
        let product = match services.products.find_product(product_id).await {
            Ok(Some(p)) => p,
            Ok(None) => {
                return errors::json_error(
                    StatusCode::NOT_FOUND,
                    "not_found",
                    format!("product not found: {product_id}"),
                )
            }
            Err(e) => return errors::store_error_to_response(e),
        };
        if principal.has_permission(&create_products, product.shop_id) {
            publishable.push(product_id);
        }
    }

    if publishable.is_empty() {
        return errors::json_error(
            StatusCode::NOT_FOUND,
            "not_found",
            "no publishable products found",
        );
    }

    match services.publisher.publish_products(&publishable).await {
        Ok(published) => (
            StatusCode::OK,
            Json(serde_json::json!({ "published": published })),
        )
            .into_response(),
        Err(e) => errors::publish_error_to_response(e),
    }
}

/// Re-derive one published product's availability booleans.
pub async fn publish_inventory(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<crate::context::PrincipalContext>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let product_id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid product id")
        }
    };

    let product = match services.products.find_product(product_id).await {
        Ok(Some(p)) => p,
        Ok(None) => {
            return errors::json_error(
                StatusCode::NOT_FOUND,
                "not_found",
                format!("product not found: {product_id}"),
            )
        }
        Err(e) => return errors::store_error_to_response(e),
    };

    let principal = crate::authz::principal_from_context(&principal);
    if let Err(e) = authorize(&principal, &Permission::new("products.create"), product.shop_id) {
        return errors::json_error(StatusCode::FORBIDDEN, "forbidden", e.to_string());
    }

    match services
        .publisher
        .publish_inventory_adjustment(product_id)
        .await
    {
        Ok(updated) => (
            StatusCode::OK,
            Json(serde_json::json!({ "updated": updated })),
        )
            .into_response(),
        Err(e) => errors::publish_error_to_response(e),
    }
}

pub async fn get_entry(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let product_id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid product id")
        }
    };

    match services.catalog.get(product_id).await {
        Ok(Some(entry)) => (StatusCode::OK, Json(entry)).into_response(),
        Ok(None) => errors::json_error(
            StatusCode::NOT_FOUND,
            "not_found",
            "catalog entry not found",
        ),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn list_entries(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::ListEntriesQuery>,
) -> axum::response::Response {
    let shop_id: ShopId = match query.shop_id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid shop id")
        }
    };

    match services.catalog.list_shop(shop_id).await {
        Ok(entries) => (
            StatusCode::OK,
            Json(serde_json::json!({ "items": entries })),
        )
            .into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}
