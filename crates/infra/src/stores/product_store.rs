use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use storefront_catalog::{Product, ProductVariant};
use storefront_core::ProductId;

use super::StoreError;

/// Read access to the product collection (the system of record).
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Fetch one product document by id (top-level or child).
    async fn find_product(&self, product_id: ProductId) -> Result<Option<Product>, StoreError>;

    /// All variants whose ancestor chain includes `product_id`, in creation
    /// order.
    async fn variants_of(&self, product_id: ProductId)
    -> Result<Vec<ProductVariant>, StoreError>;
}

#[async_trait]
impl<S> ProductStore for Arc<S>
where
    S: ProductStore + ?Sized,
{
    async fn find_product(&self, product_id: ProductId) -> Result<Option<Product>, StoreError> {
        (**self).find_product(product_id).await
    }

    async fn variants_of(
        &self,
        product_id: ProductId,
    ) -> Result<Vec<ProductVariant>, StoreError> {
        (**self).variants_of(product_id).await
    }
}

/// In-memory product store for tests/dev.
///
/// Production deployments back this trait with the platform's own product
/// service; the publisher only ever reads.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    products: RwLock<HashMap<ProductId, Product>>,
    variants: RwLock<Vec<ProductVariant>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a product document.
    pub fn upsert_product(&self, product: Product) {
        if let Ok(mut map) = self.products.write() {
            map.insert(product.id, product);
        }
    }

    /// Insert or replace a variant document.
    pub fn upsert_variant(&self, variant: ProductVariant) {
        if let Ok(mut list) = self.variants.write() {
            if let Some(existing) = list.iter_mut().find(|v| v.id == variant.id) {
                *existing = variant;
            } else {
                list.push(variant);
            }
        }
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn find_product(&self, product_id: ProductId) -> Result<Option<Product>, StoreError> {
        let map = self
            .products
            .read()
            .map_err(|_| StoreError::Backend("product store lock poisoned".to_string()))?;
        Ok(map.get(&product_id).cloned())
    }

    async fn variants_of(
        &self,
        product_id: ProductId,
    ) -> Result<Vec<ProductVariant>, StoreError> {
        let list = self
            .variants
            .read()
            .map_err(|_| StoreError::Backend("product store lock poisoned".to_string()))?;

        let mut matched: Vec<ProductVariant> = list
            .iter()
            .filter(|v| v.belongs_to(product_id))
            .cloned()
            .collect();
        matched.sort_by_key(|v| (v.created_at, *v.id.as_uuid()));
        Ok(matched)
    }
}
