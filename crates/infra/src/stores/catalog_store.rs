use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use storefront_catalog::{CatalogEntry, StatusFlags};
use storefront_core::{ProductId, ShopId};

use super::StoreError;

/// The read-optimized catalog collection.
///
/// Two write shapes by design: `put` replaces a document wholesale, and
/// `patch_status` merges just the availability booleans. Nothing else ever
/// mutates an entry.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Fetch the entry keyed by `product_id`.
    async fn get(&self, product_id: ProductId) -> Result<Option<CatalogEntry>, StoreError>;

    /// Insert or replace the entry wholesale.
    async fn put(&self, product_id: ProductId, entry: CatalogEntry) -> Result<(), StoreError>;

    /// Merge the availability booleans into an existing entry.
    ///
    /// Patching an absent key is a no-op (update, not upsert); callers that
    /// need existence gate on [`get`](CatalogStore::get) first.
    async fn patch_status(
        &self,
        product_id: ProductId,
        status: StatusFlags,
    ) -> Result<(), StoreError>;

    /// All entries belonging to one shop.
    async fn list_shop(&self, shop_id: ShopId) -> Result<Vec<CatalogEntry>, StoreError>;
}

#[async_trait]
impl<S> CatalogStore for Arc<S>
where
    S: CatalogStore + ?Sized,
{
    async fn get(&self, product_id: ProductId) -> Result<Option<CatalogEntry>, StoreError> {
        (**self).get(product_id).await
    }

    async fn put(&self, product_id: ProductId, entry: CatalogEntry) -> Result<(), StoreError> {
        (**self).put(product_id, entry).await
    }

    async fn patch_status(
        &self,
        product_id: ProductId,
        status: StatusFlags,
    ) -> Result<(), StoreError> {
        (**self).patch_status(product_id, status).await
    }

    async fn list_shop(&self, shop_id: ShopId) -> Result<Vec<CatalogEntry>, StoreError> {
        (**self).list_shop(shop_id).await
    }
}

/// In-memory catalog store for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryCatalogStore {
    entries: RwLock<HashMap<ProductId, CatalogEntry>>,
}

impl InMemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CatalogStore for InMemoryCatalogStore {
    async fn get(&self, product_id: ProductId) -> Result<Option<CatalogEntry>, StoreError> {
        let map = self
            .entries
            .read()
            .map_err(|_| StoreError::Backend("catalog store lock poisoned".to_string()))?;
        Ok(map.get(&product_id).cloned())
    }

    async fn put(&self, product_id: ProductId, entry: CatalogEntry) -> Result<(), StoreError> {
        let mut map = self
            .entries
            .write()
            .map_err(|_| StoreError::Backend("catalog store lock poisoned".to_string()))?;
        map.insert(product_id, entry);
        Ok(())
    }

    async fn patch_status(
        &self,
        product_id: ProductId,
        status: StatusFlags,
    ) -> Result<(), StoreError> {
        let mut map = self
            .entries
            .write()
            .map_err(|_| StoreError::Backend("catalog store lock poisoned".to_string()))?;
        if let Some(entry) = map.get_mut(&product_id) {
            entry.apply_status(status);
        }
        Ok(())
    }

    async fn list_shop(&self, shop_id: ShopId) -> Result<Vec<CatalogEntry>, StoreError> {
        let map = self
            .entries
            .read()
            .map_err(|_| StoreError::Backend("catalog store lock poisoned".to_string()))?;

        let mut entries: Vec<CatalogEntry> = map
            .values()
            .filter(|e| e.shop_id == shop_id)
            .cloned()
            .collect();
        entries.sort_by_key(|e| *e.id.as_uuid());
        Ok(entries)
    }
}
