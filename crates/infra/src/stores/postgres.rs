//! Postgres-backed catalog store.
//!
//! Entries are stored as JSONB documents keyed by product id, which keeps the
//! persisted shape identical to the wire shape and lets `patch_status` merge
//! the availability booleans server-side.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use storefront_catalog::{CatalogEntry, StatusFlags};
use storefront_core::{ProductId, ShopId};

use super::{CatalogStore, StoreError};

/// Postgres-backed catalog store.
///
/// ## Storage model
///
/// One row per catalog entry: `product_id` primary key, `shop_id` for shop
/// listings, and the full entry document as JSONB. `put` replaces the
/// document wholesale via upsert; `patch_status` merges only the three
/// availability booleans with a JSONB concatenation, so an absent row stays
/// absent.
pub struct PostgresCatalogStore {
    pool: PgPool,
}

impl PostgresCatalogStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the backing table if it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS catalog_entries (
                product_id UUID PRIMARY KEY,
                shop_id UUID NOT NULL,
                entry JSONB NOT NULL,
                updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(to_backend)?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS catalog_entries_shop_idx ON catalog_entries (shop_id)",
        )
        .execute(&self.pool)
        .await
        .map_err(to_backend)?;

        Ok(())
    }
}

fn to_backend(err: sqlx::Error) -> StoreError {
    StoreError::Backend(err.to_string())
}

fn decode_entry(value: serde_json::Value) -> Result<CatalogEntry, StoreError> {
    serde_json::from_value(value).map_err(|e| StoreError::Serialization(e.to_string()))
}

#[async_trait]
impl CatalogStore for PostgresCatalogStore {
    async fn get(&self, product_id: ProductId) -> Result<Option<CatalogEntry>, StoreError> {
        let row = sqlx::query("SELECT entry FROM catalog_entries WHERE product_id = $1")
            .bind(*product_id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(to_backend)?;

        match row {
            Some(row) => {
                let value: serde_json::Value = row.try_get("entry").map_err(to_backend)?;
                Ok(Some(decode_entry(value)?))
            }
            None => Ok(None),
        }
    }

    async fn put(&self, product_id: ProductId, entry: CatalogEntry) -> Result<(), StoreError> {
        let document =
            serde_json::to_value(&entry).map_err(|e| StoreError::Serialization(e.to_string()))?;

        sqlx::query(
            r#"
            INSERT INTO catalog_entries (product_id, shop_id, entry)
            VALUES ($1, $2, $3)
            ON CONFLICT (product_id)
            DO UPDATE SET
                shop_id = EXCLUDED.shop_id,
                entry = EXCLUDED.entry,
                updated_at = NOW()
            "#,
        )
        .bind(*product_id.as_uuid())
        .bind(*entry.shop_id.as_uuid())
        .bind(document)
        .execute(&self.pool)
        .await
        .map_err(to_backend)?;

        Ok(())
    }

    async fn patch_status(
        &self,
        product_id: ProductId,
        status: StatusFlags,
    ) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            UPDATE catalog_entries
            SET entry = entry || jsonb_build_object(
                    'is_sold_out', $2::boolean,
                    'is_low_quantity', $3::boolean,
                    'is_backorder', $4::boolean
                ),
                updated_at = NOW()
            WHERE product_id = $1
            "#,
        )
        .bind(*product_id.as_uuid())
        .bind(status.is_sold_out)
        .bind(status.is_low_quantity)
        .bind(status.is_backorder)
        .execute(&self.pool)
        .await
        .map_err(to_backend)?;

        Ok(())
    }

    async fn list_shop(&self, shop_id: ShopId) -> Result<Vec<CatalogEntry>, StoreError> {
        let rows =
            sqlx::query("SELECT entry FROM catalog_entries WHERE shop_id = $1 ORDER BY product_id")
                .bind(*shop_id.as_uuid())
                .fetch_all(&self.pool)
                .await
                .map_err(to_backend)?;

        rows.into_iter()
            .map(|row| {
                let value: serde_json::Value = row.try_get("entry").map_err(to_backend)?;
                decode_entry(value)
            })
            .collect()
    }
}
