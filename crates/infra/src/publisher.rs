//! Catalog publication workflow.

use thiserror::Error;

use storefront_catalog::{CatalogEntry, QuantityResolver, StatusFlags};
use storefront_core::ProductId;

use crate::stores::{CatalogStore, MediaStore, ProductStore, StoreError};

/// Failures surfaced by the publication workflow.
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("product not found: {0}")]
    ProductNotFound(ProductId),
    #[error("no catalog entry for product: {0}")]
    EntryNotFound(ProductId),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Orchestrates publication of products into the read-optimized catalog.
///
/// Stateless apart from its collaborators: the product and media stores are
/// read-only inputs, the catalog store is the only thing written. Entries are
/// replaced wholesale on publish; inventory adjustments patch just the three
/// availability booleans.
pub struct CatalogPublisher<P, M, C, Q> {
    products: P,
    media: M,
    catalog: C,
    quantity: Q,
}

impl<P, M, C, Q> CatalogPublisher<P, M, C, Q>
where
    P: ProductStore,
    M: MediaStore,
    C: CatalogStore,
    Q: QuantityResolver,
{
    pub fn new(products: P, media: M, catalog: C, quantity: Q) -> Self {
        Self {
            products,
            media,
            catalog,
            quantity,
        }
    }

    /// Publish a batch of products.
    ///
    /// Each id is published to completion before the next starts; the batch
    /// result is the conjunction of the gathered per-item outcomes. An
    /// unknown id aborts the batch with an error rather than folding into the
    /// boolean, so entries written before the failure stand.
    pub async fn publish_products(
        &self,
        product_ids: &[ProductId],
    ) -> Result<bool, PublishError> {
        let mut outcomes = Vec::with_capacity(product_ids.len());
        for product_id in product_ids {
            outcomes.push(self.publish_product(*product_id).await?);
        }
        Ok(outcomes.into_iter().all(|written| written))
    }

    async fn publish_product(&self, product_id: ProductId) -> Result<bool, PublishError> {
        // 1) Load the named document; publishing an unknown id is an error,
        //    not a skip.
        let mut product = self
            .products
            .find_product(product_id)
            .await?
            .ok_or(PublishError::ProductNotFound(product_id))?;

        // 2) A child id publishes its top-level ancestor instead.
        if !product.is_top_level() {
            let top_id = product.top_level_id();
            product = self
                .products
                .find_product(top_id)
                .await?
                .ok_or(PublishError::ProductNotFound(top_id))?;
        }

        // 3) Gather the pieces to denormalize.
        let variants = self.products.variants_of(product.id).await?;
        let media = self.media.grid_media(product.id).await?;

        // 4) Derive availability from the variant list.
        let status = StatusFlags::evaluate(&variants, &self.quantity);

        // 5) Replace the entry wholesale, keyed by the top-level id.
        let entry = CatalogEntry::project(&product, &variants, media, status);
        let entry_id = entry.id;
        self.catalog.put(entry_id, entry).await?;

        tracing::debug!(
            product_id = %entry_id,
            shop_id = %product.shop_id,
            variants = variants.len(),
            is_sold_out = status.is_sold_out,
            is_low_quantity = status.is_low_quantity,
            is_backorder = status.is_backorder,
            "published catalog entry"
        );

        Ok(true)
    }

    /// Re-derive the availability booleans for an already-published product
    /// and patch them into its entry.
    ///
    /// Runs on every inventory mutation, so the write is skipped when nothing
    /// changed. Returns whether a write occurred.
    pub async fn publish_inventory_adjustment(
        &self,
        product_id: ProductId,
    ) -> Result<bool, PublishError> {
        // 1) Adjustments patch an existing entry; they never create one.
        let entry = self
            .catalog
            .get(product_id)
            .await?
            .ok_or(PublishError::EntryNotFound(product_id))?;

        // 2) Re-derive availability from the current variant list.
        let variants = self.products.variants_of(product_id).await?;
        let status = StatusFlags::evaluate(&variants, &self.quantity);

        // 3) Dirty-check against the stored booleans.
        if status == entry.status() {
            tracing::debug!(product_id = %product_id, "availability unchanged, skipping patch");
            return Ok(false);
        }

        self.catalog.patch_status(product_id, status).await?;

        tracing::debug!(
            product_id = %product_id,
            is_sold_out = status.is_sold_out,
            is_low_quantity = status.is_low_quantity,
            is_backorder = status.is_backorder,
            "patched catalog availability"
        );

        Ok(true)
    }
}
