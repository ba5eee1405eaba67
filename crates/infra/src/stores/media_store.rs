use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_catalog::MediaUrlSet;
use storefront_core::ProductId;

use super::StoreError;

/// Lifecycle state of a media asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaWorkflowStatus {
    Draft,
    Published,
    Unpublished,
    Archived,
}

/// A media asset as the media service stores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaRecord {
    pub product_id: ProductId,
    /// Whether this asset may appear in product listing grids.
    pub to_grid: bool,
    pub workflow_status: MediaWorkflowStatus,
    /// Lower priority sorts first.
    pub priority: i32,
    pub uploaded_at: DateTime<Utc>,
    pub urls: MediaUrlSet,
}

impl MediaRecord {
    /// Eligible for listing grids: flagged via `to_grid` and not pulled from
    /// display. Draft assets still count; only archived and unpublished ones
    /// are excluded.
    pub fn is_grid_eligible(&self) -> bool {
        self.to_grid
            && !matches!(
                self.workflow_status,
                MediaWorkflowStatus::Archived | MediaWorkflowStatus::Unpublished
            )
    }
}

/// Read access to the media collection.
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Grid-eligible media for one product, ordered by priority then upload
    /// time.
    async fn grid_media(&self, product_id: ProductId) -> Result<Vec<MediaUrlSet>, StoreError>;
}

#[async_trait]
impl<S> MediaStore for Arc<S>
where
    S: MediaStore + ?Sized,
{
    async fn grid_media(&self, product_id: ProductId) -> Result<Vec<MediaUrlSet>, StoreError> {
        (**self).grid_media(product_id).await
    }
}

/// In-memory media store for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryMediaStore {
    records: RwLock<Vec<MediaRecord>>,
}

impl InMemoryMediaStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, record: MediaRecord) {
        if let Ok(mut list) = self.records.write() {
            list.push(record);
        }
    }
}

#[async_trait]
impl MediaStore for InMemoryMediaStore {
    async fn grid_media(&self, product_id: ProductId) -> Result<Vec<MediaUrlSet>, StoreError> {
        let list = self
            .records
            .read()
            .map_err(|_| StoreError::Backend("media store lock poisoned".to_string()))?;

        let mut matched: Vec<&MediaRecord> = list
            .iter()
            .filter(|r| r.product_id == product_id && r.is_grid_eligible())
            .collect();
        matched.sort_by_key(|r| (r.priority, r.uploaded_at));
        Ok(matched.into_iter().map(|r| r.urls.clone()).collect())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn urls(n: u32) -> MediaUrlSet {
        MediaUrlSet {
            thumbnail: format!("https://cdn.test/{n}/thumb.jpg"),
            small: format!("https://cdn.test/{n}/small.jpg"),
            medium: format!("https://cdn.test/{n}/medium.jpg"),
            large: format!("https://cdn.test/{n}/large.jpg"),
            original: format!("https://cdn.test/{n}.jpg"),
        }
    }

    fn record(
        product_id: ProductId,
        status: MediaWorkflowStatus,
        priority: i32,
        uploaded_at: DateTime<Utc>,
        n: u32,
    ) -> MediaRecord {
        MediaRecord {
            product_id,
            to_grid: true,
            workflow_status: status,
            priority,
            uploaded_at,
            urls: urls(n),
        }
    }

    #[tokio::test]
    async fn hidden_and_foreign_media_are_filtered_out() {
        let store = InMemoryMediaStore::new();
        let product = ProductId::new();
        let now = Utc::now();

        store.insert(record(product, MediaWorkflowStatus::Published, 0, now, 1));
        store.insert(record(product, MediaWorkflowStatus::Archived, 0, now, 2));
        store.insert(record(product, MediaWorkflowStatus::Unpublished, 0, now, 3));
        store.insert(record(ProductId::new(), MediaWorkflowStatus::Published, 0, now, 4));

        let mut off_grid = record(product, MediaWorkflowStatus::Published, 0, now, 5);
        off_grid.to_grid = false;
        store.insert(off_grid);

        let media = store.grid_media(product).await.unwrap();
        assert_eq!(media, vec![urls(1)]);
    }

    #[tokio::test]
    async fn draft_media_still_shows_on_the_grid() {
        let store = InMemoryMediaStore::new();
        let product = ProductId::new();

        store.insert(record(product, MediaWorkflowStatus::Draft, 0, Utc::now(), 1));

        let media = store.grid_media(product).await.unwrap();
        assert_eq!(media.len(), 1);
    }

    #[tokio::test]
    async fn media_orders_by_priority_then_upload_time() {
        let store = InMemoryMediaStore::new();
        let product = ProductId::new();
        let now = Utc::now();

        store.insert(record(product, MediaWorkflowStatus::Published, 2, now, 1));
        store.insert(record(
            product,
            MediaWorkflowStatus::Published,
            1,
            now + Duration::minutes(5),
            2,
        ));
        store.insert(record(product, MediaWorkflowStatus::Published, 1, now, 3));

        let media = store.grid_media(product).await.unwrap();
        assert_eq!(media, vec![urls(3), urls(2), urls(1)]);
    }
}
