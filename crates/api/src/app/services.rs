use std::sync::Arc;

use storefront_catalog::{QuantityResolver, StoredQuantity};
use storefront_infra::{
    CatalogPublisher, CatalogStore, InMemoryCatalogStore, InMemoryMediaStore, InMemoryProductStore,
    MediaStore, ProductStore,
};

#[cfg(feature = "postgres")]
use storefront_infra::PostgresCatalogStore;

// Type-erased publisher so the catalog backend can vary per build.
pub type AppPublisher = CatalogPublisher<
    Arc<dyn ProductStore>,
    Arc<dyn MediaStore>,
    Arc<dyn CatalogStore>,
    Arc<dyn QuantityResolver>,
>;

/// Shared services behind every handler.
///
/// The product and media stores are in-memory stand-ins for the platform
/// services that own those collections; the catalog store is the entry
/// collection this API writes. Tests reach the concrete handles to seed
/// fixture data.
pub struct AppServices {
    pub publisher: AppPublisher,
    pub products: Arc<InMemoryProductStore>,
    pub media: Arc<InMemoryMediaStore>,
    pub catalog: Arc<dyn CatalogStore>,
}

impl AppServices {
    /// Wire everything against in-memory stores.
    pub fn in_memory() -> Self {
        Self::with_catalog(Arc::new(InMemoryCatalogStore::new()))
    }

    /// Wire in-memory product/media stores around an explicit catalog
    /// backend.
    pub fn with_catalog(catalog: Arc<dyn CatalogStore>) -> Self {
        let products = Arc::new(InMemoryProductStore::new());
        let media = Arc::new(InMemoryMediaStore::new());

        let publisher = CatalogPublisher::new(
            Arc::clone(&products) as Arc<dyn ProductStore>,
            Arc::clone(&media) as Arc<dyn MediaStore>,
            Arc::clone(&catalog),
            Arc::new(StoredQuantity) as Arc<dyn QuantityResolver>,
        );

        Self {
            publisher,
            products,
            media,
            catalog,
        }
    }
}

/// Build the services for this process.
#[cfg(not(feature = "postgres"))]
pub async fn build_services() -> AppServices {
    AppServices::in_memory()
}

/// Build the services for this process, with catalog entries in Postgres.
#[cfg(feature = "postgres")]
pub async fn build_services() -> AppServices {
    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set with the postgres feature");

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("failed to connect to postgres");

    let catalog = PostgresCatalogStore::new(pool);
    catalog
        .ensure_schema()
        .await
        .expect("failed to ensure catalog schema");

    AppServices::with_catalog(Arc::new(catalog))
}
