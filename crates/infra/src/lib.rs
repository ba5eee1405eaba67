//! Infrastructure layer: store collaborators and the publishing pipeline.
//!
//! The domain crate stays pure; everything that touches a collection or
//! suspends on IO lives here, behind small async traits with in-memory
//! implementations for tests/dev.

pub mod publisher;
pub mod stores;

pub use publisher::{CatalogPublisher, PublishError};
#[cfg(feature = "postgres")]
pub use stores::PostgresCatalogStore;
pub use stores::{
    CatalogStore, InMemoryCatalogStore, InMemoryMediaStore, InMemoryProductStore, MediaRecord,
    MediaStore, MediaWorkflowStatus, ProductStore, StoreError,
};
