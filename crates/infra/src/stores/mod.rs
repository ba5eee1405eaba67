//! Store abstractions over the external document collections.
//!
//! Each collaborator is a small async trait plus an in-memory implementation.
//! Persistent backends implement the same traits; the publisher never learns
//! which one it is talking to.

pub mod catalog_store;
pub mod media_store;
pub mod product_store;

#[cfg(feature = "postgres")]
pub mod postgres;

pub use catalog_store::{CatalogStore, InMemoryCatalogStore};
pub use media_store::{InMemoryMediaStore, MediaRecord, MediaStore, MediaWorkflowStatus};
#[cfg(feature = "postgres")]
pub use postgres::PostgresCatalogStore;
pub use product_store::{InMemoryProductStore, ProductStore};

use thiserror::Error;

/// Store-level failure.
///
/// Covers infrastructure faults only; "document absent" is modeled as
/// `Option`/typed errors by callers.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store backend error: {0}")]
    Backend(String),

    #[error("failed to (de)serialize stored document: {0}")]
    Serialization(String),
}
