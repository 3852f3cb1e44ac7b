//! Storage implementations for the persistence collaborator
//!
//! The collection is persisted whole: one JSON blob in a key-value store,
//! under the fixed key [`COLLECTION_KEY`]. Backends only need to round-trip
//! that blob; ordering and ids are the store's concern.

use anyhow::Result;
use async_trait::async_trait;

use crate::core::restaurant::Restaurant;

pub mod in_memory;
#[cfg(feature = "lmdb")]
pub mod lmdb;

pub use in_memory::InMemoryStorage;
#[cfg(feature = "lmdb")]
pub use lmdb::LmdbStorage;

/// Fixed key the serialized collection is stored under.
pub const COLLECTION_KEY: &str = "restaurants";

/// Persistence collaborator for the restaurant collection.
///
/// `load` returns `None` when no collection has ever been saved — the store
/// treats that as an empty collection. `save` overwrites the whole blob.
#[async_trait]
pub trait CollectionStorage: Send + Sync {
    /// Load the persisted collection, if any.
    async fn load(&self) -> Result<Option<Vec<Restaurant>>>;

    /// Persist the full collection, replacing whatever was stored before.
    async fn save(&self, collection: &[Restaurant]) -> Result<()>;
}
