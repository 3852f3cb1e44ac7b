//! In-memory implementation of CollectionStorage for testing and development

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::core::restaurant::Restaurant;
use crate::storage::CollectionStorage;

/// In-memory collection storage
///
/// Holds the serialized blob exactly the way a real key-value backend would,
/// so the JSON round trip is exercised even in tests. Uses RwLock for
/// thread-safe access.
#[derive(Clone)]
pub struct InMemoryStorage {
    blob: Arc<RwLock<Option<Vec<u8>>>>,
}

impl InMemoryStorage {
    /// Create a new in-memory storage with nothing persisted yet
    pub fn new() -> Self {
        Self {
            blob: Arc::new(RwLock::new(None)),
        }
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CollectionStorage for InMemoryStorage {
    async fn load(&self) -> Result<Option<Vec<Restaurant>>> {
        let blob = self
            .blob
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        match blob.as_deref() {
            Some(bytes) => Ok(Some(serde_json::from_slice(bytes)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, collection: &[Restaurant]) -> Result<()> {
        let bytes = serde_json::to_vec(collection)?;

        let mut blob = self
            .blob
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        *blob = Some(bytes);

        Ok(())
    }
}
