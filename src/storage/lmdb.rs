//! LMDB storage backend using heed (memory-mapped B-tree).
//!
//! LMDB is an embedded key-value store — no external server required.
//! All operations are synchronous (memory-mapped I/O) and are wrapped in
//! `tokio::task::spawn_blocking` for async compatibility.
//!
//! # Layout
//!
//! A single named database `collections` holds one entry: the full
//! restaurant collection as JSON bytes under [`COLLECTION_KEY`]. The
//! collection is small and always read and written whole, so there is no
//! per-record keying.
//!
//! # Feature flag
//!
//! Enable with `--features lmdb`. Requires the `heed` crate.

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use heed::types::{Bytes, Str};
use heed::{Database, Env, EnvOpenOptions};
use std::path::Path;
use std::sync::Arc;

use crate::core::restaurant::Restaurant;
use crate::storage::{COLLECTION_KEY, CollectionStorage};

/// Encode the collection as JSON bytes for LMDB storage.
fn lmdb_encode(collection: &[Restaurant]) -> Result<Vec<u8>> {
    serde_json::to_vec(collection).map_err(|e| anyhow!("lmdb encode: {}", e))
}

/// Decode a collection from JSON bytes.
fn lmdb_decode(bytes: &[u8]) -> Result<Vec<Restaurant>> {
    serde_json::from_slice(bytes).map_err(|e| anyhow!("lmdb decode: {}", e))
}

/// LMDB-backed implementation of `CollectionStorage`.
///
/// The `Env` is wrapped in an `Arc` for cheap cloning across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use dinewheel::storage::LmdbStorage;
///
/// let storage = LmdbStorage::open("/var/lib/dinewheel")?;
/// let collection = storage.load().await?;
/// ```
#[derive(Clone)]
pub struct LmdbStorage {
    env: Arc<Env>,
    db: Database<Str, Bytes>,
}

impl LmdbStorage {
    /// Open (or create) an LMDB environment at `path` and initialise the
    /// `collections` named database.
    ///
    /// The map size defaults to 64 MB — a virtual address space
    /// reservation, not an allocation, and far more than a personal
    /// restaurant list will ever need.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        std::fs::create_dir_all(path.as_ref())?;

        let env = unsafe {
            EnvOpenOptions::new()
                .map_size(64 * 1024 * 1024)
                .max_dbs(4)
                .max_readers(126)
                .open(path.as_ref())?
        };

        let mut wtxn = env.write_txn()?;
        let db: Database<Str, Bytes> = env.create_database(&mut wtxn, Some("collections"))?;
        wtxn.commit()?;

        Ok(Self {
            env: Arc::new(env),
            db,
        })
    }
}

#[async_trait]
impl CollectionStorage for LmdbStorage {
    async fn load(&self) -> Result<Option<Vec<Restaurant>>> {
        let env = self.env.clone();
        let db = self.db;

        tokio::task::spawn_blocking(move || {
            let rtxn = env.read_txn()?;
            match db.get(&rtxn, COLLECTION_KEY)? {
                Some(bytes) => Ok(Some(lmdb_decode(bytes)?)),
                None => Ok(None),
            }
        })
        .await?
    }

    async fn save(&self, collection: &[Restaurant]) -> Result<()> {
        let env = self.env.clone();
        let db = self.db;
        let bytes = lmdb_encode(collection)?;

        tokio::task::spawn_blocking(move || {
            let mut wtxn = env.write_txn()?;
            db.put(&mut wtxn, COLLECTION_KEY, &bytes)?;
            wtxn.commit()?;
            Ok(())
        })
        .await?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn restaurant(name: &str) -> Restaurant {
        Restaurant::new(name.to_string(), "Japanese".to_string(), 3, 5)
    }

    #[test]
    fn test_encode_decode_roundtrip() {
        let collection = vec![restaurant("Izakaya"), restaurant("Ramen-ya")];
        let bytes = lmdb_encode(&collection).expect("should encode");
        let decoded = lmdb_decode(&bytes).expect("should decode");
        assert_eq!(decoded, collection);
    }

    #[test]
    fn test_encode_produces_valid_json() {
        let bytes = lmdb_encode(&[restaurant("Izakaya")]).expect("should encode");
        let json: serde_json::Value = serde_json::from_slice(&bytes).expect("should be valid JSON");
        assert_eq!(json[0]["name"], "Izakaya");
        assert_eq!(json[0]["cuisine"], "Japanese");
    }

    #[test]
    fn test_decode_invalid_bytes_returns_error() {
        let bad_bytes = b"not valid json at all {{{";
        let result = lmdb_decode(bad_bytes);
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(
            err.contains("lmdb decode"),
            "error should mention lmdb decode: {}",
            err
        );
    }

    #[test]
    fn test_encode_empty_collection() {
        let bytes = lmdb_encode(&[]).expect("should encode");
        assert_eq!(bytes, b"[]");
        assert!(lmdb_decode(&bytes).unwrap().is_empty());
    }
}
