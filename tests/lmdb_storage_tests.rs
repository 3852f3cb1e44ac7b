//! Integration tests for the LMDB storage backend using the test harness.
//!
//! # Requirements
//!
//! - Feature flag `lmdb` must be enabled
//! - No external services needed (LMDB is an embedded database)
//!
//! # Running
//!
//! ```sh
//! cargo test --features lmdb --test lmdb_storage_tests
//! ```
//!
//! Each test gets a fresh temporary directory via `tempfile::TempDir` so
//! environments never collide.

#![cfg(feature = "lmdb")]

#[macro_use]
mod storage_harness;

use dinewheel::storage::LmdbStorage;
use storage_harness::*;
use tempfile::TempDir;

fn fresh_lmdb_storage() -> LmdbStorage {
    let dir = TempDir::new().expect("Failed to create temp dir");
    // Leak the TempDir so it lives for the duration of the test
    // (otherwise it would be dropped immediately, deleting the DB files)
    let path = dir.path().to_path_buf();
    std::mem::forget(dir);
    LmdbStorage::open(&path).expect("Failed to open LMDB storage")
}

collection_storage_tests!(fresh_lmdb_storage());

mod reopen {
    use super::*;
    use dinewheel::storage::CollectionStorage;

    /// A new environment over the same directory must see the collection
    /// written by the previous one.
    #[tokio::test]
    async fn test_collection_survives_reopen() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().to_path_buf();
        std::mem::forget(dir);

        let collection = sample_collection(3);
        {
            let storage = LmdbStorage::open(&path).unwrap();
            storage.save(&collection).await.unwrap();
        }

        let reopened = LmdbStorage::open(&path).unwrap();
        let loaded = reopened.load().await.unwrap().unwrap();
        assert_eq!(loaded, collection);
    }
}
