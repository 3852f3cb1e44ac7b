//! Integration tests for InMemoryStorage using the storage test harness.
//!
//! This file invokes `collection_storage_tests!` to validate that
//! InMemoryStorage fully conforms to the CollectionStorage contract.

#[macro_use]
mod storage_harness;

use dinewheel::storage::InMemoryStorage;
use storage_harness::*;

collection_storage_tests!(InMemoryStorage::new());
