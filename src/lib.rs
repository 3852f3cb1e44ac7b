//! # Dinewheel
//!
//! A personal restaurant list with filtered, uniformly-random selection.
//!
//! ## Features
//!
//! - **Ordered collection**: restaurants keep their insertion order, ids are
//!   immutable, records are never deleted
//! - **Validated drafts**: non-empty name/cuisine, price tier 1–4, rating 1–5
//! - **Filtered random pick**: cuisine equality, max price, min rating — one
//!   uniform draw over the matching subset, `NO_MATCH` when empty
//! - **Injectable persistence**: the whole collection round-trips as a JSON
//!   blob through a `CollectionStorage` collaborator (in-memory, or LMDB
//!   with the `lmdb` feature)
//! - **Notifications**: successful operations publish on a broadcast bus
//! - **HTTP seam**: an axum router exposing the store to the UI collaborator
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dinewheel::prelude::*;
//!
//! let store = RestaurantStore::new(Arc::new(InMemoryStorage::new()));
//! store.load().await?;
//!
//! let added = store
//!     .add(RestaurantDraft {
//!         name: "Trattoria".into(),
//!         cuisine: "Italian".into(),
//!         price_range: 2,
//!         rating: 5,
//!     })
//!     .await?;
//!
//! let tonight = store.pick(&FilterCriteria {
//!     max_price_range: Some(2),
//!     ..Default::default()
//! })?;
//! ```

pub mod config;
pub mod core;
pub mod server;
pub mod storage;
pub mod store;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core types ===
    pub use crate::core::{
        criteria::FilterCriteria,
        error::{DinewheelError, DinewheelResult, SelectionError, StoreError, ValidationError},
        events::{EventBus, EventEnvelope, StoreEvent},
        restaurant::{Restaurant, RestaurantDraft},
        selector::{filter_matching, pick_random},
    };

    // === Store ===
    pub use crate::store::RestaurantStore;

    // === Storage ===
    pub use crate::storage::{CollectionStorage, InMemoryStorage};
    #[cfg(feature = "lmdb")]
    pub use crate::storage::LmdbStorage;

    // === Config ===
    pub use crate::config::{AppConfig, StorageBackend, StorageConfig};

    // === Server ===
    pub use crate::server::{AppState, ServerBuilder, build_router};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
    pub use uuid::Uuid;
}
