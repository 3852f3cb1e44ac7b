//! The restaurant store
//!
//! An explicitly owned store object replacing the original's ambient
//! component state: the collection lives in memory, every mutation is
//! followed by an explicit save through the injected persistence
//! collaborator, and `load` is called once at startup.

use indexmap::IndexSet;
use rand::thread_rng;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use crate::core::criteria::FilterCriteria;
use crate::core::error::{DinewheelError, DinewheelResult, StoreError, ValidationError};
use crate::core::events::{EventBus, StoreEvent};
use crate::core::restaurant::{RATING_MAX, RATING_MIN, Restaurant, RestaurantDraft};
use crate::core::selector::pick_random;
use crate::core::validation::in_range;
use crate::storage::CollectionStorage;

/// Owns the ordered restaurant collection and its persistence lifecycle.
///
/// The collection is a `Vec` — insertion order is an invariant, preserved
/// in memory and across save/load. Records are never removed.
///
/// Mutations persist a candidate copy of the collection *before* committing
/// it to memory, so every failure path (validation, unknown id, storage)
/// leaves the in-memory state unchanged.
pub struct RestaurantStore {
    restaurants: RwLock<Vec<Restaurant>>,
    storage: Arc<dyn CollectionStorage>,
    events: EventBus,
}

impl RestaurantStore {
    /// Create a store over the given persistence collaborator.
    ///
    /// The collection starts empty; call [`load`](Self::load) to pull the
    /// persisted state.
    pub fn new(storage: Arc<dyn CollectionStorage>) -> Self {
        Self::with_events(storage, EventBus::default())
    }

    /// Create a store publishing notifications on the given bus.
    pub fn with_events(storage: Arc<dyn CollectionStorage>, events: EventBus) -> Self {
        Self {
            restaurants: RwLock::new(Vec::new()),
            storage,
            events,
        }
    }

    /// The notification bus this store publishes on.
    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// Replace the in-memory collection with the persisted one.
    ///
    /// An absent blob means nothing was ever saved — the collection becomes
    /// empty. Returns the number of records loaded.
    pub async fn load(&self) -> DinewheelResult<usize> {
        let loaded = self.storage.load().await?.unwrap_or_default();
        let count = loaded.len();

        *self.write_guard()? = loaded;

        tracing::info!(count, "restaurant collection loaded");
        Ok(count)
    }

    /// Persist the current collection through the collaborator.
    pub async fn save(&self) -> DinewheelResult<()> {
        let snapshot = self.read_guard()?.clone();
        self.storage.save(&snapshot).await?;
        Ok(())
    }

    /// Validate a draft, mint a record, append it, and persist.
    ///
    /// Fails with a `ValidationError` (collection untouched) when the name
    /// or cuisine is empty or a tier is out of range.
    pub async fn add(&self, draft: RestaurantDraft) -> DinewheelResult<Restaurant> {
        let restaurant = draft.into_restaurant()?;

        let mut candidate = self.read_guard()?.clone();
        candidate.push(restaurant.clone());

        self.storage.save(&candidate).await?;
        *self.write_guard()? = candidate;

        tracing::debug!(id = %restaurant.id, name = %restaurant.name, "restaurant added");
        self.events.publish(StoreEvent::Added {
            restaurant: restaurant.clone(),
        });

        Ok(restaurant)
    }

    /// Set a restaurant's rating and stamp `last_visited`.
    ///
    /// Fails with `NotFound` for an unknown id — ids always come from the
    /// current collection, so hitting this indicates a caller bug.
    pub async fn update_rating(&self, id: Uuid, rating: u8) -> DinewheelResult<Restaurant> {
        in_range(
            "rating",
            i64::from(rating),
            i64::from(RATING_MIN),
            i64::from(RATING_MAX),
        )
        .map_err(|e| {
            ValidationError::FieldError {
                field: e.field,
                message: e.message,
            }
        })?;

        let (candidate, updated) = {
            let guard = self.read_guard()?;
            let mut candidate = guard.clone();
            let record = candidate
                .iter_mut()
                .find(|r| r.id == id)
                .ok_or(StoreError::NotFound { id })?;

            record.rating = rating;
            record.last_visited = Some(chrono::Utc::now());
            record.touch();
            let updated = record.clone();
            (candidate, updated)
        };

        self.storage.save(&candidate).await?;
        *self.write_guard()? = candidate;

        tracing::debug!(id = %id, rating, "rating updated");
        self.events.publish(StoreEvent::RatingUpdated { id, rating });

        Ok(updated)
    }

    /// Snapshot of the collection, in insertion order.
    pub fn list(&self) -> DinewheelResult<Vec<Restaurant>> {
        Ok(self.read_guard()?.clone())
    }

    /// Look up a single restaurant by id.
    pub fn get(&self, id: &Uuid) -> DinewheelResult<Option<Restaurant>> {
        Ok(self.read_guard()?.iter().find(|r| r.id == *id).cloned())
    }

    /// Distinct cuisines in first-seen order, for the filter dropdown.
    pub fn cuisines(&self) -> DinewheelResult<Vec<String>> {
        let cuisines: IndexSet<String> = self
            .read_guard()?
            .iter()
            .map(|r| r.cuisine.clone())
            .collect();
        Ok(cuisines.into_iter().collect())
    }

    /// Draw one uniformly-random restaurant matching the criteria.
    ///
    /// Read-only with respect to the collection; a successful pick is
    /// announced on the bus (the original toasts "Restaurant selected!").
    pub fn pick(&self, criteria: &FilterCriteria) -> DinewheelResult<Restaurant> {
        let picked = {
            let guard = self.read_guard()?;
            pick_random(&guard, criteria, &mut thread_rng())?.clone()
        };

        tracing::debug!(id = %picked.id, name = %picked.name, "restaurant picked");
        self.events.publish(StoreEvent::Picked {
            id: picked.id,
            name: picked.name.clone(),
        });

        Ok(picked)
    }

    fn read_guard(&self) -> DinewheelResult<std::sync::RwLockReadGuard<'_, Vec<Restaurant>>> {
        self.restaurants
            .read()
            .map_err(|e| DinewheelError::Internal(format!("collection lock poisoned: {}", e)))
    }

    fn write_guard(&self) -> DinewheelResult<std::sync::RwLockWriteGuard<'_, Vec<Restaurant>>> {
        self.restaurants
            .write()
            .map_err(|e| DinewheelError::Internal(format!("collection lock poisoned: {}", e)))
    }
}
