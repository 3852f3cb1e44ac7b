//! Restaurant record and the draft it is created from

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::error::ValidationError;
use crate::core::validation::{in_range, non_empty};

/// Lowest price tier (`$`).
pub const PRICE_RANGE_MIN: u8 = 1;
/// Highest price tier (`$$$$`).
pub const PRICE_RANGE_MAX: u8 = 4;
/// Lowest rating.
pub const RATING_MIN: u8 = 1;
/// Highest rating.
pub const RATING_MAX: u8 = 5;

/// A single restaurant record.
///
/// The `id` is assigned when the record is minted from a draft and never
/// changes afterwards. Records are never deleted; `rating` and
/// `last_visited` are the only fields mutated after creation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: Uuid,
    pub name: String,
    pub cuisine: String,
    /// Price tier, 1–4.
    pub price_range: u8,
    /// Rating, 1–5.
    pub rating: u8,
    /// Set each time the rating is updated.
    pub last_visited: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Restaurant {
    /// Mint a new record with a fresh id and current timestamps.
    ///
    /// Callers are expected to have validated the fields already (see
    /// [`RestaurantDraft::validate`]).
    pub fn new(name: String, cuisine: String, price_range: u8, rating: u8) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            cuisine,
            price_range,
            rating,
            last_visited: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Bump the `updated_at` timestamp.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Price tier rendered as repeated dollar signs (`2` → `"$$"`).
    pub fn price_symbol(&self) -> String {
        "$".repeat(self.price_range as usize)
    }
}

fn default_price_range() -> u8 {
    PRICE_RANGE_MIN
}

fn default_rating() -> u8 {
    RATING_MAX
}

/// Input for the add operation.
///
/// `price_range` and `rating` default to the blank-form values (cheapest
/// tier, top rating) when omitted from the payload.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RestaurantDraft {
    pub name: String,
    pub cuisine: String,
    #[serde(default = "default_price_range")]
    pub price_range: u8,
    #[serde(default = "default_rating")]
    pub rating: u8,
}

impl RestaurantDraft {
    /// Check every field against the data-model invariants.
    ///
    /// All violations are collected so the caller can report them in one
    /// round trip.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();

        if let Err(e) = non_empty("name", &self.name) {
            errors.push(e);
        }
        if let Err(e) = non_empty("cuisine", &self.cuisine) {
            errors.push(e);
        }
        if let Err(e) = in_range(
            "price_range",
            i64::from(self.price_range),
            i64::from(PRICE_RANGE_MIN),
            i64::from(PRICE_RANGE_MAX),
        ) {
            errors.push(e);
        }
        if let Err(e) = in_range(
            "rating",
            i64::from(self.rating),
            i64::from(RATING_MIN),
            i64::from(RATING_MAX),
        ) {
            errors.push(e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::FieldErrors(errors))
        }
    }

    /// Validate and mint a [`Restaurant`] from this draft.
    pub fn into_restaurant(self) -> Result<Restaurant, ValidationError> {
        self.validate()?;
        Ok(Restaurant::new(
            self.name,
            self.cuisine,
            self.price_range,
            self.rating,
        ))
    }
}
