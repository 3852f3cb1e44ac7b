//! Shared test harness for storage backend testing
//!
//! Provides sample-collection helpers and the `collection_storage_tests!`
//! conformance macro.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//! use storage_harness::*;
//!
//! collection_storage_tests!(InMemoryStorage::new());
//! ```

#![allow(dead_code)]

use chrono::Utc;
use dinewheel::core::restaurant::Restaurant;

pub mod contract_tests;

/// Create a restaurant with the given fields and a fresh id.
pub fn sample_restaurant(name: &str, cuisine: &str, price_range: u8, rating: u8) -> Restaurant {
    Restaurant::new(name.to_string(), cuisine.to_string(), price_range, rating)
}

/// A restaurant that has been visited (rating updated at some point).
pub fn visited_restaurant(name: &str) -> Restaurant {
    let mut restaurant = sample_restaurant(name, "Korean", 2, 3);
    restaurant.last_visited = Some(Utc::now());
    restaurant
}

/// Generate `n` restaurants with varied cuisines, prices, and ratings.
///
/// Names are `Place_0`, `Place_1`, ... so order assertions are easy.
pub fn sample_collection(n: usize) -> Vec<Restaurant> {
    let cuisines = ["Italian", "Mexican", "Japanese", "French", "Thai"];
    (0..n)
        .map(|i| {
            sample_restaurant(
                &format!("Place_{}", i),
                cuisines[i % cuisines.len()],
                (i % 4 + 1) as u8,
                (i % 5 + 1) as u8,
            )
        })
        .collect()
}
