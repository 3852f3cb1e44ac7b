//! Filter-and-random-selection over the restaurant collection
//!
//! A pure, stateless function of (collection, criteria, random source).
//! The RNG is injected so callers can use a seeded generator in tests and
//! replays.

use rand::Rng;

use crate::core::criteria::FilterCriteria;
use crate::core::error::SelectionError;
use crate::core::restaurant::Restaurant;

/// Restaurants satisfying every set bound, in collection order.
pub fn filter_matching<'a>(
    collection: &'a [Restaurant],
    criteria: &FilterCriteria,
) -> Vec<&'a Restaurant> {
    collection.iter().filter(|r| criteria.matches(r)).collect()
}

/// Draw one uniformly-random restaurant from the matching subset.
///
/// Each of the `k` matching elements is returned with probability `1/k`.
/// Fails with [`SelectionError::NoMatch`] when the filtered set is empty —
/// user-visible and non-fatal, nothing is mutated.
pub fn pick_random<'a, R: Rng + ?Sized>(
    collection: &'a [Restaurant],
    criteria: &FilterCriteria,
    rng: &mut R,
) -> Result<&'a Restaurant, SelectionError> {
    let matching = filter_matching(collection, criteria);
    if matching.is_empty() {
        return Err(SelectionError::NoMatch {
            criteria: criteria.clone(),
        });
    }
    let index = rng.gen_range(0..matching.len());
    Ok(matching[index])
}
