//! Filter criteria narrowing candidates before random selection

use serde::{Deserialize, Serialize};

use crate::core::restaurant::Restaurant;

/// User-chosen constraints for a selection attempt.
///
/// Every bound is optional; an unset bound matches everything. Criteria are
/// purely transient — they are rebuilt for each pick and never persisted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Exact-match cuisine filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,

    /// Upper bound on the price tier (inclusive).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_price_range: Option<u8>,

    /// Lower bound on the rating (inclusive).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_rating: Option<u8>,
}

impl FilterCriteria {
    /// Criteria with no bounds set (matches every restaurant).
    pub fn any() -> Self {
        Self::default()
    }

    /// Whether a restaurant satisfies every set bound.
    pub fn matches(&self, restaurant: &Restaurant) -> bool {
        self.cuisine
            .as_deref()
            .is_none_or(|c| restaurant.cuisine == c)
            && self
                .max_price_range
                .is_none_or(|max| restaurant.price_range <= max)
            && self.min_rating.is_none_or(|min| restaurant.rating >= min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn restaurant(cuisine: &str, price_range: u8, rating: u8) -> Restaurant {
        Restaurant::new("Place".to_string(), cuisine.to_string(), price_range, rating)
    }

    #[test]
    fn test_unset_criteria_match_everything() {
        let criteria = FilterCriteria::any();
        assert!(criteria.matches(&restaurant("Italian", 4, 1)));
        assert!(criteria.matches(&restaurant("Thai", 1, 5)));
    }

    #[test]
    fn test_cuisine_exact_match() {
        let criteria = FilterCriteria {
            cuisine: Some("Italian".to_string()),
            ..Default::default()
        };
        assert!(criteria.matches(&restaurant("Italian", 2, 3)));
        assert!(!criteria.matches(&restaurant("Mexican", 2, 3)));
        // Exact match, not case-insensitive
        assert!(!criteria.matches(&restaurant("italian", 2, 3)));
    }

    #[test]
    fn test_max_price_is_inclusive_upper_bound() {
        let criteria = FilterCriteria {
            max_price_range: Some(2),
            ..Default::default()
        };
        assert!(criteria.matches(&restaurant("Thai", 1, 3)));
        assert!(criteria.matches(&restaurant("Thai", 2, 3)));
        assert!(!criteria.matches(&restaurant("Thai", 3, 3)));
    }

    #[test]
    fn test_min_rating_is_inclusive_lower_bound() {
        let criteria = FilterCriteria {
            min_rating: Some(4),
            ..Default::default()
        };
        assert!(criteria.matches(&restaurant("Thai", 2, 4)));
        assert!(criteria.matches(&restaurant("Thai", 2, 5)));
        assert!(!criteria.matches(&restaurant("Thai", 2, 3)));
    }

    #[test]
    fn test_bounds_combine_conjunctively() {
        let criteria = FilterCriteria {
            cuisine: Some("Thai".to_string()),
            max_price_range: Some(2),
            min_rating: Some(4),
        };
        assert!(criteria.matches(&restaurant("Thai", 2, 4)));
        assert!(!criteria.matches(&restaurant("Thai", 3, 4)));
        assert!(!criteria.matches(&restaurant("Thai", 2, 3)));
        assert!(!criteria.matches(&restaurant("Italian", 2, 4)));
    }

    #[test]
    fn test_deserialize_partial_payload() {
        let criteria: FilterCriteria =
            serde_json::from_str(r#"{"max_price_range": 2}"#).unwrap();
        assert_eq!(criteria.max_price_range, Some(2));
        assert!(criteria.cuisine.is_none());
        assert!(criteria.min_rating.is_none());
    }
}
