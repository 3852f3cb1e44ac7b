//! Macro-generated test suite for `CollectionStorage` contract validation.
//!
//! The `collection_storage_tests!` macro generates a test module that
//! validates any `CollectionStorage` implementation against the contract:
//! absent-blob behavior, whole-collection overwrite, and faithful JSON
//! round trips including record order.

/// Generate a full `CollectionStorage` conformance test suite.
///
/// `$factory` must be an expression that evaluates to an instance
/// implementing `CollectionStorage`. It is re-evaluated for each test to
/// ensure isolation.
#[macro_export]
macro_rules! collection_storage_tests {
    ($factory:expr) => {
        mod collection_storage_contract_tests {
            use super::*;
            use dinewheel::storage::CollectionStorage;

            #[tokio::test]
            async fn test_load_before_any_save_returns_none() {
                let storage = $factory;
                let loaded = storage.load().await.unwrap();
                assert!(
                    loaded.is_none(),
                    "a backend with no saved collection should report None"
                );
            }

            #[tokio::test]
            async fn test_save_then_load_roundtrip() {
                let storage = $factory;
                let collection = sample_collection(5);

                storage.save(&collection).await.unwrap();

                let loaded = storage.load().await.unwrap().expect("collection saved");
                assert_eq!(loaded, collection);
            }

            #[tokio::test]
            async fn test_save_overwrites_previous() {
                let storage = $factory;

                storage.save(&sample_collection(5)).await.unwrap();
                let replacement = sample_collection(2);
                storage.save(&replacement).await.unwrap();

                let loaded = storage.load().await.unwrap().unwrap();
                assert_eq!(loaded.len(), 2);
                assert_eq!(loaded, replacement);
            }

            #[tokio::test]
            async fn test_order_preserved_across_roundtrip() {
                let storage = $factory;
                let collection = sample_collection(8);

                storage.save(&collection).await.unwrap();

                let loaded = storage.load().await.unwrap().unwrap();
                let names: Vec<&str> = loaded.iter().map(|r| r.name.as_str()).collect();
                let expected: Vec<String> =
                    (0..8).map(|i| format!("Place_{}", i)).collect();
                assert_eq!(names, expected);
            }

            #[tokio::test]
            async fn test_empty_collection_roundtrip() {
                let storage = $factory;

                storage.save(&[]).await.unwrap();

                // an empty collection is still a saved collection, not None
                let loaded = storage.load().await.unwrap();
                assert_eq!(loaded, Some(Vec::new()));
            }

            #[tokio::test]
            async fn test_all_fields_survive_roundtrip() {
                let storage = $factory;
                let collection = vec![visited_restaurant("Gogi")];

                storage.save(&collection).await.unwrap();

                let loaded = storage.load().await.unwrap().unwrap();
                assert_eq!(loaded[0].id, collection[0].id);
                assert_eq!(loaded[0].cuisine, "Korean");
                assert_eq!(loaded[0].price_range, 2);
                assert_eq!(loaded[0].rating, 3);
                assert_eq!(loaded[0].last_visited, collection[0].last_visited);
                assert_eq!(loaded[0].created_at, collection[0].created_at);
            }
        }
    };
}
