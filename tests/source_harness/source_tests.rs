//! Macro-generated test suite for `ListSource<TestItem>` contract validation.
//!
//! # Usage
//!
//! ```rust,ignore
//! #[macro_use]
//! mod source_harness;
//!
//! use source_harness::*;
//!
//! async fn make_source(items: Vec<TestItem>) -> InMemoryListSource<TestItem> {
//!     InMemoryListSource::with_items(items)
//! }
//!
//! list_source_tests!(make_source);
//! ```
//!
//! # Generated Tests
//!
//! - `test_fetch_empty`: an empty source yields an empty list
//! - `test_fetch_preserves_order`: items come back in insertion order
//! - `test_fetch_preserves_field_values`: every `FieldValue` variant survives
//! - `test_list_view_over_source`: search, sort and paginate fetched items
//! - `test_concurrent_fetches`: parallel fetches from spawned tasks

/// Generate a `ListSource<TestItem>` conformance test suite.
///
/// `$factory` must name an `async fn(Vec<TestItem>) -> S` where
/// `S: ListSource<TestItem> + 'static`. It is called once per test.
#[macro_export]
macro_rules! list_source_tests {
    ($factory:path) => {
        mod list_source_tests {
            use super::*;
            use std::sync::Arc;
            use storefront::core::item::ListItem;
            use storefront::core::list_view::ListView;
            use storefront::core::source::ListSource;

            #[tokio::test]
            async fn test_fetch_empty() {
                let source = $factory(Vec::new()).await;
                let items = source.fetch_all().await.unwrap();
                assert!(items.is_empty());
            }

            #[tokio::test]
            async fn test_fetch_preserves_order() {
                let source = $factory(sample_items()).await;
                let items = source.fetch_all().await.unwrap();

                let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
                assert_eq!(names, vec!["Delta", "alpha", "Charlie", "echo", "Bravo"]);
            }

            #[tokio::test]
            async fn test_fetch_preserves_field_values() {
                let expected = sample_items();
                let source = $factory(expected.clone()).await;
                let items = source.fetch_all().await.unwrap();

                assert_eq!(items.len(), expected.len());
                for (got, want) in items.iter().zip(&expected) {
                    for field in TestField::ALL {
                        assert_eq!(got.field(*field), want.field(*field), "field {}", field);
                    }
                }
            }

            #[tokio::test]
            async fn test_list_view_over_source() {
                let source = $factory(sample_items()).await;
                let items = source.fetch_all().await.unwrap();
                let mut view = ListView::new(Arc::new(test_filter_config()), items, 2);

                let names = |view: &ListView<TestItem>| -> Vec<String> {
                    view.page_items().iter().map(|i| i.name.clone()).collect()
                };

                assert_eq!(view.total_pages(), 3);
                assert_eq!(names(&view), vec!["alpha", "Bravo"]);

                view.submit_search("EXAMPLE.COM");
                assert_eq!(view.pagination().item_count(), 5);

                assert!(view.select_sort("Newest"));
                assert_eq!(names(&view), vec!["Bravo", "echo"]);

                assert!(view.select_sort("Oldest First"));
                view.go_to_page(3);
                assert_eq!(names(&view), vec!["Delta"]);
            }

            #[tokio::test]
            async fn test_concurrent_fetches() {
                let source = Arc::new($factory(sample_items()).await);

                let handles: Vec<_> = (0..8)
                    .map(|_| {
                        let source = source.clone();
                        tokio::spawn(async move { source.fetch_all().await.map(|items| items.len()) })
                    })
                    .collect();

                for handle in handles {
                    assert_eq!(handle.await.unwrap().unwrap(), 5);
                }
            }
        }
    };
}
