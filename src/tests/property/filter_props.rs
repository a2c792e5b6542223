//! Property-based tests for search and category filtering
//!
//! Tests invariants:
//! - Result preserves catalog order
//! - Result is exactly the matching entries
//! - Filtering twice changes nothing
//! - Matching ignores ASCII case
//! - Empty query under "All" keeps every entry

use proptest::prelude::*;

use super::{arb_catalog, arb_query, CATEGORIES};
use crate::core::filter::{self, CategoryFilter, FilterState, VisibleSet};

// ============================================================================
// Strategies for generating test inputs
// ============================================================================

fn arb_category() -> impl Strategy<Value = CategoryFilter> {
    prop_oneof![
        Just(CategoryFilter::All),
        proptest::sample::select(CATEGORIES).prop_map(CategoryFilter::from_label),
    ]
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: Output is an order-preserving subsequence of the catalog
    #[test]
    fn prop_preserves_catalog_order(
        catalog in arb_catalog(0, 30),
        query in arb_query(),
        category in arb_category()
    ) {
        let result = filter::apply(catalog.entries(), &query, &category);
        let positions: Vec<usize> = result
            .iter()
            .map(|e| catalog.entries().iter().position(|c| c.id == e.id).unwrap())
            .collect();
        prop_assert!(
            positions.windows(2).all(|w| w[0] < w[1]),
            "Filtered entries must keep catalog order"
        );
    }

    /// Property: An entry is kept iff it passes both predicates
    #[test]
    fn prop_keeps_exactly_the_matches(
        catalog in arb_catalog(0, 30),
        query in arb_query(),
        category in arb_category()
    ) {
        let result = filter::apply(catalog.entries(), &query, &category);
        for entry in catalog.entries() {
            let expected = category.admits(entry)
                && entry.title.to_lowercase().contains(&query.to_lowercase());
            let kept = result.iter().any(|e| e.id == entry.id);
            prop_assert_eq!(kept, expected, "Mismatch for {:?}", entry.title);
        }
    }

    /// Property: Filtering a filtered result is a no-op
    #[test]
    fn prop_idempotent(
        catalog in arb_catalog(0, 30),
        query in arb_query(),
        category in arb_category()
    ) {
        let once = filter::apply(catalog.entries(), &query, &category);
        let twice = filter::apply(once.iter().copied(), &query, &category);
        prop_assert_eq!(once, twice);
    }

    /// Property: Upper- and lower-case ASCII queries select the same entries
    #[test]
    fn prop_case_insensitive(
        catalog in arb_catalog(0, 30),
        query in "[a-z]{1,4}"
    ) {
        let lower = filter::apply(catalog.entries(), &query, &CategoryFilter::All);
        let upper = filter::apply(
            catalog.entries(),
            &query.to_uppercase(),
            &CategoryFilter::All,
        );
        prop_assert_eq!(lower, upper);
    }

    /// Property: Default filter state shows the whole catalog
    #[test]
    fn prop_default_filter_shows_everything(catalog in arb_catalog(0, 30)) {
        let visible = VisibleSet::compute(&catalog, &FilterState::default());
        prop_assert!(visible.is_filtered());
        prop_assert_eq!(visible.len(), catalog.len());
    }

    /// Property: VisibleSet agrees with the free-standing filter
    #[test]
    fn prop_visible_set_matches_apply(
        catalog in arb_catalog(0, 30),
        query in arb_query(),
        category in arb_category()
    ) {
        let state = FilterState { query: query.clone(), category: category.clone() };
        let visible = VisibleSet::compute(&catalog, &state);
        let expected = filter::apply(catalog.entries(), &query, &category);
        prop_assert_eq!(visible.entries(&catalog), expected.clone());
        prop_assert_eq!(visible.is_empty_result(), expected.is_empty());
    }
}
