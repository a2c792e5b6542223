//! Property-based tests for the portal core
//!
//! Property tests verify invariants that should hold for all inputs, rather
//! than testing specific cases.
//!
//! ## Running Property Tests
//!
//! ```sh
//! cargo test property --release
//! ```
//!
//! ## Test Modules
//!
//! - `filter_props`: search and category filtering
//!   - Result preserves catalog order
//!   - Result is exactly the entries that match
//!   - Filtering is idempotent
//!   - Matching ignores case
//!
//! - `focus_props`: module focus
//!   - At most one embed surface is ever live
//!   - Focus always names a catalog entry
//!
//! - `disguise_props`: the cover toggle
//!   - Mode follows the parity of toggles
//!   - A toggle pair restores filter and focus exactly
//!
//! ## Configuration
//!
//! By default, proptest runs 256 cases per property. This can be configured
//! via the `PROPTEST_CASES` environment variable:
//!
//! ```sh
//! PROPTEST_CASES=1000 cargo test property --release
//! ```

mod disguise_props;
mod filter_props;
mod focus_props;

use proptest::prelude::*;

use crate::core::{Catalog, CatalogEntry};

pub(super) const CATEGORIES: &[&str] = &["Math", "Science", "Geography", "Skills", "Logic"];

/// Generate a valid catalog of `min..max` entries with ids `1..=n`.
pub(super) fn arb_catalog(min: usize, max: usize) -> impl Strategy<Value = Catalog> {
    proptest::collection::vec(
        (
            "[A-Za-z][A-Za-z ]{0,19}",
            proptest::sample::select(CATEGORIES),
        ),
        min..max,
    )
    .prop_map(|specs| {
        let entries = specs
            .into_iter()
            .enumerate()
            .map(|(i, (title, category))| {
                let id = i as u64 + 1;
                CatalogEntry::new(
                    id,
                    title,
                    category,
                    format!("https://img.example.org/{id}.png"),
                    format!("https://play.example.org/{id}/"),
                )
            })
            .collect();
        Catalog::from_entries(entries).expect("generated catalog is valid")
    })
}

/// Generate a search query, sometimes with stray whitespace or capitals.
pub(super) fn arb_query() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[a-z]{1,4}",
        "[A-Za-z ]{1,6}",
    ]
}
