//! Property-based tests for module focus
//!
//! Tests invariants:
//! - At most one embed surface is live after any operation sequence
//! - A live surface exists exactly when something is focused
//! - The focused id always belongs to the catalog

use proptest::prelude::*;

use super::arb_catalog;
use crate::core::{EntryId, FocusController, FocusState};

#[derive(Debug, Clone)]
enum FocusOp {
    /// Open by id; ids past the catalog length are unknown.
    Open(u64),
    Close,
}

fn arb_ops() -> impl Strategy<Value = Vec<FocusOp>> {
    proptest::collection::vec(
        prop_oneof![
            3 => (1u64..40).prop_map(FocusOp::Open),
            1 => Just(FocusOp::Close),
        ],
        0..40,
    )
}

proptest! {
    #[test]
    fn prop_single_live_surface(catalog in arb_catalog(1, 20), ops in arb_ops()) {
        let mut focus = FocusController::new();
        for op in ops {
            match op {
                FocusOp::Open(id) => {
                    focus.open(&catalog, &EntryId::from(id));
                }
                FocusOp::Close => {
                    focus.close();
                }
            }

            prop_assert!(focus.live_surfaces() <= 1);
            prop_assert_eq!(focus.live_surfaces() == 1, focus.state().is_focused());

            if let FocusState::Focused(id) = focus.state() {
                prop_assert!(catalog.contains(&id), "Focused on unknown id {}", id);
                prop_assert_eq!(focus.surface().map(|s| s.entry_id().clone()), Some(id));
            }
        }
    }

    /// Property: Opening an unknown id never changes focus
    #[test]
    fn prop_unknown_open_is_noop(catalog in arb_catalog(1, 10), first in 1u64..10) {
        let mut focus = FocusController::new();
        focus.open(&catalog, &EntryId::from(first));
        let before = focus.state();

        let unknown = EntryId::from(catalog.len() as u64 + 1);
        prop_assert!(!focus.open(&catalog, &unknown));
        prop_assert_eq!(focus.state(), before);
    }
}
