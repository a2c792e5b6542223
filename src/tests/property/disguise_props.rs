//! Property-based tests for the cover toggle
//!
//! Tests invariants:
//! - Disguise mode follows the parity of toggle count
//! - A toggle pair leaves filter, visible set and focus untouched
//! - Disguising never tears down the focused surface

use proptest::prelude::*;

use super::{arb_catalog, arb_query, CATEGORIES};
use crate::core::{DisguiseController, DisguiseMode, EntryId, Session, SessionView};

#[derive(Debug, Clone)]
enum SessionOp {
    Query(String),
    Category(&'static str),
    Open(u64),
    Close,
}

fn arb_session_ops() -> impl Strategy<Value = Vec<SessionOp>> {
    proptest::collection::vec(
        prop_oneof![
            arb_query().prop_map(SessionOp::Query),
            proptest::sample::select(CATEGORIES).prop_map(SessionOp::Category),
            (1u64..25).prop_map(SessionOp::Open),
            Just(SessionOp::Close),
        ],
        0..20,
    )
}

fn apply(session: &mut Session, op: &SessionOp) {
    match op {
        SessionOp::Query(q) => {
            session.set_query(q.as_str());
        }
        SessionOp::Category(c) => {
            session.select_category(c);
        }
        SessionOp::Open(id) => {
            session.open(&EntryId::from(*id));
        }
        SessionOp::Close => {
            session.close();
        }
    }
}

proptest! {
    #[test]
    fn prop_mode_follows_toggle_parity(toggles in 0usize..50) {
        let mut disguise = DisguiseController::new();
        for _ in 0..toggles {
            disguise.toggle();
        }
        let expected = if toggles % 2 == 0 {
            DisguiseMode::Normal
        } else {
            DisguiseMode::Disguised
        };
        prop_assert_eq!(disguise.mode(), expected);
        prop_assert_eq!(disguise.transitions(), toggles as u64);
    }

    /// Property: Toggle, toggle restores exactly what was shown
    #[test]
    fn prop_toggle_pair_restores_portal(
        catalog in arb_catalog(1, 20),
        ops in arb_session_ops()
    ) {
        let mut session = Session::new(catalog);
        for op in &ops {
            apply(&mut session, op);
        }

        let filter = session.filter().clone();
        let visible = session.visible().clone();
        let focus = session.focus_state();
        let live = session.live_surfaces();

        session.toggle_disguise();
        prop_assert!(matches!(session.view(), SessionView::Cover));
        prop_assert_eq!(session.live_surfaces(), live);

        session.toggle_disguise();
        prop_assert!(!session.is_disguised());
        prop_assert_eq!(session.filter(), &filter);
        prop_assert_eq!(session.visible(), &visible);
        prop_assert_eq!(session.focus_state(), focus);
    }

    /// Property: State changes made while disguised are kept on reveal
    #[test]
    fn prop_operations_apply_under_cover(
        catalog in arb_catalog(1, 20),
        ops in arb_session_ops()
    ) {
        let mut plain = Session::new(catalog.clone());
        let mut covered = Session::new(catalog);
        covered.toggle_disguise();

        for op in &ops {
            apply(&mut plain, op);
            apply(&mut covered, op);
        }
        covered.toggle_disguise();

        prop_assert_eq!(covered.filter(), plain.filter());
        prop_assert_eq!(covered.focus_state(), plain.focus_state());
    }
}
