//! Session: the catalog plus the three controllers that act on it.
//!
//! Every mutating call follows the same pipeline:
//!
//! 1. the owning controller applies the transition (or ignores it),
//! 2. filter changes recompute the [`VisibleSet`],
//! 3. subscribers are notified with the [`StateChange`] that happened.
//!
//! The presentation layer renders only from [`Session::view`], which returns
//! [`SessionView::Cover`] while disguised. Filter and focus state stay
//! untouched underneath, so revealing shows exactly what was there before.

use super::catalog::{Catalog, CatalogEntry, EntryId};
use super::disguise::{DisguiseController, DisguiseMode};
use super::filter::{CategoryFilter, FilterState, VisibleSet};
use super::focus::{EmbedSurface, FocusController, FocusState};

/// Which piece of session state an operation changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateChange {
    Filter,
    Focus,
    Disguise,
}

/// Callback invoked after every effective state change.
pub type Observer = Box<dyn FnMut(StateChange) + Send>;

/// What the presentation layer is allowed to see.
pub enum SessionView<'a> {
    /// Disguised: only the cover document.
    Cover,
    Portal(PortalView<'a>),
}

/// Read-only projection of the portal.
pub struct PortalView<'a> {
    pub filter: &'a FilterState,
    pub categories: Vec<&'a str>,
    pub visible: Vec<&'a CatalogEntry>,
    /// A filter pass ran and matched nothing.
    pub no_matches: bool,
    pub focused: Option<&'a EmbedSurface>,
}

pub struct Session {
    catalog: Catalog,
    filter: FilterState,
    visible: VisibleSet,
    focus: FocusController,
    disguise: DisguiseController,
    observers: Vec<Observer>,
}

impl Session {
    pub fn new(catalog: Catalog) -> Self {
        let filter = FilterState::default();
        let visible = VisibleSet::compute(&catalog, &filter);
        Self {
            catalog,
            filter,
            visible,
            focus: FocusController::new(),
            disguise: DisguiseController::new(),
            observers: Vec::new(),
        }
    }

    /// Register a callback run after each effective change.
    pub fn subscribe(&mut self, observer: impl FnMut(StateChange) + Send + 'static) {
        self.observers.push(Box::new(observer));
    }

    // ── Accessors ───────────────────────────────────────────────────────

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn visible(&self) -> &VisibleSet {
        &self.visible
    }

    pub fn visible_entries(&self) -> Vec<&CatalogEntry> {
        self.visible.entries(&self.catalog)
    }

    pub fn focus_state(&self) -> FocusState {
        self.focus.state()
    }

    pub fn focused_surface(&self) -> Option<&EmbedSurface> {
        self.focus.surface()
    }

    pub fn live_surfaces(&self) -> usize {
        self.focus.live_surfaces()
    }

    pub fn disguise_mode(&self) -> DisguiseMode {
        self.disguise.mode()
    }

    pub fn is_disguised(&self) -> bool {
        self.disguise.is_disguised()
    }

    /// Project the session for rendering.
    pub fn view(&self) -> SessionView<'_> {
        if self.disguise.is_disguised() {
            return SessionView::Cover;
        }
        SessionView::Portal(PortalView {
            filter: &self.filter,
            categories: self.catalog.categories(),
            visible: self.visible_entries(),
            no_matches: self.visible.is_empty_result(),
            focused: self.focus.surface(),
        })
    }

    // ── Filter ──────────────────────────────────────────────────────────

    pub fn set_query(&mut self, query: impl Into<String>) -> Option<StateChange> {
        let query = query.into();
        if query == self.filter.query {
            return None;
        }
        self.filter.query = query;
        self.refilter()
    }

    pub fn push_query_char(&mut self, c: char) -> Option<StateChange> {
        self.filter.query.push(c);
        self.refilter()
    }

    pub fn pop_query_char(&mut self) -> Option<StateChange> {
        self.filter.query.pop()?;
        self.refilter()
    }

    pub fn clear_query(&mut self) -> Option<StateChange> {
        self.set_query(String::new())
    }

    /// Select a category by its bar label. Unknown labels are ignored.
    pub fn select_category(&mut self, label: &str) -> Option<StateChange> {
        if !self.catalog.has_category(label) {
            log::warn!("Ignoring unknown category {label:?}");
            return None;
        }
        let category = CategoryFilter::from_label(label);
        if category == self.filter.category {
            return None;
        }
        self.filter.category = category;
        self.refilter()
    }

    /// Move the category selection `step` places along the bar, wrapping.
    pub fn cycle_category(&mut self, step: isize) -> Option<StateChange> {
        let count = self.catalog.categories().len() as isize;
        let current = self
            .catalog
            .category_index(self.filter.category.label())
            .unwrap_or(0) as isize;
        let next = (current + step).rem_euclid(count) as usize;
        let label = self.catalog.category_at(next)?.to_string();
        self.select_category(&label)
    }

    fn refilter(&mut self) -> Option<StateChange> {
        self.visible = VisibleSet::compute(&self.catalog, &self.filter);
        log::debug!(
            "Filter {:?} / {:?} -> {} visible",
            self.filter.query,
            self.filter.category.label(),
            self.visible.len()
        );
        self.notify(StateChange::Filter)
    }

    // ── Focus ───────────────────────────────────────────────────────────

    pub fn open(&mut self, id: &EntryId) -> Option<StateChange> {
        if !self.focus.open(&self.catalog, id) {
            return None;
        }
        self.notify(StateChange::Focus)
    }

    /// Open the `position`-th visible entry.
    pub fn open_visible(&mut self, position: usize) -> Option<StateChange> {
        let &index = self.visible.indices().get(position)?;
        let id = self.catalog.entries()[index].id.clone();
        self.open(&id)
    }

    pub fn close(&mut self) -> Option<StateChange> {
        if !self.focus.close() {
            return None;
        }
        self.notify(StateChange::Focus)
    }

    // ── Disguise ────────────────────────────────────────────────────────

    pub fn toggle_disguise(&mut self) -> Option<StateChange> {
        let mode = self.disguise.toggle();
        self.log_disguise(mode);
        self.notify(StateChange::Disguise)
    }

    pub fn set_disguise(&mut self, mode: DisguiseMode) -> Option<StateChange> {
        if !self.disguise.set_mode(mode) {
            return None;
        }
        self.log_disguise(mode);
        self.notify(StateChange::Disguise)
    }

    fn log_disguise(&self, mode: DisguiseMode) {
        log::info!(
            "Display mode: {} (change #{})",
            mode.label(),
            self.disguise.transitions()
        );
    }

    fn notify(&mut self, change: StateChange) -> Option<StateChange> {
        for observer in &mut self.observers {
            observer(change);
        }
        Some(change)
    }
}
