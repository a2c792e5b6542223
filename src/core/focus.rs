//! Focus controller: which single module, if any, is open full-view.
//!
//! Opening a module mounts an [`EmbedSurface`] for its content URL; the
//! surface lives exactly as long as the focus does. Switching focus or
//! closing drops it, which is the teardown: nothing of the previous module's
//! embedding survives into the next one.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::instrument;

use super::catalog::{Catalog, CatalogEntry, EntryId};

/// Observable focus state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FocusState {
    #[default]
    Unfocused,
    Focused(EntryId),
}

impl FocusState {
    pub fn is_focused(&self) -> bool {
        matches!(self, Self::Focused(_))
    }
}

/// Isolated embedding of one module's content.
///
/// One-way: the surface takes the content URL and exposes nothing back to the
/// controller. Dropping it tears the embedding down.
#[derive(Debug)]
pub struct EmbedSurface {
    entry_id: EntryId,
    title: String,
    content_url: String,
    thumbnail_url: String,
    mounted_at: Instant,
    live: Arc<AtomicUsize>,
}

impl EmbedSurface {
    fn mount(entry: &CatalogEntry, live: Arc<AtomicUsize>) -> Self {
        live.fetch_add(1, Ordering::SeqCst);
        log::debug!("Mounted embed surface for {} ({})", entry.id, entry.content_url);
        Self {
            entry_id: entry.id.clone(),
            title: entry.title.clone(),
            content_url: entry.content_url.clone(),
            thumbnail_url: entry.thumbnail_url.clone(),
            mounted_at: Instant::now(),
            live,
        }
    }

    pub fn entry_id(&self) -> &EntryId {
        &self.entry_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// URL rendered inside the surface, also the target of the external-open action.
    pub fn content_url(&self) -> &str {
        &self.content_url
    }

    pub fn thumbnail_url(&self) -> &str {
        &self.thumbnail_url
    }

    pub fn mounted_for(&self) -> Duration {
        self.mounted_at.elapsed()
    }
}

impl Drop for EmbedSurface {
    fn drop(&mut self) {
        self.live.fetch_sub(1, Ordering::SeqCst);
        log::debug!("Tore down embed surface for {}", self.entry_id);
    }
}

/// Owner of [`FocusState`] and the mounted surface.
#[derive(Debug, Default)]
pub struct FocusController {
    surface: Option<EmbedSurface>,
    /// Count of surfaces currently mounted by this controller.
    live: Arc<AtomicUsize>,
}

impl FocusController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> FocusState {
        match &self.surface {
            Some(surface) => FocusState::Focused(surface.entry_id.clone()),
            None => FocusState::Unfocused,
        }
    }

    pub fn focused_id(&self) -> Option<&EntryId> {
        self.surface.as_ref().map(EmbedSurface::entry_id)
    }

    pub fn surface(&self) -> Option<&EmbedSurface> {
        self.surface.as_ref()
    }

    /// Focus `id`. Returns `true` if the state changed.
    ///
    /// Unknown ids are logged and ignored. Re-opening the focused id keeps
    /// its surface mounted.
    #[instrument(level = "debug", skip_all, fields(id = %id))]
    pub fn open(&mut self, catalog: &Catalog, id: &EntryId) -> bool {
        let Some(entry) = catalog.get(id) else {
            log::warn!("Ignoring open for unknown catalog entry {id}");
            return false;
        };

        if self.focused_id() == Some(id) {
            return false;
        }

        // Tear the previous surface down before mounting the next one.
        self.surface = None;
        self.surface = Some(EmbedSurface::mount(entry, Arc::clone(&self.live)));
        log::debug!("Focus -> {id}");
        true
    }

    /// Clear the focus. Returns `true` if something was focused.
    pub fn close(&mut self) -> bool {
        match self.surface.take() {
            Some(surface) => {
                log::debug!("Focus closed ({})", surface.entry_id);
                true
            }
            None => false,
        }
    }

    /// Number of embed surfaces currently alive (0 or 1).
    pub fn live_surfaces(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }
}
