//! Portal core: catalog, filtering, focus and disguise state.
//!
//! Nothing in here touches the terminal. The TUI reads [`session::Session`]
//! and writes back only through its operations.

pub mod catalog;
pub mod disguise;
pub mod filter;
pub mod focus;
pub mod logging;
pub mod session;

pub use catalog::{Catalog, CatalogEntry, CatalogError, EntryId, ALL_CATEGORIES};
pub use disguise::{DisguiseController, DisguiseMode};
pub use filter::{apply, CategoryFilter, FilterState, VisibleSet};
pub use focus::{EmbedSurface, FocusController, FocusState};
pub use session::{PortalView, Session, SessionView, StateChange};
