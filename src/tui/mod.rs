//! Terminal presentation: the portal, the module overlay and the cover page.

pub mod app;
pub mod events;
pub mod layout;
pub mod theme;
pub mod trigger;
pub mod views;
pub mod widgets;
