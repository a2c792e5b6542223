/// Covershelf - curriculum module portal with a one-key cover page.
///
/// Core library providing the module catalog, search and category
/// filtering, full-view module focus, and the disguise toggle.

pub mod config;
pub mod core;
pub mod tui;

#[cfg(test)]
mod tests;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
