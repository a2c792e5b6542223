pub mod catalog;
pub mod cover;
pub mod module_modal;
