//! Crate-internal test suites that span more than one module.

mod property;
