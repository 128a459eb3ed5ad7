//! Shared helpers: file persistence and logger setup.

pub mod logging;
pub mod persistence;
