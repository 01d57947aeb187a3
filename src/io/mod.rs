//! Input/output helpers.
//!
//! - dataset document JSON read/write (`dataset`)

pub mod dataset;

pub use dataset::*;
