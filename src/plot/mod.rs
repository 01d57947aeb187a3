//! Two-panel chart rendering.
//!
//! - chart assembly + PNG output (`chart`)
//! - marker symbol mapping (`marker`)
//! - line-style shortcodes and text sizing (`style`)

pub mod chart;
pub mod marker;
pub mod style;

pub use chart::*;
pub use marker::*;
pub use style::*;
