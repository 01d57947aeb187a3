//! Domain types used throughout the pipeline.
//!
//! This module defines the dataset document schema:
//!
//! - the top-level `Document` (axis labels + named datasets)
//! - per-dataset `Experiment` sample series
//! - per-experiment marker hints carried from the data files

pub mod types;

pub use types::*;
