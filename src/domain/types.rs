//! Dataset document schema.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - loaded straight from the experimental-data JSON files
//! - handed read-only to the renderer
//! - written back out for round-trip checks and tooling
//!
//! `BTreeMap` is used for the name → value maps so serialization order is
//! deterministic.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Top-level dataset document.
///
/// `x` and `y` are axis labels stored as TeX-style math text (the data files
/// predate this tool); the renderer strips the markup before drawing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Independent-axis label (math text).
    pub x: String,
    /// Dependent-axis label (math text).
    pub y: String,
    /// Named experimental datasets.
    pub datasets: BTreeMap<String, Dataset>,
}

/// A named collection of experiments (typically one literature source).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub experiments: BTreeMap<String, Experiment>,
}

/// A single experiment: paired samples plus marker-style hints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experiment {
    pub data: Samples,
    /// Field name kept for wire compatibility with existing data files.
    pub matplotlib: MarkerHints,
}

/// Paired observation series.
///
/// Invariant: `x` and `y` have equal length and are paired by index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Samples {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Samples {
    /// Iterate over `(x, y)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.x.len().min(self.y.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Marker-style hints carried per experiment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerHints {
    /// Marker symbol code (`"o"`, `"s"`, `"^"`, ...).
    pub marker: String,
    /// Optional fill style; `"none"` renders hollow markers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fillstyle: Option<String>,
}

impl Document {
    /// Series label for an experiment: the dataset name, or
    /// `dataset-experiment` when the dataset holds more than one experiment.
    pub fn series_label(dataset_name: &str, experiment_name: &str, n_experiments: usize) -> String {
        if n_experiments > 1 {
            format!("{dataset_name}-{experiment_name}")
        } else {
            dataset_name.to_string()
        }
    }
}
