//! Named curve-fit functions overlaid on the experimental scatter.
//!
//! The fitter side of this tool is deliberately simple: the correlations are
//! published closed-form approximations, not estimated parameters, so a fit
//! is just a pure function plus display metadata (legend label + line-style
//! shortcode).

pub mod correlations;

use std::collections::BTreeMap;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Which built-in correlation a fit evaluates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FitKind {
    Liddle,
    Rusche,
    DavisP3,
    DavisRational,
}

impl FitKind {
    /// Evaluate the correlation at a normalized abscissa.
    pub fn eval(self, x: f64) -> f64 {
        match self {
            FitKind::Liddle => correlations::liddle(x),
            FitKind::Rusche => correlations::rusche(x),
            FitKind::DavisP3 => correlations::davis_p3(x),
            FitKind::DavisRational => correlations::davis_rational(x),
        }
    }

    /// Registry key (also the CLI spelling).
    pub fn name(self) -> &'static str {
        match self {
            FitKind::Liddle => "Liddle",
            FitKind::Rusche => "Rusche",
            FitKind::DavisP3 => "DavisP3",
            FitKind::DavisRational => "DavisRational",
        }
    }

    /// Legend label, citing the source publication.
    pub fn display_name(self) -> &'static str {
        match self {
            FitKind::Liddle => "Liddle(1968)",
            FitKind::Rusche => "Rusche(1999)",
            FitKind::DavisP3 => "Davis(2000)",
            FitKind::DavisRational => "Davis(2000) rational",
        }
    }

    /// Default line-style shortcode (color char + dash pattern).
    pub fn shortcode(self) -> &'static str {
        match self {
            FitKind::Liddle => "b--",
            FitKind::Rusche => "b:",
            FitKind::DavisP3 => "g-",
            FitKind::DavisRational => "r-.",
        }
    }
}

/// A fit as the renderer consumes it: function + display metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct FitSpec {
    pub kind: FitKind,
    pub label: String,
    pub shortcode: String,
}

impl FitSpec {
    pub fn builtin(kind: FitKind) -> Self {
        Self {
            kind,
            label: kind.display_name().to_string(),
            shortcode: kind.shortcode().to_string(),
        }
    }
}

/// Build the named fit map for a selection of kinds.
pub fn fit_map(kinds: &[FitKind]) -> BTreeMap<String, FitSpec> {
    kinds
        .iter()
        .map(|&kind| (kind.name().to_string(), FitSpec::builtin(kind)))
        .collect()
}

/// The fit set charted by a no-argument run.
pub fn default_fits() -> BTreeMap<String, FitSpec> {
    fit_map(&[FitKind::Liddle, FitKind::Rusche, FitKind::DavisP3])
}
