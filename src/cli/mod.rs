//! Command-line parsing for the Gilliland chart renderer.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! rendering/math code. Every flag is optional: a bare `gilliland` run loads
//! `gilliland_data.json`, overlays the three classic fits, and writes
//! `gilliland.png`.

use std::path::PathBuf;

use clap::Parser;

use crate::fit::FitKind;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "gilliland",
    version,
    about = "Gilliland correlation chart renderer (scatter + fit overlays)"
)]
pub struct Cli {
    /// Input dataset JSON file.
    #[arg(long, value_name = "JSON", default_value = "gilliland_data.json")]
    pub data: PathBuf,

    /// Output image file.
    #[arg(long, value_name = "PNG", default_value = "gilliland.png")]
    pub out: PathBuf,

    /// Figure width (pixels).
    #[arg(long, default_value_t = 1800)]
    pub width: u32,

    /// Figure height (pixels).
    #[arg(long, default_value_t = 900)]
    pub height: u32,

    /// Fit curve to overlay (repeatable).
    #[arg(
        long = "fit",
        value_enum,
        default_values_t = [FitKind::Liddle, FitKind::Rusche, FitKind::DavisP3]
    )]
    pub fits: Vec<FitKind>,

    /// Disable all fit overlays (scatter only).
    #[arg(long)]
    pub no_fits: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_reproduces_the_standalone_run() {
        let cli = Cli::parse_from(["gilliland"]);
        assert_eq!(cli.data, PathBuf::from("gilliland_data.json"));
        assert_eq!(cli.out, PathBuf::from("gilliland.png"));
        assert_eq!((cli.width, cli.height), (1800, 900));
        assert_eq!(
            cli.fits,
            vec![FitKind::Liddle, FitKind::Rusche, FitKind::DavisP3]
        );
        assert!(!cli.no_fits);
    }

    #[test]
    fn fit_flag_is_repeatable() {
        let cli = Cli::parse_from(["gilliland", "--fit", "liddle", "--fit", "davis-rational"]);
        assert_eq!(cli.fits, vec![FitKind::Liddle, FitKind::DavisRational]);
    }
}
