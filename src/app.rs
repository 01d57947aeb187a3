//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - loads the dataset document
//! - assembles the fit overlays
//! - renders the two-panel figure

use std::collections::BTreeMap;

use clap::Parser;
use log::{debug, info};

use crate::cli::Cli;
use crate::error::AppError;
use crate::plot::{render_chart, ChartConfig, PlotStyle};

/// Entry point for the `gilliland` binary.
pub fn run() -> Result<(), AppError> {
    env_logger::init();

    let cli = Cli::parse();
    let config = chart_config_from_args(&cli);

    let document = crate::io::read_document(&cli.data)?;
    let n_experiments: usize = document
        .datasets
        .values()
        .map(|ds| ds.experiments.len())
        .sum();
    info!(
        "loaded {} dataset(s), {} experiment(s) from '{}'",
        document.datasets.len(),
        n_experiments,
        cli.data.display()
    );
    debug!("fits: {:?}", config.fits.keys().collect::<Vec<_>>());

    render_chart(&document, &config)?;
    info!("wrote chart to '{}'", config.output_path.display());

    Ok(())
}

/// Build the renderer configuration from CLI flags.
pub fn chart_config_from_args(cli: &Cli) -> ChartConfig {
    let fits = if cli.no_fits {
        BTreeMap::new()
    } else {
        crate::fit::fit_map(&cli.fits)
    };

    ChartConfig {
        figure_size: (cli.width, cli.height),
        output_path: cli.out.clone(),
        fits,
        style: PlotStyle::default(),
    }
}
