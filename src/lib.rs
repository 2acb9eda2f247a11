#![allow(clippy::collapsible_if)]

// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod models;
pub mod strategies;
pub mod utils;

use std::path::PathBuf;

use anyhow::{Result, bail};

// Re-export commonly used types
pub use analysis::{detect_swing_lows, select_lowest};
pub use config::FitConfig;
pub use domain::{PricePoint, SwingLow};
pub use models::{CurvePoint, FitParams, FitResult, SeriesSummary};
pub use strategies::{Strategy, compute_curve};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::config::{FIT_DEFAULTS, demo_series_path};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Fit a long-run support floor beneath a price series", long_about = None)]
pub struct Cli {
    /// JSON series file: an array of {time, open, high, low, close}
    #[arg(long, short, default_value_os_t = demo_series_path())]
    pub input: PathBuf,

    /// Curve model: powerlaw, exponential, polynomial, logarithmic, geometric, percentile
    #[arg(long, short, default_value_t = FIT_DEFAULTS.strategy)]
    pub strategy: Strategy,

    /// Number of lowest swing lows used as support points
    #[arg(long, default_value_t = FIT_DEFAULTS.support_point_count)]
    pub support_points: usize,

    /// Polynomial degree (polynomial strategy only)
    #[arg(long, default_value_t = FIT_DEFAULTS.polynomial_degree)]
    pub degree: usize,

    /// Rank fraction in [0, 1] (percentile strategy only)
    #[arg(long, default_value_t = FIT_DEFAULTS.envelope.percentile_fraction)]
    pub percentile: f64,

    /// Trailing window length in points (envelope strategies only)
    #[arg(long, default_value_t = FIT_DEFAULTS.envelope.rolling_window_size)]
    pub window: usize,

    /// Write the fit result JSON here instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Print headline statistics of the input series
    #[arg(long, default_value_t = false)]
    pub summary: bool,

    /// Keep only plottable curve points (finite and positive) in the output
    #[arg(long, default_value_t = false)]
    pub display_only: bool,
}

impl Cli {
    /// Builds the fit settings snapshot, rejecting values the core cannot use.
    pub fn fit_config(&self) -> Result<FitConfig> {
        if !(0.0..=1.0).contains(&self.percentile) {
            bail!("--percentile must be within [0, 1], got {}", self.percentile);
        }
        if self.degree == 0 {
            bail!("--degree must be at least 1");
        }
        if self.window == 0 {
            bail!("--window must be at least 1");
        }
        Ok(FitConfig {
            support_point_count: self.support_points,
            strategy: self.strategy,
            polynomial_degree: self.degree,
            percentile_fraction: self.percentile,
            rolling_window_size: self.window,
        })
    }
}

/// Full pipeline: swing lows, support selection, then the configured strategy.
pub fn fit_series(series: &[PricePoint], config: &FitConfig) -> FitResult {
    let swing_lows = detect_swing_lows(series);
    let support_points = select_lowest(&swing_lows, config.support_point_count);

    #[cfg(debug_assertions)]
    if DEBUG_FLAGS.print_swing_lows {
        log::info!(
            "{} swing lows, {} selected as support: {:?}",
            swing_lows.len(),
            support_points.len(),
            support_points
        );
    }

    compute_curve(config.strategy.as_ref(), &support_points, series, config)
}
