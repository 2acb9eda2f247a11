//! Curve strategies and the single dispatch entry point.

pub mod envelope;
pub mod polynomial;
pub mod regression;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::FitConfig;
#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::domain::{PricePoint, SwingLow};
use crate::models::FitResult;
use crate::utils::time_utils::{day_offsets, days_between};

pub use envelope::{geometric_envelope, percentile_envelope};
pub use polynomial::polynomial;
pub use regression::{exponential, logarithmic, power_law};

/// The closed set of curve models. Identifiers are the lowercase names used
/// on the command line and in config files.
#[derive(
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Default,
    Debug,
    Serialize,
    Deserialize,
    strum_macros::EnumIter,
    strum_macros::EnumString,
    strum_macros::Display,
    strum_macros::AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    #[default]
    PowerLaw,
    Exponential,
    Polynomial,
    Logarithmic,
    #[strum(serialize = "geometric")]
    #[serde(rename = "geometric")]
    GeometricEnvelope,
    #[strum(serialize = "percentile")]
    #[serde(rename = "percentile")]
    PercentileEnvelope,
}

impl Strategy {
    /// Lenient lookup: an unrecognised id falls back to [`Strategy::PowerLaw`].
    ///
    /// Use `str::parse` instead where a typo should be an error.
    pub fn from_id(id: &str) -> Self {
        id.parse().unwrap_or_else(|_| {
            log::warn!(
                "Unknown strategy id {:?}; falling back to {}",
                id,
                Strategy::PowerLaw
            );
            Strategy::PowerLaw
        })
    }

    /// Whether the strategy regresses on support points (and so reports r2).
    pub fn uses_support_points(&self) -> bool {
        !matches!(
            self,
            Strategy::GeometricEnvelope | Strategy::PercentileEnvelope
        )
    }

    pub fn compute(
        &self,
        support_points: &[SwingLow],
        series: &[PricePoint],
        config: &FitConfig,
    ) -> FitResult {
        let result = match self {
            Strategy::PowerLaw => power_law(support_points, series),
            Strategy::Exponential => exponential(support_points, series),
            Strategy::Polynomial => polynomial(support_points, series, config.polynomial_degree),
            Strategy::Logarithmic => logarithmic(support_points, series),
            Strategy::GeometricEnvelope => geometric_envelope(series, config.rolling_window_size),
            Strategy::PercentileEnvelope => percentile_envelope(
                series,
                config.rolling_window_size,
                config.percentile_fraction,
            ),
        };

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_fit_params {
            log::info!(
                "{} over {} points ({} supports): {:?}, r2 {:?}",
                result.name,
                series.len(),
                support_points.len(),
                result.params,
                result.r2
            );
        }

        result
    }
}

/// Runs the strategy named by `strategy_id` over the series.
///
/// Unknown ids silently (bar a warning) resolve to the power-law fit.
pub fn compute_curve(
    strategy_id: &str,
    support_points: &[SwingLow],
    series: &[PricePoint],
    config: &FitConfig,
) -> FitResult {
    Strategy::from_id(strategy_id).compute(support_points, series, config)
}

fn series_origin(series: &[PricePoint]) -> Option<NaiveDate> {
    series.first().map(|p| p.time)
}

/// Day offsets of each series point from the first one.
pub(crate) fn series_day_offsets(series: &[PricePoint]) -> Vec<f64> {
    match series_origin(series) {
        Some(origin) => day_offsets(origin, series.iter().map(|p| p.time)),
        None => Vec::new(),
    }
}

/// Day offsets of the support points, measured from the first series point.
pub(crate) fn support_day_offsets(support_points: &[SwingLow], series: &[PricePoint]) -> Vec<f64> {
    let origin = series_origin(series).or_else(|| support_points.first().map(|s| s.time));
    support_points
        .iter()
        .map(|s| origin.map_or(0.0, |o| days_between(o, s.time)))
        .collect()
}
