use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use crate::domain::PricePoint;
use crate::utils::maths_utils::{get_max, get_min};
use crate::utils::time_utils::format_date;

/// Headline statistics of a price series.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SeriesSummary {
    pub points: usize,
    pub first_time: NaiveDate,
    pub last_time: NaiveDate,
    /// Lowest `low` anywhere in the series
    pub all_time_low: f64,
    /// Highest `high` anywhere in the series
    pub all_time_high: f64,
    pub first_close: f64,
    pub last_close: f64,
    pub total_return_pct: f64,
}

impl SeriesSummary {
    pub fn from_series(series: &[PricePoint]) -> Option<Self> {
        let first = series.first()?;
        let last = series.last()?;

        let lows: Vec<f64> = series.iter().map(|p| p.low).collect();
        let highs: Vec<f64> = series.iter().map(|p| p.high).collect();

        Some(Self {
            points: series.len(),
            first_time: first.time,
            last_time: last.time,
            all_time_low: get_min(&lows),
            all_time_high: get_max(&highs),
            first_close: first.close,
            last_close: last.close,
            total_return_pct: (last.close / first.close - 1.0) * 100.0,
        })
    }
}

impl fmt::Display for SeriesSummary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Data Points: {}", self.points)?;
        writeln!(
            f,
            "Date Range: {} to {}",
            format_date(self.first_time),
            format_date(self.last_time)
        )?;
        writeln!(f, "All-time Low:   {:.2}", self.all_time_low)?;
        writeln!(f, "All-time High:  {:.2}", self.all_time_high)?;
        writeln!(f, "Starting Price: {:.2}", self.first_close)?;
        writeln!(f, "Ending Price:   {:.2}", self.last_close)?;
        write!(f, "Total Return:   {:.1}%", self.total_return_pct)
    }
}
