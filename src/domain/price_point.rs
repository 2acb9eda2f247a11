use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One daily (or weekly) OHLC observation. Serialises with the date as `YYYY-MM-DD`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct PricePoint {
    pub time: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl PricePoint {
    // A constructor for convenience
    pub fn new(time: NaiveDate, open: f64, high: f64, low: f64, close: f64) -> Self {
        PricePoint {
            time,
            open,
            high,
            low,
            close,
        }
    }

    /// All four prices are finite and strictly positive.
    pub fn has_positive_prices(&self) -> bool {
        [self.open, self.high, self.low, self.close]
            .iter()
            .all(|p| p.is_finite() && *p > 0.0)
    }
}
