use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A local minimum of the `low` column, remembered by its position in the series.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct SwingLow {
    /// Position in the source series
    pub index: usize,
    pub time: NaiveDate,
    pub low: f64,
}
