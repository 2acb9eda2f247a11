use anyhow::{Result, bail};

use crate::domain::PricePoint;
use crate::utils::time_utils::format_date;

/// Boundary checks a series must pass before it reaches the fitting core.
///
/// The core assumes positive prices and strictly increasing dates; it does not
/// check either itself.
pub fn validate_series(series: &[PricePoint]) -> Result<()> {
    for (i, point) in series.iter().enumerate() {
        if !point.has_positive_prices() {
            bail!(
                "Point {} ({}) has a non-positive or non-finite price: o={} h={} l={} c={}",
                i,
                format_date(point.time),
                point.open,
                point.high,
                point.low,
                point.close
            );
        }
        if point.high < point.low {
            bail!(
                "Point {} ({}) has high {} below low {}",
                i,
                format_date(point.time),
                point.high,
                point.low
            );
        }
    }

    if let Some(pair) = series.windows(2).find(|pair| pair[1].time <= pair[0].time) {
        bail!(
            "Series dates must be strictly increasing: {} is followed by {}",
            format_date(pair[0].time),
            format_date(pair[1].time)
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn point(day: u32, low: f64, high: f64) -> PricePoint {
        let time = NaiveDate::from_ymd_opt(2022, 9, day).unwrap();
        PricePoint::new(time, low, high, low, high)
    }

    #[test]
    fn accepts_clean_series() {
        let series = vec![point(1, 10.0, 11.0), point(2, 10.5, 12.0), point(5, 9.0, 9.5)];
        assert!(validate_series(&series).is_ok());
        assert!(validate_series(&[]).is_ok());
    }

    #[test]
    fn rejects_non_positive_price() {
        let series = vec![point(1, 10.0, 11.0), point(2, 0.0, 12.0)];
        let err = validate_series(&series).unwrap_err();
        assert!(err.to_string().contains("Point 1 (2022-09-02)"));
    }

    #[test]
    fn rejects_inverted_candle() {
        let mut bad = point(3, 10.0, 11.0);
        bad.high = 9.0;
        let err = validate_series(&[bad]).unwrap_err();
        assert!(err.to_string().contains("below low"));
    }

    #[test]
    fn rejects_duplicate_or_unordered_dates() {
        let dup = vec![point(4, 10.0, 11.0), point(4, 10.0, 11.0)];
        assert!(validate_series(&dup).is_err());

        let backwards = vec![point(9, 10.0, 11.0), point(8, 10.0, 11.0)];
        let err = validate_series(&backwards).unwrap_err();
        assert!(err.to_string().contains("2022-09-09 is followed by 2022-09-08"));
    }
}
