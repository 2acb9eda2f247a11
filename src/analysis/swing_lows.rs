use crate::domain::{PricePoint, SwingLow};

/// Finds every interior point whose `low` is strictly below both neighbours' lows.
///
/// Flat bottoms (two or more equal lows) never qualify, and neither the first
/// nor the last point can be a swing low. Output is in series order.
pub fn detect_swing_lows(series: &[PricePoint]) -> Vec<SwingLow> {
    series
        .windows(3)
        .enumerate()
        .filter(|(_, w)| w[1].low < w[0].low && w[1].low < w[2].low)
        .map(|(i, w)| SwingLow {
            index: i + 1,
            time: w[1].time,
            low: w[1].low,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, NaiveDate};

    fn series_from_lows(lows: &[f64]) -> Vec<PricePoint> {
        let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        lows.iter()
            .enumerate()
            .map(|(i, &low)| {
                let time = start + Days::new(i as u64);
                PricePoint::new(time, low + 1.0, low + 2.0, low, low + 1.0)
            })
            .collect()
    }

    fn indices(swings: &[SwingLow]) -> Vec<usize> {
        swings.iter().map(|s| s.index).collect()
    }

    #[test]
    fn short_series_have_no_swing_lows() {
        assert!(detect_swing_lows(&[]).is_empty());
        assert!(detect_swing_lows(&series_from_lows(&[5.0])).is_empty());
        assert!(detect_swing_lows(&series_from_lows(&[5.0, 1.0])).is_empty());
    }

    #[test]
    fn finds_strict_local_minima_in_order() {
        let series = series_from_lows(&[5.0, 3.0, 4.0, 2.0, 6.0, 1.0, 7.0]);
        let swings = detect_swing_lows(&series);
        assert_eq!(indices(&swings), vec![1, 3, 5]);
        assert_eq!(swings[1].low, 2.0);
        assert_eq!(swings[1].time, series[3].time);
    }

    #[test]
    fn endpoints_are_never_swing_lows() {
        let series = series_from_lows(&[1.0, 5.0, 4.0, 6.0, 0.5]);
        assert_eq!(indices(&detect_swing_lows(&series)), vec![2]);
    }

    #[test]
    fn flat_bottom_is_not_a_swing_low() {
        let series = series_from_lows(&[5.0, 2.0, 2.0, 5.0]);
        assert!(detect_swing_lows(&series).is_empty());
    }

    #[test]
    fn equal_neighbour_removes_detection() {
        let base = [5.0, 3.0, 4.0];
        assert_eq!(indices(&detect_swing_lows(&series_from_lows(&base))), vec![1]);

        // Left neighbour equal, then right neighbour lower
        assert!(detect_swing_lows(&series_from_lows(&[3.0, 3.0, 4.0])).is_empty());
        assert!(detect_swing_lows(&series_from_lows(&[5.0, 3.0, 2.5])).is_empty());
    }

    #[test]
    fn v_shape_has_single_swing_low_at_vertex() {
        let lows: Vec<f64> = (0..60).map(|i| 100.0 + (i as f64 - 30.0).abs()).collect();
        let swings = detect_swing_lows(&series_from_lows(&lows));
        assert_eq!(indices(&swings), vec![30]);
        assert_eq!(swings[0].low, 100.0);
    }
}
