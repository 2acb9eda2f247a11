use itertools::Itertools;

use crate::domain::SwingLow;

/// Keeps the `n` lowest swing lows, returned in series order.
///
/// Equal lows keep their detection order when ranking. `n == 0` or an empty
/// input gives an empty selection.
pub fn select_lowest(swing_lows: &[SwingLow], n: usize) -> Vec<SwingLow> {
    swing_lows
        .iter()
        .copied()
        .sorted_by(|a, b| a.low.total_cmp(&b.low))
        .take(n)
        .sorted_by_key(|swing| swing.index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, NaiveDate};

    fn swing(index: usize, low: f64) -> SwingLow {
        let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        SwingLow {
            index,
            time: start + Days::new(index as u64),
            low,
        }
    }

    fn indices(swings: &[SwingLow]) -> Vec<usize> {
        swings.iter().map(|s| s.index).collect()
    }

    #[test]
    fn keeps_lowest_in_index_order() {
        let swings = vec![swing(2, 9.0), swing(5, 3.0), swing(9, 7.0), swing(14, 1.0)];
        let selected = select_lowest(&swings, 2);
        assert_eq!(indices(&selected), vec![5, 14]);
    }

    #[test]
    fn never_returns_more_than_available() {
        let swings = vec![swing(3, 4.0), swing(1, 2.0)];
        let selected = select_lowest(&swings, 10);
        assert_eq!(selected.len(), 2);
        assert_eq!(indices(&selected), vec![1, 3]);
    }

    #[test]
    fn zero_or_empty_gives_empty() {
        assert!(select_lowest(&[swing(1, 1.0)], 0).is_empty());
        assert!(select_lowest(&[], 5).is_empty());
    }

    #[test]
    fn ties_keep_detection_order() {
        // Detection order differs from index order; the first-detected 2.0 wins the last slot.
        let swings = vec![swing(8, 2.0), swing(4, 2.0), swing(6, 1.0)];
        let selected = select_lowest(&swings, 2);
        assert_eq!(indices(&selected), vec![6, 8]);
    }
}
