use chrono::NaiveDate;

pub struct TimeUtils;

impl TimeUtils {
    pub const DAYS_IN_W: i64 = 7;
    pub const DAYS_IN_Y: f64 = 365.0;
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d";
}

/// Days elapsed from `origin` to `time`. Negative if `time` precedes `origin`.
///
/// Every strategy measures time through this one function so that day offsets
/// agree between support points and the full series.
pub fn days_between(origin: NaiveDate, time: NaiveDate) -> f64 {
    (time - origin).num_days() as f64
}

/// Day offsets of every point relative to `origin`, in input order.
pub fn day_offsets(origin: NaiveDate, times: impl IntoIterator<Item = NaiveDate>) -> Vec<f64> {
    times
        .into_iter()
        .map(|time| days_between(origin, time))
        .collect()
}

pub fn format_date(date: NaiveDate) -> String {
    // Used for display purposes
    date.format(TimeUtils::STANDARD_TIME_FORMAT).to_string()
}

pub fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, TimeUtils::STANDARD_TIME_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(text: &str) -> NaiveDate {
        parse_date(text).unwrap()
    }

    #[test]
    fn days_between_counts_whole_days() {
        assert_eq!(days_between(date("2024-01-01"), date("2024-01-01")), 0.0);
        assert_eq!(days_between(date("2024-01-01"), date("2024-03-01")), 60.0); // leap year
        assert_eq!(days_between(date("2024-01-08"), date("2024-01-01")), -7.0);
    }

    #[test]
    fn day_offsets_preserve_order() {
        let origin = date("1971-01-04");
        let offsets = day_offsets(
            origin,
            [date("1971-01-04"), date("1971-01-11"), date("1971-01-18")],
        );
        assert_eq!(offsets, vec![0.0, 7.0, 14.0]);
    }

    #[test]
    fn format_round_trips_standard_format() {
        assert_eq!(format_date(date("1999-08-23")), "1999-08-23");
        assert!(parse_date("23/08/1999").is_none());
    }
}
