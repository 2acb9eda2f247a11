//! Reproducible synthetic weekly gold (XAU/USD) series for demos and manual testing.
//!
//! The path follows a table of historical milestones with smoothstep easing
//! between them; weekly OHLC noise comes from a seeded RNG.

use chrono::{Days, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::PricePoint;
use crate::utils::TimeUtils;
use crate::utils::time_utils::days_between;

/// (year, month, day, approximate price)
const MILESTONES: &[(i32, u32, u32, f64)] = &[
    (1971, 1, 4, 35.0),
    (1974, 12, 30, 195.0),
    (1980, 1, 21, 850.0), // Peak
    (1982, 6, 21, 300.0),
    (1985, 2, 25, 285.0),
    (1999, 8, 23, 252.0), // Bottom
    (2001, 4, 2, 255.0),
    (2005, 12, 12, 510.0),
    (2008, 3, 17, 1000.0),
    (2008, 10, 27, 720.0),
    (2011, 9, 5, 1895.0), // Peak
    (2013, 4, 15, 1360.0),
    (2015, 12, 17, 1050.0),
    (2016, 7, 6, 1360.0),
    (2019, 9, 4, 1550.0),
    (2020, 8, 6, 2067.0),
    (2021, 3, 8, 1680.0),
    (2022, 3, 8, 2050.0),
    (2022, 9, 28, 1620.0),
    (2023, 12, 4, 2050.0),
    (2024, 4, 12, 2350.0),
    (2025, 1, 6, 2650.0),
    (2025, 11, 28, 2700.0),
];

/// Annual drift applied past the last milestone
const DRIFT_PER_YEAR: f64 = 0.02;

/// Weekly volatility is drawn uniformly from this range
const MIN_WEEKLY_VOL: f64 = 0.01;
const MAX_WEEKLY_VOL: f64 = 0.03;

pub struct DemoSeriesConfig {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub seed: u64,
}

impl DemoSeriesConfig {
    /// Full 1971-01-04 to 2025-11-28 range.
    pub fn full_history(seed: u64) -> Self {
        let (first, last) = (MILESTONES[0], MILESTONES[MILESTONES.len() - 1]);
        Self {
            start: milestone_date(first),
            end: milestone_date(last),
            seed,
        }
    }
}

fn milestone_date((year, month, day, _): (i32, u32, u32, f64)) -> NaiveDate {
    // Table entries are literal calendar dates
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

fn smooth_step(x: f64) -> f64 {
    let x = x.clamp(0.0, 1.0);
    x * x * (3.0 - 2.0 * x)
}

/// Eased price along the milestone path on `date`.
pub fn interpolate_price(date: NaiveDate) -> f64 {
    for pair in MILESTONES.windows(2) {
        let (d1, p1) = (milestone_date(pair[0]), pair[0].3);
        let (d2, p2) = (milestone_date(pair[1]), pair[1].3);
        if d1 <= date && date <= d2 {
            let total = days_between(d1, d2);
            if total == 0.0 {
                return p1;
            }
            let factor = days_between(d1, date) / total;
            return p1 + (p2 - p1) * smooth_step(factor);
        }
    }

    let first = MILESTONES[0];
    let last = MILESTONES[MILESTONES.len() - 1];
    if date < milestone_date(first) {
        return first.3;
    }
    let days_beyond = days_between(milestone_date(last), date);
    last.3 * (1.0 + days_beyond / TimeUtils::DAYS_IN_Y * DRIFT_PER_YEAR)
}

fn round_cents(price: f64) -> f64 {
    (price * 100.0).round() / 100.0
}

/// One point per week from `config.start` up to and including `config.end`.
pub fn generate_demo_series(config: &DemoSeriesConfig) -> Vec<PricePoint> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut series = Vec::new();
    let mut date = config.start;

    while date <= config.end {
        let price = interpolate_price(date);
        let vol = rng.gen_range(MIN_WEEKLY_VOL..MAX_WEEKLY_VOL);

        let open = price * (1.0 + rng.gen_range(-vol / 2.0..vol / 2.0));
        let high = price * (1.0 + rng.gen_range(0.0..vol * 1.5));
        let low = price * (1.0 - rng.gen_range(0.0..vol * 1.5));
        let close = price * (1.0 + rng.gen_range(-vol / 2.0..vol / 2.0));

        let high = high.max(open).max(close);
        let low = low.min(open).min(close);

        series.push(PricePoint::new(
            date,
            round_cents(open),
            round_cents(high),
            round_cents(low),
            round_cents(close),
        ));

        match date.checked_add_days(Days::new(TimeUtils::DAYS_IN_W as u64)) {
            Some(next) => date = next,
            None => break,
        }
    }
    series
}
