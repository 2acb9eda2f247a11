//! File persistence configuration

use std::path::PathBuf;

/// Directory path for storing series files
pub const SERIES_PATH: &str = "series_data";

/// Filename emitted by the demo series generator
pub const DEMO_SERIES_FILENAME: &str = "gold_weekly_demo.json";

/// Seed used by the demo series generator so repeated runs write the same file
pub const DEMO_SERIES_SEED: u64 = 42;

pub fn demo_series_path() -> PathBuf {
    PathBuf::from(SERIES_PATH).join(DEMO_SERIES_FILENAME)
}
