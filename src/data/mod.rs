// Series file I/O, boundary validation and demo data
pub mod demo_series;
pub mod series_file;
pub mod validation;

// Re-export commonly used functions
pub use demo_series::{DemoSeriesConfig, generate_demo_series};
pub use series_file::{load_series, save_series};
pub use validation::validate_series;
