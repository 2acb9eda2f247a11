//! Configuration module for the support-floor fitter.

pub mod fit;

mod debug; // Private: use crate::config::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

pub mod persistence;

// Re-export commonly used items
pub use fit::{FIT_DEFAULTS, FitConfig};
pub use persistence::{DEMO_SERIES_FILENAME, DEMO_SERIES_SEED, SERIES_PATH, demo_series_path};
