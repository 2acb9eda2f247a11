// Output models produced by the fitting core
// These modules contain plain data, independent of any rendering

pub mod curve;
pub mod summary;

// Re-export key types for convenience
pub use curve::{CurvePoint, FitParams, FitResult};
pub use summary::SeriesSummary;
