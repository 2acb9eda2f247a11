use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::domain::PricePoint;

/// Reads a JSON array of `{time, open, high, low, close}` records.
pub fn load_series(path: &Path) -> Result<Vec<PricePoint>> {
    let file = File::open(path).context(format!("Failed to open series file: {:?}", path))?;
    let reader = BufReader::new(file);
    let series: Vec<PricePoint> = serde_json::from_reader(reader)
        .context(format!("Failed to parse series file: {:?}", path))?;

    #[cfg(debug_assertions)]
    if DEBUG_FLAGS.print_series_load {
        log::info!("Loaded {} points from {:?}", series.len(), path);
    }

    Ok(series)
}

pub fn save_series(path: &Path, series: &[PricePoint]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .context(format!("Failed to create directory: {}", parent.display()))?;
    }
    let file = File::create(path).context(format!("Failed to create file: {}", path.display()))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, series)
        .context(format!("Failed to write series to: {}", path.display()))
}
