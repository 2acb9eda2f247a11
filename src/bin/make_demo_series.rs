use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use support_floor::SeriesSummary;
use support_floor::config::{DEMO_SERIES_SEED, demo_series_path};
use support_floor::data::{DemoSeriesConfig, generate_demo_series, save_series};

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // Optional first argument overrides the output path
    let output_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(demo_series_path);

    build_demo_series(&output_path)
}

fn build_demo_series(output_path: &Path) -> Result<()> {
    let series = generate_demo_series(&DemoSeriesConfig::full_history(DEMO_SERIES_SEED));

    save_series(output_path, &series)
        .with_context(|| format!("Failed to write demo series {:?}", output_path))?;

    if let Some(summary) = SeriesSummary::from_series(&series) {
        println!("{}", summary);
    }
    println!(
        "✅ Demo series written to {:?} with {} weekly points.",
        output_path,
        series.len()
    );
    Ok(())
}
