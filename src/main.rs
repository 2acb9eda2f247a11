use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::{Context, Result};
use clap::Parser;

use support_floor::data::{load_series, validate_series};
use support_floor::{Cli, FitResult, SeriesSummary, fit_series};

fn main() -> Result<()> {
    // A. Init Logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);
    let config = args.fit_config()?;

    // C. Load and check the series before it reaches the core
    let series = load_series(&args.input)?;
    validate_series(&series).with_context(|| format!("Invalid series in {:?}", args.input))?;
    log::info!("Loaded {} points from {:?}", series.len(), args.input);

    if args.summary {
        match SeriesSummary::from_series(&series) {
            Some(summary) => println!("{}", summary),
            None => log::warn!("Series is empty, nothing to summarise"),
        }
    }

    // D. Fit
    let mut result = fit_series(&series, &config);
    match result.r2 {
        Some(r2) => log::info!("{} fitted, r2 = {:.4}", result.name, r2),
        None => log::info!("{} computed", result.name),
    }
    if args.display_only {
        result.curve = result.display_curve();
    }

    // E. Emit
    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create file: {}", path.display()))?;
            write_result(BufWriter::new(file), &result)?;
            log::info!("Fit written to {}", path.display());
        }
        None => write_result(std::io::stdout().lock(), &result)?,
    }
    Ok(())
}

fn write_result(mut writer: impl Write, result: &FitResult) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, result).context("Failed to serialize fit result")?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
