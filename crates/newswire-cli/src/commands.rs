//! Command execution.

use crate::cli::{BuildArgs, IndexArgs};
use crate::error::{CliError, Result};
use crate::output;
use newswire_domain::PricePoint;
use newswire_labeler::PriceLabelIndex;
use newswire_pipeline::{Pipeline, PipelineConfig, PlainTextSource};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Execute the build command: exports + prices in, JSONL dataset out.
pub async fn execute_build(args: BuildArgs) -> Result<()> {
    let config = load_config(args.config.as_deref(), args.window_days)?;
    let series = load_price_series(&args.prices)?;
    let paths = collect_exports(&args.input)?;

    if paths.is_empty() {
        return Err(CliError::InvalidInput(format!(
            "no .txt export files in {}",
            args.input.display()
        )));
    }

    let index = PriceLabelIndex::build(&series, config.labeler.window_days);
    if index.is_empty() {
        warn!(
            points = series.len(),
            window_days = config.labeler.window_days,
            "price series shorter than window + 1; every record will be pending"
        );
    }

    let pipeline = Pipeline::new(PlainTextSource, index, config);
    let result = pipeline.process_batch(&paths).await;

    for failure in &result.failures {
        warn!(
            document = %failure.document,
            snippet = %failure.snippet,
            "skipped: {}", failure.reason
        );
    }

    output::write_jsonl(&args.output, &result.records)?;
    info!(
        output = %args.output.display(),
        "{}", result.metadata.summary()
    );
    Ok(())
}

/// Execute the index command: report index coverage for a price series.
pub fn execute_index(args: IndexArgs) -> Result<()> {
    if args.window_days == 0 {
        return Err(CliError::InvalidInput(
            "window-days must be greater than 0".to_string(),
        ));
    }

    let series = load_price_series(&args.prices)?;
    let index = PriceLabelIndex::build(&series, args.window_days);

    println!("price points: {}", series.len());
    println!("labeled dates: {}", index.len());
    match index.date_range() {
        Some((first, last)) => println!("coverage: {} .. {}", first, last),
        None => println!("coverage: none (series shorter than window + 1)"),
    }
    Ok(())
}

/// Load pipeline configuration, then apply the window override.
fn load_config(path: Option<&Path>, window_days: Option<u32>) -> Result<PipelineConfig> {
    let mut config = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            PipelineConfig::from_toml(&text).map_err(CliError::Config)?
        }
        None => PipelineConfig::default(),
    };

    if let Some(window) = window_days {
        config.labeler.window_days = window;
    }

    config.validate().map_err(CliError::Config)?;
    Ok(config)
}

/// Load the daily price series JSON (an array of date/open/close objects).
fn load_price_series(path: &Path) -> Result<Vec<PricePoint>> {
    let text = std::fs::read_to_string(path)?;
    let series: Vec<PricePoint> = serde_json::from_str(&text)?;
    info!(points = series.len(), file = %path.display(), "loaded price series");
    Ok(series)
}

/// Collect export text files from a directory, non-recursive, in name order.
fn collect_exports(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|e| e == "txt") {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}
