//! Batch command: load a document, aggregate, report.

use std::fmt::Write as _;
use std::path::PathBuf;

use clap::Args;
use tracing::{debug, info, warn};

use life_engine::{BatchAggregator, BatchMetric, BatchResult};

use super::{finish, UpdateOverrides};
use crate::document::BatchDocument;
use crate::error::{CliError, CliResult};

/// Arguments for the batch command.
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Batch document to process
    #[arg(long, short)]
    pub input: PathBuf,

    /// Print the full result as JSON
    #[arg(long)]
    pub json: bool,

    /// Process entities in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Metric to aggregate (projection_strength, coherence, trait:NAME, growth:NAME)
    #[arg(long)]
    pub metric: Option<BatchMetric>,

    /// Significance threshold; repeat for several. Replaces the document's thresholds.
    #[arg(long = "threshold", allow_negative_numbers = true)]
    pub thresholds: Vec<f64>,

    #[command(flatten)]
    pub overrides: UpdateOverrides,
}

pub fn handle_batch(args: BatchArgs) -> i32 {
    finish("batch", run(args))
}

fn run(args: BatchArgs) -> CliResult<()> {
    let document = BatchDocument::load(&args.input)?;
    let mut config = document.config;
    if !args.overrides.is_empty() {
        debug!(overrides = ?args.overrides, "applying update overrides");
        args.overrides.apply(&mut config.update);
    }
    if let Some(metric) = args.metric {
        config.batch.metric = metric;
    }
    if !args.thresholds.is_empty() {
        config.batch.significance_thresholds = args.thresholds;
    }
    if args.parallel {
        config.batch.parallel = true;
    }

    let aggregator = BatchAggregator::try_new(config)?;
    let result = aggregator.process_batch(&document.entities);
    info!(
        total = result.total,
        succeeded = result.count,
        duration_us = result.duration_us,
        "batch complete"
    );
    if result.failure_count() > 0 {
        warn!(failed = result.failure_count(), "some entities failed");
    }

    if args.json {
        let json = serde_json::to_string_pretty(&result)
            .map_err(|e| CliError::json("batch result", e))?;
        println!("{}", json);
    } else {
        print!("{}", render_report(&result));
    }
    Ok(())
}

fn fmt_stat(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.4}", v),
        None => "undefined".to_string(),
    }
}

/// Human-readable summary of a batch result.
pub fn render_report(result: &BatchResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Metric:     {}", result.metric);
    let _ = writeln!(
        out,
        "Entities:   {} total, {} succeeded, {} failed",
        result.total,
        result.count,
        result.failure_count()
    );
    let _ = writeln!(out, "Mean:       {}", fmt_stat(result.mean()));
    let _ = writeln!(out, "Std dev:    {}", fmt_stat(result.std_dev()));
    if let Some(summary) = result.summary {
        let _ = writeln!(out, "Std error:  {:.4}", summary.std_error);
        let _ = writeln!(out, "Range:      [{:.4}, {:.4}]", summary.min, summary.max);
    }
    for sig in &result.significance {
        let _ = writeln!(out, "Above {:<6} {}", sig.threshold, sig.count);
    }
    let _ = writeln!(out, "Duration:   {} us", result.duration_us);

    let failures: Vec<_> = result.failures().collect();
    if !failures.is_empty() {
        let _ = writeln!(out, "Failures:");
        for failure in failures {
            let _ = writeln!(
                out,
                "  [{}] {}: {}",
                failure.index, failure.entity_id, failure.message
            );
        }
    }
    out
}
