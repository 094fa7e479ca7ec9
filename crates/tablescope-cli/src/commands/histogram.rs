//! Histogram command - bin one column's numeric values.

use std::path::PathBuf;

use colored::Colorize;
use tablescope::ProfilerConfig;

use super::CommandResult;

/// Widest bar drawn, in characters.
const BAR_WIDTH: usize = 40;

pub fn run(
    file: PathBuf,
    column: String,
    bins: Option<usize>,
    json: bool,
    config: ProfilerConfig,
) -> CommandResult {
    let bins = bins.unwrap_or(config.histogram_bins);
    let (scope, report) = super::load(&file, config)?;
    let insights = scope.insights(report.analysis);

    let buckets = insights
        .histogram_with_bins(&column, bins)
        .ok_or_else(|| format!("Unknown column: {}", column))?;

    if json {
        println!("{}", serde_json::to_string_pretty(buckets.as_slice())?);
        return Ok(());
    }

    println!("{} {}", "Histogram of".cyan().bold(), column.white());
    if buckets.is_empty() {
        super::print_none("No numeric values.");
        return Ok(());
    }

    let max = buckets.iter().map(|b| b.count).max().unwrap_or(0).max(1);
    let label_width = buckets.iter().map(|b| b.label.len()).max().unwrap_or(0);
    for bucket in buckets.iter() {
        let bar = "#".repeat(bucket.count * BAR_WIDTH / max);
        println!(
            "  {:>width$}  {:>6}  {}",
            bucket.label,
            bucket.count,
            bar.blue(),
            width = label_width
        );
    }

    Ok(())
}
