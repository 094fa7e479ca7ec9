//! Analyze command - profile a data file.

use std::path::PathBuf;

use colored::Colorize;
use tablescope::{DataType, Order, ProfilerConfig};

use super::CommandResult;

pub fn run(
    file: PathBuf,
    json: bool,
    output: Option<PathBuf>,
    config: ProfilerConfig,
    verbose: bool,
) -> CommandResult {
    let (_, report) = super::load(&file, config)?;
    let analysis = &report.analysis;

    if let Some(ref path) = output {
        std::fs::write(path, serde_json::to_string_pretty(&report)?)?;
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} {} ({}, {} rows, {} columns)",
        "Analyzed".cyan().bold(),
        file.display().to_string().white(),
        report.source.format,
        analysis.total_rows(),
        analysis.total_columns()
    );

    if verbose {
        println!("{} {}", "Hash:".dimmed(), report.source.hash.dimmed());
    }

    println!();
    println!(
        "  {:24} {:8} {:>7} {:>9} {:10}",
        "column".bold(),
        "type".bold(),
        "nulls".bold(),
        "positive".bold(),
        "order".bold()
    );
    for col in analysis.column_stats() {
        let data_type = match col.data_type {
            DataType::Numeric => "numeric".green(),
            DataType::Text => "text".normal(),
            DataType::Mixed => "mixed".yellow(),
            DataType::Empty => "empty".red(),
        };
        let order = match col.order {
            Order::Ascending => "ascending",
            Order::Descending => "descending",
            Order::Unordered => "-",
        };
        let nulls = if col.null_count > 0 {
            col.null_count.to_string().yellow()
        } else {
            col.null_count.to_string().normal()
        };
        println!(
            "  {:24} {:8} {:>7} {:>9} {:10}",
            col.name, data_type, nulls, col.positive_count, order
        );
    }
    println!();

    let list = |names: &[String]| {
        if names.is_empty() {
            "none".dimmed().to_string()
        } else {
            names.join(", ")
        }
    };
    println!("Numeric columns: {}", list(analysis.numeric_columns()));
    println!("Date columns:    {}", list(analysis.date_columns()));
    println!(
        "Columns with nulls: {}   Positive values: {}   Ordered by first column: {}",
        analysis.columns_with_nulls().to_string().white().bold(),
        analysis.total_positive_values().to_string().white().bold(),
        if analysis.ordered_by_first_column() {
            "yes".green()
        } else {
            "no".normal()
        }
    );

    if let Some(path) = output {
        println!();
        println!(
            "{} {}",
            "Saved to".green().bold(),
            path.display().to_string().white()
        );
    }

    Ok(())
}
