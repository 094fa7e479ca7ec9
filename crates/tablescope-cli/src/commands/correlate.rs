//! Correlate command - Pearson matrix of numeric columns.

use std::path::PathBuf;

use colored::Colorize;
use tablescope::{CorrelationAlignment, ProfilerConfig};

use super::CommandResult;

pub fn run(file: PathBuf, positional: bool, json: bool, mut config: ProfilerConfig) -> CommandResult {
    if positional {
        config.correlation_alignment = CorrelationAlignment::Positional;
    }

    let (scope, report) = super::load(&file, config)?;
    let insights = scope.insights(report.analysis);
    let matrix = insights.correlation_matrix();

    if json {
        println!("{}", serde_json::to_string_pretty(matrix)?);
        return Ok(());
    }

    if matrix.is_empty() {
        super::print_none("No numeric columns to correlate.");
        return Ok(());
    }

    let width = matrix.columns.iter().map(|c| c.len()).max().unwrap_or(0).max(7);
    print!("  {:width$}", "", width = width);
    for name in &matrix.columns {
        print!(" {:>width$}", name.bold(), width = width);
    }
    println!();

    for (name, row) in matrix.columns.iter().zip(&matrix.values) {
        print!("  {:width$}", name.bold(), width = width);
        for r in row {
            let cell = format!("{:.3}", r);
            let cell = if r.abs() >= 0.7 {
                cell.green()
            } else if r.abs() >= 0.3 {
                cell.yellow()
            } else {
                cell.normal()
            };
            print!(" {:>width$}", cell, width = width);
        }
        println!();
    }

    Ok(())
}
