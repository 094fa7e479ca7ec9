//! Scatter command - list the selected numeric column pairs.

use std::path::PathBuf;

use colored::Colorize;
use tablescope::ProfilerConfig;

use super::{fmt_num, CommandResult};

/// Points previewed per pair in text output.
const PREVIEW_POINTS: usize = 5;

pub fn run(file: PathBuf, json: bool, config: ProfilerConfig) -> CommandResult {
    let (scope, report) = super::load(&file, config)?;
    let insights = scope.insights(report.analysis);
    let pairs = insights.scatter_pairs();

    if json {
        println!("{}", serde_json::to_string_pretty(pairs)?);
        return Ok(());
    }

    if pairs.is_empty() {
        super::print_none("No numeric column pairs with shared values.");
        return Ok(());
    }

    for pair in pairs {
        println!(
            "{} {} {} ({} points)",
            pair.x.cyan().bold(),
            "vs".dimmed(),
            pair.y.cyan().bold(),
            pair.points.len()
        );
        for (x, y) in pair.points.iter().take(PREVIEW_POINTS) {
            println!("  ({}, {})", fmt_num(*x), fmt_num(*y));
        }
        if pair.points.len() > PREVIEW_POINTS {
            println!("  {}", format!("... {} more", pair.points.len() - PREVIEW_POINTS).dimmed());
        }
    }

    Ok(())
}
