//! Series command - first numeric column over the first date column.

use std::path::PathBuf;

use colored::Colorize;
use tablescope::ProfilerConfig;

use super::{fmt_num, CommandResult};

pub fn run(file: PathBuf, json: bool, config: ProfilerConfig) -> CommandResult {
    let (scope, report) = super::load(&file, config)?;
    let insights = scope.insights(report.analysis);

    let Some(series) = insights.time_series() else {
        if json {
            println!("null");
        } else {
            super::print_none("No date column paired with a numeric column.");
        }
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(series)?);
        return Ok(());
    }

    println!(
        "{} {} {} {}",
        "Series".cyan().bold(),
        series.value_column.white(),
        "by".dimmed(),
        series.date_column.white()
    );
    for point in &series.points {
        println!("  {:19}  {}", point.label, fmt_num(point.value));
    }

    Ok(())
}
