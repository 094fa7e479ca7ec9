//! Example: Profile a tabular data file with Tablescope.
//!
//! Usage:
//!   cargo run --example analyze -- <file_path>

use std::env;
use std::path::Path;

use tablescope::Tablescope;

fn main() -> tablescope::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example analyze -- <file_path>");
        std::process::exit(1);
    }

    let path = Path::new(&args[1]);
    if !path.exists() {
        eprintln!("Error: File not found: {}", path.display());
        std::process::exit(1);
    }

    let scope = Tablescope::new();
    let report = scope.analyze_file(path)?;
    let analysis = &report.analysis;

    println!("=== {} ===", report.source.file);
    println!(
        "{} rows, {} columns ({})",
        analysis.total_rows(),
        analysis.total_columns(),
        report.source.format
    );
    println!();

    for col in analysis.column_stats() {
        println!(
            "{:20} {:?}  nulls={} positive={} order={:?}",
            col.name, col.data_type, col.null_count, col.positive_count, col.order
        );
    }

    let insights = scope.insights(report.analysis.clone());
    println!();
    println!("Numeric columns: {:?}", analysis.numeric_columns());
    println!("Date columns:    {:?}", analysis.date_columns());

    let matrix = insights.correlation_matrix();
    for (name, row) in matrix.columns.iter().zip(&matrix.values) {
        let cells: Vec<String> = row.iter().map(|r| format!("{:6.3}", r)).collect();
        println!("{:20} {}", name, cells.join(" "));
    }

    if let Some(series) = insights.time_series() {
        println!();
        println!(
            "Time series: {} by {} ({} points)",
            series.value_column,
            series.date_column,
            series.points.len()
        );
    }

    Ok(())
}
