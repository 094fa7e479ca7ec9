//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tablescope: automatic statistical profiling for tabular data
#[derive(Parser)]
#[command(name = "tablescope")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Profiler settings as a JSON file (missing keys use defaults)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Profile a data file and print per-column statistics
    Analyze {
        /// Path to the data file (CSV/TSV/JSON)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Also write the JSON report to this path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print a histogram of one column's numeric values
    Histogram {
        /// Path to the data file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Column to bin
        #[arg(short, long)]
        column: String,

        /// Number of buckets (default from config)
        #[arg(short, long)]
        bins: Option<usize>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the Pearson correlation matrix of the numeric columns
    Correlate {
        /// Path to the data file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Pair values by position after filtering each column (legacy behavior)
        #[arg(long)]
        positional: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the first numeric column over the first date column
    Series {
        /// Path to the data file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the selected scatter-plot column pairs
    Scatter {
        /// Path to the data file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
