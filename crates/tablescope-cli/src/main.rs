//! Tablescope CLI - automatic statistical profiling for tabular data.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = commands::load_config(cli.config.as_deref()).and_then(|config| match cli.command {
        Commands::Analyze { file, json, output } => {
            commands::analyze::run(file, json, output, config, cli.verbose)
        }

        Commands::Histogram {
            file,
            column,
            bins,
            json,
        } => commands::histogram::run(file, column, bins, json, config),

        Commands::Correlate {
            file,
            positional,
            json,
        } => commands::correlate::run(file, positional, json, config),

        Commands::Series { file, json } => commands::series::run(file, json, config),

        Commands::Scatter { file, json } => commands::scatter::run(file, json, config),
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` overrides the level chosen by `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
