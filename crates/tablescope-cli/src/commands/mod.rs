//! CLI command implementations.

pub mod analyze;
pub mod correlate;
pub mod histogram;
pub mod scatter;
pub mod series;

use std::path::Path;

use colored::Colorize;
use tablescope::{FileReport, ProfilerConfig, Tablescope, TablescopeConfig, TablescopeError};

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Read profiler settings from a JSON file, or use defaults.
pub fn load_config(path: Option<&Path>) -> Result<ProfilerConfig, Box<dyn std::error::Error>> {
    let Some(path) = path else {
        return Ok(ProfilerConfig::default());
    };

    let contents = std::fs::read_to_string(path).map_err(|e| TablescopeError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let config: ProfilerConfig = serde_json::from_str(&contents)?;
    config.validate()?;
    tracing::debug!(?config, "loaded profiler config");
    Ok(config)
}

/// Decode and profile `file`, returning the instance used so callers can
/// build insights with the same thresholds.
pub fn load(
    file: &Path,
    config: ProfilerConfig,
) -> Result<(Tablescope, FileReport), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let scope = Tablescope::with_config(TablescopeConfig {
        profiler: config,
        ..Default::default()
    });
    let report = scope.analyze_file(file)?;
    Ok((scope, report))
}

/// Print a dimmed note when a derived view has nothing to show.
pub fn print_none(message: &str) {
    println!("{}", message.dimmed());
}

/// Format a number for terminal tables.
pub fn fmt_num(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{:.4}", n)
    }
}
