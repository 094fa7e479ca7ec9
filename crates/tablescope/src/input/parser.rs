//! Decoders that turn raw file bytes into a normalized [`Dataset`].
//!
//! Every decoder honors the same contract: blank cells become [`Value::Null`]
//! and each row maps column names to values in source order.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use sha2::{Digest, Sha256};
use indexmap::IndexSet;
use tracing::{debug, warn};

use super::source::SourceMetadata;
use super::value::{Dataset, Row, Value};
use crate::error::{Result, TablescopeError};
use crate::profile::discover_columns;

/// Delimiters to try when auto-detecting.
const DELIMITERS: &[u8] = &[b'\t', b',', b';', b'|'];

/// Turns raw bytes into rows.
pub trait Decoder {
    /// Decode a complete in-memory document.
    fn decode(&self, bytes: &[u8]) -> Result<Dataset>;
}

/// Decoder configuration.
#[derive(Debug, Clone)]
pub struct DecoderConfig {
    /// Delimiter to use (None = auto-detect).
    pub delimiter: Option<u8>,
    /// Whether the file has a header row.
    pub has_header: bool,
    /// Maximum rows to read (None = all).
    pub max_rows: Option<usize>,
    /// Quote character.
    pub quote: u8,
    /// Emit `Value::Number` for cells that parse as finite numbers.
    pub infer_numbers: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            delimiter: None,
            has_header: true,
            max_rows: None,
            quote: b'"',
            infer_numbers: true,
        }
    }
}

/// Decodes delimited text (CSV, TSV, semicolon and pipe separated).
#[derive(Debug, Clone, Default)]
pub struct DelimitedDecoder {
    config: DecoderConfig,
}

impl DelimitedDecoder {
    /// Create a decoder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a decoder with custom configuration.
    pub fn with_config(config: DecoderConfig) -> Self {
        Self { config }
    }

    /// The delimiter this decoder would use for `bytes`.
    pub fn resolve_delimiter(&self, bytes: &[u8]) -> Result<u8> {
        match self.config.delimiter {
            Some(d) => Ok(d),
            None => detect_delimiter(bytes),
        }
    }

    fn decode_with(&self, bytes: &[u8], delimiter: u8) -> Result<Dataset> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .quote(self.config.quote)
            .flexible(true)
            .from_reader(bytes);

        let mut records = reader.records();

        let headers: Vec<String> = if self.config.has_header {
            match records.next() {
                Some(record) => unique_headers(&record?),
                None => Vec::new(),
            }
        } else {
            Vec::new()
        };

        if self.config.has_header && headers.is_empty() {
            return Err(TablescopeError::EmptyData("No columns found".to_string()));
        }

        let mut rows = Dataset::new();
        for (row_idx, result) in records.enumerate() {
            if let Some(max) = self.config.max_rows {
                if row_idx >= max {
                    break;
                }
            }

            let record = result?;
            let row: Row = if self.config.has_header {
                // Extra fields beyond the header are dropped; missing
                // trailing fields are simply absent from the row.
                headers
                    .iter()
                    .zip(record.iter())
                    .map(|(h, raw)| (h.clone(), self.cell_value(raw)))
                    .collect()
            } else {
                record
                    .iter()
                    .enumerate()
                    .map(|(i, raw)| (format!("column_{}", i + 1), self.cell_value(raw)))
                    .collect()
            };

            rows.push(row);
        }

        Ok(rows)
    }

    fn cell_value(&self, raw: &str) -> Value {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Value::Null;
        }
        if self.config.infer_numbers {
            if let Ok(n) = trimmed.parse::<f64>() {
                if n.is_finite() {
                    return Value::Number(n);
                }
            }
        }
        Value::Text(raw.to_string())
    }
}

impl Decoder for DelimitedDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<Dataset> {
        let delimiter = self.resolve_delimiter(bytes)?;
        self.decode_with(bytes, delimiter)
    }
}

/// Decodes a JSON array of objects.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDecoder;

impl JsonDecoder {
    fn convert(value: serde_json::Value) -> Value {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Number(n) => n
                .as_f64()
                .filter(|f| f.is_finite())
                .map_or(Value::Null, Value::Number),
            serde_json::Value::String(s) if s.trim().is_empty() => Value::Null,
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Bool(b) => Value::Text(b.to_string()),
            other => Value::Text(other.to_string()),
        }
    }
}

impl Decoder for JsonDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<Dataset> {
        let document: serde_json::Value = serde_json::from_slice(bytes)?;
        let serde_json::Value::Array(items) = document else {
            return Err(TablescopeError::UnsupportedFormat(
                "JSON input must be an array of objects".to_string(),
            ));
        };

        items
            .into_iter()
            .enumerate()
            .map(|(i, item)| match item {
                serde_json::Value::Object(map) => Ok(map
                    .into_iter()
                    .map(|(k, v)| (k, Self::convert(v)))
                    .collect()),
                _ => Err(TablescopeError::UnsupportedFormat(format!(
                    "JSON element {} is not an object",
                    i
                ))),
            })
            .collect()
    }
}

/// Decode a file, choosing the decoder from its extension.
///
/// `.json` files go through [`JsonDecoder`]; anything else is treated as
/// delimited text.
pub fn decode_file(
    path: impl AsRef<Path>,
    config: &DecoderConfig,
) -> Result<(Dataset, SourceMetadata)> {
    let path = path.as_ref();

    let mut file = File::open(path).map_err(|e| TablescopeError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut contents = Vec::new();
    file.read_to_end(&mut contents)
        .map_err(|e| TablescopeError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

    let mut hasher = Sha256::new();
    hasher.update(&contents);
    let hash = format!("sha256:{:x}", hasher.finalize());

    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    let (rows, format) = if is_json {
        (JsonDecoder.decode(&contents)?, "json")
    } else {
        let decoder = DelimitedDecoder::with_config(config.clone());
        let delimiter = decoder.resolve_delimiter(&contents)?;
        let format = match delimiter {
            b'\t' => "tsv",
            b',' => "csv",
            b';' => "csv-semicolon",
            b'|' => "psv",
            _ => "delimited",
        };
        (decoder.decode_with(&contents, delimiter)?, format)
    };

    let column_count = discover_columns(&rows).len();
    debug!(
        path = %path.display(),
        format,
        rows = rows.len(),
        columns = column_count,
        "decoded source file"
    );

    let metadata = SourceMetadata::new(
        path.to_path_buf(),
        hash,
        contents.len() as u64,
        format,
        rows.len(),
        column_count,
    );

    Ok((rows, metadata))
}

/// Header names with repeats suffixed `_2`, `_3`, ... so no column is lost.
/// A suffix never reuses a name that appears literally in the header.
fn unique_headers(record: &csv::StringRecord) -> Vec<String> {
    let reserved: IndexSet<&str> = record.iter().collect();
    let mut seen: IndexSet<String> = IndexSet::with_capacity(record.len());

    for name in record.iter() {
        if seen.insert(name.to_string()) {
            continue;
        }
        let renamed = (2..)
            .map(|n| format!("{}_{}", name, n))
            .find(|candidate| !seen.contains(candidate) && !reserved.contains(candidate.as_str()))
            .unwrap_or_else(|| name.to_string());
        warn!(header = name, renamed = %renamed, "renamed duplicate column header");
        seen.insert(renamed);
    }
    seen.into_iter().collect()
}

/// Detect the delimiter by analyzing the first few lines.
fn detect_delimiter(bytes: &[u8]) -> Result<u8> {
    let reader = BufReader::new(bytes);
    let lines: Vec<String> = reader
        .lines()
        .take(10)
        .map_while(|l| l.ok())
        .filter(|l| !l.trim().is_empty())
        .collect();

    if lines.is_empty() {
        return Err(TablescopeError::EmptyData("No lines to analyze".to_string()));
    }

    let mut best_delimiter = b',';
    let mut best_score = 0;

    for &delim in DELIMITERS {
        let counts: Vec<usize> = lines
            .iter()
            .map(|line| count_delimiter_in_line(line, delim))
            .collect();

        let first_count = counts[0];
        if first_count == 0 {
            continue;
        }

        let consistent = counts.iter().all(|&c| c == first_count);
        let variance: f64 = if counts.len() > 1 {
            let mean = counts.iter().sum::<usize>() as f64 / counts.len() as f64;
            counts.iter().map(|&c| (c as f64 - mean).powi(2)).sum::<f64>() / counts.len() as f64
        } else {
            0.0
        };

        // Higher count with lower variance wins; tab gets a small bonus
        // since it rarely appears inside values.
        let score = if consistent {
            first_count * 1000 + (if delim == b'\t' { 100 } else { 0 })
        } else if variance < 1.0 {
            first_count * 100
        } else {
            first_count
        };

        if score > best_score {
            best_score = score;
            best_delimiter = delim;
        }
    }

    Ok(best_delimiter)
}

/// Count delimiter occurrences in a line, respecting quotes.
fn count_delimiter_in_line(line: &str, delimiter: u8) -> usize {
    let delim_char = delimiter as char;
    let mut count = 0;
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            c if c == delim_char && !in_quotes => count += 1,
            _ => {}
        }
    }

    count
}
