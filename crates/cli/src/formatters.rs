//! Output formatters for alert records.
//!
//! Provides pretty JSON (default), compact JSON and newline-delimited JSON.
//! Every format writes only the alert records; `meta` and `links` are not printed.

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde_json::Value;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Indented JSON array
    Pretty,
    /// Single-line JSON array
    Json,
    /// One JSON object per line
    Ndjson,
}

/// Formatter trait for different output types.
pub trait Formatter {
    /// Format the `data` records of an alerts response.
    fn format_alerts(&self, alerts: &[Value]) -> Result<String>;
}

/// Indented JSON formatter.
pub struct PrettyJsonFormatter;

impl Formatter for PrettyJsonFormatter {
    fn format_alerts(&self, alerts: &[Value]) -> Result<String> {
        serde_json::to_string_pretty(alerts).context("Failed to serialize alerts")
    }
}

/// Compact JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_alerts(&self, alerts: &[Value]) -> Result<String> {
        serde_json::to_string(alerts).context("Failed to serialize alerts")
    }
}

/// Newline-delimited JSON formatter.
pub struct NdjsonFormatter;

impl Formatter for NdjsonFormatter {
    fn format_alerts(&self, alerts: &[Value]) -> Result<String> {
        let lines = alerts
            .iter()
            .map(serde_json::to_string)
            .collect::<std::result::Result<Vec<_>, _>>()
            .context("Failed to serialize alerts")?;
        Ok(lines.join("\n"))
    }
}

/// Get a formatter for the specified output format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Pretty => Box::new(PrettyJsonFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Ndjson => Box::new(NdjsonFormatter),
    }
}
