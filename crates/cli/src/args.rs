//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse `--param key=value` query parameters.
//!
//! Non-responsibilities:
//! - Does not read environment variables (see `trellix_config::ConfigLoader`).
//! - Does not execute requests (see `main`).

use clap::{Parser, ValueEnum};
use trellix_client::AlertQuery;

use crate::formatters::OutputFormat;

#[derive(Parser)]
#[command(name = "trellix-cli")]
#[command(about = "Trellix CLI - Fetch EDR alerts from the Trellix API", long_about = None)]
#[command(version)]
#[command(
    after_help = "Environment:\n  client_id, secret, scope    OAuth2 client credentials\n  trellix_api                 API key sent as x-api-key\n  TRELLIX_TOKEN_URL, TRELLIX_ALERTS_URL, TRELLIX_TIMEOUT, TRELLIX_SKIP_VERIFY\n\nExamples:\n  trellix-cli\n  trellix-cli --param 'page[limit]=10' --param sort=-firstDetected\n  trellix-cli --output ndjson | jq .id\n"
)]
pub struct Cli {
    /// OAuth2 client id (overrides `client_id`)
    #[arg(long)]
    pub client_id: Option<String>,

    /// OAuth2 client secret (overrides `secret`)
    #[arg(long)]
    pub client_secret: Option<String>,

    /// Space separated OAuth2 scopes (overrides `scope`)
    #[arg(long)]
    pub scope: Option<String>,

    /// API key sent as `x-api-key` (overrides `trellix_api`)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Token endpoint URL (overrides TRELLIX_TOKEN_URL)
    #[arg(long, value_name = "URL")]
    pub token_url: Option<String>,

    /// Alerts endpoint URL (overrides TRELLIX_ALERTS_URL)
    #[arg(long, value_name = "URL")]
    pub alerts_url: Option<String>,

    /// Request timeout in seconds (overrides TRELLIX_TIMEOUT)
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Skip TLS certificate verification
    #[arg(long)]
    pub skip_verify: bool,

    /// Query parameter for the alerts request, repeatable (e.g. `page[limit]=10`)
    #[arg(short, long = "param", value_name = "KEY=VALUE", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,

    /// Output format for the alert records
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
    pub output: OutputFormat,

    /// Log line format on stderr
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Serve Prometheus metrics on this address (e.g. 127.0.0.1:9000)
    #[arg(long, value_name = "ADDR")]
    pub metrics_bind: Option<String>,
}

impl Cli {
    /// Query parameters in the order they were given.
    pub fn query(&self) -> AlertQuery {
        self.params.iter().cloned().collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

/// Parse a `key=value` pair. Only the first `=` separates; the value may be empty.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid KEY=VALUE: no `=` found in `{s}`"))?;
    if key.trim().is_empty() {
        return Err(format!("invalid KEY=VALUE: empty key in `{s}`"));
    }
    Ok((key.to_string(), value.to_string()))
}
