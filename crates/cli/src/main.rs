//! Trellix CLI - Fetch EDR alerts from the Trellix API.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Acquire a token, fetch alerts via the shared client library and print the records.
//! - Map each failing step to its own exit code.
//!
//! Does NOT handle:
//! - HTTP request implementation (see `crates/client`).
//! - Environment parsing and validation (see `crates/config`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` values are visible to the loader.
//! - Only alert records go to stdout; logs and error messages go to stderr.

mod args;
mod error;
mod formatters;

use std::time::Duration;

use args::{Cli, LogFormat};
use clap::Parser;
use error::ExitCode;
use formatters::get_formatter;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use trellix_client::{MetricsCollector, MetricsExporter, TrellixClient};
use trellix_config::{Config, ConfigError, ConfigLoader};

#[tokio::main]
async fn main() {
    // Load .env file BEFORE CLI parsing so the environment loader can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    init_tracing(cli.log_format);

    // Initialize metrics exporter if --metrics-bind is provided
    let metrics_exporter = if let Some(ref bind_addr) = cli.metrics_bind {
        match MetricsExporter::install(bind_addr) {
            Ok(exporter) => Some(exporter),
            Err(e) => {
                eprintln!("Failed to start metrics exporter: {}", e);
                std::process::exit(ExitCode::GeneralError.as_i32());
            }
        }
    } else {
        None
    };

    let config = match build_config(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to build configuration: {:#}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    let mut builder = TrellixClient::builder().from_config(&config);
    if metrics_exporter.is_some() {
        builder = builder.metrics(MetricsCollector::new());
    }
    let client = match builder.build() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            std::process::exit(ExitCode::from(&e).as_i32());
        }
    };

    let exit_code = run(&client, &cli).await;
    std::process::exit(exit_code.as_i32());
}

/// Install the global subscriber. Logs always go to stderr.
fn init_tracing(format: LogFormat) {
    let registry = tracing_subscriber::registry().with(EnvFilter::from_default_env());
    match format {
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
    }
}

/// Environment first, then CLI flags override.
fn build_config(cli: &Cli) -> Result<Config, ConfigError> {
    let mut loader = ConfigLoader::new().from_env()?;

    if let Some(ref client_id) = cli.client_id {
        loader = loader.with_client_id(client_id.clone());
    }
    if let Some(ref secret) = cli.client_secret {
        loader = loader.with_client_secret(secret.clone());
    }
    if let Some(ref scope) = cli.scope {
        loader = loader.with_scope(scope.clone());
    }
    if let Some(ref api_key) = cli.api_key {
        loader = loader.with_api_key(api_key.clone());
    }
    if let Some(ref url) = cli.token_url {
        loader = loader.with_token_url(url.clone());
    }
    if let Some(ref url) = cli.alerts_url {
        loader = loader.with_alerts_url(url.clone());
    }
    if let Some(timeout_secs) = cli.timeout {
        loader = loader.with_timeout(Duration::from_secs(timeout_secs));
    }
    if cli.skip_verify {
        loader = loader.with_skip_verify(true);
    }

    loader.build()
}

/// Acquire a token, fetch alerts and print the `data` records.
async fn run(client: &TrellixClient, cli: &Cli) -> ExitCode {
    let token = match client.acquire_token().await {
        Ok(token) => token,
        Err(e) => {
            error!(status = ?e.status(), body = ?e.body(), error = %e, "Token request failed");
            eprintln!("Failed to obtain token: {}", e);
            return ExitCode::AuthenticationFailed;
        }
    };

    let query = cli.query();
    let alerts = match client.fetch_alerts(&token.access_token, Some(&query)).await {
        Ok(alerts) => alerts,
        Err(e) => {
            error!(status = ?e.status(), body = ?e.body(), error = %e, "Alerts request failed");
            eprintln!("Failed to fetch alerts: {}", e);
            return ExitCode::FetchFailed;
        }
    };

    match get_formatter(cli.output).format_alerts(&alerts.data) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
            ExitCode::Success
        }
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::GeneralError
        }
    }
}
