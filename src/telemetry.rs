use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, AppEnvironment};

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("APP_LOG_LEVEL '{value}' is not a valid tracing directive")]
    Filter {
        value: String,
        #[source]
        source: ParseError,
    },
    #[error("could not install the tracing subscriber: {0}")]
    Install(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Install the global tracing subscriber for the assessment service.
///
/// `RUST_LOG` wins over `APP_LOG_LEVEL` so operators can raise verbosity
/// without redeploying. Development gets human-oriented output with targets;
/// every other environment logs compact lines without ANSI escapes so the
/// aggregator ingests them cleanly.
pub fn init(config: &AppConfig) -> Result<(), TelemetryError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => log_filter(&config.telemetry.log_level)?,
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match config.environment {
        AppEnvironment::Development => builder
            .pretty()
            .with_target(true)
            .try_init()
            .map_err(TelemetryError::Install),
        AppEnvironment::Test | AppEnvironment::Production => builder
            .compact()
            .with_target(false)
            .with_ansi(false)
            .try_init()
            .map_err(TelemetryError::Install),
    }
}

fn log_filter(level: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(level).map_err(|source| TelemetryError::Filter {
        value: level.to_string(),
        source,
    })
}
