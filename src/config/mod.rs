use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    /// Text-generation credentials; `None` means the recommendation chain
    /// runs on static templates only.
    pub genai: Option<GenAiConfig>,
}

const DEFAULT_GENAI_ENDPOINT: &str =
    "https://llm.api.cloud.yandex.net/foundationModels/v1/completion";
const DEFAULT_GENAI_MODEL_URI: &str = "gpt://foundation-models/yandexgpt-lite";
const DEFAULT_GENAI_TIMEOUT_MS: u64 = 10_000;

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let genai = match env::var("GENAI_API_KEY") {
            Ok(api_key) if !api_key.trim().is_empty() => {
                let endpoint = env::var("GENAI_ENDPOINT")
                    .unwrap_or_else(|_| DEFAULT_GENAI_ENDPOINT.to_string());
                let model_uri = env::var("GENAI_MODEL_URI")
                    .unwrap_or_else(|_| DEFAULT_GENAI_MODEL_URI.to_string());
                let timeout_ms = env::var("GENAI_TIMEOUT_MS")
                    .unwrap_or_else(|_| DEFAULT_GENAI_TIMEOUT_MS.to_string())
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidTimeout)?;

                Some(GenAiConfig {
                    endpoint,
                    api_key,
                    model_uri,
                    timeout: Duration::from_millis(timeout_ms),
                })
            }
            _ => None,
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            genai,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing and metrics controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Connection settings for the external text-generation service.
///
/// Read once at startup and injected into the gateway explicitly; nothing in
/// the workflow constructs clients from ambient globals.
#[derive(Debug, Clone)]
pub struct GenAiConfig {
    pub endpoint: String,
    pub api_key: String,
    pub model_uri: String,
    pub timeout: Duration,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidTimeout,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidTimeout => {
                write!(f, "GENAI_TIMEOUT_MS must be a valid millisecond count")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::InvalidTimeout => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}
