use std::env;
use std::fmt;

/// Distinguishes runtime behavior for different stages of the client.
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

/// Top-level configuration for the dashboard client.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub tracker: TrackerConfig,
    pub auth: AuthConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let api_base = env::var("TRACKER_API_BASE")
            .unwrap_or_else(|_| "http://127.0.0.1:5050".to_string());
        if api_base.trim().is_empty() {
            return Err(ConfigError::EmptyApiBase);
        }

        let exchange_url = env::var("AUTH_EXCHANGE_URL")
            .ok()
            .filter(|value| !value.trim().is_empty());

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            tracker: TrackerConfig { api_base },
            auth: AuthConfig { exchange_url },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Location of the remote classification service.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    pub api_base: String,
}

/// Identity-exchange endpoint; absent means the offline exchange is used.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub exchange_url: Option<String>,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    EmptyApiBase,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyApiBase => {
                write!(f, "TRACKER_API_BASE must not be empty when set")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
