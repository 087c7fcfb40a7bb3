use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::Level;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Deployment environment. Anything other than `production`
/// (case-insensitive) behaves as development.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn is_production(self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// Holds all configuration loaded from the environment at startup.
///
/// Constructed once, then read-only. An empty API key is permitted here and
/// only surfaces as a failure when a token is actually requested.
#[derive(Clone, Debug)]
pub struct Settings {
    pub openai_api_key: String,
    pub openai_org_id: Option<String>,
    pub allowed_origins: String,
    pub environment: Environment,
    pub bind_address: SocketAddr,
    pub static_dir: PathBuf,
    pub log_level: Level,
}

impl Settings {
    /// Loads configuration from environment variables. Every variable has a
    /// default; only `BIND_ADDRESS` and `RUST_LOG` can fail to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Only load from .env in non-test mode to avoid contamination
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }

        let openai_api_key = std::env::var("OPENAI_API_KEY").unwrap_or_default();

        let openai_org_id = std::env::var("OPENAI_ORG_ID")
            .ok()
            .filter(|s| !s.is_empty());

        let allowed_origins = std::env::var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173,http://127.0.0.1:5173".to_string());

        let environment_str =
            std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
        let environment = match environment_str.to_lowercase().as_str() {
            "production" => Environment::Production,
            _ => Environment::Development,
        };

        let bind_address_str =
            std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
        let bind_address = bind_address_str
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidValue("BIND_ADDRESS".to_string(), e.to_string()))?;

        let static_dir = std::env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("static"));

        let log_level_str = std::env::var("RUST_LOG").unwrap_or_else(|_| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        Ok(Self {
            openai_api_key,
            openai_org_id,
            allowed_origins,
            environment,
            bind_address,
            static_dir,
            log_level,
        })
    }

    /// Whether a non-empty API key was provided.
    pub fn api_key_configured(&self) -> bool {
        !self.openai_api_key.is_empty()
    }

    /// Splits the comma-separated origin list, trimming whitespace and
    /// dropping blank entries while preserving order.
    pub fn allowed_origins_list(&self) -> Vec<String> {
        self.allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    }
}
