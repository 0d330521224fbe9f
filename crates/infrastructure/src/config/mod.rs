//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `data`: historical data source

mod data;
mod server;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use data::DataConfig;
pub use server::ServerConfig;

/// Prefix for environment variable overrides, e.g. `WEATHERCAST_SERVER__PORT`
pub const ENV_PREFIX: &str = "WEATHERCAST";

/// Environment variable source: `WEATHERCAST_` prefix, `__` between levels
fn env_source() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

/// Application environment (development or production)
///
/// Controls CORS strictness and default behaviors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment
    #[default]
    Development,
    /// Production environment
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(format!(
                "Invalid environment: {s}. Use 'development' or 'production'"
            )),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment (development or production)
    #[serde(default)]
    pub environment: Option<Environment>,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Historical data configuration
    #[serde(default)]
    pub data: DataConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional file
    ///
    /// Environment variables use `__` between section and key, e.g.
    /// `WEATHERCAST_SERVER__PORT` or `WEATHERCAST_SERVER__LOG_FORMAT`.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_with_env(env_source())
    }

    fn load_with_env(env: config::Environment) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            .add_source(env)
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a TOML string; missing keys take their defaults
    pub fn from_toml_str(toml: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    /// Environment, defaulting to development when unset
    #[must_use]
    pub fn effective_environment(&self) -> Environment {
        self.environment.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn environment_default_is_development() {
        let env = Environment::default();
        assert_eq!(env, Environment::Development);
    }

    #[test]
    fn environment_display() {
        assert_eq!(format!("{}", Environment::Development), "development");
        assert_eq!(format!("{}", Environment::Production), "production");
    }

    #[test]
    fn environment_from_str() {
        assert_eq!(
            "prod".parse::<Environment>().unwrap(),
            Environment::Production
        );
        assert_eq!(
            "DEVELOPMENT".parse::<Environment>().unwrap(),
            Environment::Development
        );
        assert!("staging".parse::<Environment>().is_err());
    }

    #[test]
    fn server_config_default() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 5000);
        assert!(config.cors_enabled);
        assert_eq!(config.log_format, "text");
        assert_eq!(config.shutdown_timeout().as_secs(), 30);
        assert_eq!(config.bind_address(), "127.0.0.1:5000");
    }

    #[test]
    fn empty_toml_uses_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.data.path, PathBuf::from("data/weather.csv"));
        assert_eq!(config.effective_environment(), Environment::Development);
    }

    #[test]
    fn toml_overrides_sections() {
        let config = AppConfig::from_toml_str(
            r#"
            environment = "production"

            [server]
            port = 8080
            log_format = "json"
            allowed_origins = ["https://example.org"]

            [data]
            path = "/srv/weather/daily.csv"
            "#,
        )
        .unwrap();

        assert_eq!(config.effective_environment(), Environment::Production);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.log_format, "json");
        assert_eq!(config.server.allowed_origins, vec!["https://example.org"]);
        assert_eq!(config.data.path, PathBuf::from("/srv/weather/daily.csv"));
    }

    #[test]
    fn fallback_defaults_match_loaded_defaults() {
        let fallback = AppConfig::default();
        let loaded = AppConfig::from_toml_str("").unwrap();
        let partial = AppConfig::from_toml_str("[server]\nport = 5000").unwrap();

        assert_eq!(fallback.server.bind_address(), loaded.server.bind_address());
        assert_eq!(fallback.server.bind_address(), partial.server.bind_address());
        assert_eq!(fallback.data.path, loaded.data.path);
        assert_eq!(
            fallback.server.shutdown_timeout(),
            loaded.server.shutdown_timeout()
        );
    }

    fn load_from_vars(vars: &[(&str, &str)]) -> AppConfig {
        let map: config::Map<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        AppConfig::load_with_env(env_source().source(Some(map))).unwrap()
    }

    #[test]
    fn env_reaches_multi_word_keys() {
        let config = load_from_vars(&[
            ("WEATHERCAST_ENVIRONMENT", "production"),
            ("WEATHERCAST_SERVER__PORT", "8081"),
            ("WEATHERCAST_SERVER__LOG_FORMAT", "json"),
            ("WEATHERCAST_SERVER__CORS_ENABLED", "false"),
            ("WEATHERCAST_SERVER__SHUTDOWN_TIMEOUT_SECS", "3"),
            ("WEATHERCAST_DATA__PATH", "/srv/weather/daily.csv"),
        ]);

        assert_eq!(config.effective_environment(), Environment::Production);
        assert_eq!(config.server.port, 8081);
        assert_eq!(config.server.log_format, "json");
        assert!(!config.server.cors_enabled);
        assert_eq!(config.server.shutdown_timeout().as_secs(), 3);
        assert_eq!(config.data.path, PathBuf::from("/srv/weather/daily.csv"));
    }

    #[test]
    fn env_ignores_other_prefixes() {
        let config = load_from_vars(&[("OTHER_SERVER__PORT", "9999")]);
        assert_eq!(config.server.port, 5000);
    }

    #[test]
    fn invalid_port_is_rejected() {
        assert!(AppConfig::from_toml_str("[server]\nport = \"not-a-port\"").is_err());
    }
}
