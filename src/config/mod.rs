//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `KAYA` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use kaya_concierge::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod ai;
mod concierge;
mod database;
mod error;
mod server;

pub use ai::{AiConfig, AiProvider};
pub use concierge::ConciergeConfig;
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a working
/// development setup (local SQLite file, local Ollama).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration (SQLite lead store)
    #[serde(default)]
    pub database: DatabaseConfig,

    /// AI provider configuration (area name normalization)
    #[serde(default)]
    pub ai: AiConfig,

    /// Branding
    #[serde(default)]
    pub concierge: ConciergeConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `KAYA` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `KAYA__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `KAYA__DATABASE__URL=...` -> `database.url = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::Environment::default().prefix("KAYA").separator("__"))
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.ai.validate()?;
        self.concierge.validate()?;
        if self.server.request_timeout_secs <= self.ai.timeout_secs {
            return Err(ValidationError::RequestTimeoutNotAboveAiTimeout);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 7] = [
        "KAYA__DATABASE__URL",
        "KAYA__SERVER__PORT",
        "KAYA__SERVER__ENVIRONMENT",
        "KAYA__AI__PROVIDER",
        "KAYA__AI__TIMEOUT_SECS",
        "KAYA__AI__API_KEY",
        "KAYA__CONCIERGE__BRAND_NAME",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.database.url, "sqlite://kaya_leads.db");
        assert_eq!(config.ai.provider, AiProvider::Ollama);
        assert_eq!(config.concierge.brand_name, "KAYA");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("KAYA__DATABASE__URL", "sqlite://test.db");
        env::set_var("KAYA__SERVER__PORT", "3000");
        env::set_var("KAYA__AI__PROVIDER", "openai");
        env::set_var("KAYA__AI__API_KEY", "sk-test");
        env::set_var("KAYA__AI__TIMEOUT_SECS", "5");
        env::set_var("KAYA__CONCIERGE__BRAND_NAME", "Acme");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.database.url, "sqlite://test.db");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.ai.provider, AiProvider::OpenAI);
        assert_eq!(config.ai.timeout_secs, 5);
        assert_eq!(config.concierge.brand_name, "Acme");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("KAYA__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        assert!(result.unwrap().server.is_production());
    }

    #[test]
    fn test_validate_reports_first_invalid_section() {
        let config = AppConfig {
            database: DatabaseConfig {
                url: "mysql://db".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidDatabaseUrl));
    }

    #[test]
    fn test_request_timeout_must_outlast_ai_timeout() {
        let mut config = AppConfig::default();
        config.server.request_timeout_secs = 5;
        config.ai.timeout_secs = 60;
        assert_eq!(
            config.validate(),
            Err(ValidationError::RequestTimeoutNotAboveAiTimeout)
        );

        config.server.request_timeout_secs = 60;
        assert_eq!(
            config.validate(),
            Err(ValidationError::RequestTimeoutNotAboveAiTimeout)
        );

        config.server.request_timeout_secs = 61;
        assert!(config.validate().is_ok());
    }
}
