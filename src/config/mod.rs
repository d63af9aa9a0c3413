//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `SKYFORGE` prefix and nested values use double underscores as separators.
//! Every section has defaults, so an empty environment yields a usable config.
//!
//! # Example
//!
//! ```no_run
//! use skyforge::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod engine;
mod error;
mod server;
mod storage;

pub use engine::{EngineConfig, MoonEngineKind};
pub use error::{ConfigError, ValidationError};
pub use server::{LogFormat, ServerConfig};
pub use storage::StorageConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, logging, timeouts)
    #[serde(default)]
    pub server: ServerConfig,

    /// Where profiles and generated reports live
    #[serde(default)]
    pub storage: StorageConfig,

    /// Calculation engine selection
    #[serde(default)]
    pub engine: EngineConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `SKYFORGE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `SKYFORGE__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `SKYFORGE__ENGINE__MOON=ephemeris` -> `engine.moon = ephemeris`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types,
    /// including unknown engine names.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SKYFORGE")
                    .separator("__"),
            )
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
        self.storage.validate()?;
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

    fn clear_env() {
        env::remove_var("SKYFORGE__SERVER__PORT");
        env::remove_var("SKYFORGE__SERVER__LOG_FORMAT");
        env::remove_var("SKYFORGE__ENGINE__MOON");
        env::remove_var("SKYFORGE__STORAGE__PROFILES_DIR");
    }

    #[test]
    fn test_empty_environment_loads_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.engine.moon, MoonEngineKind::Simplified);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_engine_selection() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("SKYFORGE__ENGINE__MOON", "ephemeris");
        let result = AppConfig::load();
        clear_env();

        assert_eq!(result.unwrap().engine.moon, MoonEngineKind::Ephemeris);
    }

    #[test]
    fn test_unknown_engine_is_an_error() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("SKYFORGE__ENGINE__MOON", "astrolabe");
        let result = AppConfig::load();
        clear_env();

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn test_custom_port_and_profiles_dir() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("SKYFORGE__SERVER__PORT", "3000");
        env::set_var("SKYFORGE__STORAGE__PROFILES_DIR", "/tmp/skyforge-profiles");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(
            config.storage.profiles_dir,
            std::path::PathBuf::from("/tmp/skyforge-profiles")
        );
    }

    #[test]
    fn test_json_log_format() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("SKYFORGE__SERVER__LOG_FORMAT", "json");
        let result = AppConfig::load();
        clear_env();

        assert_eq!(result.unwrap().server.log_format, LogFormat::Json);
    }
}
