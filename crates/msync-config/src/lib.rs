//! # msync-config
//!
//! Layered configuration loading for modelsync using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`MSYNC_*` prefix, `__` as separator)
//! 2. Project-level `.msync/config.toml`
//! 3. User-level `~/.config/msync/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `MSYNC_LOCAL__BASE_URL` -> `local.base_url`,
//! `MSYNC_HTTP__TIMEOUT_SECS` -> `http.timeout_secs`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use msync_config::MsyncConfig;
//!
//! let config = MsyncConfig::load_with_dotenv().expect("config");
//! println!("local server: {}", config.local.base_url);
//! ```

mod error;
mod http;
mod local;
mod registry;

pub use error::ConfigError;
pub use http::HttpConfig;
pub use local::LocalConfig;
pub use registry::RegistryConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MsyncConfig {
    #[serde(default)]
    pub local: LocalConfig,
    #[serde(default)]
    pub registry: RegistryConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

impl MsyncConfig {
    /// Load configuration from all sources (TOML files + environment variables)
    /// and validate it.
    ///
    /// Does NOT call `dotenvy`; use [`MsyncConfig::load_with_dotenv`] for
    /// `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or a value is
    /// invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support from the current directory.
    ///
    /// # Errors
    ///
    /// Same as [`MsyncConfig::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests and the CLI can add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".msync/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("MSYNC_").split("__"))
    }

    /// Reject values that would only fail later as confusing HTTP errors.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_url("local.base_url", &self.local.base_url)?;
        check_url("registry.base_url", &self.registry.base_url)?;

        let namespace = self.registry.namespace.trim();
        if namespace.is_empty() {
            return Err(ConfigError::invalid("registry.namespace", "must not be empty"));
        }
        if namespace.contains(['/', ':']) {
            return Err(ConfigError::invalid(
                "registry.namespace",
                "must be a single path segment",
            ));
        }

        if self.http.timeout_secs == 0 {
            return Err(ConfigError::invalid("http.timeout_secs", "must be positive"));
        }
        if self.http.connect_timeout_secs == 0 {
            return Err(ConfigError::invalid(
                "http.connect_timeout_secs",
                "must be positive",
            ));
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("msync").join("config.toml"))
    }
}

fn check_url(field: &str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::invalid(field, "must not be empty"));
    }
    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return Err(ConfigError::invalid(
            field,
            format!("'{value}' must start with http:// or https://"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = MsyncConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.local.base_url, "http://localhost:11434");
        assert_eq!(config.registry.base_url, "https://ollama.ai");
        assert_eq!(config.http.timeout_secs, 30);
    }

    #[test]
    fn figment_builds_without_files() {
        let figment = MsyncConfig::figment();
        let config: MsyncConfig = figment.extract().expect("should extract defaults");
        assert_eq!(config.registry.namespace, "library");
    }

    #[test]
    fn rejects_non_http_url() {
        let mut config = MsyncConfig::default();
        config.registry.base_url = "ftp://registry".into();
        let err = config.validate().unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "registry.base_url")
        );
    }

    #[test]
    fn rejects_empty_namespace() {
        let mut config = MsyncConfig::default();
        config.registry.namespace = "  ".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_nested_namespace() {
        let mut config = MsyncConfig::default();
        config.registry.namespace = "a/b".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_zero_timeout() {
        let mut config = MsyncConfig::default();
        config.http.timeout_secs = 0;
        assert!(config.validate().is_err());
    }
}
