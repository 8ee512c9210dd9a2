//! Centralized server configuration.
//!
//! Loaded via the `config` crate from `PISTA_BRIDGE_*` environment variables.
//! Site address and reload settings come from Leptos' own configuration.

use serde::Deserialize;

/// Environment variable prefix for server settings.
const ENV_PREFIX: &str = "PISTA_BRIDGE";

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Directory with the compiled WASM bundle and stylesheet, served at `/pkg`.
    #[serde(default = "default_pkg_dir")]
    pub pkg_dir: String,

    /// Tracing filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_pkg_dir() -> String {
    "target/site/pkg".to_string()
}

fn default_log_filter() -> String {
    "info,tower_http=debug".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            pkg_dir: default_pkg_dir(),
            log_filter: default_log_filter(),
        }
    }
}

impl ServerConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but cannot be parsed.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_config_has_correct_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.pkg_dir, "target/site/pkg");
        assert_eq!(config.log_filter, "info,tower_http=debug");
    }

    #[test]
    fn empty_source_falls_back_to_defaults() {
        let config: ServerConfig = config::Config::builder()
            .build()
            .expect("build config")
            .try_deserialize()
            .expect("deserialize config");
        assert_eq!(config.pkg_dir, "target/site/pkg");
    }

    #[test]
    fn overrides_replace_defaults() {
        let config: ServerConfig = config::Config::builder()
            .set_override("pkg_dir", "dist/pkg")
            .expect("set override")
            .build()
            .expect("build config")
            .try_deserialize()
            .expect("deserialize config");
        assert_eq!(config.pkg_dir, "dist/pkg");
        assert_eq!(config.log_filter, "info,tower_http=debug");
    }
}
