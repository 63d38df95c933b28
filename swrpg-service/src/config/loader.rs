//! Configuration loading from files and environment variables.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};

use crate::error::{ServiceError, ServiceResult};

use super::static_config::StaticConfig;

/// Environment variables use `SWRPG__SECTION__KEY`
const ENV_PREFIX: &str = "SWRPG";

/// Load configuration from `config.*` (if present) and the environment
pub fn load_config() -> ServiceResult<StaticConfig> {
    load_from(Config::builder().add_source(File::with_name("config").required(false)))
}

fn load_from(builder: ConfigBuilder<DefaultState>) -> ServiceResult<StaticConfig> {
    builder
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .map_err(|e| ServiceError::Config {
            message: format!("Failed to build config: {}", e),
        })?
        .try_deserialize()
        .map_err(|e| ServiceError::Config {
            message: format!("Failed to deserialize config: {}", e),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;
    use std::time::Duration;

    fn from_toml(toml: &str) -> ServiceResult<StaticConfig> {
        load_from(Config::builder().add_source(File::from_str(toml, FileFormat::Toml)))
    }

    #[test]
    fn test_defaults_apply() {
        let config = from_toml("").unwrap();
        assert_eq!(config.server.bind_address(), "0.0.0.0:8080");
        assert_eq!(config.sessions.idle_timeout(), Duration::from_secs(21600));
        assert_eq!(config.sessions.cleanup_interval(), Duration::from_secs(300));
    }

    #[test]
    fn test_partial_overrides() {
        let config = from_toml(
            "[server]\nport = 9000\n\n[sessions]\ncleanup_interval_secs = 0\n",
        )
        .unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.sessions.cleanup_interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_bad_value_is_config_error() {
        let err = from_toml("[server]\nport = \"not a port\"\n").unwrap_err();
        assert!(matches!(err, ServiceError::Config { .. }));
    }
}
