//! # eventscope Configuration
//!
//! Layered configuration for the eventscope tools.
//!
//! ## Features
//! - **Layering**: defaults, YAML files, then `EVENTSCOPE_*` environment variables
//! - **Validation**: every section is checked with `validator` after extraction

#![warn(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

mod error;
mod feed;
mod query;
mod render;
mod telemetry;
mod validation;

pub use error::ConfigError;
pub use feed::FeedConfig;
pub use query::QueryConfig;
pub use render::RenderConfig;
pub use telemetry::TelemetryConfig;

const BASE_FILE: &str = "config/eventscope.yaml";
const ENV_PREFIX: &str = "EVENTSCOPE_";

/// Top‑level configuration container.
#[derive(Debug, Serialize, Deserialize, Validate, Default, Clone)]
pub struct EventscopeConfig {
    /// Where events are loaded from.
    #[validate(nested)]
    #[serde(default)]
    pub feed: FeedConfig,

    /// Query defaults.
    #[validate(nested)]
    #[serde(default)]
    pub query: QueryConfig,

    /// Text listing settings.
    #[validate(nested)]
    #[serde(default)]
    pub render: RenderConfig,

    /// Logging settings.
    #[validate(nested)]
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl EventscopeConfig {
    /// Load configuration from default files and environment.
    ///
    /// Hierarchy:
    /// 1. Default values
    /// 2. `config/eventscope.yaml`, if present
    /// 3. `config/<EVENTSCOPE_ENV>.yaml` (default env `development`), if present
    /// 4. `EVENTSCOPE_*` environment variables, `__` separating nested keys
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(EventscopeConfig::default()));

        if Path::new(BASE_FILE).exists() {
            figment = figment.merge(Yaml::file(BASE_FILE));
        } else {
            tracing::debug!("{} not found, using default configuration", BASE_FILE);
        }

        let env = std::env::var("EVENTSCOPE_ENV").unwrap_or_else(|_| "development".into());
        let env_file = format!("config/{}.yaml", env);
        if Path::new(&env_file).exists() {
            figment = figment.merge(Yaml::file(env_file));
        }

        Self::finish(figment)
    }

    /// Load configuration from a specific YAML file, then apply environment overrides.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(PathBuf::from(path)));
        }

        let figment = Figment::from(Serialized::defaults(EventscopeConfig::default()))
            .merge(Yaml::file(path));
        Self::finish(figment)
    }

    fn finish(figment: Figment) -> Result<Self, ConfigError> {
        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(ConfigError::from)
            .and_then(|config: Self| {
                config.validate()?;
                Ok(config)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn full_config_validation() {
        let config = EventscopeConfig::default();
        config.validate().expect("Default config should validate");
        assert_eq!(config.render.separator_width, 40);
        assert_eq!(config.query.default_order, "ascending");
        assert!(config.feed.path.is_none());
    }

    #[test]
    fn environment_override() {
        Jail::expect_with(|jail| {
            jail.set_env("EVENTSCOPE_QUERY__DEFAULT_ORDER", "descending");
            jail.set_env("EVENTSCOPE_RENDER__PRECISION", "2");
            let config = EventscopeConfig::load().expect("config loads");
            assert_eq!(config.query.default_order, "descending");
            assert_eq!(config.render.precision, Some(2));
            Ok(())
        });
    }

    #[test]
    fn base_file_is_merged() {
        Jail::expect_with(|jail| {
            jail.create_dir("config")?;
            jail.create_file(
                "config/eventscope.yaml",
                "feed:\n  path: flight.yaml\ntelemetry:\n  log_level: debug\n",
            )?;
            let config = EventscopeConfig::load().expect("config loads");
            assert_eq!(config.feed.path, Some(PathBuf::from("flight.yaml")));
            assert_eq!(config.telemetry.log_level, "debug");
            assert_eq!(config.render.separator_width, 40);
            Ok(())
        });
    }

    #[test]
    fn invalid_values_are_rejected() {
        Jail::expect_with(|jail| {
            jail.create_file("bad.yaml", "render:\n  separator_width: 0\n")?;
            let err = EventscopeConfig::load_from_path("bad.yaml").unwrap_err();
            assert!(matches!(err, ConfigError::Validation(_)));
            assert!(err.to_string().contains("separator_width"));
            Ok(())
        });
    }

    #[test]
    fn invalid_format_is_rejected() {
        Jail::expect_with(|jail| {
            jail.create_file("bad.yaml", "feed:\n  format: toml\n")?;
            let err = EventscopeConfig::load_from_path("bad.yaml").unwrap_err();
            assert!(matches!(err, ConfigError::Validation(_)));
            Ok(())
        });
    }

    #[test]
    fn missing_file() {
        let err = EventscopeConfig::load_from_path("does/not/exist.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }
}
