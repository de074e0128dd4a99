//! Layered configuration loading.
//!
//! Sources, later ones overriding earlier ones:
//! - Bundled defaults (include_str! from sunrise.toml)
//! - `~/.config/sunrise/sunrise.toml`
//! - `./sunrise.toml`

use crate::ObservabilityConfig;
use config::{Config, File, FileFormat};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use sunrise_cache::ActionStoreConfig;
use sunrise_error::{ConfigError, ConfigErrorKind, SunriseError, SunriseResult};
use sunrise_pagination::PaginationConfig;
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../../../sunrise.toml");

/// Top-level Sunrise configuration.
///
/// # Example
///
/// ```
/// use sunrise::SunriseConfig;
///
/// let config = SunriseConfig::from_toml_str("[action_store]\ncapacity = 32\n").unwrap();
/// assert_eq!(*config.action_store().capacity(), 32);
/// assert_eq!(*config.action_store().default_ttl_ms(), 300_000);
/// assert_eq!(config.pagination().placeholder(), "⌛ Please wait...");
/// ```
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters, derive_setters::Setters,
)]
#[setters(prefix = "with_")]
pub struct SunriseConfig {
    /// Action store sizing and expiry
    #[serde(default)]
    action_store: ActionStoreConfig,
    /// Pagination texts and token prefixes
    #[serde(default)]
    pagination: PaginationConfig,
    /// Log output
    #[serde(default)]
    logging: ObservabilityConfig,
}

impl SunriseConfig {
    /// Load bundled defaults, then the user's and the working directory's overrides.
    ///
    /// Override files are optional and skipped when absent.
    #[instrument]
    pub fn load() -> SunriseResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("sunrise").join("sunrise.toml");
            builder = builder.add_source(File::from(user_config).required(false));
        }

        builder = builder.add_source(File::with_name("sunrise").required(false));
        finish(builder)
    }

    /// Load a specific file over the bundled defaults.
    ///
    /// # Errors
    ///
    /// Fails if the file is missing or does not parse.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> SunriseResult<Self> {
        debug!("Loading configuration from file");
        let builder = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from(path.as_ref()).format(FileFormat::Toml));
        finish(builder)
    }

    /// Parse TOML text over the bundled defaults.
    pub fn from_toml_str(toml: &str) -> SunriseResult<Self> {
        let builder = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from_str(toml, FileFormat::Toml));
        finish(builder)
    }
}

fn finish(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
) -> SunriseResult<SunriseConfig> {
    let config: SunriseConfig = builder
        .build()
        .map_err(|e| {
            SunriseError::from(ConfigError::new(ConfigErrorKind::Read(e.to_string())))
        })?
        .try_deserialize()
        .map_err(|e| {
            SunriseError::from(ConfigError::new(ConfigErrorKind::Parse(e.to_string())))
        })?;

    if *config.action_store.capacity() == 0 {
        return Err(ConfigError::new(ConfigErrorKind::InvalidValue {
            key: "action_store.capacity",
            reason: "must be at least 1".to_string(),
        })
        .into());
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sunrise_cache::RefreshTtl;

    #[test]
    fn test_bundled_defaults_match_code_defaults() {
        let config = SunriseConfig::from_toml_str("").unwrap();
        assert_eq!(config.action_store(), &ActionStoreConfig::default());
        assert_eq!(config.pagination(), &PaginationConfig::default());
        assert_eq!(*config.action_store().refresh_ttl(), RefreshTtl::Default);
    }
}
