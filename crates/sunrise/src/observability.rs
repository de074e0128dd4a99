//! Tracing subscriber setup.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use sunrise_error::{ConfigError, ConfigErrorKind, SunriseResult};
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Log output settings.
///
/// `RUST_LOG`, when set, takes precedence over `log_level`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Service name recorded on startup
    service_name: String,
    /// Log level filter (e.g., "info", "sunrise_cache=debug")
    log_level: String,
    /// Emit JSON lines instead of human-readable text
    json_logs: bool,
}

impl ObservabilityConfig {
    /// Create a new configuration with the given service name.
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            log_level: "info".to_string(),
            json_logs: false,
        }
    }

    /// Set the log level.
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Enable JSON-formatted logs.
    pub fn with_json_logs(mut self, enabled: bool) -> Self {
        self.json_logs = enabled;
        self
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self::new("sunrise")
    }
}

/// Install the global tracing subscriber.
///
/// # Errors
///
/// Fails if the level filter does not parse or a global subscriber is
/// already installed.
pub fn init_observability(config: &ObservabilityConfig) -> SunriseResult<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .map_err(|e| {
            ConfigError::new(ConfigErrorKind::InvalidValue {
                key: "logging.log_level",
                reason: format!("{:?}: {}", config.log_level, e),
            })
        })?;

    let fmt_layer = if config.json_logs {
        tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_level(true)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_level(true)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| ConfigError::new(ConfigErrorKind::Logging(e.to_string())))?;

    tracing::info!(
        service = %config.service_name,
        version = env!("CARGO_PKG_VERSION"),
        "Observability initialized"
    );
    Ok(())
}
