//! Configuration and startup errors.

/// What went wrong while loading configuration or applying it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ConfigErrorKind {
    /// A configuration source could not be read.
    #[display("Failed to read configuration: {}", _0)]
    Read(String),

    /// Sources were read but do not deserialize into the expected shape.
    #[display("Failed to parse configuration: {}", _0)]
    Parse(String),

    /// A value parsed but is outside its allowed range.
    #[display("Invalid value for {}: {}", key, reason)]
    InvalidValue {
        /// Dotted key of the offending setting
        key: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// The tracing subscriber could not be installed.
    #[display("Failed to initialize logging: {}", _0)]
    Logging(String),
}

/// Configuration error with location tracking.
///
/// # Examples
///
/// ```
/// use sunrise_error::{ConfigError, ConfigErrorKind};
///
/// let err = ConfigError::new(ConfigErrorKind::InvalidValue {
///     key: "action_store.capacity",
///     reason: "must be at least 1".to_string(),
/// });
/// assert!(format!("{}", err).contains("action_store.capacity"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", kind, line, file)]
pub struct ConfigError {
    /// The kind of error that occurred
    pub kind: ConfigErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new configuration error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ConfigErrorKind {
        &self.kind
    }
}
