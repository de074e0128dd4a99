//! Top-level error wrapper types.

use crate::{ConfigError, PaginationError, ResponderError, TokenError};

/// Every error the interaction core can produce.
///
/// # Examples
///
/// ```
/// use sunrise_error::{ConfigError, ConfigErrorKind, SunriseError};
///
/// let err: SunriseError = ConfigError::new(ConfigErrorKind::Parse("bad ttl".into())).into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum SunriseErrorKind {
    /// Token encode/decode error
    #[from(TokenError)]
    Token(TokenError),
    /// Pagination protocol error
    #[from(PaginationError)]
    Pagination(PaginationError),
    /// Platform response error
    #[from(ResponderError)]
    Responder(ResponderError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
}

/// Sunrise error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Sunrise Error: {}", _0)]
pub struct SunriseError(Box<SunriseErrorKind>);

impl SunriseError {
    /// Create a new error from a kind.
    pub fn new(kind: SunriseErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &SunriseErrorKind {
        &self.0
    }

    /// Message safe to show the user verbatim, if this is a user-input error.
    pub fn user_message(&self) -> Option<&'static str> {
        match self.kind() {
            SunriseErrorKind::Pagination(err) => err.user_message(),
            _ => None,
        }
    }
}

// Generic From implementation for any type that converts to SunriseErrorKind
impl<T> From<T> for SunriseError
where
    T: Into<SunriseErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for sunrise operations.
pub type SunriseResult<T> = std::result::Result<T, SunriseError>;
