//! Correlation token errors.

/// Specific token encode/decode failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum TokenErrorKind {
    /// Encoded token is longer than the platform allows.
    #[display("Token is {} characters long, limit is {}", length, limit)]
    LengthExceeded {
        /// Length of the rejected token in characters
        length: usize,
        /// Maximum allowed length
        limit: usize,
    },

    /// Token could not be parsed back into its fields.
    #[display("Malformed token: {}", _0)]
    MalformedToken(String),

    /// A field contains a character the wire format reserves.
    #[display("Field '{}' contains reserved delimiter: {:?}", field, value)]
    ReservedDelimiter {
        /// Name of the offending field
        field: &'static str,
        /// The rejected value
        value: String,
    },
}

/// Token error with location tracking.
///
/// # Examples
///
/// ```
/// use sunrise_error::{TokenError, TokenErrorKind};
///
/// let err = TokenError::new(TokenErrorKind::LengthExceeded { length: 101, limit: 100 });
/// assert!(format!("{}", err).contains("101 characters"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Token Error: {} at line {} in {}", kind, line, file)]
pub struct TokenError {
    /// The kind of error that occurred
    pub kind: TokenErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl TokenError {
    /// Create a new token error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: TokenErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &TokenErrorKind {
        &self.kind
    }
}
