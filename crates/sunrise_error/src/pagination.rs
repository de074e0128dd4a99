//! Pagination protocol errors.

/// Specific pagination failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum PaginationErrorKind {
    /// Jump input was not an integer.
    #[display("Not a number: {:?}", _0)]
    NotANumber(String),

    /// Jump target outside `1..=total_pages`.
    #[display("Invalid page {} (total pages: {})", page, total_pages)]
    InvalidPage {
        /// Requested page
        page: i64,
        /// Total pages at the time of the request
        total_pages: u32,
    },

    /// Token payload named a transition the protocol does not know.
    #[display("Unexpected pagination action: {:?}", _0)]
    UnexpectedAction(String),

    /// The page renderer failed.
    #[display("Failed to render page: {}", _0)]
    Render(String),
}

/// Pagination error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Pagination Error: {} at line {} in {}", kind, line, file)]
pub struct PaginationError {
    /// The kind of error that occurred
    pub kind: PaginationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl PaginationError {
    /// Create a new pagination error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PaginationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &PaginationErrorKind {
        &self.kind
    }

    /// Message shown to the user for input errors, `None` for internal failures.
    ///
    /// ```
    /// use sunrise_error::{PaginationError, PaginationErrorKind};
    ///
    /// let err = PaginationError::new(PaginationErrorKind::NotANumber("abc".into()));
    /// assert_eq!(err.user_message(), Some("Not a number"));
    ///
    /// let err = PaginationError::new(PaginationErrorKind::UnexpectedAction("UP".into()));
    /// assert_eq!(err.user_message(), None);
    /// ```
    pub fn user_message(&self) -> Option<&'static str> {
        match self.kind {
            PaginationErrorKind::NotANumber(_) => Some("Not a number"),
            PaginationErrorKind::InvalidPage { .. } => Some("Invalid page"),
            PaginationErrorKind::UnexpectedAction(_) | PaginationErrorKind::Render(_) => None,
        }
    }
}
