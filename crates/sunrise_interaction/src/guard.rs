//! Prefix and same-user filtering of inbound events.

use crate::token::{Token, decode};
use sunrise_error::TokenError;
use tracing::{debug, instrument};

/// Why an event is not addressed to a handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Mismatch {
    /// Token belongs to a different action.
    #[display("token prefix does not match")]
    Prefix,
    /// Token was issued to another user.
    #[display("token was issued to another user")]
    User,
}

/// Result of running a guard over an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardMatch {
    /// The event is for this handler; carries the decoded token.
    Matched(Token),
    /// The event is for someone else. Not an error.
    NotApplicable(Mismatch),
}

impl GuardMatch {
    /// Decoded token if the guard matched.
    pub fn into_token(self) -> Option<Token> {
        match self {
            Self::Matched(token) => Some(token),
            Self::NotApplicable(_) => None,
        }
    }
}

/// Decides whether a raw token is addressed to a handler expecting `prefix`.
///
/// Two independent checks: the token's prefix equals the expected one, and
/// its user id equals the id of the user who produced the event.
///
/// ```
/// use sunrise_interaction::{DispatchGuard, GuardMatch, Mismatch};
///
/// let guard = DispatchGuard::new("pagination_move");
///
/// let hit = guard.check("pagination_move:42:abc:NEXT", "42").unwrap();
/// assert!(matches!(hit, GuardMatch::Matched(_)));
///
/// let other_user = guard.check("pagination_move:42:abc:NEXT", "7").unwrap();
/// assert_eq!(other_user, GuardMatch::NotApplicable(Mismatch::User));
///
/// let other_action = guard.check("profile_refresh:42::", "42").unwrap();
/// assert_eq!(other_action, GuardMatch::NotApplicable(Mismatch::Prefix));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchGuard {
    prefix: String,
}

impl DispatchGuard {
    /// Guard for tokens carrying `prefix`.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// The expected prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Check an event's raw token against this guard.
    ///
    /// Tokens without the expected prefix are rejected before decoding, so
    /// foreign custom ids never produce errors. A token that carries the
    /// prefix but cannot be decoded is a protocol violation.
    #[instrument(skip(self), fields(prefix = %self.prefix))]
    pub fn check(&self, raw: &str, user_id: &str) -> Result<GuardMatch, TokenError> {
        let carries_prefix = raw
            .strip_prefix(self.prefix.as_str())
            .is_some_and(|rest| rest.starts_with(':'));
        if !carries_prefix {
            return Ok(GuardMatch::NotApplicable(Mismatch::Prefix));
        }

        let token = decode(raw)?;
        if token.prefix != self.prefix {
            return Ok(GuardMatch::NotApplicable(Mismatch::Prefix));
        }

        if token.user_id != user_id {
            debug!(token_user = %token.user_id, "Interaction from a different user");
            return Ok(GuardMatch::NotApplicable(Mismatch::User));
        }

        Ok(GuardMatch::Matched(token))
    }
}
