//! Compact correlation token encoding and decoding.

use sunrise_error::{TokenError, TokenErrorKind};
use tracing::{debug, instrument};

/// Hard length ceiling the chat platform imposes on component custom ids.
pub const MAX_TOKEN_LENGTH: usize = 100;

const FIELD_DELIMITER: char = ':';
const PAYLOAD_DELIMITER: char = ',';

/// Optional context carried after the prefix and user id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenContext {
    /// Action store key the token refers back to.
    pub store_id: Option<String>,
    /// Short positional arguments, e.g. a pagination action.
    pub payload: Vec<String>,
}

impl TokenContext {
    /// Context referencing a store entry with no payload.
    pub fn with_store_id(store_id: impl Into<String>) -> Self {
        Self {
            store_id: Some(store_id.into()),
            payload: Vec::new(),
        }
    }

    /// Append a payload element.
    pub fn push(mut self, item: impl Into<String>) -> Self {
        self.payload.push(item.into());
        self
    }
}

/// A decoded correlation token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Action prefix identifying which handler the token is for.
    pub prefix: String,
    /// Id of the only user allowed to act on the token.
    pub user_id: String,
    /// Store key and payload.
    pub ctx: TokenContext,
}

/// Encode a token, rejecting anything longer than [`MAX_TOKEN_LENGTH`].
///
/// ```
/// use sunrise_interaction::{TokenContext, encode};
///
/// let ctx = TokenContext::with_store_id("abc").push("RIGHT");
/// assert_eq!(encode("MOVE", "42", &ctx).unwrap(), "MOVE:42:abc:RIGHT");
/// ```
#[instrument(skip(ctx), fields(store_id = ?ctx.store_id, payload_len = ctx.payload.len()))]
pub fn encode(prefix: &str, user_id: &str, ctx: &TokenContext) -> Result<String, TokenError> {
    if prefix.is_empty() || user_id.is_empty() {
        return Err(TokenError::new(TokenErrorKind::MalformedToken(
            "prefix and user id must not be empty".to_string(),
        )));
    }

    check_field("prefix", prefix)?;
    check_field("user_id", user_id)?;
    if ctx.store_id.as_deref() == Some("") {
        return Err(TokenError::new(TokenErrorKind::MalformedToken(
            "store id must not be empty when present".to_string(),
        )));
    }
    let store_id = ctx.store_id.as_deref().unwrap_or_default();
    check_field("store_id", store_id)?;
    for item in &ctx.payload {
        check_field("payload", item)?;
        if item.is_empty() {
            return Err(TokenError::new(TokenErrorKind::MalformedToken(
                "payload elements must not be empty".to_string(),
            )));
        }
        if item.contains(PAYLOAD_DELIMITER) {
            return Err(TokenError::new(TokenErrorKind::ReservedDelimiter {
                field: "payload",
                value: item.clone(),
            }));
        }
    }

    let payload = ctx.payload.join(",");
    let token = format!("{prefix}:{user_id}:{store_id}:{payload}");

    let length = token.chars().count();
    if length > MAX_TOKEN_LENGTH {
        debug!(length, "Token rejected, too long");
        return Err(TokenError::new(TokenErrorKind::LengthExceeded {
            length,
            limit: MAX_TOKEN_LENGTH,
        }));
    }

    Ok(token)
}

/// Decode a token produced by [`encode`].
///
/// ```
/// use sunrise_interaction::decode;
///
/// let token = decode("MOVE:42:abc:RIGHT").unwrap();
/// assert_eq!(token.prefix, "MOVE");
/// assert_eq!(token.user_id, "42");
/// assert_eq!(token.ctx.store_id.as_deref(), Some("abc"));
/// assert_eq!(token.ctx.payload, vec!["RIGHT".to_string()]);
/// ```
pub fn decode(raw: &str) -> Result<Token, TokenError> {
    let fields: Vec<&str> = raw.split(FIELD_DELIMITER).collect();
    if fields.len() > 4 {
        return Err(TokenError::new(TokenErrorKind::MalformedToken(format!(
            "expected at most 4 fields, found {}",
            fields.len()
        ))));
    }

    let field = |index: usize| fields.get(index).copied().filter(|f| !f.is_empty());

    let (Some(prefix), Some(user_id)) = (field(0), field(1)) else {
        return Err(TokenError::new(TokenErrorKind::MalformedToken(
            "no prefix or user id".to_string(),
        )));
    };

    let payload = field(3)
        .map(|csv| csv.split(PAYLOAD_DELIMITER).map(str::to_string).collect())
        .unwrap_or_default();

    Ok(Token {
        prefix: prefix.to_string(),
        user_id: user_id.to_string(),
        ctx: TokenContext {
            store_id: field(2).map(str::to_string),
            payload,
        },
    })
}

fn check_field(field: &'static str, value: &str) -> Result<(), TokenError> {
    if value.contains(FIELD_DELIMITER) {
        return Err(TokenError::new(TokenErrorKind::ReservedDelimiter {
            field,
            value: value.to_string(),
        }));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_context_encodes_empty_fields() {
        let token = encode("p", "1", &TokenContext::default()).unwrap();
        assert_eq!(token, "p:1::");

        let decoded = decode(&token).unwrap();
        assert_eq!(decoded.ctx, TokenContext::default());
    }

    #[test]
    fn test_prefix_only_is_malformed() {
        let err = decode("MOVE").unwrap_err();
        assert!(matches!(err.kind, TokenErrorKind::MalformedToken(_)));
    }
}
