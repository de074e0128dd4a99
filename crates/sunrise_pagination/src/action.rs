//! Navigation transitions carried in control tokens.

use serde::{Deserialize, Serialize};

/// A navigation control, encoded in token payloads by its upper-case name.
///
/// ```
/// use std::str::FromStr;
/// use sunrise_pagination::PaginationAction;
///
/// assert_eq!(PaginationAction::Next.to_string(), "NEXT");
/// assert_eq!(PaginationAction::from_str("FIRST").unwrap(), PaginationAction::First);
/// assert!(PaginationAction::from_str("UP").is_err());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaginationAction {
    /// Go to page 1
    First,
    /// Go back one page
    Prev,
    /// Ask for a page number
    Jump,
    /// Go forward one page
    Next,
    /// Go to the last page
    Last,
}

impl PaginationAction {
    /// Button label.
    pub fn label(self) -> &'static str {
        match self {
            Self::First => "⏮️",
            Self::Prev => "⬅️",
            Self::Jump => "*️⃣",
            Self::Next => "➡️",
            Self::Last => "⏭️",
        }
    }
}
