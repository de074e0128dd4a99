//! Pagination presentation settings.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Text and token prefixes used by the [`PaginationController`](crate::PaginationController).
///
/// ```toml
/// [pagination]
/// placeholder = "⌛ Please wait..."
/// jump_title = "Go to page"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_setters::Setters)]
#[setters(prefix = "with_", into)]
#[serde(default)]
pub struct PaginationConfig {
    /// Interim message shown while a page renders
    placeholder: String,
    /// Title of the jump prompt
    jump_title: String,
    /// Label of the jump prompt's text input
    jump_label: String,
    /// Placeholder inside the empty jump input
    jump_placeholder: String,
    /// Field id the jump input is reported under
    jump_field_id: String,
    /// Token prefix of the navigation buttons
    move_prefix: String,
    /// Token prefix of the jump prompt
    jump_prefix: String,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            placeholder: "⌛ Please wait...".to_string(),
            jump_title: "Go to page".to_string(),
            jump_label: "New Page Number".to_string(),
            jump_placeholder: "1".to_string(),
            jump_field_id: "page".to_string(),
            move_prefix: "pagination_move".to_string(),
            jump_prefix: "pagination_jump".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setters_keep_other_defaults() {
        let config = PaginationConfig::default().with_placeholder("Loading");
        assert_eq!(config.placeholder(), "Loading");
        assert_eq!(config.move_prefix(), "pagination_move");
    }
}
