//! Page position and its transitions.

use crate::PaginationAction;
use serde::{Deserialize, Serialize};
use sunrise_error::{PaginationError, PaginationErrorKind};

/// Where a pagination instance currently is.
///
/// `current_page` is one-based. Every transition leaves it inside
/// `1..=max(total_pages, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaginationState {
    /// Items per page, owned by the renderer
    pub page_size: u32,
    /// One-based current page
    pub current_page: u32,
    /// Number of pages; the renderer may update it on every render
    pub total_pages: u32,
}

impl PaginationState {
    /// State positioned on page 1.
    pub fn new(page_size: u32, total_pages: u32) -> Self {
        Self {
            page_size: page_size.max(1),
            current_page: 1,
            total_pages,
        }
    }

    /// Last valid page, never below 1.
    pub fn last_page(&self) -> u32 {
        self.total_pages.max(1)
    }

    /// Whether there is no page before the current one.
    pub fn on_first_page(&self) -> bool {
        self.current_page <= 1
    }

    /// Whether there is no page after the current one.
    pub fn on_last_page(&self) -> bool {
        self.current_page >= self.total_pages
    }

    /// Pull `current_page` back into range.
    pub fn clamp(&mut self) {
        self.current_page = self.current_page.clamp(1, self.last_page());
        self.page_size = self.page_size.max(1);
    }

    /// The state after a navigation button.
    ///
    /// `Jump` needs an input and leaves the page unchanged; see [`Self::jump_to`].
    ///
    /// ```
    /// use sunrise_pagination::{PaginationAction, PaginationState};
    ///
    /// let state = PaginationState::new(10, 5);
    /// assert_eq!(state.apply(PaginationAction::Prev).current_page, 1);
    /// assert_eq!(state.apply(PaginationAction::Last).current_page, 5);
    /// ```
    pub fn apply(mut self, action: PaginationAction) -> Self {
        self.current_page = match action {
            PaginationAction::First => 1,
            PaginationAction::Prev => self.current_page.saturating_sub(1),
            PaginationAction::Next => self.current_page.saturating_add(1),
            PaginationAction::Last => self.total_pages,
            PaginationAction::Jump => self.current_page,
        };
        self.clamp();
        self
    }

    /// The state after a jump-prompt submission.
    ///
    /// Surrounding whitespace is ignored. Fails with `NotANumber` when the
    /// text is not an integer and `InvalidPage` when it names no page.
    ///
    /// ```
    /// use sunrise_pagination::PaginationState;
    ///
    /// let state = PaginationState::new(10, 5);
    /// assert_eq!(state.jump_to(" 3 ").unwrap().current_page, 3);
    /// assert_eq!(state.jump_to("abc").unwrap_err().user_message(), Some("Not a number"));
    /// assert_eq!(state.jump_to("6").unwrap_err().user_message(), Some("Invalid page"));
    /// ```
    pub fn jump_to(mut self, input: &str) -> Result<Self, PaginationError> {
        let trimmed = input.trim();
        let page: i64 = trimmed.parse().map_err(|_| {
            PaginationError::new(PaginationErrorKind::NotANumber(trimmed.to_string()))
        })?;

        if page <= 0 || page > i64::from(self.total_pages) {
            return Err(PaginationError::new(PaginationErrorKind::InvalidPage {
                page,
                total_pages: self.total_pages,
            }));
        }

        self.current_page = u32::try_from(page).map_err(|_| {
            PaginationError::new(PaginationErrorKind::InvalidPage {
                page,
                total_pages: self.total_pages,
            })
        })?;
        self.clamp();
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on_page(current_page: u32, total_pages: u32) -> PaginationState {
        PaginationState {
            page_size: 10,
            current_page,
            total_pages,
        }
    }

    #[test]
    fn test_bounds_hold_at_both_ends() {
        assert_eq!(on_page(1, 5).apply(PaginationAction::Prev).current_page, 1);
        assert_eq!(on_page(5, 5).apply(PaginationAction::Next).current_page, 5);
        assert_eq!(on_page(3, 5).apply(PaginationAction::First).current_page, 1);
        assert_eq!(on_page(3, 5).apply(PaginationAction::Next).current_page, 4);
    }

    #[test]
    fn test_empty_result_set_stays_on_page_one() {
        assert_eq!(on_page(1, 0).apply(PaginationAction::Last).current_page, 1);
        assert_eq!(on_page(1, 0).apply(PaginationAction::Next).current_page, 1);
        assert!(on_page(1, 0).jump_to("1").is_err());
    }

    #[test]
    fn test_shrunk_total_is_clamped() {
        let mut state = on_page(7, 3);
        state.clamp();
        assert_eq!(state.current_page, 3);
    }

    #[test]
    fn test_jump_rejects_zero_and_negative() {
        for input in ["0", "-2"] {
            let err = on_page(2, 5).jump_to(input).unwrap_err();
            assert!(matches!(err.kind, PaginationErrorKind::InvalidPage { .. }));
        }
    }

    #[test]
    fn test_jump_rejects_fraction() {
        let err = on_page(2, 5).jump_to("2.5").unwrap_err();
        assert_eq!(err.kind, PaginationErrorKind::NotANumber("2.5".to_string()));
    }
}
