//! Navigation control rows.

use crate::{PaginationAction, PaginationState};
use strum::IntoEnumIterator;
use sunrise_error::TokenError;
use sunrise_interaction::{ControlButton, ControlRow, TokenContext, encode};

/// Build the five navigation buttons for `state`.
///
/// Each button carries a token `prefix:user_id:store_id:ACTION`. Buttons that
/// would not move the page are disabled; the jump button only when the
/// instance has a single page.
///
/// ```
/// use sunrise_pagination::{PaginationState, build_control_row};
///
/// let row = build_control_row(&PaginationState::new(10, 3), "pagination_move", "42", "abc").unwrap();
/// let disabled: Vec<bool> = row.buttons.iter().map(|b| b.disabled).collect();
/// assert_eq!(disabled, [true, true, false, false, false]);
/// assert_eq!(row.buttons[3].custom_id, "pagination_move:42:abc:NEXT");
/// ```
pub fn build_control_row(
    state: &PaginationState,
    prefix: &str,
    user_id: &str,
    store_id: &str,
) -> Result<ControlRow, TokenError> {
    let first = state.on_first_page();
    let last = state.on_last_page();

    let buttons = PaginationAction::iter()
        .map(|action| {
            let disabled = match action {
                PaginationAction::First | PaginationAction::Prev => first,
                PaginationAction::Next | PaginationAction::Last => last,
                PaginationAction::Jump => first && last,
            };
            let ctx = TokenContext::with_store_id(store_id).push(action.to_string());
            Ok(ControlButton {
                action: action.to_string(),
                label: action.label().to_string(),
                custom_id: encode(prefix, user_id, &ctx)?,
                disabled,
            })
        })
        .collect::<Result<Vec<_>, TokenError>>()?;

    Ok(ControlRow { buttons })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn disabled(current_page: u32, total_pages: u32) -> Vec<bool> {
        let state = PaginationState {
            page_size: 10,
            current_page,
            total_pages,
        };
        build_control_row(&state, "p", "u", "s")
            .unwrap()
            .buttons
            .into_iter()
            .map(|b| b.disabled)
            .collect()
    }

    #[test]
    fn test_disabled_states() {
        assert_eq!(disabled(3, 5), [false, false, false, false, false]);
        assert_eq!(disabled(5, 5), [false, false, false, true, true]);
        assert_eq!(disabled(1, 1), [true, true, true, true, true]);
        assert_eq!(disabled(1, 0), [true, true, true, true, true]);
    }

    #[test]
    fn test_labels_and_actions_in_order() {
        let row = build_control_row(&PaginationState::new(1, 2), "p", "u", "s").unwrap();
        let labels: Vec<&str> = row.buttons.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, ["⏮️", "⬅️", "*️⃣", "➡️", "⏭️"]);

        let actions: Vec<&str> = row.buttons.iter().map(|b| b.action.as_str()).collect();
        assert_eq!(actions, ["FIRST", "PREV", "JUMP", "NEXT", "LAST"]);
    }
}
