//! What the action store keeps per pagination instance.

use crate::PaginationState;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;
use sunrise_error::SunriseResult;
use sunrise_interaction::PageContent;

/// Produces the content of one page.
///
/// Called on every transition with the prospective state. Implementations may
/// update `total_pages` (or `page_size`) when the underlying data changed; the
/// controller clamps the page afterwards.
#[async_trait]
pub trait PageRenderer: Send + Sync {
    /// Render the page named by `state.current_page`.
    async fn render(&self, state: &mut PaginationState) -> SunriseResult<PageContent>;
}

/// A renderer and the state it renders from.
///
/// The state lock is only held to copy or replace the state, never across an
/// await, so concurrent events on one session each see a consistent snapshot
/// and the last render to finish wins.
pub struct PaginationSession {
    renderer: Arc<dyn PageRenderer>,
    state: Mutex<PaginationState>,
}

impl PaginationSession {
    /// New session positioned at `state`.
    pub fn new(renderer: Arc<dyn PageRenderer>, state: PaginationState) -> Self {
        Self {
            renderer,
            state: Mutex::new(state),
        }
    }

    /// The session's renderer.
    pub fn renderer(&self) -> &Arc<dyn PageRenderer> {
        &self.renderer
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> PaginationState {
        *self.state.lock()
    }

    /// Replace the state after a successful render.
    pub fn commit(&self, state: PaginationState) {
        *self.state.lock() = state;
    }
}

impl std::fmt::Debug for PaginationSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaginationSession")
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}
