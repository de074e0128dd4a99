//! Page navigation across many independent, delayed UI events.
//!
//! A command hands the [`PaginationController`] a [`PageRenderer`] and an
//! initial [`PaginationState`]. The controller renders the first page, keeps
//! one small session (renderer + state) in the action store and gives every
//! control a token pointing back at it. Later button presses and jump-prompt
//! submissions look the session up again, apply a transition and re-render.
//!
//! Nothing but the session handle is kept between events; sessions expire
//! on the store's sliding TTL and a press on an expired session does nothing.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod action;
mod config;
mod controller;
mod controls;
mod page;
mod session;
mod state;

pub use action::PaginationAction;
pub use config::PaginationConfig;
pub use controller::{JumpRoute, MoveRoute, Outcome, PaginationController, SessionStore};
pub use controls::build_control_row;
pub use page::{page_window, total_pages};
pub use session::{PageRenderer, PaginationSession};
pub use state::PaginationState;
