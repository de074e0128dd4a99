//! Interaction plumbing shared by every multi-step UI flow.
//!
//! A UI control (button, text prompt) carries a short correlation [`Token`]
//! in its custom id. When the platform later delivers an event for that
//! control, the [`InteractionRouter`] walks an ordered list of routes, each
//! guarded by a [`DispatchGuard`] that checks the token's action prefix and
//! that the clicking user is the one the token was issued to.
//!
//! # Wire format
//!
//! `<prefix>:<user_id>:<store_id>:<payload_csv>`, at most
//! [`MAX_TOKEN_LENGTH`] characters.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod event;
mod guard;
mod responder;
mod router;
mod token;

pub use event::{InteractionEvent, InteractionKind};
pub use guard::{DispatchGuard, GuardMatch, Mismatch};
pub use responder::{
    ControlButton, ControlRow, InteractionResponder, JumpPrompt, PageContent, RenderedPage,
};
pub use router::{Dispatch, InteractionHandler, InteractionRouter, Route, GENERIC_ERROR_MESSAGE};
pub use token::{MAX_TOKEN_LENGTH, Token, TokenContext, decode, encode};
