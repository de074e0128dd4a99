//! Interaction plumbing for chat bots.
//!
//! Sunrise keeps short-lived state for UI controls, hands out compact
//! correlation tokens that fit a platform's custom id limit, routes inbound
//! events back to the handler that issued them and builds paginated views on
//! top of the three.
//!
//! # Crates
//!
//! - [`sunrise_error`]: error types shared by all crates
//! - [`sunrise_cache`]: the [`ActionStore`]
//! - [`sunrise_interaction`]: tokens, guards, the router and the responder seam
//! - [`sunrise_pagination`]: the [`PaginationController`]
//!
//! # Example
//!
//! ```no_run
//! use sunrise::{InteractionKit, SunriseConfig, init_observability};
//!
//! # fn main() -> sunrise::SunriseResult<()> {
//! let config = SunriseConfig::load()?;
//! init_observability(config.logging())?;
//! let kit = InteractionKit::new(&config);
//! assert_eq!(kit.router().routes().len(), 2);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod kit;
mod observability;

pub use config::SunriseConfig;
pub use kit::InteractionKit;
pub use observability::{ObservabilityConfig, init_observability};

pub use sunrise_cache::{ActionStore, ActionStoreConfig, ActionStoreConfigBuilder, RefreshTtl};
pub use sunrise_error::{
    ConfigError, ConfigErrorKind, PaginationError, PaginationErrorKind, ResponderError, SunriseError,
    SunriseErrorKind, SunriseResult, TokenError, TokenErrorKind,
};
pub use sunrise_interaction::{
    ControlButton, ControlRow, Dispatch, DispatchGuard, GENERIC_ERROR_MESSAGE, GuardMatch,
    InteractionEvent, InteractionHandler, InteractionKind, InteractionResponder,
    InteractionRouter, JumpPrompt, MAX_TOKEN_LENGTH, Mismatch, PageContent, RenderedPage, Route,
    Token, TokenContext, decode, encode,
};
pub use sunrise_pagination::{
    Outcome, PageRenderer, PaginationAction, PaginationConfig, PaginationController,
    PaginationSession, PaginationState, SessionStore, build_control_row, page_window,
    total_pages,
};
