//! Error types for the sunrise interaction core.
//!
//! # Error Hierarchy
//!
//! Errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! Cache misses, stale sessions and dispatch mismatches are not errors and
//! have no representation here.
//!
//! # Examples
//!
//! ```
//! use sunrise_error::{SunriseResult, TokenError, TokenErrorKind};
//!
//! fn decode() -> SunriseResult<()> {
//!     Err(TokenError::new(TokenErrorKind::MalformedToken("no prefix".to_string())))?
//! }
//!
//! assert!(decode().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod pagination;
mod responder;
mod token;
mod error;

pub use config::{ConfigError, ConfigErrorKind};
pub use pagination::{PaginationError, PaginationErrorKind};
pub use responder::ResponderError;
pub use token::{TokenError, TokenErrorKind};
pub use error::{SunriseError, SunriseErrorKind, SunriseResult};
