//! Ephemeral keyed storage for interaction state.
//!
//! The [`ActionStore`] holds values that UI controls need to find again
//! later (for example a pagination session) under opaque, time-ordered keys.
//! Entries expire on a sliding window and the store never grows beyond its
//! configured capacity.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod store;

pub use config::{ActionStoreConfig, ActionStoreConfigBuilder, RefreshTtl};
pub use store::ActionStore;
