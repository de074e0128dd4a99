//! Action store configuration.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for an [`ActionStore`](crate::ActionStore).
///
/// ```toml
/// [action_store]
/// default_ttl_ms = 300_000
/// capacity = 10_000
/// refresh_ttl = "default"
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Getters,
    derive_setters::Setters,
    derive_builder::Builder,
)]
#[setters(prefix = "with_")]
pub struct ActionStoreConfig {
    /// Time-to-live for entries stored without an explicit one (milliseconds)
    #[serde(default = "default_ttl_ms")]
    #[builder(default = "default_ttl_ms()")]
    default_ttl_ms: u64,

    /// Maximum number of stored entries
    #[serde(default = "default_capacity")]
    #[builder(default = "default_capacity()")]
    capacity: usize,

    /// Which TTL a successful lookup re-applies
    #[serde(default)]
    #[builder(default)]
    refresh_ttl: RefreshTtl,
}

/// TTL used when a lookup refreshes an entry's expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefreshTtl {
    /// The store's default TTL, regardless of how the entry was stored
    #[default]
    Default,
    /// The TTL the entry was stored with
    Entry,
}

fn default_ttl_ms() -> u64 {
    5 * 60 * 1000
}

fn default_capacity() -> usize {
    10_000
}

impl ActionStoreConfig {
    /// Default TTL as a [`Duration`].
    pub fn default_ttl(&self) -> Duration {
        Duration::from_millis(self.default_ttl_ms)
    }
}

impl Default for ActionStoreConfig {
    fn default() -> Self {
        Self {
            default_ttl_ms: default_ttl_ms(),
            capacity: default_capacity(),
            refresh_ttl: RefreshTtl::default(),
        }
    }
}
