//! Sliding-expiry action store.

use crate::{ActionStoreConfig, RefreshTtl};
use parking_lot::Mutex;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, info, instrument, warn};

/// A stored value with its expiry bookkeeping.
#[derive(Debug)]
struct CacheEntry<T> {
    value: T,
    expires_at: Instant,
    ttl: Duration,
    /// Position in insertion order, used for capacity eviction.
    seq: u64,
    /// Bumped on every reschedule so an outdated timer cannot remove the entry.
    generation: u64,
    timer: Option<JoinHandle<()>>,
}

impl<T> CacheEntry<T> {
    fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

#[derive(Debug)]
struct StoreState<T> {
    entries: HashMap<String, CacheEntry<T>>,
    insertion_order: BTreeMap<u64, String>,
    next_seq: u64,
}

impl<T> StoreState<T> {
    fn remove(&mut self, key: &str) -> Option<CacheEntry<T>> {
        let mut entry = self.entries.remove(key)?;
        self.insertion_order.remove(&entry.seq);
        entry.cancel_timer();
        Some(entry)
    }

    /// Evicts the earliest-inserted entries until one more insertion fits.
    fn make_room(&mut self, capacity: usize) -> usize {
        let mut evicted = 0;
        while self.entries.len() >= capacity {
            let Some((_, key)) = self.insertion_order.pop_first() else {
                break;
            };
            if let Some(mut entry) = self.entries.remove(&key) {
                entry.cancel_timer();
                evicted += 1;
            }
        }
        evicted
    }
}

#[derive(Debug)]
struct Inner<T> {
    state: Mutex<StoreState<T>>,
    default_ttl: Duration,
    capacity: usize,
    refresh_ttl: RefreshTtl,
}

/// Concurrency-safe ephemeral store with sliding expiration and bounded capacity.
///
/// Keys are UUID v7 strings, so they sort by creation time. Every successful
/// [`get`](Self::get) pushes the entry's expiry forward by the default TTL,
/// or by the entry's own TTL under [`RefreshTtl::Entry`].
/// When the store is full, [`set`](Self::set) evicts the oldest insertions
/// until there is room for exactly one more.
///
/// `ActionStore` is a cheap handle: clones share the same entries. Construct
/// one per process and pass it to whatever needs it.
///
/// # Example
///
/// ```
/// use sunrise_cache::ActionStore;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let store: ActionStore<String> = ActionStore::default();
///
/// let id = store.set("foo".to_string());
/// assert_eq!(store.get(&id).as_deref(), Some("foo"));
/// assert!(store.delete(&id));
/// assert_eq!(store.get(&id), None);
/// assert!(!store.delete(&id));
/// # }
/// ```
#[derive(Debug)]
pub struct ActionStore<T> {
    inner: Arc<Inner<T>>,
}

impl<T> Clone for ActionStore<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> ActionStore<T>
where
    T: Clone + Send + 'static,
{
    /// Create a new store with configuration.
    pub fn new(config: ActionStoreConfig) -> Self {
        let capacity = if *config.capacity() == 0 {
            warn!("Action store capacity of 0 requested, using 1");
            1
        } else {
            *config.capacity()
        };
        debug!(
            default_ttl_ms = config.default_ttl_ms(),
            capacity,
            refresh_ttl = ?config.refresh_ttl(),
            "Creating new ActionStore"
        );
        Self {
            inner: Arc::new(Inner {
                state: Mutex::new(StoreState {
                    entries: HashMap::new(),
                    insertion_order: BTreeMap::new(),
                    next_seq: 0,
                }),
                default_ttl: config.default_ttl(),
                capacity,
                refresh_ttl: *config.refresh_ttl(),
            }),
        }
    }

    /// Store a value under a new key using the default TTL.
    pub fn set(&self, value: T) -> String {
        self.set_with_ttl(value, self.inner.default_ttl)
    }

    /// Store a value under a new key with a custom TTL.
    ///
    /// Under [`RefreshTtl::Default`] the custom TTL only applies until the
    /// first successful `get`.
    #[instrument(skip(self, value), fields(ttl_ms = ttl.as_millis() as u64))]
    pub fn set_with_ttl(&self, value: T, ttl: Duration) -> String {
        let key = uuid::Uuid::now_v7().to_string();
        let expires_at = deadline(Instant::now(), ttl);

        let mut state = self.inner.state.lock();

        let evicted = state.make_room(self.inner.capacity);
        if evicted > 0 {
            warn!(
                evicted,
                capacity = self.inner.capacity,
                "Action store full, evicted oldest entries"
            );
        }

        let seq = state.next_seq;
        state.next_seq += 1;
        state.insertion_order.insert(seq, key.clone());

        let timer = self.schedule_removal(&key, 0, expires_at);
        state.entries.insert(
            key.clone(),
            CacheEntry {
                value,
                expires_at,
                ttl,
                seq,
                generation: 0,
                timer,
            },
        );

        debug!(key = %key, size = state.entries.len(), "Inserted entry");
        key
    }

    /// Look up a value, refreshing its expiry on a hit.
    ///
    /// Returns `None` if the key is unknown or the entry has expired.
    #[instrument(skip(self))]
    pub fn get(&self, key: &str) -> Option<T> {
        let now = Instant::now();
        let mut state = self.inner.state.lock();

        let expired = state.entries.get(key)?.is_expired(now);
        if expired {
            debug!("Entry expired, removing");
            state.remove(key);
            return None;
        }

        let refresh_ttl = self.inner.refresh_ttl;
        let default_ttl = self.inner.default_ttl;
        let (generation, expires_at) = {
            let entry = state.entries.get_mut(key)?;
            let expires_at = match refresh_ttl {
                RefreshTtl::Entry => deadline(now, entry.ttl),
                RefreshTtl::Default => deadline(now, default_ttl),
            };
            entry.cancel_timer();
            entry.generation += 1;
            entry.expires_at = expires_at;
            (entry.generation, expires_at)
        };
        let timer = self.schedule_removal(key, generation, expires_at);

        let entry = state.entries.get_mut(key)?;
        entry.timer = timer;
        debug!("Cache hit, expiry refreshed");
        Some(entry.value.clone())
    }

    /// Remove an entry and cancel its pending expiry.
    ///
    /// Returns whether the key was present.
    #[instrument(skip(self))]
    pub fn delete(&self, key: &str) -> bool {
        let removed = self.inner.state.lock().remove(key).is_some();
        debug!(removed, "Delete requested");
        removed
    }

    /// Remove every entry and cancel every pending expiry.
    pub fn clear(&self) {
        let mut state = self.inner.state.lock();
        let count = state.entries.len();
        for entry in state.entries.values_mut() {
            entry.cancel_timer();
        }
        state.entries.clear();
        state.insertion_order.clear();
        info!(cleared = count, "Cleared action store");
    }

    /// Number of physically stored entries, expired or not.
    pub fn len(&self) -> usize {
        self.inner.state.lock().entries.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.inner.capacity
    }

    /// TTL applied to entries stored with [`set`](Self::set).
    pub fn default_ttl(&self) -> Duration {
        self.inner.default_ttl
    }

    /// Spawn the auto-removal task for one entry generation.
    ///
    /// Without a tokio runtime no task is spawned; `get` still treats the
    /// entry as absent once it has expired.
    fn schedule_removal(
        &self,
        key: &str,
        generation: u64,
        expires_at: Instant,
    ) -> Option<JoinHandle<()>> {
        let handle = tokio::runtime::Handle::try_current().ok()?;
        let store: Weak<Inner<T>> = Arc::downgrade(&self.inner);
        let key = key.to_string();

        Some(handle.spawn(async move {
            tokio::time::sleep_until(expires_at).await;
            let Some(inner) = store.upgrade() else {
                return;
            };
            let mut state = inner.state.lock();
            let current = state
                .entries
                .get(&key)
                .is_some_and(|entry| entry.generation == generation);
            if current {
                // Drop the handle of this very task without aborting it.
                if let Some(mut entry) = state.entries.remove(&key) {
                    entry.timer.take();
                    state.insertion_order.remove(&entry.seq);
                }
                debug!(key = %key, "Entry expired");
            }
        }))
    }
}

impl<T> Default for ActionStore<T>
where
    T: Clone + Send + 'static,
{
    fn default() -> Self {
        Self::new(ActionStoreConfig::default())
    }
}

/// Longest horizon an expiry is scheduled at; larger TTLs mean "never" in practice.
const FAR_FUTURE: Duration = Duration::from_secs(86_400 * 365 * 30);

fn deadline(now: Instant, ttl: Duration) -> Instant {
    now.checked_add(ttl.min(FAR_FUTURE)).unwrap_or(now)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_works_without_runtime() {
        let store: ActionStore<u32> = ActionStore::default();
        let id = store.set(7);
        assert_eq!(store.get(&id), Some(7));
        assert!(store.delete(&id));
    }

    #[test]
    fn test_zero_capacity_is_raised_to_one() {
        let store: ActionStore<u32> =
            ActionStore::new(ActionStoreConfig::default().with_capacity(0));
        assert_eq!(store.capacity(), 1);

        let first = store.set(1);
        let second = store.set(2);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&first), None);
        assert_eq!(store.get(&second), Some(2));
    }

    #[test]
    fn test_default_refresh_policy_uses_default_ttl() {
        let store: ActionStore<u32> = ActionStore::default();
        let id = store.set_with_ttl(1, Duration::from_millis(1));
        assert_eq!(store.get(&id), Some(1));

        let state = store.inner.state.lock();
        let remaining = state.entries[&id].expires_at - Instant::now();
        assert!(remaining > Duration::from_secs(60));
    }

    #[test]
    fn test_keys_are_unique() {
        let store: ActionStore<u32> = ActionStore::default();
        let a = store.set(1);
        let b = store.set(2);
        assert_ne!(a, b);
        assert_eq!(a.len(), 36);
    }
}
