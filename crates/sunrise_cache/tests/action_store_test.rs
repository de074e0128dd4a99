//! Tests for the action store.

use std::sync::Arc;
use std::time::Duration;
use sunrise_cache::{ActionStore, ActionStoreConfig, ActionStoreConfigBuilder, RefreshTtl};
use tokio::time::sleep;

fn small_store(capacity: usize) -> ActionStore<String> {
    let config = ActionStoreConfigBuilder::default()
        .capacity(capacity)
        .build()
        .unwrap();
    ActionStore::new(config)
}

#[tokio::test(start_paused = true)]
async fn test_set_get_delete_scenario() {
    let store: ActionStore<String> = ActionStore::default();

    let id = store.set("foo".to_string());
    assert_eq!(store.get(&id), Some("foo".to_string()));
    assert!(store.delete(&id));
    assert_eq!(store.get(&id), None);
    assert!(!store.delete(&id));
}

#[tokio::test(start_paused = true)]
async fn test_stores_different_value_types() {
    let strings: ActionStore<String> = ActionStore::default();
    let numbers: ActionStore<Vec<u32>> = ActionStore::default();

    let a = strings.set("test string".to_string());
    let b = numbers.set(vec![1, 2, 3]);
    let empty = numbers.set(Vec::new());

    assert_eq!(strings.get(&a).as_deref(), Some("test string"));
    assert_eq!(numbers.get(&b), Some(vec![1, 2, 3]));
    assert_eq!(numbers.get(&empty), Some(Vec::new()));
}

#[tokio::test(start_paused = true)]
async fn test_unknown_key_is_absent() {
    let store: ActionStore<String> = ActionStore::default();
    assert_eq!(store.get("0190b1a2-0000-7000-8000-000000000000"), None);
    assert!(!store.delete("0190b1a2-0000-7000-8000-000000000000"));
}

#[tokio::test(start_paused = true)]
async fn test_short_ttl_expires() {
    let store: ActionStore<String> = ActionStore::default();

    let id = store.set_with_ttl("v".to_string(), Duration::from_millis(50));
    assert_eq!(store.get(&id).as_deref(), Some("v"));

    sleep(Duration::from_millis(100)).await;
    assert_eq!(store.get(&id), None);
}

#[tokio::test(start_paused = true)]
async fn test_expiry_timer_removes_entry_without_lookup() {
    let store: ActionStore<String> = ActionStore::default();

    let short = store.set_with_ttl("short".to_string(), Duration::from_millis(100));
    let long = store.set_with_ttl("long".to_string(), Duration::from_millis(400));
    assert_eq!(store.len(), 2);

    sleep(Duration::from_millis(150)).await;
    assert_eq!(store.len(), 1);
    assert_eq!(store.get(&short), None);

    sleep(Duration::from_millis(300)).await;
    assert!(store.is_empty());
    assert_eq!(store.get(&long), None);
}

#[tokio::test(start_paused = true)]
async fn test_zero_ttl_is_immediately_absent() {
    let store: ActionStore<String> = ActionStore::default();
    let id = store.set_with_ttl("zero".to_string(), Duration::ZERO);
    assert_eq!(store.get(&id), None);
}

#[tokio::test(start_paused = true)]
async fn test_unbounded_ttl_keeps_entry() {
    let config = ActionStoreConfig::default().with_refresh_ttl(RefreshTtl::Entry);
    let store: ActionStore<u32> = ActionStore::new(config);
    let id = store.set_with_ttl(1, Duration::MAX);

    sleep(Duration::from_secs(86_400)).await;
    assert_eq!(store.get(&id), Some(1));
    assert_eq!(store.get(&id), Some(1));
}

#[tokio::test(start_paused = true)]
async fn test_sliding_refresh_keeps_entry_alive() {
    let store: ActionStore<String> = ActionStore::default();
    let id = store.set_with_ttl("refresh".to_string(), Duration::from_millis(200));

    for _ in 0..5 {
        sleep(Duration::from_millis(100)).await;
        assert_eq!(store.get(&id).as_deref(), Some("refresh"));
    }
}

#[tokio::test(start_paused = true)]
async fn test_entry_refresh_policy_reapplies_custom_ttl() {
    let config = ActionStoreConfig::default().with_refresh_ttl(RefreshTtl::Entry);
    let store: ActionStore<String> = ActionStore::new(config);
    let id = store.set_with_ttl("refresh".to_string(), Duration::from_millis(200));

    for _ in 0..5 {
        sleep(Duration::from_millis(100)).await;
        assert_eq!(store.get(&id).as_deref(), Some("refresh"));
    }

    // No lookups for longer than the TTL.
    sleep(Duration::from_millis(250)).await;
    assert_eq!(store.get(&id), None);
}

#[tokio::test(start_paused = true)]
async fn test_default_refresh_policy_extends_to_default_ttl() {
    let config = ActionStoreConfig::default().with_default_ttl_ms(1_000);
    let store: ActionStore<String> = ActionStore::new(config);

    let id = store.set_with_ttl("v".to_string(), Duration::from_millis(50));
    assert!(store.get(&id).is_some());

    sleep(Duration::from_millis(500)).await;
    assert!(store.get(&id).is_some());
}

#[tokio::test(start_paused = true)]
async fn test_capacity_is_never_exceeded() {
    let store = small_store(3);

    let ids: Vec<String> = (0..4).map(|i| store.set(format!("v{i}"))).collect();

    assert_eq!(store.len(), 3);
    assert_eq!(store.get(&ids[0]), None);
    assert_eq!(store.get(&ids[1]).as_deref(), Some("v1"));
    assert_eq!(store.get(&ids[2]).as_deref(), Some("v2"));
    assert_eq!(store.get(&ids[3]).as_deref(), Some("v3"));
}

#[tokio::test(start_paused = true)]
async fn test_eviction_removes_only_what_is_needed() {
    let store = small_store(5);
    let ids: Vec<String> = (0..12).map(|i| store.set(format!("v{i}"))).collect();

    assert_eq!(store.len(), 5);
    for evicted in &ids[..7] {
        assert_eq!(store.get(evicted), None);
    }
    for kept in &ids[7..] {
        assert!(store.get(kept).is_some());
    }
}

#[tokio::test(start_paused = true)]
async fn test_eviction_order_ignores_reads() {
    let store = small_store(2);
    let first = store.set("first".to_string());
    let second = store.set("second".to_string());

    // Reading refreshes expiry but does not change insertion order.
    assert!(store.get(&first).is_some());
    let third = store.set("third".to_string());

    assert_eq!(store.get(&first), None);
    assert!(store.get(&second).is_some());
    assert!(store.get(&third).is_some());
}

#[tokio::test(start_paused = true)]
async fn test_clear_removes_everything_and_cancels_timers() {
    let store: ActionStore<String> = ActionStore::default();
    let a = store.set_with_ttl("a".to_string(), Duration::from_secs(5));
    let b = store.set_with_ttl("b".to_string(), Duration::from_secs(5));

    store.clear();
    assert!(store.is_empty());

    sleep(Duration::from_millis(50)).await;
    assert_eq!(store.get(&a), None);
    assert_eq!(store.get(&b), None);

    // A fresh entry after clear is unaffected by the cancelled timers.
    let c = store.set("c".to_string());
    sleep(Duration::from_secs(6)).await;
    assert_eq!(store.get(&c).as_deref(), Some("c"));
}

#[tokio::test]
async fn test_clear_on_empty_store() {
    let store: ActionStore<String> = ActionStore::default();
    store.clear();
    assert!(store.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_clones_share_entries() {
    let store: ActionStore<Arc<String>> = ActionStore::default();
    let handle = store.clone();

    let id = store.set(Arc::new("shared".to_string()));
    assert_eq!(handle.get(&id).as_deref().map(String::as_str), Some("shared"));
    assert!(handle.delete(&id));
    assert!(store.is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_access_respects_capacity() {
    let store = small_store(50);

    let tasks: Vec<_> = (0..8)
        .map(|task| {
            let store = store.clone();
            tokio::spawn(async move {
                for i in 0..100 {
                    let id = store.set(format!("{task}-{i}"));
                    let _ = store.get(&id);
                    if i % 3 == 0 {
                        store.delete(&id);
                    }
                    assert!(store.len() <= 50);
                }
            })
        })
        .collect();

    for task in tasks {
        task.await.unwrap();
    }
    assert!(store.len() <= 50);
}

#[test]
fn test_config_defaults_from_empty_toml() {
    let config: ActionStoreConfig = toml::from_str("").unwrap();
    assert_eq!(config, ActionStoreConfig::default());
    assert_eq!(*config.capacity(), 10_000);
    assert_eq!(config.default_ttl(), Duration::from_secs(300));
    assert_eq!(*config.refresh_ttl(), RefreshTtl::Default);
}

#[test]
fn test_config_overrides_from_toml() {
    let config: ActionStoreConfig = toml::from_str(
        r#"
default_ttl_ms = 1500
capacity = 20
refresh_ttl = "entry"
"#,
    )
    .unwrap();
    assert_eq!(*config.default_ttl_ms(), 1500);
    assert_eq!(*config.capacity(), 20);
    assert_eq!(*config.refresh_ttl(), RefreshTtl::Entry);
}
