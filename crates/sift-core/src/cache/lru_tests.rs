use super::error::CacheError;
use super::lru::ScoreCache;
use super::types::CacheOutcome;
use crate::hashing::key_for;
use std::sync::Arc;

fn key(text: &str) -> [u8; 32] {
    key_for(text)
}

#[test]
fn test_cache_outcome_header_values() {
    assert_eq!(CacheOutcome::Hit.as_header_value(), "HIT");
    assert_eq!(CacheOutcome::Partial.as_header_value(), "PARTIAL");
    assert_eq!(CacheOutcome::Miss.as_header_value(), "MISS");
}

#[test]
fn test_cache_outcome_from_counts() {
    assert_eq!(CacheOutcome::from_counts(3, 0), CacheOutcome::Hit);
    assert_eq!(CacheOutcome::from_counts(0, 3), CacheOutcome::Miss);
    assert_eq!(CacheOutcome::from_counts(2, 1), CacheOutcome::Partial);
    assert_eq!(CacheOutcome::from_counts(0, 0), CacheOutcome::Hit);
}

#[test]
fn test_cache_outcome_is_hit() {
    assert!(CacheOutcome::Hit.is_hit());
    assert!(CacheOutcome::Partial.is_hit());
    assert!(!CacheOutcome::Miss.is_hit());
}

#[test]
fn test_cache_outcome_display() {
    assert_eq!(format!("{}", CacheOutcome::Partial), "PARTIAL");
}

#[test]
fn test_zero_capacity_rejected() {
    let err = ScoreCache::new(0).expect_err("zero capacity must fail");
    assert!(matches!(err, CacheError::InvalidCapacity { value: 0 }));
}

#[test]
fn test_new_cache_is_empty() {
    let cache = ScoreCache::new(16).expect("valid capacity");
    assert!(cache.is_empty());
    assert_eq!(cache.len(), 0);
    assert_eq!(cache.capacity(), 16);
}

#[test]
fn test_set_and_get() {
    let cache = ScoreCache::new(16).expect("valid capacity");
    cache.set(key("a"), 0.42);

    assert_eq!(cache.len(), 1);
    assert_eq!(cache.get(&key("a")), Some(0.42));
}

#[test]
fn test_get_miss() {
    let cache = ScoreCache::new(16).expect("valid capacity");
    assert_eq!(cache.get(&key("missing")), None);
    assert!(cache.is_empty());
}

#[test]
fn test_set_overwrites_value() {
    let cache = ScoreCache::new(16).expect("valid capacity");
    cache.set(key("a"), 0.1);
    cache.set(key("a"), 0.9);

    assert_eq!(cache.len(), 1);
    assert_eq!(cache.get(&key("a")), Some(0.9));
}

#[test]
fn test_capacity_invariant_under_many_sets() {
    let cache = ScoreCache::new(8).expect("valid capacity");
    for i in 0..100 {
        cache.set(key(&format!("text-{i}")), (i % 10) as f32 / 10.0);
        assert!(cache.len() <= 8);
    }
    assert_eq!(cache.len(), 8);
}

#[test]
fn test_lru_eviction_order_is_insertion_order_without_reads() {
    let cache = ScoreCache::new(3).expect("valid capacity");
    cache.set(key("a"), 0.1);
    cache.set(key("b"), 0.2);
    cache.set(key("c"), 0.3);

    // Fourth insert evicts exactly the first-inserted entry.
    cache.set(key("d"), 0.4);

    assert!(!cache.contains(&key("a")));
    assert!(cache.contains(&key("b")));
    assert!(cache.contains(&key("c")));
    assert!(cache.contains(&key("d")));
}

#[test]
fn test_read_protects_from_eviction() {
    let cache = ScoreCache::new(2).expect("valid capacity");
    cache.set(key("a"), 0.1);
    cache.set(key("b"), 0.2);

    assert_eq!(cache.get(&key("a")), Some(0.1));
    cache.set(key("c"), 0.3);

    // `b` became the least recently used once `a` was re-touched.
    assert_eq!(cache.get(&key("a")), Some(0.1));
    assert_eq!(cache.get(&key("c")), Some(0.3));
    assert_eq!(cache.get(&key("b")), None);
    assert_eq!(cache.len(), 2);
}

#[test]
fn test_overwrite_refreshes_recency() {
    let cache = ScoreCache::new(2).expect("valid capacity");
    cache.set(key("a"), 0.1);
    cache.set(key("b"), 0.2);
    cache.set(key("a"), 0.15);
    cache.set(key("c"), 0.3);

    assert!(cache.contains(&key("a")));
    assert!(!cache.contains(&key("b")));
    assert!(cache.contains(&key("c")));
}

#[test]
fn test_new_entry_never_evicted_immediately() {
    let cache = ScoreCache::new(1).expect("valid capacity");
    cache.set(key("a"), 0.1);
    cache.set(key("b"), 0.2);

    assert_eq!(cache.get(&key("b")), Some(0.2));
    assert_eq!(cache.get(&key("a")), None);
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_contains_does_not_touch_recency() {
    let cache = ScoreCache::new(2).expect("valid capacity");
    cache.set(key("a"), 0.1);
    cache.set(key("b"), 0.2);

    // A contains() probe must not protect `a` the way get() would.
    assert!(cache.contains(&key("a")));
    cache.set(key("c"), 0.3);

    assert!(!cache.contains(&key("a")));
    assert!(cache.contains(&key("b")));
}

#[test]
fn test_slots_are_reused_after_eviction() {
    let cache = ScoreCache::new(4).expect("valid capacity");
    for round in 0..10 {
        for i in 0..4 {
            cache.set(key(&format!("round-{round}-{i}")), 0.5);
        }
    }
    assert_eq!(cache.len(), 4);
    assert_eq!(cache.get(&key("round-9-3")), Some(0.5));
}

#[test]
fn test_concurrent_access() {
    let cache = Arc::new(ScoreCache::new(64).expect("valid capacity"));
    let mut handles = Vec::new();

    for t in 0..8 {
        let cache = Arc::clone(&cache);
        handles.push(std::thread::spawn(move || {
            for i in 0..500 {
                let k = key(&format!("thread-{t}-{}", i % 32));
                cache.set(k, 0.5);
                let _ = cache.get(&k);
            }
        }));
    }

    for handle in handles {
        handle.join().expect("worker thread panicked");
    }
    assert!(cache.len() <= 64);
}
