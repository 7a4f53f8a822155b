// ==============================================
// THREAD SAFETY TESTS (integration)
// ==============================================
//
// The cache has no internal locking, but it must stay `Send + Sync` so
// callers can put it behind their own lock. Runs with and without the
// `metrics` feature.

use std::sync::{Arc, RwLock};

use mrucache::policy::mru::{FixedMruCache, MruCache};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn cache_types_are_send_and_sync() {
    assert_send_sync::<MruCache<u32, u32>>();
    assert_send_sync::<MruCache<String, Vec<u8>>>();
    assert_send_sync::<FixedMruCache<u32, u32, 4>>();
    assert_send_sync::<Arc<RwLock<MruCache<u32, u32>>>>();
}

#[test]
fn shared_behind_rwlock() {
    let cache = Arc::new(RwLock::new(MruCache::<u32, u32>::new(2)));

    std::thread::scope(|s| {
        for t in 0..4u32 {
            let cache = Arc::clone(&cache);
            s.spawn(move || {
                for i in 0..100 {
                    cache.write().unwrap().insert(t * 1_000 + i, i);
                    let guard = cache.read().unwrap();
                    assert!(guard.len() <= guard.capacity());
                    let _ = guard.peek_mru();
                    let _ = guard.recency_rank(&(t * 1_000 + i));
                }
            });
        }
    });

    let guard = cache.read().unwrap();
    assert_eq!(guard.len(), 2);
    assert!(guard.check_invariants().is_ok());
}
