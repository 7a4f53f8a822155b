#![no_main]

use libfuzzer_sys::fuzz_target;
use mrucache::policy::mru::MruCache;

// Fuzz eviction victim selection
//
// Fills the cache, applies a fuzzer-chosen touch sequence, then inserts a
// fresh key. The victim must be the last key touched and nothing else may
// leave the cache.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let capacity = (data[0] as usize % 32) + 1;
    let mut cache: MruCache<u16, ()> = MruCache::new(capacity);
    for k in 0..capacity as u16 {
        cache.insert(k, ());
    }

    let mut last = capacity as u16 - 1;
    for &b in &data[1..] {
        let key = u16::from(b) % capacity as u16;
        if b & 1 == 0 {
            assert!(cache.touch(&key));
        } else {
            assert!(cache.try_get(&key).is_some());
        }
        last = key;
        assert_eq!(cache.recency_rank(&key), Some(0));
    }

    assert_eq!(cache.peek_mru().map(|(k, _)| *k), Some(last));
    cache.insert(u16::MAX, ());

    assert!(!cache.contains(&last));
    assert!(cache.contains(&u16::MAX));
    assert_eq!(cache.len(), capacity);
    for k in (0..capacity as u16).filter(|k| *k != last) {
        assert!(cache.contains(&k));
    }
});
