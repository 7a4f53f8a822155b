#![no_main]

use libfuzzer_sys::fuzz_target;
use mrucache::policy::mru::MruCache;

// Fuzz arbitrary operation sequences on MruCache against a Vec model
//
// The model keeps entries ordered least recent first; the cache must agree
// on every return value and on the full recency order after each step.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let capacity = (data[0] as usize % 16) + 1;
    let mut cache: MruCache<u8, u8> = MruCache::new(capacity);
    let mut model: Vec<(u8, u8)> = Vec::new();

    for chunk in data[1..].chunks_exact(2) {
        let op = chunk[0] % 8;
        let key = chunk[1] % 32;
        let value = chunk[0];

        match op {
            0 | 1 => {
                // insert
                let expected = match model.iter().position(|(k, _)| *k == key) {
                    Some(pos) => {
                        let (_, old) = model.remove(pos);
                        Some(old)
                    },
                    None => {
                        if model.len() >= capacity {
                            model.pop();
                        }
                        None
                    },
                };
                model.push((key, value));
                assert_eq!(cache.insert(key, value), expected);
            },
            2 => {
                // try_get
                let expected = model.iter().position(|(k, _)| *k == key).map(|pos| {
                    let entry = model.remove(pos);
                    model.push(entry);
                    entry.1
                });
                assert_eq!(cache.try_get(&key).copied(), expected);
            },
            3 => {
                // get (Result form)
                let hit = model.iter().any(|(k, _)| *k == key);
                assert_eq!(cache.get(&key).is_ok(), hit);
                if let Some(pos) = model.iter().position(|(k, _)| *k == key) {
                    let entry = model.remove(pos);
                    model.push(entry);
                }
            },
            4 => {
                // remove
                let expected = model
                    .iter()
                    .position(|(k, _)| *k == key)
                    .map(|pos| model.remove(pos).1);
                assert_eq!(cache.remove(&key), expected);
            },
            5 => {
                // peek / contains (read-only)
                let expected = model.iter().find(|(k, _)| *k == key).map(|(_, v)| v);
                assert_eq!(cache.peek(&key), expected);
                assert_eq!(cache.contains(&key), expected.is_some());
            },
            6 => {
                // pop_mru
                assert_eq!(cache.pop_mru(), model.pop());
            },
            7 => {
                // clear (rare)
                if value % 16 == 0 {
                    cache.clear();
                    model.clear();
                }
            },
            _ => unreachable!(),
        }

        assert_eq!(cache.len(), model.len());
        assert!(cache.len() <= capacity);
        assert!(cache.check_invariants().is_ok());
        assert!(cache.iter().map(|(k, v)| (*k, *v)).eq(model.iter().copied()));
    }
});
