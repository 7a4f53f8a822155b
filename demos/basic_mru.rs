//! Example demonstrating the MRU (Most Recently Used) cache.
//!
//! MRU evicts the **most** recently accessed item when capacity is reached.
//! This is the opposite of LRU and suits cyclic or scan-heavy access patterns.
//!
//! Run with: cargo run --example basic_mru

use mrucache::error::CacheError;
use mrucache::policy::mru::MruCache;

fn main() {
    println!("=== MRU Cache Example ===\n");

    let mut cache = MruCache::new(5);
    println!("Created MRU cache: capacity={}\n", cache.capacity());

    for i in 1..=5 {
        cache.insert(i, format!("value-{}", i));
    }
    println!("Inserted keys 1-5");
    println!("  len: {}", cache.len());

    // A hit makes key 3 the next victim
    let _ = cache.get(&3);
    println!("\nAccessed key 3 (now most recent)");

    cache.insert(6, "value-6".to_string());
    println!("Inserted key 6");

    println!("\nAfter inserting key 6:");
    println!(
        "  contains 3? {} (was most recent, got evicted)",
        cache.contains(&3)
    );
    println!("  contains 5? {} (older than 3, kept)", cache.contains(&5));
    println!("  contains 6? {} (newly inserted)", cache.contains(&6));
    println!("  len: {}", cache.len());

    print!("  recency order (least to most recent):");
    for (key, _) in cache.iter() {
        print!(" {}", key);
    }
    println!();

    println!("\n=== Lookups ===\n");

    match cache.get(&42) {
        Ok(value) => println!("  42 -> {}", value),
        Err(CacheError::KeyNotFound) => println!("  get(42): key not found"),
        Err(e) => println!("  get(42): {}", e),
    }
    println!("  try_get(42): {:?}", cache.try_get(&42));
    println!(
        "  peek(1): {:?} (does not change recency)",
        cache.peek(&1)
    );

    println!("\n=== Cyclic Pattern Demo ===\n");

    let mut cache = MruCache::new(3);
    println!("Scanning pages 0..10 twice through a cache of 3\n");

    let mut hits = 0;
    for _pass in 0..2 {
        for page in 0..10 {
            if cache.try_get(&page).is_some() {
                hits += 1;
            } else {
                cache.insert(page, format!("page-{}", page));
            }
        }
    }
    println!("  hits on second pass: {}", hits);
    print!("  resident pages:");
    for key in cache.keys() {
        print!(" {}", key);
    }
    println!();
    println!("\nAn LRU cache of the same size would score zero hits on this scan.");
}
