#![no_main]

use boundkit::cache::LruCache;
use libfuzzer_sys::fuzz_target;

// Fuzz arbitrary operation sequences on LruCache
//
// Random put/get/contains/delete/clear sequences over a small key space to
// hit the reinsertion and eviction paths hard. The cache's own debug
// invariant walk runs inside every mutating call; this target adds the
// externally observable bounds.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let capacity = (data[0] as usize % 16).max(1);
    let mut cache: LruCache<u8, u32> = LruCache::new(capacity).unwrap();

    let mut idx = 1;
    while idx + 1 < data.len() {
        let op = data[idx] % 5;
        let key = data[idx + 1] % 24;

        match op {
            0 => {
                let evicted = cache.put(key, u32::from(key));
                if let Some((victim, _)) = evicted {
                    assert!(!cache.contains(&victim));
                }
            }
            1 => {
                let present = cache.contains(&key);
                assert_eq!(cache.get(&key).is_ok(), present);
                if present {
                    // Promoted entry must not be the eviction victim while
                    // the cache holds more than one entry.
                    if cache.len() > 1 {
                        assert_ne!(cache.peek_lru().map(|(k, _)| *k), Some(key));
                    }
                }
            }
            2 => {
                let _ = cache.contains(&key);
            }
            3 => {
                let present = cache.contains(&key);
                assert_eq!(cache.delete(&key).is_ok(), present);
                assert!(!cache.contains(&key));
            }
            _ => {
                cache.clear();
                assert!(cache.is_empty());
            }
        }

        assert!(cache.len() <= cache.capacity());
        assert_eq!(cache.items().count(), cache.len());
        idx += 2;
    }
});
