// ==============================================
// CROSS-CONTAINER INVARIANT TESTS (integration)
// ==============================================
//
// Properties that span the public surface of the crate: capacity bounds
// under arbitrary operation sequences, recency semantics observed end to
// end, and the set algebra laws. Single-file edge cases live in the
// per-module unit tests; these suites exercise whole-container behavior.

use boundkit::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

// ==============================================
// Ring buffer: capacity bound and FIFO order
// ==============================================

mod ring_buffer {
    use super::*;

    #[test]
    fn len_never_exceeds_capacity_under_random_pushes() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for capacity in [1usize, 2, 3, 7, 64] {
            let mut buffer = RingBuffer::new(capacity).unwrap();
            for _ in 0..1_000 {
                buffer.push(rng.gen::<u32>());
                assert!(buffer.len() <= buffer.capacity());
            }
            assert!(buffer.is_full());
        }
    }

    #[test]
    fn full_buffer_matches_sliding_window_model() {
        // Model: a VecDeque capped at `capacity` holding the most recent
        // pushes in arrival order.
        let mut rng = StdRng::seed_from_u64(42);
        let capacity = 8;
        let mut buffer = RingBuffer::new(capacity).unwrap();
        let mut model: VecDeque<u16> = VecDeque::new();

        for _ in 0..500 {
            let value = rng.gen::<u16>();
            let displaced = buffer.push(value);
            model.push_back(value);
            if model.len() > capacity {
                assert_eq!(displaced, model.pop_front());
            } else {
                assert_eq!(displaced, None);
            }
            assert_eq!(buffer.to_vec(), model.iter().copied().collect::<Vec<_>>());
        }
    }

    #[test]
    fn mixed_push_pop_keeps_fifo_order() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut buffer = RingBuffer::new(5).unwrap();
        let mut model: VecDeque<u32> = VecDeque::new();

        for step in 0..2_000u32 {
            if rng.gen_bool(0.6) || model.is_empty() {
                buffer.push(step);
                model.push_back(step);
                if model.len() > 5 {
                    model.pop_front();
                }
            } else {
                assert_eq!(buffer.pop().ok(), model.pop_front());
            }
            assert_eq!(buffer.len(), model.len());
            assert_eq!(buffer.first().ok(), model.front());
        }
    }

    #[test]
    fn to_vec_agrees_with_indexing_and_iteration() {
        let mut buffer = RingBuffer::new(3).unwrap();
        for item in [1, 2, 3, 4] {
            buffer.push(item);
        }

        let snapshot = buffer.to_vec();
        assert_eq!(snapshot.len(), buffer.len());
        for (index, item) in snapshot.iter().enumerate() {
            assert_eq!(&buffer[index], item);
        }
        let iterated: Vec<_> = buffer.iter().copied().collect();
        assert_eq!(iterated, snapshot);
    }

    #[test]
    fn empty_buffer_errors_for_any_capacity() {
        for capacity in [1usize, 2, 100] {
            let mut buffer: RingBuffer<i32> = RingBuffer::new(capacity).unwrap();
            assert_eq!(buffer.first(), Err(RingError::Empty));
            assert_eq!(buffer.pop(), Err(RingError::Empty));
        }
    }
}

// ==============================================
// LRU cache: recency semantics end to end
// ==============================================

mod lru_cache {
    use super::*;

    #[test]
    fn capacity_one_holds_only_latest_put() {
        let mut cache = LruCache::new(1).unwrap();
        cache.put(0, 42);
        cache.put(1, 43);

        assert!(!cache.contains(&0));
        assert!(cache.contains(&1));
        let items: Vec<_> = cache.items().map(|(k, v)| (*k, *v)).collect();
        assert_eq!(items, vec![(1, 43)]);
    }

    #[test]
    fn read_promotes_exactly_like_a_write() {
        let mut cache = LruCache::new(2).unwrap();
        cache.put(0, 42);
        cache.put(1, 43);
        assert_eq!(cache.get(&0), Ok(&42));
        cache.put(2, 44);

        assert!(cache.contains(&0));
        assert!(!cache.contains(&1));
        assert!(cache.contains(&2));
    }

    #[test]
    fn eviction_matches_recency_model_under_churn() {
        // Model recency with a VecDeque of keys, LRU at the front. A put or
        // get of an existing key removes it and re-appends at the back,
        // which is exactly the cache's reinsertion discipline.
        let mut rng = StdRng::seed_from_u64(99);
        let capacity = 6;
        let mut cache = LruCache::new(capacity).unwrap();
        let mut order: VecDeque<u8> = VecDeque::new();

        for _ in 0..3_000 {
            let key = rng.gen_range(0u8..16);
            if rng.gen_bool(0.5) {
                cache.put(key, u32::from(key));
                order.retain(|k| *k != key);
                order.push_back(key);
                if order.len() > capacity {
                    order.pop_front();
                }
            } else if cache.contains(&key) {
                assert_eq!(cache.get(&key), Ok(&u32::from(key)));
                order.retain(|k| *k != key);
                order.push_back(key);
            } else {
                assert_eq!(cache.get(&key), Err(KeyNotFoundError));
            }

            assert_eq!(cache.len(), order.len());
            assert_eq!(cache.peek_lru().map(|(k, _)| *k), order.front().copied());
        }
    }

    #[test]
    fn len_is_bounded_and_misses_are_clean() {
        let mut cache = LruCache::new(4).unwrap();
        for key in 0..1_000u32 {
            cache.put(key, key * 2);
            assert!(cache.len() <= cache.capacity());
        }
        assert_eq!(cache.get(&0), Err(KeyNotFoundError));
        assert_eq!(cache.len(), 4);
    }

    #[test]
    fn trait_object_surface_works() {
        fn churn(cache: &mut dyn Cache<u32, u32>) {
            for key in 0..10 {
                cache.put(key, key);
            }
        }

        let mut cache = LruCache::new(3).unwrap();
        churn(&mut cache);
        assert_eq!(cache.len(), 3);
        assert!(cache.contains(&9));
    }
}

// ==============================================
// Set algebra laws
// ==============================================

mod set_algebra {
    use super::*;

    fn random_set(rng: &mut StdRng, max: u8) -> BasicSet<u8> {
        let size = rng.gen_range(0..20);
        (0..size).map(|_| rng.gen_range(0..max)).collect()
    }

    #[test]
    fn union_and_intersection_commute() {
        let mut rng = StdRng::seed_from_u64(1234);
        for _ in 0..100 {
            let a = random_set(&mut rng, 32);
            let b = random_set(&mut rng, 32);
            assert_eq!(a.union(&b), b.union(&a));
            assert_eq!(a.intersection(&b), b.intersection(&a));
        }
    }

    #[test]
    fn difference_with_self_is_empty() {
        let mut rng = StdRng::seed_from_u64(5678);
        for _ in 0..100 {
            let a = random_set(&mut rng, 32);
            assert!(a.difference(&a).is_empty());
        }
    }

    #[test]
    fn union_with_empty_is_identity() {
        let mut rng = StdRng::seed_from_u64(4242);
        let empty = BasicSet::new();
        for _ in 0..100 {
            let a = random_set(&mut rng, 32);
            assert_eq!(a.union(&empty), a);
        }
    }

    #[test]
    fn insertion_order_never_affects_membership_or_equality() {
        let forward: BasicSet<u32> = (0..100).collect();
        let shuffled: BasicSet<u32> = (0..100).rev().collect();

        assert_eq!(forward, shuffled);
        for item in 0..100 {
            assert_eq!(forward.contains(&item), shuffled.contains(&item));
        }
    }

    #[test]
    fn algebra_never_mutates_operands() {
        let a: BasicSet<i32> = [1, 2, 3].into_iter().collect();
        let b: BasicSet<i32> = [3, 4].into_iter().collect();
        let (a_before, b_before) = (a.clone(), b.clone());

        let _ = a.union(&b);
        let _ = a.intersection(&b);
        let _ = a.difference(&b);

        assert_eq!(a, a_before);
        assert_eq!(b, b_before);
    }
}
