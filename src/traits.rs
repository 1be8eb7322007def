//! # Container trait seams
//!
//! Contracts for the two containers that have external collaborator
//! interfaces: the cache and the set. Generic code programs against these
//! traits instead of concrete types.
//!
//! ## Trait Summary
//!
//! | Trait        | Implemented by | Purpose                                  |
//! |--------------|----------------|------------------------------------------|
//! | `Cache`      | [`LruCache`]   | Bounded associative store with eviction  |
//! | `SetOps`     | [`BasicSet`]   | Membership plus set algebra              |
//!
//! [`LruCache`]: crate::cache::LruCache
//! [`BasicSet`]: crate::set::BasicSet

use crate::error::KeyNotFoundError;

/// Bounded associative cache contract.
///
/// Implementations decide the eviction policy; the contract only requires
/// that `len() <= capacity()` holds at every observation point and that a
/// failed operation leaves the cache unchanged.
///
/// # Example
///
/// ```
/// use boundkit::cache::LruCache;
/// use boundkit::traits::Cache;
///
/// fn warm<C: Cache<u64, String>>(cache: &mut C, rows: &[(u64, String)]) {
///     for (key, value) in rows {
///         cache.put(*key, value.clone());
///     }
/// }
///
/// let mut cache = LruCache::new(16).unwrap();
/// warm(&mut cache, &[(1, "one".into()), (2, "two".into())]);
/// assert_eq!(cache.len(), 2);
/// ```
pub trait Cache<K, V> {
    /// Inserts a key-value pair as the most eviction-protected entry,
    /// returning the pair evicted to make room, if any.
    fn put(&mut self, key: K, value: V) -> Option<(K, V)>;

    /// Returns the value for `key`. May update eviction-relevant state;
    /// use [`contains`](Self::contains) for a side-effect-free probe.
    fn get(&mut self, key: &K) -> Result<&V, KeyNotFoundError>;

    /// Membership test with no side effects.
    fn contains(&self, key: &K) -> bool;

    /// Removes the entry for `key`, returning its value.
    fn delete(&mut self, key: &K) -> Result<V, KeyNotFoundError>;

    /// Removes all entries; capacity is unchanged.
    fn clear(&mut self);

    /// Number of live entries.
    fn len(&self) -> usize;

    /// Returns `true` if the cache holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Configured maximum entry count.
    fn capacity(&self) -> usize;
}

/// Unordered unique-element collection with algebraic operations.
///
/// All algebra methods return a **new** set; the operands are never
/// modified.
///
/// # Example
///
/// ```
/// use boundkit::set::BasicSet;
/// use boundkit::traits::SetOps;
///
/// let evens: BasicSet<i32> = [2, 4, 6].into_iter().collect();
/// let small: BasicSet<i32> = [1, 2, 3].into_iter().collect();
///
/// let both = evens.intersection(&small);
/// assert!(both.contains(&2));
/// assert_eq!(both.len(), 1);
/// ```
pub trait SetOps<T> {
    /// Adds `item`; idempotent. Returns `true` if the set changed.
    fn insert(&mut self, item: T) -> bool;

    /// Removes `item`. Returns `true` if an element was actually removed.
    fn remove(&mut self, item: &T) -> bool;

    /// Membership test.
    fn contains(&self, item: &T) -> bool;

    /// Removes all elements.
    fn clear(&mut self);

    /// Number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the set holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Elements in `self` or `other` (or both).
    fn union(&self, other: &Self) -> Self;

    /// Elements in both `self` and `other`.
    fn intersection(&self, other: &Self) -> Self;

    /// Elements in `self` that are not in `other`.
    fn difference(&self, other: &Self) -> Self;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::LruCache;
    use crate::set::BasicSet;

    fn drain_lru<C: Cache<u32, u32>>(cache: &mut C) -> usize {
        let before = cache.len();
        cache.clear();
        before
    }

    #[test]
    fn cache_trait_is_object_safe_enough_for_generics() {
        let mut cache = LruCache::new(4).unwrap();
        cache.put(1, 10);
        cache.put(2, 20);
        assert_eq!(drain_lru(&mut cache), 2);
        assert!(Cache::is_empty(&cache));
    }

    #[test]
    fn set_ops_usable_through_trait_bound() {
        fn symmetric_size<S: SetOps<i32>>(a: &S, b: &S) -> usize {
            a.difference(b).len() + b.difference(a).len()
        }

        let a: BasicSet<i32> = [1, 2, 3].into_iter().collect();
        let b: BasicSet<i32> = [3, 4].into_iter().collect();
        assert_eq!(symmetric_size(&a, &b), 3);
    }
}
