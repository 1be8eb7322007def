//! # Least Recently Used (LRU) cache
//!
//! Capacity-bounded associative cache with strict recency eviction. All hot
//! paths are O(1) expected time.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────────┐
//!   │                          LruCache<K, V>                              │
//!   │                                                                      │
//!   │   ┌──────────────────────────────────────────────────────────────┐   │
//!   │   │  FxHashMap<K, SlotId>  (key -> node handle)                  │   │
//!   │   └───────────────────────────────┬──────────────────────────────┘   │
//!   │                                   │                                  │
//!   │   ┌───────────────────────────────▼──────────────────────────────┐   │
//!   │   │  SlotArena<Node<K, V>>  (owns every node)                    │   │
//!   │   │                                                              │   │
//!   │   │  first ──► [n0] ◄──► [n1] ◄──► [n2] ◄── last                 │   │
//!   │   │           (LRU)   SlotId links only   (MRU)                  │   │
//!   │   └──────────────────────────────────────────────────────────────┘   │
//!   └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Operations
//!
//! | Method       | Complexity | Description                                |
//! |--------------|------------|--------------------------------------------|
//! | `new(cap)`   | O(1)       | Fallible constructor, capacity >= 1        |
//! | `put(k, v)`  | O(1)*      | Insert/overwrite at MRU, may evict one LRU |
//! | `get(&k)`    | O(1)*      | Read **and** promote to MRU                |
//! | `contains`   | O(1)*      | Pure membership, no recency side effect    |
//! | `delete(&k)` | O(1)*      | Remove by key, splicing neighbors          |
//! | `peek_lru()` | O(1)       | Next eviction victim, read-only            |
//! | `items()`    | O(len)     | Map-native order, **not** recency order    |
//!
//! (*expected, hash-map lookup)
//!
//! ## Design Rationale
//!
//! - **Arena handles, not pointers**: the recency list is threaded through
//!   [`SlotId`] links held inside each node. The arena owns every node; the
//!   links are index relations only, so the whole cache is safe Rust with no
//!   ownership cycles.
//! - **Unified read-promote**: `get` promotes through the exact reinsertion
//!   path `put` uses — the touched entry is unlinked and a fresh node is
//!   appended at the MRU end. Reading is deliberately not side-effect-free.
//! - **Recency has no ties**: promotion is an append-only list discipline,
//!   not a timestamp, so no two entries can share a recency position.
//!
//! ## Thread safety
//!
//! Not thread-safe. Single-threaded by design; wrap in a lock for shared use.

use std::fmt;
use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::ds::{SlotArena, SlotId};
use crate::error::{ConfigError, KeyNotFoundError};
use crate::traits::Cache;

/// Node in the recency list.
///
/// Owns one key-value pair; `prev`/`next` are list membership relations, not
/// ownership. The arena owns all nodes.
struct Node<K, V> {
    prev: Option<SlotId>,
    next: Option<SlotId>,
    key: K,
    value: V,
}

/// Fixed-capacity cache with least-recently-used eviction.
///
/// # Example
///
/// ```
/// use boundkit::cache::LruCache;
///
/// let mut cache = LruCache::new(2).unwrap();
/// cache.put(1, "one");
/// cache.put(2, "two");
/// cache.get(&1).unwrap();     // promotes key 1
/// cache.put(3, "three");      // evicts key 2, the least recently used
///
/// assert!(cache.contains(&1));
/// assert!(!cache.contains(&2));
/// assert!(cache.contains(&3));
/// ```
pub struct LruCache<K, V> {
    map: FxHashMap<K, SlotId>,
    nodes: SlotArena<Node<K, V>>,
    /// Least recently used end; evicted first.
    first: Option<SlotId>,
    /// Most recently used end; promotions append here.
    last: Option<SlotId>,
    capacity: usize,
}

impl<K, V> LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates a cache holding at most `capacity` entries.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, ConfigError> {
        if capacity < 1 {
            return Err(ConfigError::new("cache capacity must be > 0"));
        }
        Ok(Self {
            map: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            nodes: SlotArena::with_capacity(capacity),
            first: None,
            last: None,
            capacity,
        })
    }

    /// Returns the number of live entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the cache holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns the configured maximum entry count.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Pure membership test. O(1) expected, no recency side effect.
    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    /// Detach a node from the recency list without touching the arena.
    fn unlink(&mut self, id: SlotId) {
        let (prev, next) = {
            let node = self.nodes.get(id).expect("unlink of missing node");
            (node.prev, node.next)
        };

        match prev {
            Some(p) => self.nodes.get_mut(p).expect("broken prev link").next = next,
            None => self.first = next,
        }
        match next {
            Some(n) => self.nodes.get_mut(n).expect("broken next link").prev = prev,
            None => self.last = prev,
        }
    }

    /// Create a node for `(key, value)` at the MRU end and index it.
    ///
    /// The map entry for `key` is inserted or overwritten.
    fn append_node(&mut self, key: K, value: V) -> SlotId {
        let id = self.nodes.insert(Node {
            prev: self.last,
            next: None,
            key: key.clone(),
            value,
        });

        match self.last {
            Some(tail) => self.nodes.get_mut(tail).expect("broken tail link").next = Some(id),
            None => self.first = Some(id),
        }
        self.last = Some(id);
        self.map.insert(key, id);
        id
    }

    /// Remove the least recently used entry, returning its pair.
    fn evict_first(&mut self) -> Option<(K, V)> {
        let victim = self.first?;
        self.unlink(victim);
        let node = self.nodes.remove(victim).expect("victim missing from arena");
        self.map.remove(&node.key);
        Some((node.key, node.value))
    }

    /// Inserts `(key, value)` as the most recently used entry.
    ///
    /// An existing entry for `key` is removed first — it loses its old
    /// position and a fresh node is appended at the MRU end (deliberate
    /// reinsertion rather than in-place relocation). If the insertion pushes
    /// the cache past capacity, the single least-recently-used entry is
    /// evicted and returned; at most one entry is evicted per call.
    ///
    /// # Example
    ///
    /// ```
    /// use boundkit::cache::LruCache;
    ///
    /// let mut cache = LruCache::new(1).unwrap();
    /// assert_eq!(cache.put(0, 42), None);
    /// assert_eq!(cache.put(1, 43), Some((0, 42))); // capacity 1: 0 evicted
    /// assert_eq!(cache.len(), 1);
    /// ```
    pub fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        if let Some(&id) = self.map.get(&key) {
            self.unlink(id);
            let node = self.nodes.remove(id).expect("indexed node missing");
            self.map.remove(&node.key);
        }

        self.append_node(key, value);

        let evicted = if self.map.len() > self.capacity {
            self.evict_first()
        } else {
            None
        };

        #[cfg(debug_assertions)]
        self.validate_invariants();
        evicted
    }

    /// Returns the value for `key`, promoting the entry to most recently
    /// used.
    ///
    /// Promotion goes through the same reinsertion path as [`put`]: the
    /// entry is unlinked and a fresh node is appended at the MRU end.
    /// Reading therefore changes recency, exactly as a write would.
    ///
    /// # Errors
    ///
    /// Returns [`KeyNotFoundError`] if `key` is absent.
    ///
    /// [`put`]: LruCache::put
    pub fn get(&mut self, key: &K) -> Result<&V, KeyNotFoundError> {
        let &id = self.map.get(key).ok_or(KeyNotFoundError)?;

        self.unlink(id);
        let node = self.nodes.remove(id).expect("indexed node missing");
        let new_id = self.append_node(node.key, node.value);

        #[cfg(debug_assertions)]
        self.validate_invariants();

        Ok(&self.nodes.get(new_id).expect("node just appended").value)
    }

    /// Removes the entry for `key`, splicing its list neighbors together.
    ///
    /// # Errors
    ///
    /// Returns [`KeyNotFoundError`] if `key` is absent. Deletion is a
    /// fallible operation here; callers that can guarantee presence may
    /// simply unwrap elsewhere.
    pub fn delete(&mut self, key: &K) -> Result<V, KeyNotFoundError> {
        let id = self.map.remove(key).ok_or(KeyNotFoundError)?;
        self.unlink(id);
        let node = self.nodes.remove(id).expect("indexed node missing");

        #[cfg(debug_assertions)]
        self.validate_invariants();
        Ok(node.value)
    }

    /// Removes all entries. The configured capacity is retained, so the
    /// cache remains usable for further `put`s.
    pub fn clear(&mut self) {
        self.map.clear();
        self.nodes.clear();
        self.first = None;
        self.last = None;
    }

    /// Read-only view of the least recently used entry — the next eviction
    /// victim. `None` when the cache is empty.
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        let node = self.nodes.get(self.first?)?;
        Some((&node.key, &node.value))
    }

    /// Iterates over all live `(key, value)` pairs.
    ///
    /// Enumeration order is the lookup structure's native order, **not**
    /// recency order — this is an explicit non-guarantee.
    pub fn items(&self) -> impl Iterator<Item = (&K, &V)> {
        self.map.iter().map(|(key, &id)| {
            let node = self.nodes.get(id).expect("indexed node missing");
            (key, &node.value)
        })
    }

    /// Walks the recency list both ways and cross-checks the index.
    #[cfg(any(test, debug_assertions))]
    pub(crate) fn validate_invariants(&self) {
        assert!(self.map.len() <= self.capacity);
        assert_eq!(self.map.len(), self.nodes.len());

        if self.map.is_empty() {
            assert!(self.first.is_none());
            assert!(self.last.is_none());
            return;
        }

        // Forward walk from the LRU end.
        let mut count = 0usize;
        let mut cursor = self.first;
        let mut prev: Option<SlotId> = None;
        while let Some(id) = cursor {
            let node = self.nodes.get(id).expect("list references missing node");
            assert_eq!(node.prev, prev, "prev link out of sync");
            assert_eq!(
                self.map.get(&node.key).copied(),
                Some(id),
                "map entry does not point at list node"
            );
            count += 1;
            assert!(count <= self.map.len(), "cycle in recency list");
            prev = cursor;
            cursor = node.next;
        }
        assert_eq!(count, self.map.len());
        assert_eq!(prev, self.last, "tail cursor out of sync");
    }
}

impl<K, V> Cache<K, V> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        LruCache::put(self, key, value)
    }

    fn get(&mut self, key: &K) -> Result<&V, KeyNotFoundError> {
        LruCache::get(self, key)
    }

    fn contains(&self, key: &K) -> bool {
        LruCache::contains(self, key)
    }

    fn delete(&mut self, key: &K) -> Result<V, KeyNotFoundError> {
        LruCache::delete(self, key)
    }

    fn clear(&mut self) {
        LruCache::clear(self)
    }

    fn len(&self) -> usize {
        LruCache::len(self)
    }

    fn capacity(&self) -> usize {
        LruCache::capacity(self)
    }
}

impl<K, V> fmt::Debug for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .finish_non_exhaustive()
    }
}

impl<K, V> Extend<(K, V)> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}
