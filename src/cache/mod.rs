//! Capacity-bounded caches.
//!
//! Currently a single policy: strict least-recently-used eviction, see
//! [`LruCache`].

pub mod lru;

pub use lru::LruCache;
