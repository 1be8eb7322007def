//! boundkit: fixed-capacity in-memory containers.
//!
//! Three independent, single-threaded containers with hard capacity bounds:
//!
//! - [`RingBuffer`](ds::RingBuffer): circular buffer that overwrites the
//!   oldest element once full.
//! - [`LruCache`](cache::LruCache): associative cache with strict
//!   least-recently-used eviction.
//! - [`BasicSet`](set::BasicSet): unordered unique-element collection with
//!   union/intersection/difference.
//!
//! None of the containers depend on each other, and none provide internal
//! synchronization; callers needing shared access wrap an instance in their
//! own lock (e.g. `Mutex<LruCache<K, V>>`).

pub mod cache;
pub mod ds;
pub mod error;
pub mod prelude;
pub mod set;
pub mod traits;
