//! Convenience re-exports for the common container surface.

pub use crate::cache::LruCache;
pub use crate::ds::{RingBuffer, SlotArena, SlotId};
pub use crate::error::{ConfigError, KeyNotFoundError, RingError};
pub use crate::set::BasicSet;
pub use crate::traits::{Cache, SetOps};
