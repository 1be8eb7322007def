//! Error types for the boundkit library.
//!
//! ## Key Components
//!
//! - [`ConfigError`]: Returned when container construction parameters are
//!   invalid (zero capacity).
//! - [`RingError`]: Returned by [`RingBuffer`](crate::ds::RingBuffer)
//!   operations that require at least one element or a valid index.
//! - [`KeyNotFoundError`]: Returned by [`LruCache`](crate::cache::LruCache)
//!   operations invoked with an absent key.
//!
//! All errors are signaled synchronously at the call that violates a
//! precondition. A failed operation never leaves a container partially
//! mutated: preconditions are validated before any state changes.
//!
//! ## Example Usage
//!
//! ```
//! use boundkit::error::ConfigError;
//! use boundkit::ds::RingBuffer;
//!
//! // Fallible constructor for user-configurable parameters
//! let buffer: Result<RingBuffer<i32>, ConfigError> = RingBuffer::new(8);
//! assert!(buffer.is_ok());
//!
//! // Zero capacity is caught without panicking
//! let bad = RingBuffer::<i32>::new(0);
//! assert!(bad.is_err());
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when container configuration parameters are invalid.
///
/// Produced by fallible constructors such as
/// [`RingBuffer::new`](crate::ds::RingBuffer::new) and
/// [`LruCache::new`](crate::cache::LruCache::new). Carries a human-readable
/// description of which parameter failed validation.
///
/// # Example
///
/// ```
/// use boundkit::cache::LruCache;
///
/// let err = LruCache::<u64, u64>::new(0).unwrap_err();
/// assert!(err.to_string().contains("capacity"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// RingError
// ---------------------------------------------------------------------------

/// Error returned by ring buffer operations with unmet preconditions.
///
/// Produced by [`RingBuffer::pop`](crate::ds::RingBuffer::pop),
/// [`RingBuffer::first`](crate::ds::RingBuffer::first) and
/// [`RingBuffer::get`](crate::ds::RingBuffer::get).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingError {
    /// The operation requires at least one live element.
    Empty,
    /// Indexed access outside `[0, len)`.
    OutOfRange {
        /// The logical index that was requested.
        index: usize,
        /// The number of live elements at the time of the call.
        len: usize,
    },
}

impl fmt::Display for RingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RingError::Empty => f.write_str("ring buffer is empty"),
            RingError::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for {len} live elements")
            },
        }
    }
}

impl std::error::Error for RingError {}

// ---------------------------------------------------------------------------
// KeyNotFoundError
// ---------------------------------------------------------------------------

/// Error returned when a cache operation references an absent key.
///
/// Produced by [`LruCache::get`](crate::cache::LruCache::get) and
/// [`LruCache::delete`](crate::cache::LruCache::delete). Carries no key
/// payload so that caches over non-`Display` key types stay error-compatible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyNotFoundError;

impl fmt::Display for KeyNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("key not present in cache")
    }
}

impl std::error::Error for KeyNotFoundError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
