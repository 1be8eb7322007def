//! Fixed-capacity circular buffer with overwrite-on-full semantics.
//!
//! Uses a fixed slot array and two logical cursors. Pushing into a full
//! buffer overwrites the oldest element instead of failing; that is the
//! defining ring behavior, not an error.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────────┐
//!   │                          RingBuffer<T>                               │
//!   │                                                                      │
//!   │   slots: Vec<Option<T>> (exactly `capacity` entries, never resized)  │
//!   │                                                                      │
//!   │        back ──┐                         ┌── newest = (back+len-1)%C  │
//!   │               ▼                         ▼                            │
//!   │   [ None ]  [ e0 ]  [ e1 ]  [ e2 ]  [ e3 ]  [ None ]                 │
//!   │             oldest ───── logical order ────► newest                  │
//!   │                                                                      │
//!   │   push when full:                                                    │
//!   │     slots[back] = new element, back advances (wrapping) — the        │
//!   │     previous oldest is displaced and returned to the caller          │
//!   └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Performance Characteristics
//!
//! | Operation  | Time | Notes                                    |
//! |------------|------|------------------------------------------|
//! | `push`     | O(1) | No allocation after construction         |
//! | `pop`      | O(1) | Oldest element, cursor advance           |
//! | `get`/`[]` | O(1) | Physical index = `(back + i) % capacity` |
//! | `iter`     | O(len) total | Restartable, proportional to live elements |
//!
//! ## Notes
//! - Logical index 0 is always the oldest live element.
//! - Iterating while mutating the buffer is prevented by the borrow checker.

use std::fmt;
use std::ops::Index;

use crate::error::{ConfigError, RingError};

/// Fixed-capacity ring store. See the [module docs](self) for layout.
pub struct RingBuffer<T> {
    slots: Vec<Option<T>>,
    back: usize,
    len: usize,
}

impl<T> RingBuffer<T> {
    /// Creates an empty buffer holding at most `capacity` elements.
    ///
    /// The capacity is fixed for the buffer's lifetime; this is the
    /// mechanism that bounds memory use.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `capacity` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use boundkit::ds::RingBuffer;
    ///
    /// let buffer: RingBuffer<u32> = RingBuffer::new(4).unwrap();
    /// assert_eq!(buffer.capacity(), 4);
    /// assert!(buffer.is_empty());
    /// ```
    pub fn new(capacity: usize) -> Result<Self, ConfigError> {
        if capacity < 1 {
            return Err(ConfigError::new("ring buffer capacity must be > 0"));
        }
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Ok(Self {
            slots,
            back: 0,
            len: 0,
        })
    }

    /// Returns the configured capacity (number of slots).
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no element is live.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if the next push will overwrite the oldest element.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    #[inline]
    fn physical(&self, logical: usize) -> usize {
        (self.back + logical) % self.capacity()
    }

    /// Inserts `item` as the newest element.
    ///
    /// If the buffer is full, the oldest element is overwritten and returned;
    /// otherwise `None`. Never allocates.
    ///
    /// # Example
    ///
    /// ```
    /// use boundkit::ds::RingBuffer;
    ///
    /// let mut buffer = RingBuffer::new(2).unwrap();
    /// assert_eq!(buffer.push(1), None);
    /// assert_eq!(buffer.push(2), None);
    /// assert_eq!(buffer.push(3), Some(1)); // full: 1 displaced
    /// assert_eq!(buffer.to_vec(), vec![2, 3]);
    /// ```
    pub fn push(&mut self, item: T) -> Option<T> {
        if self.len < self.capacity() {
            let idx = self.physical(self.len);
            self.slots[idx] = Some(item);
            self.len += 1;

            #[cfg(debug_assertions)]
            self.debug_validate_invariants();
            return None;
        }

        // Full: the slot at `back` holds the oldest element. Replace it and
        // advance both cursors by advancing `back`.
        let displaced = self.slots[self.back].replace(item);
        self.back = (self.back + 1) % self.capacity();

        #[cfg(debug_assertions)]
        self.debug_validate_invariants();
        displaced
    }

    /// Removes and returns the oldest element.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::Empty`] if no element is live.
    pub fn pop(&mut self) -> Result<T, RingError> {
        if self.len == 0 {
            return Err(RingError::Empty);
        }
        let value = self.slots[self.back].take().expect("live slot missing");
        self.back = (self.back + 1) % self.capacity();
        self.len -= 1;
        if self.len == 0 {
            self.back = 0;
        }

        #[cfg(debug_assertions)]
        self.debug_validate_invariants();
        Ok(value)
    }

    /// Returns the oldest element without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::Empty`] if no element is live.
    pub fn first(&self) -> Result<&T, RingError> {
        if self.len == 0 {
            return Err(RingError::Empty);
        }
        Ok(self.slots[self.back].as_ref().expect("live slot missing"))
    }

    /// Returns the element at logical `index` (0 = oldest).
    ///
    /// # Errors
    ///
    /// Returns [`RingError::OutOfRange`] if `index >= len`.
    ///
    /// # Example
    ///
    /// ```
    /// use boundkit::ds::RingBuffer;
    ///
    /// let mut buffer = RingBuffer::new(2).unwrap();
    /// for item in [1, 2, 3, 4] {
    ///     buffer.push(item);
    /// }
    /// assert_eq!(buffer.get(0), Ok(&3));
    /// assert_eq!(buffer.get(1), Ok(&4));
    /// assert!(buffer.get(2).is_err());
    /// ```
    pub fn get(&self, index: usize) -> Result<&T, RingError> {
        if index >= self.len {
            return Err(RingError::OutOfRange {
                index,
                len: self.len,
            });
        }
        let idx = self.physical(index);
        Ok(self.slots[idx].as_ref().expect("live slot missing"))
    }

    /// Resets the buffer to empty. Capacity is unchanged.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
        self.back = 0;
        self.len = 0;
    }

    /// Returns a lazy iterator over live elements, oldest to newest.
    ///
    /// The traversal is finite, restartable and proportional to `len`, not
    /// `capacity`.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            buffer: self,
            index: 0,
        }
    }

    #[cfg(any(test, debug_assertions))]
    pub(crate) fn debug_validate_invariants(&self) {
        assert!(self.len <= self.capacity());
        assert!(self.back < self.capacity());
        let live = self.slots.iter().filter(|slot| slot.is_some()).count();
        assert_eq!(self.len, live);
        for logical in 0..self.len {
            assert!(self.slots[self.physical(logical)].is_some());
        }
    }
}

impl<T: Clone> RingBuffer<T> {
    /// Copies the live elements into a freshly allocated `Vec`, oldest to
    /// newest. An empty buffer yields an empty `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> Index<usize> for RingBuffer<T> {
    type Output = T;

    /// Logical indexing, 0 = oldest.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`. Use [`RingBuffer::get`] for a fallible
    /// variant.
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

/// Borrowed iterator over a [`RingBuffer`]'s live elements, oldest first.
pub struct Iter<'a, T> {
    buffer: &'a RingBuffer<T>,
    index: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.index >= self.buffer.len {
            return None;
        }
        let item = self.buffer.get(self.index).ok();
        self.index += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.buffer.len - self.index;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> std::iter::FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a RingBuffer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> fmt::Debug for RingBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingBuffer")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .finish_non_exhaustive()
    }
}

/// Renders up to the first 10 live elements, oldest to newest.
///
/// `"{ }"` when empty, `"{ a, b }"` otherwise; `", [...]"` is appended when
/// more than 10 elements are live.
impl<T: fmt::Display> fmt::Display for RingBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (index, item) in self.iter().take(10).enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            } else {
                f.write_str(" ")?;
            }
            write!(f, "{item}")?;
        }
        if self.len > 10 {
            f.write_str(", [...]")?;
        }
        f.write_str(" }")
    }
}
