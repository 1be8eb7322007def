//! Stable-index node storage for linked structures.
//!
//! `SlotArena<T>` hands out [`SlotId`] handles that stay valid until the
//! entry is removed, regardless of how the backing `Vec` grows. Freed slots
//! are recycled through a free list, so a cache that churns at capacity
//! settles into a fixed set of slots and stops allocating.
//!
//! The LRU cache stores its recency-list nodes here and links them with
//! `SlotId`s instead of raw pointers: the arena owns every node, the list
//! links are index relations only.
//!
//! ## Performance Characteristics
//!
//! | Operation  | Time | Notes                           |
//! |------------|------|---------------------------------|
//! | `insert`   | O(1) | Amortized; reuses freed slots   |
//! | `remove`   | O(1) | Pushes the slot on the free list|
//! | `get`      | O(1) | Plain index + `Option` check    |

/// Stable handle to an occupied arena slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId(pub(crate) usize);

impl SlotId {
    /// Returns the raw slot index backing this handle.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Slot-based arena with free-list reuse.
#[derive(Debug)]
pub struct SlotArena<T> {
    slots: Vec<Option<T>>,
    free_list: Vec<usize>,
    len: usize,
}

impl<T> SlotArena<T> {
    /// Creates an empty arena.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_list: Vec::new(),
            len: 0,
        }
    }

    /// Creates an empty arena with room for `capacity` entries before the
    /// backing store reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_list: Vec::new(),
            len: 0,
        }
    }

    /// Stores `value` and returns its stable handle.
    pub fn insert(&mut self, value: T) -> SlotId {
        let idx = match self.free_list.pop() {
            Some(idx) => {
                self.slots[idx] = Some(value);
                idx
            },
            None => {
                self.slots.push(Some(value));
                self.slots.len() - 1
            },
        };
        self.len += 1;
        SlotId(idx)
    }

    /// Removes the entry behind `id`, returning it if the slot was occupied.
    pub fn remove(&mut self, id: SlotId) -> Option<T> {
        let value = self.slots.get_mut(id.0)?.take()?;
        self.free_list.push(id.0);
        self.len -= 1;
        Some(value)
    }

    /// Returns a shared reference to the entry behind `id`.
    pub fn get(&self, id: SlotId) -> Option<&T> {
        self.slots.get(id.0).and_then(|slot| slot.as_ref())
    }

    /// Returns a mutable reference to the entry behind `id`.
    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        self.slots.get_mut(id.0).and_then(|slot| slot.as_mut())
    }

    /// Returns `true` if `id` refers to an occupied slot.
    pub fn contains(&self, id: SlotId) -> bool {
        self.slots.get(id.0).is_some_and(|slot| slot.is_some())
    }

    /// Returns the number of occupied slots.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no slot is occupied.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drops every entry and forgets the free list. Allocated storage is
    /// retained for reuse.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_list.clear();
        self.len = 0;
    }

    /// Iterates over occupied slots in index order.
    pub fn iter(&self) -> impl Iterator<Item = (SlotId, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.as_ref().map(|value| (SlotId(idx), value)))
    }

    #[cfg(any(test, debug_assertions))]
    pub(crate) fn debug_validate_invariants(&self) {
        let occupied = self.slots.iter().filter(|slot| slot.is_some()).count();
        assert_eq!(self.len, occupied);
        assert_eq!(self.slots.len(), occupied + self.free_list.len());
        for &idx in &self.free_list {
            assert!(idx < self.slots.len());
            assert!(self.slots[idx].is_none(), "free list points to live slot");
        }
    }
}

impl<T> Default for SlotArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_then_get_round_trips() {
        let mut arena = SlotArena::new();
        let a = arena.insert("a");
        let b = arena.insert("b");
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.get(a), Some(&"a"));
        assert_eq!(arena.get(b), Some(&"b"));
        arena.debug_validate_invariants();
    }

    #[test]
    fn removed_slot_is_recycled() {
        let mut arena = SlotArena::new();
        let a = arena.insert(1);
        let _b = arena.insert(2);
        assert_eq!(arena.remove(a), Some(1));
        assert_eq!(arena.len(), 1);

        let c = arena.insert(3);
        assert_eq!(c.index(), a.index());
        assert_eq!(arena.get(c), Some(&3));
        arena.debug_validate_invariants();
    }

    #[test]
    fn stale_handle_misses_after_removal() {
        let mut arena = SlotArena::new();
        let a = arena.insert(10);
        arena.remove(a);
        assert!(!arena.contains(a));
        assert_eq!(arena.get(a), None);
        assert_eq!(arena.remove(a), None);
    }

    #[test]
    fn get_mut_updates_in_place() {
        let mut arena = SlotArena::new();
        let a = arena.insert(5);
        *arena.get_mut(a).unwrap() = 6;
        assert_eq!(arena.get(a), Some(&6));
    }

    #[test]
    fn clear_empties_and_invalidates_handles() {
        let mut arena = SlotArena::new();
        let a = arena.insert("x");
        arena.clear();
        assert!(arena.is_empty());
        assert!(!arena.contains(a));
        arena.debug_validate_invariants();
    }

    #[test]
    fn iter_visits_only_occupied_slots() {
        let mut arena = SlotArena::new();
        let a = arena.insert(1);
        let b = arena.insert(2);
        let _c = arena.insert(3);
        arena.remove(b);

        let seen: Vec<_> = arena.iter().map(|(id, v)| (id.index(), *v)).collect();
        assert_eq!(seen, vec![(a.index(), 1), (2, 3)]);
    }
}
