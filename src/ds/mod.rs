//! Leaf data structures backing the public containers.

pub mod ring_buffer;
pub mod slot_arena;

pub use ring_buffer::RingBuffer;
pub use slot_arena::{SlotArena, SlotId};
