//! FIFO (First-In-First-Out) replacement policy.

use crate::common::{FrameId, PageId};
use crate::engine::FrameSet;

use super::Replacer;

/// Evicts pages in the order they were loaded.
///
/// Slots are filled in slot order and a full slot is only ever
/// overwritten through this cursor, so the slot under the cursor always
/// holds the oldest resident. Hits do not change eviction order.
pub struct FifoReplacer {
    /// Slot holding the page loaded longest ago.
    next_victim: usize,

    capacity: usize,
}

impl FifoReplacer {
    /// Create a new FIFO replacer over `capacity` slots.
    pub fn new(capacity: usize) -> Self {
        Self {
            next_victim: 0,
            capacity,
        }
    }
}

impl Replacer for FifoReplacer {
    fn pick_victim(&mut self, frames: &FrameSet, _upcoming: &[PageId]) -> Option<FrameId> {
        if self.capacity == 0 || frames.capacity() != self.capacity {
            return None;
        }
        let victim = FrameId::new(self.next_victim);
        self.next_victim = (self.next_victim + 1) % self.capacity;
        Some(victim)
    }
}
