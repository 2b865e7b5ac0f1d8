//! FrameSet - the fixed slots of simulated resident memory.
//!
//! A [`FrameSet`] holds one optional page per slot. Slot order only matters
//! for FIFO's round-robin pointer and for "first empty slot" placement;
//! hit/miss logic only looks at membership.

use crate::common::{FrameId, PageId};

/// Fixed-capacity set of frame slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSet {
    /// One entry per frame; `None` means the slot is empty.
    slots: Vec<Option<PageId>>,
}

impl FrameSet {
    /// Create a frame set with `capacity` empty slots.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
        }
    }

    /// Number of slots (fixed for the lifetime of the set).
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn slots(&self) -> &[Option<PageId>] {
        &self.slots
    }

    /// The page resident in `frame_id`, if any.
    #[inline]
    pub fn get(&self, frame_id: FrameId) -> Option<PageId> {
        self.slots.get(frame_id.0).copied().flatten()
    }

    /// Slot currently holding `page`, if it is resident.
    pub fn find(&self, page: PageId) -> Option<FrameId> {
        self.slots
            .iter()
            .position(|slot| *slot == Some(page))
            .map(FrameId::new)
    }

    #[inline]
    pub fn contains(&self, page: PageId) -> bool {
        self.find(page).is_some()
    }

    /// Lowest-indexed empty slot.
    pub fn first_empty(&self) -> Option<FrameId> {
        self.slots.iter().position(Option::is_none).map(FrameId::new)
    }

    pub fn is_full(&self) -> bool {
        self.first_empty().is_none()
    }

    /// Occupied slots in slot order.
    pub fn residents(&self) -> impl Iterator<Item = (FrameId, PageId)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.map(|page| (FrameId::new(idx), page)))
    }

    /// Put `page` into `frame_id`, returning the page that was there.
    pub fn replace(&mut self, frame_id: FrameId, page: PageId) -> Option<PageId> {
        self.slots[frame_id.0].replace(page)
    }

    /// Copy of the slot contents in slot order.
    pub fn snapshot(&self) -> Vec<Option<PageId>> {
        self.slots.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let frames = FrameSet::new(3);
        assert_eq!(frames.capacity(), 3);
        assert_eq!(frames.first_empty(), Some(FrameId::new(0)));
        assert_eq!(frames.residents().count(), 0);
        assert!(!frames.is_full());
    }

    #[test]
    fn test_fill_in_slot_order() {
        let mut frames = FrameSet::new(2);
        assert_eq!(frames.replace(FrameId::new(0), PageId::new(7)), None);
        assert_eq!(frames.first_empty(), Some(FrameId::new(1)));
        frames.replace(FrameId::new(1), PageId::new(3));

        assert!(frames.is_full());
        assert_eq!(frames.find(PageId::new(3)), Some(FrameId::new(1)));
        assert!(!frames.contains(PageId::new(9)));
    }

    #[test]
    fn test_replace_returns_previous() {
        let mut frames = FrameSet::new(1);
        frames.replace(FrameId::new(0), PageId::new(1));
        let old = frames.replace(FrameId::new(0), PageId::new(2));

        assert_eq!(old, Some(PageId::new(1)));
        assert_eq!(frames.get(FrameId::new(0)), Some(PageId::new(2)));
        assert_eq!(frames.snapshot(), vec![Some(PageId::new(2))]);
    }

    #[test]
    fn test_get_out_of_range() {
        let frames = FrameSet::new(1);
        assert_eq!(frames.get(FrameId::new(5)), None);
    }
}
