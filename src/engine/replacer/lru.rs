//! LRU (Least Recently Used) replacement policy.

use std::collections::VecDeque;

use log::trace;

use crate::common::{FrameId, PageId};
use crate::engine::FrameSet;

use super::{AccessEvent, Replacer};

/// Evicts the resident page whose last access is oldest.
pub struct LruReplacer {
    /// Resident pages by recency (front = least recently used).
    recency: VecDeque<PageId>,
}

impl LruReplacer {
    pub fn new(capacity: usize) -> Self {
        Self {
            recency: VecDeque::with_capacity(capacity),
        }
    }

    fn touch(&mut self, page: PageId) {
        self.recency.retain(|&p| p != page);
        self.recency.push_back(page);
    }
}

impl Replacer for LruReplacer {
    fn record(&mut self, event: AccessEvent) {
        match event {
            AccessEvent::Hit(page) | AccessEvent::Loaded(page) => self.touch(page),
        }
    }

    fn pick_victim(&mut self, frames: &FrameSet, _upcoming: &[PageId]) -> Option<FrameId> {
        let victim = self.recency.pop_front()?;
        trace!("lru victim {} (recency depth {})", victim, self.recency.len() + 1);
        // The victim's slot gets reused by the incoming page
        frames.find(victim)
    }
}
