//! Optimal (Belady) replacement policy.
//!
//! Needs the whole reference string up front: the victim is the resident
//! page whose next request lies farthest ahead, and a page that is never
//! requested again beats any page that is.

use crate::common::{FrameId, PageId};
use crate::engine::FrameSet;

use super::Replacer;

/// Farthest-next-use victim selection. Holds no state between steps.
#[derive(Debug, Default)]
pub struct OptimalReplacer;

impl OptimalReplacer {
    pub fn new() -> Self {
        Self
    }
}

/// Distance to the next request of `page`; `None` means never again.
fn next_use(page: PageId, upcoming: &[PageId]) -> Option<usize> {
    upcoming.iter().position(|&p| p == page)
}

impl Replacer for OptimalReplacer {
    fn pick_victim(&mut self, frames: &FrameSet, upcoming: &[PageId]) -> Option<FrameId> {
        let mut best: Option<(FrameId, usize)> = None;

        for (frame, page) in frames.residents() {
            match next_use(page, upcoming) {
                // Infinite distance; slots are visited in order so the
                // lowest slot wins any tie.
                None => return Some(frame),
                Some(distance) => {
                    if best.map_or(true, |(_, farthest)| distance > farthest) {
                        best = Some((frame, distance));
                    }
                }
            }
        }

        best.map(|(frame, _)| frame)
    }
}
