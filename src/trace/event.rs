//! Step events - one per reference-string entry.

use std::fmt;

use serde::Serialize;

use crate::common::config::EMPTY_SLOT;
use crate::common::{FrameId, PageId};

/// Whether a request found its page resident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Outcome {
    Hit,
    Miss,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Hit => f.pad("Hit"),
            Outcome::Miss => f.pad("Miss"),
        }
    }
}

/// What happened at one step of the simulation.
///
/// Each event carries its own post-step snapshot, so a viewer can jump to
/// any step without replaying the ones before it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepEvent {
    /// 0-based index into the reference string.
    pub step: usize,

    /// The page requested at this step.
    pub page: PageId,

    /// Slot contents after this step, in slot order (`None` = empty).
    pub frames_after: Vec<Option<PageId>>,

    pub outcome: Outcome,

    /// Page removed to make room. `None` on a hit or when an empty slot
    /// was filled.
    pub evicted: Option<PageId>,

    /// Slot written on a miss; `None` on a hit.
    pub loaded_into: Option<FrameId>,
}

impl StepEvent {
    pub(crate) fn hit(step: usize, page: PageId, frames_after: Vec<Option<PageId>>) -> Self {
        Self {
            step,
            page,
            frames_after,
            outcome: Outcome::Hit,
            evicted: None,
            loaded_into: None,
        }
    }

    pub(crate) fn miss(
        step: usize,
        page: PageId,
        frames_after: Vec<Option<PageId>>,
        loaded_into: FrameId,
        evicted: Option<PageId>,
    ) -> Self {
        Self {
            step,
            page,
            frames_after,
            outcome: Outcome::Miss,
            evicted,
            loaded_into: Some(loaded_into),
        }
    }

    #[inline]
    pub fn is_hit(&self) -> bool {
        self.outcome == Outcome::Hit
    }

    #[inline]
    pub fn is_fault(&self) -> bool {
        self.outcome == Outcome::Miss
    }
}

/// Renders as a table row: `step page [a, b, -] Hit|Miss evicted`.
impl fmt::Display for StepEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slots = self
            .frames_after
            .iter()
            .map(|slot| slot.map_or_else(|| EMPTY_SLOT.to_string(), |p| p.to_string()))
            .collect::<Vec<_>>()
            .join(", ");
        let evicted = self
            .evicted
            .map_or_else(|| EMPTY_SLOT.to_string(), |p| p.to_string());

        write!(
            f,
            "{:>4}  {:>4}  [{}]  {:<4}  {}",
            self.step, self.page, slots, self.outcome, evicted
        )
    }
}
