//! Victim selection (replacers).
//!
//! Each policy implements [`Replacer`]; the engine owns the shared
//! hit / fill-empty-slot / evict skeleton and only asks the replacer
//! which slot to overwrite once every slot is occupied.
//!
//! Implements:
//! - [`FifoReplacer`] - round-robin over slots in insertion order
//! - [`LruReplacer`] - recency queue, least recently used first
//! - [`OptimalReplacer`] - farthest next use in the remaining references

mod fifo;
mod lru;
mod optimal;

pub use fifo::FifoReplacer;
pub use lru::LruReplacer;
pub use optimal::OptimalReplacer;

use crate::common::{FrameId, PageId};
use crate::engine::{FrameSet, Policy};

/// Something the engine tells a replacer about after a step.
///
/// Replacers may ignore events that don't matter to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessEvent {
    /// The page was already resident.
    Hit(PageId),
    /// The page was just loaded (into an empty slot or after eviction).
    Loaded(PageId),
}

/// Victim-selection capability shared by all policies.
pub trait Replacer {
    /// Update policy bookkeeping. Default: nothing to track.
    fn record(&mut self, _event: AccessEvent) {}

    /// Choose the slot to overwrite.
    ///
    /// Only called when `frames` is full. `upcoming` is the unprocessed
    /// suffix of the reference string (used by Optimal only).
    /// Returns `None` if bookkeeping is inconsistent with `frames`.
    fn pick_victim(&mut self, frames: &FrameSet, upcoming: &[PageId]) -> Option<FrameId>;
}

/// Fresh replacer scratch state for one simulation run.
pub fn for_policy(policy: Policy, capacity: usize) -> Box<dyn Replacer> {
    match policy {
        Policy::Fifo => Box::new(FifoReplacer::new(capacity)),
        Policy::Lru => Box::new(LruReplacer::new(capacity)),
        Policy::Optimal => Box::new(OptimalReplacer::new()),
    }
}
