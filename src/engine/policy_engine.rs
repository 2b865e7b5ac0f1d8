//! Policy Engine - builds a complete trace in one pass.
//!
//! The [`PolicyEngine`] provides:
//! - Input validation (non-empty reference string, capacity in `1..=MAX_FRAMES`)
//! - The hit / fill-empty-slot / evict skeleton shared by every policy
//! - Delegation of victim choice to a [`Replacer`](super::replacer::Replacer)

use log::{debug, trace};

use crate::common::config::MAX_FRAMES;
use crate::common::{Error, PageId, Result};
use crate::engine::replacer::{self, AccessEvent};
use crate::engine::{FrameSet, Policy};
use crate::trace::{StepEvent, Trace};

/// Simulates page replacement for a fixed capacity and policy.
///
/// # Usage
/// ```
/// use pagesim::{PolicyEngine, Policy, ReferenceString};
///
/// let refs = ReferenceString::from_ids([7, 0, 1, 2, 0, 3, 0, 4]).unwrap();
/// let trace = PolicyEngine::build(&refs, 3, Policy::Lru).unwrap();
///
/// assert_eq!(trace.stats().fault_count, 6);
/// assert_eq!(trace.stats().hit_count, 2);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PolicyEngine {
    capacity: usize,
    policy: Policy,
}

impl PolicyEngine {
    /// Create an engine for `capacity` frames.
    ///
    /// # Errors
    /// `Error::InvalidInput` if `capacity` is 0 or above [`MAX_FRAMES`].
    pub fn new(capacity: usize, policy: Policy) -> Result<Self> {
        if capacity < 1 {
            return Err(Error::InvalidInput(
                "frame capacity must be at least 1".into(),
            ));
        }
        if capacity > MAX_FRAMES {
            return Err(Error::InvalidInput(format!(
                "frame capacity {} exceeds the maximum of {}",
                capacity, MAX_FRAMES
            )));
        }
        Ok(Self { capacity, policy })
    }

    /// Validate the inputs and simulate `reference` in one call.
    ///
    /// # Errors
    /// `Error::InvalidInput` if `reference` is empty or `capacity` is out
    /// of range. No partial trace is ever returned.
    pub fn build(reference: &[PageId], capacity: usize, policy: Policy) -> Result<Trace> {
        Self::new(capacity, policy)?.run(reference)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Process `reference` left to right, one event per request.
    ///
    /// # Errors
    /// - `Error::InvalidInput` if `reference` is empty
    /// - `Error::NoEvictableFrame` if the replacer loses track of residents
    pub fn run(&self, reference: &[PageId]) -> Result<Trace> {
        if reference.is_empty() {
            return Err(Error::InvalidInput("reference string is empty".into()));
        }

        let mut frames = FrameSet::new(self.capacity);
        let mut replacer = replacer::for_policy(self.policy, self.capacity);
        let mut events = Vec::with_capacity(reference.len());

        for (step, &page) in reference.iter().enumerate() {
            // Hit: only bookkeeping changes, never the frames
            if frames.contains(page) {
                replacer.record(AccessEvent::Hit(page));
                events.push(StepEvent::hit(step, page, frames.snapshot()));
                continue;
            }

            let frame = match frames.first_empty() {
                Some(frame) => frame,
                None => replacer
                    .pick_victim(&frames, &reference[step + 1..])
                    .ok_or(Error::NoEvictableFrame)?,
            };

            let evicted = frames.replace(frame, page);
            if let Some(victim) = evicted {
                trace!("step {}: {} evicts {} from {}", step, page, victim, frame);
            }
            replacer.record(AccessEvent::Loaded(page));

            events.push(StepEvent::miss(step, page, frames.snapshot(), frame, evicted));
        }

        let trace = Trace::new(self.policy, self.capacity, events);
        debug!(
            "built {} trace over {} frames: {}",
            self.policy,
            self.capacity,
            trace.stats()
        );
        Ok(trace)
    }
}
