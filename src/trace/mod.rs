//! Simulation traces and positional navigation.
//!
//! A [`Trace`] is built once by the engine and never mutated. Viewers walk
//! it with a [`TraceCursor`] instead of re-simulating.
//!
//! # Components
//! - [`Trace`] - Ordered step events plus aggregate counters
//! - [`StepEvent`] / [`Outcome`] - One simulation step
//! - [`TraceStats`] - Totals, hits, faults
//! - [`TraceCursor`] - Forward/backward navigation over a trace

mod cursor;
mod event;
mod stats;

pub use cursor::TraceCursor;
pub use event::{Outcome, StepEvent};
pub use stats::TraceStats;

use serde::Serialize;

use crate::engine::Policy;

/// The complete, immutable result of one simulation run.
///
/// Safe to share between readers (e.g. behind an `Arc`) without locking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    policy: Policy,
    capacity: usize,
    stats: TraceStats,
    events: Vec<StepEvent>,
}

impl Trace {
    pub(crate) fn new(policy: Policy, capacity: usize, events: Vec<StepEvent>) -> Self {
        let stats = TraceStats::from_events(&events);
        Self {
            policy,
            capacity,
            stats,
            events,
        }
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Number of frame slots the trace was simulated with.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn stats(&self) -> TraceStats {
        self.stats
    }

    #[inline]
    pub fn events(&self) -> &[StepEvent] {
        &self.events
    }

    #[inline]
    pub fn get(&self, step: usize) -> Option<&StepEvent> {
        self.events.get(step)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StepEvent> {
        self.events.iter()
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a StepEvent;
    type IntoIter = std::slice::Iter<'a, StepEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
