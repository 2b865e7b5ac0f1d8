//! Cursor over a trace.
//!
//! The cursor ranges over "before the first event" plus every event index.
//! Moving it never recomputes frames: each [`StepEvent`] already carries its
//! post-step snapshot, so stepping back is exact.

use std::sync::Arc;

use super::{StepEvent, Trace};

/// Forward/backward position over a shared [`Trace`].
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use pagesim::{PolicyEngine, Policy, ReferenceString, TraceCursor};
///
/// let refs = ReferenceString::from_ids([1, 2]).unwrap();
/// let trace = Arc::new(PolicyEngine::build(&refs, 2, Policy::Fifo).unwrap());
/// let mut cursor = TraceCursor::new(trace);
///
/// assert!(cursor.current_event().is_none());
/// assert_eq!(cursor.step_forward().unwrap().step, 0);
/// assert!(cursor.step_back().is_none()); // back before the first event
/// ```
#[derive(Debug, Clone, Default)]
pub struct TraceCursor {
    trace: Option<Arc<Trace>>,

    /// `None` = before the first event.
    position: Option<usize>,
}

impl TraceCursor {
    /// Cursor positioned before the first event of `trace`.
    pub fn new(trace: Arc<Trace>) -> Self {
        Self {
            trace: Some(trace),
            position: None,
        }
    }

    /// Cursor with no trace loaded.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Swap in a new trace and rewind.
    pub fn load(&mut self, trace: Arc<Trace>) {
        self.trace = Some(trace);
        self.position = None;
    }

    /// Advance by one event.
    ///
    /// Returns `None` without moving when already on the last event (or
    /// when no trace is loaded).
    pub fn step_forward(&mut self) -> Option<&StepEvent> {
        let trace = self.trace.as_ref()?;
        let next = self.position.map_or(0, |pos| pos + 1);
        if next >= trace.len() {
            return None;
        }
        self.position = Some(next);
        trace.get(next)
    }

    /// Retreat by one event.
    ///
    /// Returns the event now under the cursor, or `None` if the cursor is
    /// now (or was already) before the first event.
    pub fn step_back(&mut self) -> Option<&StepEvent> {
        self.position = match self.position {
            None | Some(0) => None,
            Some(pos) => Some(pos - 1),
        };
        self.current_event()
    }

    /// Event under the cursor; `None` before the first event.
    pub fn current_event(&self) -> Option<&StepEvent> {
        let trace = self.trace.as_ref()?;
        trace.get(self.position?)
    }

    /// Rewind and drop the trace. A new trace must be loaded before
    /// navigating again.
    pub fn reset(&mut self) {
        self.trace = None;
        self.position = None;
    }

    #[inline]
    pub fn position(&self) -> Option<usize> {
        self.position
    }

    pub fn trace(&self) -> Option<&Arc<Trace>> {
        self.trace.as_ref()
    }

    /// True when no further `step_forward` is possible.
    pub fn is_at_end(&self) -> bool {
        match (&self.trace, self.position) {
            (None, _) => true,
            (Some(trace), None) => trace.is_empty(),
            (Some(trace), Some(pos)) => pos + 1 >= trace.len(),
        }
    }

    #[inline]
    pub fn is_at_start(&self) -> bool {
        self.position.is_none()
    }
}
