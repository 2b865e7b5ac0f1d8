//! Simulation session - one trace, one cursor, at most one autoplay.
//!
//! [`SimulationSession`] is what a front-end drives: prepare a trace, then
//! step, play, pause and reset. All of its state lives in the session value;
//! dropping the session stops autoplay.

mod autoplay;

pub use autoplay::Autoplay;

use std::sync::Arc;
use std::time::Duration;

use log::debug;
use parking_lot::Mutex;

use crate::common::config::DEFAULT_AUTOPLAY_INTERVAL;
use crate::common::{Error, PageId, Result};
use crate::engine::{Policy, PolicyEngine};
use crate::trace::{StepEvent, Trace, TraceCursor, TraceStats};

/// Owns the current trace, its cursor and the autoplay task.
///
/// # Thread Safety
/// - `cursor`: `Mutex` shared with the autoplay thread, so manual and
///   automatic steps never interleave
/// - `trace`: immutable, shared read-only via `Arc`
///
/// # Usage
/// ```
/// use pagesim::{Policy, ReferenceString, SimulationSession};
///
/// let mut session = SimulationSession::new();
/// let refs = ReferenceString::from_ids([7, 0, 1, 2, 0, 3, 0, 4]).unwrap();
/// let stats = session.prepare(&refs, 3, Policy::Lru).unwrap();
/// assert_eq!(stats.fault_count, 6);
///
/// let first = session.step_forward().unwrap();
/// assert_eq!(first.step, 0);
/// ```
pub struct SimulationSession {
    trace: Option<Arc<Trace>>,
    cursor: Arc<Mutex<TraceCursor>>,
    autoplay: Option<Autoplay>,
    interval: Duration,
}

impl SimulationSession {
    /// Session with no trace and the default autoplay interval.
    pub fn new() -> Self {
        Self {
            trace: None,
            cursor: Arc::new(Mutex::new(TraceCursor::empty())),
            autoplay: None,
            interval: DEFAULT_AUTOPLAY_INTERVAL,
        }
    }

    // ========================================================================
    // Building
    // ========================================================================

    /// Build a new trace, replacing the previous one.
    ///
    /// Any autoplay is stopped and the old trace discarded before the new
    /// one is built; on error the session is left with no trace.
    ///
    /// # Errors
    /// `Error::InvalidInput` for an empty reference string or zero capacity.
    pub fn prepare(
        &mut self,
        reference: &[PageId],
        capacity: usize,
        policy: Policy,
    ) -> Result<TraceStats> {
        self.pause();
        self.trace = None;
        self.cursor.lock().reset();

        let trace = Arc::new(PolicyEngine::build(reference, capacity, policy)?);
        let stats = trace.stats();

        self.cursor.lock().load(Arc::clone(&trace));
        self.trace = Some(trace);
        Ok(stats)
    }

    // ========================================================================
    // Manual navigation
    // ========================================================================

    /// Advance one step. `None` at the last event or without a trace.
    pub fn step_forward(&self) -> Option<StepEvent> {
        self.cursor.lock().step_forward().cloned()
    }

    /// Go back one step. `None` once before the first event.
    pub fn step_back(&self) -> Option<StepEvent> {
        self.cursor.lock().step_back().cloned()
    }

    pub fn current_event(&self) -> Option<StepEvent> {
        self.cursor.lock().current_event().cloned()
    }

    pub fn position(&self) -> Option<usize> {
        self.cursor.lock().position()
    }

    // ========================================================================
    // Autoplay
    // ========================================================================

    /// Start stepping forward automatically, calling `on_step` per event.
    ///
    /// Cancels any running autoplay first.
    ///
    /// # Errors
    /// `Error::InvalidInput` if no trace has been prepared.
    pub fn play<F>(&mut self, on_step: F) -> Result<()>
    where
        F: FnMut(StepEvent) + Send + 'static,
    {
        self.pause();
        if self.trace.is_none() {
            return Err(Error::InvalidInput("no simulation prepared".into()));
        }

        debug!("autoplay every {:?}", self.interval);
        self.autoplay = Some(Autoplay::start(
            Arc::clone(&self.cursor),
            self.interval,
            on_step,
        ));
        Ok(())
    }

    /// Stop autoplay. When this returns no automatic step is running or
    /// scheduled.
    pub fn pause(&mut self) {
        if let Some(autoplay) = self.autoplay.take() {
            autoplay.stop();
            debug!("autoplay paused");
        }
    }

    /// True while an autoplay task is still stepping.
    pub fn is_playing(&self) -> bool {
        self.autoplay.as_ref().is_some_and(|a| !a.is_finished())
    }

    /// Change the autoplay interval. Takes effect on the next [`play`](Self::play).
    ///
    /// # Errors
    /// `Error::InvalidInput` for a zero interval.
    pub fn set_interval(&mut self, interval: Duration) -> Result<()> {
        if interval.is_zero() {
            return Err(Error::InvalidInput(
                "autoplay interval must be greater than zero".into(),
            ));
        }
        self.interval = interval;
        Ok(())
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    // ========================================================================
    // Teardown / inspection
    // ========================================================================

    /// Stop autoplay and drop the trace and cursor position.
    pub fn reset(&mut self) {
        self.pause();
        self.trace = None;
        self.cursor.lock().reset();
    }

    pub fn trace(&self) -> Option<&Arc<Trace>> {
        self.trace.as_ref()
    }

    pub fn stats(&self) -> Option<TraceStats> {
        self.trace.as_ref().map(|t| t.stats())
    }
}

impl Default for SimulationSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(ids: &[u32]) -> Vec<PageId> {
        ids.iter().copied().map(PageId::new).collect()
    }

    #[test]
    fn test_prepare_and_step() {
        let mut session = SimulationSession::new();
        let stats = session.prepare(&pages(&[1, 2, 1]), 2, Policy::Fifo).unwrap();

        assert_eq!(stats.total_accesses, 3);
        assert_eq!(session.step_forward().unwrap().step, 0);
        assert_eq!(session.current_event().unwrap().page, PageId::new(1));
        assert!(session.step_back().is_none());
        assert_eq!(session.position(), None);
    }

    #[test]
    fn test_failed_prepare_discards_previous_trace() {
        let mut session = SimulationSession::new();
        session.prepare(&pages(&[1]), 1, Policy::Lru).unwrap();

        let err = session.prepare(&pages(&[1]), 0, Policy::Lru).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(session.trace().is_none());
        assert!(session.step_forward().is_none());
    }

    #[test]
    fn test_play_without_trace() {
        let mut session = SimulationSession::new();
        assert!(matches!(session.play(|_| {}), Err(Error::InvalidInput(_))));
        assert!(!session.is_playing());
    }

    #[test]
    fn test_zero_interval_rejected() {
        let mut session = SimulationSession::new();
        assert!(session.set_interval(Duration::ZERO).is_err());
        assert_eq!(session.interval(), DEFAULT_AUTOPLAY_INTERVAL);

        session.set_interval(Duration::from_millis(50)).unwrap();
        assert_eq!(session.interval(), Duration::from_millis(50));
    }

    #[test]
    fn test_reset() {
        let mut session = SimulationSession::default();
        session.prepare(&pages(&[3, 4]), 2, Policy::Optimal).unwrap();
        session.step_forward();
        session.reset();

        assert!(session.stats().is_none());
        assert!(session.current_event().is_none());
        assert!(session.step_forward().is_none());
    }
}
