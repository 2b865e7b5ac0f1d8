//! Autoplay - a cancellable repeating step task.
//!
//! An [`Autoplay`] owns one background thread that calls
//! [`TraceCursor::step_forward`] on every tick and hands the new event to a
//! callback. It finishes on its own after the last event.

use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam::channel::{self, Sender};
use log::{debug, warn};
use parking_lot::Mutex;

use crate::trace::{StepEvent, TraceCursor};

/// Handle to a running autoplay task.
///
/// Stopping (explicitly or on drop) joins the thread, so once
/// [`stop`](Self::stop) returns no step is in flight and none will follow.
pub struct Autoplay {
    /// Dropping this sender disconnects the task's cancel channel.
    cancel: Option<Sender<()>>,

    handle: Option<JoinHandle<()>>,
}

impl Autoplay {
    /// Start stepping `cursor` forward every `interval`.
    ///
    /// The cursor lock is held only while stepping; the callback runs
    /// after it is released.
    pub fn start<F>(cursor: Arc<Mutex<TraceCursor>>, interval: Duration, mut on_step: F) -> Self
    where
        F: FnMut(StepEvent) + Send + 'static,
    {
        let (cancel_tx, cancel_rx) = channel::bounded::<()>(0);

        let handle = thread::spawn(move || {
            let ticker = channel::tick(interval);
            loop {
                channel::select! {
                    recv(cancel_rx) -> _ => {
                        debug!("autoplay cancelled");
                        break;
                    }
                    recv(ticker) -> _ => {
                        let (event, at_end) = {
                            let mut cursor = cursor.lock();
                            let event = cursor.step_forward().cloned();
                            (event, cursor.is_at_end())
                        };

                        match event {
                            Some(event) => on_step(event),
                            None => break,
                        }
                        if at_end {
                            debug!("autoplay reached the last event");
                            break;
                        }
                    }
                }
            }
        });

        Self {
            cancel: Some(cancel_tx),
            handle: Some(handle),
        }
    }

    /// True once the task has stopped (cancelled, finished, or panicked).
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, |h| h.is_finished())
    }

    /// Cancel and wait for the task to exit.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        drop(self.cancel.take());
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("autoplay step callback panicked");
            }
        }
    }
}

impl Drop for Autoplay {
    fn drop(&mut self) {
        self.shutdown();
    }
}
