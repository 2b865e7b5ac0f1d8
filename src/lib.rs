//! pagesim - a page-replacement simulator with replayable traces.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │        Session (session/)  [owned by one caller]         │   │
//! │  │     SimulationSession: Trace + TraceCursor + Autoplay    │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Trace (trace/)  [immutable]                 │   │
//! │  │      StepEvent × n + TraceStats, TraceCursor navigation  │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↑                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                 Engine (engine/)                         │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │      Replacers: FIFO | LRU | Optimal             │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  │      PolicyEngine + FrameSet + ReferenceString           │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, FrameId, Error, config)
//! - [`engine`] - Trace construction and replacement policies
//! - [`trace`] - Step events, statistics and the navigation cursor
//! - [`session`] - Prepare / step / play / pause / reset
//! - [`input`] - Parsing reference strings and frame counts from text
//!
//! # Quick Start
//! ```
//! use pagesim::{input, Policy, PolicyEngine};
//!
//! let refs = input::parse_reference_string("1 2 3 4 1 2 5 1 2 3 4 5").unwrap();
//! let trace = PolicyEngine::build(&refs, 3, Policy::Optimal).unwrap();
//!
//! assert_eq!(trace.stats().fault_count, 7);
//! for event in &trace {
//!     println!("{}", event);
//! }
//! ```

pub mod common;
pub mod engine;
pub mod input;
pub mod session;
pub mod trace;

// Re-export commonly used items at crate root for convenience
pub use common::config::DEFAULT_AUTOPLAY_INTERVAL;
pub use common::{Error, FrameId, PageId, Result};

pub use engine::{FrameSet, Policy, PolicyEngine, ReferenceString};
pub use session::{Autoplay, SimulationSession};
pub use trace::{Outcome, StepEvent, Trace, TraceCursor, TraceStats};
