//! Page-replacement simulation engine.
//!
//! The engine turns a (reference string, capacity, policy) triple into an
//! immutable [`Trace`](crate::trace::Trace). It performs no I/O and keeps
//! no state once the trace is returned.
//!
//! # Components
//! - [`PolicyEngine`] - Validation and the per-step hit/miss loop
//! - [`FrameSet`] - The simulated frame slots
//! - [`ReferenceString`] - Validated page request sequence
//! - [`Policy`] - FIFO / LRU / Optimal selector
//! - [`replacer`] - Victim selection per policy

mod frame_set;
mod policy;
mod policy_engine;
mod reference;
pub mod replacer;

pub use frame_set::FrameSet;
pub use policy::Policy;
pub use policy_engine::PolicyEngine;
pub use reference::ReferenceString;
