//! Configuration constants for pagesim.

use std::time::Duration;

/// Default delay between two automatic steps during autoplay.
///
/// Matches the speed slider's starting position in the interactive
/// front-end (600ms).
pub const DEFAULT_AUTOPLAY_INTERVAL: Duration = Duration::from_millis(600);

/// Largest frame count a simulation accepts.
///
/// Every step snapshots all slots, so the trace grows as
/// `capacity × reference length`; 64K frames is far past any
/// teaching-sized simulation.
pub const MAX_FRAMES: usize = 1 << 16;

/// Marker rendered in place of an empty frame slot, and in the
/// "evicted" column when nothing was evicted.
pub const EMPTY_SLOT: &str = "-";
