//! Error types for pagesim.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
///
/// Every failure is raised synchronously before (or instead of) producing a
/// trace. There are no retryable conditions.
#[derive(Debug, Error)]
pub enum Error {
    /// Empty reference string, zero capacity, an unparseable page token,
    /// or an unusable autoplay interval.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Policy selector is not one of `fifo`, `lru` or `optimal`.
    #[error("Invalid policy: {0:?} (expected fifo, lru or optimal)")]
    InvalidPolicy(String),

    /// Every slot is occupied but the replacer could not name a victim.
    ///
    /// This indicates a bug in replacer bookkeeping.
    #[error("No evictable frame available")]
    NoEvictableFrame,

    /// I/O error while reading a reference file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
