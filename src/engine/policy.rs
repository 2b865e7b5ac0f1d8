//! Replacement policy selector.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::common::Error;

/// Which victim-selection logic a simulation uses.
///
/// No other engine behavior varies by policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// Evict the page that entered memory first.
    Fifo,
    /// Evict the page that was least recently accessed.
    Lru,
    /// Evict the page whose next use is farthest in the future.
    Optimal,
}

impl Policy {
    /// Every policy, in menu order.
    pub const ALL: [Policy; 3] = [Policy::Fifo, Policy::Lru, Policy::Optimal];

    pub fn full_name(&self) -> &'static str {
        match self {
            Policy::Fifo => "FIFO (First In First Out)",
            Policy::Lru => "LRU (Least Recently Used)",
            Policy::Optimal => "Optimal Page Replacement",
        }
    }

    /// One-sentence description of the policy.
    pub fn summary(&self) -> &'static str {
        match self {
            Policy::Fifo => "FIFO replaces the page that entered memory first.",
            Policy::Lru => "LRU replaces the page that was least recently accessed.",
            Policy::Optimal => {
                "Optimal replaces the page that will not be used for the longest time in the future."
            }
        }
    }

    /// How the policy works, one rule per entry.
    pub fn rules(&self) -> &'static [&'static str] {
        match self {
            Policy::Fifo => &[
                "Pages are stored in a queue.",
                "The oldest page is removed when frames are full.",
                "No consideration of recent usage.",
            ],
            Policy::Lru => &[
                "Recently used pages are kept in memory.",
                "The page not used for the longest time is removed.",
                "Tracks usage history.",
            ],
            Policy::Optimal => &[
                "Looks ahead in the reference string.",
                "Chooses the page with farthest future use.",
                "Gives minimum possible page faults.",
            ],
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Policy::Fifo => "FIFO",
            Policy::Lru => "LRU",
            Policy::Optimal => "Optimal",
        };
        f.pad(name)
    }
}

impl FromStr for Policy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" => Ok(Policy::Fifo),
            "lru" => Ok(Policy::Lru),
            "optimal" | "opt" => Ok(Policy::Optimal),
            _ => Err(Error::InvalidPolicy(s.to_string())),
        }
    }
}
