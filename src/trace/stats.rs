//! Trace summary statistics.

use std::fmt;

use serde::Serialize;

use super::StepEvent;

/// Aggregate counters of a finished trace.
///
/// Always satisfies `hit_count + fault_count == total_accesses`.
///
/// # Example
/// ```
/// use pagesim::{PolicyEngine, Policy, ReferenceString};
///
/// let refs = ReferenceString::from_ids([1, 2, 1, 2]).unwrap();
/// let stats = PolicyEngine::build(&refs, 1, Policy::Lru).unwrap().stats();
/// println!("{}", stats);  // Stats { total: 4, hits: 0, faults: 4, ... }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TraceStats {
    pub total_accesses: u64,
    pub hit_count: u64,
    pub fault_count: u64,

    /// Faults that had to remove a resident page (no empty slot left).
    pub eviction_count: u64,
}

impl TraceStats {
    /// Count outcomes over `events`.
    pub fn from_events(events: &[StepEvent]) -> Self {
        events.iter().fold(Self::default(), |mut stats, ev| {
            stats.total_accesses += 1;
            if ev.is_hit() {
                stats.hit_count += 1;
            } else {
                stats.fault_count += 1;
            }
            if ev.evicted.is_some() {
                stats.eviction_count += 1;
            }
            stats
        })
    }

    /// Calculate hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        if self.total_accesses == 0 {
            0.0
        } else {
            self.hit_count as f64 / self.total_accesses as f64
        }
    }

    /// Calculate fault rate (0.0 to 1.0).
    pub fn fault_rate(&self) -> f64 {
        if self.total_accesses == 0 {
            0.0
        } else {
            self.fault_count as f64 / self.total_accesses as f64
        }
    }
}

impl fmt::Display for TraceStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ total: {}, hits: {}, faults: {}, evictions: {}, hit_rate: {:.2}% }}",
            self.total_accesses,
            self.hit_count,
            self.fault_count,
            self.eviction_count,
            self.hit_rate() * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{FrameId, PageId};

    #[test]
    fn test_stats_empty() {
        let stats = TraceStats::from_events(&[]);
        assert_eq!(stats, TraceStats::default());
        assert_eq!(stats.hit_rate(), 0.0);
        assert_eq!(stats.fault_rate(), 0.0);
    }

    #[test]
    fn test_stats_counts() {
        let p = PageId::new(1);
        let events = vec![
            StepEvent::miss(0, p, vec![Some(p)], FrameId::new(0), None),
            StepEvent::hit(1, p, vec![Some(p)]),
            StepEvent::miss(2, PageId::new(2), vec![Some(PageId::new(2))], FrameId::new(0), Some(p)),
            StepEvent::miss(3, p, vec![Some(p)], FrameId::new(0), Some(PageId::new(2))),
        ];

        let stats = TraceStats::from_events(&events);
        assert_eq!(stats.total_accesses, 4);
        assert_eq!(stats.hit_count, 1);
        assert_eq!(stats.fault_count, 3);
        assert_eq!(stats.eviction_count, 2);
        assert_eq!(stats.hit_rate(), 0.25);
        assert_eq!(stats.fault_rate(), 0.75);
    }

    #[test]
    fn test_stats_display() {
        let stats = TraceStats {
            total_accesses: 8,
            hit_count: 2,
            fault_count: 6,
            eviction_count: 3,
        };
        let display = format!("{}", stats);

        assert!(display.contains("hits: 2"));
        assert!(display.contains("faults: 6"));
        assert!(display.contains("25.00%"));
    }
}
