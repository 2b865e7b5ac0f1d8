//! Policy engine tests.
//!
//! Classic textbook reference strings with hand-checked fault counts.

use pagesim::{Error, Outcome, PageId, Policy, PolicyEngine, Trace};

fn pages(ids: &[u32]) -> Vec<PageId> {
    ids.iter().copied().map(PageId::new).collect()
}

fn build(ids: &[u32], capacity: usize, policy: Policy) -> Trace {
    PolicyEngine::build(&pages(ids), capacity, policy).unwrap()
}

fn outcomes(trace: &Trace) -> Vec<Outcome> {
    trace.iter().map(|e| e.outcome).collect()
}

const SHORT: [u32; 8] = [7, 0, 1, 2, 0, 3, 0, 4];
const BELADY: [u32; 12] = [1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5];

// ============================================================================
// Short string, 3 frames
// ============================================================================

#[test]
fn test_short_string_lru() {
    let trace = build(&SHORT, 3, Policy::Lru);
    let stats = trace.stats();

    assert_eq!(stats.total_accesses, 8);
    assert_eq!(stats.fault_count, 6);
    assert_eq!(stats.hit_count, 2);
    assert!(trace.get(4).unwrap().is_hit());
    assert!(trace.get(6).unwrap().is_hit());
}

#[test]
fn test_short_string_fifo_diverges_from_lru() {
    let trace = build(&SHORT, 3, Policy::Fifo);

    // 0 is the oldest resident when 3 arrives, so the later 0 faults
    assert_eq!(trace.get(5).unwrap().evicted, Some(PageId::new(0)));
    assert!(trace.get(6).unwrap().is_fault());
    assert_eq!(trace.stats().fault_count, 7);
    assert_eq!(trace.stats().hit_count, 1);
}

#[test]
fn test_short_string_optimal() {
    let trace = build(&SHORT, 3, Policy::Optimal);
    assert_eq!(trace.stats().fault_count, 6);
    assert_eq!(
        outcomes(&trace),
        vec![
            Outcome::Miss,
            Outcome::Miss,
            Outcome::Miss,
            Outcome::Miss,
            Outcome::Hit,
            Outcome::Miss,
            Outcome::Hit,
            Outcome::Miss,
        ]
    );
}

// ============================================================================
// Belady's string, 3 frames
// ============================================================================

#[test]
fn test_belady_string_fault_counts() {
    let fifo = build(&BELADY, 3, Policy::Fifo).stats().fault_count;
    let lru = build(&BELADY, 3, Policy::Lru).stats().fault_count;
    let optimal = build(&BELADY, 3, Policy::Optimal).stats().fault_count;

    assert_eq!(fifo, 9);
    assert_eq!(lru, 10);
    assert_eq!(optimal, 7);
    assert!(optimal <= fifo && optimal <= lru);
}

#[test]
fn test_belady_anomaly_fifo() {
    // FIFO faults more with 4 frames than with 3 on this string
    let three = build(&BELADY, 3, Policy::Fifo).stats().fault_count;
    let four = build(&BELADY, 4, Policy::Fifo).stats().fault_count;
    assert_eq!(four, 10);
    assert!(four > three);
}

#[test]
fn test_optimal_evicts_never_used_page() {
    let trace = build(&BELADY, 3, Policy::Optimal);

    // Step 9: residents 1, 2, 5; only 5 is requested again -> evict 1 (slot 0)
    let ev = trace.get(9).unwrap();
    assert_eq!(ev.evicted, Some(PageId::new(1)));
    assert_eq!(ev.loaded_into.map(|f| f.0), Some(0));
}

// ============================================================================
// Degenerate capacities
// ============================================================================

#[test]
fn test_single_frame_all_policies_agree() {
    for policy in Policy::ALL {
        let trace = build(&[1, 2, 1, 2], 1, policy);

        assert_eq!(trace.stats().fault_count, 4, "{}", policy);
        assert_eq!(trace.get(0).unwrap().evicted, None);
        for step in 1..4 {
            let ev = trace.get(step).unwrap();
            assert!(ev.is_fault());
            assert_eq!(ev.evicted, Some(trace.get(step - 1).unwrap().page));
        }
    }
}

#[test]
fn test_capacity_larger_than_distinct_pages() {
    let trace = build(&[1, 2, 1, 3, 2], 10, Policy::Lru);
    assert_eq!(trace.stats().fault_count, 3);
    assert_eq!(trace.stats().eviction_count, 0);
    assert_eq!(trace.get(4).unwrap().frames_after.len(), 10);
}

// ============================================================================
// Invalid input
// ============================================================================

#[test]
fn test_invalid_input_produces_no_trace() {
    for policy in Policy::ALL {
        assert!(matches!(
            PolicyEngine::build(&[], 3, policy),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            PolicyEngine::build(&pages(&[1, 2]), 0, policy),
            Err(Error::InvalidInput(_))
        ));
    }
}

#[test]
fn test_invalid_policy_text() {
    assert!(matches!("random".parse::<Policy>(), Err(Error::InvalidPolicy(_))));
}
