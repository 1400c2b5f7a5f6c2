//! Search statistics.
//!
//! Plain counters kept per traversal and summed across parallel workers.

use std::ops::AddAssign;
use std::time::Duration;

/// Counters for one search run.
///
/// # Example
///
/// ```
/// use teamforge_solver::stats::SearchStats;
///
/// let mut a = SearchStats::default();
/// a.record_node();
/// a.record_leaf();
///
/// let mut b = SearchStats::default();
/// b.record_gate_prune();
///
/// a += b;
/// assert_eq!(a.nodes_visited, 1);
/// assert_eq!(a.leaves_evaluated, 1);
/// assert_eq!(a.gate_pruned, 1);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// Search tree nodes entered (pruned search) or combinations generated
    /// (exhaustive search).
    pub nodes_visited: u64,
    /// Complete teams scored.
    pub leaves_evaluated: u64,
    /// Subtrees cut because the gate could no longer be met.
    pub gate_pruned: u64,
    /// Subtrees cut because too few candidates remained.
    pub capacity_pruned: u64,
    /// Complete teams dropped for missing the gate (exhaustive enforce mode).
    pub gate_rejected: u64,
}

impl SearchStats {
    #[inline]
    pub fn record_node(&mut self) {
        self.nodes_visited += 1;
    }

    #[inline]
    pub fn record_leaf(&mut self) {
        self.leaves_evaluated += 1;
    }

    #[inline]
    pub fn record_gate_prune(&mut self) {
        self.gate_pruned += 1;
    }

    #[inline]
    pub fn record_capacity_prune(&mut self) {
        self.capacity_pruned += 1;
    }

    #[inline]
    pub fn record_gate_reject(&mut self) {
        self.gate_rejected += 1;
    }

    /// Leaves evaluated per second over `elapsed`.
    pub fn leaves_per_second(&self, elapsed: Duration) -> u64 {
        let secs = elapsed.as_secs_f64();
        if secs > 0.0 {
            (self.leaves_evaluated as f64 / secs) as u64
        } else {
            0
        }
    }
}

impl AddAssign for SearchStats {
    fn add_assign(&mut self, other: Self) {
        self.nodes_visited += other.nodes_visited;
        self.leaves_evaluated += other.leaves_evaluated;
        self.gate_pruned += other.gate_pruned;
        self.capacity_pruned += other.capacity_pruned;
        self.gate_rejected += other.gate_rejected;
    }
}
