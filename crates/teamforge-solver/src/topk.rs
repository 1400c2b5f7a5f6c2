//! Bounded best-of collector.
//!
//! Keeps the K highest-scoring teams seen in a min-ordered binary heap.
//! Below capacity every entry is kept; at capacity the current minimum is
//! replaced only by a strictly higher score.
//!
//! Equal scores rank by arrival: an entry's arrival is `(lane, sequence)`,
//! where the lane is the first-level search branch and the sequence counts
//! entries within it. Lanes explored on different workers therefore merge
//! into exactly the list a single worker would have produced.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use teamforge_core::{HeroId, TeamScore};
use teamforge_scoring::SynergyBreakdown;

/// One result of a team search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedTeam {
    pub score: TeamScore,
    /// Member identities in ascending order.
    pub team: Vec<HeroId>,
    /// Highest tier reached per trait.
    pub breakdown: SynergyBreakdown,
}

/// `(lane, sequence)`; lower arrives earlier.
type Arrival = (usize, u64);

#[derive(Debug)]
struct Slot {
    arrival: Arrival,
    entry: RankedTeam,
}

impl Eq for Slot {}

impl PartialEq for Slot {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Ord for Slot {
    fn cmp(&self, other: &Self) -> Ordering {
        // Greater is better: higher score, then earlier arrival
        self.entry
            .score
            .cmp(&other.entry.score)
            .then_with(|| other.arrival.cmp(&self.arrival))
    }
}

impl PartialOrd for Slot {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The K best teams seen so far.
///
/// # Example
///
/// ```
/// use teamforge_core::TeamScore;
/// use teamforge_solver::{RankedTeam, TopK};
///
/// let mut top = TopK::new(2);
/// for score in [5, 9, 1, 7] {
///     top.offer(RankedTeam {
///         score: TeamScore::of(score),
///         team: Vec::new(),
///         breakdown: Default::default(),
///     });
/// }
///
/// let scores: Vec<i64> = top.into_sorted().iter().map(|r| r.score.value()).collect();
/// assert_eq!(scores, vec![9, 7]);
/// ```
#[derive(Debug)]
pub struct TopK {
    capacity: usize,
    lane: usize,
    next_seq: u64,
    heap: BinaryHeap<Reverse<Slot>>,
}

impl TopK {
    /// Creates an empty collector on lane 0.
    pub fn new(capacity: usize) -> Self {
        Self::for_lane(capacity, 0)
    }

    /// Creates an empty collector whose entries arrive on `lane`.
    pub fn for_lane(capacity: usize, lane: usize) -> Self {
        Self {
            capacity,
            lane,
            next_seq: 0,
            heap: BinaryHeap::with_capacity(capacity.saturating_add(1).min(1024)),
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Lowest retained score, if any.
    pub fn min_score(&self) -> Option<TeamScore> {
        self.heap.peek().map(|Reverse(slot)| slot.entry.score)
    }

    /// Whether an entry with `score` would be retained.
    #[inline]
    pub fn admits(&self, score: TeamScore) -> bool {
        if self.capacity == 0 {
            return false;
        }
        if self.heap.len() < self.capacity {
            return true;
        }
        self.min_score().is_some_and(|min| score > min)
    }

    /// Offers an entry; returns whether it was retained.
    pub fn offer(&mut self, entry: RankedTeam) -> bool {
        let score = entry.score;
        self.offer_with(score, || entry)
    }

    /// Offers an entry built lazily, only if `score` is admitted.
    ///
    /// `build` must produce an entry whose score equals `score`.
    pub fn offer_with(&mut self, score: TeamScore, build: impl FnOnce() -> RankedTeam) -> bool {
        if !self.admits(score) {
            return false;
        }
        let entry = build();
        debug_assert_eq!(entry.score, score);
        let slot = Slot {
            arrival: (self.lane, self.next_seq),
            entry,
        };
        self.next_seq += 1;
        if self.heap.len() == self.capacity {
            self.heap.pop();
        }
        self.heap.push(Reverse(slot));
        true
    }

    fn into_slots(self) -> Vec<Slot> {
        self.heap.into_iter().map(|Reverse(slot)| slot).collect()
    }

    /// Retained entries, best first.
    pub fn into_sorted(self) -> Vec<RankedTeam> {
        let capacity = self.capacity;
        Self::merge([self], capacity)
    }

    /// Merges per-lane collectors into the global best `k`, best first.
    pub fn merge(lanes: impl IntoIterator<Item = TopK>, k: usize) -> Vec<RankedTeam> {
        let mut slots: Vec<Slot> = lanes.into_iter().flat_map(TopK::into_slots).collect();
        slots.sort_unstable_by(|a, b| b.cmp(a));
        slots.truncate(k);
        slots.into_iter().map(|slot| slot.entry).collect()
    }
}

/// Builds a ranked entry from unsorted members.
pub(crate) fn ranked(
    score: TeamScore,
    members: &[HeroId],
    breakdown: SynergyBreakdown,
) -> RankedTeam {
    let mut team = members.to_vec();
    team.sort_unstable();
    RankedTeam {
        score,
        team,
        breakdown,
    }
}
