//! Incremental depth-first search with gate pruning.
//!
//! Candidates are taken in strictly increasing pool position, so each set of
//! heroes is visited once. The running tally lives in an
//! [`IncrementalTeam`] owned by the traversal: a hero is pushed before its
//! subtree is explored and popped after, restoring the exact prior state.
//!
//! Before descending into candidate `i` with `picks` slots to fill, the
//! search checks
//! - capacity: at least `picks` candidates remain from `i`
//! - gate (enforce mode only): current gate tally plus the best `picks`
//!   credits from `i` onward reaches the threshold
//!
//! Pool credits are non-increasing, so once either check fails for `i` it
//! fails for every later sibling and the loop stops.

use rayon::prelude::*;
use teamforge_config::GateMode;
use teamforge_core::{Result, TeamForgeError};
use teamforge_scoring::{IncrementalTeam, TeamDirector, TeamEvaluator};
use tracing::{debug, warn};

use super::terminated;
use crate::prepass::SearchPool;
use crate::stats::SearchStats;
use crate::termination::Termination;
use crate::topk::{ranked, RankedTeam, TopK};

/// Branch-and-bound enumerator over the ordered free pool.
#[derive(Debug, Clone, Copy)]
pub struct PrunedEnumerator<'a> {
    evaluator: TeamEvaluator<'a>,
    pool: &'a SearchPool,
    gate_mode: GateMode,
    termination: Option<&'a dyn Termination>,
}

/// Outcome of a sibling check.
enum Step {
    Descend,
    CapacityExhausted,
    GateUnreachable,
}

impl<'a> PrunedEnumerator<'a> {
    pub fn new(evaluator: TeamEvaluator<'a>, pool: &'a SearchPool, gate_mode: GateMode) -> Self {
        Self {
            evaluator,
            pool,
            gate_mode,
            termination: None,
        }
    }

    /// Polls `termination` at every node.
    pub fn with_termination(mut self, termination: &'a dyn Termination) -> Self {
        self.termination = Some(termination);
        self
    }

    /// Returns the best `top_k` teams, best first.
    ///
    /// With `threads > 1` the tree is split at its first level and the
    /// branches run on a rayon pool, each with its own team state and
    /// collector. The merged list equals the single-threaded one.
    pub fn run(&self, top_k: usize, threads: usize) -> Result<(Vec<RankedTeam>, SearchStats)> {
        if !self.root_feasible() {
            let mut stats = SearchStats::default();
            stats.record_node();
            stats.record_gate_prune();
            return Ok((Vec::new(), stats));
        }
        if threads > 1 && self.pool.slots() > 0 {
            match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
                Ok(workers) => return workers.install(|| self.run_parallel(top_k)),
                Err(err) => {
                    warn!(error = %err, "Thread pool unavailable, searching on one thread");
                }
            }
        }

        let mut top = TopK::new(top_k);
        let mut stats = SearchStats::default();
        let mut team = self.core_team();
        self.descend(
            &mut team,
            0,
            self.pool.slots(),
            &mut stats,
            &mut |team: &IncrementalTeam<'a>| offer(&mut top, team),
        )?;
        Ok((top.into_sorted(), stats))
    }

    fn run_parallel(&self, top_k: usize) -> Result<(Vec<RankedTeam>, SearchStats)> {
        let mut stats = SearchStats::default();
        let branches = self.branches(&mut stats);

        let lanes = branches
            .par_iter()
            .map(|&first| self.run_branch(first, top_k))
            .collect::<Result<Vec<_>>>()?;

        let mut tops = Vec::with_capacity(lanes.len());
        for (top, lane_stats) in lanes {
            stats += lane_stats;
            tops.push(top);
        }
        Ok((TopK::merge(tops, top_k), stats))
    }

    /// Runs the subtree whose first free pick is pool position `first`.
    fn run_branch(&self, first: usize, top_k: usize) -> Result<(TopK, SearchStats)> {
        let mut top = TopK::for_lane(top_k, first);
        let mut stats = SearchStats::default();
        let mut team = self.core_team();

        team.push(self.pool.candidates()[first]);
        self.descend(
            &mut team,
            first + 1,
            self.pool.slots() - 1,
            &mut stats,
            &mut |team: &IncrementalTeam<'a>| offer(&mut top, team),
        )?;

        debug!(
            event = "branch_end",
            branch = first,
            nodes = stats.nodes_visited,
            leaves = stats.leaves_evaluated,
        );
        Ok((top, stats))
    }

    /// Pool positions worth exploring as the first free pick.
    ///
    /// Records the root node and any root-level prune in `stats`.
    pub fn branches(&self, stats: &mut SearchStats) -> Vec<usize> {
        stats.record_node();
        let picks = self.pool.slots();
        let gate = self.pool.core_gate();
        let mut out = Vec::new();
        for i in 0..self.pool.candidates().len() {
            match self.step(gate, i, picks) {
                Step::Descend => out.push(i),
                Step::CapacityExhausted => {
                    stats.record_capacity_prune();
                    break;
                }
                Step::GateUnreachable => {
                    stats.record_gate_prune();
                    break;
                }
            }
        }
        out
    }

    /// Visits every complete team the search reaches, in search order.
    pub fn for_each_team<F>(&self, stats: &mut SearchStats, visit: &mut F) -> Result<()>
    where
        F: FnMut(&IncrementalTeam<'a>),
    {
        if !self.root_feasible() {
            stats.record_node();
            stats.record_gate_prune();
            return Ok(());
        }
        let mut team = self.core_team();
        self.descend(&mut team, 0, self.pool.slots(), stats, visit)
    }

    // In enforce mode some completion of the core must reach the gate.
    fn root_feasible(&self) -> bool {
        self.gate_mode == GateMode::Penalty || self.pool.gate_feasible()
    }

    fn core_team(&self) -> IncrementalTeam<'a> {
        let mut team = IncrementalTeam::new(self.evaluator);
        for &h in self.pool.core() {
            team.push(h);
        }
        team
    }

    #[inline]
    fn step(&self, gate: u32, position: usize, picks: usize) -> Step {
        let n = self.pool.candidates().len();
        if n - position < picks {
            return Step::CapacityExhausted;
        }
        if self.gate_mode == GateMode::Enforce
            && gate.saturating_add(self.pool.max_gate_gain(position, picks))
                < self.pool.gate_threshold()
        {
            return Step::GateUnreachable;
        }
        Step::Descend
    }

    fn descend<F>(
        &self,
        team: &mut IncrementalTeam<'a>,
        start: usize,
        picks: usize,
        stats: &mut SearchStats,
        visit: &mut F,
    ) -> Result<()>
    where
        F: FnMut(&IncrementalTeam<'a>),
    {
        stats.record_node();
        if terminated(self.termination) {
            return Err(TeamForgeError::Cancelled);
        }

        if picks == 0 {
            debug_assert!(
                self.gate_mode == GateMode::Penalty || self.evaluator.gate_active(team.tally()),
                "leaf {:?} misses the gate",
                team.members()
            );
            stats.record_leaf();
            visit(team);
            return Ok(());
        }

        let gate = team.gate_tally();
        let candidates = self.pool.candidates();
        for i in start..candidates.len() {
            match self.step(gate, i, picks) {
                Step::Descend => {}
                Step::CapacityExhausted => {
                    stats.record_capacity_prune();
                    break;
                }
                Step::GateUnreachable => {
                    stats.record_gate_prune();
                    break;
                }
            }
            team.push(candidates[i]);
            let result = self.descend(team, i + 1, picks - 1, stats, visit);
            team.pop();
            result?;
        }
        Ok(())
    }
}

fn offer(top: &mut TopK, team: &IncrementalTeam<'_>) {
    top.offer_with(team.score(), || {
        let eval = team.evaluate();
        ranked(eval.score, team.members(), eval.breakdown)
    });
}
