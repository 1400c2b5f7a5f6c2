//! Exhaustive enumeration with from-scratch scoring.

use teamforge_config::GateMode;
use teamforge_core::{HeroId, Result, TeamForgeError};
use teamforge_scoring::TeamEvaluator;

use super::{terminated, CombinationIterator};
use crate::prepass::SearchPool;
use crate::stats::SearchStats;
use crate::termination::Termination;
use crate::topk::{ranked, RankedTeam, TopK};

/// Scores every way of filling the free slots.
///
/// Each team is tallied independently through
/// [`TeamEvaluator::evaluate`]. With [`GateMode::Enforce`] teams that miss
/// the gate are dropped; with [`GateMode::Penalty`] they compete with the
/// penalty applied.
#[derive(Debug, Clone, Copy)]
pub struct ExhaustiveEnumerator<'a> {
    evaluator: TeamEvaluator<'a>,
    pool: &'a SearchPool,
    gate_mode: GateMode,
    termination: Option<&'a dyn Termination>,
}

impl<'a> ExhaustiveEnumerator<'a> {
    pub fn new(evaluator: TeamEvaluator<'a>, pool: &'a SearchPool, gate_mode: GateMode) -> Self {
        Self {
            evaluator,
            pool,
            gate_mode,
            termination: None,
        }
    }

    /// Polls `termination` before every evaluation.
    pub fn with_termination(mut self, termination: &'a dyn Termination) -> Self {
        self.termination = Some(termination);
        self
    }

    /// Returns the best `top_k` teams, best first.
    pub fn run(&self, top_k: usize) -> Result<(Vec<RankedTeam>, SearchStats)> {
        let mut top = TopK::new(top_k);
        let mut stats = SearchStats::default();
        let candidates = self.pool.candidates();
        let core_len = self.pool.core().len();

        let mut team: Vec<HeroId> = Vec::with_capacity(core_len + self.pool.slots());
        team.extend_from_slice(self.pool.core());

        for picks in CombinationIterator::new(candidates.len(), self.pool.slots()) {
            if terminated(self.termination) {
                return Err(TeamForgeError::Cancelled);
            }
            stats.record_node();

            team.truncate(core_len);
            team.extend(picks.iter().map(|&i| candidates[i]));

            let eval = self.evaluator.evaluate(&team);
            if self.gate_mode == GateMode::Enforce && !eval.gate_active {
                stats.record_gate_reject();
                continue;
            }
            stats.record_leaf();
            let score = eval.score;
            top.offer_with(score, || ranked(score, &team, eval.breakdown));
        }

        Ok((top.into_sorted(), stats))
    }
}
