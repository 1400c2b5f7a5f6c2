//! Team director with full recalculation.

use teamforge_core::HeroId;

use super::traits::TeamDirector;
use crate::evaluator::{Evaluation, TeamEvaluator};

/// A team director that re-tallies the whole team on every query.
///
/// This is inefficient but obviously correct - the reference the
/// incremental director is checked against.
#[derive(Debug, Clone)]
pub struct RecalculatingTeam<'a> {
    evaluator: TeamEvaluator<'a>,
    members: Vec<HeroId>,
}

impl<'a> RecalculatingTeam<'a> {
    pub fn new(evaluator: TeamEvaluator<'a>) -> Self {
        Self {
            evaluator,
            members: Vec::new(),
        }
    }
}

impl TeamDirector for RecalculatingTeam<'_> {
    fn push(&mut self, hero: HeroId) {
        debug_assert!(!self.members.contains(&hero), "{hero} already on team");
        self.members.push(hero);
    }

    fn pop(&mut self) -> Option<HeroId> {
        self.members.pop()
    }

    fn members(&self) -> &[HeroId] {
        &self.members
    }

    fn gate_tally(&self) -> u32 {
        let gate = self.evaluator.rules().gate_trait;
        self.evaluator.tally(&self.members).get(gate)
    }

    fn evaluate(&self) -> Evaluation {
        self.evaluator.evaluate(&self.members)
    }
}
