// Team director trait definition.

use teamforge_core::{HeroId, TeamScore};

use crate::evaluator::Evaluation;

// A team director owns a partially built team and scores it on demand.
//
// Members are added and removed in stack order, which is how a
// backtracking search builds teams:
// - `push` adds a hero that is not yet on the team
// - `pop` removes the most recently added hero
// - `evaluate` scores the current members
pub trait TeamDirector {
    // Adds a hero to the team.
    fn push(&mut self, hero: HeroId);

    // Removes and returns the most recently added hero.
    fn pop(&mut self) -> Option<HeroId>;

    // Current members in insertion order.
    fn members(&self) -> &[HeroId];

    // Number of current members.
    fn len(&self) -> usize {
        self.members().len()
    }

    fn is_empty(&self) -> bool {
        self.members().is_empty()
    }

    // Current tally of the gating trait, bonuses included.
    fn gate_tally(&self) -> u32;

    // Scores the current members.
    fn evaluate(&self) -> Evaluation;

    // Final score only; implementations may skip building the breakdown.
    fn score(&self) -> TeamScore {
        self.evaluate().score
    }
}
