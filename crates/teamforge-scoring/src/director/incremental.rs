//! Incremental team director.
//!
//! Maintains the running trait tally, quality sum and member stack across a
//! backtracking traversal. Adding a hero increments its trait tallies (and
//! the special trait, if it is a special-ability hero) and adds its quality;
//! removing the hero reverses exactly those updates. Flat enhancements are
//! folded in once at construction.
//!
//! Owned by a single traversal: parallel workers each build their own.

use smallvec::SmallVec;
use teamforge_core::{HeroId, TeamScore};

use super::traits::TeamDirector;
use crate::evaluator::{Evaluation, TeamEvaluator};
use crate::tally::TraitTally;

/// Running team state with O(traits-per-hero) push and pop.
///
/// # Example
///
/// ```
/// use teamforge_core::{CatalogBuilder, HeroId, ScoringRules, TraitId};
/// use teamforge_scoring::{IncrementalTeam, MatchBonuses, TeamDirector, TeamEvaluator};
///
/// let catalog = CatalogBuilder::new()
///     .add_trait("Metro Zero", [2])
///     .add_hero("X.Borg", 5, ["Metro Zero"])
///     .add_hero("Roger", 2, ["Metro Zero"])
///     .build()
///     .unwrap();
/// let rules = ScoringRules::new(TraitId::new(0));
/// let bonuses = MatchBonuses::none();
/// let mut team = IncrementalTeam::new(TeamEvaluator::new(&catalog, &rules, &bonuses));
///
/// team.push(HeroId::new(0));
/// team.push(HeroId::new(1));
/// // 2 * 10 synergy + 7 quality + 500 gate bonus
/// assert_eq!(team.evaluate().score.value(), 527);
///
/// team.pop();
/// assert_eq!(team.gate_tally(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct IncrementalTeam<'a> {
    evaluator: TeamEvaluator<'a>,
    tally: TraitTally,
    quality: i64,
    members: SmallVec<[HeroId; 12]>,
}

impl<'a> IncrementalTeam<'a> {
    /// Creates an empty team whose tally already holds the flat enhancements.
    pub fn new(evaluator: TeamEvaluator<'a>) -> Self {
        Self {
            tally: evaluator.base_tally(),
            evaluator,
            quality: 0,
            members: SmallVec::new(),
        }
    }

    #[inline]
    pub fn tally(&self) -> &TraitTally {
        &self.tally
    }

    #[inline]
    pub fn quality(&self) -> i64 {
        self.quality
    }

    #[inline]
    pub fn evaluator(&self) -> TeamEvaluator<'a> {
        self.evaluator
    }
}

impl TeamDirector for IncrementalTeam<'_> {
    #[inline]
    fn push(&mut self, hero: HeroId) {
        debug_assert!(!self.members.contains(&hero), "{hero} already on team");
        let h = self.evaluator.catalog().hero(hero);
        self.evaluator.add_member(&mut self.tally, h);
        self.quality += h.quality();
        self.members.push(hero);
    }

    #[inline]
    fn pop(&mut self) -> Option<HeroId> {
        let hero = self.members.pop()?;
        let h = self.evaluator.catalog().hero(hero);
        self.evaluator.remove_member(&mut self.tally, h);
        self.quality -= h.quality();
        Some(hero)
    }

    #[inline]
    fn members(&self) -> &[HeroId] {
        &self.members
    }

    #[inline]
    fn gate_tally(&self) -> u32 {
        self.tally.get(self.evaluator.rules().gate_trait)
    }

    fn evaluate(&self) -> Evaluation {
        self.evaluator.score_tally(&self.tally, self.quality)
    }

    #[inline]
    fn score(&self) -> TeamScore {
        self.evaluator.score_only(&self.tally, self.quality)
    }
}
