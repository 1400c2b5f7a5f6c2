//! Team evaluation from scratch.
//!
//! The evaluator is a pure function of (team, bonuses): tally every member's
//! traits, add the special-ability and flat enhancement offsets, then score
//! reached synergy tiers, quality and the gate bonus or penalty.

use std::collections::BTreeMap;

use teamforge_core::{Catalog, Hero, HeroId, ScoringRules, TeamScore, TraitId};

use crate::bonus::MatchBonuses;
use crate::tally::TraitTally;

/// Highest tier reached per trait. Traits meeting no threshold are omitted.
pub type SynergyBreakdown = BTreeMap<TraitId, u32>;

/// The outcome of scoring one team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// Final score, including the gate bonus or penalty.
    pub score: TeamScore,
    /// Sum of `tier * tier_weight` over reached tiers.
    pub synergy_score: i64,
    /// Sum of member quality values.
    pub quality_score: i64,
    /// Whether the gating trait tally met its threshold.
    pub gate_active: bool,
    pub breakdown: SynergyBreakdown,
}

/// Scores teams against a catalog, rules and per-match bonuses.
///
/// Cheap to copy; holds only borrows.
#[derive(Debug, Clone, Copy)]
pub struct TeamEvaluator<'a> {
    catalog: &'a Catalog,
    rules: &'a ScoringRules,
    bonuses: &'a MatchBonuses,
}

impl<'a> TeamEvaluator<'a> {
    pub fn new(catalog: &'a Catalog, rules: &'a ScoringRules, bonuses: &'a MatchBonuses) -> Self {
        Self {
            catalog,
            rules,
            bonuses,
        }
    }

    #[inline]
    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    #[inline]
    pub fn rules(&self) -> &'a ScoringRules {
        self.rules
    }

    #[inline]
    pub fn bonuses(&self) -> &'a MatchBonuses {
        self.bonuses
    }

    /// Scores `team` from scratch.
    ///
    /// `team` must hold distinct identities issued by the catalog.
    pub fn evaluate(&self, team: &[HeroId]) -> Evaluation {
        let tally = self.tally(team);
        let quality: i64 = team.iter().map(|&h| self.catalog.hero(h).quality()).sum();
        self.score_tally(&tally, quality)
    }

    /// Builds the full trait tally of `team`, bonuses included.
    pub fn tally(&self, team: &[HeroId]) -> TraitTally {
        let mut tally = self.base_tally();
        for &id in team {
            self.add_member(&mut tally, self.catalog.hero(id));
        }
        tally
    }

    /// A tally holding only the flat enhancements.
    pub fn base_tally(&self) -> TraitTally {
        let mut tally = TraitTally::for_catalog(self.catalog);
        for (&t, &amount) in self.bonuses.enhancements() {
            tally.add(t, amount);
        }
        tally
    }

    /// Adds one member's innate traits and special-ability credit.
    #[inline]
    pub fn add_member(&self, tally: &mut TraitTally, hero: &Hero) {
        for &t in hero.traits() {
            tally.increment(t);
        }
        if let Some(special) = self.special_credit(hero.id()) {
            tally.increment(special);
        }
    }

    /// Exactly reverses [`add_member`](Self::add_member).
    #[inline]
    pub fn remove_member(&self, tally: &mut TraitTally, hero: &Hero) {
        for &t in hero.traits() {
            tally.decrement(t);
        }
        if let Some(special) = self.special_credit(hero.id()) {
            tally.decrement(special);
        }
    }

    #[inline]
    fn special_credit(&self, hero: HeroId) -> Option<TraitId> {
        self.rules
            .special_trait
            .filter(|_| self.bonuses.is_special(hero))
    }

    /// How much one hero raises the gating trait tally when added.
    pub fn gate_credit(&self, hero: &Hero) -> u32 {
        let gate = self.rules.gate_trait;
        let innate = u32::from(hero.has_trait(gate));
        let special = u32::from(self.special_credit(hero.id()) == Some(gate));
        innate + special
    }

    /// Gating trait tally contributed by the flat enhancements alone.
    pub fn gate_offset(&self) -> u32 {
        self.bonuses.enhancement(self.rules.gate_trait)
    }

    #[inline]
    pub fn gate_active(&self, tally: &TraitTally) -> bool {
        tally.get(self.rules.gate_trait) >= self.rules.gate_threshold
    }

    /// Scores an already built tally (steps after tallying).
    pub fn score_tally(&self, tally: &TraitTally, quality: i64) -> Evaluation {
        let gate_active = self.gate_active(tally);
        let (synergy_score, breakdown) = self.synergy(tally);
        Evaluation {
            score: TeamScore::of(synergy_score + quality + self.gate_term(gate_active)),
            synergy_score,
            quality_score: quality,
            gate_active,
            breakdown,
        }
    }

    /// Same total as [`score_tally`](Self::score_tally) without building the
    /// breakdown.
    pub fn score_only(&self, tally: &TraitTally, quality: i64) -> TeamScore {
        let synergy: i64 = tally
            .iter()
            .filter_map(|(t, count)| self.catalog.trait_def(t).tier_reached(count))
            .map(|tier| i64::from(tier) * self.rules.tier_weight)
            .sum();
        TeamScore::of(synergy + quality + self.gate_term(self.gate_active(tally)))
    }

    #[inline]
    fn gate_term(&self, active: bool) -> i64 {
        if active {
            self.rules.gate_bonus
        } else {
            -self.rules.gate_bonus
        }
    }

    fn synergy(&self, tally: &TraitTally) -> (i64, SynergyBreakdown) {
        let mut score = 0;
        let mut breakdown = SynergyBreakdown::new();
        for (t, count) in tally.iter() {
            if let Some(tier) = self.catalog.trait_def(t).tier_reached(count) {
                score += i64::from(tier) * self.rules.tier_weight;
                breakdown.insert(t, tier);
            }
        }
        (score, breakdown)
    }
}
