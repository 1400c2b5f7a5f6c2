//! Per-match bonus inputs consumed by the evaluator.

use std::collections::{BTreeMap, BTreeSet};

use teamforge_core::{HeroId, TraitId};

/// Per-match bonuses, already validated by the selection layer.
///
/// - `special`: heroes that, when on the team, each add one tally to the
///   special trait (at most two in practice; not checked here).
/// - `enhancements`: flat per-trait tally offsets applied once per team.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchBonuses {
    special: BTreeSet<HeroId>,
    enhancements: BTreeMap<TraitId, u32>,
}

impl MatchBonuses {
    /// No special ability and no enhancements.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn new(special: BTreeSet<HeroId>, enhancements: BTreeMap<TraitId, u32>) -> Self {
        Self {
            special,
            enhancements,
        }
    }

    pub fn with_special(mut self, heroes: impl IntoIterator<Item = HeroId>) -> Self {
        self.special.extend(heroes);
        self
    }

    /// Adds `amount` to the enhancement of `t`; repeated calls accumulate,
    /// saturating at `u32::MAX`.
    pub fn with_enhancement(mut self, t: TraitId, amount: u32) -> Self {
        let slot = self.enhancements.entry(t).or_insert(0);
        *slot = slot.saturating_add(amount);
        self
    }

    #[inline]
    pub fn special(&self) -> &BTreeSet<HeroId> {
        &self.special
    }

    #[inline]
    pub fn enhancements(&self) -> &BTreeMap<TraitId, u32> {
        &self.enhancements
    }

    #[inline]
    pub fn is_special(&self, hero: HeroId) -> bool {
        self.special.contains(&hero)
    }

    /// Flat enhancement on `t`, zero when none.
    pub fn enhancement(&self, t: TraitId) -> u32 {
        self.enhancements.get(&t).copied().unwrap_or(0)
    }
}
