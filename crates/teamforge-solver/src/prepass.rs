//! Constraint pre-pass.
//!
//! Splits the roster into the required core and the free pool, orders the
//! free pool so gate-eligible heroes come first (highest gate credit first,
//! identity order within equal credit), and precomputes prefix sums of gate
//! credit. Because credits are non-increasing along the pool, the most gate
//! tally any `k` more picks from position `i` onward can add is the sum of
//! the `k` credits starting at `i`, read in O(1) from the prefix sums.

use teamforge_core::{HeroId, Result, TeamForgeError};
use teamforge_scoring::TeamEvaluator;

/// The ordered free pool and gate feasibility data for one request.
#[derive(Debug, Clone)]
pub struct SearchPool {
    core: Vec<HeroId>,
    candidates: Vec<HeroId>,
    credits: Vec<u32>,
    // credit_prefix[i] = sum of credits[..i]
    credit_prefix: Vec<u32>,
    gate_eligible: usize,
    slots: usize,
    core_gate: u32,
    gate_threshold: u32,
}

impl SearchPool {
    /// Builds the pool for teams of `team_size` that include every hero in
    /// `core`. Repeated core identities count once.
    ///
    /// # Errors
    ///
    /// `InvalidRequest` for a zero team size or an identity the catalog did
    /// not issue; `CoreExceedsTeamSize` when the distinct core heroes do not
    /// fit.
    pub fn build(evaluator: &TeamEvaluator<'_>, team_size: usize, core: &[HeroId]) -> Result<Self> {
        let catalog = evaluator.catalog();
        if team_size == 0 {
            return Err(TeamForgeError::InvalidRequest(
                "team size must be at least 1".to_string(),
            ));
        }
        if let Some(bad) = core.iter().find(|&&h| !catalog.contains_hero(h)) {
            return Err(TeamForgeError::InvalidRequest(format!(
                "core hero {bad} is not in the catalog"
            )));
        }

        let mut core = core.to_vec();
        core.sort_unstable();
        core.dedup();
        if core.len() > team_size {
            return Err(TeamForgeError::CoreExceedsTeamSize {
                core: core.len(),
                team_size,
            });
        }

        let core_gate = core.iter().fold(evaluator.gate_offset(), |acc, &h| {
            acc.saturating_add(evaluator.gate_credit(catalog.hero(h)))
        });

        let mut pool: Vec<(HeroId, u32)> = catalog
            .heroes()
            .iter()
            .filter(|h| core.binary_search(&h.id()).is_err())
            .map(|h| (h.id(), evaluator.gate_credit(h)))
            .collect();
        // Stable: identity order is kept within equal credit
        pool.sort_by(|a, b| b.1.cmp(&a.1));

        let (candidates, credits): (Vec<HeroId>, Vec<u32>) = pool.into_iter().unzip();
        let gate_eligible = credits.iter().take_while(|&&c| c > 0).count();
        let mut credit_prefix = Vec::with_capacity(credits.len() + 1);
        credit_prefix.push(0);
        let mut running = 0;
        for &c in &credits {
            running += c;
            credit_prefix.push(running);
        }

        Ok(Self {
            slots: team_size - core.len(),
            core,
            candidates,
            credits,
            credit_prefix,
            gate_eligible,
            core_gate,
            gate_threshold: evaluator.rules().gate_threshold,
        })
    }

    /// Distinct required heroes, ascending.
    #[inline]
    pub fn core(&self) -> &[HeroId] {
        &self.core
    }

    /// The ordered free pool.
    #[inline]
    pub fn candidates(&self) -> &[HeroId] {
        &self.candidates
    }

    /// Gate credit of the candidate at `position`.
    #[inline]
    pub fn credit(&self, position: usize) -> u32 {
        self.credits[position]
    }

    /// Free-pool heroes with a positive gate credit.
    #[inline]
    pub fn gate_eligible(&self) -> usize {
        self.gate_eligible
    }

    /// Team slots left after the core.
    #[inline]
    pub fn slots(&self) -> usize {
        self.slots
    }

    /// Gate tally of the core plus flat enhancements.
    #[inline]
    pub fn core_gate(&self) -> u32 {
        self.core_gate
    }

    #[inline]
    pub fn gate_threshold(&self) -> u32 {
        self.gate_threshold
    }

    /// Gate tally the free picks must still add.
    #[inline]
    pub fn gate_needed(&self) -> u32 {
        self.gate_threshold.saturating_sub(self.core_gate)
    }

    /// Total gate credit in the free pool.
    #[inline]
    pub fn credit_available(&self) -> u32 {
        self.credit_prefix[self.candidates.len()]
    }

    /// Upper bound on the gate tally that `picks` more heroes chosen from
    /// `position` onward can add.
    #[inline]
    pub fn max_gate_gain(&self, position: usize, picks: usize) -> u32 {
        let n = self.candidates.len();
        let start = position.min(n);
        let end = position.saturating_add(picks).min(n);
        self.credit_prefix[end] - self.credit_prefix[start]
    }

    /// Whether the free pool can fill the remaining slots.
    #[inline]
    pub fn has_capacity(&self) -> bool {
        self.candidates.len() >= self.slots
    }

    /// Whether some completion of the core can meet the gate.
    pub fn gate_feasible(&self) -> bool {
        self.max_gate_gain(0, self.slots) >= self.gate_needed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use teamforge_scoring::MatchBonuses;
    use teamforge_test::{hero, metro_catalog, metro_rules, trait_id};

    #[test]
    fn test_gate_eligible_first() {
        let catalog = metro_catalog();
        let rules = metro_rules(&catalog);
        let bonuses = MatchBonuses::none();
        let evaluator = TeamEvaluator::new(&catalog, &rules, &bonuses);

        let pool = SearchPool::build(&evaluator, 3, &[]).unwrap();
        let names: Vec<&str> = pool
            .candidates()
            .iter()
            .map(|&h| catalog.hero(h).name())
            .collect();
        assert_eq!(&names[..3], &["X.Borg", "Roger", "Ixia"]);
        assert_eq!(names.len(), 10);
        assert_eq!(pool.gate_eligible(), 3);
        assert_eq!(pool.credit_available(), 3);
        assert_eq!(pool.gate_needed(), 2);
        assert!(pool.gate_feasible());
    }

    #[test]
    fn test_special_credit_orders_first() {
        let catalog = metro_catalog();
        let gate = trait_id(&catalog, "Metro Zero");
        let rules = metro_rules(&catalog).with_special_trait(gate);
        let bonuses = MatchBonuses::none().with_special([hero(&catalog, "Roger")]);
        let evaluator = TeamEvaluator::new(&catalog, &rules, &bonuses);

        let pool = SearchPool::build(&evaluator, 2, &[]).unwrap();
        assert_eq!(pool.candidates()[0], hero(&catalog, "Roger"));
        assert_eq!(pool.credit(0), 2);
        // Roger alone meets the gate.
        assert_eq!(pool.max_gate_gain(0, 1), 2);
    }

    #[test]
    fn test_max_gate_gain_windows() {
        let catalog = metro_catalog();
        let rules = metro_rules(&catalog);
        let bonuses = MatchBonuses::none();
        let evaluator = TeamEvaluator::new(&catalog, &rules, &bonuses);
        let pool = SearchPool::build(&evaluator, 5, &[]).unwrap();

        assert_eq!(pool.max_gate_gain(0, 5), 3);
        assert_eq!(pool.max_gate_gain(0, 2), 2);
        assert_eq!(pool.max_gate_gain(2, 4), 1);
        assert_eq!(pool.max_gate_gain(3, 4), 0);
        assert_eq!(pool.max_gate_gain(9, 4), 0);
        assert_eq!(pool.max_gate_gain(20, 1), 0);
    }

    #[test]
    fn test_core_removed_and_deduplicated() {
        let catalog = metro_catalog();
        let rules = metro_rules(&catalog);
        let bonuses = MatchBonuses::none();
        let evaluator = TeamEvaluator::new(&catalog, &rules, &bonuses);
        let roger = hero(&catalog, "Roger");
        let layla = hero(&catalog, "Layla");

        let pool = SearchPool::build(&evaluator, 4, &[layla, roger, roger]).unwrap();
        assert_eq!(pool.core(), &[roger, layla]);
        assert_eq!(pool.slots(), 2);
        assert_eq!(pool.candidates().len(), 8);
        assert!(!pool.candidates().contains(&roger));
        assert_eq!(pool.core_gate(), 1);
        assert_eq!(pool.gate_needed(), 1);
    }

    #[test]
    fn test_enhancement_counts_toward_core_gate() {
        let catalog = metro_catalog();
        let rules = metro_rules(&catalog);
        let gate = trait_id(&catalog, "Metro Zero");
        let bonuses = MatchBonuses::none().with_enhancement(gate, 2);
        let evaluator = TeamEvaluator::new(&catalog, &rules, &bonuses);

        let pool = SearchPool::build(&evaluator, 3, &[]).unwrap();
        assert_eq!(pool.gate_needed(), 0);
        assert!(pool.gate_feasible());
    }

    #[test]
    fn test_infeasible_gate() {
        let catalog = metro_catalog();
        let rules = metro_rules(&catalog);
        let bonuses = MatchBonuses::none();
        let evaluator = TeamEvaluator::new(&catalog, &rules, &bonuses);

        // One free slot cannot add two Metro Zero members.
        let pool = SearchPool::build(&evaluator, 1, &[]).unwrap();
        assert!(!pool.gate_feasible());
    }

    #[test]
    fn test_rejections() {
        let catalog = metro_catalog();
        let rules = metro_rules(&catalog);
        let bonuses = MatchBonuses::none();
        let evaluator = TeamEvaluator::new(&catalog, &rules, &bonuses);

        assert!(matches!(
            SearchPool::build(&evaluator, 0, &[]),
            Err(TeamForgeError::InvalidRequest(_))
        ));
        assert!(matches!(
            SearchPool::build(&evaluator, 3, &[HeroId::new(99)]),
            Err(TeamForgeError::InvalidRequest(_))
        ));
        let core: Vec<HeroId> = (0..3).map(HeroId::new).collect();
        assert_eq!(
            SearchPool::build(&evaluator, 2, &core).unwrap_err(),
            TeamForgeError::CoreExceedsTeamSize {
                core: 3,
                team_size: 2
            }
        );
    }
}
