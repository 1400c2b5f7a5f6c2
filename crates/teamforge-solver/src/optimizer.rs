//! The engine entry point.

use std::sync::Arc;
use std::time::{Duration, Instant};

use teamforge_config::{GateMode, SearchConfig, SearchStrategy, ThreadCount};
use teamforge_core::{Catalog, HeroId, Result, ScoringRules, TeamForgeError};
use teamforge_scoring::{MatchBonuses, TeamEvaluator};
use tracing::{debug, info, warn};

use crate::enumerator::{binomial, ExhaustiveEnumerator, PrunedEnumerator};
use crate::prepass::SearchPool;
use crate::stats::SearchStats;
use crate::termination::Termination;
use crate::topk::RankedTeam;

/// One team search: size, required heroes, bonuses and result count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub team_size: usize,
    /// Heroes every team must include. Repeats count once.
    pub core: Vec<HeroId>,
    pub bonuses: MatchBonuses,
    pub top_k: usize,
}

impl SearchRequest {
    /// Default number of ranked teams returned.
    pub const DEFAULT_TOP_K: usize = 5;

    /// Largest flat enhancement accepted on a single trait.
    pub const MAX_ENHANCEMENT: u32 = u16::MAX as u32;

    pub fn new(team_size: usize) -> Self {
        Self {
            team_size,
            core: Vec::new(),
            bonuses: MatchBonuses::none(),
            top_k: Self::DEFAULT_TOP_K,
        }
    }

    pub fn with_core(mut self, core: impl IntoIterator<Item = HeroId>) -> Self {
        self.core.extend(core);
        self
    }

    pub fn with_bonuses(mut self, bonuses: MatchBonuses) -> Self {
        self.bonuses = bonuses;
        self
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }
}

/// Result of [`TeamOptimizer::solve`].
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Up to `top_k` teams, best first.
    pub teams: Vec<RankedTeam>,
    pub stats: SearchStats,
    pub elapsed: Duration,
    /// False when the pre-pass proved no team can be built.
    pub feasible: bool,
}

impl SearchOutcome {
    pub fn best(&self) -> Option<&RankedTeam> {
        self.teams.first()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

/// Searches a catalog for the highest-scoring teams.
///
/// # Example
///
/// ```
/// use teamforge_core::{CatalogBuilder, ScoringRules};
/// use teamforge_solver::{SearchRequest, TeamOptimizer};
///
/// let catalog = CatalogBuilder::new()
///     .add_trait("Metro Zero", [2])
///     .add_trait("Marksman", [2, 4])
///     .add_hero("X.Borg", 5, ["Metro Zero"])
///     .add_hero("Roger", 2, ["Metro Zero", "Marksman"])
///     .add_hero("Layla", 1, ["Marksman"])
///     .add_hero("Irithel", 5, ["Marksman"])
///     .build()
///     .unwrap();
/// let rules = ScoringRules::for_catalog(&catalog, "Metro Zero", None).unwrap();
///
/// let outcome = TeamOptimizer::new(&catalog, &rules)
///     .solve(&SearchRequest::new(3).with_top_k(1))
///     .unwrap();
///
/// // X.Borg + Roger meet the gate; Irithel completes Marksman 2.
/// let best = outcome.best().unwrap();
/// assert_eq!(best.score.value(), 20 + 20 + 12 + 500);
/// ```
#[derive(Debug, Clone)]
pub struct TeamOptimizer<'a> {
    catalog: &'a Catalog,
    rules: &'a ScoringRules,
    search: SearchConfig,
    termination: Option<Arc<dyn Termination>>,
}

impl<'a> TeamOptimizer<'a> {
    pub fn new(catalog: &'a Catalog, rules: &'a ScoringRules) -> Self {
        Self {
            catalog,
            rules,
            search: SearchConfig::default(),
            termination: None,
        }
    }

    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }

    pub fn with_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.search.strategy = strategy;
        self
    }

    pub fn with_gate_mode(mut self, gate_mode: GateMode) -> Self {
        self.search.gate_mode = gate_mode;
        self
    }

    pub fn with_thread_count(mut self, thread_count: ThreadCount) -> Self {
        self.search.thread_count = thread_count;
        self
    }

    /// Polls `termination` during the search; once it fires, `solve`
    /// returns [`TeamForgeError::Cancelled`].
    pub fn with_termination(mut self, termination: Arc<dyn Termination>) -> Self {
        self.termination = Some(termination);
        self
    }

    pub fn search_config(&self) -> &SearchConfig {
        &self.search
    }

    /// Runs one search.
    ///
    /// # Errors
    ///
    /// - `InvalidRequest` for a zero team size or `top_k`, identities the
    ///   catalog did not issue, or an enhancement above
    ///   [`SearchRequest::MAX_ENHANCEMENT`]
    /// - `InvalidCatalog` when the rules name traits outside the catalog
    /// - `CoreExceedsTeamSize` when the distinct core heroes do not fit
    /// - `Cancelled` when the termination fires
    ///
    /// An unsatisfiable gate yields `Ok` with no teams.
    pub fn solve(&self, request: &SearchRequest) -> Result<SearchOutcome> {
        let start = Instant::now();
        self.validate(request)?;

        let evaluator = TeamEvaluator::new(self.catalog, self.rules, &request.bonuses);
        let pool = SearchPool::build(&evaluator, request.team_size, &request.core)?;
        let threads = self
            .search
            .thread_count
            .resolve(pool.candidates().len().max(1));

        info!(
            event = "search_start",
            strategy = %self.search.strategy,
            gate_mode = %self.search.gate_mode,
            team_size = request.team_size,
            core_size = pool.core().len(),
            pool_size = pool.candidates().len(),
            gate_eligible = pool.gate_eligible(),
            candidate_teams = binomial(pool.candidates().len(), pool.slots()),
            top_k = request.top_k,
            threads = threads,
        );

        let enforce = self.search.gate_mode == GateMode::Enforce;
        let feasible = pool.has_capacity() && (!enforce || pool.gate_feasible());
        debug!(
            event = "prepass",
            gate_needed = pool.gate_needed(),
            gate_credit_available = pool.credit_available(),
            feasible = feasible,
        );

        if !feasible {
            info!(
                event = "search_infeasible",
                slots = pool.slots(),
                pool_size = pool.candidates().len(),
                gate_needed = pool.gate_needed(),
            );
            return Ok(SearchOutcome {
                teams: Vec::new(),
                stats: SearchStats::default(),
                elapsed: start.elapsed(),
                feasible: false,
            });
        }

        let termination = self.termination.as_deref();
        let result = match self.search.strategy {
            SearchStrategy::Pruned => {
                let mut search = PrunedEnumerator::new(evaluator, &pool, self.search.gate_mode);
                if let Some(t) = termination {
                    search = search.with_termination(t);
                }
                search.run(request.top_k, threads)
            }
            SearchStrategy::Exhaustive => {
                let mut search = ExhaustiveEnumerator::new(evaluator, &pool, self.search.gate_mode);
                if let Some(t) = termination {
                    search = search.with_termination(t);
                }
                search.run(request.top_k)
            }
        };

        let (teams, stats) = match result {
            Ok(found) => found,
            Err(TeamForgeError::Cancelled) => {
                warn!(
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "Search cancelled before completion"
                );
                return Err(TeamForgeError::Cancelled);
            }
            Err(err) => return Err(err),
        };

        let elapsed = start.elapsed();
        let best_score = teams
            .first()
            .map(|t| t.score.to_string())
            .unwrap_or_else(|| "none".to_string());
        info!(
            event = "search_end",
            best_score = best_score,
            results = teams.len(),
            nodes = stats.nodes_visited,
            leaves = stats.leaves_evaluated,
            gate_pruned = stats.gate_pruned,
            capacity_pruned = stats.capacity_pruned,
            gate_rejected = stats.gate_rejected,
            duration_ms = elapsed.as_millis() as u64,
            speed = stats.leaves_per_second(elapsed),
        );

        Ok(SearchOutcome {
            teams,
            stats,
            elapsed,
            feasible: true,
        })
    }

    fn validate(&self, request: &SearchRequest) -> Result<()> {
        if request.top_k == 0 {
            return Err(TeamForgeError::InvalidRequest(
                "top_k must be at least 1".to_string(),
            ));
        }
        self.rules.validate(self.catalog)?;
        if let Some(bad) = request
            .bonuses
            .special()
            .iter()
            .find(|&&h| !self.catalog.contains_hero(h))
        {
            return Err(TeamForgeError::InvalidRequest(format!(
                "special-ability hero {bad} is not in the catalog"
            )));
        }
        for (&t, &amount) in request.bonuses.enhancements() {
            if !self.catalog.contains_trait(t) {
                return Err(TeamForgeError::InvalidRequest(format!(
                    "enhanced trait {t} is not in the catalog"
                )));
            }
            if amount > SearchRequest::MAX_ENHANCEMENT {
                return Err(TeamForgeError::InvalidRequest(format!(
                    "enhancement {amount} on trait {t} exceeds {}",
                    SearchRequest::MAX_ENHANCEMENT
                )));
            }
        }
        Ok(())
    }
}
