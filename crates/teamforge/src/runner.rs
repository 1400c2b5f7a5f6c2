//! Config-driven entry point that hides the engine wiring.

use std::sync::Arc;

use teamforge_config::{ConfigError, OptimizerConfig};
use teamforge_core::{builtin, Catalog, ScoringRules, TeamForgeError};
use teamforge_scoring::MatchBonuses;
use teamforge_solver::{
    ExternalTermination, OrTermination, RankedTeam, SearchOutcome, SearchRequest, TeamOptimizer,
    Termination, TimeTermination,
};
use thiserror::Error;
use tracing::debug;

use crate::selection::{resolve_heroes, DuplicatePolicy, EnhancementRules, SpecialAbilityRules};

/// Error from [`run`]: either the configuration or the engine rejected it.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Engine(#[from] TeamForgeError),
}

/// Results of a run together with the catalog their identities refer to.
#[derive(Debug, Clone)]
pub struct RunReport {
    catalog: Catalog,
    outcome: SearchOutcome,
}

impl RunReport {
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn outcome(&self) -> &SearchOutcome {
        &self.outcome
    }

    /// Ranked teams, best first.
    pub fn teams(&self) -> &[RankedTeam] {
        &self.outcome.teams
    }

    /// Member names of `team`, in identity order.
    pub fn hero_names(&self, team: &RankedTeam) -> Vec<&str> {
        team.team
            .iter()
            .map(|&h| self.catalog.hero(h).name())
            .collect()
    }

    /// `(trait name, tier)` for every trait `team` activates.
    pub fn tiers(&self, team: &RankedTeam) -> Vec<(&str, u32)> {
        team.breakdown
            .iter()
            .map(|(&t, &tier)| (self.catalog.trait_def(t).name(), tier))
            .collect()
    }
}

/// Builds the engine request for `config` against `catalog`, resolving
/// every name with the built-in selection rules.
pub fn build_request(
    catalog: &Catalog,
    config: &OptimizerConfig,
) -> Result<SearchRequest, RunError> {
    config.validate()?;

    let policy = if config.allow_duplicate_core {
        DuplicatePolicy::Allow
    } else {
        DuplicatePolicy::Reject
    };
    let core = resolve_heroes(catalog, &config.core_heroes, policy)?;
    let special = SpecialAbilityRules::builtin().select(catalog, &config.special_ability)?;
    let enhancements = EnhancementRules::builtin().select(catalog, &config.enhancements)?;

    Ok(SearchRequest::new(config.team_size)
        .with_core(core)
        .with_bonuses(MatchBonuses::new(special, enhancements))
        .with_top_k(config.top_k))
}

/// Runs the search described by `config` on the built-in roster.
///
/// # Example
///
/// ```
/// use teamforge::run;
/// use teamforge_config::OptimizerConfig;
///
/// let config = OptimizerConfig::new().with_team_size(3).with_top_k(2);
/// let report = run(&config).unwrap();
/// assert_eq!(report.teams().len(), 2);
/// ```
pub fn run(config: &OptimizerConfig) -> Result<RunReport, RunError> {
    run_inner(config, None)
}

/// Like [`run`], additionally stopping once `external` is terminated.
pub fn run_with_termination(
    config: &OptimizerConfig,
    external: ExternalTermination,
) -> Result<RunReport, RunError> {
    run_inner(config, Some(external))
}

fn run_inner(
    config: &OptimizerConfig,
    external: Option<ExternalTermination>,
) -> Result<RunReport, RunError> {
    let catalog = builtin::catalog()?;
    let rules = builtin::rules(&catalog)?;
    let outcome = solve_with(&catalog, &rules, config, external)?;
    Ok(RunReport { catalog, outcome })
}

/// Runs the search described by `config` on a caller-supplied catalog.
pub fn solve_with(
    catalog: &Catalog,
    rules: &ScoringRules,
    config: &OptimizerConfig,
    external: Option<ExternalTermination>,
) -> Result<SearchOutcome, RunError> {
    let request = build_request(catalog, config)?;
    debug!(
        core = request.core.len(),
        special = request.bonuses.special().len(),
        enhancements = request.bonuses.enhancements().len(),
        "Resolved run configuration"
    );

    let time = config.time_limit().map(TimeTermination::new);
    let termination: Option<Arc<dyn Termination>> = match (time, external) {
        (Some(time), Some(external)) => Some(Arc::new(OrTermination((time, external)))),
        (Some(time), None) => Some(Arc::new(time)),
        (None, Some(external)) => Some(Arc::new(external)),
        (None, None) => None,
    };

    let mut optimizer = TeamOptimizer::new(catalog, rules).with_search(config.search.clone());
    if let Some(termination) = termination {
        optimizer = optimizer.with_termination(termination);
    }
    Ok(optimizer.solve(&request)?)
}
