//! TeamForge - Team composition search for Magic Chess
//!
//! Pick a team size, optionally some required heroes and per-match bonuses,
//! and get the highest-scoring teams back.
//!
//! # Example
//!
//! ```rust
//! use teamforge::prelude::*;
//!
//! let catalog = builtin::catalog().unwrap();
//! let rules = builtin::rules(&catalog).unwrap();
//! let core = resolve_heroes(&catalog, &["Irithel"], DuplicatePolicy::Allow).unwrap();
//!
//! let outcome = TeamOptimizer::new(&catalog, &rules)
//!     .solve(&SearchRequest::new(4).with_core(core.clone()).with_top_k(1))
//!     .unwrap();
//! assert!(outcome.teams[0].team.contains(&core[0]));
//! ```

pub mod selection;

mod runner;
pub use runner::{build_request, run, run_with_termination, solve_with, RunError, RunReport};

// Domain
pub use teamforge_core::{
    builtin, Catalog, CatalogBuilder, Hero, HeroId, HeroRecord, ScoringRules, TeamForgeError,
    TeamScore, Trait, TraitId, TraitRecord,
};

// Scoring
pub use teamforge_scoring::{MatchBonuses, SynergyBreakdown, TeamEvaluator};

// Search
pub use teamforge_solver::{
    ExternalTermination, RankedTeam, SearchOutcome, SearchRequest, SearchStats, TeamOptimizer,
    Termination, TimeTermination,
};

// Configuration
pub use teamforge_config::{
    ConfigError, GateMode, OptimizerConfig, SearchConfig, SearchStrategy, ThreadCount,
};

#[cfg(feature = "console")]
pub use teamforge_console as console;

pub mod prelude {
    pub use super::selection::{
        resolve_heroes, DuplicatePolicy, EnhancementRules, SpecialAbilityRules,
    };
    pub use super::{builtin, Catalog, HeroId, MatchBonuses, ScoringRules, TeamScore, TraitId};
    pub use super::{GateMode, OptimizerConfig, SearchStrategy, ThreadCount};
    pub use super::{RankedTeam, SearchOutcome, SearchRequest, TeamOptimizer};
    pub use super::{run, RunError, RunReport};
}
