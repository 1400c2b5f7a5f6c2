//! TeamForge Search Engine
//!
//! This crate provides the team search built on `teamforge-scoring`:
//! - Constraint pre-pass (free-pool ordering and gate feasibility)
//! - Enumerators (exhaustive reference and pruned incremental DFS)
//! - Bounded top-K selection
//! - Termination conditions for cooperative cancellation
//! - Search statistics
//! - The engine entry point, `TeamOptimizer::solve`
//!
//! # Example
//!
//! ```
//! use teamforge_core::builtin;
//! use teamforge_solver::{SearchRequest, TeamOptimizer};
//!
//! let catalog = builtin::catalog().unwrap();
//! let rules = builtin::rules(&catalog).unwrap();
//!
//! let outcome = TeamOptimizer::new(&catalog, &rules)
//!     .solve(&SearchRequest::new(3).with_top_k(3))
//!     .unwrap();
//!
//! assert_eq!(outcome.teams.len(), 3);
//! assert!(outcome.teams.windows(2).all(|w| w[0].score >= w[1].score));
//! ```

pub mod enumerator;
pub mod optimizer;
pub mod prepass;
pub mod stats;
pub mod termination;
pub mod topk;

pub use enumerator::{CombinationIterator, ExhaustiveEnumerator, PrunedEnumerator};
pub use optimizer::{SearchOutcome, SearchRequest, TeamOptimizer};
pub use prepass::SearchPool;
pub use stats::SearchStats;
pub use teamforge_config::{GateMode, SearchConfig, SearchStrategy, ThreadCount};
pub use termination::{ExternalTermination, OrTermination, Termination, TimeTermination};
pub use topk::{RankedTeam, TopK};

#[cfg(test)]
mod tests;
