//! Team scoring for TeamForge.
//!
//! This crate provides:
//! - The pure team evaluator (`TeamEvaluator`)
//! - The sparse trait counter it tallies into (`TraitTally`)
//! - Per-match bonus inputs (`MatchBonuses`)
//! - Team directors: full recalculation and incremental push/pop state
//!
//! # Scoring
//!
//! For every trait with a positive tally, the largest threshold reached adds
//! `threshold * tier_weight`. Member quality is added, then the gate bonus
//! if the gating trait tally meets its threshold, or the same amount is
//! subtracted otherwise.

pub mod bonus;
pub mod director;
pub mod evaluator;
pub mod tally;


pub use bonus::MatchBonuses;
pub use director::{IncrementalTeam, RecalculatingTeam, TeamDirector};
pub use evaluator::{Evaluation, SynergyBreakdown, TeamEvaluator};
pub use tally::TraitTally;
