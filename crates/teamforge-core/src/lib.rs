//! TeamForge Core - Core types for team-composition search
//!
//! This crate provides the fundamental abstractions for TeamForge:
//! - Trait and hero definitions with stable sequential identities
//! - The immutable catalog (trait catalog plus hero roster)
//! - Scoring rules (gating trait, special trait, constants)
//! - The team score type and the error type
//! - The built-in Magic Chess roster

pub mod builtin;
pub mod domain;
pub mod error;
pub mod score;

pub use domain::{
    Catalog, CatalogBuilder, Hero, HeroId, HeroRecord, ScoringRules, Trait, TraitId, TraitMask,
    TraitRecord, MAX_TRAITS,
};
pub use error::{Result, TeamForgeError};
pub use score::TeamScore;
