//! Error types for TeamForge

use thiserror::Error;

/// Main error type for TeamForge operations.
///
/// Every variant is raised before a search starts, except `Cancelled`.
/// An unsatisfiable gate requirement is not an error: the engine reports
/// it as an empty result.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TeamForgeError {
    /// The trait catalog or roster definition is malformed
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// A hero name did not resolve
    #[error("Unknown hero '{name}'. Valid heroes: {}", valid.join(", "))]
    HeroNotFound { name: String, valid: Vec<String> },

    /// A trait name did not resolve
    #[error("Unknown trait '{name}'. Valid traits: {}", valid.join(", "))]
    TraitNotFound { name: String, valid: Vec<String> },

    /// A hero name was repeated where duplicates are rejected
    #[error("Duplicate hero: {0}")]
    DuplicateHero(String),

    /// The special-ability selection violates the eligibility rules
    #[error("Invalid special ability selection: {0}")]
    InvalidSpecialAbility(String),

    /// A trait is not eligible for flat enhancement
    #[error("Invalid enhancement: {0}")]
    InvalidEnhancement(String),

    /// More required heroes than team slots
    #[error("Core heroes ({core}) exceed team size ({team_size})")]
    CoreExceedsTeamSize { core: usize, team_size: usize },

    /// Malformed search request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Search was cancelled before completion
    #[error("Search was cancelled")]
    Cancelled,
}

/// Result type alias for TeamForge operations
pub type Result<T> = std::result::Result<T, TeamForgeError>;
