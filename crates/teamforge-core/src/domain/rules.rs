//! Scoring constants bound to a particular catalog.

use super::catalog::Catalog;
use super::ids::TraitId;
use crate::error::{Result, TeamForgeError};

/// Designated traits and constants used by team scoring.
///
/// The gating trait flips a large bonus or penalty depending on whether its
/// tally reaches `gate_threshold`. The special trait, if any, receives one
/// extra tally per team member selected as a special-ability hero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringRules {
    pub gate_trait: TraitId,
    pub gate_threshold: u32,
    pub gate_bonus: i64,
    pub special_trait: Option<TraitId>,
    pub tier_weight: i64,
}

impl ScoringRules {
    pub const DEFAULT_GATE_THRESHOLD: u32 = 2;
    pub const DEFAULT_GATE_BONUS: i64 = 500;
    pub const DEFAULT_TIER_WEIGHT: i64 = 10;

    /// Rules with default constants and no special trait.
    pub fn new(gate_trait: TraitId) -> Self {
        Self {
            gate_trait,
            gate_threshold: Self::DEFAULT_GATE_THRESHOLD,
            gate_bonus: Self::DEFAULT_GATE_BONUS,
            special_trait: None,
            tier_weight: Self::DEFAULT_TIER_WEIGHT,
        }
    }

    /// Resolves the designated traits by name.
    pub fn for_catalog(catalog: &Catalog, gate: &str, special: Option<&str>) -> Result<Self> {
        let gate_trait = catalog.require_trait(gate)?.id();
        let special_trait = match special {
            Some(name) => Some(catalog.require_trait(name)?.id()),
            None => None,
        };
        Ok(Self {
            special_trait,
            ..Self::new(gate_trait)
        })
    }

    pub fn with_gate_threshold(mut self, threshold: u32) -> Self {
        self.gate_threshold = threshold;
        self
    }

    pub fn with_gate_bonus(mut self, bonus: i64) -> Self {
        self.gate_bonus = bonus;
        self
    }

    pub fn with_special_trait(mut self, special: TraitId) -> Self {
        self.special_trait = Some(special);
        self
    }

    pub fn with_tier_weight(mut self, weight: i64) -> Self {
        self.tier_weight = weight;
        self
    }

    /// Checks that the designated traits exist in `catalog`.
    pub fn validate(&self, catalog: &Catalog) -> Result<()> {
        if !catalog.contains_trait(self.gate_trait) {
            return Err(TeamForgeError::InvalidCatalog(format!(
                "gating trait {} is not in the catalog",
                self.gate_trait
            )));
        }
        if let Some(special) = self.special_trait {
            if !catalog.contains_trait(special) {
                return Err(TeamForgeError::InvalidCatalog(format!(
                    "special trait {} is not in the catalog",
                    special
                )));
            }
        }
        Ok(())
    }
}
