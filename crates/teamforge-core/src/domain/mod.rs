//! Domain model: traits, heroes and the catalog holding them.
//!
//! - `Trait`: a named category with strictly increasing tier thresholds
//! - `Hero`: quality value, trait membership and derived bit-mask
//! - `Catalog`: the immutable roster, built once per optimization run
//! - `ScoringRules`: the gating and special traits plus scoring constants

mod catalog;
mod ids;
mod rules;


pub use catalog::{Catalog, CatalogBuilder, Hero, HeroRecord, Trait, TraitRecord};
pub use ids::{HeroId, TraitId, TraitMask, TraitMaskIter, MAX_TRAITS};
pub use rules::ScoringRules;
