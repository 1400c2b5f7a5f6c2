//! The built-in Magic Chess trait catalog and hero roster.
//!
//! Also carries the static tables used to validate per-match selections:
//! the special-ability (Glory League) eligibility classes and pairings, and
//! the traits eligible for flat enhancement (Magic Crystals).

use crate::domain::{Catalog, HeroRecord, ScoringRules, TraitRecord};
use crate::error::Result;

/// Gating trait of the built-in rules.
pub const METRO_ZERO: &str = "Metro Zero";

/// Special trait credited by the special ability.
pub const GLORY_LEAGUE: &str = "Glory League";

/// Special-ability eligibility class A (1-cost heroes).
pub const GLORY_LEAGUE_CLASS_A: &[&str] = &["Alucard", "Lolita", "Kula", "Cecilion"];

/// Special-ability eligibility class B (5-cost heroes).
pub const GLORY_LEAGUE_CLASS_B: &[&str] = &["Akai", "X.Borg", "Benedetta", "Vexana", "Harley"];

/// Permitted class B partners for each class A hero.
pub const GLORY_LEAGUE_PAIRS: &[(&str, &[&str])] = &[
    ("Alucard", &["Akai", "Harley", "Vexana", "X.Borg"]),
    ("Kula", &["Akai", "Benedetta", "Harley", "X.Borg"]),
    ("Cecilion", &["Akai", "Harley", "Vexana", "X.Borg"]),
    ("Lolita", &["Akai", "Benedetta", "Harley", "Vexana"]),
];

/// Traits eligible for a flat enhancement.
pub const MAGIC_CRYSTAL_TRAITS: &[&str] = &[
    "Bruiser",
    "Defender",
    "Dauntless",
    "Weapon Master",
    "Marksman",
    "Stargazer",
    "Swiftblade",
    "Mage",
    "Phasewarper",
    "Scavenger",
];

#[rustfmt::skip]
const TRAITS: &[TraitRecord<'static>] = &[
    // factions
    TraitRecord { name: "Shadowcell", thresholds: &[2, 4, 6, 10] },
    TraitRecord { name: "Mortal Rivals", thresholds: &[1, 2] },
    TraitRecord { name: "KOF", thresholds: &[2, 4, 6, 11] },
    TraitRecord { name: "Soul Vessels", thresholds: &[2, 4, 6, 10] },
    TraitRecord { name: "Starwing", thresholds: &[2, 4, 6, 10] },
    TraitRecord { name: "Luminexus", thresholds: &[2, 4, 6, 10] },
    TraitRecord { name: "Aspirants", thresholds: &[2, 4, 6, 10] },
    TraitRecord { name: "Toy Mischief", thresholds: &[2, 4, 6, 10] },
    TraitRecord { name: "Glory League", thresholds: &[2, 4, 6] },
    TraitRecord { name: "Metro Zero", thresholds: &[2] },
    TraitRecord { name: "Beyond the Clouds", thresholds: &[2, 3] },

    // roles
    TraitRecord { name: "Bruiser", thresholds: &[2, 4, 6] },
    TraitRecord { name: "Defender", thresholds: &[2, 4, 6] },
    TraitRecord { name: "Dauntless", thresholds: &[2, 4, 6] },
    TraitRecord { name: "Weapon Master", thresholds: &[2, 4, 6] },
    TraitRecord { name: "Marksman", thresholds: &[2, 4, 6] },
    TraitRecord { name: "Stargazer", thresholds: &[2, 4, 6] },
    TraitRecord { name: "Swiftblade", thresholds: &[2, 4, 6] },
    TraitRecord { name: "Mage", thresholds: &[2, 4, 6] },
    TraitRecord { name: "Phasewarper", thresholds: &[2, 4] },
    TraitRecord { name: "Scavenger", thresholds: &[2, 3] },
];

#[rustfmt::skip]
const HEROES: &[HeroRecord<'static>] = &[
    HeroRecord { name: "Masha", quality: 3, traits: &[0, 11] },
    HeroRecord { name: "Iori Yagami", quality: 5, traits: &[2, 1, 11] },
    HeroRecord { name: "Belerick", quality: 3, traits: &[4, 11] },
    HeroRecord { name: "Guinivere", quality: 4, traits: &[6, 11] },
    HeroRecord { name: "Jawhead", quality: 1, traits: &[7, 11] },
    HeroRecord { name: "Aldous", quality: 2, traits: &[8, 11] },
    HeroRecord { name: "Terry Bogard", quality: 4, traits: &[2, 12] },
    HeroRecord { name: "Atlas", quality: 1, traits: &[4, 12] },
    HeroRecord { name: "Ruby", quality: 2, traits: &[6, 13, 12] },
    HeroRecord { name: "Uranus", quality: 2, traits: &[7, 12] },
    HeroRecord { name: "Minotaur", quality: 3, traits: &[8, 12] },
    HeroRecord { name: "Edith", quality: 5, traits: &[10, 12] },
    HeroRecord { name: "Chris", quality: 2, traits: &[2, 13] },
    HeroRecord { name: "Gloo", quality: 3, traits: &[3, 13] },
    HeroRecord { name: "Lolita", quality: 1, traits: &[5, 13] },
    HeroRecord { name: "Barats", quality: 4, traits: &[7, 13] },
    HeroRecord { name: "X.Borg", quality: 5, traits: &[9, 13] },
    HeroRecord { name: "Alucard", quality: 1, traits: &[0, 14] },
    HeroRecord { name: "Benedetta", quality: 5, traits: &[3, 14] },
    HeroRecord { name: "Freya", quality: 4, traits: &[4, 14] },
    HeroRecord { name: "Cici", quality: 2, traits: &[5, 14] },
    HeroRecord { name: "Aulus", quality: 3, traits: &[7, 14] },
    HeroRecord { name: "Roger", quality: 2, traits: &[9, 14] },
    HeroRecord { name: "Obsidia", quality: 2, traits: &[0, 15] },
    HeroRecord { name: "Hanabi", quality: 4, traits: &[3, 15] },
    HeroRecord { name: "Irithel", quality: 5, traits: &[5, 15] },
    HeroRecord { name: "Layla", quality: 1, traits: &[6, 15] },
    HeroRecord { name: "Claude", quality: 4, traits: &[8, 15] },
    HeroRecord { name: "Ixia", quality: 3, traits: &[9, 15, 16] },
    HeroRecord { name: "Kula", quality: 1, traits: &[2, 16] },
    HeroRecord { name: "Mathilda", quality: 2, traits: &[4, 16] },
    HeroRecord { name: "Kadita", quality: 4, traits: &[5, 16] },
    HeroRecord { name: "Vexana", quality: 5, traits: &[6, 16] },
    HeroRecord { name: "Xavier", quality: 3, traits: &[10, 16] },
    HeroRecord { name: "Helcurt", quality: 1, traits: &[0, 17] },
    HeroRecord { name: "K'", quality: 4, traits: &[2, 17] },
    HeroRecord { name: "Aamon", quality: 2, traits: &[3, 17] },
    HeroRecord { name: "Saber", quality: 4, traits: &[4, 17] },
    HeroRecord { name: "Fanny", quality: 3, traits: &[6, 17] },
    HeroRecord { name: "Granger", quality: 4, traits: &[8, 17] },
    HeroRecord { name: "Valentina", quality: 4, traits: &[0, 18] },
    HeroRecord { name: "Kyo Kusanagi", quality: 5, traits: &[2, 1, 18] },
    HeroRecord { name: "Cecilion", quality: 1, traits: &[3, 18] },
    HeroRecord { name: "Zhuxin", quality: 3, traits: &[5, 18] },
    HeroRecord { name: "Harith", quality: 3, traits: &[6, 18] },
    HeroRecord { name: "Kagura", quality: 2, traits: &[10, 18] },
    HeroRecord { name: "Arlott", quality: 4, traits: &[0, 19] },
    HeroRecord { name: "Clint", quality: 2, traits: &[3, 19] },
    HeroRecord { name: "Harley", quality: 5, traits: &[4, 19] },
    HeroRecord { name: "Lesley", quality: 3, traits: &[6, 19] },
    HeroRecord { name: "Leona", quality: 3, traits: &[2, 20] },
    HeroRecord { name: "Carmilla", quality: 2, traits: &[5, 20] },
    HeroRecord { name: "Akai", quality: 5, traits: &[7, 20] },
];

/// Builds the built-in catalog.
///
/// ```
/// let catalog = teamforge_core::builtin::catalog().unwrap();
/// assert_eq!(catalog.trait_count(), 21);
/// assert_eq!(catalog.hero_count(), 53);
/// ```
pub fn catalog() -> Result<Catalog> {
    Catalog::from_records(TRAITS, HEROES)
}

/// Default scoring rules for the built-in catalog: gate on Metro Zero
/// (threshold 2, bonus 500) with Glory League as the special trait.
pub fn rules(catalog: &Catalog) -> Result<ScoringRules> {
    ScoringRules::for_catalog(catalog, METRO_ZERO, Some(GLORY_LEAGUE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = catalog().unwrap();
        let rules = rules(&catalog).unwrap();
        rules.validate(&catalog).unwrap();
        assert_eq!(catalog.trait_def(rules.gate_trait).name(), METRO_ZERO);
        assert_eq!(catalog.trait_def(rules.gate_trait).thresholds(), &[2]);
    }

    #[test]
    fn test_metro_zero_holders() {
        let catalog = catalog().unwrap();
        let gate = catalog.trait_by_name(METRO_ZERO).unwrap().id();
        let mut names: Vec<&str> = catalog.holders_of(gate).map(|h| h.name()).collect();
        names.sort_unstable();
        assert_eq!(names, vec!["Ixia", "Roger", "X.Borg"]);
    }

    #[test]
    fn test_selection_tables_reference_roster() {
        let catalog = catalog().unwrap();
        for name in GLORY_LEAGUE_CLASS_A.iter().chain(GLORY_LEAGUE_CLASS_B) {
            assert!(catalog.hero_by_name(name).is_some(), "{name}");
        }
        for (a, partners) in GLORY_LEAGUE_PAIRS {
            assert!(GLORY_LEAGUE_CLASS_A.contains(a));
            assert!(partners.iter().all(|b| GLORY_LEAGUE_CLASS_B.contains(b)));
        }
        for name in MAGIC_CRYSTAL_TRAITS {
            assert!(catalog.trait_by_name(name).is_some(), "{name}");
        }
    }
}
