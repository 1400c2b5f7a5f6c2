//! Reproducible random rosters.
//!
//! Trait 0 ("Gate", thresholds `[2]`) is the gating trait and trait 1
//! ("Special") the special trait; the rest get thresholds drawn from a
//! fixed menu. Every hero holds one to three distinct traits.

use rand::rngs::StdRng;
use rand::seq::index::sample;
use rand::{Rng, SeedableRng};
use teamforge_core::{Catalog, HeroId, HeroRecord, ScoringRules, TraitId, TraitRecord};

const THRESHOLD_MENU: &[&[u32]] = &[&[2], &[1, 2], &[2, 3], &[2, 4], &[2, 4, 6], &[3, 5]];

/// Builds a random catalog with `heroes` heroes and `traits` traits.
///
/// # Panics
///
/// Panics if `traits < 2` or `traits > 64`.
pub fn random_catalog(seed: u64, heroes: usize, traits: usize) -> Catalog {
    assert!((2..=64).contains(&traits), "traits must be in 2..=64");
    let mut rng = StdRng::seed_from_u64(seed);

    let trait_names: Vec<String> = (0..traits)
        .map(|i| match i {
            0 => "Gate".to_string(),
            1 => "Special".to_string(),
            _ => format!("Trait{i}"),
        })
        .collect();
    let thresholds: Vec<&[u32]> = (0..traits)
        .map(|i| {
            if i == 0 {
                THRESHOLD_MENU[0]
            } else {
                THRESHOLD_MENU[rng.random_range(0..THRESHOLD_MENU.len())]
            }
        })
        .collect();

    let hero_names: Vec<String> = (0..heroes).map(|i| format!("Hero{i}")).collect();
    let qualities: Vec<i64> = (0..heroes).map(|_| rng.random_range(1..=5)).collect();
    let memberships: Vec<Vec<usize>> = (0..heroes)
        .map(|_| {
            let count = rng.random_range(1..=traits.min(3));
            sample(&mut rng, traits, count).into_vec()
        })
        .collect();

    let trait_records: Vec<TraitRecord<'_>> = trait_names
        .iter()
        .zip(&thresholds)
        .map(|(name, thresholds)| TraitRecord { name, thresholds })
        .collect();
    let hero_records: Vec<HeroRecord<'_>> = hero_names
        .iter()
        .zip(&qualities)
        .zip(&memberships)
        .map(|((name, &quality), traits)| HeroRecord {
            name,
            quality,
            traits,
        })
        .collect();

    Catalog::from_records(&trait_records, &hero_records).expect("random roster is valid")
}

/// Rules for a random catalog: gate on trait 0, special trait 1.
pub fn random_rules() -> ScoringRules {
    ScoringRules::new(TraitId::new(0)).with_special_trait(TraitId::new(1))
}

/// Draws `size` distinct heroes from `catalog`.
pub fn random_team(seed: u64, catalog: &Catalog, size: usize) -> Vec<HeroId> {
    let mut rng = StdRng::seed_from_u64(seed);
    sample(&mut rng, catalog.hero_count(), size)
        .into_iter()
        .map(HeroId::new)
        .collect()
}
