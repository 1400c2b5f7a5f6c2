//! A small hand-written roster gated on "Metro Zero".
//!
//! Traits (identity order): Metro Zero `[2]`, Glory League `[2, 4]`,
//! Marksman `[2, 4, 6]`, Mage `[2, 4]`, Shadowcell `[2, 4, 6, 10]`.
//!
//! | id | hero      | quality | traits                      |
//! |----|-----------|---------|-----------------------------|
//! | 0  | X.Borg    | 5       | Metro Zero, Shadowcell      |
//! | 1  | Roger     | 2       | Metro Zero, Marksman        |
//! | 2  | Ixia      | 3       | Metro Zero, Marksman, Mage  |
//! | 3  | Layla     | 1       | Marksman                    |
//! | 4  | Hanabi    | 4       | Marksman, Shadowcell        |
//! | 5  | Irithel   | 5       | Marksman                    |
//! | 6  | Kagura    | 2       | Mage                        |
//! | 7  | Valentina | 4       | Mage, Shadowcell            |
//! | 8  | Kula      | 1       | Mage                        |
//! | 9  | Masha     | 3       | Shadowcell                  |
//!
//! Glory League has no innate holders; it is reached only through the
//! special ability.

use teamforge_core::{Catalog, CatalogBuilder, HeroId, ScoringRules, TraitId};

/// Builds the 10-hero metro roster.
pub fn metro_catalog() -> Catalog {
    CatalogBuilder::new()
        .add_trait("Metro Zero", [2])
        .add_trait("Glory League", [2, 4])
        .add_trait("Marksman", [2, 4, 6])
        .add_trait("Mage", [2, 4])
        .add_trait("Shadowcell", [2, 4, 6, 10])
        .add_hero("X.Borg", 5, ["Metro Zero", "Shadowcell"])
        .add_hero("Roger", 2, ["Metro Zero", "Marksman"])
        .add_hero("Ixia", 3, ["Metro Zero", "Marksman", "Mage"])
        .add_hero("Layla", 1, ["Marksman"])
        .add_hero("Hanabi", 4, ["Marksman", "Shadowcell"])
        .add_hero("Irithel", 5, ["Marksman"])
        .add_hero("Kagura", 2, ["Mage"])
        .add_hero("Valentina", 4, ["Mage", "Shadowcell"])
        .add_hero("Kula", 1, ["Mage"])
        .add_hero("Masha", 3, ["Shadowcell"])
        .build()
        .expect("metro roster is valid")
}

/// Default rules for the metro roster: gate on Metro Zero, special trait
/// Glory League.
pub fn metro_rules(catalog: &Catalog) -> ScoringRules {
    ScoringRules::for_catalog(catalog, "Metro Zero", Some("Glory League"))
        .expect("metro traits exist")
}

/// Looks up a hero identity by name.
///
/// # Panics
///
/// Panics if the hero does not exist.
pub fn hero(catalog: &Catalog, name: &str) -> HeroId {
    catalog
        .hero_by_name(name)
        .unwrap_or_else(|| panic!("no hero named {name}"))
        .id()
}

/// Looks up a trait identity by name.
///
/// # Panics
///
/// Panics if the trait does not exist.
pub fn trait_id(catalog: &Catalog, name: &str) -> TraitId {
    catalog
        .trait_by_name(name)
        .unwrap_or_else(|| panic!("no trait named {name}"))
        .id()
}
