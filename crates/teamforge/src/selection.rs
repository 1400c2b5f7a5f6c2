//! Name resolution and per-match bonus selectors.
//!
//! Turns the user-facing names of a run (core heroes, the special-ability
//! pair, enhanced traits) into catalog identities, rejecting anything the
//! game would not allow.

use std::collections::{BTreeMap, BTreeSet};

use teamforge_core::builtin;
use teamforge_core::{Catalog, HeroId, Result, TeamForgeError, TraitId};

/// How [`resolve_heroes`] treats a name that resolves to a hero already seen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Drop the repeat; the first occurrence wins.
    #[default]
    Allow,
    /// Fail with [`TeamForgeError::DuplicateHero`].
    Reject,
}

/// Resolves hero names (case-insensitive) to identities, in input order.
///
/// # Example
///
/// ```
/// use teamforge::selection::{resolve_heroes, DuplicatePolicy};
///
/// let catalog = teamforge_core::builtin::catalog().unwrap();
/// let names = ["layla", "Irithel", "LAYLA"];
/// let ids = resolve_heroes(&catalog, &names, DuplicatePolicy::Allow).unwrap();
/// assert_eq!(ids.len(), 2);
/// assert!(resolve_heroes(&catalog, &["Layla", "layla"], DuplicatePolicy::Reject).is_err());
/// ```
pub fn resolve_heroes<S: AsRef<str>>(
    catalog: &Catalog,
    names: &[S],
    policy: DuplicatePolicy,
) -> Result<Vec<HeroId>> {
    let mut ids = Vec::with_capacity(names.len());
    for name in names {
        let hero = catalog.require_hero(name.as_ref())?;
        if ids.contains(&hero.id()) {
            match policy {
                DuplicatePolicy::Allow => continue,
                DuplicatePolicy::Reject => {
                    return Err(TeamForgeError::DuplicateHero(hero.name().to_string()))
                }
            }
        }
        ids.push(hero.id());
    }
    Ok(ids)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AbilityClass {
    A,
    B,
}

/// Eligibility rules for the special ability.
///
/// A selection names zero heroes (disabled) or exactly two: one from class
/// A and one from class B, where the B hero is among the allowed partners
/// of the A hero. Names are matched against canonical catalog names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialAbilityRules {
    pub class_a: Vec<String>,
    pub class_b: Vec<String>,
    /// Allowed class B partners per class A hero.
    pub allowed_pairs: BTreeMap<String, Vec<String>>,
}

impl SpecialAbilityRules {
    /// The Glory League tables of the built-in roster.
    pub fn builtin() -> Self {
        Self {
            class_a: builtin::GLORY_LEAGUE_CLASS_A
                .iter()
                .map(|s| s.to_string())
                .collect(),
            class_b: builtin::GLORY_LEAGUE_CLASS_B
                .iter()
                .map(|s| s.to_string())
                .collect(),
            allowed_pairs: builtin::GLORY_LEAGUE_PAIRS
                .iter()
                .map(|(a, bs)| (a.to_string(), bs.iter().map(|b| b.to_string()).collect()))
                .collect(),
        }
    }

    fn class_of(&self, name: &str) -> Option<AbilityClass> {
        if self.class_a.iter().any(|a| a == name) {
            Some(AbilityClass::A)
        } else if self.class_b.iter().any(|b| b == name) {
            Some(AbilityClass::B)
        } else {
            None
        }
    }

    /// Validates a selection and returns the selected identities.
    ///
    /// # Errors
    ///
    /// `HeroNotFound` for an unknown name; `InvalidSpecialAbility` for a
    /// count other than 0 or 2, an ineligible hero, two heroes of the same
    /// class, or a pairing that is not allowed.
    pub fn select<S: AsRef<str>>(
        &self,
        catalog: &Catalog,
        names: &[S],
    ) -> Result<BTreeSet<HeroId>> {
        match names.len() {
            0 => return Ok(BTreeSet::new()),
            2 => {}
            n => {
                return Err(TeamForgeError::InvalidSpecialAbility(format!(
                    "select exactly two heroes or none, got {n}"
                )))
            }
        }

        let first = catalog.require_hero(names[0].as_ref())?;
        let second = catalog.require_hero(names[1].as_ref())?;
        let classify = |name: &str| {
            self.class_of(name).ok_or_else(|| {
                TeamForgeError::InvalidSpecialAbility(format!("{name} is not eligible"))
            })
        };

        let (a, b) = match (classify(first.name())?, classify(second.name())?) {
            (AbilityClass::A, AbilityClass::B) => (first, second),
            (AbilityClass::B, AbilityClass::A) => (second, first),
            _ => {
                return Err(TeamForgeError::InvalidSpecialAbility(format!(
                    "{} and {} are in the same class",
                    first.name(),
                    second.name()
                )))
            }
        };

        let allowed = self
            .allowed_pairs
            .get(a.name())
            .is_some_and(|partners| partners.iter().any(|p| p == b.name()));
        if !allowed {
            return Err(TeamForgeError::InvalidSpecialAbility(format!(
                "{} cannot pair with {}",
                a.name(),
                b.name()
            )));
        }

        Ok([a.id(), b.id()].into_iter().collect())
    }
}

/// Traits eligible for a flat enhancement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnhancementRules {
    pub eligible: Vec<String>,
}

impl EnhancementRules {
    /// The Magic Crystal allow-list of the built-in roster.
    pub fn builtin() -> Self {
        Self {
            eligible: builtin::MAGIC_CRYSTAL_TRAITS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    /// Resolves trait names to enhancement counts; repeated names accumulate.
    ///
    /// # Errors
    ///
    /// `TraitNotFound` for an unknown name; `InvalidEnhancement` for a
    /// trait not on the allow-list.
    pub fn select<S: AsRef<str>>(
        &self,
        catalog: &Catalog,
        names: &[S],
    ) -> Result<BTreeMap<TraitId, u32>> {
        let mut enhancements = BTreeMap::new();
        for name in names {
            let t = catalog.require_trait(name.as_ref())?;
            if !self.eligible.iter().any(|e| e == t.name()) {
                return Err(TeamForgeError::InvalidEnhancement(format!(
                    "{} cannot be enhanced",
                    t.name()
                )));
            }
            *enhancements.entry(t.id()).or_insert(0) += 1;
        }
        Ok(enhancements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        builtin::catalog().unwrap()
    }

    fn id(catalog: &Catalog, name: &str) -> HeroId {
        catalog.hero_by_name(name).unwrap().id()
    }

    fn special_err(names: &[&str]) -> TeamForgeError {
        SpecialAbilityRules::builtin()
            .select(&catalog(), names)
            .unwrap_err()
    }

    #[test]
    fn test_resolve_keeps_input_order() {
        let catalog = catalog();
        let ids = resolve_heroes(&catalog, &["Irithel", "hanabi"], DuplicatePolicy::Allow).unwrap();
        assert_eq!(ids, vec![id(&catalog, "Irithel"), id(&catalog, "Hanabi")]);
    }

    #[test]
    fn test_resolve_allow_drops_repeats() {
        let catalog = catalog();
        let ids = resolve_heroes(&catalog, &["Layla", "Roger", "layla"], DuplicatePolicy::Allow)
            .unwrap();
        assert_eq!(ids, vec![id(&catalog, "Layla"), id(&catalog, "Roger")]);
    }

    #[test]
    fn test_resolve_reject_repeats() {
        let err = resolve_heroes(&catalog(), &["Layla", "LAYLA"], DuplicatePolicy::Reject)
            .unwrap_err();
        assert_eq!(err, TeamForgeError::DuplicateHero("Layla".to_string()));
    }

    #[test]
    fn test_resolve_unknown_lists_valid_names() {
        let err = resolve_heroes(&catalog(), &["Nobody"], DuplicatePolicy::Allow).unwrap_err();
        match err {
            TeamForgeError::HeroNotFound { name, valid } => {
                assert_eq!(name, "Nobody");
                assert_eq!(valid.len(), 53);
                assert!(valid.iter().any(|v| v == "Layla"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_special_disabled() {
        let empty: [&str; 0] = [];
        let selected = SpecialAbilityRules::builtin()
            .select(&catalog(), &empty)
            .unwrap();
        assert!(selected.is_empty());
    }

    #[test]
    fn test_special_valid_pair_any_order() {
        let catalog = catalog();
        let rules = SpecialAbilityRules::builtin();
        let forward = rules.select(&catalog, &["Kula", "X.Borg"]).unwrap();
        let reverse = rules.select(&catalog, &["x.borg", "kula"]).unwrap();
        assert_eq!(forward, reverse);
        assert!(forward.contains(&id(&catalog, "Kula")));
        assert!(forward.contains(&id(&catalog, "X.Borg")));
    }

    #[test]
    fn test_special_wrong_count() {
        assert!(matches!(
            special_err(&["Kula"]),
            TeamForgeError::InvalidSpecialAbility(_)
        ));
        assert!(matches!(
            special_err(&["Kula", "Akai", "Harley"]),
            TeamForgeError::InvalidSpecialAbility(_)
        ));
    }

    #[test]
    fn test_special_unknown_name() {
        assert!(matches!(
            special_err(&["Kula", "Nobody"]),
            TeamForgeError::HeroNotFound { .. }
        ));
    }

    #[test]
    fn test_special_ineligible_hero() {
        let err = special_err(&["Masha", "Akai"]);
        assert_eq!(
            err,
            TeamForgeError::InvalidSpecialAbility("Masha is not eligible".to_string())
        );
    }

    #[test]
    fn test_special_same_class() {
        assert!(matches!(
            special_err(&["Kula", "Alucard"]),
            TeamForgeError::InvalidSpecialAbility(_)
        ));
        assert!(matches!(
            special_err(&["Akai", "X.Borg"]),
            TeamForgeError::InvalidSpecialAbility(_)
        ));
    }

    #[test]
    fn test_special_disallowed_pair() {
        let err = special_err(&["X.Borg", "Lolita"]);
        assert_eq!(
            err,
            TeamForgeError::InvalidSpecialAbility("Lolita cannot pair with X.Borg".to_string())
        );
    }

    #[test]
    fn test_enhancements_accumulate() {
        let catalog = catalog();
        let selected = EnhancementRules::builtin()
            .select(&catalog, &["Marksman", "marksman", "Mage"])
            .unwrap();
        let marksman = catalog.trait_by_name("Marksman").unwrap().id();
        let mage = catalog.trait_by_name("Mage").unwrap().id();
        assert_eq!(selected.len(), 2);
        assert_eq!(selected[&marksman], 2);
        assert_eq!(selected[&mage], 1);
    }

    #[test]
    fn test_enhancement_rejects_faction_trait() {
        let err = EnhancementRules::builtin()
            .select(&catalog(), &["Metro Zero"])
            .unwrap_err();
        assert!(matches!(err, TeamForgeError::InvalidEnhancement(_)));
    }

    #[test]
    fn test_enhancement_unknown_trait() {
        let err = EnhancementRules::builtin()
            .select(&catalog(), &["Sharpshooter"])
            .unwrap_err();
        assert!(matches!(err, TeamForgeError::TraitNotFound { .. }));
    }
}
