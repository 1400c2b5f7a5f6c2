//! Trait catalog and hero roster.
//!
//! Both are built once per optimization run and are read-only afterwards.
//! Identities are assigned sequentially in definition order.

use smallvec::SmallVec;

use super::ids::{HeroId, TraitId, TraitMask, MAX_TRAITS};
use crate::error::{Result, TeamForgeError};

/// A named category heroes belong to, with the member counts at which
/// its synergy tiers unlock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trait {
    id: TraitId,
    name: String,
    thresholds: SmallVec<[u32; 4]>,
}

impl Trait {
    /// Creates a trait, validating that thresholds are non-empty, positive
    /// and strictly increasing.
    pub fn new(id: TraitId, name: impl Into<String>, thresholds: &[u32]) -> Result<Self> {
        let name = name.into();
        if thresholds.is_empty() {
            return Err(TeamForgeError::InvalidCatalog(format!(
                "trait '{}' has no thresholds",
                name
            )));
        }
        if thresholds[0] == 0 {
            return Err(TeamForgeError::InvalidCatalog(format!(
                "trait '{}' has a zero threshold",
                name
            )));
        }
        if thresholds.windows(2).any(|w| w[0] >= w[1]) {
            return Err(TeamForgeError::InvalidCatalog(format!(
                "trait '{}' thresholds {:?} are not strictly increasing",
                name, thresholds
            )));
        }
        Ok(Self {
            id,
            name,
            thresholds: SmallVec::from_slice(thresholds),
        })
    }

    #[inline]
    pub fn id(&self) -> TraitId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn thresholds(&self) -> &[u32] {
        &self.thresholds
    }

    /// Returns the largest threshold met by `count`, if any.
    ///
    /// ```
    /// use teamforge_core::{Trait, TraitId};
    ///
    /// let shadowcell = Trait::new(TraitId::new(0), "Shadowcell", &[2, 4, 6, 10]).unwrap();
    /// assert_eq!(shadowcell.tier_reached(1), None);
    /// assert_eq!(shadowcell.tier_reached(5), Some(4));
    /// assert_eq!(shadowcell.tier_reached(12), Some(10));
    /// ```
    pub fn tier_reached(&self, count: u32) -> Option<u32> {
        self.thresholds.iter().rev().find(|&&t| count >= t).copied()
    }
}

/// A roster member: quality value plus trait membership.
///
/// The membership mask always equals the union of the bits of `traits()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hero {
    id: HeroId,
    name: String,
    quality: i64,
    traits: SmallVec<[TraitId; 4]>,
    mask: TraitMask,
}

impl Hero {
    /// Creates a hero. Repeated trait identities collapse into one membership.
    ///
    /// # Errors
    ///
    /// Returns [`TeamForgeError::InvalidCatalog`] for a trait identity at or
    /// past [`MAX_TRAITS`].
    pub fn new(
        id: HeroId,
        name: impl Into<String>,
        quality: i64,
        traits: impl IntoIterator<Item = TraitId>,
    ) -> Result<Self> {
        let name = name.into();
        let mut members: SmallVec<[TraitId; 4]> = SmallVec::new();
        let mut mask = TraitMask::EMPTY;
        for t in traits {
            if mask.contains(t) {
                continue;
            }
            if !mask.try_insert(t) {
                return Err(TeamForgeError::InvalidCatalog(format!(
                    "hero '{}' references trait {}, at most {} traits supported",
                    name, t, MAX_TRAITS
                )));
            }
            members.push(t);
        }
        Ok(Self {
            id,
            name,
            quality,
            traits: members,
            mask,
        })
    }

    #[inline]
    pub fn id(&self) -> HeroId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn quality(&self) -> i64 {
        self.quality
    }

    /// Trait memberships in declaration order.
    #[inline]
    pub fn traits(&self) -> &[TraitId] {
        &self.traits
    }

    #[inline]
    pub fn mask(&self) -> TraitMask {
        self.mask
    }

    #[inline]
    pub fn has_trait(&self, t: TraitId) -> bool {
        self.mask.contains(t)
    }
}

/// Static trait definition: `{name, thresholds}`.
#[derive(Debug, Clone, Copy)]
pub struct TraitRecord<'a> {
    pub name: &'a str,
    pub thresholds: &'a [u32],
}

/// Static hero definition: `{name, quality, trait_membership}` where the
/// membership lists trait positions in the accompanying trait table.
#[derive(Debug, Clone, Copy)]
pub struct HeroRecord<'a> {
    pub name: &'a str,
    pub quality: i64,
    pub traits: &'a [usize],
}

/// The immutable trait catalog together with the hero roster.
#[derive(Debug, Clone)]
pub struct Catalog {
    traits: Vec<Trait>,
    heroes: Vec<Hero>,
}

impl Catalog {
    /// Builds a catalog from static trait and hero tables.
    ///
    /// # Errors
    ///
    /// Returns [`TeamForgeError::InvalidCatalog`] for malformed thresholds,
    /// out-of-range trait references, duplicate names or more than
    /// [`MAX_TRAITS`] traits.
    pub fn from_records(traits: &[TraitRecord<'_>], heroes: &[HeroRecord<'_>]) -> Result<Self> {
        if traits.len() > MAX_TRAITS {
            return Err(TeamForgeError::InvalidCatalog(format!(
                "{} traits defined, at most {} supported",
                traits.len(),
                MAX_TRAITS
            )));
        }

        let traits = traits
            .iter()
            .enumerate()
            .map(|(i, r)| Trait::new(TraitId::new(i), r.name, r.thresholds))
            .collect::<Result<Vec<_>>>()?;
        ensure_unique_names(traits.iter().map(Trait::name), "trait")?;

        let mut roster = Vec::with_capacity(heroes.len());
        for (i, r) in heroes.iter().enumerate() {
            if let Some(&bad) = r.traits.iter().find(|&&t| t >= traits.len()) {
                return Err(TeamForgeError::InvalidCatalog(format!(
                    "hero '{}' references trait #{} but only {} traits exist",
                    r.name,
                    bad,
                    traits.len()
                )));
            }
            roster.push(Hero::new(
                HeroId::new(i),
                r.name,
                r.quality,
                r.traits.iter().map(|&t| TraitId::new(t)),
            )?);
        }
        ensure_unique_names(roster.iter().map(Hero::name), "hero")?;

        Ok(Self {
            traits,
            heroes: roster,
        })
    }

    #[inline]
    pub fn traits(&self) -> &[Trait] {
        &self.traits
    }

    #[inline]
    pub fn heroes(&self) -> &[Hero] {
        &self.heroes
    }

    #[inline]
    pub fn trait_count(&self) -> usize {
        self.traits.len()
    }

    #[inline]
    pub fn hero_count(&self) -> usize {
        self.heroes.len()
    }

    /// Returns the trait definition.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this catalog.
    #[inline]
    pub fn trait_def(&self, id: TraitId) -> &Trait {
        &self.traits[id.index()]
    }

    /// Returns the hero.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this catalog.
    #[inline]
    pub fn hero(&self, id: HeroId) -> &Hero {
        &self.heroes[id.index()]
    }

    pub fn contains_hero(&self, id: HeroId) -> bool {
        id.index() < self.heroes.len()
    }

    pub fn contains_trait(&self, id: TraitId) -> bool {
        id.index() < self.traits.len()
    }

    /// Case-insensitive hero lookup.
    pub fn hero_by_name(&self, name: &str) -> Option<&Hero> {
        let name = name.trim();
        self.heroes
            .iter()
            .find(|h| h.name().eq_ignore_ascii_case(name))
    }

    /// Case-insensitive trait lookup.
    pub fn trait_by_name(&self, name: &str) -> Option<&Trait> {
        let name = name.trim();
        self.traits
            .iter()
            .find(|t| t.name().eq_ignore_ascii_case(name))
    }

    /// Like [`hero_by_name`](Self::hero_by_name) but fails with the list of valid names.
    pub fn require_hero(&self, name: &str) -> Result<&Hero> {
        self.hero_by_name(name)
            .ok_or_else(|| TeamForgeError::HeroNotFound {
                name: name.to_string(),
                valid: self.hero_names(),
            })
    }

    /// Like [`trait_by_name`](Self::trait_by_name) but fails with the list of valid names.
    pub fn require_trait(&self, name: &str) -> Result<&Trait> {
        self.trait_by_name(name)
            .ok_or_else(|| TeamForgeError::TraitNotFound {
                name: name.to_string(),
                valid: self.trait_names(),
            })
    }

    pub fn hero_names(&self) -> Vec<String> {
        self.heroes.iter().map(|h| h.name().to_string()).collect()
    }

    pub fn trait_names(&self) -> Vec<String> {
        self.traits.iter().map(|t| t.name().to_string()).collect()
    }

    /// Iterates over every hero holding trait `t`.
    pub fn holders_of(&self, t: TraitId) -> impl Iterator<Item = &Hero> + '_ {
        self.heroes.iter().filter(move |h| h.has_trait(t))
    }
}

fn ensure_unique_names<'a>(names: impl Iterator<Item = &'a str>, kind: &str) -> Result<()> {
    let mut seen: Vec<String> = Vec::new();
    for name in names {
        let key = name.to_ascii_lowercase();
        if seen.contains(&key) {
            return Err(TeamForgeError::InvalidCatalog(format!(
                "duplicate {} name '{}'",
                kind, name
            )));
        }
        seen.push(key);
    }
    Ok(())
}

/// Name-based catalog construction.
///
/// Heroes reference traits by name; references are resolved on
/// [`build`](Self::build), so traits may be added in any order.
///
/// # Example
///
/// ```
/// use teamforge_core::CatalogBuilder;
///
/// let catalog = CatalogBuilder::new()
///     .add_trait("Metro Zero", [2])
///     .add_trait("Marksman", [2, 4, 6])
///     .add_hero("Ixia", 3, ["Metro Zero", "Marksman"])
///     .add_hero("Layla", 1, ["Marksman"])
///     .build()
///     .unwrap();
///
/// assert_eq!(catalog.hero_count(), 2);
/// assert!(catalog.hero_by_name("ixia").is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    traits: Vec<(String, Vec<u32>)>,
    heroes: Vec<(String, i64, Vec<String>)>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_trait(
        mut self,
        name: impl Into<String>,
        thresholds: impl IntoIterator<Item = u32>,
    ) -> Self {
        self.traits
            .push((name.into(), thresholds.into_iter().collect()));
        self
    }

    pub fn add_hero<I, T>(mut self, name: impl Into<String>, quality: i64, traits: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.heroes.push((
            name.into(),
            quality,
            traits.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// Resolves trait references and validates the definition.
    pub fn build(self) -> Result<Catalog> {
        let mut memberships: Vec<Vec<usize>> = Vec::with_capacity(self.heroes.len());
        for (hero, _, traits) in &self.heroes {
            let mut indices = Vec::with_capacity(traits.len());
            for t in traits {
                let index = self
                    .traits
                    .iter()
                    .position(|(name, _)| name.eq_ignore_ascii_case(t))
                    .ok_or_else(|| {
                        TeamForgeError::InvalidCatalog(format!(
                            "hero '{}' references unknown trait '{}'",
                            hero, t
                        ))
                    })?;
                indices.push(index);
            }
            memberships.push(indices);
        }

        let trait_records: Vec<TraitRecord<'_>> = self
            .traits
            .iter()
            .map(|(name, thresholds)| TraitRecord { name, thresholds })
            .collect();
        let hero_records: Vec<HeroRecord<'_>> = self
            .heroes
            .iter()
            .zip(&memberships)
            .map(|((name, quality, _), traits)| HeroRecord {
                name,
                quality: *quality,
                traits,
            })
            .collect();

        Catalog::from_records(&trait_records, &hero_records)
    }
}
