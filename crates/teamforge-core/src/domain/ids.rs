//! Stable identities and trait bit-membership.

use std::fmt;

/// Maximum number of traits a catalog may define (one bit per trait).
pub const MAX_TRAITS: usize = 64;

/// Identity of a trait, assigned sequentially in definition order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraitId(usize);

impl TraitId {
    #[inline]
    pub const fn new(index: usize) -> Self {
        TraitId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for TraitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

/// Identity of a hero, assigned sequentially in definition order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeroId(usize);

impl HeroId {
    #[inline]
    pub const fn new(index: usize) -> Self {
        HeroId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for HeroId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "H{}", self.0)
    }
}

/// A set of traits stored as one bit per trait identity.
///
/// # Examples
///
/// ```
/// use teamforge_core::{TraitId, TraitMask};
///
/// let mask = TraitMask::from_traits([TraitId::new(0), TraitId::new(3)]);
/// assert!(mask.contains(TraitId::new(3)));
/// assert!(!mask.contains(TraitId::new(1)));
/// assert_eq!(mask.bits(), 0b1001);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct TraitMask(u64);

impl TraitMask {
    pub const EMPTY: TraitMask = TraitMask(0);

    /// Builds the bitwise union of the given trait bits.
    pub fn from_traits(traits: impl IntoIterator<Item = TraitId>) -> Self {
        traits
            .into_iter()
            .fold(TraitMask::EMPTY, |mask, t| mask.with(t))
    }

    #[inline]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Whether `t` fits in a mask.
    #[inline]
    pub const fn in_range(t: TraitId) -> bool {
        t.0 < MAX_TRAITS
    }

    #[inline]
    const fn bit(t: TraitId) -> u64 {
        assert!(t.0 < MAX_TRAITS, "trait identity outside the mask range");
        1u64 << t.0
    }

    /// Identities at or past [`MAX_TRAITS`] are never members.
    #[inline]
    pub const fn contains(self, t: TraitId) -> bool {
        Self::in_range(t) && self.0 & Self::bit(t) != 0
    }

    /// # Panics
    ///
    /// Panics if `t` is at or past [`MAX_TRAITS`].
    #[inline]
    pub const fn with(self, t: TraitId) -> Self {
        TraitMask(self.0 | Self::bit(t))
    }

    /// Like [`with`](Self::with), returning `None` for an out-of-range `t`.
    #[inline]
    pub const fn checked_with(self, t: TraitId) -> Option<Self> {
        if Self::in_range(t) {
            Some(self.with(t))
        } else {
            None
        }
    }

    /// # Panics
    ///
    /// Panics if `t` is at or past [`MAX_TRAITS`].
    #[inline]
    pub fn insert(&mut self, t: TraitId) {
        self.0 |= Self::bit(t);
    }

    /// Inserts `t` if it fits; returns whether it did.
    #[inline]
    pub fn try_insert(&mut self, t: TraitId) -> bool {
        match self.checked_with(t) {
            Some(mask) => {
                *self = mask;
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn remove(&mut self, t: TraitId) {
        if Self::in_range(t) {
            self.0 &= !Self::bit(t);
        }
    }

    #[inline]
    pub const fn union(self, other: TraitMask) -> Self {
        TraitMask(self.0 | other.0)
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterates over member traits in ascending identity order.
    pub fn iter(self) -> TraitMaskIter {
        TraitMaskIter { remaining: self.0 }
    }
}

impl FromIterator<TraitId> for TraitMask {
    fn from_iter<I: IntoIterator<Item = TraitId>>(iter: I) -> Self {
        TraitMask::from_traits(iter)
    }
}

/// Iterator over the set bits of a [`TraitMask`].
#[derive(Debug, Clone)]
pub struct TraitMaskIter {
    remaining: u64,
}

impl Iterator for TraitMaskIter {
    type Item = TraitId;

    fn next(&mut self) -> Option<TraitId> {
        if self.remaining == 0 {
            return None;
        }
        let index = self.remaining.trailing_zeros() as usize;
        self.remaining &= self.remaining - 1;
        Some(TraitId(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for TraitMaskIter {}
