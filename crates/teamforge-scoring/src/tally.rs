//! Sparse per-trait counter.

use std::collections::BTreeMap;

use teamforge_core::{Catalog, TraitId, TraitMask};

/// Per-trait member counts for one team.
///
/// Sparse: a trait whose count is zero is absent, never a zero-valued
/// present entry. Presence is tracked in a [`TraitMask`], so iteration only
/// visits traits that currently have a positive count.
///
/// # Examples
///
/// ```
/// use teamforge_core::TraitId;
/// use teamforge_scoring::TraitTally;
///
/// let marksman = TraitId::new(15);
/// let mut tally = TraitTally::new(21);
/// tally.increment(marksman);
/// tally.increment(marksman);
/// assert_eq!(tally.get(marksman), 2);
///
/// tally.decrement(marksman);
/// tally.decrement(marksman);
/// assert!(tally.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraitTally {
    counts: Vec<u32>,
    present: TraitMask,
}

impl TraitTally {
    /// Creates an empty tally able to hold `trait_count` traits.
    pub fn new(trait_count: usize) -> Self {
        Self {
            counts: vec![0; trait_count],
            present: TraitMask::EMPTY,
        }
    }

    /// Creates an empty tally sized for `catalog`.
    pub fn for_catalog(catalog: &Catalog) -> Self {
        Self::new(catalog.trait_count())
    }

    /// Returns the count for `t`, zero when absent.
    #[inline]
    pub fn get(&self, t: TraitId) -> u32 {
        if self.present.contains(t) {
            self.counts[t.index()]
        } else {
            0
        }
    }

    #[inline]
    pub fn contains(&self, t: TraitId) -> bool {
        self.present.contains(t)
    }

    /// Adds `amount` to the count of `t`. Adding zero leaves `t` absent.
    ///
    /// # Panics
    ///
    /// Panics if the count would exceed `u32::MAX`.
    #[inline]
    pub fn add(&mut self, t: TraitId, amount: u32) {
        if amount == 0 {
            return;
        }
        let slot = &mut self.counts[t.index()];
        *slot = match slot.checked_add(amount) {
            Some(sum) => sum,
            None => panic!("tally overflow on {}: {} + {}", t, *slot, amount),
        };
        self.present.insert(t);
    }

    #[inline]
    pub fn increment(&mut self, t: TraitId) {
        self.add(t, 1);
    }

    /// Subtracts `amount` from the count of `t`, removing the entry when it
    /// reaches zero.
    ///
    /// # Panics
    ///
    /// Panics if `amount` exceeds the current count.
    #[inline]
    pub fn subtract(&mut self, t: TraitId, amount: u32) {
        if amount == 0 {
            return;
        }
        let slot = &mut self.counts[t.index()];
        assert!(
            *slot >= amount,
            "tally underflow on {}: {} - {}",
            t,
            *slot,
            amount
        );
        *slot -= amount;
        if *slot == 0 {
            self.present.remove(t);
        }
    }

    #[inline]
    pub fn decrement(&mut self, t: TraitId) {
        self.subtract(t, 1);
    }

    /// Traits with a positive count.
    #[inline]
    pub fn present(&self) -> TraitMask {
        self.present
    }

    /// Number of traits with a positive count.
    #[inline]
    pub fn len(&self) -> usize {
        self.present.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.present.is_empty()
    }

    /// Iterates over present traits in ascending identity order.
    pub fn iter(&self) -> impl Iterator<Item = (TraitId, u32)> + '_ {
        self.present.iter().map(|t| (t, self.counts[t.index()]))
    }

    /// Copies the present entries into an ordered map.
    pub fn to_map(&self) -> BTreeMap<TraitId, u32> {
        self.iter().collect()
    }
}
