//! TeamScore - single-level integer team score

use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub};

/// The score of a complete team.
///
/// Higher is better. A score is the sum of synergy tier values, hero
/// quality and the gate bonus (or penalty).
///
/// # Examples
///
/// ```
/// use teamforge_core::TeamScore;
///
/// let a = TeamScore::of(512);
/// let b = TeamScore::of(-480);
///
/// assert!(a > b);
/// assert_eq!((a + b).value(), 32);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TeamScore {
    score: i64,
}

impl TeamScore {
    /// The zero score.
    pub const ZERO: TeamScore = TeamScore { score: 0 };

    /// Creates a new TeamScore with the given value.
    #[inline]
    pub const fn of(score: i64) -> Self {
        TeamScore { score }
    }

    /// Returns the score value.
    #[inline]
    pub const fn value(&self) -> i64 {
        self.score
    }
}

impl Ord for TeamScore {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score.cmp(&other.score)
    }
}

impl PartialOrd for TeamScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for TeamScore {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        TeamScore::of(self.score + other.score)
    }
}

impl AddAssign for TeamScore {
    fn add_assign(&mut self, other: Self) {
        self.score += other.score;
    }
}

impl Sub for TeamScore {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        TeamScore::of(self.score - other.score)
    }
}

impl Neg for TeamScore {
    type Output = Self;

    fn neg(self) -> Self {
        TeamScore::of(-self.score)
    }
}

impl Sum for TeamScore {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(TeamScore::ZERO, Add::add)
    }
}

impl fmt::Debug for TeamScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TeamScore({})", self.score)
    }
}

impl fmt::Display for TeamScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(TeamScore::of(10) > TeamScore::of(-10));
        assert_eq!(TeamScore::of(3).cmp(&TeamScore::of(3)), Ordering::Equal);
    }

    #[test]
    fn test_arithmetic() {
        let mut score = TeamScore::of(7);
        score += TeamScore::of(3);
        assert_eq!(score, TeamScore::of(10));
        assert_eq!(-score, TeamScore::of(-10));
        assert_eq!(score - TeamScore::of(4), TeamScore::of(6));
    }

    #[test]
    fn test_sum() {
        let total: TeamScore = [1, 2, 3].into_iter().map(TeamScore::of).sum();
        assert_eq!(total.value(), 6);
    }

    #[test]
    fn test_display_and_debug() {
        assert_eq!(format!("{}", TeamScore::of(-500)), "-500");
        assert_eq!(format!("{:?}", TeamScore::of(42)), "TeamScore(42)");
    }
}
