//! Iterator over k-combinations of pool positions.

/// Iterator over every `k`-combination of `0..n` in lexicographic order.
///
/// Each combination is strictly increasing, so every set of positions is
/// produced exactly once.
///
/// # Example
///
/// ```
/// use teamforge_solver::enumerator::CombinationIterator;
///
/// let all: Vec<Vec<usize>> = CombinationIterator::new(4, 2).collect();
/// assert_eq!(all.len(), 6);
/// assert_eq!(all[0], vec![0, 1]);
/// assert_eq!(all[5], vec![2, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct CombinationIterator {
    n: usize,
    /// Current positions.
    positions: Vec<usize>,
    /// Whether we've exhausted all combinations.
    done: bool,
}

impl CombinationIterator {
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            positions: (0..k).collect(),
            done: k > n,
        }
    }

    fn advance(&mut self) {
        let k = self.positions.len();
        let n = self.n;

        // Find the rightmost position that can be incremented
        for i in (0..k).rev() {
            if self.positions[i] < n - (k - i) {
                self.positions[i] += 1;
                // Reset all positions after i
                for j in (i + 1)..k {
                    self.positions[j] = self.positions[j - 1] + 1;
                }
                return;
            }
        }

        self.done = true;
    }
}

impl Iterator for CombinationIterator {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current = self.positions.clone();
        self.advance();
        Some(current)
    }
}

/// Compute binomial coefficient C(n, k), saturating at `u64::MAX`.
pub fn binomial(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k); // Use symmetry
    let mut result: u128 = 1;
    for i in 0..k {
        result = result * (n - i) as u128 / (i + 1) as u128;
        if result > u64::MAX as u128 {
            return u64::MAX;
        }
    }
    result as u64
}
