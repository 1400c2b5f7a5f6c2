//! Team enumerators.
//!
//! - [`ExhaustiveEnumerator`] re-scores every combination from scratch; the
//!   reference the faster search is checked against
//! - [`PrunedEnumerator`] walks the free pool depth-first with an
//!   incremental tally and cuts subtrees that can no longer meet the gate
//!
//! Both draw candidates from a [`SearchPool`](crate::prepass::SearchPool)
//! and feed complete teams into a [`TopK`](crate::topk::TopK).

mod combinations;
mod exhaustive;
mod pruned;

pub use combinations::{binomial, CombinationIterator};
pub use exhaustive::ExhaustiveEnumerator;
pub use pruned::PrunedEnumerator;

use crate::termination::Termination;

#[inline]
fn terminated(termination: Option<&dyn Termination>) -> bool {
    termination.is_some_and(|t| t.is_terminated())
}
