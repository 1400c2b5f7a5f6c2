//! Composite termination (OR).
//!
//! Uses macro-generated tuple implementations for zero type erasure.

use super::Termination;

/// Combines multiple terminations with OR logic (any must terminate).
///
/// Wraps a tuple of terminations. Terminates when ANY child terminates.
///
/// # Examples
///
/// ```
/// use teamforge_solver::termination::{
///     ExternalTermination, OrTermination, Termination, TimeTermination,
/// };
///
/// // Terminate after 30 seconds OR when the caller flips the flag
/// let external = ExternalTermination::new();
/// let termination = OrTermination((TimeTermination::seconds(30), external.clone()));
///
/// external.terminate();
/// assert!(termination.is_terminated());
/// ```
#[derive(Debug, Clone)]
pub struct OrTermination<T>(pub T);

impl<T> OrTermination<T> {
    /// Creates a new OR termination from a tuple of terminations.
    pub fn new(terminations: T) -> Self {
        Self(terminations)
    }
}

/// Generates `Termination` implementations for OR tuples.
macro_rules! impl_or_termination {
    ($($idx:tt: $T:ident),+) => {
        impl<$($T),+> Termination for OrTermination<($($T,)+)>
        where
            $($T: Termination,)+
        {
            fn is_terminated(&self) -> bool {
                $((self.0).$idx.is_terminated())||+
            }
        }
    };
}

impl_or_termination!(0: T0);
impl_or_termination!(0: T0, 1: T1);
impl_or_termination!(0: T0, 1: T1, 2: T2);
impl_or_termination!(0: T0, 1: T1, 2: T2, 3: T3);
