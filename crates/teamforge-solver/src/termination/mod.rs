//! Termination conditions for a team search.
//!
//! A search polls its termination at every recursive entry (pruned search)
//! and before every evaluation (exhaustive search). Once it reports `true`
//! the search unwinds and reports cancellation.

mod composite;
mod external;
mod time;

use std::fmt::Debug;

pub use composite::OrTermination;
pub use external::ExternalTermination;
pub use time::TimeTermination;

/// Trait for determining when to stop searching.
///
/// Shared by every parallel worker, hence `Sync`.
pub trait Termination: Send + Sync + Debug {
    /// Returns true if searching should stop.
    fn is_terminated(&self) -> bool;
}

impl<T: Termination + ?Sized> Termination for &T {
    fn is_terminated(&self) -> bool {
        (**self).is_terminated()
    }
}

impl<T: Termination + ?Sized> Termination for std::sync::Arc<T> {
    fn is_terminated(&self) -> bool {
        (**self).is_terminated()
    }
}
