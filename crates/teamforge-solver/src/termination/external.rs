//! External termination via a shared AtomicBool flag.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::Termination;

/// Terminates when an external flag is set.
///
/// Clones share the same flag, so one clone can be handed to the search
/// while another is kept to request termination.
///
/// # Example
///
/// ```
/// use teamforge_solver::termination::{ExternalTermination, Termination};
///
/// let term = ExternalTermination::new();
/// let handle = term.clone();
/// assert!(!term.is_terminated());
///
/// handle.terminate();
/// assert!(term.is_terminated());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExternalTermination {
    flag: Arc<AtomicBool>,
}

impl ExternalTermination {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a termination that checks the given flag.
    pub fn from_flag(flag: Arc<AtomicBool>) -> Self {
        Self { flag }
    }

    /// Requests termination.
    pub fn terminate(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn flag(&self) -> &Arc<AtomicBool> {
        &self.flag
    }
}

impl Termination for ExternalTermination {
    fn is_terminated(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}
