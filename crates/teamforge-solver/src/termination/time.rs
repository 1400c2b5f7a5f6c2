//! Time-based termination.

use std::time::{Duration, Instant};

use super::Termination;

/// Terminates once a time limit has elapsed.
///
/// The clock starts when the termination is created.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use teamforge_solver::termination::{Termination, TimeTermination};
///
/// // Terminate after 30 seconds
/// let term = TimeTermination::new(Duration::from_secs(30));
/// assert!(!term.is_terminated());
///
/// // Or use convenience constructors
/// let term = TimeTermination::seconds(30);
/// let term = TimeTermination::millis(500);
/// ```
#[derive(Debug, Clone)]
pub struct TimeTermination {
    start: Instant,
    limit: Duration,
}

impl TimeTermination {
    pub fn new(limit: Duration) -> Self {
        Self {
            start: Instant::now(),
            limit,
        }
    }

    pub fn millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    pub fn seconds(secs: u64) -> Self {
        Self::new(Duration::from_secs(secs))
    }

    pub fn limit(&self) -> Duration {
        self.limit
    }
}

impl Termination for TimeTermination {
    fn is_terminated(&self) -> bool {
        self.start.elapsed() >= self.limit
    }
}
