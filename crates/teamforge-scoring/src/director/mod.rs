//! Team director implementations.
//!
//! A team director manages a partially built team and its score.
//!
//! # Team Director Types
//!
//! - [`RecalculatingTeam`] - Full re-tally on every query (baseline)
//! - [`IncrementalTeam`] - Running tally maintained across push/pop

mod incremental;
mod recalculating;
mod traits;

#[cfg(test)]
mod tests;

pub use incremental::IncrementalTeam;
pub use recalculating::RecalculatingTeam;
pub use traits::TeamDirector;
