//! Character progression engine.
//!
//! Pure computation over a character's experience and level: the canonical
//! XP threshold table, level derivation from total XP, and the level-up
//! side effects on hit points. Both the server and any client-side code
//! share this module instead of re-implementing the rules.
//!
//! No I/O and no shared state; every operation is a function from
//! `(snapshot, input)` to a new snapshot.

mod calculator;
mod level_table;
mod snapshot;

use thiserror::Error;

pub use calculator::{apply_experience, set_level, SET_LEVEL_HP_PER_LEVEL};
pub use level_table::{level_for_total_xp, xp_for_level, xp_span_of_level, MAX_LEVEL, MIN_LEVEL};
pub use snapshot::ProgressionSnapshot;

/// Error type for progression operations.
///
/// Both variants indicate a caller contract violation, detected before any
/// state change; neither is retryable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProgressionError {
    /// Argument that is never valid (e.g., negative XP)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Value outside its allowed range (e.g., level not in 1..=20)
    #[error("Out of range: {0}")]
    OutOfRange(String),
}

impl ProgressionError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn out_of_range(msg: impl Into<String>) -> Self {
        Self::OutOfRange(msg.into())
    }
}
