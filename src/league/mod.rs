//! Round-robin league engine: score-grid validation, the standings
//! ledger, and fixture pairing. Everything here is pure; persistence and
//! atomicity live in the store.

pub mod schedule;
pub mod scores;
pub mod standings;

pub use scores::{MatchOutcome, ScoreRules, validate_grid};
