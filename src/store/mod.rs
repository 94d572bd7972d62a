mod schema;
mod sqlite;

pub use sqlite::SqliteStore;

use crate::error::Result;
use crate::league::MatchOutcome;
use crate::types::*;

/// Store defines the database interface.
///
/// Composite operations (`replace_division_fixtures`, `record_result`)
/// are all-or-nothing: implementations must run them as a single
/// transaction so a failure mid-sequence leaves prior committed state
/// untouched.
pub trait Store: Send + Sync {
    fn initialize(&self) -> Result<()>;

    // Division operations
    fn create_division(&self, division: &Division) -> Result<()>;
    fn get_division(&self, id: &str) -> Result<Option<Division>>;
    fn get_division_by_name(&self, name: &str) -> Result<Option<Division>>;
    fn list_divisions(&self) -> Result<Vec<Division>>;
    fn delete_division(&self, id: &str) -> Result<bool>;

    // Player operations
    fn create_player(&self, player: &Player) -> Result<()>;
    fn get_player(&self, id: &str) -> Result<Option<Player>>;
    fn get_player_by_name(&self, division_id: &str, name: &str) -> Result<Option<Player>>;
    /// Standings order: points, then set difference, then name.
    fn list_division_players(&self, division_id: &str) -> Result<Vec<Player>>;

    // Fixture operations
    fn get_fixture(&self, id: &str) -> Result<Option<Fixture>>;
    fn list_division_fixtures(&self, division_id: &str) -> Result<Vec<FixtureWithNames>>;
    /// Full replace for a (re)generation cycle: drops the division's
    /// fixtures, zeroes its players' stats, and inserts the new set.
    fn replace_division_fixtures(&self, division_id: &str, fixtures: &[Fixture]) -> Result<()>;
    /// Records a validated outcome on a fixture, reversing any prior
    /// result first so corrections are idempotent.
    fn record_result(&self, fixture_id: &str, outcome: &MatchOutcome) -> Result<Fixture>;

    fn close(&self) -> Result<()>;
}
