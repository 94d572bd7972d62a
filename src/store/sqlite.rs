use std::path::Path;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension, params};

use super::Store;
use super::schema::SCHEMA;
use crate::error::{Error, Result};
use crate::league::{MatchOutcome, standings};
use crate::types::*;

pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let conn = Connection::open(db_path)?;

        conn.pragma_update(None, "foreign_keys", "ON")?;
        conn.pragma_update(None, "journal_mode", "WAL")?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> std::sync::MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Returns a guard to the underlying database connection.
    /// This allows consuming applications to execute custom SQL.
    pub fn connection(&self) -> std::sync::MutexGuard<'_, Connection> {
        self.conn()
    }
}

fn parse_datetime(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| {
            // Handle SQLite's default datetime format: "YYYY-MM-DD HH:MM:SS"
            chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").map(|ndt| ndt.and_utc())
        })
        .unwrap_or_else(|e| {
            tracing::error!("Invalid datetime in database: '{}' - {}", s, e);
            Utc::now()
        })
}

fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

const FIXTURE_COLUMNS: &str = "id, division_id, player1_id, player2_id, played, set_scores,
     player1_sets, player2_sets, winner_id, match_date, created_at";

fn fixture_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Fixture> {
    let set_scores = match row.get::<_, Option<String>>(5)? {
        Some(raw) => Some(serde_json::from_str(&raw).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(5, rusqlite::types::Type::Text, Box::new(e))
        })?),
        None => None,
    };

    Ok(Fixture {
        id: row.get(0)?,
        division_id: row.get(1)?,
        player1_id: row.get(2)?,
        player2_id: row.get(3)?,
        played: row.get(4)?,
        set_scores,
        player1_sets: row.get(6)?,
        player2_sets: row.get(7)?,
        winner_id: row.get(8)?,
        match_date: row.get::<_, Option<String>>(9)?.map(|s| parse_datetime(&s)),
        created_at: parse_datetime(&row.get::<_, String>(10)?),
    })
}

fn player_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Player> {
    Ok(Player {
        id: row.get(0)?,
        division_id: row.get(1)?,
        name: row.get(2)?,
        played: row.get(3)?,
        sets_won: row.get(4)?,
        sets_lost: row.get(5)?,
        points: row.get(6)?,
        created_at: parse_datetime(&row.get::<_, String>(7)?),
    })
}

// Lookups shared between plain calls and open transactions.

fn fixture_by_id(conn: &Connection, id: &str) -> Result<Option<Fixture>> {
    conn.query_row(
        &format!("SELECT {FIXTURE_COLUMNS} FROM fixtures WHERE id = ?1"),
        params![id],
        fixture_from_row,
    )
    .optional()
    .map_err(Error::from)
}

fn player_by_id(conn: &Connection, id: &str) -> Result<Option<Player>> {
    conn.query_row(
        "SELECT id, division_id, name, played, sets_won, sets_lost, points, created_at
         FROM players WHERE id = ?1",
        params![id],
        player_from_row,
    )
    .optional()
    .map_err(Error::from)
}

fn save_player_stats(conn: &Connection, player: &Player) -> Result<()> {
    conn.execute(
        "UPDATE players SET played = ?1, sets_won = ?2, sets_lost = ?3, points = ?4 WHERE id = ?5",
        params![
            player.played,
            player.sets_won,
            player.sets_lost,
            player.points,
            player.id,
        ],
    )?;
    Ok(())
}

impl Store for SqliteStore {
    fn initialize(&self) -> Result<()> {
        self.conn().execute_batch(SCHEMA)?;
        Ok(())
    }

    // Division operations

    fn create_division(&self, division: &Division) -> Result<()> {
        self.conn().execute(
            "INSERT INTO divisions (id, name, created_at) VALUES (?1, ?2, ?3)",
            params![
                division.id,
                division.name,
                format_datetime(&division.created_at),
            ],
        )?;
        Ok(())
    }

    fn get_division(&self, id: &str) -> Result<Option<Division>> {
        let conn = self.conn();
        conn.query_row(
            "SELECT id, name, created_at FROM divisions WHERE id = ?1",
            params![id],
            |row| {
                Ok(Division {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    created_at: parse_datetime(&row.get::<_, String>(2)?),
                })
            },
        )
        .optional()
        .map_err(Error::from)
    }

    fn get_division_by_name(&self, name: &str) -> Result<Option<Division>> {
        let conn = self.conn();
        conn.query_row(
            "SELECT id, name, created_at FROM divisions WHERE name = ?1",
            params![name],
            |row| {
                Ok(Division {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    created_at: parse_datetime(&row.get::<_, String>(2)?),
                })
            },
        )
        .optional()
        .map_err(Error::from)
    }

    fn list_divisions(&self) -> Result<Vec<Division>> {
        let conn = self.conn();
        let mut stmt =
            conn.prepare("SELECT id, name, created_at FROM divisions ORDER BY name")?;

        let rows = stmt.query_map([], |row| {
            Ok(Division {
                id: row.get(0)?,
                name: row.get(1)?,
                created_at: parse_datetime(&row.get::<_, String>(2)?),
            })
        })?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::from)
    }

    fn delete_division(&self, id: &str) -> Result<bool> {
        // Players and fixtures cascade with the division row
        let rows = self
            .conn()
            .execute("DELETE FROM divisions WHERE id = ?1", params![id])?;
        Ok(rows > 0)
    }

    // Player operations

    fn create_player(&self, player: &Player) -> Result<()> {
        self.conn().execute(
            "INSERT INTO players (id, division_id, name, played, sets_won, sets_lost, points, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                player.id,
                player.division_id,
                player.name,
                player.played,
                player.sets_won,
                player.sets_lost,
                player.points,
                format_datetime(&player.created_at),
            ],
        )?;
        Ok(())
    }

    fn get_player(&self, id: &str) -> Result<Option<Player>> {
        player_by_id(&self.conn(), id)
    }

    fn get_player_by_name(&self, division_id: &str, name: &str) -> Result<Option<Player>> {
        let conn = self.conn();
        conn.query_row(
            "SELECT id, division_id, name, played, sets_won, sets_lost, points, created_at
             FROM players WHERE division_id = ?1 AND name = ?2",
            params![division_id, name],
            player_from_row,
        )
        .optional()
        .map_err(Error::from)
    }

    fn list_division_players(&self, division_id: &str) -> Result<Vec<Player>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(
            "SELECT id, division_id, name, played, sets_won, sets_lost, points, created_at
             FROM players WHERE division_id = ?1
             ORDER BY points DESC, (sets_won - sets_lost) DESC, name ASC",
        )?;

        let rows = stmt.query_map(params![division_id], player_from_row)?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::from)
    }

    // Fixture operations

    fn get_fixture(&self, id: &str) -> Result<Option<Fixture>> {
        fixture_by_id(&self.conn(), id)
    }

    fn list_division_fixtures(&self, division_id: &str) -> Result<Vec<FixtureWithNames>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(
            "SELECT f.id, f.division_id, f.player1_id, f.player2_id, f.played, f.set_scores,
                    f.player1_sets, f.player2_sets, f.winner_id, f.match_date, f.created_at,
                    p1.name, p2.name
             FROM fixtures f
             JOIN players p1 ON f.player1_id = p1.id
             JOIN players p2 ON f.player2_id = p2.id
             WHERE f.division_id = ?1
             ORDER BY f.rowid",
        )?;

        let rows = stmt.query_map(params![division_id], |row| {
            Ok(FixtureWithNames {
                fixture: fixture_from_row(row)?,
                player1_name: row.get(11)?,
                player2_name: row.get(12)?,
            })
        })?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::from)
    }

    fn replace_division_fixtures(&self, division_id: &str, fixtures: &[Fixture]) -> Result<()> {
        let mut conn = self.conn();
        let tx = conn.transaction()?;

        tx.execute(
            "DELETE FROM fixtures WHERE division_id = ?1",
            params![division_id],
        )?;
        tx.execute(
            "UPDATE players SET played = 0, sets_won = 0, sets_lost = 0, points = 0
             WHERE division_id = ?1",
            params![division_id],
        )?;

        for fixture in fixtures {
            tx.execute(
                "INSERT INTO fixtures (id, division_id, player1_id, player2_id, played, created_at)
                 VALUES (?1, ?2, ?3, ?4, 0, ?5)",
                params![
                    fixture.id,
                    fixture.division_id,
                    fixture.player1_id,
                    fixture.player2_id,
                    format_datetime(&fixture.created_at),
                ],
            )?;
        }

        tx.commit()?;
        Ok(())
    }

    fn record_result(&self, fixture_id: &str, outcome: &MatchOutcome) -> Result<Fixture> {
        let mut conn = self.conn();
        let tx = conn.transaction()?;

        let fixture = fixture_by_id(&tx, fixture_id)?.ok_or(Error::FixtureNotFound)?;
        let mut player1 = player_by_id(&tx, &fixture.player1_id)?.ok_or(Error::PlayerNotFound)?;
        let mut player2 = player_by_id(&tx, &fixture.player2_id)?.ok_or(Error::PlayerNotFound)?;

        // Recalculate mode: un-credit whatever the fixture currently
        // carries before crediting the corrected outcome. The stored set
        // counts are authoritative; a row without them predates set
        // scoring and reverses under the old 3-points-per-win rule.
        if fixture.played {
            if fixture.set_scores.is_some() {
                standings::reverse(
                    &mut player1,
                    &mut player2,
                    fixture.player1_sets,
                    fixture.player2_sets,
                );
            } else if fixture.winner_id.as_deref() == Some(player2.id.as_str()) {
                standings::reverse_legacy(&mut player2, &mut player1);
            } else {
                standings::reverse_legacy(&mut player1, &mut player2);
            }
        }

        standings::apply(&mut player1, &mut player2, outcome.sets_a, outcome.sets_b);

        let winner_id = if outcome.winner_is_a() {
            player1.id.clone()
        } else {
            player2.id.clone()
        };
        let now = Utc::now();

        let updated = Fixture {
            played: true,
            set_scores: Some(outcome.grid.clone()),
            player1_sets: outcome.sets_a,
            player2_sets: outcome.sets_b,
            winner_id: Some(winner_id),
            match_date: Some(now),
            ..fixture
        };

        tx.execute(
            "UPDATE fixtures SET played = 1, set_scores = ?1, player1_sets = ?2,
                    player2_sets = ?3, winner_id = ?4, match_date = ?5
             WHERE id = ?6",
            params![
                serde_json::to_string(&updated.set_scores)?,
                updated.player1_sets,
                updated.player2_sets,
                updated.winner_id,
                format_datetime(&now),
                updated.id,
            ],
        )?;
        save_player_stats(&tx, &player1)?;
        save_player_stats(&tx, &player2)?;

        tx.commit()?;
        Ok(updated)
    }

    fn close(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open_store(temp: &TempDir) -> SqliteStore {
        let store = SqliteStore::new(temp.path().join("test.db")).unwrap();
        store.initialize().unwrap();
        store
    }

    fn division(id: &str, name: &str) -> Division {
        Division {
            id: id.to_string(),
            name: name.to_string(),
            created_at: Utc::now(),
        }
    }

    fn player(id: &str, division_id: &str, name: &str) -> Player {
        Player {
            id: id.to_string(),
            division_id: division_id.to_string(),
            name: name.to_string(),
            played: 0,
            sets_won: 0,
            sets_lost: 0,
            points: 0,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_initialize_creates_tables() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);

        let conn = store.conn();
        let tables: Vec<String> = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<std::result::Result<Vec<_>, _>>()
            .unwrap();

        assert!(tables.contains(&"divisions".to_string()));
        assert!(tables.contains(&"players".to_string()));
        assert!(tables.contains(&"fixtures".to_string()));
    }

    #[test]
    fn test_division_crud() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);

        store.create_division(&division("div-1", "Monday A")).unwrap();

        let fetched = store.get_division("div-1").unwrap().unwrap();
        assert_eq!(fetched.name, "Monday A");

        let by_name = store.get_division_by_name("Monday A").unwrap().unwrap();
        assert_eq!(by_name.id, "div-1");

        let deleted = store.delete_division("div-1").unwrap();
        assert!(deleted);

        let gone = store.get_division("div-1").unwrap();
        assert!(gone.is_none());
    }

    #[test]
    fn test_standings_ordering() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);

        store.create_division(&division("div-1", "Monday A")).unwrap();

        let mut anna = player("p-anna", "div-1", "Anna");
        anna.points = 4;
        anna.sets_won = 4;
        anna.sets_lost = 2;
        let mut bree = player("p-bree", "div-1", "Bree");
        bree.points = 4;
        bree.sets_won = 4;
        bree.sets_lost = 0;
        let mut cato = player("p-cato", "div-1", "Cato");
        cato.points = 6;
        cato.sets_won = 6;
        let dane = player("p-dane", "div-1", "Dane");

        for p in [&anna, &bree, &cato, &dane] {
            store.create_player(p).unwrap();
        }

        let order: Vec<String> = store
            .list_division_players("div-1")
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(order, vec!["Cato", "Bree", "Anna", "Dane"]);
    }

    #[test]
    fn test_division_cascade_removes_players_and_fixtures() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);

        store.create_division(&division("div-1", "Monday A")).unwrap();
        store.create_player(&player("p-1", "div-1", "Anna")).unwrap();
        store.create_player(&player("p-2", "div-1", "Bree")).unwrap();

        let fixture = Fixture {
            id: "fix-1".to_string(),
            division_id: "div-1".to_string(),
            player1_id: "p-1".to_string(),
            player2_id: "p-2".to_string(),
            played: false,
            set_scores: None,
            player1_sets: 0,
            player2_sets: 0,
            winner_id: None,
            match_date: None,
            created_at: Utc::now(),
        };
        store.replace_division_fixtures("div-1", &[fixture]).unwrap();

        store.delete_division("div-1").unwrap();

        assert!(store.get_player("p-1").unwrap().is_none());
        assert!(store.get_fixture("fix-1").unwrap().is_none());
    }
}
