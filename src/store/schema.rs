pub const SCHEMA: &str = r#"
-- Divisions are independent round-robin competitions
CREATE TABLE IF NOT EXISTS divisions (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL UNIQUE,
    created_at TEXT DEFAULT (datetime('now'))
);

-- Players (teams) with their cumulative standings; stats are written
-- only by the ledger inside store transactions
CREATE TABLE IF NOT EXISTS players (
    id TEXT PRIMARY KEY,
    division_id TEXT NOT NULL REFERENCES divisions(id) ON DELETE CASCADE,
    name TEXT NOT NULL,
    played INTEGER NOT NULL DEFAULT 0,
    sets_won INTEGER NOT NULL DEFAULT 0,
    sets_lost INTEGER NOT NULL DEFAULT 0,
    points INTEGER NOT NULL DEFAULT 0,
    created_at TEXT DEFAULT (datetime('now')),

    UNIQUE(division_id, name)
);

-- Fixtures: one row per unordered pair per generation cycle
CREATE TABLE IF NOT EXISTS fixtures (
    id TEXT PRIMARY KEY,
    division_id TEXT NOT NULL REFERENCES divisions(id) ON DELETE CASCADE,
    player1_id TEXT NOT NULL REFERENCES players(id) ON DELETE CASCADE,
    player2_id TEXT NOT NULL REFERENCES players(id) ON DELETE CASCADE,

    -- Result payload; empty until the fixture is played.
    -- set_scores is JSON [[gamesA, gamesB], ...]; NULL with played = 1
    -- marks a legacy row from before set scoring existed.
    played INTEGER NOT NULL DEFAULT 0,
    set_scores TEXT,
    player1_sets INTEGER NOT NULL DEFAULT 0,
    player2_sets INTEGER NOT NULL DEFAULT 0,
    winner_id TEXT REFERENCES players(id),
    match_date TEXT,
    created_at TEXT DEFAULT (datetime('now')),

    UNIQUE(division_id, player1_id, player2_id)
);

-- Create indexes
CREATE INDEX IF NOT EXISTS idx_players_division ON players(division_id);
CREATE INDEX IF NOT EXISTS idx_fixtures_division ON fixtures(division_id);
CREATE INDEX IF NOT EXISTS idx_fixtures_player1 ON fixtures(player1_id);
CREATE INDEX IF NOT EXISTS idx_fixtures_player2 ON fixtures(player2_id);
"#;
