use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Division {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// A team entered in a division, carrying its cumulative standings.
///
/// The stat fields are mutated only by the standings ledger inside store
/// transactions; they are never recomputed by re-summing fixtures on read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub division_id: String,
    pub name: String,
    pub played: u32,
    pub sets_won: u32,
    pub sets_lost: u32,
    pub points: u32,
    pub created_at: DateTime<Utc>,
}

/// One scheduled pairing in a division's round robin.
///
/// `played = false` means the result columns are empty. `played = true`
/// with `set_scores = None` marks a legacy row recorded before set
/// scoring existed; only the reversal fallback reads it that way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fixture {
    pub id: String,
    pub division_id: String,
    pub player1_id: String,
    pub player2_id: String,
    pub played: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_scores: Option<Vec<(u32, u32)>>,
    pub player1_sets: u32,
    pub player2_sets: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureWithNames {
    #[serde(flatten)]
    pub fixture: Fixture,
    pub player1_name: String,
    pub player2_name: String,
}
