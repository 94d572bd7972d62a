use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreateDivisionRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct CreatePlayerRequest {
    pub name: String,
}

/// Raw set grid as submitted; entries are validated, not trusted.
#[derive(Debug, Deserialize)]
pub struct RecordResultRequest {
    pub set_scores: Vec<Vec<i64>>,
}

#[derive(Debug, Serialize)]
pub struct RecordResultResponse {
    pub player1_sets: u32,
    pub player2_sets: u32,
    pub set_scores: Vec<(u32, u32)>,
}
