use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use uuid::Uuid;

use crate::error::Error;
use crate::league::{schedule, validate_grid};
use crate::server::AppState;
use crate::server::dto::{RecordResultRequest, RecordResultResponse};
use crate::server::response::{ApiError, ApiResponse};
use crate::types::Fixture;

pub async fn list_fixtures(
    State(state): State<Arc<AppState>>,
    Path(division_id): Path<String>,
) -> impl IntoResponse {
    let store = state.store.as_ref();

    store
        .get_division(&division_id)?
        .ok_or(Error::DivisionNotFound)?;

    let fixtures = store.list_division_fixtures(&division_id)?;
    Ok::<_, ApiError>(Json(ApiResponse::success(fixtures)))
}

/// Full-replace generation: every existing fixture in the division is
/// dropped and every player's stats reset, in the same transaction that
/// inserts the new pairing set.
pub async fn generate_fixtures(
    State(state): State<Arc<AppState>>,
    Path(division_id): Path<String>,
) -> impl IntoResponse {
    let store = state.store.as_ref();

    store
        .get_division(&division_id)?
        .ok_or(Error::DivisionNotFound)?;

    let players = store.list_division_players(&division_id)?;
    let pairs = schedule::pairings(players.len())?;

    let now = Utc::now();
    let fixtures: Vec<Fixture> = pairs
        .into_iter()
        .map(|(i, j)| Fixture {
            id: Uuid::new_v4().to_string(),
            division_id: division_id.clone(),
            player1_id: players[i].id.clone(),
            player2_id: players[j].id.clone(),
            played: false,
            set_scores: None,
            player1_sets: 0,
            player2_sets: 0,
            winner_id: None,
            match_date: None,
            created_at: now,
        })
        .collect();

    store.replace_division_fixtures(&division_id, &fixtures)?;

    let fixtures = store.list_division_fixtures(&division_id)?;
    Ok::<_, ApiError>((StatusCode::CREATED, Json(ApiResponse::success(fixtures))))
}

pub async fn record_result(
    State(state): State<Arc<AppState>>,
    Path(fixture_id): Path<String>,
    Json(req): Json<RecordResultRequest>,
) -> impl IntoResponse {
    let store = state.store.as_ref();

    store
        .get_fixture(&fixture_id)?
        .ok_or(Error::FixtureNotFound)?;

    // A grid that fails validation never reaches the store
    let outcome = validate_grid(&req.set_scores, &state.rules)?;

    store.record_result(&fixture_id, &outcome)?;

    Ok::<_, ApiError>(Json(ApiResponse::success(RecordResultResponse {
        player1_sets: outcome.sets_a,
        player2_sets: outcome.sets_b,
        set_scores: outcome.grid,
    })))
}
