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
use crate::server::AppState;
use crate::server::dto::CreatePlayerRequest;
use crate::server::response::{ApiError, ApiResponse};
use crate::server::validation::validate_player_name;
use crate::types::Player;

pub async fn list_players(
    State(state): State<Arc<AppState>>,
    Path(division_id): Path<String>,
) -> impl IntoResponse {
    let store = state.store.as_ref();

    store
        .get_division(&division_id)?
        .ok_or(Error::DivisionNotFound)?;

    let players = store.list_division_players(&division_id)?;
    Ok::<_, ApiError>(Json(ApiResponse::success(players)))
}

pub async fn create_player(
    State(state): State<Arc<AppState>>,
    Path(division_id): Path<String>,
    Json(req): Json<CreatePlayerRequest>,
) -> impl IntoResponse {
    let store = state.store.as_ref();

    validate_player_name(&req.name)?;

    store
        .get_division(&division_id)?
        .ok_or(Error::DivisionNotFound)?;

    if store.get_player_by_name(&division_id, &req.name)?.is_some() {
        return Err(ApiError::conflict("Player already exists in this division"));
    }

    let player = Player {
        id: Uuid::new_v4().to_string(),
        division_id,
        name: req.name,
        played: 0,
        sets_won: 0,
        sets_lost: 0,
        points: 0,
        created_at: Utc::now(),
    };

    store.create_player(&player)?;

    Ok::<_, ApiError>((StatusCode::CREATED, Json(ApiResponse::success(player))))
}
