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
use crate::server::dto::CreateDivisionRequest;
use crate::server::response::{ApiError, ApiResponse};
use crate::server::validation::validate_division_name;
use crate::types::Division;

pub async fn list_divisions(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let divisions = state.store.list_divisions()?;
    Ok::<_, ApiError>(Json(ApiResponse::success(divisions)))
}

pub async fn create_division(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateDivisionRequest>,
) -> impl IntoResponse {
    let store = state.store.as_ref();

    validate_division_name(&req.name)?;

    if store.get_division_by_name(&req.name)?.is_some() {
        return Err(ApiError::conflict("Division already exists"));
    }

    let division = Division {
        id: Uuid::new_v4().to_string(),
        name: req.name,
        created_at: Utc::now(),
    };

    store.create_division(&division)?;

    Ok::<_, ApiError>((StatusCode::CREATED, Json(ApiResponse::success(division))))
}

pub async fn delete_division(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    // Players and fixtures cascade with the division
    let deleted = state.store.delete_division(&id)?;
    if !deleted {
        return Err(Error::DivisionNotFound.into());
    }
    Ok::<_, ApiError>(StatusCode::NO_CONTENT)
}
