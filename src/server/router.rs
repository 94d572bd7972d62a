use std::sync::Arc;
use std::time::Instant;

use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::{
    Router,
    routing::{delete, get, post},
};

use super::{divisions, fixtures, players};
use crate::league::ScoreRules;
use crate::store::Store;

pub struct AppState {
    pub store: Arc<dyn Store>,
    /// Set plausibility thresholds; defaults reject extended scores like
    /// 8-6 on purpose.
    pub rules: ScoreRules,
}

async fn health() -> &'static str {
    "OK"
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let response = next.run(request).await;

    let latency = start.elapsed();
    let status = response.status();

    tracing::info!(
        "{} {} {} {}ms",
        method,
        uri.path(),
        status.as_u16(),
        latency.as_millis()
    );

    response
}

fn league_router() -> Router<Arc<AppState>> {
    Router::new()
        // Divisions
        .route("/divisions", get(divisions::list_divisions))
        .route("/divisions", post(divisions::create_division))
        .route("/divisions/{id}", delete(divisions::delete_division))
        // Players, listed in standings order
        .route("/divisions/{id}/players", get(players::list_players))
        .route("/divisions/{id}/players", post(players::create_player))
        // Fixtures
        .route("/divisions/{id}/fixtures", get(fixtures::list_fixtures))
        .route("/divisions/{id}/fixtures", post(fixtures::generate_fixtures))
        .route("/fixtures/{id}/result", post(fixtures::record_result))
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/v1", league_router())
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}
