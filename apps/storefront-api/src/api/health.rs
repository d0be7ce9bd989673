//! Readiness endpoint

use axum::{Router, extract::State, response::Response, routing::get};
use axum_helpers::server::ready_response;
use database::mongodb::check_health;

use crate::state::AppState;

async fn ready(State(state): State<AppState>) -> Response {
    let mongodb = check_health(&state.mongo_client, state.config.mongodb.database()).await;
    ready_response(&[("mongodb", mongodb)])
}

/// `GET /ready`: 503 while MongoDB does not answer a ping
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(ready))
        .with_state(state)
}
