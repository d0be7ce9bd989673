//! Cart routes

use axum::Router;
use axum_helpers::JwtAuth;
use domain_cart::{CartService, MongoCartRepository, handlers};
use std::sync::Arc;

use crate::state::AppState;

/// Create cart router, guarded by JWT auth
pub fn router(state: &AppState) -> Router {
    let carts = Arc::new(MongoCartRepository::new(&state.db));
    let service = CartService::new(carts, state.products.clone());
    handlers::router(service, JwtAuth::new(&state.config.jwt))
}
