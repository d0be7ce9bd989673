//! API routes module

pub mod cart;
pub mod health;
pub mod products;

use axum::Router;

use crate::state::AppState;

/// Create all API routes, nested under `/api` by the server
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/products", products::router(state))
        .nest("/cart", cart::router(state))
}

/// Initialize database indexes
pub async fn init_indexes(state: &AppState) -> eyre::Result<()> {
    products::init_indexes(state).await
}
