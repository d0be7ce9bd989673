//! Catalog routes

use axum::Router;
use domain_products::{ProductService, handlers};

use crate::state::AppState;

/// Create products router
pub fn router(state: &AppState) -> Router {
    let service = ProductService::from_shared(state.products.clone());
    handlers::router(service)
}

/// Initialize products indexes
pub async fn init_indexes(state: &AppState) -> eyre::Result<()> {
    state.products.init_indexes().await?;
    Ok(())
}
