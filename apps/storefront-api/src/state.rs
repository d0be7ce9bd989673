//! Application state management

use domain_products::MongoProductRepository;
use mongodb::{Client, Database};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub mongo_client: Client,
    pub db: Database,
    /// Shared by the catalog routes and the cart's stock checks
    pub products: Arc<MongoProductRepository>,
}
