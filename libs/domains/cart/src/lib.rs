//! Cart Domain
//!
//! Server side of the shopping cart. A cart is the `cart` array of a user
//! document; every request loads it, mutates it and saves it back.
//!
//! ```text
//! Handlers   → /cart routes behind JWT auth, envelope responses
//! Service    → validation, stock checks, merge/set/remove, resolution
//! Repository → load/save of a user's lines (MongoDB or in-memory)
//! Models     → CartLine, Cart, CartItem, request DTOs
//! ```
//!
//! There is no locking between load and save: two concurrent requests for
//! the same user can overwrite each other, and the last save wins.
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use axum_helpers::{JwtAuth, JwtConfig};
//! use domain_cart::{handlers, CartService, MongoCartRepository};
//! use domain_products::MongoProductRepository;
//!
//! # async fn example(db: mongodb::Database) {
//! let service = CartService::new(
//!     Arc::new(MongoCartRepository::new(&db)),
//!     Arc::new(MongoProductRepository::new(&db)),
//! );
//! let auth = JwtAuth::new(&JwtConfig::new("a-secret-that-is-at-least-32-characters"));
//! let router = handlers::router(service, auth);
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use error::{CartError, CartResult};
pub use handlers::ApiDoc;
pub use models::{AddToCartRequest, Cart, CartItem, CartLine, UpdateCartRequest};
pub use mongodb::MongoCartRepository;
pub use repository::{CartRepository, InMemoryCartRepository};
pub use service::CartService;
