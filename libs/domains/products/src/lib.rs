//! Products Domain
//!
//! The read-mostly catalog the cart resolves its lines against.
//!
//! ```text
//! Handlers   → GET /products, /products/categories, /products/{id}
//! Service    → lookups, NotFound mapping, input validation
//! Repository → trait with MongoDB and in-memory implementations
//! Models     → Product, CreateProduct
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{handlers, MongoProductRepository, ProductService};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("ecommerce");
//!
//! let service = ProductService::new(MongoProductRepository::new(&db));
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use models::{CreateProduct, Product};
pub use mongodb::MongoProductRepository;
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use service::ProductService;
