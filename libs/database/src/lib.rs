//! Database connectors and utilities for the storefront services.
//!
//! # Features
//!
//! - `mongodb` (default) - MongoDB client setup, health checks
//! - `config` - `core_config::FromEnv` support for connection settings
//!
//! # Example
//!
//! ```ignore
//! use database::mongodb::{MongoConfig, connect_from_config_with_retry};
//!
//! let config = MongoConfig::with_database("mongodb://localhost:27017", "ecommerce");
//! let client = connect_from_config_with_retry(&config, None).await?;
//! let db = client.database(config.database());
//! ```

pub mod common;

#[cfg(feature = "mongodb")]
pub mod mongodb;

pub use common::{DatabaseError, DatabaseResult};
