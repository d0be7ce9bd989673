//! # Axum Helpers
//!
//! Shared building blocks for the storefront HTTP services.
//!
//! ## Modules
//!
//! - **[`auth`]**: stateless JWT bearer authentication
//! - **[`server`]**: router assembly, health endpoints, graceful shutdown
//! - **[`http`]**: CORS and security header middleware
//! - **[`errors`]**: [`AppError`] rendered as the JSON envelope
//! - **[`response`]**: the `{success, message?, data?}` envelope
//! - **[`extractors`]**: UUID path and validated JSON extractors
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_production_app, create_router};
//! use core_config::server::ServerConfig;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! let router = create_router::<ApiDoc>(Router::new()).await?;
//! create_production_app(router, &ServerConfig::default(), Duration::from_secs(30), async {}).await?;
//! ```

pub mod auth;
pub mod errors;
pub mod extractors;
pub mod http;
pub mod response;
pub mod server;

pub use auth::{AuthUser, JwtAuth, JwtClaims, JwtConfig, jwt_auth_middleware};
pub use errors::AppError;
pub use extractors::{UuidPath, ValidatedJson};
pub use http::{cors_layer_from_env, security_headers};
pub use response::{ApiResponse, ErrorResponse};
pub use server::{create_production_app, create_router, health_router, shutdown_signal};
