//! HTTP middleware: CORS and security headers.
//!
//! ```ignore
//! let app = Router::new()
//!     .layer(axum::middleware::from_fn(security_headers))
//!     .layer(cors_layer_from_env()?);
//! ```

pub mod cors;
pub mod security;

pub use cors::{DEFAULT_ALLOWED_ORIGIN, cors_layer, cors_layer_from_env};
pub use security::security_headers;
