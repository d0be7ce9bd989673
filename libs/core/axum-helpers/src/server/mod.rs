//! Router assembly, health endpoints and graceful shutdown.
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router, health_router};
//! use core_config::app_info;
//!
//! let app = create_router::<ApiDoc>(api_routes)
//!     .await?
//!     .merge(health_router(app_info!()));
//!
//! create_production_app(app, &config, Duration::from_secs(30), async {}).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{create_production_app, create_router};
pub use health::{HealthResponse, ReadyResponse, health_router, ready_response};
pub use shutdown::{ShutdownCoordinator, shutdown_signal};
