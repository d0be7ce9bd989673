use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::not_found;
use crate::http::{cors_layer_from_env, security_headers};
use axum::{Router, middleware};
use core_config::server::ServerConfig;
use std::future::Future;
use std::io;
use std::time::Duration;
use tower_http::compression::CompressionLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info, warn};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};
use utoipa_swagger_ui::SwaggerUi;

/// Wrap the API routes with docs and the cross-cutting layers.
///
/// - `apis` is nested under `/api` (state already applied)
/// - OpenAPI JSON at `/api-docs/openapi.json`, Swagger UI at `/swagger-ui`,
///   Scalar at `/scalar`
/// - Unmatched paths answer a 404 envelope
/// - Tracing, security headers, CORS (`CORS_ALLOWED_ORIGIN`) and compression
///
/// Fails only when `CORS_ALLOWED_ORIGIN` is malformed.
pub async fn create_router<T>(apis: Router) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .merge(Scalar::with_url("/scalar", T::openapi()))
        .nest("/api", apis)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(cors_layer_from_env()?)
        .layer(CompressionLayer::new());

    Ok(router)
}

/// Serve `router` until SIGINT/SIGTERM, then run `cleanup` within `shutdown_timeout`.
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let coordinator = ShutdownCoordinator::new();
    let signal_watch = coordinator.clone();
    let cleanup_watch = coordinator.clone();

    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!(address = %listener.local_addr()?, "Server listening");

    tokio::spawn(async move { signal_watch.wait_for_signal().await });

    let cleanup_handle = tokio::spawn(async move {
        cleanup_watch.wait_for_shutdown().await;
        info!(?shutdown_timeout, "Running cleanup");
        if tokio::time::timeout(shutdown_timeout, cleanup).await.is_err() {
            warn!(?shutdown_timeout, "Cleanup timed out, forcing shutdown");
        }
    });

    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move { coordinator.wait_for_shutdown().await })
        .await
        .inspect_err(|e| tracing::error!(error = %e, "Server error"));

    if cleanup_handle.await.is_err() {
        warn!("Cleanup task panicked");
    }

    serve_result
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
        routing::get,
    };
    use tower::ServiceExt;

    #[derive(OpenApi)]
    #[openapi(info(title = "test"))]
    struct TestDoc;

    async fn router() -> Router {
        let apis = Router::new().route("/ping", get(|| async { "pong" }));
        create_router::<TestDoc>(apis).await.unwrap()
    }

    #[tokio::test]
    async fn test_api_routes_are_nested_with_security_headers() {
        let response = router()
            .await
            .oneshot(Request::get("/api/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::X_FRAME_OPTIONS], "DENY");
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let response = router()
            .await
            .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_openapi_json_served() {
        let response = router()
            .await
            .oneshot(
                Request::get("/api-docs/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
