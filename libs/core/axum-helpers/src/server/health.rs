use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use core_config::AppInfo;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub name: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ReadyResponse {
    pub status: &'static str,
    pub checks: BTreeMap<&'static str, &'static str>,
}

async fn health_handler(State(app): State<AppInfo>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        name: app.name,
        version: app.version,
    })
}

/// `GET /health`: liveness, always 200 while the process serves requests.
pub fn health_router(app_info: AppInfo) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(app_info)
}

/// Readiness body from named dependency checks; 503 if any failed.
pub fn ready_response(checks: &[(&'static str, bool)]) -> Response {
    let ready = checks.iter().all(|(_, ok)| *ok);
    let body = ReadyResponse {
        status: if ready { "ready" } else { "not ready" },
        checks: checks
            .iter()
            .map(|(name, ok)| (*name, if *ok { "connected" } else { "disconnected" }))
            .collect(),
    };

    let status = if ready {
        StatusCode::OK
    } else {
        tracing::warn!(checks = ?body.checks, "Readiness check failed");
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health_reports_app_info() {
        let info = AppInfo {
            name: "storefront-api",
            version: "1.2.3",
        };
        let response = health_router(info)
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["version"], "1.2.3");
    }

    #[test]
    fn test_ready_response_status() {
        assert_eq!(ready_response(&[("mongodb", true)]).status(), StatusCode::OK);
        assert_eq!(
            ready_response(&[("mongodb", false)]).status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }
}
