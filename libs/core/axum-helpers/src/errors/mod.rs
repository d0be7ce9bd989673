pub mod handlers;

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use validator::ValidationErrors;

use crate::response::ErrorResponse;

/// Message sent for every 5xx; the real cause is only logged.
pub const INTERNAL_ERROR_MESSAGE: &str = "An internal server error occurred";
pub const VALIDATION_FAILED_MESSAGE: &str = "Request validation failed";

/// Application error rendered as `{ "success": false, "message": ... }`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Path extraction error: {0}")]
    PathRejection(#[from] PathRejection),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),

    #[error("Service Unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::JsonExtractorRejection(_)
            | AppError::PathRejection(_)
            | AppError::ValidationError(_)
            | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Message exposed to clients
    fn public_message(&self) -> String {
        match self {
            AppError::JsonExtractorRejection(e) => e.body_text(),
            AppError::PathRejection(e) => e.body_text(),
            AppError::ValidationError(e) => first_validation_message(e)
                .unwrap_or_else(|| VALIDATION_FAILED_MESSAGE.to_string()),
            AppError::BadRequest(msg)
            | AppError::Unauthorized(msg)
            | AppError::NotFound(msg)
            | AppError::ServiceUnavailable(msg) => msg.clone(),
            AppError::InternalServerError(_) => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }
}

/// First custom message attached to a field rule, if any.
fn first_validation_message(errors: &ValidationErrors) -> Option<String> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));
    fields
        .into_iter()
        .flat_map(|(_, errs)| errs.iter())
        .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "Request failed");
        } else {
            tracing::info!(status = status.as_u16(), error = %self, "Request rejected");
        }

        (status, Json(ErrorResponse::new(self.public_message()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use validator::Validate;

    async fn render(error: AppError) -> (StatusCode, Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[derive(Validate)]
    struct Quantity {
        #[validate(range(min = 1, message = "Quantity must be at least 1"))]
        quantity: i32,
    }

    #[tokio::test]
    async fn test_not_found_envelope() {
        let (status, body) = render(AppError::NotFound("Product not found".into())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"success": false, "message": "Product not found"}));
    }

    #[tokio::test]
    async fn test_internal_error_hides_detail() {
        let (status, body) =
            render(AppError::InternalServerError("connection reset by peer".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], INTERNAL_ERROR_MESSAGE);
        assert!(!body.to_string().contains("connection reset"));
    }

    #[tokio::test]
    async fn test_validation_error_uses_rule_message() {
        let errors = Quantity { quantity: 0 }.validate().unwrap_err();
        let (status, body) = render(AppError::from(errors)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Quantity must be at least 1");
    }

    #[tokio::test]
    async fn test_unauthorized_status() {
        let (status, body) = render(AppError::Unauthorized("No token provided".into())).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["success"], false);
    }
}
