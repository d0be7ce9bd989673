use super::jwt::{JwtAuth, JwtClaims};
use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header, request::Parts},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

/// Authenticated caller, inserted by [`jwt_auth_middleware`].
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub claims: JwtClaims,
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Rejects requests without a valid `Authorization: Bearer` token.
///
/// On success the request carries an [`AuthUser`] extension.
pub async fn jwt_auth_middleware(
    State(auth): State<JwtAuth>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(token) = bearer_token(request.headers()) else {
        tracing::debug!("No bearer token on request");
        return Err(AppError::Unauthorized("No token provided".to_string()));
    };

    let claims = auth.verify_token(token).map_err(|e| {
        tracing::debug!(error = %e, "JWT verification failed");
        AppError::Unauthorized("Invalid token".to_string())
    })?;

    let user_id = Uuid::parse_str(&claims.sub).map_err(|_| {
        tracing::debug!(sub = %claims.sub, "JWT subject is not a user id");
        AppError::Unauthorized("Invalid token".to_string())
    })?;

    request.extensions_mut().insert(AuthUser { user_id, claims });
    Ok(next.run(request).await)
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or_else(|| AppError::Unauthorized("Not authenticated".to_string()))
    }
}
