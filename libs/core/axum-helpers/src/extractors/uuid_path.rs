use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use uuid::Uuid;

/// Single UUID path parameter; anything unparsable is a 400.
///
/// ```ignore
/// async fn remove(UuidPath(product_id): UuidPath) -> ... { }
///
/// Router::new().route("/remove/{product_id}", delete(remove));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct UuidPath(pub Uuid);

impl<S> FromRequestParts<S> for UuidPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state).await?;

        Uuid::parse_str(&raw)
            .map(UuidPath)
            .map_err(|_| AppError::BadRequest(format!("Invalid id: {raw}")))
    }
}
