use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use domain_products::ProductError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CartError {
    #[error("Product not found: {0}")]
    ProductNotFound(Uuid),

    #[error("User not found: {0}")]
    UserNotFound(Uuid),

    #[error("Item not found in cart: {0}")]
    ItemNotFound(Uuid),

    #[error("Insufficient stock: available {available}, requested {requested}")]
    InsufficientStock { available: i32, requested: i32 },

    #[error("Quantity must be at least 1 (got {0})")]
    InvalidQuantity(i32),

    #[error("Database error: {0}")]
    Database(String),
}

pub type CartResult<T> = Result<T, CartError>;

impl From<CartError> for AppError {
    fn from(err: CartError) -> Self {
        match err {
            CartError::ProductNotFound(_) => AppError::NotFound("Product not found".to_string()),
            CartError::UserNotFound(_) => AppError::NotFound("User not found".to_string()),
            CartError::ItemNotFound(_) => AppError::NotFound("Item not found in cart".to_string()),
            CartError::InsufficientStock { .. } => {
                AppError::BadRequest("Insufficient stock available".to_string())
            }
            CartError::InvalidQuantity(_) => {
                AppError::BadRequest("Quantity must be at least 1".to_string())
            }
            CartError::Database(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for CartError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<ProductError> for CartError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(id) => CartError::ProductNotFound(id),
            other => CartError::Database(other.to_string()),
        }
    }
}

impl From<mongodb::error::Error> for CartError {
    fn from(err: mongodb::error::Error) -> Self {
        CartError::Database(err.to_string())
    }
}

impl From<mongodb::bson::ser::Error> for CartError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        CartError::Database(err.to_string())
    }
}
