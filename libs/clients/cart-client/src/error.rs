use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CartClientError {
    /// The server answered with `success: false`
    #[error("{0}")]
    Server(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Quantity must be at least 1")]
    InvalidQuantity(i32),

    #[error("Insufficient stock available")]
    InsufficientStock { available: i32, requested: i32 },

    #[error("Item not found in cart")]
    ItemNotFound(Uuid),
}

pub type CartClientResult<T> = Result<T, CartClientError>;
