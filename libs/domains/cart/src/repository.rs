use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::CartResult;
use crate::models::CartLine;

/// Persistence of the `cart` field of user documents.
///
/// Implementations never create users and never touch other user fields.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Stored lines in order, or `None` when the user does not exist
    async fn load_cart(&self, user_id: Uuid) -> CartResult<Option<Vec<CartLine>>>;

    /// Replace the stored lines; `false` when the user does not exist
    async fn save_cart(&self, user_id: Uuid, lines: &[CartLine]) -> CartResult<bool>;
}

/// In-memory user carts for development and tests
#[derive(Clone, Default)]
pub struct InMemoryCartRepository {
    carts: Arc<RwLock<HashMap<Uuid, Vec<CartLine>>>>,
}

impl InMemoryCartRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty cart for the user if none exists
    pub async fn register_user(&self, user_id: Uuid) {
        self.carts.write().await.entry(user_id).or_default();
    }
}

#[async_trait]
impl CartRepository for InMemoryCartRepository {
    async fn load_cart(&self, user_id: Uuid) -> CartResult<Option<Vec<CartLine>>> {
        Ok(self.carts.read().await.get(&user_id).cloned())
    }

    async fn save_cart(&self, user_id: Uuid, lines: &[CartLine]) -> CartResult<bool> {
        match self.carts.write().await.get_mut(&user_id) {
            Some(stored) => {
                *stored = lines.to_vec();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unknown_user_has_no_cart() {
        let repo = InMemoryCartRepository::new();
        let user = Uuid::new_v4();

        assert!(repo.load_cart(user).await.unwrap().is_none());
        assert!(!repo.save_cart(user, &[]).await.unwrap());
    }

    #[tokio::test]
    async fn test_save_replaces_lines() {
        let repo = InMemoryCartRepository::new();
        let user = Uuid::new_v4();
        repo.register_user(user).await;

        let first = vec![CartLine::new(Uuid::new_v4(), 1)];
        let second = vec![CartLine::new(Uuid::new_v4(), 2)];
        assert!(repo.save_cart(user, &first).await.unwrap());
        assert!(repo.save_cart(user, &second).await.unwrap());

        assert_eq!(repo.load_cart(user).await.unwrap(), Some(second));
    }

    #[tokio::test]
    async fn test_register_user_keeps_existing_cart() {
        let repo = InMemoryCartRepository::new();
        let user = Uuid::new_v4();
        repo.register_user(user).await;
        let lines = vec![CartLine::new(Uuid::new_v4(), 3)];
        repo.save_cart(user, &lines).await.unwrap();

        repo.register_user(user).await;
        assert_eq!(repo.load_cart(user).await.unwrap(), Some(lines));
    }
}
