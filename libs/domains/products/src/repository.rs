use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product};

/// Catalog persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn insert(&self, input: CreateProduct) -> ProductResult<Product>;

    async fn get_by_id(&self, id: Uuid) -> ProductResult<Option<Product>>;

    /// Products for the given ids, in no particular order; unknown ids are skipped
    async fn get_by_ids(&self, ids: &[Uuid]) -> ProductResult<Vec<Product>>;

    /// Every product, newest first
    async fn list(&self) -> ProductResult<Vec<Product>>;

    /// Distinct category names, sorted
    async fn categories(&self) -> ProductResult<Vec<String>>;
}

/// In-memory catalog for development and tests
#[derive(Clone, Default)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<HashMap<Uuid, Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a fully built product as is, keeping its id.
    pub async fn put(&self, product: Product) {
        self.products.write().await.insert(product.id, product);
    }

    /// Drop a product, e.g. to simulate catalog removal
    pub async fn remove(&self, id: Uuid) -> bool {
        self.products.write().await.remove(&id).is_some()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn insert(&self, input: CreateProduct) -> ProductResult<Product> {
        let product = Product::new(input);
        self.put(product.clone()).await;
        Ok(product)
    }

    async fn get_by_id(&self, id: Uuid) -> ProductResult<Option<Product>> {
        Ok(self.products.read().await.get(&id).cloned())
    }

    async fn get_by_ids(&self, ids: &[Uuid]) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;
        Ok(ids.iter().filter_map(|id| products.get(id).cloned()).collect())
    }

    async fn list(&self) -> ProductResult<Vec<Product>> {
        let mut all: Vec<Product> = self.products.read().await.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(all)
    }

    async fn categories(&self) -> ProductResult<Vec<String>> {
        let mut names: Vec<String> = self
            .products
            .read()
            .await
            .values()
            .map(|p| p.category.clone())
            .collect();
        names.sort();
        names.dedup();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn test_in_memory_get_by_ids_skips_unknown() {
        let repo = InMemoryProductRepository::new();
        let a = repo
            .insert(CreateProduct::new("A", Decimal::TEN, 1))
            .await
            .unwrap();

        let found = repo.get_by_ids(&[a.id, Uuid::new_v4()]).await.unwrap();
        assert_eq!(found, vec![a]);
    }

    #[tokio::test]
    async fn test_in_memory_list_newest_first() {
        let repo = InMemoryProductRepository::new();
        let older = repo
            .insert(CreateProduct::new("Old", Decimal::ONE, 1))
            .await
            .unwrap();
        let mut newer = Product::new(CreateProduct::new("New", Decimal::ONE, 1));
        newer.created_at = older.created_at + chrono::Duration::seconds(5);
        repo.put(newer.clone()).await;

        let listed = repo.list().await.unwrap();
        assert_eq!(listed[0].id, newer.id);
        assert_eq!(listed[1].id, older.id);
    }

    #[tokio::test]
    async fn test_in_memory_categories_sorted_distinct() {
        let repo = InMemoryProductRepository::new();
        for (name, category) in [("a", "Sports"), ("b", "Electronics"), ("c", "Sports")] {
            repo.insert(CreateProduct::new(name, Decimal::ONE, 1).with_category(category))
                .await
                .unwrap();
        }

        assert_eq!(repo.categories().await.unwrap(), vec!["Electronics", "Sports"]);
    }

    #[tokio::test]
    async fn test_in_memory_remove() {
        let repo = InMemoryProductRepository::new();
        let p = repo
            .insert(CreateProduct::new("P", Decimal::ONE, 1))
            .await
            .unwrap();

        assert!(repo.remove(p.id).await);
        assert!(repo.get_by_id(p.id).await.unwrap().is_none());
        assert!(!repo.remove(p.id).await);
    }
}
