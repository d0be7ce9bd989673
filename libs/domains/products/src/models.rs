use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Catalog entry, stored in the `products` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    pub name: String,
    pub description: String,
    /// Unit price, serialized as a JSON/BSON number
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 999.0)]
    pub price: Decimal,
    /// Free-form category name, e.g. "Electronics"
    pub category: String,
    /// Image URL
    pub image: String,
    /// Units available; never negative
    pub stock: i32,
    /// Average review score, 0 to 5
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub num_reviews: i32,
    pub created_at: DateTime<Utc>,
}

/// New catalog entry, as handed to `ProductRepository::insert`
#[derive(Debug, Clone)]
pub struct CreateProduct {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: String,
    pub image: String,
    pub stock: i32,
    pub rating: f64,
    pub num_reviews: i32,
}

impl CreateProduct {
    /// Minimal input, used by seeding and tests
    pub fn new(name: impl Into<String>, price: Decimal, stock: i32) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            price,
            category: "General".to_string(),
            image: String::new(),
            stock,
            rating: 0.0,
            num_reviews: 0,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }
}

impl Product {
    pub fn new(input: CreateProduct) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: input.name,
            description: input.description,
            price: input.price,
            category: input.category,
            image: input.image,
            stock: input.stock,
            rating: input.rating,
            num_reviews: input.num_reviews,
            created_at: Utc::now(),
        }
    }

    /// Whether `quantity` units could be taken from current stock
    pub fn has_stock_for(&self, quantity: i32) -> bool {
        self.stock >= quantity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_serializes_with_storefront_field_names() {
        let product = Product::new(CreateProduct::new("Lamp", Decimal::new(1999, 2), 3));
        let json = serde_json::to_value(&product).unwrap();

        assert_eq!(json["_id"], product.id.to_string());
        assert_eq!(json["price"], 19.99);
        assert!(json.get("numReviews").is_some());
        assert!(json.get("createdAt").is_some());
    }

    #[test]
    fn test_product_accepts_id_alias() {
        let json = serde_json::json!({
            "id": "0191f0a4-6f1c-7c3e-8a51-1f2b3c4d5e6f",
            "name": "Mug",
            "description": "",
            "price": 12.5,
            "category": "Home",
            "image": "",
            "stock": 1,
            "createdAt": "2024-01-01T00:00:00Z"
        });
        let product: Product = serde_json::from_value(json).unwrap();
        assert_eq!(product.price, Decimal::new(125, 1));
        assert_eq!(product.num_reviews, 0);
    }

    #[test]
    fn test_has_stock_for() {
        let product = Product::new(CreateProduct::new("Chair", Decimal::new(50, 0), 3));
        assert!(product.has_stock_for(3));
        assert!(!product.has_stock_for(4));
    }
}
