//! MongoDB implementation of ProductRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures_util::TryStreamExt;
use mongodb::{
    Collection, Database, IndexModel,
    bson::{self, Bson, doc, to_bson},
    options::{FindOptions, IndexOptions},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::instrument;
use uuid::Uuid;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product};
use crate::repository::ProductRepository;

pub const COLLECTION: &str = "products";

/// Stored shape of a [`Product`]; `createdAt` is a BSON date so it sorts
/// chronologically.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductDocument {
    #[serde(rename = "_id")]
    id: Uuid,
    name: String,
    description: String,
    #[serde(with = "rust_decimal::serde::float")]
    price: Decimal,
    category: String,
    image: String,
    stock: i32,
    #[serde(default)]
    rating: f64,
    #[serde(default)]
    num_reviews: i32,
    created_at: bson::DateTime,
}

impl From<&Product> for ProductDocument {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            category: product.category.clone(),
            image: product.image.clone(),
            stock: product.stock,
            rating: product.rating,
            num_reviews: product.num_reviews,
            created_at: bson::DateTime::from_millis(product.created_at.timestamp_millis()),
        }
    }
}

impl From<ProductDocument> for Product {
    fn from(doc: ProductDocument) -> Self {
        Self {
            id: doc.id,
            name: doc.name,
            description: doc.description,
            price: doc.price,
            category: doc.category,
            image: doc.image,
            stock: doc.stock,
            rating: doc.rating,
            num_reviews: doc.num_reviews,
            created_at: DateTime::<Utc>::from_timestamp_millis(doc.created_at.timestamp_millis())
                .unwrap_or(DateTime::<Utc>::MIN_UTC),
        }
    }
}

pub struct MongoProductRepository {
    collection: Collection<ProductDocument>,
}

impl MongoProductRepository {
    pub fn new(db: &Database) -> Self {
        Self::with_collection(db, COLLECTION)
    }

    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        Self {
            collection: db.collection::<ProductDocument>(collection_name),
        }
    }

    pub async fn init_indexes(&self) -> ProductResult<()> {
        let indexes = vec![
            IndexModel::builder()
                .keys(doc! { "createdAt": -1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_created_at".to_string())
                        .build(),
                )
                .build(),
            IndexModel::builder()
                .keys(doc! { "category": 1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_category".to_string())
                        .build(),
                )
                .build(),
        ];

        self.collection.create_indexes(indexes).await?;
        tracing::info!("Product indexes created successfully");
        Ok(())
    }
}

fn id_bson(id: &Uuid) -> ProductResult<Bson> {
    Ok(to_bson(id)?)
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    async fn insert(&self, input: CreateProduct) -> ProductResult<Product> {
        let product = Product::new(input);
        self.collection
            .insert_one(ProductDocument::from(&product))
            .await?;

        tracing::info!(product_id = %product.id, "Product created");
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> ProductResult<Option<Product>> {
        let product = self
            .collection
            .find_one(doc! { "_id": id_bson(&id)? })
            .await?;
        Ok(product.map(Product::from))
    }

    #[instrument(skip(self, ids), fields(count = ids.len()))]
    async fn get_by_ids(&self, ids: &[Uuid]) -> ProductResult<Vec<Product>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids = ids.iter().map(id_bson).collect::<ProductResult<Vec<_>>>()?;
        let cursor = self.collection.find(doc! { "_id": { "$in": ids } }).await?;
        let docs: Vec<ProductDocument> = cursor.try_collect().await?;
        Ok(docs.into_iter().map(Product::from).collect())
    }

    #[instrument(skip(self))]
    async fn list(&self) -> ProductResult<Vec<Product>> {
        let options = FindOptions::builder()
            .sort(doc! { "createdAt": -1 })
            .build();

        let cursor = self.collection.find(doc! {}).with_options(options).await?;
        let docs: Vec<ProductDocument> = cursor.try_collect().await?;
        Ok(docs.into_iter().map(Product::from).collect())
    }

    #[instrument(skip(self))]
    async fn categories(&self) -> ProductResult<Vec<String>> {
        let values = self.collection.distinct("category", doc! {}).await?;

        let mut names: Vec<String> = values
            .into_iter()
            .filter_map(|v| match v {
                Bson::String(s) => Some(s),
                _ => None,
            })
            .collect();
        names.sort();
        Ok(names)
    }
}
