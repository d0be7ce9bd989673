//! MongoDB implementation of CartRepository

use async_trait::async_trait;
use mongodb::{
    Collection, Database,
    bson::{doc, to_bson},
    options::FindOneOptions,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use uuid::Uuid;

use crate::error::CartResult;
use crate::models::CartLine;
use crate::repository::CartRepository;

pub const COLLECTION: &str = "users";

/// Projection of a user document onto its cart
#[derive(Debug, Clone, Serialize, Deserialize)]
struct UserCart {
    #[serde(rename = "_id")]
    id: Uuid,
    #[serde(default)]
    cart: Vec<CartLine>,
}

pub struct MongoCartRepository {
    collection: Collection<UserCart>,
}

impl MongoCartRepository {
    pub fn new(db: &Database) -> Self {
        Self::with_collection(db, COLLECTION)
    }

    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        Self {
            collection: db.collection::<UserCart>(collection_name),
        }
    }
}

#[async_trait]
impl CartRepository for MongoCartRepository {
    #[instrument(skip(self))]
    async fn load_cart(&self, user_id: Uuid) -> CartResult<Option<Vec<CartLine>>> {
        let options = FindOneOptions::builder()
            .projection(doc! { "cart": 1 })
            .build();

        let user = self
            .collection
            .find_one(doc! { "_id": to_bson(&user_id)? })
            .with_options(options)
            .await?;

        Ok(user.map(|u| u.cart))
    }

    #[instrument(skip(self, lines), fields(lines = lines.len()))]
    async fn save_cart(&self, user_id: Uuid, lines: &[CartLine]) -> CartResult<bool> {
        let result = self
            .collection
            .update_one(
                doc! { "_id": to_bson(&user_id)? },
                doc! { "$set": { "cart": to_bson(lines)? } },
            )
            .await?;

        Ok(result.matched_count > 0)
    }
}
