//! Durable key-value storage for the local cart

use async_trait::async_trait;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::CartClientResult;

/// Key the cart is stored under
pub const CART_KEY: &str = "cart";

#[async_trait]
pub trait CartStorage: Send + Sync {
    /// Stored value, or `None` if nothing was written under `key`
    async fn get(&self, key: &str) -> CartClientResult<Option<String>>;

    async fn set(&self, key: &str, value: &str) -> CartClientResult<()>;
}

/// One JSON file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileCartStorage {
    dir: PathBuf,
}

impl FileCartStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

#[async_trait]
impl CartStorage for FileCartStorage {
    async fn get(&self, key: &str) -> CartClientResult<Option<String>> {
        match tokio::fs::read_to_string(self.path_for(key)).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: &str) -> CartClientResult<()> {
        tokio::fs::create_dir_all(&self.dir).await?;
        tokio::fs::write(self.path_for(key), value).await?;
        Ok(())
    }
}

/// In-memory storage; clones share the same entries
#[derive(Debug, Clone, Default)]
pub struct MemoryCartStorage {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryCartStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CartStorage for MemoryCartStorage {
    async fn get(&self, key: &str) -> CartClientResult<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> CartClientResult<()> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
