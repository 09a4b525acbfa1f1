//! Document store capability and its adapters.
//!
//! # Design
//! The handler only needs "run a find with an empty filter and a limit", so
//! that is the whole of [`TodoStore`]. The store is injected into the router
//! as `Arc<dyn TodoStore>`; tests swap in [`MemoryStore`] or a stub.

mod memory;
mod mongo;
mod seed;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::info;

use crate::config::{Config, StoreKind};
use crate::limit::Limit;
use crate::model::Todo;

pub use memory::MemoryStore;
pub use mongo::{MongoStore, TODO_COLLECTION};
pub use seed::{load_seed, SeedError};

/// Read access to the todo collection.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Every todo, in store order, truncated to `limit`.
    async fn find(&self, limit: Limit) -> Result<Vec<Todo>, StoreError>;
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store backend error: {0}")]
    Backend(String),

    #[error("invalid document: {0}")]
    InvalidDocument(String),

    #[error(transparent)]
    Seed(#[from] SeedError),
}

impl From<mongodb::error::Error> for StoreError {
    fn from(e: mongodb::error::Error) -> Self {
        StoreError::Backend(e.to_string())
    }
}

/// Build the store selected by `cfg`, seeding the memory store when a seed
/// file is configured.
pub async fn open(cfg: &Config) -> Result<Arc<dyn TodoStore>, StoreError> {
    match cfg.store {
        StoreKind::Memory => {
            let store = MemoryStore::new();
            if let Some(path) = &cfg.seed_path {
                let seed = load_seed(path)?;
                let inserted = store.insert_many(seed).await;
                info!(path = %path.display(), count = inserted.len(), "Seeded memory store.");
            }
            Ok(Arc::new(store))
        }
        StoreKind::Mongo => {
            let store = MongoStore::connect(&cfg.mongo_uri, &cfg.mongo_db).await?;
            info!(database = %cfg.mongo_db, collection = TODO_COLLECTION, "Using MongoDB store.");
            Ok(Arc::new(store))
        }
    }
}
