use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, Bson};
use mongodb::{Client, Collection};
use serde::Deserialize;

use super::{StoreError, TodoStore};
use crate::limit::Limit;
use crate::model::Todo;

pub const TODO_COLLECTION: &str = "todos";

/// A todo as stored in MongoDB. `_id` is usually an `ObjectId`, but seed
/// scripts sometimes insert plain strings.
#[derive(Debug, Deserialize)]
struct TodoDocument {
    #[serde(rename = "_id")]
    id: Bson,
    owner: String,
    status: bool,
    category: String,
    body: String,
}

impl TodoDocument {
    fn into_todo(self) -> Result<Todo, StoreError> {
        let id = match self.id {
            Bson::ObjectId(oid) => oid.to_hex(),
            Bson::String(s) => s,
            other => {
                return Err(StoreError::InvalidDocument(format!(
                    "unsupported _id type {:?}",
                    other.element_type()
                )))
            }
        };
        Ok(Todo {
            id,
            owner: self.owner,
            status: self.status,
            category: self.category,
            body: self.body,
        })
    }
}

/// `todos` collection in a MongoDB database.
///
/// The driver connects lazily and pools connections, so one `MongoStore`
/// serves every request.
#[derive(Clone, Debug)]
pub struct MongoStore {
    collection: Collection<TodoDocument>,
}

impl MongoStore {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(uri).await?;
        Ok(Self {
            collection: client.database(database).collection(TODO_COLLECTION),
        })
    }
}

#[async_trait]
impl TodoStore for MongoStore {
    async fn find(&self, limit: Limit) -> Result<Vec<Todo>, StoreError> {
        let documents: Vec<TodoDocument> = self
            .collection
            .find(doc! {})
            .limit(limit.as_store_limit())
            .await?
            .try_collect()
            .await?;

        documents.into_iter().map(TodoDocument::into_todo).collect()
    }
}
