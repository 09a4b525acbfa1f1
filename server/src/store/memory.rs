use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{StoreError, TodoStore};
use crate::limit::Limit;
use crate::model::{NewTodo, Todo};

/// In-process todo collection. Clones share the same records.
///
/// `find` returns records in insertion order.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    todos: Arc<RwLock<Vec<Todo>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, todo: NewTodo) -> Todo {
        let todo = todo.with_id(Uuid::new_v4().to_string());
        self.todos.write().await.push(todo.clone());
        todo
    }

    pub async fn insert_many<I>(&self, todos: I) -> Vec<Todo>
    where
        I: IntoIterator<Item = NewTodo>,
    {
        let inserted: Vec<Todo> = todos
            .into_iter()
            .map(|todo| todo.with_id(Uuid::new_v4().to_string()))
            .collect();
        self.todos.write().await.extend(inserted.iter().cloned());
        inserted
    }

    #[cfg(test)]
    async fn len(&self) -> usize {
        self.todos.read().await.len()
    }
}

#[async_trait]
impl TodoStore for MemoryStore {
    async fn find(&self, limit: Limit) -> Result<Vec<Todo>, StoreError> {
        let todos = self.todos.read().await;
        Ok(todos.iter().take(limit.max_items()).cloned().collect())
    }
}
