use serde::{Deserialize, Serialize};

/// A todo record as returned by `GET /api/todos`.
///
/// `id` is assigned by the store on insertion and is opaque to callers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub owner: String,
    pub status: bool,
    pub category: String,
    pub body: String,
}

/// Todo content without an identifier, used to seed a store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTodo {
    pub owner: String,
    #[serde(default)]
    pub status: bool,
    pub category: String,
    pub body: String,
}

impl NewTodo {
    pub fn with_id(self, id: String) -> Todo {
        Todo {
            id,
            owner: self.owner,
            status: self.status,
            category: self.category,
            body: self.body,
        }
    }
}
