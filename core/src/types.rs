//! Wire types of the todo listing API.
//!
//! # Design
//! Defined independently from the server crate so the client carries no
//! server dependencies. The integration test against a live server catches
//! schema drift between the two.

use serde::{Deserialize, Serialize};

/// A single todo item returned by `GET /api/todos`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: String,
    pub owner: String,
    pub status: bool,
    pub category: String,
    pub body: String,
}

/// Body the server sends with every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
