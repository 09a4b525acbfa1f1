//! Stateless HTTP request builder and response parser for the todo API.
//!
//! # Design
//! `TodoClient` holds only a `base_url` and carries no mutable state between
//! calls. Listing is split into `build_list_todos`, which produces an
//! `HttpRequest`, and `parse_list_todos`, which consumes an `HttpResponse`.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{ErrorBody, Todo};

const API_TODOS: &str = "/api/todos";

/// Synchronous, stateless client for the todo listing API.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build `GET /api/todos`, with `?limit=N` when `limit` is given.
    ///
    /// The server treats `limit=0` the same as no limit.
    pub fn build_list_todos(&self, limit: Option<u32>) -> HttpRequest {
        let path = match limit {
            Some(n) => format!("{}{API_TODOS}?limit={n}", self.base_url),
            None => format!("{}{API_TODOS}", self.base_url),
        };
        HttpRequest {
            method: HttpMethod::Get,
            path,
            headers: vec![("accept".to_string(), "application/json".to_string())],
        }
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 400 {
        let message = serde_json::from_str::<ErrorBody>(&response.body)
            .map(|body| body.message)
            .unwrap_or_else(|_| response.body.clone());
        return Err(ApiError::InvalidParameter(message));
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
