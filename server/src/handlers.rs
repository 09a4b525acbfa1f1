use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use tracing::debug;

use crate::error::AppError;
use crate::limit::{parse_limit, ValidationError, LIMIT_PARAM};
use crate::model::Todo;
use crate::AppState;

/// Decoded query string of `GET /api/todos`, in request order.
///
/// Taken as raw pairs so repeated or malformed `limit` values reach
/// [`parse_limit`] instead of failing in the extractor.
pub type QueryPairs = Vec<(String, String)>;

/// First value of `name`; later repeats are ignored.
pub fn first_param<'a>(pairs: &'a [(String, String)], name: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

pub async fn list_todos(
    State(state): State<AppState>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<Json<Vec<Todo>>, AppError> {
    let Query(pairs) =
        query.map_err(|rejection| ValidationError::MalformedQuery(rejection.body_text()))?;
    let limit = parse_limit(first_param(&pairs, LIMIT_PARAM))?;
    let todos = state.store().find(limit).await?;
    debug!(?limit, count = todos.len(), "Listed todos.");
    Ok(Json(todos))
}
