use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::limit::ValidationError;
use crate::store::StoreError;

/// Failure of an API request.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// JSON body of every error `list_todos` returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match self {
            AppError::Validation(e) => {
                tracing::debug!(parameter = e.parameter(), error = ?e, "Rejected query parameter.");
                (
                    StatusCode::BAD_REQUEST,
                    ApiErrorBody {
                        code: "INVALID_PARAMETER".to_string(),
                        message: e.to_string(),
                    },
                )
            }
            AppError::Store(e) => {
                tracing::error!(error = %e, "Todo store query failed.");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiErrorBody {
                        code: "INTERNAL_ERROR".to_string(),
                        message: "An internal server error occurred.".to_string(),
                    },
                )
            }
        };
        (status, Json(body)).into_response()
    }
}
