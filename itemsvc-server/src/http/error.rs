//! API error types with IntoResponse
//!
//! Every error renders as `{"error": "<message>"}`. Store failures carry a
//! fixed per-operation message; the underlying error is only logged.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::repos::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (400)
    Validation(ValidationError),

    /// Resource not found (404)
    NotFound { resource: &'static str, id: String },

    /// Store failure (500, logged)
    Database {
        message: &'static str,
        source: sqlx::Error,
    },

    /// Request could not be turned into a statement (500, logged)
    Internal {
        message: &'static str,
        detail: String,
    },
}

impl ApiError {
    /// Map a repository error, using `message` as the client-facing text
    /// if the store itself failed.
    ///
    /// ```ignore
    /// repo.list().await.map_err(ApiError::store("failed to fetch items"))?;
    /// ```
    pub fn store(message: &'static str) -> impl FnOnce(DbError) -> Self {
        move |e| match e {
            DbError::NotFound { resource, id } => Self::NotFound {
                resource,
                id: id.to_string(),
            },
            DbError::Sqlx(source) => Self::Database { message, source },
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Database { .. } | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            Self::Validation(e) => e.to_string(),
            Self::NotFound { resource, id } => {
                tracing::debug!(resource, id = %id, "lookup missed");
                "not found".to_owned()
            }
            Self::Database { message, source } => {
                // Log the actual error, return the fixed message
                tracing::error!(error = %source, "{}", message);
                (*message).to_owned()
            }
            Self::Internal { message, detail } => {
                tracing::error!(error = %detail, "{}", message);
                (*message).to_owned()
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}
