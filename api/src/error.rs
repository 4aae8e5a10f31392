//! Error types for the lookup service

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuranError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Translation failed: {0}")]
    Translation(String),

    #[error("Import error: {0}")]
    Import(String),

    #[error("{0}")]
    Other(String),
}

impl QuranError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            QuranError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            QuranError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            QuranError::Translation(_) => StatusCode::BAD_GATEWAY,
            QuranError::Database(_) | QuranError::Import(_) | QuranError::Other(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<rusqlite::Error> for QuranError {
    fn from(e: rusqlite::Error) -> Self {
        QuranError::Database(e.to_string())
    }
}

impl serde::Serialize for QuranError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Body returned for every failed request
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for QuranError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(%status, error = %self, "request failed");
        }
        (status, Json(ErrorResponse { error: self.to_string() })).into_response()
    }
}
