//! Typed errors and their mapping onto the admin UI error envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("duplicate resource: {0}")]
    DuplicateResource(String),
    #[error("rename table for {resource} is not bijective: '{field}' appears twice")]
    NonBijectiveRename { resource: String, field: String },
    #[error("resource {resource} is missing {field}")]
    Incomplete { resource: String, field: &'static str },
    #[error("invalid rewrite pattern '{pattern}': {reason}")]
    InvalidRewrite { pattern: String, reason: String },
    #[error("config load: {0}")]
    Load(String),
}

/// Failure of one outbound call to the backend service.
#[derive(Error, Debug)]
pub enum BackendError {
    /// Backend answered with a non-2xx status. `message` is the backend's own
    /// `message` field when it sent one.
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid backend response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl BackendError {
    pub fn status(&self) -> Option<u16> {
        match self {
            BackendError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Turn a backend 404 on a single entity into the admin UI's not-found message.
    pub fn for_entity(self, label: &str, id: &str) -> AppError {
        if self.is_not_found() {
            AppError::NotFound(format!("{} with id: {} was not found", label, id))
        } else {
            AppError::Backend(self)
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadRequest(String),
    #[error(transparent)]
    Backend(#[from] BackendError),
    #[error("{0}")]
    Internal(String),
}

/// Error shape the admin UI understands: `{ message, type, code }`.
#[derive(Serialize, Debug)]
pub struct ErrorBody {
    pub message: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub code: &'static str,
}

impl AppError {
    pub fn status_and_kind(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "invalid_data"),
            AppError::Backend(BackendError::Status { status, .. }) => {
                let status = StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                if status == StatusCode::NOT_FOUND {
                    (status, "not_found")
                } else {
                    (status, "unknown")
                }
            }
            AppError::Backend(_) | AppError::Config(_) | AppError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "unknown")
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, kind) = self.status_and_kind();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), "request failed: {}", self);
        } else {
            tracing::warn!(status = status.as_u16(), "request rejected: {}", self);
        }
        // The caught message goes to the client as-is, including transport errors.
        let body = ErrorBody {
            message: self.to_string(),
            kind,
            code: kind,
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_404_becomes_entity_not_found() {
        let err = BackendError::Status {
            status: 404,
            message: "Product not found".into(),
        }
        .for_entity("Product", "7");
        assert!(matches!(&err, AppError::NotFound(m) if m == "Product with id: 7 was not found"));
        assert_eq!(err.status_and_kind(), (StatusCode::NOT_FOUND, "not_found"));
    }

    #[test]
    fn other_backend_statuses_are_resurfaced() {
        let err = BackendError::Status {
            status: 409,
            message: "handle taken".into(),
        }
        .for_entity("Collection", "3");
        assert_eq!(err.status_and_kind(), (StatusCode::CONFLICT, "unknown"));
        assert_eq!(err.to_string(), "handle taken");
    }

    #[test]
    fn validation_maps_to_400() {
        let err = AppError::BadRequest("must provide IDs".into());
        assert_eq!(err.status_and_kind(), (StatusCode::BAD_REQUEST, "invalid_data"));
    }
}
