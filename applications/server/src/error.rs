/// Server error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use muse_core::MuseError;
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Domain(#[from] MuseError),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("Bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ServerError::Auth(msg) => (StatusCode::UNAUTHORIZED, msg),
            ServerError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ServerError::Domain(err) => return domain_response(err),
            ServerError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Configuration error".to_string(),
                )
            }
            ServerError::Io(ref e) => {
                tracing::error!("IO error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "IO error".to_string())
            }
            ServerError::Jwt(ref e) => {
                tracing::error!("JWT error: {:?}", e);
                (StatusCode::UNAUTHORIZED, "Invalid token".to_string())
            }
            ServerError::Bcrypt(ref e) => {
                tracing::error!("Bcrypt error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Password error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Map the domain error taxonomy onto HTTP statuses. Database and
/// unexpected errors are logged and never leak their message.
fn domain_response(err: MuseError) -> Response {
    let (status, error_message) = match err {
        MuseError::InvalidReference(msg) | MuseError::InvalidInput(msg) => {
            (StatusCode::BAD_REQUEST, msg)
        }
        MuseError::PermissionDenied => (
            StatusCode::FORBIDDEN,
            "You do not have permission to do that".to_string(),
        ),
        MuseError::NotFound { entity, id } => {
            (StatusCode::NOT_FOUND, format!("{entity} {id} not found"))
        }
        MuseError::Conflict(msg) => (StatusCode::CONFLICT, msg),
        MuseError::Provider(ref msg) => {
            tracing::error!("Provider error: {}", msg);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Search provider error".to_string(),
            )
        }
        MuseError::Database(ref msg) => {
            tracing::error!("Database error: {}", msg);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Database error".to_string(),
            )
        }
        MuseError::Other(ref msg) => {
            tracing::error!("Unexpected error: {}", msg);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            )
        }
    };

    let body = Json(json!({
        "error": error_message,
    }));

    (status, body).into_response()
}
