use crate::core::auth::AuthError;
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use tracing::{error, warn};

#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    message: &'static str,
    details: Option<String>,
}

impl AppError {
    pub fn new(status: StatusCode, message: &'static str) -> Self {
        Self {
            status,
            message,
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    // costruttori per gli errori comuni
    pub fn not_found(message: &'static str) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn unauthorized(message: &'static str) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub fn internal_server_error(message: &'static str) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn service_unavailable(message: &'static str) -> Self {
        Self::new(StatusCode::SERVICE_UNAVAILABLE, message)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            // update/delete su un id inesistente
            sqlx::Error::RowNotFound => Self::not_found("Resource not found"),

            // Price/Score salvati come TEXT che non sono decimali validi
            sqlx::Error::ColumnDecode { index, source } => {
                error!("Stored column {} could not be decoded: {}", index, source);
                Self::internal_server_error("Stored value could not be decoded")
                    .with_details(format!("column {index}"))
            }

            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                warn!("Database pool unavailable: {}", err);
                Self::service_unavailable("Database unavailable")
            }

            other => {
                error!("Database error: {}", other);
                Self::internal_server_error("Database error")
            }
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Unauthorized => Self::unauthorized("Invalid username or password"),
            AuthError::InvalidToken(_) => Self::unauthorized("Invalid token"),
            AuthError::ExpiryOutOfRange => Self::internal_server_error("Token could not be issued"),
            AuthError::Signing(e) => {
                Self::internal_server_error("Token could not be issued").with_details(e.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let body = Json(ErrorResponse {
            error: self.message,
            details: self.details,
        });
        (self.status, body).into_response()
    }
}
