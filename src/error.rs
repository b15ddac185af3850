use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;

/// A single field-addressed validation failure.
///
/// Validation reports every applicable failure for a submission at once,
/// as an ordered list of these entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub location: &'static str,
    pub message: String,
    pub kind: &'static str,
}

impl FieldError {
    fn new(location: &'static str, message: impl Into<String>, kind: &'static str) -> Self {
        Self {
            location,
            message: message.into(),
            kind,
        }
    }

    pub fn missing(location: &'static str) -> Self {
        Self::new(location, "Field is required", "missing")
    }

    pub fn invalid(location: &'static str, message: impl Into<String>) -> Self {
        Self::new(location, message, "invalid")
    }

    pub fn out_of_range(location: &'static str, message: impl Into<String>) -> Self {
        Self::new(location, message, "out_of_range")
    }

    pub fn too_long(location: &'static str, message: impl Into<String>) -> Self {
        Self::new(location, message, "too_long")
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("validation failed")]
    Validation { errors: Vec<FieldError> },

    #[error("{message}")]
    Unauthorized { message: String },

    #[error("{message}")]
    NotFound { message: String },

    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn validation(errors: Vec<FieldError>) -> Self {
        Self::Validation { errors }
    }

    /// Single-field shortcut for [`AppError::Validation`].
    pub fn field(error: FieldError) -> Self {
        Self::Validation {
            errors: vec![error],
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn user_not_found(user_id: i64) -> Self {
        Self::not_found(format!("User with id {user_id} was not found"))
    }

    pub fn contact_not_found(contact_id: i64) -> Self {
        Self::not_found(format!("Contact with id {contact_id} was not found"))
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        tracing::error!(error = %e, "Database error");
        AppError::internal("Database error")
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Validation { errors } => {
                (StatusCode::BAD_REQUEST, json!({ "result": errors }))
            }
            AppError::Unauthorized { message } => {
                (StatusCode::UNAUTHORIZED, json!({ "result": message }))
            }
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, json!({ "result": message })),
            AppError::Internal { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "result": "Internal server error" }),
            ),
        };

        (status, Json(body)).into_response()
    }
}
