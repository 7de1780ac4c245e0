//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::response::Envelope;

/// Which resource an error is about; selects the client-facing wording.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resource {
    Customer,
    Address,
}

impl Resource {
    fn invalid_id(self) -> (&'static str, &'static str) {
        match self {
            Resource::Customer => ("Invalid customer ID", "Customer ID must be a number"),
            Resource::Address => ("Invalid address ID", "Address ID must be a number"),
        }
    }

    fn not_found(self) -> (&'static str, &'static str) {
        match self {
            Resource::Customer => ("Customer not found", "No such customer"),
            Resource::Address => ("Address not found", "No such address"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ApiError {
    /// Payload failed field validation; carries every violation, in rule order.
    #[error("validation failed: {0:?}")]
    Validation(Vec<String>),
    /// Path id is not numeric.
    #[error("invalid {0:?} id")]
    InvalidId(Resource),
    #[error("{0:?} not found")]
    NotFound(Resource),
    /// The unique phone_number constraint rejected a write.
    #[error("phone number already exists")]
    PhoneConflict,
    /// Storage fault; `context` is the client-facing description.
    #[error("{context}")]
    Db {
        context: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

impl ApiError {
    /// Wraps a storage fault with the operation's client-facing description.
    pub fn db(context: &'static str) -> impl FnOnce(sqlx::Error) -> ApiError {
        move |source| ApiError::Db { context, source }
    }

    /// Like [`ApiError::db`], but promotes unique-constraint violations to
    /// the duplicate-phone conflict.
    pub fn db_or_phone_conflict(context: &'static str) -> impl FnOnce(sqlx::Error) -> ApiError {
        move |source| match &source {
            sqlx::Error::Database(e) if e.is_unique_violation() => ApiError::PhoneConflict,
            _ => ApiError::Db { context, source },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, errors) = match self {
            ApiError::Validation(errors) => (StatusCode::BAD_REQUEST, "Validation error", errors),
            ApiError::InvalidId(resource) => {
                let (message, detail) = resource.invalid_id();
                (StatusCode::BAD_REQUEST, message, vec![detail.to_string()])
            }
            ApiError::NotFound(resource) => {
                let (message, detail) = resource.not_found();
                (StatusCode::NOT_FOUND, message, vec![detail.to_string()])
            }
            ApiError::PhoneConflict => (
                StatusCode::CONFLICT,
                "Phone number already exists",
                vec!["Phone number must be unique".to_string()],
            ),
            ApiError::Db { context, source } => {
                tracing::error!(error = %source, context, "storage fault");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    vec![context.to_string()],
                )
            }
        };
        (status, Json(Envelope::failure(message, errors))).into_response()
    }
}
