//! Standard response envelope helpers.

use axum::{http::StatusCode, Json};
use serde::Serialize;

use crate::model::Pagination;

/// Every endpoint answers with this shape; absent fields are omitted, not null.
#[derive(Serialize)]
pub struct Envelope<T> {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

impl Envelope<()> {
    pub fn failure(message: &str, errors: Vec<String>) -> Self {
        Envelope {
            message: message.to_string(),
            data: None,
            errors: Some(errors),
            pagination: None,
        }
    }
}

pub fn created<T: Serialize>(message: &str, data: T) -> (StatusCode, Json<Envelope<T>>) {
    (
        StatusCode::CREATED,
        Json(Envelope {
            message: message.to_string(),
            data: Some(data),
            errors: None,
            pagination: None,
        }),
    )
}

pub fn ok<T: Serialize>(message: &str, data: T) -> (StatusCode, Json<Envelope<T>>) {
    (
        StatusCode::OK,
        Json(Envelope {
            message: message.to_string(),
            data: Some(data),
            errors: None,
            pagination: None,
        }),
    )
}

/// Success with no payload, e.g. after a delete.
pub fn ok_message(message: &str) -> (StatusCode, Json<Envelope<()>>) {
    (
        StatusCode::OK,
        Json(Envelope {
            message: message.to_string(),
            data: None,
            errors: None,
            pagination: None,
        }),
    )
}

pub fn ok_page<T: Serialize>(
    message: &str,
    data: Vec<T>,
    pagination: Pagination,
) -> (StatusCode, Json<Envelope<Vec<T>>>) {
    (
        StatusCode::OK,
        Json(Envelope {
            message: message.to_string(),
            data: Some(data),
            errors: None,
            pagination: Some(pagination),
        }),
    )
}
