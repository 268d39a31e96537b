use crate::app::{CategoryService, ProductService};
use crate::storage::Repositories;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use utoipa::ToSchema;

#[derive(Clone)]
pub struct AppState {
    pub categories: CategoryService,
    pub products: ProductService,
}

impl AppState {
    pub fn new(repositories: Repositories) -> Self {
        Self {
            categories: CategoryService::new(repositories.categories),
            products: ProductService::new(repositories.products),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ResponseStatus {
    Success,
    Error,
}

impl ResponseStatus {
    /// `Error` for any 4xx/5xx code.
    pub fn from_code(code: StatusCode) -> Self {
        if code.as_u16() >= 400 {
            ResponseStatus::Error
        } else {
            ResponseStatus::Success
        }
    }
}

/// Envelope wrapped around every response body.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ApiResponse {
    pub status: ResponseStatus,
    pub message: String,
    /// `null` when the response carries no payload.
    #[schema(value_type = Object)]
    pub data: Option<JsonValue>,
}

impl ApiResponse {
    pub fn new(code: StatusCode, message: impl Into<String>, data: Option<JsonValue>) -> Self {
        Self {
            status: ResponseStatus::from_code(code),
            message: message.into(),
            data,
        }
    }
}

/// Writes `code` and the envelope with `data` as payload.
pub fn json_response<T: Serialize>(code: StatusCode, message: impl Into<String>, data: &T) -> Response {
    match serde_json::to_value(data) {
        Ok(value) => respond(code, message.into(), Some(value)),
        Err(e) => respond(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to encode response: {}", e),
            None,
        ),
    }
}

/// Writes `code` and the envelope with `data: null`.
pub fn json_message(code: StatusCode, message: impl Into<String>) -> Response {
    respond(code, message.into(), None)
}

fn respond(code: StatusCode, message: String, data: Option<JsonValue>) -> Response {
    (code, Json(ApiResponse::new(code, message, data))).into_response()
}
