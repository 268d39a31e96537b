use crate::transport::http::types::{json_message, ApiResponse};
use axum::http::StatusCode;
use axum::response::Response;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is running", body = ApiResponse)
    )
)]
pub async fn healthcheck_handler() -> Response {
    json_message(StatusCode::OK, "API Running")
}
