use crate::domain::model::Category;
use crate::transport::http::error::ApiError;
use crate::transport::http::handlers::common::{self, ResourceLabels};
use crate::transport::http::types::{ApiResponse, AppState};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;

pub const CATEGORY: ResourceLabels = ResourceLabels {
    singular: "Category",
    plural: "Categories",
};

#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "All categories, without products", body = ApiResponse),
        (status = 500, description = "Store failure", body = ApiResponse)
    )
)]
pub async fn list_categories_handler(State(state): State<AppState>) -> Result<Response, ApiError> {
    common::list(&state.categories, &CATEGORY).await
}

#[utoipa::path(
    post,
    path = "/categories",
    request_body = Category,
    responses(
        (status = 201, description = "Category created", body = ApiResponse),
        (status = 400, description = "Invalid body or rejected write", body = ApiResponse)
    )
)]
pub async fn create_category_handler(
    State(state): State<AppState>,
    body: Result<Json<Category>, JsonRejection>,
) -> Result<Response, ApiError> {
    common::create(&state.categories, &CATEGORY, body).await
}

#[utoipa::path(
    get,
    path = "/categories/{id}",
    params(("id" = i64, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category with its products", body = ApiResponse),
        (status = 400, description = "Invalid id", body = ApiResponse),
        (status = 404, description = "Category not found", body = ApiResponse),
        (status = 500, description = "Store failure", body = ApiResponse)
    )
)]
pub async fn get_category_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Response, ApiError> {
    common::get(&state.categories, &CATEGORY, id).await
}

#[utoipa::path(
    put,
    path = "/categories/{id}",
    params(("id" = i64, Path, description = "Category id")),
    request_body = Category,
    responses(
        (status = 200, description = "Category updated", body = ApiResponse),
        (status = 400, description = "Invalid id, body or rejected write", body = ApiResponse),
        (status = 404, description = "Category not found", body = ApiResponse)
    )
)]
pub async fn update_category_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<Category>, JsonRejection>,
) -> Result<Response, ApiError> {
    common::update(&state.categories, &CATEGORY, id, body).await
}

#[utoipa::path(
    delete,
    path = "/categories/{id}",
    params(("id" = i64, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category deleted", body = ApiResponse),
        (status = 400, description = "Invalid id", body = ApiResponse),
        (status = 404, description = "Category not found", body = ApiResponse),
        (status = 500, description = "Store failure", body = ApiResponse)
    )
)]
pub async fn delete_category_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Response, ApiError> {
    common::delete(&state.categories, &CATEGORY, id).await
}

/// `GET`, `PUT` and `DELETE /categories/` with an empty id.
pub async fn missing_category_id_handler() -> ApiError {
    common::missing_id(&CATEGORY)
}
