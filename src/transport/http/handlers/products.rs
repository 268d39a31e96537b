use crate::domain::model::{ProductCreate, ProductUpdate};
use crate::transport::http::error::ApiError;
use crate::transport::http::handlers::common::{self, ResourceLabels};
use crate::transport::http::types::{ApiResponse, AppState};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;

pub const PRODUCT: ResourceLabels = ResourceLabels {
    singular: "Product",
    plural: "Products",
};

#[utoipa::path(
    get,
    path = "/products",
    responses(
        (status = 200, description = "All products with their category details", body = ApiResponse),
        (status = 500, description = "Store failure", body = ApiResponse)
    )
)]
pub async fn list_products_handler(State(state): State<AppState>) -> Result<Response, ApiError> {
    common::list(&state.products, &PRODUCT).await
}

#[utoipa::path(
    post,
    path = "/products",
    request_body = ProductCreate,
    responses(
        (status = 201, description = "Product created", body = ApiResponse),
        (status = 400, description = "Invalid body or rejected write", body = ApiResponse)
    )
)]
pub async fn create_product_handler(
    State(state): State<AppState>,
    body: Result<Json<ProductCreate>, JsonRejection>,
) -> Result<Response, ApiError> {
    common::create(&state.products, &PRODUCT, body).await
}

#[utoipa::path(
    get,
    path = "/products/{id}",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product with category details", body = ApiResponse),
        (status = 400, description = "Invalid id", body = ApiResponse),
        (status = 404, description = "Product not found", body = ApiResponse),
        (status = 500, description = "Store failure", body = ApiResponse)
    )
)]
pub async fn get_product_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Response, ApiError> {
    common::get(&state.products, &PRODUCT, id).await
}

#[utoipa::path(
    put,
    path = "/products/{id}",
    params(("id" = i64, Path, description = "Product id")),
    request_body = ProductCreate,
    responses(
        (status = 200, description = "Product updated", body = ApiResponse),
        (status = 400, description = "Invalid id, body or rejected write", body = ApiResponse),
        (status = 404, description = "Product not found", body = ApiResponse)
    )
)]
pub async fn update_product_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<ProductUpdate>, JsonRejection>,
) -> Result<Response, ApiError> {
    common::update(&state.products, &PRODUCT, id, body).await
}

#[utoipa::path(
    delete,
    path = "/products/{id}",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product deleted", body = ApiResponse),
        (status = 400, description = "Invalid id", body = ApiResponse),
        (status = 404, description = "Product not found", body = ApiResponse),
        (status = 500, description = "Store failure", body = ApiResponse)
    )
)]
pub async fn delete_product_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Response, ApiError> {
    common::delete(&state.products, &PRODUCT, id).await
}

/// `GET`, `PUT` and `DELETE /products/` with an empty id.
pub async fn missing_product_id_handler() -> ApiError {
    common::missing_id(&PRODUCT)
}
