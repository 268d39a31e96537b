use crate::domain::model::{Category, CategoryDetail, Product, ProductCreate, ProductSummary};
use crate::transport::http::handlers::{categories, common, health, products};
use crate::transport::http::types::{ApiResponse, AppState, ResponseStatus};
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        categories::list_categories_handler,
        categories::create_category_handler,
        categories::get_category_handler,
        categories::update_category_handler,
        categories::delete_category_handler,
        products::list_products_handler,
        products::create_product_handler,
        products::get_product_handler,
        products::update_product_handler,
        products::delete_product_handler
    ),
    components(schemas(
        ApiResponse,
        ResponseStatus,
        Category,
        ProductSummary,
        Product,
        CategoryDetail,
        ProductCreate
    ))
)]
pub struct ApiDoc;

/// Builds the API router. Unsupported methods on a known path answer 405 and unknown
/// paths answer 404, both with the error envelope.
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/health",
            get(health::healthcheck_handler).fallback(common::method_not_allowed),
        )
        .route(
            "/categories",
            get(categories::list_categories_handler)
                .post(categories::create_category_handler)
                .fallback(common::method_not_allowed),
        )
        .route(
            "/categories/",
            get(categories::missing_category_id_handler)
                .put(categories::missing_category_id_handler)
                .delete(categories::missing_category_id_handler)
                .fallback(common::method_not_allowed),
        )
        .route(
            "/categories/:id",
            get(categories::get_category_handler)
                .put(categories::update_category_handler)
                .delete(categories::delete_category_handler)
                .fallback(common::method_not_allowed),
        )
        .route(
            "/products",
            get(products::list_products_handler)
                .post(products::create_product_handler)
                .fallback(common::method_not_allowed),
        )
        .route(
            "/products/",
            get(products::missing_product_id_handler)
                .put(products::missing_product_id_handler)
                .delete(products::missing_product_id_handler)
                .fallback(common::method_not_allowed),
        )
        .route(
            "/products/:id",
            get(products::get_product_handler)
                .put(products::update_product_handler)
                .delete(products::delete_product_handler)
                .fallback(common::method_not_allowed),
        )
        .fallback(common::route_not_found)
        .with_state(app_state)
}
