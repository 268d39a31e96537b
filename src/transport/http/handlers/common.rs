//! Resource controller shared by the category and product handlers.
//!
//! Parses the path id and body, calls the service, and maps the outcome onto the
//! envelope. Entity-specific handlers only supply their service and labels.

use crate::app::ResourceService;
use crate::storage::{Repository, StoreError};
use crate::transport::http::error::ApiError;
use crate::transport::http::types::{json_message, json_response};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use serde::Serialize;
use tracing::debug;

/// Names used in response messages.
pub struct ResourceLabels {
    pub singular: &'static str,
    pub plural: &'static str,
}

impl ResourceLabels {
    pub fn invalid_id(&self) -> String {
        format!("Invalid {} ID", self.singular.to_lowercase())
    }

    pub fn done(&self, verb: &str) -> String {
        format!("{} {} successfully", self.singular, verb)
    }
}

pub const INVALID_BODY: &str = "Invalid request body";

/// Any 64-bit integer is a well-formed id; anything else is a bad request.
pub fn parse_id(id: Result<Path<i64>, PathRejection>, labels: &ResourceLabels) -> Result<i64, ApiError> {
    match id {
        Ok(Path(id)) => Ok(id),
        Err(rejection) => {
            debug!(error = %rejection, "Rejected path id");
            Err(ApiError::BadRequest(labels.invalid_id()))
        }
    }
}

/// Stored ids are `i32`; a well-formed id outside that range cannot match a row.
pub fn row_id(id: i64, labels: &ResourceLabels) -> Result<i32, ApiError> {
    i32::try_from(id).map_err(|_| ApiError::from_read(StoreError::NotFound(labels.singular)))
}

pub fn parse_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    match body {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => {
            debug!(error = %rejection, "Rejected request body");
            Err(ApiError::BadRequest(INVALID_BODY.to_string()))
        }
    }
}

pub async fn list<R>(service: &ResourceService<R>, labels: &ResourceLabels) -> Result<Response, ApiError>
where
    R: Repository + ?Sized,
    R::Listed: Serialize,
{
    let items = service.get_all().await.map_err(ApiError::from_read)?;
    Ok(json_response(
        StatusCode::OK,
        format!("{} retrieved successfully", labels.plural),
        &items,
    ))
}

pub async fn create<R>(
    service: &ResourceService<R>,
    labels: &ResourceLabels,
    body: Result<Json<R::Create>, JsonRejection>,
) -> Result<Response, ApiError>
where
    R: Repository + ?Sized,
    R::Create: Serialize,
{
    let input = parse_body(body)?;
    let created = service.create(input).await.map_err(ApiError::from_write)?;
    Ok(json_response(StatusCode::CREATED, labels.done("created"), &created))
}

pub async fn get<R>(
    service: &ResourceService<R>,
    labels: &ResourceLabels,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Response, ApiError>
where
    R: Repository + ?Sized,
    R::Detail: Serialize,
{
    let id = row_id(parse_id(id, labels)?, labels)?;
    let item = service.get_by_id(id).await.map_err(ApiError::from_read)?;
    Ok(json_response(StatusCode::OK, labels.done("retrieved"), &item))
}

/// The path id wins over any id in the body.
pub async fn update<R>(
    service: &ResourceService<R>,
    labels: &ResourceLabels,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<R::Update>, JsonRejection>,
) -> Result<Response, ApiError>
where
    R: Repository + ?Sized,
    R::Update: Serialize,
{
    let id = parse_id(id, labels)?;
    let input = parse_body(body)?;
    let id = row_id(id, labels)?;
    let updated = service.update(id, input).await.map_err(ApiError::from_write)?;
    Ok(json_response(StatusCode::OK, labels.done("updated"), &updated))
}

pub async fn delete<R>(
    service: &ResourceService<R>,
    labels: &ResourceLabels,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Response, ApiError>
where
    R: Repository + ?Sized,
{
    let id = row_id(parse_id(id, labels)?, labels)?;
    service.delete(id).await.map_err(ApiError::from_read)?;
    Ok(json_message(StatusCode::OK, labels.done("deleted")))
}

/// `/<resource>/` with nothing after the slash: the id is empty, so it is malformed.
pub fn missing_id(labels: &ResourceLabels) -> ApiError {
    ApiError::BadRequest(labels.invalid_id())
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

pub async fn route_not_found() -> ApiError {
    ApiError::NotFound("Not found".to_string())
}
