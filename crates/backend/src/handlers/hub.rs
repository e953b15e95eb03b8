//! REST handlers of the `/api/{collection}` endpoints, generic over the entity

use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use contracts::domain::common::{BulkRequest, BulkResponse};
use serde_json::json;

use crate::domain::{service, Stored};
use crate::shared::data::StoreError;

/// Error response with a `{"error": "..."}` body
#[derive(Debug)]
pub struct ApiError(pub StatusCode, pub String);

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        let status = match err.downcast_ref::<StoreError>() {
            Some(StoreError::InvalidId(_)) | Some(StoreError::Validation(_)) => {
                StatusCode::BAD_REQUEST
            }
            Some(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            Some(StoreError::Conflict(_)) => StatusCode::CONFLICT,
            None => {
                tracing::error!("Request failed: {:#}", err);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        ApiError(status, err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.0, Json(json!({ "error": self.1 }))).into_response()
    }
}

type ApiResult<T> = Result<T, ApiError>;

/// GET /api/{collection}
pub async fn list<E: Stored>(Query(filter): Query<E::Filter>) -> ApiResult<Json<Vec<E>>> {
    Ok(Json(service::list(E::repository(), &filter).await?))
}

/// GET /api/{collection}/:id
pub async fn get_by_id<E: Stored>(Path(id): Path<String>) -> ApiResult<Json<E>> {
    match service::get_by_id(E::repository(), &id).await? {
        Some(v) => Ok(Json(v)),
        None => Err(ApiError(StatusCode::NOT_FOUND, format!("Not found: {}", id))),
    }
}

/// POST /api/{collection}
pub async fn create<E: Stored>(Json(dto): Json<E::Dto>) -> ApiResult<Json<serde_json::Value>> {
    let id = service::create(E::repository(), dto).await?;
    Ok(Json(json!({ "id": id })))
}

/// PUT /api/{collection}/:id
pub async fn update<E: Stored>(
    Path(id): Path<String>,
    Json(dto): Json<E::Dto>,
) -> ApiResult<Json<E>> {
    Ok(Json(service::update(E::repository(), &id, dto).await?))
}

/// DELETE /api/{collection}/:id
pub async fn delete<E: Stored>(Path(id): Path<String>) -> ApiResult<StatusCode> {
    service::delete(E::repository(), &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/{collection}/bulk
pub async fn bulk<E: Stored>(Json(request): Json<BulkRequest>) -> ApiResult<Json<BulkResponse>> {
    Ok(Json(service::bulk(E::repository(), &request).await?))
}

/// POST /api/{collection}/testdata
pub async fn insert_test_data<E: Stored>() -> ApiResult<Json<serde_json::Value>> {
    let count = service::insert_test_data(E::repository()).await?;
    Ok(Json(json!({ "count": count })))
}
