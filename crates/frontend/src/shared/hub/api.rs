//! REST client of the `/api/{collection}` endpoints

use contracts::domain::common::{BulkRequest, BulkResponse, HubEntity};
use gloo_net::http::{Request, Response};
use serde::Deserialize;
use thiserror::Error;

use crate::shared::api_utils::{collection_url, item_url, with_query};

#[derive(Deserialize)]
struct CreatedId {
    id: String,
}

/// Error body of the backend: `{"error": "..."}`
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Failure of a backend call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never got a response
    #[error("Backend unreachable: {0}")]
    Unreachable(String),

    /// The backend answered with a non-success status
    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("Invalid request or response: {0}")]
    Payload(String),
}

impl ApiError {
    pub fn is_unreachable(&self) -> bool {
        matches!(self, ApiError::Unreachable(_))
    }

    fn status(status: u16, body: &str) -> Self {
        ApiError::Status {
            status,
            message: error_message(status, body),
        }
    }
}

type ApiResult<T> = Result<T, ApiError>;

fn transport(e: gloo_net::Error) -> ApiError {
    ApiError::Unreachable(e.to_string())
}

fn payload(e: impl std::fmt::Display) -> ApiError {
    ApiError::Payload(e.to_string())
}

fn error_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed.error,
        Err(_) if body.trim().is_empty() => format!("HTTP {}", status),
        Err(_) => format!("HTTP {}: {}", status, body.trim()),
    }
}

async fn check(response: Response) -> ApiResult<Response> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::status(status, &body))
}

pub async fn fetch_list<E: HubEntity>(base: &str, filter: &E::Filter) -> ApiResult<Vec<E>> {
    let query = serde_qs::to_string(filter).map_err(payload)?;
    let url = with_query(collection_url(base, E::collection_name()), &query);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(transport)?;
    check(response)
        .await?
        .json::<Vec<E>>()
        .await
        .map_err(payload)
}

/// `Ok(None)` when the backend does not know the id
pub async fn fetch_by_id<E: HubEntity>(base: &str, id: &str) -> ApiResult<Option<E>> {
    let url = item_url(base, E::collection_name(), id);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(transport)?;
    if response.status() == 404 {
        return Ok(None);
    }
    check(response)
        .await?
        .json::<E>()
        .await
        .map(Some)
        .map_err(payload)
}

/// Returns the id of the created entity
pub async fn create<E: HubEntity>(base: &str, dto: &E::Dto) -> ApiResult<String> {
    let url = collection_url(base, E::collection_name());
    let response = Request::post(&url)
        .json(dto)
        .map_err(payload)?
        .send()
        .await
        .map_err(transport)?;
    let created: CreatedId = check(response)
        .await?
        .json()
        .await
        .map_err(payload)?;
    Ok(created.id)
}

pub async fn update<E: HubEntity>(base: &str, id: &str, dto: &E::Dto) -> ApiResult<()> {
    let url = item_url(base, E::collection_name(), id);
    let response = Request::put(&url)
        .json(dto)
        .map_err(payload)?
        .send()
        .await
        .map_err(transport)?;
    check(response).await.map(|_| ())
}

pub async fn delete<E: HubEntity>(base: &str, id: &str) -> ApiResult<()> {
    let url = item_url(base, E::collection_name(), id);
    let response = Request::delete(&url)
        .send()
        .await
        .map_err(transport)?;
    check(response).await.map(|_| ())
}

pub async fn bulk<E: HubEntity>(base: &str, request: &BulkRequest) -> ApiResult<BulkResponse> {
    let url = format!("{}/bulk", collection_url(base, E::collection_name()));
    let response = Request::post(&url)
        .json(request)
        .map_err(payload)?
        .send()
        .await
        .map_err(transport)?;
    check(response)
        .await?
        .json()
        .await
        .map_err(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message() {
        assert_eq!(
            error_message(400, r#"{"error":"Price must be a number"}"#),
            "Price must be a number"
        );
        assert_eq!(error_message(502, ""), "HTTP 502");
        assert_eq!(error_message(500, "boom"), "HTTP 500: boom");
    }

    #[test]
    fn test_status_errors_are_not_unreachable() {
        let err = ApiError::status(500, r#"{"error":"Store failure"}"#);
        assert_eq!(err.to_string(), "Store failure");
        assert!(!err.is_unreachable());
        assert!(ApiError::Unreachable("connection refused".into()).is_unreachable());
        assert!(!ApiError::Payload("expected value".into()).is_unreachable());
    }
}
