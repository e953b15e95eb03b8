use axum::{
    routing::{get, post},
    Router,
};
use contracts::domain::a001_category::aggregate::Category;
use contracts::domain::a002_product::aggregate::Product;
use contracts::domain::a003_coupon::aggregate::Coupon;
use contracts::domain::a004_staff::aggregate::Staff;

use crate::domain::Stored;
use crate::handlers::hub;

/// Routes of one hub collection under `/api/{collection}`
fn hub_routes<E: Stored>() -> Router {
    let base = format!("/api/{}", E::collection_name());
    Router::new()
        .route(&base, get(hub::list::<E>).post(hub::create::<E>))
        .route(&format!("{}/bulk", base), post(hub::bulk::<E>))
        .route(
            &format!("{}/testdata", base),
            post(hub::insert_test_data::<E>),
        )
        .route(
            &format!("{}/:id", base),
            get(hub::get_by_id::<E>)
                .put(hub::update::<E>)
                .delete(hub::delete::<E>),
        )
}

/// All routes of the application
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .merge(hub_routes::<Category>())
        .merge(hub_routes::<Product>())
        .merge(hub_routes::<Coupon>())
        .merge(hub_routes::<Staff>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use contracts::domain::a004_staff::aggregate::sample_id;
    use contracts::domain::common::AggregateId;
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn send(method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(v) => {
                request = request.header(header::CONTENT_TYPE, "application/json");
                Body::from(v.to_string())
            }
            None => Body::empty(),
        };
        let response = configure_routes()
            .oneshot(request.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn test_health() {
        let response = configure_routes()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_invalid_id_is_bad_request() {
        let (status, body) = send(Method::GET, "/api/coupons/not-a-uuid", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("not-a-uuid"));
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let missing = sample_id(999).as_string();
        let (status, _) = send(Method::GET, &format!("/api/staff/{}", missing), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_contradictory_filter_is_bad_request() {
        let (status, body) =
            send(Method::GET, "/api/products?minPrice=10&maxPrice=1", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Minimum price must not exceed maximum price");
    }

    #[tokio::test]
    async fn test_create_then_fetch_category() {
        let (status, created) = send(
            Method::POST,
            "/api/categories",
            Some(json!({
                "description": "Garden tools",
                "slug": "garden-tools",
                "isActive": true,
                "sortOrder": 4
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let id = created["id"].as_str().unwrap().to_string();

        let (status, fetched) = send(Method::GET, &format!("/api/categories/{}", id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched["slug"], "garden-tools");
    }

    #[tokio::test]
    async fn test_bulk_on_unknown_ids_affects_nothing() {
        let (status, body) = send(
            Method::POST,
            "/api/staff/bulk",
            Some(json!({ "action": "delete", "ids": ["junk"] })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["affected"], 0);
    }
}
