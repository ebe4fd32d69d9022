//! HTTP API integration tests
//!
//! Drives the full router in-process via tower `oneshot`.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tour_server::api::build_app;
use tour_server::{Config, MemoryTourStore, ServerState};
use tower::ServiceExt;

fn test_config() -> Config {
    Config {
        http_port: 0,
        environment: "development".to_string(),
        tours_file: None,
        shiphero_auth_url: "http://127.0.0.1:1/auth/refresh".to_string(),
        shiphero_timeout_ms: 1_000,
        barcode_concurrency: 4,
    }
}

fn test_app() -> Router {
    let store = MemoryTourStore::new();

    // Finalized tour with overlapping SKUs across orders
    store.insert(
        serde_json::from_value(serde_json::json!({
            "id": "t-final",
            "tour_numeric_id": 42,
            "date": "2025-06-01",
            "time": "10:00",
            "warehouse": {"name": "East DC", "code": "EDC"},
            "host": {"first_name": "Jane", "last_name": "Doe"},
            "participants": [{"first_name": "Alice", "last_name": "Smith"}],
            "order_summary": {
                "participantOrders": [
                    {"orderNumber": "SO-1", "participantName": "Alice", "skus": ["A1", "B2"]}
                ],
                "hostOrder": {"orderNumber": "SO-2", "hostName": "Jane", "skus": ["B2"]},
                "totalOrders": 2,
                "successCount": 2
            }
        }))
        .unwrap(),
    );

    // Scheduled tour, summary not finalized yet
    store.insert(
        serde_json::from_value(serde_json::json!({
            "id": "t-pending",
            "tour_numeric_id": 43,
            "warehouse": {"name": "East DC"},
            "host": {"first_name": "Jane", "last_name": "Doe"}
        }))
        .unwrap(),
    );

    let state = ServerState::with_store(test_config(), Arc::new(store)).unwrap();
    build_app(state)
}

#[tokio::test]
async fn test_instructions_pdf_success() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/api/tours/t-final/instructions-pdf")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/pdf"
    );
    assert_eq!(
        response.headers().get(header::CONTENT_DISPOSITION).unwrap(),
        "attachment; filename=\"Tour-42-Instructions.pdf\""
    );

    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert!(body.starts_with(b"%PDF"));
}

#[tokio::test]
async fn test_instructions_pdf_unknown_tour() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/api/tours/nope/instructions-pdf")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_instructions_pdf_refused_before_finalization() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/api/tours/t-pending/instructions-pdf")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PRECONDITION_FAILED);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(json["message"].as_str().unwrap().contains("finalized"));
}

#[tokio::test]
async fn test_refresh_token_requires_token() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/shiphero/refresh-token")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_health() {
    let response = test_app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["tours_loaded"], 2);
}
