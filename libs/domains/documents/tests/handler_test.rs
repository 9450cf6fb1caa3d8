//! Handler tests for the Documents domain
//!
//! These exercise the HTTP surface against a real in-memory collection:
//! - Request parsing, including bodies sent without a JSON content type
//! - Response bodies and status codes
//! - Error bodies for missing fields and store failures

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_documents::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()
use vector_store::{Client, DistanceMetric};

async fn setup() -> (Router, StoreDocumentRepository) {
    let client = Client::new();
    let repo = StoreDocumentRepository::connect(&client, DEFAULT_COLLECTION, DistanceMetric::L2)
        .await
        .unwrap();
    let app = handlers::router(DocumentService::new(repo.clone()));
    (app, repo)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let (status, bytes) = send(app, request).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn assert_banner(app: &Router) {
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let (status, bytes) = send(app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        String::from_utf8(bytes).unwrap(),
        "ChromaDB API Server Running (In-Memory)"
    );
}

#[tokio::test]
async fn test_root_returns_banner_whatever_the_collection_state() {
    let (app, _) = setup().await;
    assert_banner(&app).await;

    let (status, _) = post_json(
        &app,
        "/add_doc",
        json!({ "text": "hello", "embedding": [0.1, 0.2, 0.3] }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_banner(&app).await;

    let (status, _) = post_json(
        &app,
        "/add_doc",
        json!({ "text": "wider", "embedding": [0.1, 0.2, 0.3, 0.4] }),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_banner(&app).await;
}

#[tokio::test]
async fn test_add_then_query_round_trip() {
    let (app, _) = setup().await;

    let (status, body) = post_json(
        &app,
        "/add_doc",
        json!({ "text": "hello", "embedding": [0.1, 0.2, 0.3] }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "success" }));

    let (status, body) = post_json(
        &app,
        "/query_docs",
        json!({ "vector": [0.1, 0.2, 0.31], "top_k": 1 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "results": ["hello"] }));
}

#[tokio::test]
async fn test_query_orders_by_distance_and_defaults_to_three() {
    let (app, _) = setup().await;

    for (text, embedding) in [
        ("d", json!([4.0, 0.0])),
        ("a", json!([1.0, 0.0])),
        ("c", json!([3.0, 0.0])),
        ("b", json!([2.0, 0.0])),
    ] {
        let (status, _) = post_json(
            &app,
            "/add_doc",
            json!({ "text": text, "embedding": embedding }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = post_json(&app, "/query_docs", json!({ "vector": [0.0, 0.0] })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "results": ["a", "b", "c"] }));

    let (_, body) = post_json(
        &app,
        "/query_docs",
        json!({ "vector": [0.0, 0.0], "top_k": null }),
    )
    .await;
    assert_eq!(body, json!({ "results": ["a", "b", "c"] }));

    let (_, body) = post_json(
        &app,
        "/query_docs",
        json!({ "vector": [0.0, 0.0], "top_k": 10 }),
    )
    .await;
    assert_eq!(body, json!({ "results": ["a", "b", "c", "d"] }));
}

#[tokio::test]
async fn test_add_doc_missing_field_is_400() {
    let (app, repo) = setup().await;

    for body in [
        json!({ "text": "hello" }),
        json!({ "embedding": [0.1] }),
        json!({ "text": null, "embedding": [0.1] }),
        json!({}),
    ] {
        let (status, body) = post_json(&app, "/add_doc", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "text and embedding are required" }));
    }

    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_query_docs_missing_vector_is_400() {
    let (app, _) = setup().await;

    let (status, body) = post_json(&app, "/query_docs", json!({ "top_k": 2 })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "vector is required" }));
}

#[tokio::test]
async fn test_duplicate_text_is_stored_once() {
    let (app, repo) = setup().await;

    for embedding in [json!([0.1, 0.2, 0.3]), json!([0.9, 0.8, 0.7])] {
        let (status, _) = post_json(
            &app,
            "/add_doc",
            json!({ "text": "hello", "embedding": embedding }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    assert_eq!(repo.count().await.unwrap(), 1);

    let (_, body) = post_json(
        &app,
        "/query_docs",
        json!({ "vector": [0.9, 0.8, 0.7], "top_k": 5 }),
    )
    .await;
    assert_eq!(body, json!({ "results": ["hello"] }));
}

#[tokio::test]
async fn test_dimension_mismatch_is_500() {
    let (app, repo) = setup().await;

    post_json(
        &app,
        "/add_doc",
        json!({ "text": "a", "embedding": [0.1, 0.2, 0.3] }),
    )
    .await;

    let (status, body) = post_json(
        &app,
        "/add_doc",
        json!({ "text": "b", "embedding": [0.1, 0.2, 0.3, 0.4] }),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({ "error": "Embedding dimension 4 does not match collection dimensionality 3" })
    );
    assert_eq!(repo.count().await.unwrap(), 1);

    let (status, body) = post_json(&app, "/query_docs", json!({ "vector": [0.1, 0.2] })).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("dimension"));
}

#[tokio::test]
async fn test_query_empty_collection_returns_empty_results() {
    let (app, _) = setup().await;

    let (status, body) = post_json(
        &app,
        "/query_docs",
        json!({ "vector": [0.1, 0.2, 0.3, 0.4, 0.5] }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "results": [] }));
}

#[tokio::test]
async fn test_non_positive_top_k_is_500() {
    let (app, _) = setup().await;

    let (status, body) = post_json(
        &app,
        "/query_docs",
        json!({ "vector": [0.1], "top_k": 0 }),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({ "error": "top_k must be a positive integer, got 0" })
    );
}

#[tokio::test]
async fn test_top_k_accepts_integral_float_and_numeric_string() {
    let (app, _) = setup().await;

    for (text, embedding) in [
        ("hello", json!([0.1, 0.2, 0.3])),
        ("far", json!([9.0, 9.0, 9.0])),
    ] {
        let (status, _) = post_json(
            &app,
            "/add_doc",
            json!({ "text": text, "embedding": embedding }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = post_json(
        &app,
        "/query_docs",
        json!({ "vector": [0.1, 0.2, 0.3], "top_k": 2.0 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "results": ["hello", "far"] }));

    let (status, body) = post_json(
        &app,
        "/query_docs",
        json!({ "vector": [0.1, 0.2, 0.3], "top_k": "1" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "results": ["hello"] }));
}

#[tokio::test]
async fn test_non_numeric_top_k_is_500() {
    let (app, _) = setup().await;

    let (status, body) = post_json(
        &app,
        "/query_docs",
        json!({ "vector": [0.1], "top_k": "lots" }),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({ "error": "top_k must be a positive integer, got \"lots\"" })
    );
}

#[tokio::test]
async fn test_body_is_parsed_without_json_content_type() {
    let (app, _) = setup().await;

    let request = Request::builder()
        .method("POST")
        .uri("/add_doc")
        .header("content-type", "text/plain")
        .body(Body::from(r#"{"text": "plain", "embedding": [1.0]}"#))
        .unwrap();
    let (status, bytes) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({ "status": "success" }));

    let request = Request::builder()
        .method("POST")
        .uri("/query_docs")
        .body(Body::from(r#"{"vector": [1.0], "top_k": 1}"#))
        .unwrap();
    let (status, bytes) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({ "results": ["plain"] }));
}

#[tokio::test]
async fn test_malformed_json_is_400() {
    let (app, _) = setup().await;

    let request = Request::builder()
        .method("POST")
        .uri("/add_doc")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, bytes) = send(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(
        body["error"]
            .as_str()
            .unwrap()
            .starts_with("invalid JSON body")
    );
}
