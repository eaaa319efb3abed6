//! HTTP surface tests: the router is exercised in-process with
//! `tower::ServiceExt::oneshot`, no listening socket required.

#![cfg(feature = "http-server")]

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use tower::ServiceExt;

use construe::http::create_router;
use construe::models::ParseResult;

fn parse_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/v1/parse")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let response = create_router()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["version"], "v1");
}

#[tokio::test]
async fn test_parse_endpoint_returns_structured_result() {
    let response = create_router()
        .oneshot(parse_request(r#"{"text": "No more than 3 games per week"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["type"], "capacity");
    assert_eq!(json["capacity"]["max_count"], 3);
    assert_eq!(json["capacity"]["per_period"], "week");
    assert_eq!(json["conditions"][0]["operator"], "less_than_or_equal");

    // The full body deserializes back into the model type.
    let result: ParseResult = serde_json::from_value(json).unwrap();
    assert_eq!(result.capacity.unwrap().max_count, Some(3));
}

#[tokio::test]
async fn test_empty_text_rejected_before_pipeline() {
    let response =
        create_router().oneshot(parse_request(r#"{"text": "   "}"#)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_malformed_json_rejected() {
    let response = create_router().oneshot(parse_request("{not json")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_missing_text_field_rejected() {
    let response = create_router().oneshot(parse_request("{}")).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_missing_content_type_rejected() {
    let request = Request::builder()
        .method("POST")
        .uri("/v1/parse")
        .body(Body::from(r#"{"text": "per week"}"#))
        .unwrap();

    let response = create_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn test_gibberish_is_a_successful_parse() {
    let response = create_router()
        .oneshot(parse_request(r#"{"text": "asdkjasd qweoiqwe"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["type"], "unknown");
    assert_eq!(json["confidence"], 0.0);
    assert_eq!(json["entities"], serde_json::json!([]));
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let response = create_router()
        .oneshot(Request::builder().uri("/v1/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
