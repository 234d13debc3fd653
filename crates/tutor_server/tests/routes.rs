//! End-to-end tests over the router, with no API key configured so every
//! upstream call short-circuits before touching the network.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use pretty_assertions::assert_eq;
use tower::ServiceExt;
use tutor_llm::{ChatClient, FALLBACK_COMMENT};
use tutor_server::{router, AppState};

fn app() -> axum::Router {
    router(Arc::new(AppState {
        client: ChatClient::new(None),
    }))
}

async fn post_json(uri: &str, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn math_steps_returns_annotated_sequence() {
    let (status, json) =
        post_json("/math_steps", serde_json::json!({"equation": "2x + 5 = 11"})).await;

    assert_eq!(status, StatusCode::OK);
    let steps = json["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 4);
    assert_eq!(steps[0]["latex"], "$2x + 5 = 11$");
    assert_eq!(steps[0]["explanation"], "Original equation");
    assert_eq!(steps[0]["teaching_comment"], "");
    assert_eq!(steps[1]["explanation"], "Subtract 5 from both sides");
    assert_eq!(steps[3]["explanation"], "Solution: x = 3");
    // Without an API key every annotated step carries the fallback text.
    for step in &steps[1..] {
        assert_eq!(step["teaching_comment"], FALLBACK_COMMENT);
    }
}

#[tokio::test]
async fn math_steps_reports_missing_equals() {
    let (status, json) = post_json("/math_steps", serde_json::json!({"equation": "2x + 5"})).await;

    assert_eq!(status, StatusCode::OK);
    assert!(json.get("steps").is_none());
    assert_eq!(
        json["error"],
        "Please provide an equation with an equals sign (e.g., '2x + 5 = 11')"
    );
}

#[tokio::test]
async fn math_steps_reports_double_equals() {
    let (status, json) =
        post_json("/math_steps", serde_json::json!({"equation": "2x = 2 = 3"})).await;

    assert_eq!(status, StatusCode::OK);
    let error = json["error"].as_str().unwrap();
    assert!(error.starts_with("Error solving equation:"), "{error}");
}

#[tokio::test]
async fn draw_without_key_relays_error_descriptor() {
    let (status, json) =
        post_json("/draw", serde_json::json!({"instruction": "Draw a neuron"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["error"], "upstream API returned error");
    assert_eq!(json["detail"], "no API key configured");
    assert_eq!(json["body"], "");
}
