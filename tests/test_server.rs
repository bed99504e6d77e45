//! HTTP route tests using warp's test harness

use motto_classifier::server::{routes, IsTaskResponse};
use motto_classifier::{
    ClassificationResult, ClassifierService, InputPolicy, OversizeAction, TaskCategory, Urgency,
};
use serde_json::{json, Value};
use warp::http::StatusCode;

fn default_service() -> ClassifierService {
    ClassifierService::default()
}

#[tokio::test]
async fn test_classify_returns_result() {
    let response = warp::test::request()
        .method("POST")
        .path("/classify")
        .json(&json!({ "text": "I need help with calculus homework, it's urgent" }))
        .reply(&routes(default_service()))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let result: ClassificationResult = serde_json::from_slice(response.body()).unwrap();
    assert_eq!(result.category, TaskCategory::Homework);
    assert_eq!(result.details.urgency, Urgency::High);
}

#[tokio::test]
async fn test_classify_empty_text_is_general() {
    let response = warp::test::request()
        .method("POST")
        .path("/classify")
        .json(&json!({ "text": "" }))
        .reply(&routes(default_service()))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_slice(response.body()).unwrap();
    assert_eq!(body["category"], "general");
    assert_eq!(body["confidence"], 0.0);
    assert!(body["details"].get("subject").is_none());
}

#[tokio::test]
async fn test_classify_rejects_oversized_input_under_reject_policy() {
    let service = ClassifierService::new(InputPolicy::new(10, OversizeAction::Reject));
    let response = warp::test::request()
        .method("POST")
        .path("/classify")
        .json(&json!({ "text": "write an essay about the history of rome" }))
        .reply(&routes(service))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = serde_json::from_slice(response.body()).unwrap();
    assert_eq!(body["error"]["code"], "invalid_input");
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("10 characters"));
}

#[tokio::test]
async fn test_classify_malformed_body() {
    let response = warp::test::request()
        .method("POST")
        .path("/classify")
        .header("content-type", "application/json")
        .body("{\"txt\": 1}")
        .reply(&routes(default_service()))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = serde_json::from_slice(response.body()).unwrap();
    assert_eq!(body["error"]["code"], "invalid_input");
}

#[tokio::test]
async fn test_is_task_route() {
    let filter = routes(default_service());

    let response = warp::test::request()
        .method("POST")
        .path("/is-task")
        .json(&json!({ "text": "debug my python script" }))
        .reply(&filter)
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let decision: IsTaskResponse = serde_json::from_slice(response.body()).unwrap();
    assert!(decision.is_task);
    assert_eq!(decision.category, TaskCategory::Code);

    let response = warp::test::request()
        .method("POST")
        .path("/is-task")
        .json(&json!({ "text": "good morning" }))
        .reply(&filter)
        .await;
    let decision: IsTaskResponse = serde_json::from_slice(response.body()).unwrap();
    assert!(!decision.is_task);
    assert_eq!(decision.category, TaskCategory::General);
}

#[tokio::test]
async fn test_categories_route() {
    let response = warp::test::request()
        .method("GET")
        .path("/categories")
        .reply(&routes(default_service()))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_slice(response.body()).unwrap();
    let categories = body.as_array().unwrap();
    assert_eq!(categories.len(), 13);
    assert_eq!(categories[0]["category"], "presentation");
    assert_eq!(categories[12]["category"], "homework");
}

#[tokio::test]
async fn test_health_and_metrics_routes() {
    let filter = routes(default_service());

    let response = warp::test::request()
        .method("GET")
        .path("/health")
        .reply(&filter)
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_slice(response.body()).unwrap();
    assert_eq!(body["status"], "healthy");

    let response = warp::test::request()
        .method("GET")
        .path("/metrics")
        .reply(&filter)
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_slice(response.body()).unwrap();
    assert!(body["classifications"].is_u64());
    assert!(body["per_category"].is_object());
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let response = warp::test::request()
        .method("GET")
        .path("/nope")
        .reply(&routes(default_service()))
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_wrong_method_is_rejected() {
    let response = warp::test::request()
        .method("GET")
        .path("/classify")
        .reply(&routes(default_service()))
        .await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
