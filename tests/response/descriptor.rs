use http::header::CONTENT_TYPE;
use http::StatusCode;
use outcome_rail::response::{
    ProblemDocument, ResponseDescriptor, APPLICATION_JSON, APPLICATION_PROBLEM_JSON,
};
use outcome_rail::types::ErrorType;
use serde_json::{json, Value};

#[test]
fn problem_document_flattens_extensions() {
    let problem = ProblemDocument::new(ErrorType::NotFound).with_extension("traceId", "abc");
    let value = serde_json::to_value(&problem).unwrap();

    assert_eq!(value, json!({"title": "requested data not found", "status": 404, "traceId": "abc"}));
}

#[test]
fn reserved_members_cannot_be_shadowed_by_extensions() {
    let problem = ProblemDocument::new(ErrorType::BusinessError)
        .with_extension("status", 999)
        .with_extension("title", "other")
        .with_extension("detail", "kept");

    assert_eq!(problem.status, 400);
    assert!(problem.extension("status").is_none());
    assert_eq!(problem.extensions().len(), 1);

    let body = serde_json::to_string(&problem).unwrap();
    assert_eq!(body, r#"{"title":"business logic error","status":400,"detail":"kept"}"#);
}

#[test]
fn content_types_follow_body_kind() {
    let problem = ResponseDescriptor::problem(ProblemDocument::new(ErrorType::SystemError));
    assert_eq!(problem.headers()[CONTENT_TYPE], APPLICATION_PROBLEM_JSON);

    let payload = ResponseDescriptor::ok(Some(json!([1])));
    assert_eq!(payload.headers()[CONTENT_TYPE], APPLICATION_JSON);

    assert!(ResponseDescriptor::ok(None).headers().get(CONTENT_TYPE).is_none());
}

#[test]
fn into_http_serializes_the_body() {
    let response = ResponseDescriptor::problem(
        ProblemDocument::new(ErrorType::BusinessError).with_extension("field", "quantity"),
    )
    .into_http();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.headers()[CONTENT_TYPE], APPLICATION_PROBLEM_JSON);
    let body: Value = serde_json::from_str(response.body()).unwrap();
    assert_eq!(body["title"], "business logic error");
    assert_eq!(body["field"], "quantity");
}

#[test]
fn with_status_overrides_document_status() {
    let response = ResponseDescriptor::ok(None).with_status(StatusCode::NO_CONTENT).into_http();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(response.body().is_empty());
}
