//! Entry points without an explicit profile. This test binary never
//! configures the registry, so the default is the minimal profile.

use http::StatusCode;
use outcome_rail::registry;
use outcome_rail::response::{ContextAwareProfile, RequestInfo, ServiceInfo};
use outcome_rail::traits::{ResponseExt, ValueResponseExt};
use outcome_rail::types::{Error, ErrorType, Outcome};

#[test]
fn unconfigured_registry_uses_minimal_profile() {
    assert!(!registry::global().is_configured());

    let response = Outcome::<()>::failure(Error::new("x").with_error_type(ErrorType::NotFound))
        .to_response();
    let problem = response.problem_document().unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(problem.extension("serviceName").is_none());
}

#[test]
fn value_response_carries_payload() {
    let response = Outcome::success_with(vec!["a", "b"]).to_value_response();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.payload().unwrap(), &serde_json::json!(["a", "b"]));
}

#[test]
fn explicit_profile_bypasses_the_registry() {
    let profile = ContextAwareProfile::new(
        || Some(RequestInfo { method: "GET".into(), ..RequestInfo::default() }),
        ServiceInfo::new("catalog", "worker"),
    );
    let response = Outcome::<()>::failure(Error::new("x")).to_response_with(&profile);
    let problem = response.problem_document().unwrap();

    assert_eq!(problem.extension("serviceName").unwrap(), "catalog");
    assert_eq!(problem.extension("method").unwrap(), "GET");
}

#[test]
fn empty_success_has_no_body() {
    let response = Outcome::success().to_response();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.payload().is_none());
}
