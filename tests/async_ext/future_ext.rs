use std::sync::Arc;

use http::StatusCode;
use outcome_rail::async_ext::FutureOutcomeExt;
use outcome_rail::response::{MinimalProfile, ResponseProfile};
use outcome_rail::types::{Error, ErrorType, Outcome};

async fn load_stock(sku: &str) -> Outcome<u32> {
    tokio::task::yield_now().await;
    match sku {
        "sku-1" => Outcome::success_with(12),
        _ => Error::new("unknown sku").with_error_type(ErrorType::NotFound).into(),
    }
}

async fn archive(id: u64) -> Outcome {
    if id == 0 {
        return Error::new("cannot archive").with_error_type(ErrorType::BusinessError).into();
    }
    Outcome::success()
}

#[tokio::test]
async fn value_response_resolves_payload() {
    let response = load_stock("sku-1").into_value_response().await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.payload().unwrap(), &serde_json::json!(12));
}

#[tokio::test]
async fn failure_resolves_problem() {
    let response = load_stock("sku-9").into_value_response().await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = archive(0).into_response().await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn explicit_profile_is_used() {
    let profile: Arc<dyn ResponseProfile> = Arc::new(MinimalProfile);

    let response = archive(1).into_response_with(Arc::clone(&profile)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = load_stock("sku-1").into_value_response_with(profile).await;
    assert_eq!(response.payload().unwrap(), &serde_json::json!(12));
}
