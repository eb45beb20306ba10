//! Example: hosting outcome-returning handlers behind a Tower layer
//!
//! The layer scopes each request for the context-aware profile and turns
//! service errors into problem responses.
//!
//! # Requirements
//!
//! Run with: `cargo run --example tower_host --features tower`

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use outcome_rail::prelude::*;
use outcome_rail::registry;
use outcome_rail::tower::RailLayer;
use tower::{Layer, Service, ServiceExt};

// =============================================================================
// Domain types and errors
// =============================================================================

#[derive(Debug)]
struct BackendError(String);

impl std::fmt::Display for BackendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for BackendError {}

#[derive(Debug, serde::Serialize)]
struct Order {
    id: u64,
    status: &'static str,
}

async fn find_order(id: u64) -> Outcome<Order> {
    match id {
        1 => Outcome::success_with(Order { id, status: "shipped" }),
        _ => Error::with_code(format!("order {} does not exist", id), "ORDER-404")
            .with_error_type(ErrorType::NotFound)
            .into(),
    }
}

// =============================================================================
// Service
// =============================================================================

#[derive(Clone)]
struct OrdersService;

impl Service<http::Request<()>> for OrdersService {
    type Response = ResponseDescriptor;
    type Error = BackendError;
    type Future = Pin<Box<dyn Future<Output = Result<ResponseDescriptor, BackendError>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: http::Request<()>) -> Self::Future {
        let id = request.uri().path().trim_start_matches("/orders/").parse::<u64>();
        Box::pin(async move {
            match id {
                Ok(id) => Ok(find_order(id).into_value_response().await),
                Err(_) => Err(BackendError("order id is not a number".into())),
            }
        })
    }
}

#[tokio::main]
async fn main() {
    println!("=== Tower host example ===\n");

    registry::install_context_aware(ServiceInfo::new("orders", "api"))
        .expect("configured once at startup");

    let service = RailLayer::new().layer(OrdersService);

    for path in ["/orders/1", "/orders/2", "/orders/abc"] {
        let request = http::Request::get(path)
            .header("host", "orders.local")
            .header("x-request-id", "demo")
            .body(())
            .expect("valid request");

        match service.clone().oneshot(request).await {
            Ok(response) => {
                let response = response.into_http();
                println!("GET {} -> {}\n{}\n", path, response.status(), response.body());
            },
            Err(err) => println!("GET {} -> transport error: {}", path, err),
        }
    }
}
