//! Example: from business outcomes to HTTP problem responses
//!
//! Shows the minimal profile, a context-aware profile fed by a hand-built
//! request, and one-time registry configuration.
//!
//! Run with: `cargo run --example http_problem`

use outcome_rail::prelude::*;
use outcome_rail::registry;
use outcome_rail::response::RequestInfo;

// =============================================================================
// Domain
// =============================================================================

#[derive(Debug, Clone, serde::Serialize)]
struct Reservation {
    sku: &'static str,
    quantity: u32,
}

fn reserve(sku: &'static str, quantity: u32, stock: u32) -> Outcome<Reservation> {
    ensure!(quantity > 0, ErrorType::BusinessError, "quantity must be positive");
    if sku.is_empty() {
        fail!(Error::not_found().clone().with_error_type(ErrorType::NotFound));
    }
    if quantity > stock {
        return Error::with_code("not enough stock", "STOCK-LOW")
            .with_error_type(ErrorType::BusinessError)
            .with_details(format!("requested {}, available {}", quantity, stock))
            .into();
    }
    Outcome::success_with(Reservation { sku, quantity })
}

fn print(label: &str, response: ResponseDescriptor) {
    let response = response.into_http();
    println!("{} -> {} {}", label, response.status(), response.body());
}

fn main() {
    println!("=== Minimal profile ===\n");
    print("reserved", reserve("sku-1", 2, 10).to_value_response_with(&MinimalProfile));
    print("too many", reserve("sku-1", 20, 10).to_value_response_with(&MinimalProfile));
    print("unknown sku", reserve("", 1, 10).to_value_response_with(&MinimalProfile));

    let io = std::io::Error::other("connection reset by peer");
    let failed: Outcome = Error::new("stock service unavailable").caused_by(&capture_fault!(io)).into();
    print("system error", failed.to_response_with(&MinimalProfile));

    println!("\n=== Context-aware profile as process default ===\n");
    let request = http::Request::post("/reservations")
        .header("host", "inventory.local")
        .header("content-type", "application/json; v=2")
        .header("x-request-id", "caller-17")
        .body(())
        .map(|request| RequestInfo::from_request(&request, "0000000000000001"))
        .unwrap_or_default();

    registry::configure(|settings| {
        settings.use_profile(ContextAwareProfile::new(
            move || Some(request.clone()),
            ServiceInfo::new("inventory", "api"),
        ));
    })
    .expect("configured once at startup");

    print("quantity zero", reserve("sku-1", 0, 10).to_value_response());

    if let Err(violation) = registry::configure(|_| {}) {
        println!("\nsecond configuration rejected: {}", violation);
    }
}
