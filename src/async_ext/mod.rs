//! Async extensions.
//!
//! # Feature Flag
//!
//! Requires the `async` feature:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.1", features = ["async"] }
//! ```
//!
//! - [`FutureOutcomeExt`]: `.into_response()` on futures resolving to an outcome
//! - [`RequestScope`]: tokio task-local store of the request being served, read
//!   by [`ContextAwareProfile`](crate::response::ContextAwareProfile) through
//!   [`TaskLocalRequests`]

mod request_scope;
mod response_future;

pub use request_scope::{RequestScope, TaskLocalRequests};
pub use response_future::{FutureOutcomeExt, ResponseFuture};
