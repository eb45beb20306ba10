//! Tower integration.
//!
//! [`RailLayer`] wraps an `http` service whose responses are
//! [`ResponseDescriptor`]s. For every request it:
//!
//! - captures the request line and headers as a [`RequestInfo`] and scopes it
//!   into [`RequestScope`] while the inner service runs;
//! - turns an error of the inner service into a `SystemError` failure
//!   translated by the configured profile, so callers always get a response.
//!
//! # Feature Flag
//!
//! Requires the `tower` feature:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.1", features = ["tower"] }
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use outcome_rail::tower::RailLayer;
//! use tower::ServiceBuilder;
//!
//! let service = ServiceBuilder::new()
//!     .layer(RailLayer::new())
//!     .service(orders_service);
//! ```

use core::future::Future;
use core::pin::Pin;
use core::sync::atomic::{AtomicU64, Ordering};
use core::task::{ready, Context, Poll};
use std::sync::Arc;

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;
use tokio::task::futures::TaskLocalFuture;
use tower::{Layer, Service};

use crate::async_ext::RequestScope;
use crate::macros::log_warn;
use crate::registry;
use crate::response::{RequestInfo, ResponseDescriptor, ResponseProfile};
use crate::traits::ResponseExt;
use crate::types::{Error, ErrorType, Outcome};

static NEXT_REQUEST_ID: AtomicU64 = AtomicU64::new(1);

fn next_request_id() -> String {
    format!("{:016x}", NEXT_REQUEST_ID.fetch_add(1, Ordering::Relaxed))
}

/// A Tower [`Layer`] producing [`RailService`]s.
///
/// Errors are translated with the given profile, or with the registry
/// default when none was given.
#[derive(Clone, Default)]
pub struct RailLayer {
    profile: Option<Arc<dyn ResponseProfile>>,
}

impl RailLayer {
    #[inline]
    pub const fn new() -> Self {
        Self { profile: None }
    }

    /// Uses `profile` instead of the registry default.
    #[inline]
    pub fn with_profile(profile: Arc<dyn ResponseProfile>) -> Self {
        Self { profile: Some(profile) }
    }
}

impl core::fmt::Debug for RailLayer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RailLayer").field("explicit_profile", &self.profile.is_some()).finish()
    }
}

impl<S> Layer<S> for RailLayer {
    type Service = RailService<S>;

    #[inline]
    fn layer(&self, inner: S) -> Self::Service {
        RailService { inner, profile: self.profile.clone() }
    }
}

/// A Tower [`Service`] that scopes request metadata and never fails a call.
///
/// Created by [`RailLayer`] or [`ServiceRailExt::with_outcome_fallback`].
#[derive(Clone)]
pub struct RailService<S> {
    inner: S,
    profile: Option<Arc<dyn ResponseProfile>>,
}

impl<S> RailService<S> {
    #[inline]
    pub const fn new(inner: S) -> Self {
        Self { inner, profile: None }
    }

    #[inline]
    pub const fn inner(&self) -> &S {
        &self.inner
    }

    #[inline]
    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    #[inline]
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: core::fmt::Debug> core::fmt::Debug for RailService<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RailService")
            .field("inner", &self.inner)
            .field("explicit_profile", &self.profile.is_some())
            .finish()
    }
}

impl<S, B> Service<http::Request<B>> for RailService<S>
where
    S: Service<http::Request<B>, Response = ResponseDescriptor>,
    S::Error: std::error::Error,
{
    type Response = ResponseDescriptor;
    type Error = S::Error;
    type Future = RailFuture<S::Future>;

    #[inline]
    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: http::Request<B>) -> Self::Future {
        let info = RequestInfo::from_request(&request, next_request_id());
        let inner = RequestScope::scope(info.clone(), self.inner.call(request));
        RailFuture { inner, request: Some(info), profile: self.profile.clone() }
    }
}

pin_project! {
    /// Future returned by [`RailService`].
    #[must_use = "futures do nothing unless polled"]
    pub struct RailFuture<F: Future> {
        #[pin]
        inner: TaskLocalFuture<RequestInfo, F>,
        request: Option<RequestInfo>,
        profile: Option<Arc<dyn ResponseProfile>>,
    }
}

impl<F, E> Future for RailFuture<F>
where
    F: Future<Output = Result<ResponseDescriptor, E>>,
    E: std::error::Error,
{
    type Output = Result<ResponseDescriptor, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        let result = ready!(this.inner.poll(cx));
        let request = this.request.take().unwrap_or_default();

        match result {
            Ok(response) => Poll::Ready(Ok(response)),
            Err(error) => {
                log_warn!(error = %error, "service error translated into a failure response");
                let outcome = Outcome::<()>::failure(
                    Error::new(error.to_string())
                        .with_error_type(ErrorType::SystemError)
                        .caused_by_error(&error),
                );
                let profile = this.profile.take().unwrap_or_else(registry::default_profile);
                let response =
                    RequestScope::sync_scope(request, || outcome.to_response_with(&*profile));
                Poll::Ready(Ok(response))
            },
        }
    }
}

impl<F, E> FusedFuture for RailFuture<F>
where
    F: Future<Output = Result<ResponseDescriptor, E>>,
    E: std::error::Error,
{
    #[inline]
    fn is_terminated(&self) -> bool {
        self.request.is_none()
    }
}

/// Extension trait for wrapping a service without a layer.
pub trait ServiceRailExt<Request>: Service<Request> + Sized {
    /// Wraps this service in a [`RailService`] using the registry default profile.
    ///
    /// ```rust,ignore
    /// use outcome_rail::tower::ServiceRailExt;
    ///
    /// let wrapped = orders_service.with_outcome_fallback();
    /// ```
    fn with_outcome_fallback(self) -> RailService<Self> {
        RailService::new(self)
    }
}

impl<S, Request> ServiceRailExt<Request> for S where S: Service<Request> {}
