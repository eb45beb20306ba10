//! Future adapter translating an awaited [`Outcome`] into a response.

use core::future::Future;
use core::pin::Pin;
use core::task::{ready, Context, Poll};
use std::sync::Arc;

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;
use serde::Serialize;

use crate::registry;
use crate::response::{ResponseDescriptor, ResponseProfile};
use crate::traits::{ResponseExt, ValueResponseExt};
use crate::types::Outcome;

pin_project! {
    /// Future returned by [`FutureOutcomeExt`].
    ///
    /// Resolves to the [`ResponseDescriptor`] of the inner future's outcome.
    /// Without an explicit profile, the registry default is read when the
    /// inner future completes.
    #[must_use = "futures do nothing unless polled"]
    pub struct ResponseFuture<Fut, O> {
        #[pin]
        future: Fut,
        profile: Option<Arc<dyn ResponseProfile>>,
        dispatch: fn(&O, &dyn ResponseProfile) -> ResponseDescriptor,
        terminated: bool,
    }
}

impl<Fut, O> ResponseFuture<Fut, O> {
    #[inline]
    fn new(
        future: Fut,
        profile: Option<Arc<dyn ResponseProfile>>,
        dispatch: fn(&O, &dyn ResponseProfile) -> ResponseDescriptor,
    ) -> Self {
        Self { future, profile, dispatch, terminated: false }
    }
}

impl<Fut, O> Future for ResponseFuture<Fut, O>
where
    Fut: Future<Output = O>,
{
    type Output = ResponseDescriptor;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        let outcome = ready!(this.future.poll(cx));
        *this.terminated = true;

        let profile = this.profile.take().unwrap_or_else(registry::default_profile);
        Poll::Ready((this.dispatch)(&outcome, &*profile))
    }
}

impl<Fut, O> FusedFuture for ResponseFuture<Fut, O>
where
    Fut: FusedFuture<Output = O>,
{
    #[inline]
    fn is_terminated(&self) -> bool {
        self.terminated || self.future.is_terminated()
    }
}

/// Response translation for futures resolving to an [`Outcome`].
///
/// # Examples
///
/// ```
/// use outcome_rail::async_ext::FutureOutcomeExt;
/// use outcome_rail::types::{Error, ErrorType, Outcome};
///
/// async fn cancel_order(id: u64) -> Outcome {
///     if id == 0 {
///         return Error::new("unknown order").with_error_type(ErrorType::NotFound).into();
///     }
///     Outcome::success()
/// }
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let response = cancel_order(0).into_response().await;
/// assert_eq!(response.status().as_u16(), 404);
/// # });
/// ```
pub trait FutureOutcomeExt<T>: Future<Output = Outcome<T>> + Sized {
    /// Translates the payload-less outcome with the registry default profile.
    fn into_response(self) -> ResponseFuture<Self, Outcome<T>>
    where
        Outcome<T>: ResponseExt,
    {
        ResponseFuture::new(self, None, <Outcome<T> as ResponseExt>::to_response_with)
    }

    fn into_response_with(
        self,
        profile: Arc<dyn ResponseProfile>,
    ) -> ResponseFuture<Self, Outcome<T>>
    where
        Outcome<T>: ResponseExt,
    {
        ResponseFuture::new(self, Some(profile), <Outcome<T> as ResponseExt>::to_response_with)
    }

    /// Translates the outcome with its payload as body, using the registry
    /// default profile.
    fn into_value_response(self) -> ResponseFuture<Self, Outcome<T>>
    where
        T: Serialize,
    {
        ResponseFuture::new(self, None, <Outcome<T> as ValueResponseExt>::to_value_response_with)
    }

    fn into_value_response_with(
        self,
        profile: Arc<dyn ResponseProfile>,
    ) -> ResponseFuture<Self, Outcome<T>>
    where
        T: Serialize,
    {
        ResponseFuture::new(
            self,
            Some(profile),
            <Outcome<T> as ValueResponseExt>::to_value_response_with,
        )
    }
}

impl<Fut, T> FutureOutcomeExt<T> for Fut where Fut: Future<Output = Outcome<T>> {}
