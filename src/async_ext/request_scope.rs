//! Task-local storage of the request being served.

use core::future::Future;

use tokio::task::futures::TaskLocalFuture;

use crate::response::{RequestAccessor, RequestInfo};

tokio::task_local! {
    static CURRENT_REQUEST: RequestInfo;
}

/// Scopes a [`RequestInfo`] to a future or a synchronous call.
///
/// ```
/// use outcome_rail::async_ext::RequestScope;
/// use outcome_rail::response::RequestInfo;
///
/// let request = RequestInfo { method: "DELETE".into(), ..RequestInfo::default() };
/// let method = RequestScope::sync_scope(request, || RequestScope::current().unwrap().method);
///
/// assert_eq!(method, "DELETE");
/// assert!(RequestScope::current().is_none());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestScope;

impl RequestScope {
    /// Runs `future` with `request` as the current request.
    pub fn scope<F>(request: RequestInfo, future: F) -> TaskLocalFuture<RequestInfo, F>
    where
        F: Future,
    {
        CURRENT_REQUEST.scope(request, future)
    }

    pub fn sync_scope<R, F>(request: RequestInfo, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        CURRENT_REQUEST.sync_scope(request, f)
    }

    /// The current request; `None` outside of a scope.
    pub fn current() -> Option<RequestInfo> {
        CURRENT_REQUEST.try_with(RequestInfo::clone).ok()
    }
}

/// [`RequestAccessor`] reading [`RequestScope::current`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskLocalRequests;

impl RequestAccessor for TaskLocalRequests {
    fn current_request(&self) -> Option<RequestInfo> {
        RequestScope::current()
    }
}
