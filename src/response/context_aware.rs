//! Profile that enriches problem documents with request and service data.
//!
//! The hosting layer owns the request; this module only reads it, at the
//! moment a failure is translated, through two seams:
//!
//! - [`RequestAccessor`] yields the [`RequestInfo`] of the request being served;
//! - [`ServiceSettings`] yields the service name and type (see [`ServiceInfo`]).
//!
//! # Examples
//!
//! ```
//! use outcome_rail::response::{ContextAwareProfile, RequestInfo, ResultTransformer, ServiceInfo};
//! use outcome_rail::types::{Error, Outcome};
//!
//! let profile = ContextAwareProfile::new(
//!     || {
//!         Some(RequestInfo {
//!             method: "GET".into(),
//!             url: "http://orders.local/orders/7".into(),
//!             path: Some("/orders/7".into()),
//!             request_identifier: "req-1".into(),
//!             ..RequestInfo::default()
//!         })
//!     },
//!     ServiceInfo::new("orders", "api"),
//! );
//!
//! let outcome: Outcome = Error::new("database unavailable").into();
//! let response = ResultTransformer::new().transform(&outcome, &profile);
//! let problem = response.problem_document().unwrap();
//!
//! assert_eq!(response.status().as_u16(), 500);
//! assert_eq!(problem.extension("serviceName").unwrap(), "orders");
//! assert_eq!(problem.extension("endpoint").unwrap(), "/orders/7");
//! assert_eq!(problem.extension("traceId").unwrap(), "req-1");
//! ```

use std::sync::Arc;

use chrono::Local;
use http::header::{CONTENT_TYPE, HOST};
use http::{HeaderMap, Method, Uri};
use serde::Deserialize;

use super::{
    failure_problem, FailureContext, MinimalProfile, ResponseDescriptor, ResponseProfile,
    SuccessContext, ValueSuccessContext,
};

/// Inbound correlation header carrying the caller's request id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";
/// Inbound header carrying the calling system's code.
pub const EXTERNAL_SYSTEM_CODE_HEADER: &str = "x-external-system-code";
/// Inbound header carrying the calling user's code.
pub const EXTERNAL_USER_CODE_HEADER: &str = "x-external-user-code";

/// Request data read by [`ContextAwareProfile`].
#[derive(Debug, Clone, Default)]
pub struct RequestInfo {
    pub method: String,
    /// Full display URL, including scheme and host when known.
    pub url: String,
    pub path: Option<String>,
    pub content_type: Option<String>,
    pub headers: HeaderMap,
    /// Trace id of an externally active trace, if any.
    pub trace_id: Option<String>,
    /// Per-request identifier assigned by the host.
    pub request_identifier: String,
}

impl RequestInfo {
    /// Captures the request line and headers of an `http` request.
    pub fn from_request<B>(
        request: &http::Request<B>,
        request_identifier: impl Into<String>,
    ) -> Self {
        Self::from_head(request.method(), request.uri(), request.headers(), request_identifier)
    }

    /// Same as [`RequestInfo::from_request`] for already split request parts.
    pub fn from_parts(
        parts: &http::request::Parts,
        request_identifier: impl Into<String>,
    ) -> Self {
        Self::from_head(&parts.method, &parts.uri, &parts.headers, request_identifier)
    }

    fn from_head(
        method: &Method,
        uri: &Uri,
        headers: &HeaderMap,
        request_identifier: impl Into<String>,
    ) -> Self {
        let header_text = |name| headers.get(name).and_then(|value| value.to_str().ok());

        let url = match (uri.authority(), header_text(HOST)) {
            (None, Some(host)) => {
                let path_and_query = uri.path_and_query().map_or("/", |pq| pq.as_str());
                format!("{}://{}{}", uri.scheme_str().unwrap_or("http"), host, path_and_query)
            },
            _ => uri.to_string(),
        };

        Self {
            method: method.as_str().to_owned(),
            url,
            path: Some(uri.path().to_owned()).filter(|path| !path.is_empty()),
            content_type: header_text(CONTENT_TYPE).map(str::to_owned),
            headers: headers.clone(),
            trace_id: None,
            request_identifier: request_identifier.into(),
        }
    }

    #[inline]
    pub fn with_trace_id(mut self, trace_id: impl Into<String>) -> Self {
        self.trace_id = Some(trace_id.into());
        self
    }

    /// Value of a header as text; empty when missing or not valid UTF-8.
    pub fn header(&self, name: &str) -> String {
        self.headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_owned()
    }
}

/// Source of the request currently being served.
pub trait RequestAccessor: Send + Sync {
    /// `None` outside of a request.
    fn current_request(&self) -> Option<RequestInfo>;
}

impl<F> RequestAccessor for F
where
    F: Fn() -> Option<RequestInfo> + Send + Sync,
{
    fn current_request(&self) -> Option<RequestInfo> {
        self()
    }
}

/// Host configuration read once per failure translation.
pub trait ServiceSettings: Send + Sync {
    fn service_name(&self) -> String;
    fn service_type(&self) -> String;
}

/// Plain service identity, loadable from host configuration.
///
/// ```
/// use outcome_rail::response::ServiceInfo;
///
/// let info: ServiceInfo = serde_json::from_str(r#"{"name":"orders","type":"api"}"#).unwrap();
/// assert_eq!(info, ServiceInfo::new("orders", "api"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ServiceInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type")]
    pub service_type: String,
}

impl ServiceInfo {
    /// Environment variable holding the service name.
    pub const NAME_VAR: &'static str = "APPLICATION__NAME";
    /// Environment variable holding the service type.
    pub const TYPE_VAR: &'static str = "APPLICATION__TYPE";

    #[inline]
    pub fn new(name: impl Into<String>, service_type: impl Into<String>) -> Self {
        Self { name: name.into(), service_type: service_type.into() }
    }

    /// Reads [`Self::NAME_VAR`] and [`Self::TYPE_VAR`]; missing variables read as empty.
    pub fn from_env() -> Self {
        let read = |key| std::env::var(key).unwrap_or_default();
        Self { name: read(Self::NAME_VAR), service_type: read(Self::TYPE_VAR) }
    }
}

impl ServiceSettings for ServiceInfo {
    fn service_name(&self) -> String {
        self.name.clone()
    }

    fn service_type(&self) -> String {
        self.service_type.clone()
    }
}

/// Profile whose failures carry service and request metadata.
///
/// Status and title follow the classification exactly like [`MinimalProfile`].
/// The problem document additionally holds `serviceName`, `serviceType`,
/// `timestamp`, `traceId`, `requestId`, `systemCode`, `userCode`, `version`,
/// `method`, `url` and, when the request has a path, `endpoint`.
#[derive(Clone)]
pub struct ContextAwareProfile {
    requests: Arc<dyn RequestAccessor>,
    settings: Arc<dyn ServiceSettings>,
}

impl ContextAwareProfile {
    pub fn new<R, S>(requests: R, settings: S) -> Self
    where
        R: RequestAccessor + 'static,
        S: ServiceSettings + 'static,
    {
        Self { requests: Arc::new(requests), settings: Arc::new(settings) }
    }

    /// Builds the profile from already shared collaborators.
    pub fn from_shared(
        requests: Arc<dyn RequestAccessor>,
        settings: Arc<dyn ServiceSettings>,
    ) -> Self {
        Self { requests, settings }
    }
}

impl core::fmt::Debug for ContextAwareProfile {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ContextAwareProfile")
            .field("service_name", &self.settings.service_name())
            .field("service_type", &self.settings.service_type())
            .finish_non_exhaustive()
    }
}

impl ResponseProfile for ContextAwareProfile {
    fn on_success(&self, context: SuccessContext<'_>) -> ResponseDescriptor {
        MinimalProfile.on_success(context)
    }

    fn on_success_value(&self, context: ValueSuccessContext) -> ResponseDescriptor {
        MinimalProfile.on_success_value(context)
    }

    fn on_failure(&self, context: FailureContext<'_>) -> ResponseDescriptor {
        let request = self.requests.current_request().unwrap_or_default();
        let version = api_version(request.content_type.as_deref());
        let trace_id = resolve_trace_id(&request);

        let mut problem = failure_problem(&context)
            .with_extension("serviceName", self.settings.service_name())
            .with_extension("serviceType", self.settings.service_type())
            .with_extension("timestamp", Local::now().to_rfc3339())
            .with_extension("traceId", trace_id)
            .with_extension("requestId", request.header(REQUEST_ID_HEADER))
            .with_extension("systemCode", request.header(EXTERNAL_SYSTEM_CODE_HEADER))
            .with_extension("userCode", request.header(EXTERNAL_USER_CODE_HEADER))
            .with_extension("version", version)
            .with_extension("method", request.method)
            .with_extension("url", request.url);

        if let Some(path) = request.path {
            problem = problem.with_extension("endpoint", path);
        }

        ResponseDescriptor::problem(problem)
    }
}

fn resolve_trace_id(request: &RequestInfo) -> String {
    request
        .trace_id
        .clone()
        .filter(|id| !id.is_empty())
        .or_else(span_trace_id)
        .unwrap_or_else(|| request.request_identifier.clone())
}

#[cfg(feature = "tracing")]
fn span_trace_id() -> Option<String> {
    tracing::Span::current().id().map(|id| format!("{:016x}", id.into_u64()))
}

#[cfg(not(feature = "tracing"))]
fn span_trace_id() -> Option<String> {
    None
}

/// Extracts the API version from a content type such as `application/json; v=2`.
///
/// Returns the value of the last `v=` parameter when it is a dotted number,
/// otherwise an empty string.
///
/// ```
/// use outcome_rail::response::api_version;
///
/// assert_eq!(api_version(Some("application/json; v=2")), "2");
/// assert_eq!(api_version(Some("application/vnd.orders+json;v=1.1")), "1.1");
/// assert_eq!(api_version(Some("application/json; v=3; charset=utf-8")), "3");
/// assert_eq!(api_version(Some("application/json")), "");
/// assert_eq!(api_version(None), "");
/// ```
pub fn api_version(content_type: Option<&str>) -> String {
    let Some(content_type) = content_type else {
        return String::new();
    };

    let candidate = content_type
        .match_indices("v=")
        .filter(|(index, _)| {
            content_type[..*index]
                .chars()
                .next_back()
                .map_or(true, |previous| !previous.is_ascii_alphanumeric())
        })
        .last()
        .map(|(index, _)| {
            let rest = &content_type[index + 2..];
            rest.split([';', ',']).next().unwrap_or(rest).trim()
        });

    match candidate {
        Some(version)
            if version.starts_with(|c: char| c.is_ascii_digit())
                && version.chars().all(|c| c.is_ascii_digit() || c == '.') =>
        {
            version.to_owned()
        },
        _ => String::new(),
    }
}
